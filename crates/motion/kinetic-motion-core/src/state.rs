//! Per-prop render state held between frames.
//!
//! Written by a single animation loop and read by the renderer on the same
//! thread. There is no internal synchronization; sharing across threads needs
//! an external snapshot swap.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::data::PropId;
use crate::interp::{BeatFrame, PropFrame};

/// Instantaneous render state of one prop.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropState {
    pub center_path_angle: f64,
    pub staff_rotation_angle: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
}

impl PropState {
    pub fn at_rest(center_path_angle: f64, staff_rotation_angle: f64) -> Self {
        Self {
            center_path_angle,
            staff_rotation_angle,
            x: None,
            y: None,
        }
    }

    /// Apply one frame. Angular frames clear any coordinates left over from a
    /// previous dash frame.
    pub fn apply(&mut self, frame: &PropFrame) {
        self.center_path_angle = frame.center_path_angle();
        self.staff_rotation_angle = frame.staff_rotation_angle();
        match frame.position() {
            Some((x, y)) => {
                self.x = Some(x);
                self.y = Some(y);
            }
            None => {
                self.x = None;
                self.y = None;
            }
        }
    }
}

/// Snapshot of both props.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PropStates {
    pub first: PropState,
    pub second: PropState,
}

impl Default for PropStates {
    fn default() -> Self {
        Self {
            first: PropState::at_rest(0.0, PI),
            second: PropState::at_rest(PI, 0.0),
        }
    }
}

/// Owns the two prop state slots.
#[derive(Debug, Default)]
pub struct AnimationStateManager {
    states: PropStates,
}

impl AnimationStateManager {
    /// Starts in the opposed rest pose.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update_state(&mut self, prop: PropId, frame: &PropFrame) {
        self.slot_mut(prop).apply(frame);
    }

    pub fn apply_frame(&mut self, frame: &BeatFrame) {
        self.states.first.apply(&frame.first);
        self.states.second.apply(&frame.second);
    }

    /// Opposed rest pose: first at 0, second at π, both staffs pointing in.
    pub fn reset(&mut self) {
        self.states = PropStates::default();
    }

    pub fn state(&self) -> PropStates {
        self.states
    }

    pub fn prop_state(&self, prop: PropId) -> PropState {
        match prop {
            PropId::First => self.states.first,
            PropId::Second => self.states.second,
        }
    }

    fn slot_mut(&mut self, prop: PropId) -> &mut PropState {
        match prop {
            PropId::First => &mut self.states.first,
            PropId::Second => &mut self.states.second,
        }
    }
}
