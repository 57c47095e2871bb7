//! Per-motion-type staff rotation rules.
//!
//! Every rule produces the cumulative `staff_rotation_delta` first and derives
//! the normalized target from it. The delta is what animation interpolates, so
//! 1.5 turns sweeps a full +270° instead of a shortest-path -90°.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::angle::{map_orientation_to_angle, normalize_angle_positive, normalize_angle_signed};
use crate::data::{Orientation, RotationDirection, Turns};

/// Radians per notated turn (half a revolution).
pub const TURN_ANGLE: f64 = PI;

/// Orientation changes smaller than this (radians) on a static motion are
/// treated as float noise and the staff holds still.
pub const STATIC_DEAD_ZONE: f64 = 0.1;

/// Result of a rotation rule.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RotationOutcome {
    /// Normalized staff angle at the end of the beat, in `[0, 2π)`.
    pub target_staff_angle: f64,
    /// Unbounded signed rotation over the beat.
    pub staff_rotation_delta: f64,
}

impl RotationOutcome {
    #[inline]
    pub fn from_delta(start_staff_angle: f64, staff_rotation_delta: f64) -> Self {
        Self {
            target_staff_angle: normalize_angle_positive(start_staff_angle + staff_rotation_delta),
            staff_rotation_delta,
        }
    }

    #[inline]
    pub fn hold(start_staff_angle: f64) -> Self {
        Self::from_delta(start_staff_angle, 0.0)
    }
}

/// Rotation contributed by the turn count alone.
#[inline]
pub fn turn_rotation(direction: RotationDirection, turns: Turns) -> f64 {
    direction.sign() * turns.value() * TURN_ANGLE
}

/// Pro: the staff spins with the direction of center travel.
pub fn pro_rotation(
    start_center_angle: f64,
    target_center_angle: f64,
    start_staff_angle: f64,
    direction: RotationDirection,
    turns: Turns,
) -> RotationOutcome {
    let center_movement = normalize_angle_signed(target_center_angle - start_center_angle);
    let delta = center_movement + turn_rotation(direction, turns);
    RotationOutcome::from_delta(start_staff_angle, delta)
}

/// Anti: the staff spins against the direction of center travel.
pub fn anti_rotation(
    start_center_angle: f64,
    target_center_angle: f64,
    start_staff_angle: f64,
    direction: RotationDirection,
    turns: Turns,
) -> RotationOutcome {
    let center_movement = normalize_angle_signed(target_center_angle - start_center_angle);
    let delta = -center_movement + turn_rotation(direction, turns);
    RotationOutcome::from_delta(start_staff_angle, delta)
}

/// Static: no center travel. Explicit turns win over the end orientation.
pub fn static_rotation(
    target_center_angle: f64,
    start_staff_angle: f64,
    end_orientation: Orientation,
    direction: RotationDirection,
    turns: Turns,
) -> RotationOutcome {
    if turns.is_positive() && direction != RotationDirection::NoRotation {
        return RotationOutcome::from_delta(start_staff_angle, turn_rotation(direction, turns));
    }

    let candidate = map_orientation_to_angle(end_orientation, target_center_angle);
    let diff = normalize_angle_signed(candidate - start_staff_angle);
    if diff.abs() > STATIC_DEAD_ZONE {
        RotationOutcome::from_delta(start_staff_angle, diff)
    } else {
        RotationOutcome::hold(start_staff_angle)
    }
}

/// Dash: straight-line travel. Turns replace the orientation change entirely.
pub fn dash_rotation(
    target_center_angle: f64,
    start_staff_angle: f64,
    end_orientation: Orientation,
    direction: RotationDirection,
    turns: Turns,
) -> RotationOutcome {
    if turns.is_positive() {
        return RotationOutcome::from_delta(start_staff_angle, turn_rotation(direction, turns));
    }

    let base = match end_orientation {
        Orientation::In => normalize_angle_positive(target_center_angle + PI),
        Orientation::Out => target_center_angle,
        Orientation::Clock | Orientation::Counter => start_staff_angle,
    };
    RotationOutcome::from_delta(
        start_staff_angle,
        normalize_angle_signed(base - start_staff_angle),
    )
}

/// Float: the staff keeps its starting angle.
#[inline]
pub fn float_rotation(start_staff_angle: f64) -> RotationOutcome {
    RotationOutcome::hold(start_staff_angle)
}
