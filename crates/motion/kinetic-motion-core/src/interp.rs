//! Prop interpolation for a beat.
//!
//! - Center path: shortest arc for every type except dash, which travels the
//!   straight chord through the grid center.
//! - Staff rotation: `start + delta * progress`, never shortest-arc, so
//!   multi-turn rotation stays monotonic.

use serde::{Deserialize, Serialize};

use crate::angle::{lerp_angle, normalize_angle_positive};
use crate::data::{BeatData, Motion, MotionType, PropId};
use crate::endpoints::{calculate_motion_endpoints, MotionEndpoints};
use crate::error::MotionError;

/// Render state of one prop for one frame.
///
/// Dash frames carry the Cartesian point on the unit grid; every other motion
/// is purely angular and carries no coordinates at all.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase", rename_all_fields = "camelCase")]
pub enum PropFrame {
    Angular {
        center_path_angle: f64,
        staff_rotation_angle: f64,
    },
    Cartesian {
        center_path_angle: f64,
        staff_rotation_angle: f64,
        x: f64,
        y: f64,
    },
}

impl PropFrame {
    #[inline]
    pub fn center_path_angle(&self) -> f64 {
        match self {
            Self::Angular {
                center_path_angle, ..
            }
            | Self::Cartesian {
                center_path_angle, ..
            } => *center_path_angle,
        }
    }

    #[inline]
    pub fn staff_rotation_angle(&self) -> f64 {
        match self {
            Self::Angular {
                staff_rotation_angle,
                ..
            }
            | Self::Cartesian {
                staff_rotation_angle,
                ..
            } => *staff_rotation_angle,
        }
    }

    /// Unit-grid coordinates, present only for dash frames.
    #[inline]
    pub fn position(&self) -> Option<(f64, f64)> {
        match self {
            Self::Angular { .. } => None,
            Self::Cartesian { x, y, .. } => Some((*x, *y)),
        }
    }
}

/// Interpolated frames for both props of a beat.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BeatFrame {
    pub first: PropFrame,
    pub second: PropFrame,
}

impl BeatFrame {
    pub fn get(&self, prop: PropId) -> &PropFrame {
        match prop {
            PropId::First => &self.first,
            PropId::Second => &self.second,
        }
    }
}

/// Frame for precomputed endpoints at `progress`.
pub fn interpolate_endpoints(
    endpoints: &MotionEndpoints,
    motion_type: MotionType,
    progress: f64,
) -> PropFrame {
    let t = progress.clamp(0.0, 1.0);
    let staff_rotation_angle =
        normalize_angle_positive(endpoints.start_staff_angle + endpoints.staff_rotation_delta * t);

    match motion_type {
        MotionType::Dash => {
            let (sx, sy) = (
                endpoints.start_center_angle.cos(),
                endpoints.start_center_angle.sin(),
            );
            let (tx, ty) = (
                endpoints.target_center_angle.cos(),
                endpoints.target_center_angle.sin(),
            );
            let x = sx + (tx - sx) * t;
            let y = sy + (ty - sy) * t;
            PropFrame::Cartesian {
                center_path_angle: normalize_angle_positive(y.atan2(x)),
                staff_rotation_angle,
                x,
                y,
            }
        }
        _ => PropFrame::Angular {
            center_path_angle: lerp_angle(
                endpoints.start_center_angle,
                endpoints.target_center_angle,
                t,
            ),
            staff_rotation_angle,
        },
    }
}

/// Frame for a single motion at `progress`.
#[inline]
pub fn interpolate_motion(motion: &Motion, progress: f64) -> PropFrame {
    interpolate_endpoints(
        &calculate_motion_endpoints(motion),
        motion.motion_type,
        progress,
    )
}

/// Frames for both props of `beat` at `progress` (clamped to `[0, 1]`).
///
/// Both motions must be present; a missing one fails the whole call.
pub fn interpolate(beat: &BeatData, progress: f64) -> Result<BeatFrame, MotionError> {
    let first = beat.require(PropId::First)?;
    let second = beat.require(PropId::Second)?;
    Ok(BeatFrame {
        first: interpolate_motion(first, progress),
        second: interpolate_motion(second, progress),
    })
}
