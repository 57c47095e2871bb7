//! Endpoint calculation: the complete start/target angle record of a motion.

use serde::{Deserialize, Serialize};

use crate::angle::{map_orientation_to_angle, map_position_to_angle};
use crate::data::{Motion, MotionType, RotationDirection};
use crate::motion::{
    anti_rotation, dash_rotation, float_rotation, pro_rotation, static_rotation, RotationOutcome,
};

/// Start and target angles for one motion plus the cumulative staff rotation
/// that drives interpolation between them.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MotionEndpoints {
    pub start_center_angle: f64,
    pub start_staff_angle: f64,
    pub target_center_angle: f64,
    pub target_staff_angle: f64,
    pub staff_rotation_delta: f64,
    pub rotation_direction: RotationDirection,
}

/// Compute endpoints for `motion`. Always recomputed; nothing is cached.
///
/// Unknown motion types keep both center and staff at their start angles and
/// log a warning
/// so a malformed beat freezes visually instead of breaking the render loop.
pub fn calculate_motion_endpoints(motion: &Motion) -> MotionEndpoints {
    let start_center_angle = map_position_to_angle(motion.start_location);
    let mut target_center_angle = map_position_to_angle(motion.end_location);
    let start_staff_angle = map_orientation_to_angle(motion.start_orientation, start_center_angle);
    let direction = motion.effective_direction();

    let outcome = match motion.motion_type {
        MotionType::Pro => pro_rotation(
            start_center_angle,
            target_center_angle,
            start_staff_angle,
            direction,
            motion.turns,
        ),
        MotionType::Anti => anti_rotation(
            start_center_angle,
            target_center_angle,
            start_staff_angle,
            direction,
            motion.turns,
        ),
        MotionType::Static => static_rotation(
            target_center_angle,
            start_staff_angle,
            motion.end_orientation,
            direction,
            motion.turns,
        ),
        MotionType::Dash => dash_rotation(
            target_center_angle,
            start_staff_angle,
            motion.end_orientation,
            direction,
            motion.turns,
        ),
        MotionType::Float => float_rotation(start_staff_angle),
        MotionType::Unknown => {
            log::warn!(
                "unrecognized motion type ({:?} -> {:?}); holding prop at its start",
                motion.start_location,
                motion.end_location
            );
            target_center_angle = start_center_angle;
            RotationOutcome::hold(start_staff_angle)
        }
    };

    MotionEndpoints {
        start_center_angle,
        start_staff_angle,
        target_center_angle,
        target_staff_angle: outcome.target_staff_angle,
        staff_rotation_delta: outcome.staff_rotation_delta,
        rotation_direction: direction,
    }
}

/// Target staff angle of `motion` only.
#[inline]
pub fn calculate_endpoint_staff_angle(motion: &Motion) -> f64 {
    calculate_motion_endpoints(motion).target_staff_angle
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::angle::angular_distance;
    use crate::data::{Location, Orientation, Turns};
    use crate::interp::interpolate_motion;
    use std::f64::consts::{PI, TAU};

    fn motion(kind: MotionType, start: Location, end: Location) -> Motion {
        Motion::new(kind, start, end, Orientation::In, Orientation::In)
    }

    #[test]
    fn center_angles_are_normalized() {
        for kind in [
            MotionType::Pro,
            MotionType::Anti,
            MotionType::Static,
            MotionType::Dash,
            MotionType::Float,
        ] {
            for start in Location::ALL {
                for end in Location::ALL {
                    let ep = calculate_motion_endpoints(&motion(kind, start, end));
                    assert!((0.0..TAU).contains(&ep.start_center_angle));
                    assert!((0.0..TAU).contains(&ep.target_center_angle));
                    assert!((0.0..TAU).contains(&ep.target_staff_angle));
                }
            }
        }
    }

    #[test]
    fn unknown_type_holds_start() {
        let m = motion(MotionType::Unknown, Location::N, Location::E)
            .with_turns(Turns::Count(2.0))
            .with_direction(RotationDirection::Cw);
        let ep = calculate_motion_endpoints(&m);
        assert_eq!(ep.staff_rotation_delta, 0.0);
        assert!(angular_distance(ep.target_staff_angle, ep.start_staff_angle) < 1e-12);
        assert_eq!(ep.target_center_angle, ep.start_center_angle);
        assert_eq!(ep.rotation_direction, RotationDirection::Cw);
    }

    #[test]
    fn unknown_type_does_not_travel() {
        let m = motion(MotionType::Unknown, Location::N, Location::S);
        let ep = calculate_motion_endpoints(&m);
        assert_eq!(ep.target_center_angle, ep.start_center_angle);
        for step in 0..=10 {
            let frame = interpolate_motion(&m, step as f64 / 10.0);
            assert!(
                angular_distance(frame.center_path_angle(), ep.start_center_angle) < 1e-12,
                "step {step}"
            );
            assert!(angular_distance(frame.staff_rotation_angle(), ep.start_staff_angle) < 1e-12);
        }
    }

    #[test]
    fn staff_angle_shortcut_matches_endpoints() {
        let m = motion(MotionType::Anti, Location::W, Location::N).with_turns(Turns::Count(1.0));
        assert_eq!(
            calculate_endpoint_staff_angle(&m),
            calculate_motion_endpoints(&m).target_staff_angle
        );
    }

    #[test]
    fn float_always_holds() {
        let m = motion(MotionType::Float, Location::S, Location::W)
            .with_turns(Turns::Float)
            .with_direction(RotationDirection::Ccw);
        let ep = calculate_motion_endpoints(&m);
        assert_eq!(ep.staff_rotation_delta, 0.0);
        assert!(angular_distance(ep.target_staff_angle, ep.start_staff_angle) < 1e-12);
        // Center still travels for float motions.
        assert!((ep.target_center_angle - PI).abs() < 1e-12);
    }
}
