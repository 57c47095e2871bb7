use std::f64::consts::PI;

use kinetic_motion_core::{
    angle::angular_distance, calculate_motion_endpoints, interpolate_motion, map_orientation_to_angle,
    map_position_to_angle, normalize_angle_signed, Location, Motion, MotionType, Orientation,
    PropFrame, RotationDirection, Turns,
};

const EPS: f64 = 1e-9;

const TYPES: [MotionType; 5] = [
    MotionType::Pro,
    MotionType::Anti,
    MotionType::Static,
    MotionType::Dash,
    MotionType::Float,
];

const ORIENTATIONS: [Orientation; 4] = [
    Orientation::In,
    Orientation::Out,
    Orientation::Clock,
    Orientation::Counter,
];

fn assert_same_angle(a: f64, b: f64, what: &str) {
    assert!(
        angular_distance(a, b) <= EPS,
        "{what}: left={a} right={b} (mod 2π)"
    );
}

/// Every combination of type, locations, start orientation and a few turn
/// counts in both directions.
fn all_motions() -> Vec<Motion> {
    let turns = [
        Turns::Count(0.0),
        Turns::Count(1.0),
        Turns::Count(1.5),
        Turns::Count(3.0),
        Turns::Float,
    ];
    let mut out = Vec::new();
    for kind in TYPES {
        for start in Location::ALL {
            for end in Location::ALL {
                for ori in ORIENTATIONS {
                    for t in turns {
                        for dir in [RotationDirection::Cw, RotationDirection::Ccw] {
                            out.push(
                                Motion::new(kind, start, end, ori, Orientation::In)
                                    .with_turns(t)
                                    .with_direction(dir),
                            );
                        }
                    }
                }
            }
        }
    }
    out
}

#[test]
fn progress_zero_matches_start_and_one_matches_target() {
    for m in all_motions() {
        let ep = calculate_motion_endpoints(&m);
        let f0 = interpolate_motion(&m, 0.0);
        let f1 = interpolate_motion(&m, 1.0);
        assert_same_angle(f0.center_path_angle(), ep.start_center_angle, "start center");
        assert_same_angle(f0.staff_rotation_angle(), ep.start_staff_angle, "start staff");
        assert_same_angle(f1.center_path_angle(), ep.target_center_angle, "target center");
        assert_same_angle(f1.staff_rotation_angle(), ep.target_staff_angle, "target staff");
    }
}

#[test]
fn non_dash_frames_start_exactly_at_start() {
    for m in all_motions()
        .into_iter()
        .filter(|m| m.motion_type != MotionType::Dash)
    {
        let ep = calculate_motion_endpoints(&m);
        let f0 = interpolate_motion(&m, 0.0);
        assert_eq!(f0.center_path_angle(), ep.start_center_angle);
        assert_eq!(f0.staff_rotation_angle(), ep.start_staff_angle);
        assert!(f0.position().is_none());
    }
}

#[test]
fn integer_turns_rotate_exactly_n_half_revolutions() {
    for n in 1..=4u32 {
        for dir in [RotationDirection::Cw, RotationDirection::Ccw] {
            let expected = dir.sign() * (n as f64) * PI;
            for loc in Location::ALL {
                // Static and dash: turns replace the orientation change.
                for kind in [MotionType::Static, MotionType::Dash] {
                    let m = Motion::new(kind, loc, loc, Orientation::In, Orientation::Out)
                        .with_turns(Turns::Count(n as f64))
                        .with_direction(dir);
                    assert_eq!(calculate_motion_endpoints(&m).staff_rotation_delta, expected);
                }
                // Pro and anti without center travel rotate by turns alone.
                for kind in [MotionType::Pro, MotionType::Anti] {
                    let m = Motion::new(kind, loc, loc, Orientation::In, Orientation::In)
                        .with_turns(Turns::Count(n as f64))
                        .with_direction(dir);
                    assert_eq!(calculate_motion_endpoints(&m).staff_rotation_delta, expected);
                }
            }
        }
    }
}

#[test]
fn pro_and_anti_add_turns_on_top_of_center_travel() {
    for start in Location::ALL {
        for end in Location::ALL {
            let travel = normalize_angle_signed(map_position_to_angle(end) - map_position_to_angle(start));
            for dir in [RotationDirection::Cw, RotationDirection::Ccw] {
                let pro = Motion::new(MotionType::Pro, start, end, Orientation::In, Orientation::In)
                    .with_turns(Turns::Count(2.0))
                    .with_direction(dir);
                let anti = Motion {
                    motion_type: MotionType::Anti,
                    ..pro.clone()
                };
                let spin = dir.sign() * 2.0 * PI;
                let d_pro = calculate_motion_endpoints(&pro).staff_rotation_delta;
                let d_anti = calculate_motion_endpoints(&anti).staff_rotation_delta;
                assert!((d_pro - (travel + spin)).abs() <= EPS);
                assert!((d_anti - (-travel + spin)).abs() <= EPS);
            }
        }
    }
}

#[test]
fn pro_north_to_south_one_clockwise_turn() {
    let m = Motion::new(
        MotionType::Pro,
        Location::N,
        Location::S,
        Orientation::In,
        Orientation::In,
    )
    .with_turns(Turns::Count(1.0))
    .with_direction(RotationDirection::Cw);
    let ep = calculate_motion_endpoints(&m);

    let north = map_position_to_angle(Location::N);
    assert_eq!(ep.start_staff_angle, map_orientation_to_angle(Orientation::In, north));
    assert!(ep.staff_rotation_delta.abs() >= PI);
    // Half a revolution of travel plus half a revolution of spin.
    assert!((ep.staff_rotation_delta - 2.0 * PI).abs() <= EPS);
    assert_same_angle(ep.target_staff_angle, ep.start_staff_angle, "full revolution");
}

#[test]
fn float_never_rotates() {
    for m in all_motions() {
        let m = Motion {
            motion_type: MotionType::Float,
            ..m
        };
        let ep = calculate_motion_endpoints(&m);
        assert_eq!(ep.staff_rotation_delta, 0.0);
        assert_same_angle(ep.target_staff_angle, ep.start_staff_angle, "float target");
    }
}

#[test]
fn dash_midpoint_lies_on_the_chord() {
    for start in Location::ALL {
        for end in Location::ALL {
            let m = Motion::new(MotionType::Dash, start, end, Orientation::In, Orientation::In);
            let ep = calculate_motion_endpoints(&m);
            let frame = interpolate_motion(&m, 0.5);
            let PropFrame::Cartesian { x, y, .. } = frame else {
                panic!("dash must produce a cartesian frame");
            };
            let mx = (ep.start_center_angle.cos() + ep.target_center_angle.cos()) / 2.0;
            let my = (ep.start_center_angle.sin() + ep.target_center_angle.sin()) / 2.0;
            assert!((x - mx).abs() <= EPS && (y - my).abs() <= EPS);
            if start != end {
                // Strictly inside the unit circle, not on the arc.
                assert!((x * x + y * y).sqrt() < 1.0 - 1e-6);
            }
        }
    }
}

#[test]
fn one_and_a_half_turns_never_takes_the_short_way() {
    let m = Motion::new(
        MotionType::Static,
        Location::E,
        Location::E,
        Orientation::Out,
        Orientation::Out,
    )
    .with_turns(Turns::Count(1.5))
    .with_direction(RotationDirection::Cw);
    let ep = calculate_motion_endpoints(&m);
    assert_eq!(ep.staff_rotation_delta, 1.5 * PI);

    // Sample the sweep: unwrapped staff angle must grow monotonically to +270°.
    let mut prev = ep.start_staff_angle;
    let mut unwrapped = 0.0;
    for step in 1..=20 {
        let angle = interpolate_motion(&m, step as f64 / 20.0).staff_rotation_angle();
        let d = normalize_angle_signed(angle - prev);
        assert!(d > 0.0, "step {step} went backwards");
        unwrapped += d;
        prev = angle;
    }
    assert!((unwrapped - 1.5 * PI).abs() <= 1e-6);
}
