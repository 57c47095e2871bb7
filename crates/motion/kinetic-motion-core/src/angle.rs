//! Angle helpers for the notation grid.
//!
//! Angles are radians in screen space (y grows downward), so east is `0`,
//! south is `π/2` and positive deltas turn clockwise on screen. None of these
//! functions know about motion types.

use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI, TAU};

use crate::data::{Location, Orientation};

/// Canonical center-path angle of a grid location, in `[0, 2π)`.
#[inline]
pub fn map_position_to_angle(location: Location) -> f64 {
    match location {
        Location::E => 0.0,
        Location::Se => FRAC_PI_4,
        Location::S => FRAC_PI_2,
        Location::Sw => 3.0 * FRAC_PI_4,
        Location::W => PI,
        Location::Nw => 5.0 * FRAC_PI_4,
        Location::N => 3.0 * FRAC_PI_2,
        Location::Ne => 7.0 * FRAC_PI_4,
    }
}

/// Staff angle for `orientation` of a prop sitting at `reference_center_angle`.
#[inline]
pub fn map_orientation_to_angle(orientation: Orientation, reference_center_angle: f64) -> f64 {
    let raw = match orientation {
        Orientation::In => reference_center_angle + PI,
        Orientation::Out => reference_center_angle,
        Orientation::Clock => reference_center_angle + FRAC_PI_2,
        Orientation::Counter => reference_center_angle - FRAC_PI_2,
    };
    normalize_angle_positive(raw)
}

/// Wrap into `(-π, π]`.
#[inline]
pub fn normalize_angle_signed(angle: f64) -> f64 {
    let wrapped = normalize_angle_positive(angle);
    if wrapped > PI {
        wrapped - TAU
    } else {
        wrapped
    }
}

/// Wrap into `[0, 2π)`.
#[inline]
pub fn normalize_angle_positive(angle: f64) -> f64 {
    let wrapped = angle.rem_euclid(TAU);
    // rem_euclid can round up to exactly TAU for tiny negative inputs
    if wrapped >= TAU {
        0.0
    } else {
        wrapped
    }
}

/// Interpolate from `a` to `b` along the shorter arc.
#[inline]
pub fn lerp_angle(a: f64, b: f64, t: f64) -> f64 {
    let delta = normalize_angle_signed(b - a);
    normalize_angle_positive(a + delta * t)
}

/// Smallest absolute angular distance between two angles, in `[0, π]`.
#[inline]
pub fn angular_distance(a: f64, b: f64) -> f64 {
    normalize_angle_signed(b - a).abs()
}
