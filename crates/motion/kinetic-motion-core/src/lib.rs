//! Kinetic Motion Core
//!
//! Deterministic angle math for two-prop kinetic notation. A beat describes how
//! each prop travels between grid positions; this crate turns that into start
//! and target angles, cumulative staff rotation, and per-frame interpolated
//! poses for a renderer.
//!
//! Pipeline: [`Motion`] → [`calculate_motion_endpoints`] → [`interpolate`] →
//! [`AnimationStateManager`].

pub mod angle;
pub mod data;
pub mod endpoints;
pub mod error;
pub mod interp;
pub mod motion;
pub mod sequence;
pub mod state;

// Re-exports for consumers (renderers, exporters)
pub use angle::{
    lerp_angle, map_orientation_to_angle, map_position_to_angle, normalize_angle_positive,
    normalize_angle_signed,
};
pub use data::{
    BeatData, Location, Motion, MotionType, Orientation, PropId, RotationDirection, Turns,
};
pub use endpoints::{calculate_endpoint_staff_angle, calculate_motion_endpoints, MotionEndpoints};
pub use error::MotionError;
pub use interp::{interpolate, interpolate_motion, BeatFrame, PropFrame};
pub use motion::{RotationOutcome, STATIC_DEAD_ZONE, TURN_ANGLE};
pub use sequence::{parse_sequence_json, Sequence, SequencePlayer};
pub use state::{AnimationStateManager, PropState, PropStates};
