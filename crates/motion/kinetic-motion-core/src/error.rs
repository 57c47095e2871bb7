//! Error types for motion and interpolation math.

use serde::{Deserialize, Serialize};

use crate::data::PropId;

/// Errors raised while parsing motion data or interpolating a beat.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum MotionError {
    /// A beat is missing the motion for one of its props.
    #[error("Beat {beat} has no motion for the {prop} prop")]
    MissingMotion { beat: u32, prop: PropId },

    /// Location string is not one of the canonical grid positions.
    #[error("Unknown grid location: {value}")]
    UnknownLocation { value: String },

    /// Orientation string is not recognised.
    #[error("Unknown orientation: {value}")]
    UnknownOrientation { value: String },

    /// Turn count is neither a number nor the float placeholder.
    #[error("Invalid turns value: {value}")]
    InvalidTurns { value: String },

    /// A sequence operation was requested on a sequence with no beats.
    #[error("Sequence has no beats")]
    EmptySequence,

    /// Serialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },
}

impl MotionError {
    /// Get error category for logging
    #[inline]
    pub fn category(&self) -> &'static str {
        match self {
            Self::MissingMotion { .. } | Self::EmptySequence => "precondition",
            Self::UnknownLocation { .. }
            | Self::UnknownOrientation { .. }
            | Self::InvalidTurns { .. } => "validation",
            Self::SerializationError { .. } => "serialization",
        }
    }
}

impl From<serde_json::Error> for MotionError {
    fn from(err: serde_json::Error) -> Self {
        Self::SerializationError {
            reason: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_motion_names_beat_and_prop() {
        let err = MotionError::MissingMotion {
            beat: 4,
            prop: PropId::Second,
        };
        let msg = err.to_string();
        assert!(msg.contains('4'));
        assert!(msg.contains("second"));
        assert_eq!(err.category(), "precondition");
    }

    #[test]
    fn json_error_converts_to_serialization() {
        let err: MotionError = serde_json::from_str::<u32>("nope").unwrap_err().into();
        assert_eq!(err.category(), "serialization");
    }
}
