//! Error types for sequence export.

use serde::{Deserialize, Serialize};

/// Errors surfaced by the export orchestrator.
///
/// Collaborator failures arrive as `anyhow::Error` and are flattened into the
/// stage-specific variant with the full context chain as `reason`.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum ExportError {
    /// A second export was started while one is active.
    #[error("An export is already in progress")]
    AlreadyInProgress,

    /// The export was cancelled by the caller. Not a failure.
    #[error("Export cancelled")]
    Cancelled,

    /// Export configuration is unusable.
    #[error("Invalid export config: {reason}")]
    InvalidConfig { reason: String },

    /// Export request is unusable (e.g. nothing to capture).
    #[error("Invalid export request: {reason}")]
    InvalidRequest { reason: String },

    /// Playback controller rejected a pause, seek or restore.
    #[error("Playback controller failed: {reason}")]
    Playback { reason: String },

    /// Render surface could not produce a frame.
    #[error("Frame capture failed: {reason}")]
    Capture { reason: String },

    /// Frame encoder could not be created, accept a frame or finish.
    #[error("Encoder failed: {reason}")]
    Encoder { reason: String },

    /// Serialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },
}

impl ExportError {
    pub fn playback(err: anyhow::Error) -> Self {
        Self::Playback {
            reason: format!("{err:#}"),
        }
    }

    pub fn capture(err: anyhow::Error) -> Self {
        Self::Capture {
            reason: format!("{err:#}"),
        }
    }

    pub fn encoder(err: anyhow::Error) -> Self {
        Self::Encoder {
            reason: format!("{err:#}"),
        }
    }

    #[inline]
    pub fn is_cancellation(&self) -> bool {
        matches!(self, Self::Cancelled)
    }

    /// Get error category for logging
    #[inline]
    pub fn category(&self) -> &'static str {
        match self {
            Self::AlreadyInProgress | Self::Cancelled => "lifecycle",
            Self::InvalidConfig { .. } | Self::InvalidRequest { .. } => "validation",
            Self::Playback { .. } | Self::Capture { .. } | Self::Encoder { .. } => "collaborator",
            Self::SerializationError { .. } => "serialization",
        }
    }
}

impl From<serde_json::Error> for ExportError {
    fn from(err: serde_json::Error) -> Self {
        Self::SerializationError {
            reason: err.to_string(),
        }
    }
}
