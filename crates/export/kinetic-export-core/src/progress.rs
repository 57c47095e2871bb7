//! Progress events emitted while an export runs.

use serde::{Deserialize, Serialize};

/// Progress events reported to the caller's sink during an export.
///
/// Serialized with a `stage` tag, e.g.
/// `{"stage":"capturing","progress":0.5,"currentFrame":4,"totalFrames":8}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "stage", rename_all = "lowercase", rename_all_fields = "camelCase")]
pub enum ExportProgress {
    Capturing {
        /// Fraction of frames captured, `(0, 1]`.
        progress: f64,
        /// 1-based index of the frame just captured.
        current_frame: u32,
        total_frames: u32,
    },
    Encoding,
    Complete,
    Error {
        error: String,
    },
}

impl ExportProgress {
    pub fn stage(&self) -> &'static str {
        match self {
            Self::Capturing { .. } => "capturing",
            Self::Encoding => "encoding",
            Self::Complete => "complete",
            Self::Error { .. } => "error",
        }
    }
}
