//! Export configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::collaborators::ExportOptions;
use crate::error::ExportError;

/// Canvas, encoder and timing settings for an export.
///
/// The settle delays are a heuristic: rendering is asynchronous and reports no
/// completion, so the loop waits a fixed time before each capture.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ExportConfig {
    pub width: u32,
    pub height: u32,
    pub fps: u32,
    /// Encoder quality knob, passed through untouched.
    pub quality: u32,
    pub filename: String,
    pub frames_per_beat: u32,

    /// Wait after rewinding to beat 0.
    pub rewind_settle_ms: u64,
    /// Wait after each jump before capturing.
    pub frame_settle_ms: u64,
    /// Extra wait inside the capture step.
    pub capture_delay_ms: u64,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            width: 500,
            height: 500,
            fps: 30,
            quality: 10,
            filename: "sequence.gif".to_string(),
            frames_per_beat: 30,
            rewind_settle_ms: 100,
            frame_settle_ms: 50,
            capture_delay_ms: 10,
        }
    }
}

impl ExportConfig {
    /// Parse and validate a JSON config. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ExportError> {
        let cfg: Self = serde_json::from_str(json)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<(), ExportError> {
        let invalid = |reason: &str| {
            Err(ExportError::InvalidConfig {
                reason: reason.to_string(),
            })
        };
        if self.width == 0 || self.height == 0 {
            return invalid("canvas width and height must be non-zero");
        }
        if self.fps == 0 {
            return invalid("fps must be non-zero");
        }
        if self.frames_per_beat == 0 {
            return invalid("framesPerBeat must be non-zero");
        }
        Ok(())
    }

    pub fn rewind_settle(&self) -> Duration {
        Duration::from_millis(self.rewind_settle_ms)
    }

    pub fn frame_settle(&self) -> Duration {
        Duration::from_millis(self.frame_settle_ms)
    }

    pub fn capture_delay(&self) -> Duration {
        Duration::from_millis(self.capture_delay_ms)
    }

    /// Display time of one encoded frame.
    pub fn frame_delay_ms(&self) -> u32 {
        (1000.0 / f64::from(self.fps.max(1))).round() as u32
    }

    pub fn export_options(&self) -> ExportOptions {
        ExportOptions {
            fps: self.fps,
            quality: self.quality,
            filename: self.filename.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_uses_defaults() {
        assert_eq!(ExportConfig::from_json("{}").unwrap(), ExportConfig::default());
    }

    #[test]
    fn partial_document_overrides_fields() {
        let cfg = ExportConfig::from_json(r#"{"fps": 24, "framesPerBeat": 12}"#).unwrap();
        assert_eq!(cfg.fps, 24);
        assert_eq!(cfg.frames_per_beat, 12);
        assert_eq!(cfg.width, 500);
        assert_eq!(cfg.frame_delay_ms(), 42);
    }

    #[test]
    fn zero_rates_are_rejected() {
        let err = ExportConfig::from_json(r#"{"fps": 0}"#).unwrap_err();
        assert!(matches!(err, ExportError::InvalidConfig { .. }));
        let err = ExportConfig::from_json(r#"{"framesPerBeat": 0}"#).unwrap_err();
        assert!(matches!(err, ExportError::InvalidConfig { .. }));
        let err = ExportConfig::from_json(r#"{"width": 0}"#).unwrap_err();
        assert!(matches!(err, ExportError::InvalidConfig { .. }));
    }

    #[test]
    fn malformed_json_is_a_serialization_error() {
        let err = ExportConfig::from_json("{").unwrap_err();
        assert_eq!(err.category(), "serialization");
    }
}
