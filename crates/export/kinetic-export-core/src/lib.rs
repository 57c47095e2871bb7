//! kinetic-export
//!
//! Exports a full playback loop of a kinetic sequence as encoded frames. The
//! orchestrator steers an external playback controller beat by beat, waits
//! for the renderer to settle, captures a frame and hands it to an encoder.
//!
//! The renderer, encoder and UI live outside this crate; see [`collaborators`]
//! for the interfaces they implement. [`kinetic_motion_core::SequencePlayer`]
//! implements [`PlaybackController`] for headless exports.

pub mod collaborators;
pub mod config;
pub mod error;
pub mod orchestrator;
pub mod playback;
pub mod progress;

pub use crate::collaborators::{
    ExportOptions, ExporterFactory, FrameBuffer, ManualExporter, PlaybackController,
    RenderSurface,
};
pub use crate::config::ExportConfig;
pub use crate::error::ExportError;
pub use crate::orchestrator::{ExportOrchestrator, ExportOutcome, ExportState};
pub use crate::progress::ExportProgress;
