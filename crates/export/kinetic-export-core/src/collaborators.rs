//! Interfaces of the external collaborators an export drives.
//!
//! Everything here runs on the export's own thread; the async parts use
//! `?Send` futures.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use kinetic_motion_core::PropStates;

/// Opaque captured frame.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameBuffer {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
}

/// Playback clock the export loop steers.
///
/// `jump_to_beat` must apply synchronously: once it returns, `prop_states`
/// reflects the jumped-to position.
pub trait PlaybackController {
    fn is_playing(&self) -> bool;

    /// Playhead in fractional beats.
    fn current_beat(&self) -> f64;

    fn toggle_playback(&mut self);

    fn jump_to_beat(&mut self, beat: f64) -> anyhow::Result<()>;

    /// Current pose of both props, handed to the renderer on capture.
    fn prop_states(&self) -> PropStates;
}

/// Render target that turns a pose into pixels.
pub trait RenderSurface {
    fn capture(&mut self, states: &PropStates) -> anyhow::Result<FrameBuffer>;
}

/// Encoder settings passed through to the exporter.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ExportOptions {
    pub fps: u32,
    pub quality: u32,
    pub filename: String,
}

/// Frame sink created per export.
#[async_trait(?Send)]
pub trait ManualExporter {
    fn add_frame(&mut self, frame: FrameBuffer, delay_ms: u32) -> anyhow::Result<()>;

    /// Encode everything added so far and write the output.
    async fn finish(&mut self) -> anyhow::Result<()>;
}

/// Builds a [`ManualExporter`] for a given canvas size.
pub trait ExporterFactory {
    fn create_manual_exporter(
        &self,
        width: u32,
        height: u32,
        options: ExportOptions,
    ) -> anyhow::Result<Box<dyn ManualExporter>>;
}
