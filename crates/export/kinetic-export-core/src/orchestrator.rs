//! Export orchestrator: drives a whole playback loop through the playback
//! controller and render surface, one virtual frame at a time, independent of
//! live playback speed.
//!
//! Lifecycle: `Idle -> Exporting -> (Cancelling) -> Idle`. Only one export may
//! run per orchestrator; cancellation is checked at frame boundaries and once
//! before encoding, never in the middle of a delay.

use std::cell::Cell;

use serde::{Deserialize, Serialize};
use tokio::time::sleep;

use crate::collaborators::{ExporterFactory, PlaybackController, RenderSurface};
use crate::config::ExportConfig;
use crate::error::ExportError;
use crate::progress::ExportProgress;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExportState {
    Idle,
    Exporting,
    /// Cancellation requested; the loop exits at its next checkpoint.
    Cancelling,
}

/// How a non-failing export ended.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExportOutcome {
    Completed { frames: u32 },
    Cancelled,
}

/// Playback state captured before an export so it can be put back afterwards.
#[derive(Copy, Clone, Debug, PartialEq)]
struct PlaybackSnapshot {
    was_playing: bool,
    beat: f64,
}

/// Returns the orchestrator to `Idle` on every exit path, including the export
/// future being dropped mid-await.
struct ExportGuard<'a> {
    state: &'a Cell<ExportState>,
}

impl Drop for ExportGuard<'_> {
    fn drop(&mut self) {
        self.state.set(ExportState::Idle);
    }
}

#[derive(Debug)]
pub struct ExportOrchestrator {
    config: ExportConfig,
    state: Cell<ExportState>,
}

impl ExportOrchestrator {
    pub fn new(config: ExportConfig) -> Result<Self, ExportError> {
        config.validate()?;
        Ok(Self {
            config,
            state: Cell::new(ExportState::Idle),
        })
    }

    pub fn config(&self) -> &ExportConfig {
        &self.config
    }

    pub fn state(&self) -> ExportState {
        self.state.get()
    }

    pub fn is_exporting(&self) -> bool {
        self.state.get() != ExportState::Idle
    }

    /// Request cancellation of the running export. Returns `false` when there
    /// is nothing to cancel.
    pub fn cancel(&self) -> bool {
        match self.state.get() {
            ExportState::Exporting => {
                log::info!("export cancellation requested");
                self.state.set(ExportState::Cancelling);
                true
            }
            ExportState::Cancelling => true,
            ExportState::Idle => false,
        }
    }

    /// Capture `total_beats` beats of playback and encode them.
    ///
    /// Progress goes to `on_progress`. Cancellation resolves to
    /// `Ok(ExportOutcome::Cancelled)` without an error event. Any other failure
    /// emits an error event and is returned; playback is not restored on that
    /// path.
    pub async fn export(
        &self,
        total_beats: u32,
        controller: &mut dyn PlaybackController,
        surface: &mut dyn RenderSurface,
        encoder: &dyn ExporterFactory,
        on_progress: &mut dyn FnMut(ExportProgress),
    ) -> Result<ExportOutcome, ExportError> {
        if self.state.get() != ExportState::Idle {
            return Err(ExportError::AlreadyInProgress);
        }
        let total_frames = total_beats
            .checked_mul(self.config.frames_per_beat)
            .filter(|n| *n > 0)
            .ok_or_else(|| ExportError::InvalidRequest {
                reason: format!(
                    "cannot export {total_beats} beats at {} frames per beat",
                    self.config.frames_per_beat
                ),
            })?;

        self.state.set(ExportState::Exporting);
        let _guard = ExportGuard { state: &self.state };
        log::info!(
            "export started: {total_beats} beats, {total_frames} frames -> {}",
            self.config.filename
        );

        match self
            .run(total_frames, controller, surface, encoder, on_progress)
            .await
        {
            Ok(()) => {
                log::info!("export complete: {total_frames} frames");
                Ok(ExportOutcome::Completed {
                    frames: total_frames,
                })
            }
            Err(err) if err.is_cancellation() => {
                log::warn!("export cancelled");
                Ok(ExportOutcome::Cancelled)
            }
            Err(err) => {
                log::warn!("export failed: {err}");
                on_progress(ExportProgress::Error {
                    error: err.to_string(),
                });
                Err(err)
            }
        }
    }

    async fn run(
        &self,
        total_frames: u32,
        controller: &mut dyn PlaybackController,
        surface: &mut dyn RenderSurface,
        encoder: &dyn ExporterFactory,
        on_progress: &mut dyn FnMut(ExportProgress),
    ) -> Result<(), ExportError> {
        let cfg = &self.config;

        let snapshot = PlaybackSnapshot {
            was_playing: controller.is_playing(),
            beat: controller.current_beat(),
        };
        if snapshot.was_playing {
            controller.toggle_playback();
        }
        controller
            .jump_to_beat(0.0)
            .map_err(ExportError::playback)?;
        sleep(cfg.rewind_settle()).await;

        let mut exporter = encoder
            .create_manual_exporter(cfg.width, cfg.height, cfg.export_options())
            .map_err(ExportError::encoder)?;
        let frame_delay_ms = cfg.frame_delay_ms();
        let frames_per_beat = f64::from(cfg.frames_per_beat);

        for index in 0..total_frames {
            self.check_cancelled()?;

            let beat = f64::from(index) / frames_per_beat;
            controller
                .jump_to_beat(beat)
                .map_err(ExportError::playback)?;
            sleep(cfg.frame_settle()).await;

            sleep(cfg.capture_delay()).await;
            let frame = surface
                .capture(&controller.prop_states())
                .map_err(ExportError::capture)?;
            exporter
                .add_frame(frame, frame_delay_ms)
                .map_err(ExportError::encoder)?;

            let current_frame = index + 1;
            log::debug!("captured frame {current_frame}/{total_frames} at beat {beat:.3}");
            on_progress(ExportProgress::Capturing {
                progress: f64::from(current_frame) / f64::from(total_frames),
                current_frame,
                total_frames,
            });
        }

        self.check_cancelled()?;
        on_progress(ExportProgress::Encoding);
        exporter.finish().await.map_err(ExportError::encoder)?;

        controller
            .jump_to_beat(snapshot.beat)
            .map_err(ExportError::playback)?;
        if snapshot.was_playing {
            controller.toggle_playback();
        }
        on_progress(ExportProgress::Complete);
        Ok(())
    }

    fn check_cancelled(&self) -> Result<(), ExportError> {
        if self.state.get() == ExportState::Cancelling {
            Err(ExportError::Cancelled)
        } else {
            Ok(())
        }
    }
}
