//! Sequence playback: an ordered list of beats and a fractional playhead.
//!
//! Seeking re-runs endpoint calculation and interpolation for the beat under
//! the playhead and stores the result, so a renderer reading [`SequencePlayer::state`]
//! right after a seek always sees the seeked-to pose.

use serde::{Deserialize, Serialize};

use crate::data::BeatData;
use crate::error::MotionError;
use crate::interp::{interpolate, BeatFrame};
use crate::state::{AnimationStateManager, PropStates};

/// Serialized sequence document.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Sequence {
    #[serde(default)]
    pub name: String,
    pub beats: Vec<BeatData>,
}

/// Parse a sequence document from JSON.
pub fn parse_sequence_json(json: &str) -> Result<Sequence, MotionError> {
    Ok(serde_json::from_str(json)?)
}

#[derive(Debug)]
pub struct SequencePlayer {
    beats: Vec<BeatData>,
    state: AnimationStateManager,
    /// Playhead in beats, `[0, beats.len()]`.
    position: f64,
    playing: bool,
}

impl SequencePlayer {
    pub fn new(beats: Vec<BeatData>) -> Self {
        Self {
            beats,
            state: AnimationStateManager::new(),
            position: 0.0,
            playing: false,
        }
    }

    pub fn from_json(json: &str) -> Result<Self, MotionError> {
        Ok(Self::new(parse_sequence_json(json)?.beats))
    }

    pub fn beats(&self) -> &[BeatData] {
        &self.beats
    }

    pub fn total_beats(&self) -> usize {
        self.beats.len()
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn set_playing(&mut self, playing: bool) {
        self.playing = playing;
    }

    pub fn toggle_playback(&mut self) {
        self.playing = !self.playing;
    }

    /// Current playhead in (fractional) beats.
    pub fn current_beat(&self) -> f64 {
        self.position
    }

    /// Map a fractional beat to `(beat index, progress within beat)`.
    ///
    /// Positions past the last beat resolve to the end of the last beat.
    pub fn locate(&self, fractional_beat: f64) -> Result<(usize, f64), MotionError> {
        if self.beats.is_empty() {
            return Err(MotionError::EmptySequence);
        }
        let len = self.beats.len();
        let clamped = fractional_beat.clamp(0.0, len as f64);
        let index = clamped.floor() as usize;
        if index >= len {
            Ok((len - 1, 1.0))
        } else {
            Ok((index, clamped - index as f64))
        }
    }

    /// Move the playhead and recompute both props for the new position.
    pub fn seek(&mut self, fractional_beat: f64) -> Result<BeatFrame, MotionError> {
        let (index, progress) = self.locate(fractional_beat)?;
        let frame = interpolate(&self.beats[index], progress)?;
        self.state.apply_frame(&frame);
        self.position = fractional_beat.clamp(0.0, self.beats.len() as f64);
        Ok(frame)
    }

    /// Advance a playing sequence by `beats`, wrapping at the end of the loop.
    /// Returns `None` while paused.
    pub fn advance(&mut self, beats: f64) -> Result<Option<BeatFrame>, MotionError> {
        if !self.playing {
            return Ok(None);
        }
        let len = self.beats.len() as f64;
        if len == 0.0 {
            return Err(MotionError::EmptySequence);
        }
        let next = (self.position + beats).rem_euclid(len);
        self.seek(next).map(Some)
    }

    /// Stop, rewind and restore the rest pose.
    pub fn reset(&mut self) {
        self.playing = false;
        self.position = 0.0;
        self.state.reset();
    }

    pub fn state(&self) -> PropStates {
        self.state.state()
    }
}
