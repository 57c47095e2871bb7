//! [`PlaybackController`] for the in-process sequence player, so a sequence can
//! be exported without a live UI.

use anyhow::Context;

use kinetic_motion_core::{PropStates, SequencePlayer};

use crate::collaborators::PlaybackController;

impl PlaybackController for SequencePlayer {
    fn is_playing(&self) -> bool {
        SequencePlayer::is_playing(self)
    }

    fn current_beat(&self) -> f64 {
        SequencePlayer::current_beat(self)
    }

    fn toggle_playback(&mut self) {
        SequencePlayer::toggle_playback(self);
    }

    fn jump_to_beat(&mut self, beat: f64) -> anyhow::Result<()> {
        self.seek(beat)
            .with_context(|| format!("seeking sequence to beat {beat}"))?;
        Ok(())
    }

    fn prop_states(&self) -> PropStates {
        self.state()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kinetic_motion_core::{BeatData, Location, Motion, MotionType, Orientation};

    #[test]
    fn jump_reflects_in_prop_states_immediately() {
        let m = Motion::new(
            MotionType::Pro,
            Location::N,
            Location::E,
            Orientation::In,
            Orientation::In,
        );
        let mut player = SequencePlayer::new(vec![BeatData::new(1, m.clone(), m)]);
        let rest = PlaybackController::prop_states(&player);
        PlaybackController::jump_to_beat(&mut player, 0.5).unwrap();
        assert_ne!(PlaybackController::prop_states(&player), rest);
        assert_eq!(PlaybackController::current_beat(&player), 0.5);
    }

    #[test]
    fn jump_on_empty_sequence_is_an_error() {
        let mut player = SequencePlayer::new(Vec::new());
        let err = PlaybackController::jump_to_beat(&mut player, 0.0).unwrap_err();
        assert!(format!("{err:#}").contains("no beats"));
    }
}
