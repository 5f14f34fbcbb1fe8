//! Transition detection.

use crate::types::{GamePhase, StatusSnapshot};

/// Result of comparing a snapshot against the previously observed phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    /// True exactly on the first poll that sees the Lost phase after a
    /// session reset; false on every later poll of the same session.
    pub is_new_loss: bool,
}

/// The last phase observed by the poll loop.
///
/// One instance lives per game session. It starts at a sentinel (`None`)
/// so the very first observed phase can never count as a transition, is
/// updated after every successful poll, and is reset whenever a new
/// session begins. It is never persisted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TransitionRecord {
    previous: Option<GamePhase>,
}

impl TransitionRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget the previous phase, restoring the sentinel.
    pub fn reset(&mut self) {
        self.previous = None;
    }

    /// Compare `snapshot` against the previously observed phase, then
    /// unconditionally remember the snapshot's phase.
    pub fn observe(&mut self, snapshot: &StatusSnapshot) -> Transition {
        let is_new_loss =
            snapshot.state == Some(GamePhase::Lost) && self.previous != Some(GamePhase::Lost);
        self.previous = snapshot.state;
        Transition { is_new_loss }
    }

    pub fn previous(&self) -> Option<GamePhase> {
        self.previous
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(state: Option<GamePhase>) -> StatusSnapshot {
        StatusSnapshot {
            columns: 10,
            rows: 10,
            mines_total: 12,
            flags_placed: 0,
            cells_revealed: 0,
            state,
        }
    }

    #[test]
    fn first_lost_observation_fires_once() {
        let mut record = TransitionRecord::new();

        assert!(!record.observe(&snapshot(Some(GamePhase::Playing))).is_new_loss);
        assert!(record.observe(&snapshot(Some(GamePhase::Lost))).is_new_loss);
        // Repeated Lost polls stay quiet.
        assert!(!record.observe(&snapshot(Some(GamePhase::Lost))).is_new_loss);
        assert!(!record.observe(&snapshot(Some(GamePhase::Lost))).is_new_loss);
    }

    #[test]
    fn lost_as_the_very_first_observation_still_fires() {
        let mut record = TransitionRecord::new();
        assert!(record.observe(&snapshot(Some(GamePhase::Lost))).is_new_loss);
    }

    #[test]
    fn reset_re_arms_the_loss_event() {
        let mut record = TransitionRecord::new();
        assert!(record.observe(&snapshot(Some(GamePhase::Lost))).is_new_loss);

        record.reset();
        assert_eq!(record.previous(), None);
        assert!(record.observe(&snapshot(Some(GamePhase::Lost))).is_new_loss);
    }

    #[test]
    fn won_and_playing_never_fire() {
        let mut record = TransitionRecord::new();
        assert!(!record.observe(&snapshot(Some(GamePhase::Won))).is_new_loss);
        assert!(!record.observe(&snapshot(Some(GamePhase::Playing))).is_new_loss);
        assert!(!record.observe(&snapshot(None)).is_new_loss);
    }

    #[test]
    fn previous_phase_tracks_every_observation() {
        let mut record = TransitionRecord::new();
        record.observe(&snapshot(Some(GamePhase::Playing)));
        assert_eq!(record.previous(), Some(GamePhase::Playing));
        record.observe(&snapshot(None));
        assert_eq!(record.previous(), None);
    }
}
