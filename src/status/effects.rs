//! Presentation effects driven by status transitions.
//!
//! The dispatcher always refreshes the status panel; on the first poll
//! that observes a loss it additionally fires the one-shot effects: the
//! shake animation and the move-input lockout.

use crate::types::{StatusSnapshot, SHAKE_CLEAR_MS, SHAKE_DURATION_MS, SHAKE_OFFSETS};

use crate::status::panel::StatusPanel;

/// One-shot attention animation, advanced by the host's tick.
///
/// `trigger` restarts the animation from the first keyframe even while a
/// previous run is still in flight, and the active marker clears itself
/// after `SHAKE_CLEAR_MS` so a later, independent trigger starts clean.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ShakeEffect {
    remaining_ms: u32,
}

impl ShakeEffect {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start (or restart) the shake.
    pub fn trigger(&mut self) {
        self.remaining_ms = SHAKE_CLEAR_MS;
    }

    /// Advance the animation clock.
    pub fn update(&mut self, elapsed_ms: u32) {
        self.remaining_ms = self.remaining_ms.saturating_sub(elapsed_ms);
    }

    pub fn is_active(&self) -> bool {
        self.remaining_ms > 0
    }

    /// Horizontal displacement for the current keyframe, in display
    /// units. Zero whenever the effect is idle or in its clear window.
    pub fn offset(&self) -> i8 {
        if !self.is_active() {
            return 0;
        }
        let elapsed = SHAKE_CLEAR_MS - self.remaining_ms;
        if elapsed >= SHAKE_DURATION_MS {
            return 0;
        }
        let step = (elapsed * 10 / SHAKE_DURATION_MS) as usize;
        SHAKE_OFFSETS[step]
    }
}

/// Applies each snapshot to the panel and fires the one-shot loss
/// effects.
#[derive(Debug, Clone, Copy, Default)]
pub struct EffectDispatcher {
    shake: ShakeEffect,
}

impl EffectDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// React to one polled snapshot.
    ///
    /// The panel fields are always rewritten. When `is_new_loss` is set
    /// the shake starts and move input is locked; both happen at most
    /// once per session because the transition detector only reports the
    /// first Lost observation.
    pub fn on_snapshot(
        &mut self,
        panel: &mut StatusPanel,
        snapshot: &StatusSnapshot,
        is_new_loss: bool,
    ) {
        panel.update(snapshot);
        if is_new_loss {
            self.shake.trigger();
            panel.input_enabled = false;
        }
    }

    /// Advance time-based effects.
    pub fn update(&mut self, elapsed_ms: u32) {
        self.shake.update(elapsed_ms);
    }

    pub fn shake(&self) -> &ShakeEffect {
        &self.shake
    }
}
