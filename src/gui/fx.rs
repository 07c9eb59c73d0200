// src/gui/fx.rs
//
// Per-card show/hide effect state.
//
// Showing a card puts it straight back into layout at full opacity and
// cancels any pending removal. Hiding fades it out in place; only when the
// removal deadline fires does the card stop occupying space. A stale
// pending hide can therefore never knock out a card that was re-shown
// mid-fade.

use std::time::Instant;

use crate::config::consts::HIDE_DELAY;
use crate::defer::Deferred;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Shown,
    FadingOut,
    Gone,
}

#[derive(Clone, Copy, Debug)]
pub struct CardFx {
    phase: Phase,
    removal: Deferred,
}

impl CardFx {
    pub fn shown() -> Self {
        Self { phase: Phase::Shown, removal: Deferred::default() }
    }

    pub fn gone() -> Self {
        Self { phase: Phase::Gone, removal: Deferred::default() }
    }

    /// Apply a match-pass verdict. Idempotent: re-hiding keeps the existing
    /// deadline, re-showing cancels it.
    pub fn set_target(&mut self, visible: bool, now: Instant) {
        if visible {
            self.removal.cancel();
            self.phase = Phase::Shown;
        } else if self.phase == Phase::Shown {
            self.phase = Phase::FadingOut;
            self.removal.schedule_in(now, HIDE_DELAY);
        }
    }

    /// Advance: a fading card whose deadline elapsed leaves layout.
    pub fn tick(&mut self, now: Instant) {
        if self.removal.fire(now) {
            self.phase = Phase::Gone;
        }
    }

    pub fn phase(&self) -> Phase { self.phase }
    pub fn in_layout(&self) -> bool { self.phase != Phase::Gone }
    pub fn is_fading(&self) -> bool { self.phase == Phase::FadingOut }

    pub fn target_opacity(&self) -> f32 {
        if self.phase == Phase::Shown { 1.0 } else { 0.0 }
    }
}
