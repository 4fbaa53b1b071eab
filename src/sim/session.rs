//! # Simulation Session
//!
//! The single owned object holding the simulation's live timer handle.
//! The view loop owns one of these for its whole lifetime; replacing or
//! dropping it cancels whatever is still ticking, so nothing outlives
//! the screen it belongs to.

use crate::sim::scheduler::BeatTimer;

/// Owns the repeating heart-beat timer for the current simulation run.
///
/// One-shot transition delays are deliberately not tracked here: they
/// always fire, and the reducer's busy flag makes a late or duplicate
/// delivery harmless.
#[derive(Debug, Default)]
pub struct SimSession {
    heart: Option<BeatTimer>,
}

impl SimSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Installs a new beat timer, cancelling the previous one first.
    /// At most one periodic timer is ever active.
    pub fn restart_heart(&mut self, timer: BeatTimer) {
        self.stop_heart();
        self.heart = Some(timer);
    }

    pub fn stop_heart(&mut self) {
        if let Some(timer) = self.heart.take() {
            timer.cancel();
        }
    }

    pub fn heart_running(&self) -> bool {
        self.heart.is_some()
    }
}
