//! # Scheduler
//!
//! The timer facility behind a trait seam. The reducer never touches a
//! clock; it requests delays through `Effect`s, and the dispatcher turns
//! those into `schedule_once`/`schedule_repeating` calls here. Tests run
//! the tokio implementation under a paused clock and drive it with
//! `tokio::time::advance`, so no test ever sleeps for real.

use std::sync::mpsc::Sender;
use std::time::Duration;

use log::warn;
use tokio::task::AbortHandle;

use crate::core::action::Action;

/// Delayed and periodic delivery of `Action`s.
pub trait Scheduler {
    /// Delivers `action` once, after `delay`. One-shots cannot be
    /// cancelled; duplicate triggering is prevented upstream by the
    /// busy flag.
    fn schedule_once(&self, delay: Duration, action: Action);

    /// Delivers `action` every `period`, starting one period from now.
    /// Runs until the returned handle is cancelled or dropped.
    fn schedule_repeating(&self, period: Duration, action: Action) -> BeatTimer;
}

/// Cancellable handle to a repeating timer. The underlying task is
/// aborted on `cancel()` and again on drop, so letting the handle go out
/// of scope is enough to stop the ticks.
#[derive(Debug)]
pub struct BeatTimer {
    handle: AbortHandle,
}

impl BeatTimer {
    pub fn cancel(&self) {
        self.handle.abort();
    }
}

impl Drop for BeatTimer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// Tokio-backed scheduler sending actions into the view loop's channel.
pub struct TokioScheduler {
    tx: Sender<Action>,
}

impl TokioScheduler {
    pub fn new(tx: Sender<Action>) -> Self {
        Self { tx }
    }
}

impl Scheduler for TokioScheduler {
    fn schedule_once(&self, delay: Duration, action: Action) {
        let tx = self.tx.clone();
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            if tx.send(action).is_err() {
                warn!("delayed action dropped: receiver gone");
            }
        });
    }

    fn schedule_repeating(&self, period: Duration, action: Action) -> BeatTimer {
        let tx = self.tx.clone();
        let handle = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(period);
            // the first tick completes immediately; the first delivery
            // should land one full period from now
            ticker.tick().await;
            loop {
                ticker.tick().await;
                if tx.send(action.clone()).is_err() {
                    warn!("periodic action dropped: receiver gone");
                    break;
                }
            }
        });
        BeatTimer {
            handle: handle.abort_handle(),
        }
    }
}
