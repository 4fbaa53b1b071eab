//! # Effect Dispatch
//!
//! Interprets the reducer's `Effect`s against the runtime services:
//! scheduler, session, and tone player. Kept free of any terminal
//! dependency so integration tests can drive the whole simulation
//! headlessly under a paused clock.

use crate::core::action::{Action, Effect};
use crate::core::config::ResolvedConfig;
use crate::core::heart;
use crate::sim::scheduler::Scheduler;
use crate::sim::session::SimSession;
use crate::sim::tone::TonePlayer;

/// Performs one effect. `Effect::Quit` is the view loop's business and
/// is a no-op here.
pub fn run_effect(
    effect: Effect,
    session: &mut SimSession,
    scheduler: &dyn Scheduler,
    tone: &dyn TonePlayer,
    config: &ResolvedConfig,
) {
    match effect {
        Effect::None | Effect::Quit => {}
        Effect::ScheduleConnect => {
            // the resting rate the monitor will show is fixed here, once
            scheduler.schedule_once(
                config.connect_delay,
                Action::DeviceConnected {
                    resting_bpm: heart::resting_bpm(),
                },
            );
        }
        Effect::ScheduleVerify => {
            scheduler.schedule_once(config.verify_delay, Action::ConnectionVerified);
        }
        Effect::ScheduleTransfer => {
            scheduler.schedule_once(config.transfer_delay, Action::UploadFinished);
        }
        Effect::StartHeartLoop(bpm) => {
            session.restart_heart(
                scheduler.schedule_repeating(heart::beat_interval(bpm), Action::HeartTick),
            );
        }
        Effect::StopHeartLoop => session.stop_heart(),
        Effect::PlayTone => tone.play_beat(),
    }
}
