//! # Actions
//!
//! Everything that can happen in pacesim becomes an `Action`.
//! User presses Enter on the connect step? That's `Action::ConnectDevice`.
//! The simulated link comes up two seconds later? That's
//! `Action::DeviceConnected`.
//!
//! The `update()` function takes the current state and an action and
//! mutates the state. No side effects here - timers, tones, and I/O are
//! requested through the returned `Effect` and performed elsewhere.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```
//!
//! This makes everything testable: feed actions, assert on state and
//! effects, never wait on a real clock.

use log::debug;

use crate::core::console::Severity;
use crate::core::heart::{self, BpmRange};
use crate::core::state::{App, Screen, SimState, Step};

/// Every event the application reacts to, from the user or from a timer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Move to the next walkthrough page (narrative screens and Impact).
    AdvanceScreen,
    /// Leave the simulation intro and show the connect step.
    StartSimulation,
    /// User asked to connect to the device.
    ConnectDevice,
    /// The simulated wireless link came up. Carries the resting rate the
    /// monitor starts at, chosen when the connect delay was scheduled.
    DeviceConnected { resting_bpm: u32 },
    /// User started the firmware upload.
    StartUpload,
    /// The device finished its connection-state check.
    ConnectionVerified,
    /// The firmware transfer finished.
    UploadFinished,
    /// User submitted a heart-rate override (raw input text).
    OverrideHeartRate(String),
    /// One beat of the repeating heart timer.
    HeartTick,
    /// User toggled the monitor tone.
    ToggleMute,
    /// User left the exploit step for the impact page.
    FinishSimulation,
    Quit,
}

/// I/O the reducer wants performed. Interpreted by `sim::dispatch`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Schedule the connect delay, then deliver `DeviceConnected`.
    ScheduleConnect,
    /// Schedule the connection-state check, then deliver `ConnectionVerified`.
    ScheduleVerify,
    /// Schedule the firmware transfer, then deliver `UploadFinished`.
    ScheduleTransfer,
    /// (Re)start the repeating beat timer at the given BPM. Any previous
    /// timer is cancelled first; only one is ever active.
    StartHeartLoop(u32),
    StopHeartLoop,
    PlayTone,
    Quit,
}

/// The single reducer through which all state changes flow.
///
/// Actions that do not fit the current screen/step are dropped with a
/// debug log: transitions are strictly forward and a stale or duplicate
/// trigger must never fire twice.
pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::AdvanceScreen => {
            if app.screen == Screen::Simulation {
                debug!("ignoring AdvanceScreen during the simulation");
                return Effect::None;
            }
            app.screen = app.screen.next();
            if app.screen == Screen::Simulation {
                // Fresh session state on every entry.
                app.sim = SimState::new(app.default_muted);
            }
            Effect::None
        }

        Action::StartSimulation => {
            if app.screen == Screen::Simulation && app.sim.step == Step::Intro {
                app.sim.step = Step::Connect;
            } else {
                debug!("ignoring StartSimulation at {:?}/{:?}", app.screen, app.sim.step);
            }
            Effect::None
        }

        Action::ConnectDevice => {
            if app.screen != Screen::Simulation || app.sim.step != Step::Connect {
                debug!("ignoring ConnectDevice at {:?}/{:?}", app.screen, app.sim.step);
                return Effect::None;
            }
            if app.sim.busy {
                debug!("connect already in flight");
                return Effect::None;
            }
            app.sim.busy = true;
            app.sim.console.push(Severity::Info, "Connecting to device...");
            Effect::ScheduleConnect
        }

        Action::DeviceConnected { resting_bpm } => {
            if app.sim.step != Step::Connect || !app.sim.busy {
                debug!("ignoring DeviceConnected at {:?}", app.sim.step);
                return Effect::None;
            }
            app.sim.busy = false;
            app.sim.console.push(Severity::Info, "Connected to device!");
            app.sim.step = Step::Upload;
            app.sim.heart.activate(resting_bpm);
            Effect::StartHeartLoop(app.sim.heart.value)
        }

        Action::StartUpload => {
            if app.screen != Screen::Simulation || app.sim.step != Step::Upload {
                debug!("ignoring StartUpload at {:?}/{:?}", app.screen, app.sim.step);
                return Effect::None;
            }
            if app.sim.busy {
                debug!("upload already in flight");
                return Effect::None;
            }
            app.sim.busy = true;
            app.sim
                .console
                .push(Severity::Info, "Checking connection state...");
            Effect::ScheduleVerify
        }

        Action::ConnectionVerified => {
            if app.sim.step != Step::Upload || !app.sim.busy {
                debug!("ignoring ConnectionVerified at {:?}", app.sim.step);
                return Effect::None;
            }
            // The check passed; the upload starts while nothing stops the
            // connection state from changing underneath it. Busy stays set
            // until the transfer completes.
            app.sim.console.push(Severity::Info, "Connection state: OK");
            app.sim
                .console
                .push(Severity::Info, "Starting firmware upload process...");
            Effect::ScheduleTransfer
        }

        Action::UploadFinished => {
            if app.sim.step != Step::Upload || !app.sim.busy {
                debug!("ignoring UploadFinished at {:?}", app.sim.step);
                return Effect::None;
            }
            app.sim.busy = false;
            app.sim
                .console
                .push(Severity::Info, "Firmware upload complete!");
            app.sim.console.push(
                Severity::Error,
                "Device compromised! Unauthorized access gained.",
            );
            app.sim.step = Step::Exploit;
            Effect::None
        }

        Action::OverrideHeartRate(input) => {
            if app.screen != Screen::Simulation || app.sim.step != Step::Exploit {
                debug!("ignoring OverrideHeartRate at {:?}/{:?}", app.screen, app.sim.step);
                return Effect::None;
            }
            let bpm = match heart::parse_override(&input) {
                Ok(bpm) => bpm,
                Err(e) => {
                    debug!("rejected override {input:?}: {e}");
                    app.sim.console.push(
                        Severity::Error,
                        "Invalid BPM value entered. Please enter a positive integer.",
                    );
                    return Effect::None;
                }
            };
            app.sim.heart.set_override(bpm);
            app.sim
                .console
                .push(Severity::Info, format!("Heart rate overridden to {bpm} BPM"));
            match heart::classify(bpm) {
                BpmRange::AbnormallyHigh => app.sim.console.push(
                    Severity::Warn,
                    "Heart rate is abnormally high! Please consult a doctor immediately.",
                ),
                BpmRange::AbnormallyLow => app.sim.console.push(
                    Severity::Warn,
                    "Heart rate is abnormally low! Please consult a doctor immediately.",
                ),
                BpmRange::Normal => {}
            }
            Effect::StartHeartLoop(bpm)
        }

        Action::HeartTick => {
            if app.screen == Screen::Simulation && app.sim.heart.active && !app.sim.heart.muted {
                Effect::PlayTone
            } else {
                Effect::None
            }
        }

        Action::ToggleMute => {
            if app.sim.heart.active {
                app.sim.heart.muted = !app.sim.heart.muted;
                app.status_message = if app.sim.heart.muted {
                    String::from("Monitor muted")
                } else {
                    String::from("Monitor unmuted")
                };
            }
            Effect::None
        }

        Action::FinishSimulation => {
            if app.screen != Screen::Simulation || app.sim.step != Step::Exploit {
                debug!("ignoring FinishSimulation at {:?}/{:?}", app.screen, app.sim.step);
                return Effect::None;
            }
            app.screen = Screen::Impact;
            // Session state is discarded on the way out.
            app.sim = SimState::new(app.default_muted);
            Effect::StopHeartLoop
        }

        Action::Quit => Effect::Quit,
    }
}
