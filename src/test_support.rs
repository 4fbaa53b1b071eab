//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use crate::core::action::{Action, update};
use crate::core::config::ResolvedConfig;
use crate::core::state::{App, Screen, Step};

/// A fresh App on the Home screen with default config.
pub fn test_app() -> App {
    App::from_config(&ResolvedConfig::default())
}

/// An App navigated to the Simulation screen, still on the intro step.
pub fn app_at_simulation() -> App {
    let mut app = test_app();
    while app.screen != Screen::Simulation {
        update(&mut app, Action::AdvanceScreen);
    }
    app
}

/// An App driven through the whole scripted sequence to the exploit
/// step: connected (monitor active at 65 BPM) and compromised.
pub fn app_at_exploit() -> App {
    let mut app = app_at_simulation();
    update(&mut app, Action::StartSimulation);
    update(&mut app, Action::ConnectDevice);
    update(&mut app, Action::DeviceConnected { resting_bpm: 65 });
    update(&mut app, Action::StartUpload);
    update(&mut app, Action::ConnectionVerified);
    update(&mut app, Action::UploadFinished);
    assert_eq!(app.sim.step, Step::Exploit);
    app
}
