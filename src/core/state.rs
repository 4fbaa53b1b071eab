//! # Application State
//!
//! Core business state for pacesim. This module contains domain logic
//! only - no TUI-specific types. Presentation state lives in the `tui`
//! module.
//!
//! ```text
//! App
//! ├── screen: Screen           // which walkthrough page is showing
//! ├── sim: SimState            // everything the simulation owns
//! │   ├── step: Step           // position in the scripted sequence
//! │   ├── busy: bool           // a simulated delay is in flight
//! │   ├── console: ConsoleLog  // the fake uploader console
//! │   └── heart: HeartState    // monitor value and flags
//! ├── status_message: String   // one-line status in the title bar
//! └── default_muted: bool      // initial mute flag for new sessions
//! ```
//!
//! State changes only happen through `update(state, action)` in
//! action.rs. This keeps things predictable, so no surprise mutations.

use crate::core::config::ResolvedConfig;
use crate::core::console::ConsoleLog;
use crate::core::heart::HeartState;

/// Walkthrough pages, in visiting order. Navigation is strictly forward;
/// Impact wraps back around to Home.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Home,
    Pacemaker,
    Vulnerability,
    Simulation,
    Impact,
}

impl Screen {
    /// The next page in the walkthrough. The Simulation page leaves via
    /// its own terminal transition, never via plain navigation.
    pub fn next(self) -> Screen {
        match self {
            Screen::Home => Screen::Pacemaker,
            Screen::Pacemaker => Screen::Vulnerability,
            Screen::Vulnerability => Screen::Simulation,
            Screen::Simulation => Screen::Simulation,
            Screen::Impact => Screen::Home,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Screen::Home => "Welcome",
            Screen::Pacemaker => "You Start my Heart",
            Screen::Vulnerability => "Time-of-Check, Time-of-Use",
            Screen::Simulation => "HackSim",
            Screen::Impact => "Impacts",
        }
    }
}

/// Stages of the scripted hack simulation. Strictly forward, each
/// transition triggered externally.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Intro,
    Connect,
    Upload,
    Exploit,
}

/// Everything the simulation owns. Created fresh when the Simulation
/// screen is entered and discarded when the user leaves it.
#[derive(Debug)]
pub struct SimState {
    pub step: Step,
    /// True while a simulated delay is in flight. Gates re-triggering
    /// the current step's action.
    pub busy: bool,
    pub console: ConsoleLog,
    pub heart: HeartState,
}

impl SimState {
    pub fn new(muted: bool) -> Self {
        Self {
            step: Step::Intro,
            busy: false,
            console: ConsoleLog::new(),
            heart: HeartState::new(muted),
        }
    }
}

pub struct App {
    pub screen: Screen,
    pub sim: SimState,
    pub status_message: String,
    pub default_muted: bool,
}

impl App {
    pub fn from_config(config: &ResolvedConfig) -> Self {
        Self {
            screen: Screen::Home,
            sim: SimState::new(config.muted),
            status_message: String::from("Welcome to pacesim!"),
            default_muted: config.muted,
        }
    }
}
