//! # TUI Components
//!
//! All UI components for the terminal interface. Stateless components
//! (`TitleBar`, `HeartMonitor`, `StepPanel`, `NarrativePage`) receive
//! everything as props; stateful ones (`ConsolePane`, `BpmInput`) manage
//! local state and emit events. Each component file contains its state
//! types, event types, rendering, event handling, and tests.

pub mod bpm_input;
pub mod console;
pub mod monitor;
pub mod pages;
pub mod steps;
pub mod title_bar;

pub use bpm_input::{BpmInput, BpmInputEvent};
pub use console::{ConsolePane, ConsolePaneState};
pub use monitor::HeartMonitor;
pub use pages::NarrativePage;
pub use steps::StepPanel;
pub use title_bar::TitleBar;
