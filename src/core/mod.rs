//! # Core Application Logic
//!
//! This module contains pacesim's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • State (app data)     │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │
//!                ┌───────────────┴───────────────┐
//!                ▼                               ▼
//!         ┌────────────┐                  ┌────────────┐
//!         │    TUI     │                  │    sim     │
//!         │  Adapter   │                  │ (timers,   │
//!         │ (ratatui)  │                  │  tone)     │
//!         └────────────┘                  └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: The `App` struct - all application state in one place
//! - [`action`]: `Action`/`Effect` enums and the `update()` reducer
//! - [`console`]: the append-only simulated uploader console
//! - [`heart`]: heart-rate state, BPM parsing, beat intervals
//! - [`config`]: TOML config with defaults → file → CLI resolution

pub mod action;
pub mod config;
pub mod console;
pub mod heart;
pub mod state;
