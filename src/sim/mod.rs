//! # Simulation Services
//!
//! The runtime half of the simulation: everything the pure core asks
//! for via `Effect` but cannot do itself. Timers live behind the
//! [`scheduler::Scheduler`] trait, their handles are owned by a
//! [`session::SimSession`], tones go through [`tone::TonePlayer`], and
//! [`dispatch::run_effect`] wires the three to the reducer's output.

pub mod dispatch;
pub mod scheduler;
pub mod session;
pub mod tone;
