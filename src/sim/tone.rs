//! # Tone Playback
//!
//! "Play a short tone" as a capability boundary. The simulation core
//! only ever asks for a beat; how it sounds is this module's problem.
//! The real implementation rings the terminal bell, which keeps the
//! crate free of audio dependencies and works over ssh.

use std::io::Write;

pub trait TonePlayer: Send + Sync {
    /// Plays one short monitor beep.
    fn play_beat(&self);
}

/// Sounds the terminal bell (BEL). Whether that is a beep, a visual
/// flash, or nothing at all is up to the terminal emulator.
pub struct TerminalBell;

impl TonePlayer for TerminalBell {
    fn play_beat(&self) {
        let mut out = std::io::stdout();
        let _ = out.write_all(b"\x07");
        let _ = out.flush();
    }
}

/// No-op player for tests and headless use.
pub struct SilentTone;

impl TonePlayer for SilentTone {
    fn play_beat(&self) {}
}
