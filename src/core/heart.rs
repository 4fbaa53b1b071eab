//! # Heart-Rate State
//!
//! BPM bookkeeping for the simulated monitor: the displayed value, the
//! override/mute flags, input validation, and the beat-interval math the
//! repeating timer is driven by.

use std::fmt;
use std::time::Duration;

use rand::Rng;

/// Resting rate is picked once from this range when the monitor activates.
pub const RESTING_BPM_MIN: u32 = 60;
pub const RESTING_BPM_MAX: u32 = 70;

/// Rates outside this band are flagged as abnormal.
pub const NORMAL_BPM_MIN: u32 = 60;
pub const NORMAL_BPM_MAX: u32 = 100;

/// State of the simulated heart-rate monitor.
///
/// `muted` gates tone playback only; the displayed value is never
/// affected by it. It is a plain field read at tick time, so there is
/// no shared flag to synchronize.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeartState {
    /// Displayed BPM. Zero until the monitor activates.
    pub value: u32,
    /// True once the user has overridden the rate.
    pub overridden: bool,
    /// True while the monitor is running (from device connect onward).
    pub active: bool,
    /// Suppresses the beat tone, nothing else.
    pub muted: bool,
}

impl HeartState {
    pub fn new(muted: bool) -> Self {
        Self {
            value: 0,
            overridden: false,
            active: false,
            muted,
        }
    }

    /// Activates the monitor at the given resting rate. An override that
    /// somehow landed first wins over the resting value.
    pub fn activate(&mut self, resting_bpm: u32) {
        self.active = true;
        if !self.overridden {
            self.value = resting_bpm;
        }
    }

    /// Applies a validated override.
    pub fn set_override(&mut self, bpm: u32) {
        self.value = bpm;
        self.overridden = true;
    }

    pub fn is_abnormal(&self) -> bool {
        self.active && !(NORMAL_BPM_MIN..=NORMAL_BPM_MAX).contains(&self.value)
    }
}

/// Where a BPM sits relative to the normal band.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BpmRange {
    Normal,
    AbnormallyLow,
    AbnormallyHigh,
}

pub fn classify(bpm: u32) -> BpmRange {
    if bpm > NORMAL_BPM_MAX {
        BpmRange::AbnormallyHigh
    } else if bpm < NORMAL_BPM_MIN {
        BpmRange::AbnormallyLow
    } else {
        BpmRange::Normal
    }
}

/// Why an override input was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BpmParseError {
    Empty,
    NotAnInteger,
    NotPositive,
}

impl fmt::Display for BpmParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BpmParseError::Empty => write!(f, "no BPM value entered"),
            BpmParseError::NotAnInteger => write!(f, "BPM must be an integer"),
            BpmParseError::NotPositive => write!(f, "BPM must be positive"),
        }
    }
}

impl std::error::Error for BpmParseError {}

/// Validates an override input. Accepts a positive integer with optional
/// surrounding whitespace; everything else is rejected without touching
/// any state.
pub fn parse_override(input: &str) -> Result<u32, BpmParseError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(BpmParseError::Empty);
    }
    match trimmed.parse::<i64>() {
        Ok(n) if n > 0 => Ok(u32::try_from(n).unwrap_or(u32::MAX)),
        Ok(_) => Err(BpmParseError::NotPositive),
        Err(_) => Err(BpmParseError::NotAnInteger),
    }
}

/// Interval between beats: 60000/BPM milliseconds, clamped to at least
/// 1ms so a huge override can never produce a zero-period timer.
pub fn beat_interval(bpm: u32) -> Duration {
    Duration::from_millis((60_000 / u64::from(bpm.max(1))).max(1))
}

/// Picks the resting rate shown before any override.
pub fn resting_bpm() -> u32 {
    rand::rng().random_range(RESTING_BPM_MIN..=RESTING_BPM_MAX)
}
