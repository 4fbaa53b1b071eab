//! # Console Log Sink
//!
//! The scrolling "firmware upload console" shown during the simulation.
//! An append-only, ordered sequence of timestamped entries; entries are
//! never edited or removed. Retention is deliberately unbounded: a
//! simulation session lasts a few minutes and produces a handful of
//! small entries, so a cap would be dead weight.
//!
//! This is the in-simulation log the user sees. It is unrelated to the
//! ambient file logger (`log` + `simplelog`) the application writes
//! diagnostics to.

use chrono::{DateTime, Local};

/// Severity of a console entry. Controls the rendered color and prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Warn,
    Error,
}

impl Severity {
    pub fn label(self) -> &'static str {
        match self {
            Severity::Info => "INFO",
            Severity::Warn => "WARN",
            Severity::Error => "ERROR",
        }
    }
}

/// One timestamped console line.
#[derive(Debug, Clone)]
pub struct Entry {
    pub timestamp: DateTime<Local>,
    pub severity: Severity,
    pub message: String,
}

impl Entry {
    /// Single-line rendering: `[WARN] 14:02:11 - Heart rate is abnormally high!`
    pub fn format(&self) -> String {
        format!(
            "[{}] {} - {}",
            self.severity.label(),
            self.timestamp.format("%H:%M:%S"),
            self.message
        )
    }
}

/// Append-only console log.
#[derive(Debug, Default)]
pub struct ConsoleLog {
    entries: Vec<Entry>,
}

impl ConsoleLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an entry stamped with the current local time.
    pub fn push(&mut self, severity: Severity, message: impl Into<String>) {
        self.entries.push(Entry {
            timestamp: Local::now(),
            severity,
            message: message.into(),
        });
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Messages only, in append order. Convenient for assertions.
    pub fn messages(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.message.as_str()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_preserves_order() {
        let mut log = ConsoleLog::new();
        log.push(Severity::Info, "first");
        log.push(Severity::Warn, "second");
        log.push(Severity::Error, "third");

        assert_eq!(log.messages(), vec!["first", "second", "third"]);
        assert_eq!(log.len(), 3);
    }

    #[test]
    fn test_severity_recorded_per_entry() {
        let mut log = ConsoleLog::new();
        log.push(Severity::Error, "boom");

        let entry = &log.entries()[0];
        assert_eq!(entry.severity, Severity::Error);
        assert_eq!(entry.message, "boom");
    }

    #[test]
    fn test_format_contains_label_and_message() {
        let mut log = ConsoleLog::new();
        log.push(Severity::Warn, "Heart rate is abnormally high!");

        let line = log.entries()[0].format();
        assert!(line.starts_with("[WARN] "));
        assert!(line.ends_with(" - Heart rate is abnormally high!"));
    }

    #[test]
    fn test_empty_log() {
        let log = ConsoleLog::new();
        assert!(log.is_empty());
        assert!(log.entries().is_empty());
    }
}
