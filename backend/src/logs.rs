//! Export progress log.
//!
//! Entries go to stderr so that stdout can carry CSV. `--quiet` keeps only
//! warnings and errors.

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};

static QUIET: AtomicBool = AtomicBool::new(false);

/// Log level for display
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Info,
    Success,
    Warning,
    Error,
}

impl LogLevel {
    /// Shown even when the log is quiet.
    pub fn is_problem(self) -> bool {
        self >= LogLevel::Warning
    }

    fn marker(self) -> &'static str {
        match self {
            LogLevel::Info => "   ",
            LogLevel::Success => "   ✓",
            LogLevel::Warning => "   ⚠️",
            LogLevel::Error => "   ❌",
        }
    }
}

/// A single log entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub level: LogLevel,
    pub message: String,
    /// Nesting depth, e.g. one console inside an export-all run
    pub indent: u8,
}

impl LogEntry {
    pub fn new(level: LogLevel, message: impl Into<String>) -> Self {
        Self { level, message: message.into(), indent: 0 }
    }

    pub fn with_indent(mut self, indent: u8) -> Self {
        self.indent = indent;
        self
    }

    /// Whether the entry is printed under the given quiet setting.
    pub fn is_shown(&self, quiet: bool) -> bool {
        !quiet || self.level.is_problem()
    }
}

impl fmt::Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let indent = "   ".repeat(usize::from(self.indent));
        write!(f, "{}{} {}", indent, self.level.marker(), self.message)
    }
}

/// Only print warnings and errors from now on.
pub fn set_quiet(quiet: bool) {
    QUIET.store(quiet, Ordering::Relaxed);
}

pub fn is_quiet() -> bool {
    QUIET.load(Ordering::Relaxed)
}

/// Print an entry to stderr unless the log is quiet.
pub fn log(entry: LogEntry) {
    if entry.is_shown(is_quiet()) {
        eprintln!("{}", entry);
    }
}

pub fn log_info(msg: impl Into<String>) {
    log(LogEntry::new(LogLevel::Info, msg));
}

pub fn log_success(msg: impl Into<String>) {
    log(LogEntry::new(LogLevel::Success, msg));
}

pub fn log_warning(msg: impl Into<String>) {
    log(LogEntry::new(LogLevel::Warning, msg));
}

pub fn log_error(msg: impl Into<String>) {
    log(LogEntry::new(LogLevel::Error, msg));
}

pub fn log_info_indent(msg: impl Into<String>, indent: u8) {
    log(LogEntry::new(LogLevel::Info, msg).with_indent(indent));
}

pub fn log_success_indent(msg: impl Into<String>, indent: u8) {
    log(LogEntry::new(LogLevel::Success, msg).with_indent(indent));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_with_indent() {
        let entry = LogEntry::new(LogLevel::Success, "dmg.csv").with_indent(1);
        assert_eq!(entry.to_string(), "      ✓ dmg.csv");
        assert_eq!(LogEntry::new(LogLevel::Warning, "no input").to_string(), "   ⚠️ no input");
    }

    #[test]
    fn test_quiet_keeps_problems() {
        let shown = |level| LogEntry::new(level, "x").is_shown(true);
        assert!(!shown(LogLevel::Info));
        assert!(!shown(LogLevel::Success));
        assert!(shown(LogLevel::Warning));
        assert!(shown(LogLevel::Error));
        assert!(LogEntry::new(LogLevel::Info, "x").is_shown(false));
    }
}
