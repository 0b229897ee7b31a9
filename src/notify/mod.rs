//! Severity notification
//!
//! A [`Notifier`] fans three severity signals out to registered [`Listener`]s:
//! - warning  → `Listener::on_warning`
//! - error    → `Listener::on_error`
//! - fatal    → `Listener::on_fatal_error`
//!
//! Listeners are owned by the caller; the notifier only keeps weak references.

#![allow(dead_code)]

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

pub mod console;
pub mod listener;
pub mod listeners;
pub mod notifier;
pub mod sink;

pub use listener::Listener;
pub use listeners::{ConsoleAndFileFatalListener, ConsoleWarningListener, FileErrorListener};
pub use notifier::{ListenerId, Notifier};
pub use sink::SinkError;

/// Severity of a notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Warning,
    Error,
    Fatal,
}

impl Severity {
    /// Prefix written in front of every message of this severity
    pub fn prefix(&self) -> &'static str {
        match self {
            Severity::Warning => "Warning",
            Severity::Error => "Error",
            Severity::Fatal => "Fatal Error",
        }
    }

    /// Render a message as the single line written to a sink (no terminator)
    pub fn format_line(&self, message: &str) -> String {
        format!("{}: {}", self.prefix(), message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_line() {
        assert_eq!(Severity::Warning.format_line("w1"), "Warning: w1");
        assert_eq!(Severity::Error.format_line("e1"), "Error: e1");
        assert_eq!(Severity::Fatal.format_line("f1"), "Fatal Error: f1");
    }

    #[test]
    fn test_format_line_keeps_message_verbatim() {
        assert_eq!(Severity::Error.format_line(""), "Error: ");
        assert_eq!(Severity::Warning.format_line("  a: b  "), "Warning:   a: b  ");
    }

    #[test]
    fn test_severity_serde_lowercase() {
        let yaml = serde_yaml::to_string(&Severity::Fatal).expect("Failed to serialize");
        assert_eq!(yaml.trim(), "fatal");
        let parsed: Severity = serde_yaml::from_str("warning").expect("Failed to deserialize");
        assert_eq!(parsed, Severity::Warning);
    }
}
