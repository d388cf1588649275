use serde::{Deserialize, Serialize};

use crate::button::ButtonKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LogLevel {
    Info,
    Warning,
    Error,
}

impl LogLevel {
    #[must_use]
    pub const fn as_str(&self) -> &str {
        match self {
            Self::Info => "INFO",
            Self::Warning => "WARN",
            Self::Error => "ERROR",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    pub level: LogLevel,
    pub event: ButtonKind,
    pub message: String,
}

impl LogEntry {
    #[must_use]
    pub fn new<S: Into<String>>(level: LogLevel, event: ButtonKind, message: S) -> Self {
        Self {
            level,
            event,
            message: message.into(),
        }
    }
}

/// Diagnostic sink for failures the state machine absorbs instead of returning.
pub trait LogOutput {
    fn log(&mut self, entry: LogEntry);
}

impl LogOutput for Vec<LogEntry> {
    fn log(&mut self, entry: LogEntry) {
        self.push(entry);
    }
}

pub struct NullLog;

impl LogOutput for NullLog {
    fn log(&mut self, _entry: LogEntry) {}
}
