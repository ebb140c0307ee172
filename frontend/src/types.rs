//! Types shared by the frontend components.

use chrono::Local;
use extraction_client::{LogLevel, LogLine};

/// A visible log line stamped with the local time it was appended.
#[derive(Clone, Debug, PartialEq)]
pub struct LogEntry {
    /// Severity level
    pub level: LogLevel,
    /// Log message
    pub message: String,
    /// Timestamp string (HH:MM:SS)
    pub timestamp: String,
}

impl From<LogLine> for LogEntry {
    fn from(line: LogLine) -> Self {
        Self {
            level: line.level,
            message: line.message,
            timestamp: Local::now().format("%H:%M:%S").to_string(),
        }
    }
}
