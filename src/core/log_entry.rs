//! Log entry structure

use super::log_level::LogLevel;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;
use std::panic::Location;

/// Placeholder used when the enclosing function could not be captured
pub const UNKNOWN_FUNCTION: &str = "<unknown>";

/// Call-site of a log entry
///
/// Captured when the entry is initiated, not when it is submitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SourceLocation {
    pub file: &'static str,
    pub line: u32,
    pub column: u32,
    pub function: &'static str,
}

impl SourceLocation {
    pub const fn new(file: &'static str, line: u32, column: u32, function: &'static str) -> Self {
        Self {
            file,
            line,
            column,
            function,
        }
    }

    /// Location of the caller of the outermost `#[track_caller]` function.
    ///
    /// The function name is not available this way; use
    /// [`source_location!`](crate::source_location) when it matters.
    #[track_caller]
    pub fn caller() -> Self {
        Self::from_location(Location::caller(), UNKNOWN_FUNCTION)
    }

    pub fn from_location(location: &'static Location<'static>, function: &'static str) -> Self {
        Self::new(location.file(), location.line(), location.column(), function)
    }

    /// File name without its directory components
    pub fn file_name(&self) -> &'static str {
        self.file
            .rsplit(|c: char| c == '/' || c == '\\')
            .next()
            .unwrap_or(self.file)
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.file, self.line)
    }
}

/// One discrete logging event
///
/// Drivers only ever see an entry through `&LogEntry`; it is not mutated once
/// handed to a channel.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LogEntry {
    pub level: LogLevel,
    pub text: String,
    pub source: SourceLocation,
    pub timestamp: DateTime<Utc>,
}

impl LogEntry {
    /// New entry stamped with the current time and the given call-site
    pub fn new(level: LogLevel, text: impl Into<String>, source: SourceLocation) -> Self {
        Self {
            level,
            text: text.into(),
            source,
            timestamp: Utc::now(),
        }
    }

    /// Empty `Info` entry for `source`, the starting point of every builder
    pub fn started_at(source: SourceLocation) -> Self {
        Self::new(LogLevel::default(), String::new(), source)
    }

    #[must_use]
    pub fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = timestamp;
        self
    }
}
