//! Entry formatters
//!
//! A formatter turns a [`LogEntry`] into the text a driver writes. Formatters
//! carry configuration only and render the same entry to the same string.
//!
//! - [`TextFormatter`]: human-readable two-line record (default)
//! - [`JsonFormatter`]: one JSON object per line for machine processing

use super::log_entry::LogEntry;
use super::timestamp::TimestampFormat;
use serde::Serialize;

pub trait Formatter: Send + Sync {
    fn format(&self, entry: &LogEntry) -> String;

    fn name(&self) -> &str;
}

/// Human-readable formatter
///
/// Layout:
///
/// ```text
/// [LEVEL] (timestamp) : "message" in function: FUNCTION
///    FILE(LINE)
/// ```
///
/// # Example
///
/// ```
/// use channel_logger::core::{Formatter, LogEntry, LogLevel, SourceLocation, TextFormatter};
///
/// let entry = LogEntry::new(
///     LogLevel::Warn,
///     "disk almost full",
///     SourceLocation::new("src/disk.rs", 42, 9, "app::disk::check"),
/// );
/// let text = TextFormatter::new().format(&entry);
/// assert!(text.starts_with("[WARN] ("));
/// assert!(text.ends_with("   src/disk.rs(42)\n"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct TextFormatter {
    timestamp_format: TimestampFormat,
}

impl TextFormatter {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = format;
        self
    }

    pub fn timestamp_format(&self) -> &TimestampFormat {
        &self.timestamp_format
    }
}

impl Formatter for TextFormatter {
    fn format(&self, entry: &LogEntry) -> String {
        format!(
            "[{}] ({}) : \"{}\" in function: {}\n   {}({})\n",
            entry.level.to_str(),
            self.timestamp_format.format(&entry.timestamp),
            entry.text,
            entry.source.function,
            entry.source.file,
            entry.source.line
        )
    }

    fn name(&self) -> &str {
        "text"
    }
}

#[derive(Serialize)]
struct JsonRecord<'a> {
    timestamp: String,
    level: &'static str,
    message: &'a str,
    function: &'a str,
    file: &'a str,
    line: u32,
    column: u32,
}

/// JSON-lines formatter
///
/// Each entry becomes a single-line JSON object terminated by `\n`.
#[derive(Debug, Clone)]
pub struct JsonFormatter {
    timestamp_format: TimestampFormat,
}

impl JsonFormatter {
    pub fn new() -> Self {
        Self {
            timestamp_format: TimestampFormat::Iso8601,
        }
    }

    #[must_use]
    pub fn with_timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = format;
        self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl Formatter for JsonFormatter {
    fn format(&self, entry: &LogEntry) -> String {
        let record = JsonRecord {
            timestamp: self.timestamp_format.format(&entry.timestamp),
            level: entry.level.to_str(),
            message: &entry.text,
            function: entry.source.function,
            file: entry.source.file,
            line: entry.source.line,
            column: entry.source.column,
        };

        let mut line = serde_json::to_string(&record).unwrap_or_default();
        line.push('\n');
        line
    }

    fn name(&self) -> &str {
        "json"
    }
}
