//! Configuration for the convenience entry points
//!
//! [`LogConfig`] is passed explicitly; there is no process-wide logger state.
//! It can be built in code or deserialized, e.g. from JSON:
//!
//! ```
//! use channel_logger::LogConfig;
//!
//! let config = LogConfig::from_json_str(r#"{ "default_file_path": "var/app.log" }"#).unwrap();
//! assert_eq!(config.default_file_path.to_str(), Some("var/app.log"));
//! ```

use super::error::{LoggerError, Result};
use super::formatter::TextFormatter;
use super::timestamp::TimestampFormat;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Log file used when no explicit path is given
pub const DEFAULT_FILE_LOG_PATH: &str = "log/log.txt";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// File the `file_log_*` methods append to
    pub default_file_path: PathBuf,
    /// Timestamp rendering of the text formatter
    pub timestamp_format: TimestampFormat,
    /// Color console output by level
    pub console_colors: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            default_file_path: PathBuf::from(DEFAULT_FILE_LOG_PATH),
            timestamp_format: TimestampFormat::default(),
            console_colors: false,
        }
    }
}

impl LogConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_default_file_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.default_file_path = path.into();
        self
    }

    #[must_use]
    pub fn with_timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = format;
        self
    }

    #[must_use]
    pub fn with_console_colors(mut self, enabled: bool) -> Self {
        self.console_colors = enabled;
        self
    }

    /// Parse and validate a JSON document; missing fields take their defaults
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: LogConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.default_file_path.as_os_str().is_empty() {
            return Err(LoggerError::config("LogConfig", "default_file_path is empty"));
        }
        if !self.timestamp_format.is_valid() {
            return Err(LoggerError::config(
                "LogConfig",
                format!("invalid timestamp format {:?}", self.timestamp_format),
            ));
        }
        Ok(())
    }

    /// Text formatter configured with this timestamp format
    pub fn text_formatter(&self) -> TextFormatter {
        TextFormatter::new().with_timestamp_format(self.timestamp_format.clone())
    }
}
