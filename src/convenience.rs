//! One-call logging helpers
//!
//! Each call builds a throwaway [`Channel`] with a single driver and a
//! [`SeverityPolicy`] at the requested level, then submits one entry located at
//! the caller. Nothing is kept between calls, so the file variants reopen the
//! file every time.
//!
//! The free functions use [`LogConfig::default()`]; the methods on
//! [`LogConfig`] use its settings, including the default file path.
//!
//! The functions locate the entry at their caller but cannot see the
//! enclosing function, which renders as `<unknown>`. The macro forms
//! ([`console_log!`](crate::console_log), [`file_log!`](crate::file_log) and
//! their per-level variants) record it as well:
//!
//! ```no_run
//! use channel_logger::prelude::*;
//! use channel_logger::{console_log_warn, file_log_error};
//!
//! console_log_warn!("low disk space: {}%", 97);
//! file_log_error!("log/db.txt", "database unreachable");
//!
//! let config = LogConfig::new().with_default_file_path("var/app.log");
//! config.file_log_info("service started");
//! ```

#[cfg(feature = "file")]
use crate::core::Result;
use crate::core::{
    Channel, Driver, EntryBuilder, LogConfig, LogLevel, SeverityPolicy, SourceLocation,
};
use crate::drivers::ConsoleDriver;
#[cfg(feature = "file")]
use crate::drivers::FileDriver;
#[cfg(feature = "file")]
use std::path::Path;

/// Channel with a single driver that passes entries at or above `level`
fn one_shot<D: Driver + 'static>(driver: D, level: LogLevel) -> Channel {
    Channel::builder()
        .driver(driver)
        .policy(SeverityPolicy::new(level))
        .build()
}

impl LogConfig {
    /// Write one entry to stdout
    #[track_caller]
    pub fn console_log(&self, text: impl Into<String>, level: LogLevel) {
        self.console_log_at(SourceLocation::caller(), text, level);
    }

    /// Write one entry located at `source` to stdout
    pub fn console_log_at(&self, source: SourceLocation, text: impl Into<String>, level: LogLevel) {
        EntryBuilder::at(source)
            .channel(self.console_channel(level))
            .level(level)
            .text(text);
    }

    fn console_channel(&self, level: LogLevel) -> Channel {
        let driver = ConsoleDriver::new()
            .with_formatter(self.text_formatter())
            .with_colors(self.console_colors);
        one_shot(driver, level)
    }

    /// Append one entry to `path`
    ///
    /// If the file cannot be opened the entry is dropped and a diagnostic is
    /// printed to stderr.
    #[cfg(feature = "file")]
    #[track_caller]
    pub fn file_log_to(&self, text: impl Into<String>, path: impl AsRef<Path>, level: LogLevel) {
        self.file_log_at(SourceLocation::caller(), text, path, level);
    }

    /// Append one entry located at `source` to `path`
    #[cfg(feature = "file")]
    pub fn file_log_at(
        &self,
        source: SourceLocation,
        text: impl Into<String>,
        path: impl AsRef<Path>,
        level: LogLevel,
    ) {
        let path = path.as_ref();
        let channel = match self.file_channel(path, level) {
            Ok(channel) => channel,
            Err(e) => {
                eprintln!(
                    "[LOGGER ERROR] Cannot log to '{}': {}",
                    path.display(),
                    e
                );
                return;
            }
        };

        EntryBuilder::at(source).channel(channel).level(level).text(text);
    }

    #[cfg(feature = "file")]
    fn file_channel(&self, path: &Path, level: LogLevel) -> Result<Channel> {
        let driver = FileDriver::new(path)?.with_formatter(self.text_formatter());
        Ok(one_shot(driver, level))
    }

    /// Append one entry to [`default_file_path`](LogConfig::default_file_path)
    #[cfg(feature = "file")]
    #[track_caller]
    pub fn file_log(&self, text: impl Into<String>, level: LogLevel) {
        self.file_log_to(text, &self.default_file_path, level);
    }

    #[cfg(feature = "file")]
    #[track_caller]
    pub fn file_log_trace(&self, text: impl Into<String>) {
        self.file_log(text, LogLevel::Trace);
    }

    #[cfg(feature = "file")]
    #[track_caller]
    pub fn file_log_debug(&self, text: impl Into<String>) {
        self.file_log(text, LogLevel::Debug);
    }

    #[cfg(feature = "file")]
    #[track_caller]
    pub fn file_log_info(&self, text: impl Into<String>) {
        self.file_log(text, LogLevel::Info);
    }

    #[cfg(feature = "file")]
    #[track_caller]
    pub fn file_log_warn(&self, text: impl Into<String>) {
        self.file_log(text, LogLevel::Warn);
    }

    #[cfg(feature = "file")]
    #[track_caller]
    pub fn file_log_error(&self, text: impl Into<String>) {
        self.file_log(text, LogLevel::Error);
    }

    #[cfg(feature = "file")]
    #[track_caller]
    pub fn file_log_fatal(&self, text: impl Into<String>) {
        self.file_log(text, LogLevel::Fatal);
    }
}

#[track_caller]
pub fn console_log(text: impl Into<String>, level: LogLevel) {
    LogConfig::default().console_log(text, level);
}

#[track_caller]
pub fn console_log_trace(text: impl Into<String>) {
    console_log(text, LogLevel::Trace);
}

#[track_caller]
pub fn console_log_debug(text: impl Into<String>) {
    console_log(text, LogLevel::Debug);
}

#[track_caller]
pub fn console_log_info(text: impl Into<String>) {
    console_log(text, LogLevel::Info);
}

#[track_caller]
pub fn console_log_warn(text: impl Into<String>) {
    console_log(text, LogLevel::Warn);
}

#[track_caller]
pub fn console_log_error(text: impl Into<String>) {
    console_log(text, LogLevel::Error);
}

#[track_caller]
pub fn console_log_fatal(text: impl Into<String>) {
    console_log(text, LogLevel::Fatal);
}

#[cfg(feature = "file")]
#[track_caller]
pub fn file_log(text: impl Into<String>, path: impl AsRef<Path>, level: LogLevel) {
    LogConfig::default().file_log_to(text, path, level);
}

#[cfg(feature = "file")]
#[track_caller]
pub fn file_log_trace(text: impl Into<String>, path: impl AsRef<Path>) {
    file_log(text, path, LogLevel::Trace);
}

#[cfg(feature = "file")]
#[track_caller]
pub fn file_log_debug(text: impl Into<String>, path: impl AsRef<Path>) {
    file_log(text, path, LogLevel::Debug);
}

#[cfg(feature = "file")]
#[track_caller]
pub fn file_log_info(text: impl Into<String>, path: impl AsRef<Path>) {
    file_log(text, path, LogLevel::Info);
}

#[cfg(feature = "file")]
#[track_caller]
pub fn file_log_warn(text: impl Into<String>, path: impl AsRef<Path>) {
    file_log(text, path, LogLevel::Warn);
}

#[cfg(feature = "file")]
#[track_caller]
pub fn file_log_error(text: impl Into<String>, path: impl AsRef<Path>) {
    file_log(text, path, LogLevel::Error);
}

#[cfg(feature = "file")]
#[track_caller]
pub fn file_log_fatal(text: impl Into<String>, path: impl AsRef<Path>) {
    file_log(text, path, LogLevel::Fatal);
}
