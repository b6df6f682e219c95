//! Console driver implementation

use crate::core::{Driver, Formatter, LogEntry, LoggerError, Result, TextFormatter};
#[cfg(feature = "console")]
use colored::Colorize;
use std::io::Write;

/// Which standard stream a [`ConsoleDriver`] writes to
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ConsoleTarget {
    #[default]
    Stdout,
    Stderr,
}

/// Writes formatted entries to standard output (or standard error)
pub struct ConsoleDriver {
    formatter: Box<dyn Formatter>,
    target: ConsoleTarget,
    #[cfg_attr(not(feature = "console"), allow(dead_code))]
    use_colors: bool,
}

impl ConsoleDriver {
    /// Stdout driver using the [`TextFormatter`], without colors
    pub fn new() -> Self {
        Self {
            formatter: Box::new(TextFormatter::new()),
            target: ConsoleTarget::Stdout,
            use_colors: false,
        }
    }

    /// Replace the formatter
    ///
    /// # Example
    ///
    /// ```
    /// use channel_logger::drivers::ConsoleDriver;
    /// use channel_logger::JsonFormatter;
    ///
    /// let driver = ConsoleDriver::new().with_formatter(JsonFormatter::new());
    /// ```
    #[must_use]
    pub fn with_formatter<F: Formatter + 'static>(mut self, formatter: F) -> Self {
        self.formatter = Box::new(formatter);
        self
    }

    pub fn set_formatter(&mut self, formatter: Box<dyn Formatter>) {
        self.formatter = formatter;
    }

    #[must_use]
    pub fn with_target(mut self, target: ConsoleTarget) -> Self {
        self.target = target;
        self
    }

    /// Color each record by level; has no effect without the `console` feature
    #[must_use]
    pub fn with_colors(mut self, use_colors: bool) -> Self {
        self.use_colors = use_colors;
        self
    }

    pub fn target(&self) -> ConsoleTarget {
        self.target
    }

    #[cfg(feature = "console")]
    fn paint(&self, entry: &LogEntry, text: String) -> String {
        if self.use_colors {
            text.color(entry.level.color_code()).to_string()
        } else {
            text
        }
    }

    #[cfg(not(feature = "console"))]
    fn paint(&self, _entry: &LogEntry, text: String) -> String {
        text
    }
}

impl Default for ConsoleDriver {
    fn default() -> Self {
        Self::new()
    }
}

impl Driver for ConsoleDriver {
    fn submit(&self, entry: &LogEntry) -> Result<()> {
        let output = self.paint(entry, self.formatter.format(entry));

        let written = match self.target {
            ConsoleTarget::Stdout => std::io::stdout().lock().write_all(output.as_bytes()),
            ConsoleTarget::Stderr => std::io::stderr().lock().write_all(output.as_bytes()),
        };
        written.map_err(|e| LoggerError::io_operation("writing to console", "console write failed", e))
    }

    fn flush(&self) -> Result<()> {
        match self.target {
            ConsoleTarget::Stdout => std::io::stdout().flush()?,
            ConsoleTarget::Stderr => std::io::stderr().flush()?,
        }
        Ok(())
    }

    fn name(&self) -> &str {
        "console"
    }
}
