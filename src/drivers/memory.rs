//! In-memory driver
//!
//! Keeps formatted records in a `Vec<String>` instead of writing them
//! anywhere. Handy for tests that need to assert on log output, and for
//! collecting records to inspect programmatically.

use crate::core::{Driver, Formatter, LogEntry, Result, TextFormatter};
use parking_lot::Mutex;

pub struct MemoryDriver {
    formatter: Box<dyn Formatter>,
    records: Mutex<Vec<String>>,
}

impl MemoryDriver {
    pub fn new() -> Self {
        Self {
            formatter: Box::new(TextFormatter::new()),
            records: Mutex::new(Vec::new()),
        }
    }

    #[must_use]
    pub fn with_formatter<F: Formatter + 'static>(mut self, formatter: F) -> Self {
        self.formatter = Box::new(formatter);
        self
    }

    pub fn set_formatter(&mut self, formatter: Box<dyn Formatter>) {
        self.formatter = formatter;
    }

    /// Copy of every record captured so far, oldest first
    pub fn records(&self) -> Vec<String> {
        self.records.lock().clone()
    }

    /// Take every captured record, leaving the driver empty
    pub fn drain(&self) -> Vec<String> {
        std::mem::take(&mut *self.records.lock())
    }

    /// All records concatenated
    pub fn contents(&self) -> String {
        self.records.lock().concat()
    }

    pub fn len(&self) -> usize {
        self.records.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.lock().is_empty()
    }
}

impl Default for MemoryDriver {
    fn default() -> Self {
        Self::new()
    }
}

impl Driver for MemoryDriver {
    fn submit(&self, entry: &LogEntry) -> Result<()> {
        let record = self.formatter.format(entry);
        self.records.lock().push(record);
        Ok(())
    }

    fn name(&self) -> &str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{JsonFormatter, LogLevel, SourceLocation};

    fn entry(text: &str) -> LogEntry {
        LogEntry::new(LogLevel::Debug, text, SourceLocation::caller())
    }

    #[test]
    fn test_captures_in_order() {
        let driver = MemoryDriver::new();
        driver.submit(&entry("one")).unwrap();
        driver.submit(&entry("two")).unwrap();

        let records = driver.records();
        assert_eq!(records.len(), 2);
        assert!(records[0].contains("\"one\""));
        assert!(records[1].contains("\"two\""));
        assert!(driver.contents().starts_with("[DEBUG]"));
    }

    #[test]
    fn test_drain_empties() {
        let driver = MemoryDriver::new();
        driver.submit(&entry("x")).unwrap();
        assert_eq!(driver.drain().len(), 1);
        assert!(driver.is_empty());
    }

    #[test]
    fn test_uses_formatter() {
        let driver = MemoryDriver::new().with_formatter(JsonFormatter::new());
        driver.submit(&entry("json please")).unwrap();
        assert!(driver.contents().starts_with('{'));
    }
}
