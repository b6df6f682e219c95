//! Fluent, single-use entry construction
//!
//! An [`EntryBuilder`] captures its call-site and timestamp when it is created,
//! collects level and text, and submits the finished entry to its bound channel
//! exactly once: on [`finish`](EntryBuilder::finish) or, failing that, when it
//! is dropped. A builder that was never bound to a channel does nothing.
//!
//! # Example
//!
//! ```
//! use channel_logger::prelude::*;
//!
//! let memory = std::sync::Arc::new(MemoryDriver::new());
//! let channel = Channel::builder().shared_driver(memory.clone()).build();
//!
//! // submitted when the temporary is dropped at the end of the statement
//! EntryBuilder::new().warn("disk almost full").channel(&channel);
//!
//! // or explicitly
//! EntryBuilder::new()
//!     .level(LogLevel::Debug)
//!     .text("cache warmed")
//!     .channel(&channel)
//!     .finish();
//!
//! assert_eq!(memory.len(), 2);
//! ```

use super::channel::Dispatch;
use super::log_entry::{LogEntry, SourceLocation};
use super::log_level::LogLevel;

pub struct EntryBuilder<'a> {
    entry: LogEntry,
    channel: Option<Box<dyn Dispatch + 'a>>,
}

impl<'a> EntryBuilder<'a> {
    /// Start an `Info` entry located at the caller
    #[track_caller]
    pub fn new() -> Self {
        Self::at(SourceLocation::caller())
    }

    /// Start an `Info` entry at an explicit call-site
    ///
    /// Used by [`entry!`](crate::entry) to include the enclosing function.
    pub fn at(source: SourceLocation) -> Self {
        Self {
            entry: LogEntry::started_at(source),
            channel: None,
        }
    }

    /// Set or replace the message text
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.entry.text = text.into();
        self
    }

    /// Set or replace the level
    pub fn level(mut self, level: LogLevel) -> Self {
        self.entry.level = level;
        self
    }

    /// Bind the destination, replacing any earlier binding
    ///
    /// Accepts an owned [`Channel`](super::Channel), a reference to one, an
    /// `Arc`, or any other [`Dispatch`] implementation.
    pub fn channel<C: Dispatch + 'a>(mut self, channel: C) -> Self {
        self.channel = Some(Box::new(channel));
        self
    }

    #[inline]
    pub fn trace(self, text: impl Into<String>) -> Self {
        self.level(LogLevel::Trace).text(text)
    }

    #[inline]
    pub fn debug(self, text: impl Into<String>) -> Self {
        self.level(LogLevel::Debug).text(text)
    }

    #[inline]
    pub fn info(self, text: impl Into<String>) -> Self {
        self.level(LogLevel::Info).text(text)
    }

    #[inline]
    pub fn warn(self, text: impl Into<String>) -> Self {
        self.level(LogLevel::Warn).text(text)
    }

    #[inline]
    pub fn error(self, text: impl Into<String>) -> Self {
        self.level(LogLevel::Error).text(text)
    }

    #[inline]
    pub fn fatal(self, text: impl Into<String>) -> Self {
        self.level(LogLevel::Fatal).text(text)
    }

    /// The entry as accumulated so far
    pub fn entry(&self) -> &LogEntry {
        &self.entry
    }

    pub fn is_bound(&self) -> bool {
        self.channel.is_some()
    }

    /// Submit now instead of at drop
    pub fn finish(mut self) {
        self.submit_once();
    }

    fn submit_once(&mut self) {
        if let Some(channel) = self.channel.take() {
            channel.submit(&self.entry);
        }
    }
}

impl Default for EntryBuilder<'_> {
    #[track_caller]
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for EntryBuilder<'_> {
    fn drop(&mut self) {
        self.submit_once();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Channel, SeverityPolicy};
    use chrono::Utc;
    use std::cell::RefCell;

    #[derive(Default)]
    struct Recorder {
        entries: RefCell<Vec<LogEntry>>,
    }

    impl Dispatch for Recorder {
        fn submit(&self, entry: &LogEntry) {
            self.entries.borrow_mut().push(entry.clone());
        }
    }

    #[test]
    fn test_drop_submits_once() {
        let recorder = Recorder::default();
        EntryBuilder::new().info("hello").channel(&recorder);

        let entries = recorder.entries.borrow();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].level, LogLevel::Info);
        assert_eq!(entries[0].text, "hello");
    }

    #[test]
    fn test_finish_does_not_resubmit_on_drop() {
        let recorder = Recorder::default();
        EntryBuilder::new().warn("once").channel(&recorder).finish();
        assert_eq!(recorder.entries.borrow().len(), 1);
    }

    #[test]
    fn test_unbound_builder_is_noop() {
        let builder = EntryBuilder::new().fatal("nobody listens");
        assert!(!builder.is_bound());
        builder.finish();
    }

    #[test]
    fn test_later_binding_replaces_earlier() {
        let first = Recorder::default();
        let second = Recorder::default();
        EntryBuilder::new()
            .debug("rebound")
            .channel(&first)
            .channel(&second);

        assert!(first.entries.borrow().is_empty());
        assert_eq!(second.entries.borrow().len(), 1);
    }

    #[test]
    fn test_later_calls_overwrite_fields() {
        let recorder = Recorder::default();
        EntryBuilder::new()
            .trace("first")
            .level(LogLevel::Error)
            .text("second")
            .channel(&recorder);

        let entries = recorder.entries.borrow();
        assert_eq!(entries[0].level, LogLevel::Error);
        assert_eq!(entries[0].text, "second");
    }

    #[test]
    fn test_defaults() {
        let builder = EntryBuilder::default();
        assert_eq!(builder.entry().level, LogLevel::Info);
        assert!(builder.entry().text.is_empty());
    }

    #[test]
    fn test_location_and_time_captured_at_construction() {
        let recorder = Recorder::default();
        let line = line!() + 1;
        let builder = EntryBuilder::new();
        let constructed = Utc::now();

        std::thread::sleep(std::time::Duration::from_millis(20));
        builder.info("late").channel(&recorder).finish();

        let entries = recorder.entries.borrow();
        assert_eq!(entries[0].source.line, line);
        assert!(entries[0].source.file.ends_with("entry_builder.rs"));
        assert!(entries[0].timestamp <= constructed);
    }

    #[test]
    fn test_sugar_levels() {
        let recorder = Recorder::default();
        EntryBuilder::new().trace("t").channel(&recorder);
        EntryBuilder::new().debug("d").channel(&recorder);
        EntryBuilder::new().info("i").channel(&recorder);
        EntryBuilder::new().warn("w").channel(&recorder);
        EntryBuilder::new().error("e").channel(&recorder);
        EntryBuilder::new().fatal("f").channel(&recorder);

        let levels: Vec<LogLevel> = recorder.entries.borrow().iter().map(|e| e.level).collect();
        assert_eq!(
            levels,
            vec![
                LogLevel::Trace,
                LogLevel::Debug,
                LogLevel::Info,
                LogLevel::Warn,
                LogLevel::Error,
                LogLevel::Fatal,
            ]
        );
    }

    #[test]
    fn test_owned_channel_is_consumed() {
        let mut channel = Channel::new();
        channel.add_policy(SeverityPolicy::new(LogLevel::None));
        let shared_metrics = channel.clone();

        EntryBuilder::new().info("owned").channel(channel);
        assert_eq!(shared_metrics.metrics().submitted(), 1);
    }
}
