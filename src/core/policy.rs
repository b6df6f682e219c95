//! Entry policies
//!
//! A policy decides whether an entry keeps moving through a channel. Channels
//! evaluate their policies in registration order and stop at the first
//! rejection.
//!
//! Built-in policies:
//!
//! - [`SeverityPolicy`]: passes entries whose level is at or above a threshold
//! - [`SamplingPolicy`]: passes a random fraction of entries, with per-level bypass
//! - [`PredicatePolicy`]: wraps a closure

use super::log_entry::LogEntry;
use super::log_level::LogLevel;
use rand::Rng;
use std::fmt;

pub trait Policy: Send + Sync {
    /// Returns `true` when processing of `entry` should continue
    fn transform_entry(&self, entry: &LogEntry) -> bool;

    fn name(&self) -> &str {
        "policy"
    }
}

/// Minimum-level filter
///
/// Passes an entry iff `entry.level >= threshold`, using the numeric order of
/// [`LogLevel`] (`None < Fatal < Error < Warn < Info < Debug < Trace`).
///
/// # Example
///
/// ```
/// use channel_logger::core::{LogEntry, LogLevel, Policy, SeverityPolicy, SourceLocation};
///
/// let policy = SeverityPolicy::new(LogLevel::Warn);
/// let entry = LogEntry::new(LogLevel::Info, "hi", SourceLocation::caller());
/// assert!(policy.transform_entry(&entry));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeverityPolicy {
    threshold: LogLevel,
}

impl SeverityPolicy {
    pub fn new(threshold: LogLevel) -> Self {
        Self { threshold }
    }

    pub fn threshold(&self) -> LogLevel {
        self.threshold
    }
}

impl Policy for SeverityPolicy {
    #[inline]
    fn transform_entry(&self, entry: &LogEntry) -> bool {
        entry.level >= self.threshold
    }

    fn name(&self) -> &str {
        "severity"
    }
}

/// Random sampling filter
///
/// Passes each entry with probability `rate`. Entries whose level is listed in
/// `always_pass` skip the dice roll.
///
/// # Example
///
/// ```
/// use channel_logger::core::{LogLevel, SamplingPolicy};
///
/// // keep 10% of chatter, never drop fatal entries
/// let policy = SamplingPolicy::new(0.1).always_pass(LogLevel::Fatal);
/// ```
#[derive(Debug, Clone)]
pub struct SamplingPolicy {
    rate: f64,
    always_pass: Vec<LogLevel>,
}

impl SamplingPolicy {
    /// `rate` is clamped to `0.0..=1.0`; NaN counts as `0.0`.
    pub fn new(rate: f64) -> Self {
        let rate = if rate.is_nan() { 0.0 } else { rate.clamp(0.0, 1.0) };
        Self {
            rate,
            always_pass: Vec::new(),
        }
    }

    #[must_use]
    pub fn always_pass(mut self, level: LogLevel) -> Self {
        if !self.always_pass.contains(&level) {
            self.always_pass.push(level);
        }
        self
    }

    pub fn rate(&self) -> f64 {
        self.rate
    }
}

impl Policy for SamplingPolicy {
    fn transform_entry(&self, entry: &LogEntry) -> bool {
        if self.always_pass.contains(&entry.level) {
            return true;
        }
        if self.rate >= 1.0 {
            return true;
        }
        if self.rate <= 0.0 {
            return false;
        }
        rand::thread_rng().gen_bool(self.rate)
    }

    fn name(&self) -> &str {
        "sampling"
    }
}

/// Policy backed by a closure
///
/// ```
/// use channel_logger::core::{LogEntry, PredicatePolicy};
///
/// let no_heartbeats = PredicatePolicy::new("no-heartbeats", |entry: &LogEntry| {
///     !entry.text.starts_with("heartbeat")
/// });
/// ```
pub struct PredicatePolicy<F> {
    name: String,
    predicate: F,
}

impl<F> PredicatePolicy<F>
where
    F: Fn(&LogEntry) -> bool + Send + Sync,
{
    pub fn new(name: impl Into<String>, predicate: F) -> Self {
        Self {
            name: name.into(),
            predicate,
        }
    }
}

impl<F> Policy for PredicatePolicy<F>
where
    F: Fn(&LogEntry) -> bool + Send + Sync,
{
    fn transform_entry(&self, entry: &LogEntry) -> bool {
        (self.predicate)(entry)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl<F> fmt::Debug for PredicatePolicy<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PredicatePolicy")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}
