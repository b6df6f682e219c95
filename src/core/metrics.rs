//! Channel metrics for observability
//!
//! Counters describing what a channel did with the entries it was handed.
//! Driver failures never reach the logging caller, so this is where they show up.

use std::sync::atomic::{AtomicU64, Ordering};

/// Dispatch counters of a [`Channel`](crate::core::Channel)
///
/// # Example
///
/// ```
/// use channel_logger::ChannelMetrics;
///
/// let metrics = ChannelMetrics::new();
/// metrics.record_submitted();
/// metrics.record_filtered();
///
/// assert_eq!(metrics.submitted(), 1);
/// assert_eq!(metrics.filtered(), 1);
/// ```
#[derive(Debug, Default)]
pub struct ChannelMetrics {
    /// Entries handed to the channel
    submitted: AtomicU64,

    /// Entries rejected by a policy
    filtered: AtomicU64,

    /// Successful driver deliveries (one per driver per entry)
    delivered: AtomicU64,

    /// Driver calls that returned an error or panicked
    driver_failures: AtomicU64,
}

impl ChannelMetrics {
    pub const fn new() -> Self {
        Self {
            submitted: AtomicU64::new(0),
            filtered: AtomicU64::new(0),
            delivered: AtomicU64::new(0),
            driver_failures: AtomicU64::new(0),
        }
    }

    #[inline]
    pub fn submitted(&self) -> u64 {
        self.submitted.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn filtered(&self) -> u64 {
        self.filtered.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn delivered(&self) -> u64 {
        self.delivered.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn driver_failures(&self) -> u64 {
        self.driver_failures.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn record_submitted(&self) -> u64 {
        self.submitted.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_filtered(&self) -> u64 {
        self.filtered.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_delivered(&self) -> u64 {
        self.delivered.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_driver_failure(&self) -> u64 {
        self.driver_failures.fetch_add(1, Ordering::Relaxed)
    }

    /// Failed driver calls as a percentage of all driver calls (0.0 - 100.0)
    ///
    /// Returns 0.0 if no driver has been called yet.
    pub fn failure_rate(&self) -> f64 {
        let failed = self.driver_failures() as f64;
        let total = self.delivered() as f64 + failed;
        if total == 0.0 {
            0.0
        } else {
            (failed / total) * 100.0
        }
    }

    /// Reset all counters to zero
    pub fn reset(&self) {
        self.submitted.store(0, Ordering::Relaxed);
        self.filtered.store(0, Ordering::Relaxed);
        self.delivered.store(0, Ordering::Relaxed);
        self.driver_failures.store(0, Ordering::Relaxed);
    }
}
