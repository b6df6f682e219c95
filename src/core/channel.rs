//! Channel: policy chain plus driver set
//!
//! A channel is the unit an [`EntryBuilder`](super::EntryBuilder) submits to.
//! Submission is synchronous: policies run in registration order, the first
//! rejection ends processing, and an accepted entry goes to every driver in
//! registration order before `submit` returns.

use super::{
    driver::Driver,
    error::{LoggerError, Result},
    log_entry::LogEntry,
    log_level::LogLevel,
    metrics::ChannelMetrics,
    policy::{Policy, SeverityPolicy},
};
use std::any::Any;
use std::fmt;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::Arc;

/// Callback for driver failures: `(driver name, error)`
pub type DriverErrorCallback = Arc<dyn Fn(&str, &LoggerError) + Send + Sync>;

/// Anything an entry can be submitted to
///
/// Implemented by [`Channel`] and forwarded through references, `Box` and
/// `Arc`, so a builder can either own its channel or borrow a long-lived one.
pub trait Dispatch {
    fn submit(&self, entry: &LogEntry);
}

impl<T: Dispatch + ?Sized> Dispatch for &T {
    fn submit(&self, entry: &LogEntry) {
        (**self).submit(entry)
    }
}

impl<T: Dispatch + ?Sized> Dispatch for Box<T> {
    fn submit(&self, entry: &LogEntry) {
        (**self).submit(entry)
    }
}

impl<T: Dispatch + ?Sized> Dispatch for Arc<T> {
    fn submit(&self, entry: &LogEntry) {
        (**self).submit(entry)
    }
}

#[derive(Clone, Default)]
pub struct Channel {
    policies: Vec<Arc<dyn Policy>>,
    drivers: Vec<Arc<dyn Driver>>,
    /// Shared with clones of this channel
    metrics: Arc<ChannelMetrics>,
    on_error: Option<DriverErrorCallback>,
}

impl Channel {
    /// Channel with no policies and no drivers
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Channel forwarding to `drivers`, without filtering
    #[must_use]
    pub fn with_drivers(drivers: Vec<Arc<dyn Driver>>) -> Self {
        Self {
            drivers,
            ..Self::default()
        }
    }

    /// Append drivers; the same driver may be registered more than once and
    /// then receives every accepted entry once per registration.
    pub fn register_drivers<I>(&mut self, drivers: I)
    where
        I: IntoIterator<Item = Arc<dyn Driver>>,
    {
        self.drivers.extend(drivers);
    }

    /// Append policies, evaluated after the ones already registered
    pub fn register_policies<I>(&mut self, policies: I)
    where
        I: IntoIterator<Item = Arc<dyn Policy>>,
    {
        self.policies.extend(policies);
    }

    pub fn add_driver<D: Driver + 'static>(&mut self, driver: D) {
        self.drivers.push(Arc::new(driver));
    }

    pub fn add_policy<P: Policy + 'static>(&mut self, policy: P) {
        self.policies.push(Arc::new(policy));
    }

    pub fn set_error_callback(&mut self, callback: DriverErrorCallback) {
        self.on_error = Some(callback);
    }

    /// Run the policy chain and, if it passes, hand `entry` to every driver.
    ///
    /// Never fails and never panics because of a driver: errors and panics are
    /// counted in [`metrics`](Self::metrics) and reported through the error
    /// callback (or stderr when none is set), and the remaining drivers still
    /// receive the entry.
    pub fn submit(&self, entry: &LogEntry) {
        self.metrics.record_submitted();

        if !self.accepts(entry) {
            self.metrics.record_filtered();
            return;
        }

        for driver in &self.drivers {
            self.deliver(driver.as_ref(), entry);
        }
    }

    /// `true` when every policy accepts `entry` (vacuously true with no policies)
    pub fn accepts(&self, entry: &LogEntry) -> bool {
        self.policies.iter().all(|policy| policy.transform_entry(entry))
    }

    fn deliver(&self, driver: &dyn Driver, entry: &LogEntry) {
        let result = catch_unwind(AssertUnwindSafe(|| driver.submit(entry)));

        let error = match result {
            Ok(Ok(())) => {
                self.metrics.record_delivered();
                return;
            }
            Ok(Err(e)) => e,
            Err(panic_info) => {
                LoggerError::driver_panicked(driver.name(), panic_message(&*panic_info))
            }
        };

        self.metrics.record_driver_failure();
        self.report(driver.name(), &error);
    }

    fn report(&self, driver: &str, error: &LoggerError) {
        match self.on_error {
            Some(ref callback) => {
                if catch_unwind(AssertUnwindSafe(|| callback(driver, error))).is_err() {
                    eprintln!(
                        "[LOGGER CRITICAL] Error callback panicked while reporting driver '{}': {}",
                        driver, error
                    );
                }
            }
            None => eprintln!("[LOGGER ERROR] Driver '{}' failed: {}", driver, error),
        }
    }

    /// Flush every driver, returning the first error after trying all of them
    pub fn flush(&self) -> Result<()> {
        let mut first_error = None;
        for driver in &self.drivers {
            if let Err(e) = driver.flush() {
                first_error.get_or_insert(e);
            }
        }
        match first_error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    pub fn metrics(&self) -> &ChannelMetrics {
        &self.metrics
    }

    pub fn driver_count(&self) -> usize {
        self.drivers.len()
    }

    pub fn policy_count(&self) -> usize {
        self.policies.len()
    }

    /// Names of the registered drivers, in registration order
    pub fn driver_names(&self) -> Vec<&str> {
        self.drivers.iter().map(|d| d.name()).collect()
    }

    /// Create a builder for Channel
    #[must_use]
    pub fn builder() -> ChannelBuilder {
        ChannelBuilder::new()
    }
}

impl Dispatch for Channel {
    fn submit(&self, entry: &LogEntry) {
        Channel::submit(self, entry)
    }
}

impl fmt::Debug for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Channel")
            .field(
                "policies",
                &self.policies.iter().map(|p| p.name()).collect::<Vec<_>>(),
            )
            .field("drivers", &self.driver_names())
            .field("metrics", &self.metrics)
            .field("on_error", &self.on_error.is_some())
            .finish()
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "Unknown panic".to_string()
    }
}

/// Builder for constructing a Channel with a fluent API
///
/// # Example
/// ```
/// use channel_logger::prelude::*;
/// use std::sync::Arc;
///
/// let channel = Channel::builder()
///     .min_level(LogLevel::Warn)
///     .driver(MemoryDriver::new())
///     .on_error(Arc::new(|driver: &str, err: &LoggerError| {
///         eprintln!("ALERT: driver {} failed: {}", driver, err);
///     }))
///     .build();
/// assert_eq!(channel.driver_count(), 1);
/// ```
#[derive(Default)]
pub struct ChannelBuilder {
    policies: Vec<Arc<dyn Policy>>,
    drivers: Vec<Arc<dyn Driver>>,
    on_error: Option<DriverErrorCallback>,
}

impl ChannelBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shorthand for `.policy(SeverityPolicy::new(level))`
    #[must_use = "builder methods return a new value"]
    pub fn min_level(self, level: LogLevel) -> Self {
        self.policy(SeverityPolicy::new(level))
    }

    #[must_use = "builder methods return a new value"]
    pub fn policy<P: Policy + 'static>(mut self, policy: P) -> Self {
        self.policies.push(Arc::new(policy));
        self
    }

    /// Add a policy that is also held elsewhere
    #[must_use = "builder methods return a new value"]
    pub fn shared_policy(mut self, policy: Arc<dyn Policy>) -> Self {
        self.policies.push(policy);
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn driver<D: Driver + 'static>(mut self, driver: D) -> Self {
        self.drivers.push(Arc::new(driver));
        self
    }

    /// Add a driver that is also attached to other channels
    #[must_use = "builder methods return a new value"]
    pub fn shared_driver(mut self, driver: Arc<dyn Driver>) -> Self {
        self.drivers.push(driver);
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn on_error(mut self, callback: DriverErrorCallback) -> Self {
        self.on_error = Some(callback);
        self
    }

    pub fn build(self) -> Channel {
        Channel {
            policies: self.policies,
            drivers: self.drivers,
            metrics: Arc::new(ChannelMetrics::new()),
            on_error: self.on_error,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{PredicatePolicy, SourceLocation};
    use parking_lot::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Default)]
    struct CountingDriver {
        count: AtomicUsize,
    }

    impl Driver for CountingDriver {
        fn submit(&self, _entry: &LogEntry) -> Result<()> {
            self.count.fetch_add(1, Ordering::Relaxed);
            Ok(())
        }

        fn name(&self) -> &str {
            "counting"
        }
    }

    struct OrderDriver {
        id: usize,
        log: Arc<Mutex<Vec<usize>>>,
    }

    impl Driver for OrderDriver {
        fn submit(&self, _entry: &LogEntry) -> Result<()> {
            self.log.lock().push(self.id);
            Ok(())
        }

        fn name(&self) -> &str {
            "order"
        }
    }

    struct FailingDriver;

    impl Driver for FailingDriver {
        fn submit(&self, _entry: &LogEntry) -> Result<()> {
            Err(LoggerError::other("Simulated failure"))
        }

        fn name(&self) -> &str {
            "failing"
        }
    }

    struct PanickingDriver;

    impl Driver for PanickingDriver {
        fn submit(&self, _entry: &LogEntry) -> Result<()> {
            panic!("driver exploded");
        }

        fn name(&self) -> &str {
            "panicking"
        }
    }

    fn entry(level: LogLevel) -> LogEntry {
        LogEntry::new(level, "test", SourceLocation::caller())
    }

    #[test]
    fn test_no_policies_forwards_everything() {
        let counter = Arc::new(CountingDriver::default());
        let channel = Channel::with_drivers(vec![counter.clone() as Arc<dyn Driver>]);

        for level in LogLevel::ALL {
            channel.submit(&entry(level));
        }

        assert_eq!(counter.count.load(Ordering::Relaxed), LogLevel::ALL.len());
        assert_eq!(channel.metrics().filtered(), 0);
    }

    #[test]
    fn test_drivers_called_in_registration_order() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let mut channel = Channel::new();
        for id in 0..4 {
            channel.add_driver(OrderDriver {
                id,
                log: Arc::clone(&log),
            });
        }

        channel.submit(&entry(LogLevel::Info));
        assert_eq!(*log.lock(), vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_first_rejection_short_circuits() {
        let second_calls = Arc::new(AtomicUsize::new(0));
        let second_calls_clone = Arc::clone(&second_calls);
        let counter = Arc::new(CountingDriver::default());

        let channel = Channel::builder()
            .policy(PredicatePolicy::new("reject-all", |_: &LogEntry| false))
            .policy(PredicatePolicy::new("spy", move |_: &LogEntry| {
                second_calls_clone.fetch_add(1, Ordering::Relaxed);
                true
            }))
            .shared_driver(counter.clone())
            .build();

        channel.submit(&entry(LogLevel::Info));

        assert_eq!(second_calls.load(Ordering::Relaxed), 0);
        assert_eq!(counter.count.load(Ordering::Relaxed), 0);
        assert_eq!(channel.metrics().filtered(), 1);
    }

    #[test]
    fn test_duplicate_driver_receives_twice() {
        let counter = Arc::new(CountingDriver::default());
        let mut channel = Channel::new();
        channel.register_drivers([
            counter.clone() as Arc<dyn Driver>,
            counter.clone() as Arc<dyn Driver>,
        ]);

        channel.submit(&entry(LogLevel::Info));
        assert_eq!(counter.count.load(Ordering::Relaxed), 2);
    }

    #[test]
    fn test_failing_driver_does_not_block_others() {
        let counter = Arc::new(CountingDriver::default());
        let reported = Arc::new(Mutex::new(Vec::new()));
        let reported_clone = Arc::clone(&reported);

        let channel = Channel::builder()
            .driver(FailingDriver)
            .driver(PanickingDriver)
            .shared_driver(counter.clone())
            .on_error(Arc::new(move |driver: &str, _err: &LoggerError| {
                reported_clone.lock().push(driver.to_string());
            }))
            .build();

        channel.submit(&entry(LogLevel::Info));

        assert_eq!(counter.count.load(Ordering::Relaxed), 1);
        assert_eq!(channel.metrics().driver_failures(), 2);
        assert_eq!(channel.metrics().delivered(), 1);
        assert_eq!(*reported.lock(), vec!["failing".to_string(), "panicking".to_string()]);
    }

    #[test]
    fn test_panicking_error_callback_is_contained() {
        let channel = Channel::builder()
            .driver(FailingDriver)
            .on_error(Arc::new(|_: &str, _: &LoggerError| panic!("callback exploded")))
            .build();

        channel.submit(&entry(LogLevel::Info));
        assert_eq!(channel.metrics().driver_failures(), 1);
    }

    #[test]
    fn test_clone_shares_drivers() {
        let counter = Arc::new(CountingDriver::default());
        let channel = Channel::builder().shared_driver(counter.clone()).build();
        let copy = channel.clone();

        channel.submit(&entry(LogLevel::Info));
        copy.submit(&entry(LogLevel::Info));

        assert_eq!(counter.count.load(Ordering::Relaxed), 2);
        assert_eq!(channel.metrics().submitted(), 2);
    }

    #[test]
    fn test_dispatch_through_references() {
        let counter = Arc::new(CountingDriver::default());
        let channel = Arc::new(Channel::builder().shared_driver(counter.clone()).build());

        Dispatch::submit(&channel, &entry(LogLevel::Info));
        Dispatch::submit(&&*channel, &entry(LogLevel::Info));
        let boxed: Box<dyn Dispatch> = Box::new(Channel::clone(&channel));
        boxed.submit(&entry(LogLevel::Info));

        assert_eq!(counter.count.load(Ordering::Relaxed), 3);
    }

    #[test]
    fn test_builder_counts() {
        let channel = Channel::builder()
            .min_level(LogLevel::Warn)
            .driver(CountingDriver::default())
            .build();
        assert_eq!(channel.policy_count(), 1);
        assert_eq!(channel.driver_count(), 1);
        assert_eq!(channel.driver_names(), vec!["counting"]);
    }
}
