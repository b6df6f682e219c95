//! Stress tests for shared channels
//!
//! These tests verify:
//! - A channel shared across threads delivers every accepted entry
//! - File records written from many threads never interleave
//! - Metrics stay consistent under concurrent submission

use channel_logger::core::channel::Channel;
use channel_logger::core::driver::Driver;
use channel_logger::core::entry_builder::EntryBuilder;
use channel_logger::core::error::{LoggerError, Result};
use channel_logger::core::log_entry::LogEntry;
use channel_logger::core::log_level::LogLevel;
use channel_logger::drivers::file::FileDriver;
use channel_logger::drivers::memory::MemoryDriver;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;
use tempfile::TempDir;

const THREADS: usize = 8;
const PER_THREAD: usize = 250;

#[test]
fn test_concurrent_submission_to_memory() {
    let memory = Arc::new(MemoryDriver::new());
    let channel = Arc::new(Channel::builder().shared_driver(memory.clone()).build());

    let handles: Vec<_> = (0..THREADS)
        .map(|t| {
            let channel = Arc::clone(&channel);
            thread::spawn(move || {
                for i in 0..PER_THREAD {
                    EntryBuilder::new()
                        .info(format!("thread {} message {}", t, i))
                        .channel(&*channel);
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().expect("Thread panicked");
    }

    assert_eq!(memory.len(), THREADS * PER_THREAD);
    assert_eq!(channel.metrics().submitted(), (THREADS * PER_THREAD) as u64);
    assert_eq!(channel.metrics().delivered(), (THREADS * PER_THREAD) as u64);
}

#[test]
fn test_concurrent_file_records_stay_whole() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let log_file = temp_dir.path().join("concurrent.log");

    let channel = Arc::new(
        Channel::builder()
            .driver(FileDriver::new(&log_file).expect("Failed to create driver"))
            .build(),
    );

    let handles: Vec<_> = (0..THREADS)
        .map(|t| {
            let channel = Arc::clone(&channel);
            thread::spawn(move || {
                for i in 0..PER_THREAD {
                    EntryBuilder::new()
                        .warn(format!("worker-{}-{}", t, i))
                        .channel(channel.as_ref());
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().expect("Thread panicked");
    }
    channel.flush().expect("Failed to flush");

    let content = std::fs::read_to_string(&log_file).expect("Failed to read log file");
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), THREADS * PER_THREAD * 2);

    // every record is a header line followed by its location line
    for pair in lines.chunks(2) {
        assert!(pair[0].starts_with("[WARN] ("), "broken header: {}", pair[0]);
        assert!(pair[0].contains("\"worker-"), "broken header: {}", pair[0]);
        assert!(pair[1].starts_with("   "), "broken location: {}", pair[1]);
    }

    for t in 0..THREADS {
        for i in [0, PER_THREAD - 1] {
            assert!(content.contains(&format!("\"worker-{}-{}\"", t, i)));
        }
    }
}

#[test]
fn test_concurrent_failures_are_counted() {
    struct FlakyDriver {
        calls: AtomicUsize,
    }

    impl Driver for FlakyDriver {
        fn submit(&self, _entry: &LogEntry) -> Result<()> {
            let call = self.calls.fetch_add(1, Ordering::Relaxed);
            if call % 2 == 0 {
                Err(LoggerError::other("every other write fails"))
            } else {
                Ok(())
            }
        }

        fn name(&self) -> &str {
            "flaky"
        }
    }

    let flaky = Arc::new(FlakyDriver {
        calls: AtomicUsize::new(0),
    });
    let reported = Arc::new(AtomicUsize::new(0));
    let reported_clone = Arc::clone(&reported);

    let channel = Arc::new(
        Channel::builder()
            .min_level(LogLevel::Error)
            .shared_driver(flaky.clone())
            .on_error(Arc::new(move |_driver: &str, _err: &LoggerError| {
                reported_clone.fetch_add(1, Ordering::Relaxed);
            }))
            .build(),
    );

    let handles: Vec<_> = (0..THREADS)
        .map(|_| {
            let channel = Arc::clone(&channel);
            thread::spawn(move || {
                for _ in 0..PER_THREAD {
                    EntryBuilder::new().debug("accepted").channel(&*channel);
                    EntryBuilder::new().fatal("filtered").channel(&*channel);
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().expect("Thread panicked");
    }

    let total = (THREADS * PER_THREAD) as u64;
    let metrics = channel.metrics();
    assert_eq!(metrics.submitted(), total * 2);
    assert_eq!(metrics.filtered(), total);
    assert_eq!(metrics.delivered() + metrics.driver_failures(), total);
    assert_eq!(metrics.driver_failures(), total / 2);
    assert_eq!(reported.load(Ordering::Relaxed) as u64, total / 2);
}
