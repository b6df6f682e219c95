//! File logging example
//!
//! Demonstrates the one-call file macros and a channel that writes to the
//! console and a file at the same time.
//!
//! Run with: cargo run --example file_logging

use channel_logger::prelude::*;
use channel_logger::{file_log, file_log_fatal, file_log_info, file_log_trace};

fn main() -> Result<()> {
    println!("=== Channel Logger - File Logging Example ===\n");

    println!("1. One-call logging to '{}':", DEFAULT_FILE_LOG_PATH);
    file_log_trace!(DEFAULT_FILE_LOG_PATH, "trace in file");
    file_log!(DEFAULT_FILE_LOG_PATH, LogLevel::Debug, "debug in file");
    file_log_info!(DEFAULT_FILE_LOG_PATH, "infor in file");
    file_log!(DEFAULT_FILE_LOG_PATH, LogLevel::Warn, "warnn in file");
    file_log!(DEFAULT_FILE_LOG_PATH, LogLevel::Error, "error in file");
    file_log_fatal!(DEFAULT_FILE_LOG_PATH, "fatal in file");

    println!("\n2. Logging to both console and file:");
    let channel = Channel::builder()
        .driver(ConsoleDriver::new())
        .driver(FileDriver::new("application.log")?.with_formatter(JsonFormatter::new()))
        .build();

    EntryBuilder::new().info("Application started").channel(&channel);
    EntryBuilder::new().debug("Loading configuration...").channel(&channel);
    EntryBuilder::new().warn("Using default settings for some options").channel(&channel);
    EntryBuilder::new().error("Failed to load optional plugin").channel(&channel);

    for i in 1..=5 {
        EntryBuilder::new()
            .info(format!("Processing item {}/5", i))
            .channel(&channel);
    }

    channel.flush()?;

    println!("\n=== Example completed successfully! ===");
    println!("Check '{}' and 'application.log' for the file output", DEFAULT_FILE_LOG_PATH);

    Ok(())
}
