//! Basic usage example
//!
//! Demonstrates the one-call console macros, a channel with a severity
//! policy, and the channel logging macros.
//!
//! Run with: cargo run --example basic_usage

use channel_logger::prelude::*;
use channel_logger::{
    console_log, console_log_debug, console_log_error, console_log_fatal, console_log_info,
    console_log_trace, console_log_warn, entry, info, warn,
};

fn main() -> Result<()> {
    println!("=== Channel Logger - Basic Usage Example ===\n");

    println!("1. One-call console logging at every level:");
    console_log_trace!("trace");
    console_log_debug!("debug");
    console_log_info!("infor");
    console_log_warn!("warnn");
    console_log_error!("error");
    console_log_fatal!("fatal");
    console_log!(LogLevel::Info, "{} levels logged", LogLevel::ALL.len() - 1);

    println!("\n2. A channel with a WARN threshold:");
    println!("   Levels numerically at or above WARN pass (WARN, INFO, DEBUG, TRACE):");
    let channel = Channel::builder()
        .min_level(LogLevel::Warn)
        .driver(ConsoleDriver::new())
        .build();

    EntryBuilder::new().info("Info message (visible)").channel(&channel);
    EntryBuilder::new().warn("Warning message (visible)").channel(&channel);
    EntryBuilder::new().error("Error message (hidden)").channel(&channel);
    EntryBuilder::new().fatal("Fatal message (hidden)").channel(&channel);

    println!("\n3. Macros record the enclosing function:");
    info!(channel, "Server listening on port {}", 8080);
    warn!(channel, "Retry {} of {}", 1, 3);
    entry!().debug("Built with entry!").channel(&channel);
    EntryBuilder::new().debug("Plain builder: function is <unknown>").channel(&channel);

    let metrics = channel.metrics();
    println!(
        "\n   submitted: {}, filtered: {}, delivered: {}",
        metrics.submitted(),
        metrics.filtered(),
        metrics.delivered()
    );

    println!("\n=== Example completed successfully! ===");

    Ok(())
}
