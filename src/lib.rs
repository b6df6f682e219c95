//! # Channel Logger
//!
//! A synchronous structured-logging pipeline. An [`EntryBuilder`] captures a
//! log event with its call-site, a [`Channel`] filters it through a chain of
//! [`Policy`] values, and every registered [`Driver`] renders it with its
//! [`Formatter`] and writes it out.
//!
//! ## Features
//!
//! - **Builder API**: entries are submitted when the builder is finished or dropped
//! - **Policy Chain**: evaluated in order, first rejection wins
//! - **Multiple Drivers**: console, file and in-memory, plus custom drivers
//! - **Failure Isolation**: driver errors and panics never reach the caller
//!
//! ## Example
//!
//! ```
//! use channel_logger::entry;
//! use channel_logger::prelude::*;
//! use std::sync::Arc;
//!
//! let memory = Arc::new(MemoryDriver::new());
//! let mut channel = Channel::new();
//! channel.register_drivers([memory.clone() as Arc<dyn Driver>]);
//! channel.register_policies([Arc::new(SeverityPolicy::new(LogLevel::Warn)) as Arc<dyn Policy>]);
//!
//! // `entry!` records the enclosing function as well as file and line
//! entry!().info("accepted").channel(&channel);
//! EntryBuilder::new().fatal("filtered").channel(&channel);
//!
//! assert_eq!(memory.len(), 1);
//! ```

pub mod convenience;
pub mod core;
pub mod drivers;
pub mod macros;

pub mod prelude {
    pub use crate::convenience::{
        console_log, console_log_debug, console_log_error, console_log_fatal, console_log_info,
        console_log_trace, console_log_warn,
    };
    #[cfg(feature = "file")]
    pub use crate::convenience::{
        file_log, file_log_debug, file_log_error, file_log_fatal, file_log_info, file_log_trace,
        file_log_warn,
    };
    pub use crate::core::{
        Channel, ChannelBuilder, ChannelMetrics, Dispatch, Driver, DriverErrorCallback,
        EntryBuilder, Formatter, JsonFormatter, LogConfig, LogEntry, LogLevel, LoggerError,
        Policy, PredicatePolicy, Result, SamplingPolicy, SeverityPolicy, SourceLocation,
        TextFormatter, TimestampFormat, DEFAULT_FILE_LOG_PATH,
    };
    #[cfg(feature = "file")]
    pub use crate::drivers::FileDriver;
    pub use crate::drivers::{ConsoleDriver, ConsoleTarget, MemoryDriver};
}

#[cfg(feature = "file")]
pub use drivers::FileDriver;
pub use drivers::{ConsoleDriver, ConsoleTarget, MemoryDriver};
pub use core::{
    Channel, ChannelBuilder, ChannelMetrics, Dispatch, Driver, DriverErrorCallback, EntryBuilder,
    Formatter, JsonFormatter, LogConfig, LogEntry, LogLevel, LoggerError, Policy,
    PredicatePolicy, Result, SamplingPolicy, SeverityPolicy, SourceLocation, TextFormatter,
    TimestampFormat, DEFAULT_FILE_LOG_PATH,
};
