//! Core pipeline types and traits

pub mod channel;
pub mod config;
pub mod driver;
pub mod entry_builder;
pub mod error;
pub mod formatter;
pub mod log_entry;
pub mod log_level;
pub mod metrics;
pub mod policy;
pub mod timestamp;

pub use channel::{Channel, ChannelBuilder, Dispatch, DriverErrorCallback};
pub use config::{LogConfig, DEFAULT_FILE_LOG_PATH};
pub use driver::Driver;
pub use entry_builder::EntryBuilder;
pub use error::{LoggerError, Result};
pub use formatter::{Formatter, JsonFormatter, TextFormatter};
pub use log_entry::{LogEntry, SourceLocation, UNKNOWN_FUNCTION};
pub use log_level::LogLevel;
pub use metrics::ChannelMetrics;
pub use policy::{Policy, PredicatePolicy, SamplingPolicy, SeverityPolicy};
pub use timestamp::TimestampFormat;
