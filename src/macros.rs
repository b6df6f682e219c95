//! Logging macros
//!
//! The macros capture the full call-site, including the enclosing function,
//! which plain [`EntryBuilder::new`](crate::EntryBuilder::new) and the
//! convenience functions cannot do. `console_log!` and `file_log!` are the
//! macro forms of the convenience entry points.
//!
//! # Examples
//!
//! ```
//! use channel_logger::prelude::*;
//! use channel_logger::{entry, info};
//!
//! let memory = std::sync::Arc::new(MemoryDriver::new());
//! let channel = Channel::builder().shared_driver(memory.clone()).build();
//!
//! // Basic logging
//! info!(channel, "Server started");
//!
//! // With format arguments
//! let port = 8080;
//! info!(channel, "Server listening on port {}", port);
//!
//! // Builder with the full call-site
//! entry!().warn("Retrying").channel(&channel);
//!
//! assert_eq!(memory.len(), 3);
//! ```

/// Path of the enclosing function, e.g. `my_crate::server::start`
#[macro_export]
macro_rules! function_name {
    () => {{
        fn __f() {}
        fn __type_name_of<T>(_: T) -> &'static str {
            ::std::any::type_name::<T>()
        }
        let name = __type_name_of(__f);
        match name.strip_suffix("::__f") {
            Some(stripped) => stripped,
            None => name,
        }
    }};
}

/// [`SourceLocation`](crate::SourceLocation) of the macro invocation
#[macro_export]
macro_rules! source_location {
    () => {
        $crate::SourceLocation::new(file!(), line!(), column!(), $crate::function_name!())
    };
}

/// Start an [`EntryBuilder`](crate::EntryBuilder) at the macro invocation
#[macro_export]
macro_rules! entry {
    () => {
        $crate::EntryBuilder::at($crate::source_location!())
    };
}

/// Submit a formatted message at `level` to a channel.
///
/// # Examples
///
/// ```
/// # use channel_logger::prelude::*;
/// # let channel = Channel::new();
/// use channel_logger::log;
/// log!(channel, LogLevel::Info, "Simple message");
/// log!(channel, LogLevel::Error, "Error code: {}", 500);
/// ```
#[macro_export]
macro_rules! log {
    ($channel:expr, $level:expr, $($arg:tt)+) => {
        $crate::entry!()
            .level($level)
            .text(format!($($arg)+))
            .channel(&$channel)
            .finish()
    };
}

/// Log a trace-level message.
#[macro_export]
macro_rules! trace {
    ($channel:expr, $($arg:tt)+) => {
        $crate::log!($channel, $crate::LogLevel::Trace, $($arg)+)
    };
}

/// Log a debug-level message.
#[macro_export]
macro_rules! debug {
    ($channel:expr, $($arg:tt)+) => {
        $crate::log!($channel, $crate::LogLevel::Debug, $($arg)+)
    };
}

/// Log an info-level message.
///
/// ```
/// # use channel_logger::prelude::*;
/// # let channel = Channel::new();
/// use channel_logger::info;
/// info!(channel, "Processing {} items", 100);
/// ```
#[macro_export]
macro_rules! info {
    ($channel:expr, $($arg:tt)+) => {
        $crate::log!($channel, $crate::LogLevel::Info, $($arg)+)
    };
}

/// Log a warning-level message.
#[macro_export]
macro_rules! warn {
    ($channel:expr, $($arg:tt)+) => {
        $crate::log!($channel, $crate::LogLevel::Warn, $($arg)+)
    };
}

/// Log an error-level message.
#[macro_export]
macro_rules! error {
    ($channel:expr, $($arg:tt)+) => {
        $crate::log!($channel, $crate::LogLevel::Error, $($arg)+)
    };
}

/// Log a fatal-level message.
#[macro_export]
macro_rules! fatal {
    ($channel:expr, $($arg:tt)+) => {
        $crate::log!($channel, $crate::LogLevel::Fatal, $($arg)+)
    };
}

/// Write one formatted entry to stdout, recording the enclosing function.
///
/// Macro form of [`console_log`](crate::convenience::console_log); the
/// `console_log_trace!` … `console_log_fatal!` variants fix the level.
///
/// ```
/// use channel_logger::prelude::*;
/// use channel_logger::{console_log, console_log_info};
///
/// console_log!(LogLevel::Warn, "queue depth {}", 42);
/// console_log_info!("ready");
/// ```
#[macro_export]
macro_rules! console_log {
    ($level:expr, $($arg:tt)+) => {
        $crate::LogConfig::default().console_log_at(
            $crate::source_location!(),
            format!($($arg)+),
            $level,
        )
    };
}

#[macro_export]
macro_rules! console_log_trace {
    ($($arg:tt)+) => {
        $crate::console_log!($crate::LogLevel::Trace, $($arg)+)
    };
}

#[macro_export]
macro_rules! console_log_debug {
    ($($arg:tt)+) => {
        $crate::console_log!($crate::LogLevel::Debug, $($arg)+)
    };
}

#[macro_export]
macro_rules! console_log_info {
    ($($arg:tt)+) => {
        $crate::console_log!($crate::LogLevel::Info, $($arg)+)
    };
}

#[macro_export]
macro_rules! console_log_warn {
    ($($arg:tt)+) => {
        $crate::console_log!($crate::LogLevel::Warn, $($arg)+)
    };
}

#[macro_export]
macro_rules! console_log_error {
    ($($arg:tt)+) => {
        $crate::console_log!($crate::LogLevel::Error, $($arg)+)
    };
}

#[macro_export]
macro_rules! console_log_fatal {
    ($($arg:tt)+) => {
        $crate::console_log!($crate::LogLevel::Fatal, $($arg)+)
    };
}

/// Append one formatted entry to a file, recording the enclosing function.
///
/// Macro form of [`file_log`](crate::convenience::file_log); the
/// `file_log_trace!` … `file_log_fatal!` variants fix the level.
///
/// ```no_run
/// use channel_logger::prelude::*;
/// use channel_logger::{file_log, file_log_error, DEFAULT_FILE_LOG_PATH};
///
/// file_log!(DEFAULT_FILE_LOG_PATH, LogLevel::Info, "started on port {}", 8080);
/// file_log_error!("log/db.txt", "database unreachable");
/// ```
#[macro_export]
macro_rules! file_log {
    ($path:expr, $level:expr, $($arg:tt)+) => {
        $crate::LogConfig::default().file_log_at(
            $crate::source_location!(),
            format!($($arg)+),
            $path,
            $level,
        )
    };
}

#[macro_export]
macro_rules! file_log_trace {
    ($path:expr, $($arg:tt)+) => {
        $crate::file_log!($path, $crate::LogLevel::Trace, $($arg)+)
    };
}

#[macro_export]
macro_rules! file_log_debug {
    ($path:expr, $($arg:tt)+) => {
        $crate::file_log!($path, $crate::LogLevel::Debug, $($arg)+)
    };
}

#[macro_export]
macro_rules! file_log_info {
    ($path:expr, $($arg:tt)+) => {
        $crate::file_log!($path, $crate::LogLevel::Info, $($arg)+)
    };
}

#[macro_export]
macro_rules! file_log_warn {
    ($path:expr, $($arg:tt)+) => {
        $crate::file_log!($path, $crate::LogLevel::Warn, $($arg)+)
    };
}

#[macro_export]
macro_rules! file_log_error {
    ($path:expr, $($arg:tt)+) => {
        $crate::file_log!($path, $crate::LogLevel::Error, $($arg)+)
    };
}

#[macro_export]
macro_rules! file_log_fatal {
    ($path:expr, $($arg:tt)+) => {
        $crate::file_log!($path, $crate::LogLevel::Fatal, $($arg)+)
    };
}

#[cfg(test)]
mod tests {
    use crate::core::{Channel, LogLevel};
    use crate::drivers::MemoryDriver;
    use std::sync::Arc;

    fn memory_channel() -> (Arc<MemoryDriver>, Channel) {
        let memory = Arc::new(MemoryDriver::new());
        let channel = Channel::builder().shared_driver(memory.clone()).build();
        (memory, channel)
    }

    #[test]
    fn test_function_name() {
        let name = function_name!();
        assert!(name.ends_with("macros::tests::test_function_name"), "{}", name);
    }

    #[test]
    fn test_source_location() {
        let location = source_location!();
        assert_eq!(location.line, line!() - 1);
        assert!(location.file.ends_with("macros.rs"));
        assert!(location.function.ends_with("test_source_location"));
    }

    #[test]
    fn test_log_macro() {
        let (memory, channel) = memory_channel();
        log!(channel, LogLevel::Info, "Test message");
        log!(channel, LogLevel::Info, "Formatted: {}", 42);

        let records = memory.records();
        assert_eq!(records.len(), 2);
        assert!(records[1].contains("\"Formatted: 42\""));
        assert!(records[1].contains("in function: "));
        assert!(records[1].contains("test_log_macro"));
    }

    #[test]
    fn test_level_macros() {
        let (memory, channel) = memory_channel();
        trace!(channel, "Trace message");
        debug!(channel, "Count: {}", 5);
        info!(channel, "Items: {}", 100);
        warn!(channel, "Retry {} of {}", 1, 3);
        error!(channel, "Code: {}", 500);
        fatal!(channel, "Critical failure: {}", "system");

        let contents = memory.contents();
        for name in ["[TRACE]", "[DEBUG]", "[INFO]", "[WARN]", "[ERROR]", "[FATAL]"] {
            assert!(contents.contains(name), "missing {}", name);
        }
    }

    #[test]
    fn test_macro_respects_policies() {
        let memory = Arc::new(MemoryDriver::new());
        let channel = Channel::builder()
            .min_level(LogLevel::Warn)
            .shared_driver(memory.clone())
            .build();

        let channel_ref = &channel;
        error!(channel_ref, "rejected under the level order");
        debug!(channel_ref, "accepted under the level order");

        assert_eq!(memory.len(), 1);
        assert!(memory.contents().contains("[DEBUG]"));
    }

    #[test]
    fn test_entry_macro() {
        let (memory, channel) = memory_channel();
        entry!().fatal("via builder").channel(&channel);
        assert!(memory.contents().contains("test_entry_macro"));
    }
}
