//! Driver trait for log output destinations

use super::{error::Result, log_entry::LogEntry};

/// An output sink for log entries
///
/// Drivers are shared between channels through `Arc<dyn Driver>`, so `submit`
/// takes `&self`; drivers that own OS resources guard them internally. A driver
/// reports failures through its return value and the channel decides what to
/// do with them. Drivers that render text own a
/// [`Formatter`](super::formatter::Formatter).
pub trait Driver: Send + Sync {
    fn submit(&self, entry: &LogEntry) -> Result<()>;

    fn flush(&self) -> Result<()> {
        Ok(())
    }

    fn name(&self) -> &str;
}
