//! File driver implementation

use crate::core::{Driver, Formatter, LogEntry, LoggerError, Result, TextFormatter};
use parking_lot::Mutex;
use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Appends formatted entries to a file
///
/// The file is opened in append mode when the driver is created and stays
/// open for the driver's lifetime. Missing parent directories are created.
/// Writes go straight to the file without an extra buffer.
pub struct FileDriver {
    path: PathBuf,
    file: Mutex<File>,
    formatter: Box<dyn Formatter>,
}

impl FileDriver {
    /// Open `path` for appending, using the [`TextFormatter`]
    ///
    /// Fails if a parent directory cannot be created or the file cannot be
    /// opened.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use channel_logger::drivers::FileDriver;
    ///
    /// let driver = FileDriver::new("log/log.txt").unwrap();
    /// ```
    pub fn new(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let file = Self::open(&path)?;

        Ok(Self {
            path,
            file: Mutex::new(file),
            formatter: Box::new(TextFormatter::new()),
        })
    }

    fn open(path: &Path) -> Result<File> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .map_err(|e| LoggerError::directory_creation(parent.display().to_string(), e))?;
        }

        OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| {
                LoggerError::io_operation(
                    format!("opening '{}'", path.display()),
                    "cannot open log file for appending",
                    e,
                )
            })
    }

    /// Replace the formatter
    #[must_use]
    pub fn with_formatter<F: Formatter + 'static>(mut self, formatter: F) -> Self {
        self.formatter = Box::new(formatter);
        self
    }

    pub fn set_formatter(&mut self, formatter: Box<dyn Formatter>) {
        self.formatter = formatter;
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Driver for FileDriver {
    fn submit(&self, entry: &LogEntry) -> Result<()> {
        let output = self.formatter.format(entry);

        let mut file = self.file.lock();
        file.write_all(output.as_bytes())
            .map_err(|e| LoggerError::file_driver(self.path.display().to_string(), e.to_string()))
    }

    fn flush(&self) -> Result<()> {
        self.file
            .lock()
            .flush()
            .map_err(|e| LoggerError::file_driver(self.path.display().to_string(), e.to_string()))
    }

    fn name(&self) -> &str {
        "file"
    }
}

impl Drop for FileDriver {
    fn drop(&mut self) {
        let _ = self.flush();
    }
}
