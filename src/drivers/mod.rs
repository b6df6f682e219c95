//! Driver implementations

pub mod console;
#[cfg(feature = "file")]
pub mod file;
pub mod memory;

pub use console::{ConsoleDriver, ConsoleTarget};
#[cfg(feature = "file")]
pub use file::FileDriver;
pub use memory::MemoryDriver;

pub use crate::core::Driver;
