//! Core building blocks shared by the rest of the library
//!
//! - Error types for file and configuration handling
//! - File operation provider interface for platform abstraction

pub mod errors;
pub mod file_provider;

// Re-export commonly used items
pub use errors::{CoreError, CoreResult, FileError, FileResult};
pub use file_provider::{DesktopFileProvider, FileOperationProvider, MockFileProvider};
