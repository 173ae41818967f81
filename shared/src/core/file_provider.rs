//! File operation provider interface for Cadastro
//!
//! Configuration persistence goes through [`FileOperationProvider`] so the
//! config manager stays independent of the platform's file handling and can
//! be exercised in memory by tests.

use std::collections::HashMap;
use std::sync::Mutex;

use crate::core::errors::{FileError, FileResult};

/// Trait for providing file operations to the configuration manager
pub trait FileOperationProvider: Send + Sync {
    /// Read a whole file
    ///
    /// # Returns
    /// * `Ok(Vec<u8>)` - File contents as bytes
    /// * `Err(FileError)` - If the file cannot be read
    fn read_file(&self, path: &str) -> FileResult<Vec<u8>>;

    /// Write a whole file, replacing any previous contents
    ///
    /// Implementations create missing parent directories.
    fn write_file(&self, path: &str, data: &[u8]) -> FileResult<()>;
}

/// Desktop file provider backed by `std::fs`
#[derive(Debug, Default)]
pub struct DesktopFileProvider;

impl DesktopFileProvider {
    /// Create a new desktop file provider
    pub fn new() -> Self {
        Self
    }
}

impl FileOperationProvider for DesktopFileProvider {
    fn read_file(&self, path: &str) -> FileResult<Vec<u8>> {
        std::fs::read(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => FileError::NotFound {
                path: path.to_string(),
            },
            std::io::ErrorKind::PermissionDenied => FileError::PermissionDenied {
                path: path.to_string(),
            },
            _ => FileError::IoError {
                message: format!("Failed to read '{}': {}", path, e),
            },
        })
    }

    fn write_file(&self, path: &str, data: &[u8]) -> FileResult<()> {
        // Ensure parent directory exists
        if let Some(parent) = std::path::Path::new(path).parent() {
            if let Err(e) = std::fs::create_dir_all(parent) {
                if e.kind() != std::io::ErrorKind::AlreadyExists {
                    return Err(FileError::IoError {
                        message: format!("Failed to create directory for '{}': {}", path, e),
                    });
                }
            }
        }

        std::fs::write(path, data).map_err(|e| match e.kind() {
            std::io::ErrorKind::PermissionDenied => FileError::PermissionDenied {
                path: path.to_string(),
            },
            _ => FileError::IoError {
                message: format!("Failed to write '{}': {}", path, e),
            },
        })
    }
}

/// In-memory file provider for testing
#[derive(Debug, Default)]
pub struct MockFileProvider {
    files: Mutex<HashMap<String, Vec<u8>>>,
    should_fail: bool,
}

impl MockFileProvider {
    /// Create a new mock file provider
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock provider that fails every operation
    pub fn with_failure() -> Self {
        Self {
            files: Mutex::new(HashMap::new()),
            should_fail: true,
        }
    }

    /// Seed a file
    pub fn add_file<P: Into<String>>(&mut self, path: P, data: Vec<u8>) {
        if let Ok(files) = self.files.get_mut() {
            files.insert(path.into(), data);
        }
    }

    /// Contents of a previously written file
    pub fn file(&self, path: &str) -> Option<Vec<u8>> {
        self.files.lock().ok()?.get(path).cloned()
    }
}

impl FileOperationProvider for MockFileProvider {
    fn read_file(&self, path: &str) -> FileResult<Vec<u8>> {
        if self.should_fail {
            return Err(FileError::PermissionDenied {
                path: path.to_string(),
            });
        }

        let files = self.files.lock().map_err(|e| FileError::IoError {
            message: e.to_string(),
        })?;

        files.get(path).cloned().ok_or_else(|| FileError::NotFound {
            path: path.to_string(),
        })
    }

    fn write_file(&self, path: &str, data: &[u8]) -> FileResult<()> {
        if self.should_fail {
            return Err(FileError::PermissionDenied {
                path: path.to_string(),
            });
        }

        let mut files = self.files.lock().map_err(|e| FileError::IoError {
            message: e.to_string(),
        })?;
        files.insert(path.to_string(), data.to_vec());
        Ok(())
    }
}
