//! Configuration management for Cadastro
//!
//! Desktop apps keep a small YAML file with presentation settings. All file
//! access goes through a [`FileOperationProvider`] so tests can run the
//! manager entirely in memory.

pub mod app_config;

pub use app_config::*;

use tracing::{debug, warn};

use crate::core::{CoreError, CoreResult, FileError, FileOperationProvider};

/// Configuration manager for desktop applications
///
/// Handles loading, saving, and accessing the application configuration file.
pub struct ConfigManager<F: FileOperationProvider> {
    file_provider: F,
    config_path: String,
    app_config: AppConfig,
    loaded: bool,
}

impl<F: FileOperationProvider> ConfigManager<F> {
    /// Create a new configuration manager
    ///
    /// # Arguments
    /// * `file_provider` - File operation provider for config persistence
    /// * `config_path` - Path to the configuration file
    pub fn new(file_provider: F, config_path: String) -> Self {
        Self {
            file_provider,
            config_path,
            app_config: AppConfig::default(),
            loaded: false,
        }
    }

    /// Load configuration from file
    ///
    /// A missing file yields the default configuration. Any other read
    /// failure, or a file that does not parse, is an error. Unusable UI
    /// sizes are replaced by their defaults.
    pub fn load(&mut self) -> CoreResult<()> {
        match self.file_provider.read_file(&self.config_path) {
            Ok(data) => {
                let config_str =
                    String::from_utf8(data).map_err(|e| CoreError::SerializationError {
                        message: format!("Invalid UTF-8 in config file: {e}"),
                    })?;

                let parsed: AppConfig = if config_str.trim().is_empty() {
                    AppConfig::default()
                } else {
                    serde_yaml::from_str(&config_str).map_err(|e| {
                        CoreError::SerializationError {
                            message: format!("Failed to parse config YAML: {e}"),
                        }
                    })?
                };

                let sanitized = parsed.clone().sanitized();
                if sanitized != parsed {
                    warn!(
                        "Out-of-range values in {} replaced by defaults",
                        self.config_path
                    );
                }
                self.app_config = sanitized;
            }
            Err(FileError::NotFound { path }) => {
                debug!("No config file at {}, using defaults", path);
                self.app_config = AppConfig::default();
            }
            Err(e) => return Err(e.into()),
        }

        self.loaded = true;
        Ok(())
    }

    /// Save configuration to file
    pub fn save(&self) -> CoreResult<()> {
        if !self.loaded {
            return Err(CoreError::NotLoaded);
        }

        let config_yaml =
            serde_yaml::to_string(&self.app_config).map_err(|e| CoreError::SerializationError {
                message: format!("Failed to serialize config: {e}"),
            })?;

        self.file_provider
            .write_file(&self.config_path, config_yaml.as_bytes())?;

        Ok(())
    }

    /// Get immutable reference to configuration
    pub fn config(&self) -> &AppConfig {
        &self.app_config
    }

    /// Get mutable reference to configuration
    pub fn config_mut(&mut self) -> &mut AppConfig {
        &mut self.app_config
    }

    /// Check if configuration has been loaded
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Path of the configuration file
    pub fn config_path(&self) -> &str {
        &self.config_path
    }

    /// Access to the underlying file provider
    pub fn file_provider(&self) -> &F {
        &self.file_provider
    }
}
