//! Configuration management for the Cadastro desktop app
//!
//! Thin wrapper around the shared configuration manager that resolves the
//! platform config path and writes defaults on first run.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

pub use cadastro_shared::{AppConfig, ConfigManager as SharedConfigManager, DesktopFileProvider};

/// Default config file location: `<config_dir>/cadastro/config.yml`
pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| dirs::home_dir().unwrap_or_default().join(".config"))
        .join("cadastro")
        .join("config.yml")
}

/// Desktop configuration manager
pub struct ConfigManager {
    shared_manager: SharedConfigManager<DesktopFileProvider>,
}

impl ConfigManager {
    /// Manager for `path`, or the default location when `None`
    pub fn new(path: Option<&Path>) -> Self {
        let config_path = path
            .map(Path::to_path_buf)
            .unwrap_or_else(default_config_path);
        debug!("Config file path: {:?}", config_path);

        let shared_manager = SharedConfigManager::new(
            DesktopFileProvider::new(),
            config_path.to_string_lossy().to_string(),
        );

        Self { shared_manager }
    }

    /// Load the configuration, writing defaults back if the file was missing.
    /// A failed write-back is logged and does not stop startup.
    pub fn load(&mut self) -> Result<()> {
        let existed = Path::new(self.shared_manager.config_path()).exists();

        self.shared_manager.load().with_context(|| {
            format!(
                "Failed to load config from {}",
                self.shared_manager.config_path()
            )
        })?;

        if !existed {
            info!(
                "Writing default configuration to {}",
                self.shared_manager.config_path()
            );
            if let Err(e) = self.save() {
                warn!("Could not write default configuration: {e:#}");
            }
        }

        Ok(())
    }

    /// Save the current configuration to disk
    pub fn save(&self) -> Result<()> {
        self.shared_manager.save().with_context(|| {
            format!(
                "Failed to save config to {}",
                self.shared_manager.config_path()
            )
        })
    }

    pub fn config(&self) -> &AppConfig {
        self.shared_manager.config()
    }

    pub fn config_path(&self) -> &str {
        self.shared_manager.config_path()
    }
}

/// Load the configuration at `path` (or the default location)
pub fn load_config(path: Option<&Path>) -> Result<AppConfig> {
    let mut manager = ConfigManager::new(path);
    manager.load()?;
    info!("Configuration loaded from {}", manager.config_path());
    Ok(manager.config().clone())
}
