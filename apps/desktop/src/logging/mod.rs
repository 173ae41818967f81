//! Logging configuration for the Cadastro desktop app
//!
//! Structured logging to the console and to a daily-rotated file. Settings
//! come from a preset chosen by environment, optionally overridden by a YAML
//! file keyed by environment name.

use anyhow::{Context, Result};
use is_terminal::IsTerminal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// YAML configuration structures
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct YamlLoggingConfig {
    pub console: ConsoleConfig,
    pub file: FileConfig,
    pub rotation: RotationConfig,
    #[serde(default)]
    pub features: FeaturesConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConsoleConfig {
    pub enabled: bool,
    pub level: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileConfig {
    pub enabled: bool,
    pub level: String,
    pub directory: String,
    pub filename: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RotationConfig {
    pub max_files: usize,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FeaturesConfig {
    pub thread_ids: bool,
    pub source_location: bool,
}

/// Log rotation configuration. Files roll over daily.
#[derive(Debug, Clone, PartialEq)]
pub struct LogRotationConfig {
    /// Maximum number of daily log files to keep (default: 5)
    pub max_files: usize,
}

impl Default for LogRotationConfig {
    fn default() -> Self {
        Self { max_files: 5 }
    }
}

/// Logging configuration for the application
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Directory where log files will be stored
    pub log_dir: PathBuf,
    /// Base name for log files (default: "cadastro")
    pub log_file_name: String,
    /// Log level for console output
    pub console_level: String,
    /// Log level for file output
    pub file_level: String,
    /// Whether to enable console logging
    pub enable_console: bool,
    /// Whether to enable file logging
    pub enable_file: bool,
    /// Log rotation configuration
    pub rotation: LogRotationConfig,
    /// Whether to include thread IDs in logs
    pub include_thread_ids: bool,
    /// Whether to include source code locations in logs
    pub include_source_location: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            log_dir: get_default_log_dir(),
            log_file_name: "cadastro".to_string(),
            console_level: "INFO".to_string(),
            file_level: "DEBUG".to_string(),
            enable_console: true,
            enable_file: true,
            rotation: LogRotationConfig::default(),
            include_thread_ids: false,
            include_source_location: false,
        }
    }
}

impl LoggingConfig {
    /// Create a new logging configuration with custom log directory
    pub fn new(log_dir: PathBuf) -> Self {
        Self {
            log_dir,
            ..Default::default()
        }
    }

    /// Set console log level
    pub fn console_level(mut self, level: &str) -> Self {
        self.console_level = level.to_string();
        self
    }

    /// Create development configuration with more verbose logging
    pub fn development() -> Self {
        Self {
            console_level: "DEBUG".to_string(),
            file_level: "TRACE".to_string(),
            include_thread_ids: true,
            include_source_location: true,
            ..Default::default()
        }
    }

    /// Create production configuration
    pub fn production() -> Self {
        Self {
            console_level: "WARN".to_string(),
            file_level: "INFO".to_string(),
            rotation: LogRotationConfig { max_files: 10 },
            ..Default::default()
        }
    }

    /// Configuration used by test runs: verbose, logs kept under target/
    pub fn testing() -> Self {
        Self {
            console_level: "DEBUG".to_string(),
            file_level: "DEBUG".to_string(),
            include_thread_ids: true,
            include_source_location: true,
            ..Self::new(PathBuf::from("./target/test-logs"))
        }
    }
}

/// Initialize logging with the given configuration
pub fn initialize_logging(config: LoggingConfig) -> Result<()> {
    if config.enable_file {
        fs::create_dir_all(&config.log_dir)
            .with_context(|| format!("Failed to create log directory: {:?}", config.log_dir))?;
    }

    let mut layers = Vec::new();

    if config.enable_console {
        let console_filter =
            EnvFilter::try_new(&config.console_level).unwrap_or_else(|_| EnvFilter::new("INFO"));

        let console_layer = fmt::layer()
            .with_target(false)
            .with_thread_ids(config.include_thread_ids)
            .with_file(config.include_source_location)
            .with_line_number(config.include_source_location)
            .with_ansi(std::io::stdout().is_terminal())
            .with_writer(std::io::stdout)
            .with_filter(console_filter);

        layers.push(console_layer.boxed());
    }

    if config.enable_file {
        let file_filter =
            EnvFilter::try_new(&config.file_level).unwrap_or_else(|_| EnvFilter::new("DEBUG"));

        let file_appender = build_file_appender(&config)?;

        let file_layer = fmt::layer()
            .with_target(true)
            .with_thread_ids(config.include_thread_ids)
            .with_file(config.include_source_location)
            .with_line_number(config.include_source_location)
            .with_ansi(false)
            .with_writer(file_appender)
            .with_filter(file_filter);

        layers.push(file_layer.boxed());
    }

    tracing_subscriber::registry()
        .with(layers)
        .try_init()
        .context("Failed to initialize tracing subscriber")?;

    info!(
        "Console logging: {} (level: {})",
        config.enable_console, config.console_level
    );
    info!(
        "File logging: {} (level: {}) at {:?}",
        config.enable_file, config.file_level, config.log_dir
    );

    Ok(())
}

/// Daily-rotated appender writing `<log_file_name>.<date>.log` under `log_dir`.
/// Only files with that exact naming are pruned beyond `rotation.max_files`.
fn build_file_appender(config: &LoggingConfig) -> Result<RollingFileAppender> {
    RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(&config.log_file_name)
        .filename_suffix("log")
        .max_log_files(config.rotation.max_files.max(1))
        .build(&config.log_dir)
        .with_context(|| format!("Failed to create log file appender in {:?}", config.log_dir))
}

/// Load logging configuration from YAML file
pub fn load_config_from_file(config_path: &Path, environment: &str) -> Result<LoggingConfig> {
    let config_content = fs::read_to_string(config_path)
        .with_context(|| format!("Failed to read config file: {:?}", config_path))?;

    parse_yaml_config(&config_content, environment)
        .with_context(|| format!("Failed to parse YAML config file: {:?}", config_path))
}

/// Pick the section for `environment` (or `default`) out of a YAML document
fn parse_yaml_config(content: &str, environment: &str) -> Result<LoggingConfig> {
    let yaml_configs: HashMap<String, YamlLoggingConfig> = serde_yaml::from_str(content)?;

    let yaml_config = yaml_configs
        .get(environment)
        .or_else(|| yaml_configs.get("default"))
        .ok_or_else(|| {
            anyhow::anyhow!(
                "No configuration found for environment '{}' and no default config",
                environment
            )
        })?;

    yaml_to_logging_config(yaml_config)
}

/// Convert YAML config to LoggingConfig
fn yaml_to_logging_config(yaml: &YamlLoggingConfig) -> Result<LoggingConfig> {
    let log_dir = expand_directory_path(&yaml.file.directory)?;

    Ok(LoggingConfig {
        log_dir,
        log_file_name: yaml.file.filename.clone(),
        console_level: yaml.console.level.clone(),
        file_level: yaml.file.level.clone(),
        enable_console: yaml.console.enabled,
        enable_file: yaml.file.enabled,
        rotation: LogRotationConfig {
            max_files: yaml.rotation.max_files,
        },
        include_thread_ids: yaml.features.thread_ids,
        include_source_location: yaml.features.source_location,
    })
}

/// Expand `~/` and `./` prefixes
fn expand_directory_path(path_str: &str) -> Result<PathBuf> {
    if let Some(rest) = path_str.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return Ok(home.join(rest));
        }
    } else if let Some(rest) = path_str.strip_prefix("./") {
        return Ok(std::env::current_dir()?.join(rest));
    }

    Ok(PathBuf::from(path_str))
}

/// Resolve the logging configuration for this run
///
/// `force_debug` raises the console level to DEBUG regardless of source.
pub fn resolve_logging_config(force_debug: bool) -> LoggingConfig {
    let environment = get_environment();
    let config_path = get_config_file_path();

    let config = if config_path.exists() {
        match load_config_from_file(&config_path, &environment) {
            Ok(config) => config,
            Err(e) => {
                // Subscriber is not up yet
                eprintln!("Failed to load logging config file: {e:#}. Using defaults.");
                get_default_config_for_environment(&environment)
            }
        }
    } else {
        get_default_config_for_environment(&environment)
    };

    if force_debug {
        config.console_level("DEBUG")
    } else {
        config
    }
}

/// Get the current environment name
pub fn get_environment() -> String {
    std::env::var("CADASTRO_ENV")
        .or_else(|_| std::env::var("RUST_ENV"))
        .unwrap_or_else(|_| {
            if cfg!(debug_assertions) {
                "development".to_string()
            } else {
                "production".to_string()
            }
        })
}

/// Get the path to the logging configuration file
pub fn get_config_file_path() -> PathBuf {
    if let Ok(config_path) = std::env::var("CADASTRO_LOG_CONFIG") {
        return PathBuf::from(config_path);
    }

    let mut candidates = vec![
        PathBuf::from("./config/logging.yaml"),
        PathBuf::from("./logging.yaml"),
    ];
    if let Some(config_dir) = dirs::config_dir() {
        candidates.push(config_dir.join("cadastro/logging.yaml"));
    }

    candidates
        .into_iter()
        .find(|p| p.exists())
        .unwrap_or_else(|| PathBuf::from("./config/logging.yaml"))
}

/// Get default configuration for environment
fn get_default_config_for_environment(environment: &str) -> LoggingConfig {
    match environment {
        "development" | "dev" => LoggingConfig::development(),
        "production" | "prod" => LoggingConfig::production(),
        "testing" | "test" => LoggingConfig::testing(),
        _ => LoggingConfig::default(),
    }
}

/// Get the default log directory
pub fn get_default_log_dir() -> PathBuf {
    if let Some(cache_dir) = dirs::cache_dir() {
        cache_dir.join("cadastro").join("logs")
    } else {
        std::env::temp_dir().join("cadastro").join("logs")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_logging_config() {
        let config = LoggingConfig::default();
        assert!(config.enable_console);
        assert!(config.enable_file);
        assert_eq!(config.console_level, "INFO");
        assert_eq!(config.file_level, "DEBUG");
        assert_eq!(config.log_file_name, "cadastro");
    }

    #[test]
    fn test_development_config() {
        let config = LoggingConfig::development();
        assert_eq!(config.console_level, "DEBUG");
        assert_eq!(config.file_level, "TRACE");
        assert!(config.include_thread_ids);
        assert!(config.include_source_location);
    }

    #[test]
    fn test_production_config() {
        let config = LoggingConfig::production();
        assert_eq!(config.console_level, "WARN");
        assert_eq!(config.file_level, "INFO");
        assert!(!config.include_thread_ids);
        assert_eq!(config.rotation.max_files, 10);
    }

    #[test]
    fn test_builder_overrides() {
        let config = LoggingConfig::production().console_level("DEBUG");
        assert_eq!(config.console_level, "DEBUG");
        assert_eq!(config.file_level, "INFO");
    }

    #[test]
    fn test_directory_expansion() {
        let result = expand_directory_path("./test-logs").unwrap();
        assert!(result.to_string_lossy().ends_with("test-logs"));

        let result = expand_directory_path("/var/log/cadastro").unwrap();
        assert_eq!(result, PathBuf::from("/var/log/cadastro"));
    }

    #[test]
    fn test_environment_presets() {
        assert_eq!(
            get_default_config_for_environment("dev").console_level,
            "DEBUG"
        );
        assert_eq!(
            get_default_config_for_environment("prod").console_level,
            "WARN"
        );
        assert_eq!(
            get_default_config_for_environment("test").log_dir,
            PathBuf::from("./target/test-logs")
        );
        assert_eq!(
            get_default_config_for_environment("staging").console_level,
            "INFO"
        );
    }

    const YAML: &str = r#"
default:
  console:
    enabled: true
    level: "INFO"
  file:
    enabled: false
    level: "DEBUG"
    directory: "/tmp/cadastro-logs"
    filename: "test"
  rotation:
    max_files: 5
production:
  console:
    enabled: false
    level: "ERROR"
  file:
    enabled: true
    level: "WARN"
    directory: "/tmp/cadastro-logs"
    filename: "prod"
  rotation:
    max_files: 3
  features:
    thread_ids: true
    source_location: false
"#;

    #[test]
    fn test_yaml_environment_section() {
        let config = parse_yaml_config(YAML, "production").unwrap();
        assert!(!config.enable_console);
        assert_eq!(config.console_level, "ERROR");
        assert_eq!(config.log_file_name, "prod");
        assert_eq!(config.rotation.max_files, 3);
        assert!(config.include_thread_ids);
    }

    #[test]
    fn test_yaml_falls_back_to_default_section() {
        let config = parse_yaml_config(YAML, "development").unwrap();
        assert_eq!(config.log_file_name, "test");
        assert_eq!(config.rotation.max_files, 5);
        assert!(!config.include_thread_ids);
    }

    #[test]
    fn test_yaml_without_matching_section() {
        let yaml = YAML.replace("default:", "staging:");
        assert!(parse_yaml_config(&yaml, "development").is_err());
    }

    #[test]
    fn test_load_config_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("logging.yaml");
        fs::write(&path, YAML).unwrap();

        let config = load_config_from_file(&path, "default").unwrap();
        assert_eq!(config.log_dir, PathBuf::from("/tmp/cadastro-logs"));
    }

    #[test]
    fn test_file_appender_writes_dated_log() {
        use std::io::Write;

        let temp_dir = TempDir::new().unwrap();
        let config = LoggingConfig::new(temp_dir.path().to_path_buf());

        let mut appender = build_file_appender(&config).unwrap();
        appender.write_all(b"hello\n").unwrap();
        appender.flush().unwrap();

        let names: Vec<String> = fs::read_dir(temp_dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names.len(), 1);
        assert!(names[0].starts_with("cadastro."));
        assert!(names[0].ends_with(".log"));
    }

    #[test]
    fn test_file_appender_leaves_other_prefixes_alone() {
        let temp_dir = TempDir::new().unwrap();
        let mut config = LoggingConfig::new(temp_dir.path().to_path_buf());
        config.rotation.max_files = 1;

        let sibling = temp_dir.path().join("cadastro-dev.2024-01-01.log");
        fs::write(&sibling, "keep").unwrap();

        build_file_appender(&config).unwrap();
        assert!(sibling.exists());
    }

    #[test]
    fn test_file_appender_accepts_zero_max_files() {
        let temp_dir = TempDir::new().unwrap();
        let mut config = LoggingConfig::new(temp_dir.path().to_path_buf());
        config.rotation.max_files = 0;

        assert!(build_file_appender(&config).is_ok());
    }
}
