//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::snapshot::DEFAULT_RATE_TOLERANCE;
use crate::source::SNAPSHOT_PATH;

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub data: DataConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Where the snapshot lives and how strictly it is cross-checked
#[derive(Debug, Clone, Deserialize)]
pub struct DataConfig {
    /// File path or http(s) URL of the snapshot document
    #[serde(default = "default_snapshot_location")]
    pub snapshot_location: String,

    /// Allowed rate difference in percentage points
    #[serde(default = "default_rate_tolerance")]
    pub rate_tolerance: f64,
}

fn default_snapshot_location() -> String {
    format!(".{}", SNAPSHOT_PATH)
}

fn default_rate_tolerance() -> f64 {
    DEFAULT_RATE_TOLERANCE
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            snapshot_location: default_snapshot_location(),
            rate_tolerance: default_rate_tolerance(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Ok(config)
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Standard config file locations, in search order
    pub fn search_paths() -> Vec<PathBuf> {
        [
            dirs::config_dir().map(|p| p.join("careercraft-bi").join("config.toml")),
            Some(PathBuf::from("/etc/careercraft-bi/config.toml")),
            Some(PathBuf::from("./config.toml")),
        ]
        .into_iter()
        .flatten()
        .collect()
    }

    /// Load from default locations or environment
    ///
    /// Nothing is logged; report the returned origin with [`ConfigOrigin::log`].
    pub fn load_default() -> (Self, ConfigOrigin) {
        Self::load_first(&Self::search_paths())
    }

    /// Load the first existing file among `paths`, falling back to defaults
    pub fn load_first(paths: &[PathBuf]) -> (Self, ConfigOrigin) {
        let mut origin = ConfigOrigin::Defaults;

        for path in paths.iter().filter(|p| p.exists()) {
            match Self::load_with_env(path) {
                Ok(config) => return (config, ConfigOrigin::File(path.clone())),
                Err(e) => {
                    if origin == ConfigOrigin::Defaults {
                        origin = ConfigOrigin::Rejected { path: path.clone(), error: e.to_string() };
                    }
                }
            }
        }

        (Self::from_env(), origin)
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) {
        if let Ok(location) = std::env::var("CAREERCRAFT_SNAPSHOT") {
            self.data.snapshot_location = location;
        }
        if let Ok(tolerance) = std::env::var("CAREERCRAFT_RATE_TOLERANCE") {
            if let Ok(t) = tolerance.parse() {
                self.data.rate_tolerance = t;
            }
        }

        if let Ok(level) = std::env::var("CAREERCRAFT_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Ok(format) = std::env::var("CAREERCRAFT_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

/// Where a resolved configuration came from
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigOrigin {
    /// Loaded from this file
    File(PathBuf),
    /// A file was found but failed to load; defaults were used
    Rejected { path: PathBuf, error: String },
    /// No file found
    Defaults,
}

impl ConfigOrigin {
    /// Report the origin through `tracing`
    pub fn log(&self) {
        match self {
            ConfigOrigin::File(path) => tracing::info!("Loaded config from {:?}", path),
            ConfigOrigin::Rejected { path, error } => {
                tracing::warn!("Failed to load config from {:?}: {}", path, error);
                tracing::info!("Using default config with environment overrides");
            }
            ConfigOrigin::Defaults => {
                tracing::info!("Using default config with environment overrides")
            }
        }
    }
}

impl LoggingConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is not set
    pub fn filter_directive(&self) -> String {
        format!("careercraft_bi={}", self.level)
    }

    /// Whether log lines are emitted as JSON
    pub fn is_json(&self) -> bool {
        self.format.eq_ignore_ascii_case("json")
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# CareerCraft BI Configuration
#
# Environment variables override these settings:
# - CAREERCRAFT_SNAPSHOT
# - CAREERCRAFT_RATE_TOLERANCE
# - CAREERCRAFT_LOG_LEVEL
# - CAREERCRAFT_LOG_FORMAT

[data]
# File path or http(s) URL of the dashboard snapshot
snapshot_location = "./data/dashboard_data.json"

# Allowed difference (percentage points) between the reported rates and the
# rates recomputed from the raw counts before a warning is logged
rate_tolerance = 0.5

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}
