//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.
//!
//! Queries themselves are not configured here; callers hand them to the
//! tracker as [`QuerySpec`](crate::query::QuerySpec) values.

use crate::date::DEFAULT_DATE_FORMAT;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Upper bound on text pattern matches counted per note
pub const DEFAULT_TEXT_MATCH_LIMIT: usize = 10_000;

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub scan: ScanConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Corpus scan configuration
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ScanConfig {
    /// chrono format of the date in daily note names
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Text before the date in note names
    #[serde(default)]
    pub date_prefix: String,

    /// Text after the date in note names
    #[serde(default)]
    pub date_suffix: String,

    /// Maximum text pattern matches counted per note
    #[serde(default = "default_text_match_limit")]
    pub text_match_limit: usize,
}

fn default_date_format() -> String {
    DEFAULT_DATE_FORMAT.to_string()
}

fn default_text_match_limit() -> usize {
    DEFAULT_TEXT_MATCH_LIMIT
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            date_format: default_date_format(),
            date_prefix: String::new(),
            date_suffix: String::new(),
            text_match_limit: default_text_match_limit(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, PartialEq)]
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

        Self::parse(&content).map_err(|error| ConfigError::Parse {
            path: path.to_path_buf(),
            error,
        })
    }

    /// Parse configuration from TOML text
    fn parse(content: &str) -> Result<Self, String> {
        toml::from_str(content).map_err(|e| e.to_string())
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

    /// Load from default locations or environment
    pub fn load_default() -> Self {
        let config_paths = [
            dirs::config_dir().map(|p| p.join("daybook").join("config.toml")),
            Some(PathBuf::from("./daybook.toml")),
        ];

        for path in config_paths.iter().flatten() {
            if path.exists() {
                match Self::load_with_env(path) {
                    Ok(config) => {
                        tracing::info!("Loaded config from {:?}", path);
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to load config from {:?}: {}", path, e);
                    }
                }
            }
        }

        tracing::info!("Using default config with environment overrides");
        Self::from_env()
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) {
        // Scan overrides
        if let Ok(format) = std::env::var("DAYBOOK_DATE_FORMAT") {
            self.scan.date_format = format;
        }
        if let Ok(prefix) = std::env::var("DAYBOOK_DATE_PREFIX") {
            self.scan.date_prefix = prefix;
        }
        if let Ok(suffix) = std::env::var("DAYBOOK_DATE_SUFFIX") {
            self.scan.date_suffix = suffix;
        }
        if let Ok(limit) = std::env::var("DAYBOOK_TEXT_MATCH_LIMIT") {
            if let Ok(l) = limit.parse() {
                self.scan.text_match_limit = l;
            }
        }

        // Logging overrides
        if let Ok(level) = std::env::var("DAYBOOK_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Ok(format) = std::env::var("DAYBOOK_LOG_FORMAT") {
            self.logging.format = format;
        }
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
    r#"# Daybook Configuration
#
# Environment variables override these settings:
# - DAYBOOK_DATE_FORMAT
# - DAYBOOK_DATE_PREFIX
# - DAYBOOK_DATE_SUFFIX
# - DAYBOOK_TEXT_MATCH_LIMIT
# - DAYBOOK_LOG_LEVEL
# - DAYBOOK_LOG_FORMAT

[scan]
# chrono format of the date in daily note names
date_format = "%Y-%m-%d"

# Text around the date in note names, e.g. "journal-" / "-daily"
date_prefix = ""
date_suffix = ""

# Maximum text pattern matches counted per note
text_match_limit = 10000

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}
