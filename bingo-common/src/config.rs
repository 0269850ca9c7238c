//! Configuration loading
//!
//! Each setting is resolved in priority order:
//! 1. Command-line argument (highest priority)
//! 2. Environment variable
//! 3. TOML config file
//! 4. Compiled default (fallback)
//!
//! The server's argument parser folds 1 and 2 into [`ConfigOverrides`];
//! this module merges those with the TOML file and the compiled defaults.

use crate::{Error, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Default listen port
pub const DEFAULT_PORT: u16 = 4000;

/// Compiled defaults for the current platform
#[derive(Debug, Clone)]
pub struct CompiledDefaults {
    pub host: String,
    pub port: u16,
    pub database: PathBuf,
    pub static_dir: PathBuf,
    pub log_level: String,
}

impl CompiledDefaults {
    pub fn for_current_platform() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: DEFAULT_PORT,
            database: default_data_dir().join("phrases.db"),
            static_dir: PathBuf::from("client").join("build"),
            log_level: "info".to_string(),
        }
    }
}

/// OS-dependent data folder
fn default_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .map(|d| d.join("bingo"))
        .unwrap_or_else(|| PathBuf::from("./bingo_data"))
}

/// Default config file location (`<config_dir>/bingo/config.toml`)
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("bingo").join("config.toml"))
}

/// Logging section of the TOML file
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct LoggingConfig {
    pub level: Option<String>,
}

/// Contents of `config.toml`; every key is optional
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct TomlConfig {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub database: Option<PathBuf>,
    pub static_dir: Option<PathBuf>,
    pub seed_file: Option<PathBuf>,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl TomlConfig {
    /// Parse TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::Config(format!("Invalid config file: {}", e)))
    }

    /// Load a config file
    ///
    /// A missing file yields `Ok(None)`; a file that exists but does not parse
    /// is a `Config` error.
    pub fn load(path: &Path) -> Result<Option<Self>> {
        match std::fs::read_to_string(path) {
            Ok(content) => {
                debug!("Loaded config file {}", path.display());
                Self::from_toml_str(&content).map(Some)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(Error::Io(e)),
        }
    }
}

/// Settings given on the command line or through the environment
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub database: Option<PathBuf>,
    pub static_dir: Option<PathBuf>,
    pub seed_file: Option<PathBuf>,
    pub log_level: Option<String>,
    /// Explicit config file path
    pub config_file: Option<PathBuf>,
}

/// Fully resolved server configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub database: PathBuf,
    pub static_dir: PathBuf,
    pub seed_file: Option<PathBuf>,
    pub log_level: String,
    /// Config file that supplied settings, if one was found
    pub loaded_from: Option<PathBuf>,
}

impl ServerConfig {
    /// Merge overrides, TOML file and compiled defaults
    pub fn merge(overrides: ConfigOverrides, file: Option<TomlConfig>, defaults: CompiledDefaults) -> Self {
        let file = file.unwrap_or_default();
        Self {
            host: overrides.host.or(file.host).unwrap_or(defaults.host),
            port: overrides.port.or(file.port).unwrap_or(defaults.port),
            database: overrides.database.or(file.database).unwrap_or(defaults.database),
            static_dir: overrides
                .static_dir
                .or(file.static_dir)
                .unwrap_or(defaults.static_dir),
            seed_file: overrides.seed_file.or(file.seed_file),
            log_level: overrides
                .log_level
                .or(file.logging.level)
                .unwrap_or(defaults.log_level),
            loaded_from: None,
        }
    }

    /// Resolve configuration, reading the TOML file from the explicit path or
    /// the default location
    ///
    /// A config file that does not exist is skipped, with a warning when the
    /// path was given explicitly; `loaded_from` records which file, if any,
    /// was read.
    pub fn resolve(overrides: ConfigOverrides) -> Result<Self> {
        let explicit = overrides.config_file.is_some();
        let path = overrides.config_file.clone().or_else(default_config_path);
        let file = match &path {
            Some(path) => {
                let loaded = TomlConfig::load(path)?;
                if loaded.is_none() && explicit {
                    warn!("Config file {} not found, using defaults", path.display());
                }
                loaded
            }
            None => None,
        };
        let loaded_from = if file.is_some() { path } else { None };

        let mut config = Self::merge(overrides, file, CompiledDefaults::for_current_platform());
        config.loaded_from = loaded_from;
        Ok(config)
    }

    /// Socket address string for the listener
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
