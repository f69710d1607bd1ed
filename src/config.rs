//! Configuration file support for component-info.
//!
//! Provides YAML-based configuration through `component-info.config.yml`
//! files, and merges it with command-line arguments into [`Settings`].

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::cli::Args;
use crate::logging::{LogFormat, DEFAULT_LOG_LEVEL};
use crate::shared::error::ProviderError;
use crate::shared::Result;

const CONFIG_FILENAME: &str = "component-info.config.yml";

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_DB_PATH: &str = "db.json";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub db_path: Option<PathBuf>,
    pub log_level: Option<String>,
    pub log_format: Option<String>,
    pub store: Option<StoreConfig>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Record store behaviour.
#[derive(Debug, Deserialize, Default)]
pub struct StoreConfig {
    /// Re-read the store on every request instead of serving a snapshot
    pub reload_per_request: Option<bool>,
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if config.port == Some(0) {
        bail!(
            "Invalid config: port must not be 0.\n\n\
             💡 Hint: Choose a fixed port the scanner can reach (e.g., 8080)."
        );
    }

    if let Some(ref host) = config.host {
        if host.trim().is_empty() {
            bail!(
                "Invalid config: host must not be empty.\n\n\
                 💡 Hint: Use \"0.0.0.0\" to listen on all interfaces."
            );
        }
    }

    if let Some(ref format) = config.log_format {
        if let Err(e) = LogFormat::from_str(format) {
            bail!("Invalid config: {}", e);
        }
    }

    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }

    if let Some(ref store) = config.store {
        for key in store.unknown_fields.keys() {
            eprintln!(
                "⚠️  Warning: Unknown config field 'store.{}' will be ignored.",
                key
            );
        }
    }
}

/// Effective runtime settings.
///
/// Precedence: command-line arguments, then the config file, then defaults.
#[derive(Clone, PartialEq, Eq)]
pub struct Settings {
    pub api_key: String,
    pub host: String,
    pub port: u16,
    pub db_path: PathBuf,
    pub log_level: String,
    pub log_format: LogFormat,
    pub reload_per_request: bool,
}

impl fmt::Debug for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Settings")
            .field("api_key", &"<redacted>")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("db_path", &self.db_path)
            .field("log_level", &self.log_level)
            .field("log_format", &self.log_format)
            .field("reload_per_request", &self.reload_per_request)
            .finish()
    }
}

impl Settings {
    /// Merges arguments over an optional config file.
    pub fn resolve(args: &Args, config: Option<ConfigFile>) -> Result<Self> {
        if args.api_key.is_empty() {
            return Err(ProviderError::Validation {
                message: "API key must not be empty".to_string(),
            }
            .into());
        }

        let config = config.unwrap_or_default();

        let log_format = match (args.log_format, config.log_format.as_deref()) {
            (Some(format), _) => format,
            (None, Some(format)) => LogFormat::from_str(format).map_err(|e| {
                ProviderError::Validation { message: e }
            })?,
            (None, None) => LogFormat::default(),
        };

        Ok(Self {
            api_key: args.api_key.clone(),
            host: args
                .host
                .clone()
                .or(config.host)
                .unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port: args.port.or(config.port).unwrap_or(DEFAULT_PORT),
            db_path: args
                .db_path
                .clone()
                .or(config.db_path)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_DB_PATH)),
            log_level: config
                .log_level
                .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string()),
            log_format,
            reload_per_request: config
                .store
                .and_then(|store| store.reload_per_request)
                .unwrap_or(false),
        })
    }
}

/// Loads the config named by `--config`, or discovers one in `dir`, and
/// merges it with `args`.
pub fn load_settings(args: &Args, dir: &Path) -> Result<Settings> {
    let config = match args.config {
        Some(ref path) => Some(load_config_from_path(path)?),
        None => discover_config(dir)?,
    };

    Settings::resolve(args, config)
}
