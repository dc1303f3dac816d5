//! # Configuration Loader
//!
//! ## Responsibilities
//!
//! - Read the TOML configuration file into the `AppConfig` DTO
//! - Report I/O and parse errors with context
//! - Fill values the file leaves empty from system defaults
//!
//! `load_config` accepts whatever is in the file. Defaults are applied only in
//! `resolve_config`, never while parsing.

use std::path::{Path, PathBuf};

use anyhow::Context;
use savr_core::config::AppConfig;
use tracing::info;

/// Environment variable pointing at the config file
pub const CONFIG_PATH_ENV: &str = "SAVR_CONFIG";

/// Directory name under the platform data directory
const APP_DIR_NAME: &str = "savr";

/// Load configuration from a TOML file
///
/// # Errors
///
/// Returns error if the file cannot be read or is not valid TOML.
pub fn load_config(config_path: PathBuf) -> anyhow::Result<AppConfig> {
    let content = std::fs::read_to_string(&config_path)
        .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;
    let toml_value: toml::Value =
        toml::from_str(&content).context("Failed to parse config as TOML")?;
    AppConfig::from_toml(&toml_value)
}

/// Default data directory: `<platform data dir>/savr`, else `./.savr`.
pub fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .map(|dir| dir.join(APP_DIR_NAME))
        .unwrap_or_else(|| PathBuf::from(".savr"))
}

/// Build the effective configuration.
///
/// Reads the file named by `SAVR_CONFIG` when set; otherwise starts from
/// system defaults. Empty values in the file are replaced with defaults.
pub fn resolve_config() -> anyhow::Result<AppConfig> {
    let defaults = AppConfig::with_system_defaults(default_data_dir());
    match std::env::var_os(CONFIG_PATH_ENV) {
        Some(path) => {
            let path = PathBuf::from(path);
            let loaded = load_config(path.clone())?;
            info!(path = %path.display(), "loaded config file");
            Ok(merge_defaults(loaded, defaults))
        }
        None => Ok(defaults),
    }
}

/// Replace empty values of `loaded` with the matching value from `defaults`.
///
/// An explicit `data_dir` without `log_dir` keeps logs under that data dir.
pub fn merge_defaults(loaded: AppConfig, defaults: AppConfig) -> AppConfig {
    let data_dir = non_empty_path(loaded.data_dir).unwrap_or(defaults.data_dir);
    let log_dir = non_empty_path(loaded.log_dir).unwrap_or_else(|| data_dir.join("logs"));

    AppConfig {
        storage_backend: non_empty(loaded.storage_backend).unwrap_or(defaults.storage_backend),
        queue_capacity: non_zero(loaded.queue_capacity).unwrap_or(defaults.queue_capacity),
        diagnostics_capacity: non_zero(loaded.diagnostics_capacity)
            .unwrap_or(defaults.diagnostics_capacity),
        log_level: non_empty(loaded.log_level).unwrap_or(defaults.log_level),
        data_dir,
        log_dir,
    }
}

fn non_empty(value: String) -> Option<String> {
    (!value.trim().is_empty()).then_some(value)
}

fn non_empty_path(path: PathBuf) -> Option<PathBuf> {
    (path != Path::new("")).then_some(path)
}

fn non_zero(value: usize) -> Option<usize> {
    (value != 0).then_some(value)
}
