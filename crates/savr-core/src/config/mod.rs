//! # Pure Data Module - Data Transfer Objects Only
//!
//! ## Responsibilities
//!
//! - Define configuration data structures
//! - Provide TOML -> DTO mapping
//!
//! ## Prohibited
//!
//! - **No business logic or policies**
//! - **No validation logic**
//!
//! Missing keys map to empty values. Deciding what an empty value means is
//! the bootstrap layer's job.

use std::path::PathBuf;

pub const DEFAULT_QUEUE_CAPACITY: usize = 32;
pub const DEFAULT_DIAGNOSTICS_CAPACITY: usize = 64;

/// Application configuration DTO (pure data, no logic)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Storage backend name, `"file"` or `"memory"` (may be empty)
    pub storage_backend: String,

    /// Directory holding the key-value files (path info only, no existence check)
    pub data_dir: PathBuf,

    /// Bounded command queue size of the onboarding store (0 = unset)
    pub queue_capacity: usize,

    /// Buffered diagnostics per subscriber (0 = unset)
    pub diagnostics_capacity: usize,

    /// Default tracing filter when `RUST_LOG` is not set (may be empty)
    pub log_level: String,

    /// Directory for log files; empty disables file output
    pub log_dir: PathBuf,
}

impl AppConfig {
    /// Create AppConfig from TOML value
    ///
    /// This method must NOT contain any validation or default value logic.
    /// Empty strings and zero capacities are valid "facts".
    pub fn from_toml(toml_value: &toml::Value) -> anyhow::Result<Self> {
        let str_at = |section: &str, key: &str| {
            toml_value
                .get(section)
                .and_then(|s| s.get(key))
                .and_then(|v| v.as_str())
                .unwrap_or("")
                .to_string()
        };
        let usize_at = |section: &str, key: &str| {
            toml_value
                .get(section)
                .and_then(|s| s.get(key))
                .and_then(|v| v.as_integer())
                .and_then(|v| usize::try_from(v).ok())
                .unwrap_or(0)
        };

        Ok(Self {
            storage_backend: str_at("storage", "backend"),
            data_dir: PathBuf::from(str_at("storage", "data_dir")),
            queue_capacity: usize_at("store", "queue_capacity"),
            diagnostics_capacity: usize_at("store", "diagnostics_capacity"),
            log_level: str_at("logging", "level"),
            log_dir: PathBuf::from(str_at("logging", "log_dir")),
        })
    }

    /// Create empty AppConfig (all empty/default values)
    pub fn empty() -> Self {
        Self {
            storage_backend: String::new(),
            data_dir: PathBuf::new(),
            queue_capacity: 0,
            diagnostics_capacity: 0,
            log_level: String::new(),
            log_dir: PathBuf::new(),
        }
    }

    /// Create AppConfig with system-default paths for production use
    ///
    /// The base directory should be computed by the caller using platform-specific
    /// logic (e.g., `dirs` crate).
    pub fn with_system_defaults(data_dir: PathBuf) -> Self {
        Self {
            storage_backend: "file".to_string(),
            log_dir: data_dir.join("logs"),
            data_dir,
            queue_capacity: DEFAULT_QUEUE_CAPACITY,
            diagnostics_capacity: DEFAULT_DIAGNOSTICS_CAPACITY,
            log_level: String::new(),
        }
    }
}
