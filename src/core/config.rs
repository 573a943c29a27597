//! Arsenal configuration with documented defaults
//!
//! Rules constants (range tables, BattleForce bands) are not configurable and
//! live in `weapons::constants`. This struct only covers how the catalog is
//! found, how strictly it is loaded, and how the binary logs.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::core::error::{ArsenalError, Result};

/// What the loader does with a flag name it does not recognise
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnknownFlagPolicy {
    /// Log a warning and skip the flag
    #[default]
    Warn,
    /// Fail the catalog load
    Reject,
}

/// Configuration for catalog loading and logging
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ArsenalConfig {
    /// Directory scanned recursively for `*.toml` weapon catalog files
    pub catalog_dir: PathBuf,

    /// `tracing_subscriber` env-filter directive used by the binary
    ///
    /// `RUST_LOG` takes precedence when set.
    pub log_filter: String,

    /// Handling of flag names in catalog data that are not weapon flags
    ///
    /// Catalog data is the only place flags arrive untyped, so this is the
    /// one runtime check on the flag domain that remains.
    pub unknown_flags: UnknownFlagPolicy,
}

impl Default for ArsenalConfig {
    fn default() -> Self {
        Self {
            catalog_dir: PathBuf::from("data/weapons"),
            log_filter: "battle_arsenal=info,arsenal=info".to_string(),
            unknown_flags: UnknownFlagPolicy::Warn,
        }
    }
}

impl ArsenalConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a config file; fields missing from the file keep their defaults
    pub fn from_toml_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: ArsenalConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<()> {
        if self.catalog_dir.as_os_str().is_empty() {
            return Err(ArsenalError::Config("catalog_dir must not be empty".into()));
        }
        if self.log_filter.trim().is_empty() {
            return Err(ArsenalError::Config("log_filter must not be empty".into()));
        }
        Ok(())
    }
}
