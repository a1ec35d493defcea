//! Store configuration for uninotas
//!
//! Configuration is stored in `.uninotas/config.toml`.

pub mod types;

use std::fs;
use std::path::Path;

use crate::error::{Result, UninotasError};

pub use types::{AuthConfig, DisplayConfig, StoreConfig, STORE_FORMAT_VERSION};

impl StoreConfig {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: StoreConfig = toml::from_str(&content)?;

        if config.version > STORE_FORMAT_VERSION {
            return Err(UninotasError::InvalidStore {
                reason: format!(
                    "config version {} is newer than supported version {}",
                    config.version, STORE_FORMAT_VERSION
                ),
            });
        }

        Ok(config)
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| UninotasError::Other(format!("failed to serialize config: {}", e)))?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Semester to use when none is given explicitly
    pub fn resolve_semester(&self, explicit: Option<&str>) -> Option<String> {
        explicit
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .or_else(|| {
                self.default_semester
                    .as_deref()
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(str::to_string)
            })
    }
}
