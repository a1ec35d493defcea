//! Configuration type definitions

use serde::{Deserialize, Serialize};

/// Current store format version
pub const STORE_FORMAT_VERSION: u32 = 1;

/// Store configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Store format version for compatibility checking
    #[serde(default = "default_version")]
    pub version: u32,

    /// Semester label used by `calc --save` when `--semester` is omitted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_semester: Option<String>,

    /// Local account settings
    #[serde(default)]
    pub auth: AuthConfig,

    /// Terminal output settings
    #[serde(default)]
    pub display: DisplayConfig,
}

/// Local account settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Minimum password length accepted at sign-up
    #[serde(default = "default_min_password_len")]
    pub min_password_len: usize,
}

/// Terminal output settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Show record IDs in the history table
    #[serde(default = "default_show_ids")]
    pub show_ids: bool,
}

fn default_version() -> u32 {
    STORE_FORMAT_VERSION
}

fn default_min_password_len() -> usize {
    6
}

fn default_show_ids() -> bool {
    true
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            version: default_version(),
            default_semester: None,
            auth: AuthConfig::default(),
            display: DisplayConfig::default(),
        }
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            min_password_len: default_min_password_len(),
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            show_ids: default_show_ids(),
        }
    }
}
