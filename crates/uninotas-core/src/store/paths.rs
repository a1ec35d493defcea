//! Store layout constants and discovery

use std::path::{Path, PathBuf};

use crate::db::DB_FILE;
use crate::error::{Result, UninotasError};

/// Default store directory name
pub const DEFAULT_STORE_DIR: &str = ".uninotas";

/// Config file name inside the store root
pub const CONFIG_FILE: &str = "config.toml";

/// Reject directories that were never initialized as a store
pub fn validate_store_layout(path: &Path) -> Result<()> {
    if path.join(CONFIG_FILE).is_file() || path.join(DB_FILE).is_file() {
        return Ok(());
    }

    Err(UninotasError::InvalidStore {
        reason: format!(
            "{} is not an uninotas store (no {} or {}); run `uninotas init` first",
            path.display(),
            CONFIG_FILE,
            DB_FILE
        ),
    })
}

/// Walk up from `start` looking for a store directory
pub fn discover_store(start: &Path) -> Result<PathBuf> {
    let mut current = Some(start);
    while let Some(dir) = current {
        let candidate = dir.join(DEFAULT_STORE_DIR);
        if candidate.is_dir() {
            tracing::debug!(store = %candidate.display(), "discovered store");
            return Ok(candidate);
        }
        current = dir.parent();
    }

    Err(UninotasError::StoreNotFound {
        search_root: start.to_path_buf(),
    })
}
