//! Store management for uninotas
//!
//! The store is the directory holding the config file and the SQLite
//! database. Default location: `.uninotas/` under the project root.

pub mod paths;

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use crate::config::StoreConfig;
use crate::db::Database;
use crate::error::{Result, UninotasError};
use crate::identity::LocalIdentity;
pub use paths::{CONFIG_FILE, DEFAULT_STORE_DIR};

/// The uninotas store
#[derive(Debug)]
pub struct Store {
    /// Root path of the store
    root: PathBuf,
    /// Store configuration
    config: StoreConfig,
    /// SQLite database
    db: Database,
}

impl Store {
    /// Discover a store by walking up from the given root directory
    pub fn discover(root: &Path) -> Result<Self> {
        let store_path = paths::discover_store(root)?;
        Self::open(&store_path)
    }

    /// Open an existing store at the given path
    #[tracing::instrument(skip(path), fields(path = %path.display()))]
    pub fn open(path: &Path) -> Result<Self> {
        let start = Instant::now();

        if !path.is_dir() {
            return Err(UninotasError::StoreNotFound {
                search_root: path.to_path_buf(),
            });
        }

        paths::validate_store_layout(path)?;

        let config_path = path.join(CONFIG_FILE);
        let config = if config_path.exists() {
            StoreConfig::load(&config_path)?
        } else {
            StoreConfig::default()
        };

        let db = Database::open(path)?;
        crate::trace_time!(start, "open_store");

        Ok(Store {
            root: path.to_path_buf(),
            config,
            db,
        })
    }

    /// Initialize a new store under the given project root.
    pub fn init(project_root: &Path) -> Result<Self> {
        Self::init_at(&project_root.join(DEFAULT_STORE_DIR))
    }

    /// Initialize a store at an explicit store root path.
    ///
    /// Re-running on an existing store keeps its config and data.
    #[tracing::instrument(skip(store_root), fields(path = %store_root.display()))]
    pub fn init_at(store_root: &Path) -> Result<Self> {
        if store_root.exists() && !store_root.is_dir() {
            return Err(UninotasError::InvalidStore {
                reason: format!("{} exists and is not a directory", store_root.display()),
            });
        }

        fs::create_dir_all(store_root)?;

        let config_path = store_root.join(CONFIG_FILE);
        if !config_path.exists() {
            StoreConfig::default().save(&config_path)?;
            tracing::info!("wrote default config");
        }

        Self::open(store_root)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    pub fn db(&self) -> &Database {
        &self.db
    }

    /// Identity provider backed by this store's database
    pub fn identity(&self) -> LocalIdentity<'_> {
        LocalIdentity::new(&self.db, &self.config.auth)
    }
}
