//! Marketplace configuration

use std::path::PathBuf;
use std::time::Duration;

use directories::ProjectDirs;

use crate::catalog::{FileStore, SeedPolicy};
use crate::error::{MarketError, Result};

/// File name of the catalog document inside the store directory
pub const DEFAULT_STORE_FILE: &str = "catalog.json";

/// Resolved marketplace configuration.
#[derive(Debug, Clone)]
pub struct MarketConfig {
    /// Path of the catalog JSON document
    pub store_path: PathBuf,
    /// What a never-initialized store is populated with
    pub seed: SeedPolicy,
    /// Optional artificial delay applied to every operation
    pub simulated_latency: Option<Duration>,
}

impl MarketConfig {
    /// Resolve a configuration, preferring an explicit store path over
    /// the platform data directory.
    pub fn resolve(store_override: Option<PathBuf>) -> Result<Self> {
        let store_path = match store_override {
            Some(path) => path,
            None => default_store_path()?,
        };

        Ok(Self {
            store_path,
            seed: SeedPolicy::default(),
            simulated_latency: None,
        })
    }

    pub fn with_seed(mut self, seed: SeedPolicy) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_latency(mut self, latency: Option<Duration>) -> Self {
        self.simulated_latency = latency;
        self
    }

    /// Open the file store this configuration points at.
    pub fn open_store(&self) -> FileStore {
        FileStore::new(&self.store_path, self.seed)
    }
}

fn default_store_path() -> Result<PathBuf> {
    let dirs = ProjectDirs::from("dev", "curio", "curio").ok_or_else(|| {
        MarketError::Config("could not determine a platform data directory".to_string())
    })?;
    Ok(dirs.data_dir().join(DEFAULT_STORE_FILE))
}
