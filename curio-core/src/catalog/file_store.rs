//! File-backed catalog store (catalog.json)
//!
//! The collection lives in a single JSON document. A missing file is
//! not an error: the first read lazily creates it from the configured
//! seed policy. A file that exists but does not parse is fatal for the
//! operation and is never overwritten.
//!
//! Writes land in a temporary file next to the target and are moved
//! into place with a rename, so a concurrent reader always sees a
//! whole collection - either the previous snapshot or the new one.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tempfile::NamedTempFile;
use tracing::{debug, info};

use crate::catalog::record::NftRecord;
use crate::catalog::seed::SeedPolicy;
use crate::catalog::store::CatalogStore;
use crate::error::{MarketError, Result};

pub struct FileStore {
    path: PathBuf,
    seed: SeedPolicy,
}

impl FileStore {
    /// Create a store over the given file. Nothing is touched on disk
    /// until the first read or write.
    pub fn new(path: impl Into<PathBuf>, seed: SeedPolicy) -> Self {
        Self {
            path: path.into(),
            seed,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_or_init(&self) -> Result<Vec<NftRecord>> {
        if !self.path.exists() {
            let records = self.seed.initial_records();
            self.write_snapshot(&records)?;
            info!(
                path = %self.path.display(),
                seed = self.seed.as_str(),
                "initialized catalog store"
            );
            return Ok(records);
        }

        let content = fs::read_to_string(&self.path)
            .map_err(|e| MarketError::store_io(&self.path, e))?;
        serde_json::from_str(&content).map_err(|source| MarketError::StoreCorrupt { source })
    }

    fn write_snapshot(&self, records: &[NftRecord]) -> Result<()> {
        let parent = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => {
                fs::create_dir_all(parent).map_err(|e| MarketError::store_io(parent, e))?;
                parent
            }
            _ => Path::new("."),
        };

        let content = serde_json::to_string_pretty(records)
            .map_err(|source| MarketError::StoreCorrupt { source })?;

        let mut tmp =
            NamedTempFile::new_in(parent).map_err(|e| MarketError::store_io(parent, e))?;
        tmp.write_all(content.as_bytes())
            .map_err(|e| MarketError::store_io(&self.path, e))?;
        tmp.persist(&self.path)
            .map_err(|e| MarketError::store_io(&self.path, e.error))?;

        debug!(
            path = %self.path.display(),
            records = records.len(),
            "wrote catalog snapshot"
        );
        Ok(())
    }
}

#[async_trait]
impl CatalogStore for FileStore {
    async fn load_all(&self) -> Result<Vec<NftRecord>> {
        self.read_or_init()
    }

    async fn replace_all(&self, records: Vec<NftRecord>) -> Result<()> {
        self.write_snapshot(&records)
    }

    fn name(&self) -> &'static str {
        "file"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn record(id: &str) -> NftRecord {
        NftRecord {
            id: id.to_string(),
            name: "Test Listing".to_string(),
            description: "A record used by file store tests".to_string(),
            image: "https://example.com/art.png".to_string(),
            price: "1000000000000000000".to_string(),
            available: true,
            owner: String::new(),
            minted_at: "2025-07-14T09:30:00Z".to_string(),
        }
    }

    #[tokio::test]
    async fn test_missing_file_is_lazily_created_empty() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("catalog.json");
        let store = FileStore::new(&path, SeedPolicy::Empty);

        assert_eq!(store.load_all().await.unwrap(), vec![]);
        assert!(path.exists());
    }

    #[tokio::test]
    async fn test_sample_seed_applied_once() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("catalog.json");
        let store = FileStore::new(&path, SeedPolicy::Sample);

        let first = store.load_all().await.unwrap();
        assert!(!first.is_empty());

        // A second read comes from disk, not from re-seeding.
        let second = store.load_all().await.unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_replace_is_durable_across_instances() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("catalog.json");

        let store = FileStore::new(&path, SeedPolicy::Empty);
        store
            .replace_all(vec![record("a"), record("b")])
            .await
            .unwrap();

        let reopened = FileStore::new(&path, SeedPolicy::Empty);
        let ids: Vec<String> = reopened
            .load_all()
            .await
            .unwrap()
            .into_iter()
            .map(|r| r.id)
            .collect();
        assert_eq!(ids, vec!["a", "b"]);
    }

    #[tokio::test]
    async fn test_corrupt_file_is_a_fatal_read_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("catalog.json");
        fs::write(&path, "{ not json").unwrap();

        let store = FileStore::new(&path, SeedPolicy::Empty);
        let err = store.load_all().await.unwrap_err();
        assert!(matches!(err, MarketError::StoreCorrupt { .. }));

        // The corrupt file is left in place for inspection.
        assert_eq!(fs::read_to_string(&path).unwrap(), "{ not json");
    }

    #[tokio::test]
    async fn test_parent_directories_are_created() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("deeper").join("catalog.json");

        let store = FileStore::new(&path, SeedPolicy::Empty);
        store.replace_all(vec![record("a")]).await.unwrap();

        assert_eq!(store.load_all().await.unwrap().len(), 1);
    }
}
