//! Catalog store trait - abstraction over persistence media
//!
//! This trait allows swapping between different backing stores:
//! - FileStore (JSON document on disk)
//! - MemoryStore (ephemeral, testing and demos)
//! - any remote document store an embedder wires in
//!
//! The contract is deliberately coarse: a store only knows how to
//! return the full collection and how to replace it. Record-level
//! rules (who may transition what) live in the market services.

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::catalog::record::NftRecord;
use crate::error::Result;

/// Trait for catalog persistence backends
///
/// Implementations must hand out consistent snapshots: a `load_all`
/// that runs concurrently with a `replace_all` sees either the old
/// collection or the new one, never a torn mix.
#[async_trait]
pub trait CatalogStore: Send + Sync {
    /// Return every stored record in insertion order.
    async fn load_all(&self) -> Result<Vec<NftRecord>>;

    /// Replace the entire stored collection. The sole write primitive.
    async fn replace_all(&self, records: Vec<NftRecord>) -> Result<()>;

    /// Store identifier for logging/debugging
    fn name(&self) -> &'static str;
}

/// In-memory store backed by an `RwLock`
///
/// Snapshot semantics come from the lock: readers clone the whole
/// collection, writers swap it wholesale.
#[derive(Default)]
pub struct MemoryStore {
    records: RwLock<Vec<NftRecord>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from a pre-populated collection.
    pub fn with_records(records: Vec<NftRecord>) -> Self {
        Self {
            records: RwLock::new(records),
        }
    }
}

#[async_trait]
impl CatalogStore for MemoryStore {
    async fn load_all(&self) -> Result<Vec<NftRecord>> {
        Ok(self.records.read().await.clone())
    }

    async fn replace_all(&self, records: Vec<NftRecord>) -> Result<()> {
        *self.records.write().await = records;
        Ok(())
    }

    fn name(&self) -> &'static str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn record(id: &str) -> NftRecord {
        NftRecord {
            id: id.to_string(),
            name: "Test Listing".to_string(),
            description: "A record used by store tests".to_string(),
            image: "https://example.com/art.png".to_string(),
            price: "1000000000000000000".to_string(),
            available: true,
            owner: String::new(),
            minted_at: "2025-07-14T09:30:00Z".to_string(),
        }
    }

    #[tokio::test]
    async fn test_memory_store_starts_empty() {
        let store = MemoryStore::new();
        assert_eq!(store.load_all().await.unwrap(), vec![]);
    }

    #[tokio::test]
    async fn test_memory_store_replace_preserves_order() {
        let store = MemoryStore::new();
        store
            .replace_all(vec![record("a"), record("b"), record("c")])
            .await
            .unwrap();

        let ids: Vec<String> = store
            .load_all()
            .await
            .unwrap()
            .into_iter()
            .map(|r| r.id)
            .collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
    }

    #[tokio::test]
    async fn test_memory_store_with_records() {
        let store = MemoryStore::with_records(vec![record("seed")]);
        assert_eq!(store.load_all().await.unwrap().len(), 1);
    }
}
