//! Market backend trait - abstraction over marketplace providers
//!
//! This trait allows swapping between different backends behind the
//! same four operations a marketplace contract exposes:
//! - LocalBackend (catalog store in this process)
//! - an on-chain contract adapter (external, not shipped)
//! - Mock (testing)
//!
//! Query and mutation logic is written once against the catalog; a
//! backend only decides where those operations execute.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use crate::catalog::{CatalogStore, MintRequest, NftRecord};
use crate::error::Result;
use crate::market::query::MarketQuery;
use crate::market::service::Marketplace;

/// Trait for marketplace backends
///
/// The operation set mirrors the standard marketplace contract
/// surface (create / purchase / fetch market items / fetch own items),
/// so a contract-backed implementation slots in without touching
/// callers.
#[async_trait]
pub trait MarketBackend: Send + Sync {
    /// Mint a new listing.
    async fn create_item(&self, request: MintRequest) -> Result<NftRecord>;

    /// Buy a listing on behalf of `buyer`.
    async fn purchase_item(&self, id: &str, buyer: &str) -> Result<NftRecord>;

    /// Every listing still up for sale.
    async fn fetch_market_items(&self) -> Result<Vec<NftRecord>>;

    /// Listings owned by `identity`.
    async fn fetch_owned_items(&self, identity: &str) -> Result<Vec<NftRecord>>;

    /// Backend identifier for logging/debugging
    fn name(&self) -> &'static str;
}

/// Backend that runs against a local catalog store.
pub struct LocalBackend {
    market: Marketplace,
    query: MarketQuery,
}

impl LocalBackend {
    pub fn new(store: Arc<dyn CatalogStore>) -> Self {
        Self {
            market: Marketplace::new(store.clone()),
            query: MarketQuery::new(store),
        }
    }

    /// Apply a simulated latency to every operation.
    pub fn with_latency(store: Arc<dyn CatalogStore>, latency: Option<Duration>) -> Self {
        Self {
            market: Marketplace::new(store.clone()).with_latency(latency),
            query: MarketQuery::new(store).with_latency(latency),
        }
    }
}

#[async_trait]
impl MarketBackend for LocalBackend {
    async fn create_item(&self, request: MintRequest) -> Result<NftRecord> {
        self.market.mint(request).await
    }

    async fn purchase_item(&self, id: &str, buyer: &str) -> Result<NftRecord> {
        self.market.purchase(id, buyer).await
    }

    async fn fetch_market_items(&self) -> Result<Vec<NftRecord>> {
        self.query.list_available().await
    }

    async fn fetch_owned_items(&self, identity: &str) -> Result<Vec<NftRecord>> {
        self.query.list_owned_by(identity).await
    }

    fn name(&self) -> &'static str {
        "local"
    }
}

/// Mock backend for testing
#[cfg(test)]
pub struct MockBackend {
    pub items: Vec<NftRecord>,
}

#[cfg(test)]
#[async_trait]
impl MarketBackend for MockBackend {
    async fn create_item(&self, _request: MintRequest) -> Result<NftRecord> {
        Ok(self.items[0].clone())
    }

    async fn purchase_item(&self, id: &str, _buyer: &str) -> Result<NftRecord> {
        self.items
            .iter()
            .find(|r| r.id == id)
            .cloned()
            .ok_or_else(|| crate::error::MarketError::NotFound { id: id.to_string() })
    }

    async fn fetch_market_items(&self) -> Result<Vec<NftRecord>> {
        Ok(self.items.clone())
    }

    async fn fetch_owned_items(&self, _identity: &str) -> Result<Vec<NftRecord>> {
        Ok(Vec::new())
    }

    fn name(&self) -> &'static str {
        "mock"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::MemoryStore;
    use pretty_assertions::assert_eq;

    fn request() -> MintRequest {
        MintRequest {
            name: "Cosmic Voyager".to_string(),
            description: "A listing minted by backend tests".to_string(),
            image: "https://example.com/art.png".to_string(),
            price: "0.05".to_string(),
        }
    }

    #[tokio::test]
    async fn test_local_backend_full_cycle() {
        let backend = LocalBackend::new(Arc::new(MemoryStore::new()));

        let minted = backend.create_item(request()).await.unwrap();
        assert_eq!(backend.fetch_market_items().await.unwrap().len(), 1);

        backend.purchase_item(&minted.id, "0xABCxyz").await.unwrap();
        assert!(backend.fetch_market_items().await.unwrap().is_empty());

        let owned = backend.fetch_owned_items("0xabcXYZ").await.unwrap();
        assert_eq!(owned.len(), 1);
        assert_eq!(owned[0].id, minted.id);
    }

    #[tokio::test]
    async fn test_mock_backend() {
        let record = NftRecord {
            id: "mock-1".to_string(),
            name: "Mock Listing".to_string(),
            description: "A canned backend response".to_string(),
            image: "https://example.com/mock.png".to_string(),
            price: "1000000000000000000".to_string(),
            available: true,
            owner: String::new(),
            minted_at: "2025-07-14T09:30:00Z".to_string(),
        };
        let backend = MockBackend {
            items: vec![record.clone()],
        };

        assert_eq!(backend.name(), "mock");
        assert_eq!(backend.fetch_market_items().await.unwrap(), vec![record]);
        assert!(backend.purchase_item("mock-1", "0xbuyer").await.is_ok());
        assert!(backend.purchase_item("missing", "0xbuyer").await.is_err());
    }
}
