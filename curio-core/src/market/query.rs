//! Read-side views over the catalog store

use std::sync::Arc;
use std::time::Duration;

use tracing::debug;

use crate::catalog::{CatalogStore, NftRecord};
use crate::error::Result;

/// Read-only queries against the catalog.
///
/// Queries may run concurrently with each other and with mutations;
/// each one observes a consistent snapshot of the collection.
pub struct MarketQuery {
    store: Arc<dyn CatalogStore>,
    latency: Option<Duration>,
}

impl MarketQuery {
    pub fn new(store: Arc<dyn CatalogStore>) -> Self {
        Self {
            store,
            latency: None,
        }
    }

    /// Sleep for the given duration before each query, mimicking a
    /// remote read. A UX affordance, not a correctness requirement.
    pub fn with_latency(mut self, latency: Option<Duration>) -> Self {
        self.latency = latency;
        self
    }

    /// Every listing still up for sale, in storage order.
    pub async fn list_available(&self) -> Result<Vec<NftRecord>> {
        self.pause().await;
        let records = self.store.load_all().await?;
        let available: Vec<NftRecord> = records.into_iter().filter(|r| r.available).collect();
        debug!(count = available.len(), store = self.store.name(), "listed available records");
        Ok(available)
    }

    /// Listings owned by `identity`, matched case-insensitively.
    ///
    /// An empty identity owns nothing; the store is not consulted.
    pub async fn list_owned_by(&self, identity: &str) -> Result<Vec<NftRecord>> {
        if identity.is_empty() {
            return Ok(Vec::new());
        }

        self.pause().await;
        let records = self.store.load_all().await?;
        let owned: Vec<NftRecord> = records
            .into_iter()
            .filter(|r| r.owned_by(identity))
            .collect();
        debug!(count = owned.len(), store = self.store.name(), "listed owned records");
        Ok(owned)
    }

    async fn pause(&self) {
        if let Some(latency) = self.latency {
            tokio::time::sleep(latency).await;
        }
    }
}
