//! Write-side marketplace operations: mint and purchase
//!
//! The store's only write primitive is whole-collection replacement,
//! so every mutation is a load-transform-save cycle. Cycles are
//! serialized behind a single writer lock; without it two purchases
//! racing between load and save would silently clobber each other.

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use tokio::sync::Mutex;
use tracing::{debug, info};
use uuid::Uuid;

use crate::catalog::{CatalogStore, MintRequest, NftRecord};
use crate::error::{MarketError, Result};

/// The catalog mutation service.
pub struct Marketplace {
    store: Arc<dyn CatalogStore>,
    /// Serializes every load-transform-save cycle
    write_lock: Mutex<()>,
    latency: Option<Duration>,
}

impl Marketplace {
    pub fn new(store: Arc<dyn CatalogStore>) -> Self {
        Self {
            store,
            write_lock: Mutex::new(()),
            latency: None,
        }
    }

    /// Sleep before each mutation, mimicking settlement delay.
    /// A UX affordance, not a correctness requirement.
    pub fn with_latency(mut self, latency: Option<Duration>) -> Self {
        self.latency = latency;
        self
    }

    /// Mint a new listing: validated, unowned, available.
    ///
    /// Ids are UUID v7 - time-ordered and unique regardless of how
    /// many records exist or how many mints race.
    pub async fn mint(&self, request: MintRequest) -> Result<NftRecord> {
        let price_wei = request.validate()?;
        self.pause().await;

        let _guard = self.write_lock.lock().await;
        let mut records = self.store.load_all().await?;

        let record = NftRecord {
            id: Uuid::now_v7().to_string(),
            name: request.name.trim().to_string(),
            description: request.description.trim().to_string(),
            image: request.image.trim().to_string(),
            price: price_wei.to_string(),
            available: true,
            owner: String::new(),
            minted_at: Utc::now().to_rfc3339(),
        };

        records.push(record.clone());
        self.store.replace_all(records).await?;

        info!(
            id = %record.id,
            name = %record.name,
            price_wei = %record.price,
            store = self.store.name(),
            "minted listing"
        );
        Ok(record)
    }

    /// Transfer a listing to `buyer`: conditional update from
    /// available/unowned to sold/owned.
    ///
    /// Fails with `NotFound` for an unknown id and `AlreadySold` for a
    /// record that was bought first; a retry of a won race therefore
    /// surfaces as an error instead of rewriting the owner.
    pub async fn purchase(&self, id: &str, buyer: &str) -> Result<NftRecord> {
        if buyer.trim().is_empty() {
            return Err(MarketError::IdentityRequired);
        }
        self.pause().await;

        let _guard = self.write_lock.lock().await;
        let mut records = self.store.load_all().await?;

        let record = records
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| MarketError::NotFound { id: id.to_string() })?;
        if !record.available {
            debug!(id, owner = %record.owner, "purchase raced a completed sale");
            return Err(MarketError::AlreadySold { id: id.to_string() });
        }

        record.available = false;
        record.owner = buyer.to_string();
        let sold = record.clone();

        self.store.replace_all(records).await?;

        info!(id, buyer, store = self.store.name(), "completed purchase");
        Ok(sold)
    }

    async fn pause(&self) {
        if let Some(latency) = self.latency {
            tokio::time::sleep(latency).await;
        }
    }
}
