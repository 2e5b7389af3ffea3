//! Curio Catalog - NFT record storage
//!
//! This module holds the catalog's data model and its persistence
//! boundary: the system of record for what exists and who owns it.
//!
//! # Overview
//!
//! The catalog consists of:
//! - `NftRecord` - the unit of inventory (metadata, price, availability, owner)
//! - `CatalogStore` - the persistence seam (whole-collection load/replace)
//! - `FileStore` / `MemoryStore` - the two shipped store implementations
//! - price parsing between decimal ether amounts and integer wei
//!
//! # Architecture
//!
//! ```text
//! Marketplace / MarketQuery (market module)
//!        │
//!        ▼
//! CatalogStore (trait)
//!        │
//!        ├── FileStore   ← catalog.json on disk, atomic snapshot writes
//!        └── MemoryStore ← ephemeral, for tests and demos
//! ```
//!
//! Stores hold records in insertion order; every read returns a full
//! snapshot and every write replaces the full collection.

mod file_store;
mod price;
mod record;
mod seed;
mod store;

pub use file_store::FileStore;
pub use price::{format_ether, parse_ether};
pub use record::{MintRequest, NftRecord, MIN_DESCRIPTION_LEN, MIN_NAME_LEN};
pub use seed::{sample_records, SeedPolicy};
pub use store::{CatalogStore, MemoryStore};
