//! Curio Market - query and mutation services over the catalog
//!
//! The market module enforces the two valid state transitions (mint,
//! purchase) and provides the read-side views (available listings,
//! listings by owner). All services operate through the `CatalogStore`
//! seam and treat wallet identity as an opaque string supplied by an
//! `IdentityProvider`.
//!
//! Mutations are serialized: every load-transform-save cycle runs
//! under a single writer lock, and purchase is a conditional update
//! that fails on an id that is missing or already sold rather than
//! blindly overwriting the owner.

mod backend;
mod config;
mod identity;
mod query;
mod service;

pub use backend::{LocalBackend, MarketBackend};
pub use config::{MarketConfig, DEFAULT_STORE_FILE};
pub use identity::{EnvIdentity, FixedIdentity, IdentityProvider};
pub use query::MarketQuery;
pub use service::Marketplace;
