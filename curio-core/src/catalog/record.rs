//! The NFT record - the catalog's sole entity
//!
//! A record is created once by mint (unowned, available) and mutated
//! exactly once by purchase (owned, unavailable). Records are never
//! deleted; there is no burn operation.

use serde::{Deserialize, Serialize};

use crate::catalog::price::parse_ether;
use crate::error::{MarketError, Result};

/// Minimum length for a listing name
pub const MIN_NAME_LEN: usize = 3;

/// Minimum length for a listing description
pub const MIN_DESCRIPTION_LEN: usize = 10;

/// A single NFT listing as stored in the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NftRecord {
    /// Unique token id, assigned at mint and immutable afterwards
    pub id: String,
    pub name: String,
    pub description: String,
    /// Image URL; never checked for reachability
    pub image: String,
    /// Price in wei, as a decimal string. Set once at mint.
    pub price: String,
    /// True until purchased
    pub available: bool,
    /// Wallet address of the owner, or empty while marketplace-held
    pub owner: String,
    /// When this record was minted (RFC 3339)
    pub minted_at: String,
}

impl NftRecord {
    /// Invariant: a record is available exactly while it has no owner.
    pub fn is_consistent(&self) -> bool {
        self.available == self.owner.is_empty()
    }

    /// Case-insensitive ownership check. Marketplace-held records
    /// (empty owner) belong to nobody.
    pub fn owned_by(&self, identity: &str) -> bool {
        !self.owner.is_empty() && self.owner.eq_ignore_ascii_case(identity)
    }
}

/// Input for the mint operation
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MintRequest {
    pub name: String,
    pub description: String,
    pub image: String,
    /// Price as a decimal ether amount, e.g. "0.05"
    pub price: String,
}

impl MintRequest {
    /// Validate the request and return the parsed price in wei.
    ///
    /// Rejects before any store access; a failed mint leaves the
    /// catalog untouched.
    pub fn validate(&self) -> Result<u128> {
        if self.name.trim().len() < MIN_NAME_LEN {
            return Err(MarketError::Validation(format!(
                "name must be at least {MIN_NAME_LEN} characters"
            )));
        }
        if self.description.trim().len() < MIN_DESCRIPTION_LEN {
            return Err(MarketError::Validation(format!(
                "description must be at least {MIN_DESCRIPTION_LEN} characters"
            )));
        }
        let image = self.image.trim();
        if !(image.starts_with("http://") || image.starts_with("https://")) {
            return Err(MarketError::Validation(
                "image must be an http(s) URL".to_string(),
            ));
        }
        parse_ether(&self.price)
    }
}
