//! Marketplace error types with clear, actionable messages

use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by the catalog store and marketplace services.
///
/// Every variant is raised before any partial mutation becomes visible:
/// a failed operation leaves the stored collection exactly as it was.
#[derive(Error, Debug)]
pub enum MarketError {
    /// A mint request failed validation before touching the store
    #[error("Invalid mint request: {0}")]
    Validation(String),

    /// A mutation that requires a buyer identity was invoked without one
    #[error("A connected wallet identity is required for this operation")]
    IdentityRequired,

    /// Purchase targeted an id that is not in the catalog
    #[error("No listing found for token {id}")]
    NotFound { id: String },

    /// Purchase targeted a record that has already been sold
    #[error("Token {id} has already been sold")]
    AlreadySold { id: String },

    /// The backing medium could not be read or written
    #[error("Catalog store I/O failure at {path}")]
    StoreIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Stored data exists but does not parse as a record collection.
    /// Fatal for the current operation; the file is left untouched.
    #[error("Catalog store is corrupt (records do not parse)")]
    StoreCorrupt {
        #[source]
        source: serde_json::Error,
    },

    /// Configuration could not be resolved
    #[error("Configuration error: {0}")]
    Config(String),
}

impl MarketError {
    pub(crate) fn store_io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        MarketError::StoreIo {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, MarketError>;
