//! Seed policy for a store that has never been initialized

use serde::{Deserialize, Serialize};

use crate::catalog::record::NftRecord;

/// What a fresh store is populated with before its first read.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeedPolicy {
    /// Start with no records
    #[default]
    Empty,
    /// Start with the fixed demo listings
    Sample,
}

impl SeedPolicy {
    pub fn initial_records(&self) -> Vec<NftRecord> {
        match self {
            SeedPolicy::Empty => Vec::new(),
            SeedPolicy::Sample => sample_records(),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SeedPolicy::Empty => "empty",
            SeedPolicy::Sample => "sample",
        }
    }
}

/// Fixed demo listings, all marketplace-held and available.
///
/// Ids and timestamps are constants so repeated seeding of fresh
/// stores is reproducible.
pub fn sample_records() -> Vec<NftRecord> {
    vec![
        NftRecord {
            id: "01981e60-1111-7aaa-8000-4f2d9c1b0001".to_string(),
            name: "Cosmic Voyager".to_string(),
            description: "A lone traveller drifting between dying stars".to_string(),
            image: "https://picsum.photos/seed/cosmic-voyager/600".to_string(),
            price: "50000000000000000".to_string(), // 0.05 ETH
            available: true,
            owner: String::new(),
            minted_at: "2025-07-14T09:30:00Z".to_string(),
        },
        NftRecord {
            id: "01981e60-2222-7bbb-8000-4f2d9c1b0002".to_string(),
            name: "Neon Tide".to_string(),
            description: "Electric surf breaking over a midnight skyline".to_string(),
            image: "https://picsum.photos/seed/neon-tide/600".to_string(),
            price: "120000000000000000".to_string(), // 0.12 ETH
            available: true,
            owner: String::new(),
            minted_at: "2025-07-14T09:31:00Z".to_string(),
        },
        NftRecord {
            id: "01981e60-3333-7ccc-8000-4f2d9c1b0003".to_string(),
            name: "Glass Meridian".to_string(),
            description: "Refraction study of a city that never existed".to_string(),
            image: "https://picsum.photos/seed/glass-meridian/600".to_string(),
            price: "1000000000000000000".to_string(), // 1 ETH
            available: true,
            owner: String::new(),
            minted_at: "2025-07-14T09:32:00Z".to_string(),
        },
    ]
}
