//! Curio - an NFT marketplace catalog from the terminal
//!
//! Thin CLI over curio-core: every catalog rule lives in the library,
//! this binary only parses flags, picks an identity provider, and
//! renders results.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tabled::{
    settings::{object::Rows, Alignment, Modify, Style},
    Table, Tabled,
};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use curio_core::catalog::{format_ether, sample_records, CatalogStore, MintRequest, NftRecord};
use curio_core::market::{
    EnvIdentity, FixedIdentity, IdentityProvider, LocalBackend, MarketBackend, MarketConfig,
};

/// Environment variable consulted when --wallet is not given
const WALLET_ENV_VAR: &str = "CURIO_WALLET";

/// Log levels
#[derive(Debug, Clone, ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    fn to_filter_directive(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

#[derive(Parser, Debug)]
#[clap(
    name = "curio",
    about = "Mint, browse, and purchase NFT listings from a local catalog",
    version
)]
struct Cli {
    #[clap(subcommand)]
    command: Command,

    /// Override the catalog store path (default: platform data dir)
    #[clap(long, global = true)]
    store: Option<PathBuf>,

    /// Wallet address to act as (falls back to $CURIO_WALLET)
    #[clap(long, global = true)]
    wallet: Option<String>,

    /// Set log level
    #[clap(long, default_value = "warn", global = true)]
    log_level: LogLevel,

    /// Artificial delay per operation in milliseconds, to mimic a
    /// remote marketplace
    #[clap(long, global = true)]
    latency_ms: Option<u64>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Mint a new listing into the catalog
    Mint {
        /// Listing name
        #[clap(long)]
        name: String,

        /// Listing description
        #[clap(long)]
        description: String,

        /// Image URL
        #[clap(long)]
        image: String,

        /// Price in ETH, e.g. 0.05
        #[clap(long)]
        price: String,
    },

    /// Purchase a listing by token id
    Buy {
        /// Token id to purchase
        id: String,
    },

    /// Show listings currently for sale
    Market {
        /// Output as JSON
        #[clap(long)]
        json: bool,
    },

    /// Show listings owned by the connected wallet
    Mine {
        /// Output as JSON
        #[clap(long)]
        json: bool,
    },

    /// Stock an empty catalog with the demo listings
    Seed,
}

#[derive(Tabled)]
struct ListingRow {
    #[tabled(rename = "Token")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Price (ETH)")]
    price: String,
    #[tabled(rename = "Status")]
    status: String,
}

impl From<&NftRecord> for ListingRow {
    fn from(record: &NftRecord) -> Self {
        let status = if record.available {
            "for sale".to_string()
        } else {
            format!("owned by {}", record.owner)
        };
        Self {
            id: record.id.clone(),
            name: record.name.clone(),
            price: display_price(record),
            status,
        }
    }
}

fn display_price(record: &NftRecord) -> String {
    record
        .price
        .parse::<u128>()
        .map(format_ether)
        .unwrap_or_else(|_| record.price.clone())
}

fn render_table(records: &[NftRecord]) -> String {
    let rows: Vec<ListingRow> = records.iter().map(ListingRow::from).collect();
    Table::new(rows)
        .with(Style::modern())
        .with(Modify::new(Rows::first()).with(Alignment::center()))
        .to_string()
}

fn print_listings(records: &[NftRecord], json: bool, empty_message: &str) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(records)?);
    } else if records.is_empty() {
        println!("{empty_message}");
    } else {
        println!("{}", render_table(records));
    }
    Ok(())
}

fn wallet_provider(wallet: Option<String>) -> Box<dyn IdentityProvider> {
    match wallet {
        Some(address) => Box::new(FixedIdentity::new(address)),
        None => Box::new(EnvIdentity::new(WALLET_ENV_VAR)),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(cli.log_level.to_filter_directive()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = MarketConfig::resolve(cli.store)
        .context("Failed to resolve catalog configuration")?
        .with_latency(cli.latency_ms.map(Duration::from_millis));
    let store = Arc::new(config.open_store());
    let backend = LocalBackend::with_latency(store.clone(), config.simulated_latency);
    let provider = wallet_provider(cli.wallet);
    debug!(
        store = %config.store_path.display(),
        backend = backend.name(),
        identity = provider.name(),
        "resolved marketplace configuration"
    );

    match cli.command {
        Command::Mint {
            name,
            description,
            image,
            price,
        } => {
            let minted = backend
                .create_item(MintRequest {
                    name,
                    description,
                    image,
                    price,
                })
                .await?;
            println!(
                "Minted '{}' as token {} - listed for sale at {} ETH.",
                minted.name,
                minted.id,
                display_price(&minted)
            );
        }

        Command::Buy { id } => {
            let buyer = provider.current().unwrap_or_default();
            let sold = backend.purchase_item(&id, &buyer).await?;
            println!(
                "You now own '{}' (token {}) - paid {} ETH.",
                sold.name,
                sold.id,
                display_price(&sold)
            );
        }

        Command::Market { json } => {
            let items = backend.fetch_market_items().await?;
            print_listings(
                &items,
                json,
                "No NFTs available in the marketplace. Be the first to mint one!",
            )?;
        }

        Command::Mine { json } => {
            let Some(identity) = provider.current() else {
                println!("No wallet connected. Pass --wallet or set ${WALLET_ENV_VAR}.");
                return Ok(());
            };
            let items = backend.fetch_owned_items(&identity).await?;
            print_listings(&items, json, "You don't own any NFTs yet.")?;
        }

        Command::Seed => {
            let existing = store.load_all().await?;
            if !existing.is_empty() {
                anyhow::bail!(
                    "Refusing to seed: the catalog at {} already has {} record(s)",
                    store.path().display(),
                    existing.len()
                );
            }
            let records = sample_records();
            store.replace_all(records.clone()).await?;
            println!(
                "Seeded {} demo listing(s) into {}.",
                records.len(),
                store.path().display()
            );
        }
    }

    Ok(())
}
