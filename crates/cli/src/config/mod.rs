//! Storefront CLI configuration

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::observability::LoggingConfig;

pub(crate) mod observability;

/// Storefront command line shop
#[derive(Debug, Parser)]
#[command(name = "storefront", about = "Browse the catalog, fill a cart and send an order", long_about = None)]
pub struct CliConfig {
    /// Store settings YAML (built-in defaults when omitted)
    #[arg(long = "config", env = "STOREFRONT_CONFIG", global = true)]
    pub store: Option<PathBuf>,

    /// Catalog YAML
    #[arg(long, env = "STOREFRONT_CATALOG", default_value = "fixtures/catalog/demo.yml", global = true)]
    pub catalog: PathBuf,

    /// Directory holding the persisted cart
    #[arg(long, env = "STOREFRONT_DATA_DIR", default_value = ".storefront", global = true)]
    pub data_dir: PathBuf,

    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,

    /// What to do.
    #[command(subcommand)]
    pub command: Command,
}

/// Shop actions.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// List products, optionally for one category
    Products {
        /// Only show this category
        #[arg(short, long)]
        category: Option<String>,
    },

    /// List categories with product counts
    Categories,

    /// Add one unit of a product to the cart
    Add {
        /// Product id
        id: String,
    },

    /// Set the quantity of a product already in the cart
    Update {
        /// Product id
        id: String,

        /// New quantity; values below 1 become 1
        #[arg(allow_negative_numbers = true)]
        quantity: i64,
    },

    /// Remove a product from the cart
    Remove {
        /// Product id
        id: String,
    },

    /// Show the cart and its totals
    Cart,

    /// Send the order to the shop and empty the cart
    Checkout {
        /// Full name
        #[arg(long)]
        name: String,

        /// Phone number
        #[arg(long)]
        phone: String,

        /// Delivery address
        #[arg(long)]
        address: String,
    },

    /// Empty the cart
    Clear,
}

impl CliConfig {
    /// Load configuration from environment and CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be parsed
    pub fn load() -> Result<Self, clap::Error> {
        // Load .env file if present (ignore if missing)
        _ = dotenvy::dotenv();

        Self::try_parse()
    }
}
