//! CLI errors

use storefront::prelude::{
    CartError, CatalogError, CheckoutError, ConfigError, ProductId, StorageError,
};
use thiserror::Error;

/// Anything that stops a command from completing.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error(transparent)]
    Cart(#[from] CartError),

    #[error(transparent)]
    Checkout(#[from] CheckoutError),

    #[error("No product with id {0}")]
    UnknownProduct(ProductId),

    #[error("{0} is out of stock")]
    OutOfStock(String),

    #[error("Product {0} is not in your cart")]
    NotInCart(ProductId),

    #[error("Catalog prices are in {catalog} but the store sells in {store}")]
    CurrencyMismatch {
        catalog: &'static str,
        store: &'static str,
    },

    #[error("Failed to write output: {0}")]
    Output(#[from] std::io::Error),
}
