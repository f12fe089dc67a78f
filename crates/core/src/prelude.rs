//! Storefront prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    cart::{Cart, CartError, CartLine, to_cart_line},
    catalog::{
        CatalogError, CatalogProvider, CategoryCounts, CategoryFilter, FixtureCatalog,
        category_counts,
    },
    checkout::{
        CheckoutError, CustomerDetails, Navigator, OrderChannel, OrderDispatch, OrderSubmission,
    },
    config::{ConfigError, StoreConfig},
    prices::Price,
    pricing::{Totals, format_amount},
    products::{Category, Product, ProductId},
    session::CartSession,
    storage::{FileStore, KeyValueStore, MemoryStore, StorageError},
};
