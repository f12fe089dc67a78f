//! Catalog
//!
//! Read-only access to the products offered by the shop. The cart only ever
//! reads id, names, category, price and image from the products it receives.

use std::collections::BTreeMap;

use thiserror::Error;

use crate::products::{Category, Product, ProductId};

mod fixture;

pub use fixture::{CatalogFixture, FixtureCatalog, ProductFixture, parse_price};

/// Catalog Errors
#[derive(Debug, Error)]
pub enum CatalogError {
    /// IO error reading a catalog file
    #[error("Failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// Invalid price format
    #[error("Invalid price format: {0}")]
    InvalidPrice(String),

    /// Unknown currency code
    #[error("Unknown currency code: {0}")]
    UnknownCurrency(String),

    /// Currency mismatch between a product and the catalog
    #[error("Currency mismatch: expected {0}, found {1}")]
    CurrencyMismatch(String, String),

    /// Product uses a category the catalog does not declare
    #[error("Product {0} uses unknown category {1}")]
    UnknownCategory(ProductId, Category),

    /// Product id is empty
    #[error("Product ids must not be blank")]
    BlankProductId,

    /// Two products share an id
    #[error("Product id {0} is declared more than once")]
    DuplicateProductId(ProductId),
}

/// Which products a listing should include.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    /// Every product.
    #[default]
    All,

    /// Only products tagged with the category.
    Only(Category),
}

impl CategoryFilter {
    /// Whether `product` passes the filter.
    pub fn matches(&self, product: &Product) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(category) => &product.category == category,
        }
    }
}

impl From<Option<Category>> for CategoryFilter {
    fn from(category: Option<Category>) -> Self {
        category.map_or(CategoryFilter::All, CategoryFilter::Only)
    }
}

/// Source of truth for product data.
pub trait CatalogProvider {
    /// Products listed in the shop, in display order, narrowed by `filter`.
    ///
    /// Out-of-stock products are listed too; their `in_stock` flag is false.
    ///
    /// # Errors
    ///
    /// Returns a [`CatalogError`] if the backing source cannot be read.
    fn list_available_products(
        &self,
        filter: &CategoryFilter,
    ) -> Result<Vec<Product>, CatalogError>;

    /// Look up a single product.
    ///
    /// # Errors
    ///
    /// Returns a [`CatalogError`] if the backing source cannot be read.
    fn find_product(&self, id: &ProductId) -> Result<Option<Product>, CatalogError>;

    /// The closed set of categories, in display order.
    fn categories(&self) -> &[Category];
}

/// Product counts shown on the category filter tabs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryCounts {
    /// Count behind the "All" tab.
    pub all: usize,

    /// Count per declared category; categories with no products count 0.
    pub by_category: BTreeMap<Category, usize>,
}

/// Count products per category.
///
/// # Errors
///
/// Returns a [`CatalogError`] if the catalog cannot be listed.
pub fn category_counts<C: CatalogProvider + ?Sized>(
    catalog: &C,
) -> Result<CategoryCounts, CatalogError> {
    let products = catalog.list_available_products(&CategoryFilter::All)?;

    let mut by_category: BTreeMap<Category, usize> = catalog
        .categories()
        .iter()
        .map(|category| (category.clone(), 0))
        .collect();

    for product in &products {
        *by_category.entry(product.category.clone()).or_default() += 1;
    }

    Ok(CategoryCounts {
        all: products.len(),
        by_category,
    })
}
