//! Products

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::prices::Price;

/// Opaque product identifier assigned by the catalog.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    /// Create a product id from any string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the id is empty or whitespace only.
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ProductId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for ProductId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Category tag. Each catalog declares its own closed set of categories.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Category(String);

impl Category {
    /// Create a category tag.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Borrow the category name.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Category {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

/// Product
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    /// Product id
    pub id: ProductId,

    /// Primary display name
    pub name: String,

    /// Display name in the secondary language
    pub secondary_name: Option<String>,

    /// Product category
    pub category: Category,

    /// Unit price
    pub price: Price,

    /// Whether the product can currently be ordered
    pub in_stock: bool,

    /// Image URL, owned by external storage
    pub image_url: String,

    /// Description in the primary language
    pub description: Option<String>,

    /// Description in the secondary language
    pub secondary_description: Option<String>,
}

impl Product {
    /// Create an in-stock product with no image or descriptions.
    pub fn new(
        id: impl Into<ProductId>,
        name: impl Into<String>,
        category: impl Into<Category>,
        price: Price,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            secondary_name: None,
            category: category.into(),
            price,
            in_stock: true,
            image_url: String::new(),
            description: None,
            secondary_description: None,
        }
    }

    /// Set the image URL.
    #[must_use]
    pub fn with_image_url(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = image_url.into();
        self
    }

    /// Set the stock flag.
    #[must_use]
    pub fn with_stock(mut self, in_stock: bool) -> Self {
        self.in_stock = in_stock;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_product_defaults_to_in_stock() {
        let product = Product::new("1", "Classic Kadar", "Kadar", Price::new(1800));

        assert_eq!(product.id.as_str(), "1");
        assert_eq!(product.category, Category::new("Kadar"));
        assert!(product.in_stock);
        assert!(product.image_url.is_empty());
    }

    #[test]
    fn with_stock_marks_product_unavailable() {
        let product =
            Product::new("6", "Royal Carandi", "Carandi", Price::new(2800)).with_stock(false);

        assert!(!product.in_stock);
    }

    #[test]
    fn blank_ids() {
        assert!(ProductId::new("  ").is_blank());
        assert!(!ProductId::new("a").is_blank());
    }
}
