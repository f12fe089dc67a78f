//! Cart Lines

use std::num::NonZeroU32;

use serde::{Deserialize, Serialize};

use crate::{
    prices::Price,
    pricing,
    products::{Category, Product, ProductId},
};

/// One product snapshot plus the quantity selected.
///
/// The snapshot is copied from the catalog when the product is first added,
/// so later catalog edits never change a line already in the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    product_id: ProductId,
    name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    secondary_name: Option<String>,
    category: Category,
    price: Price,
    image_url: String,
    quantity: NonZeroU32,
}

/// Snapshot a product into a new cart line with quantity 1.
pub fn to_cart_line(product: &Product) -> CartLine {
    CartLine {
        product_id: product.id.clone(),
        name: product.name.clone(),
        secondary_name: product.secondary_name.clone(),
        category: product.category.clone(),
        price: product.price,
        image_url: product.image_url.clone(),
        quantity: NonZeroU32::MIN,
    }
}

impl CartLine {
    /// Id of the product this line was taken from.
    pub fn product_id(&self) -> &ProductId {
        &self.product_id
    }

    /// Display name captured when the line was created.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Secondary-language name, if the product had one.
    pub fn secondary_name(&self) -> Option<&str> {
        self.secondary_name.as_deref()
    }

    /// Category captured when the line was created.
    pub fn category(&self) -> &Category {
        &self.category
    }

    /// Unit price captured when the line was created.
    pub fn price(&self) -> Price {
        self.price
    }

    /// Image URL captured when the line was created.
    pub fn image_url(&self) -> &str {
        &self.image_url
    }

    /// Selected quantity, always at least 1.
    pub fn quantity(&self) -> u32 {
        self.quantity.get()
    }

    /// Unit price times quantity.
    pub fn line_total(&self) -> Price {
        pricing::line_total(self.price, self.quantity())
    }

    pub(crate) fn increment(&mut self) {
        self.quantity = self.quantity.saturating_add(1);
    }

    pub(crate) fn set_quantity(&mut self, quantity: NonZeroU32) {
        self.quantity = quantity;
    }
}
