//! Cart
//!
//! The shopper's ordered selection of products. A [`Cart`] holds at most one
//! [`CartLine`] per product id, every line has a quantity of at least 1, and
//! insertion order is kept for display.

use std::num::NonZeroU32;

use rustc_hash::FxHashSet;
use thiserror::Error;
use tracing::{debug, warn};

use crate::{
    prices::Price,
    pricing::{self, Totals},
    products::{Product, ProductId},
    storage::{KeyValueStore, StorageError},
};

mod line;

pub use line::{CartLine, to_cart_line};

/// Errors related to persisting a cart.
#[derive(Debug, Error)]
pub enum CartError {
    /// The cart could not be serialised.
    #[error("failed to serialise cart snapshot: {0}")]
    Snapshot(#[from] serde_json::Error),

    /// The persistent slot could not be written or cleared.
    #[error("failed to persist cart: {0}")]
    Storage(#[from] StorageError),
}

/// Reasons a decoded snapshot is not a valid cart.
#[derive(Debug, Error, PartialEq)]
enum InvalidSnapshot {
    #[error("line {0} has an empty product id")]
    BlankProductId(usize),

    #[error("product {0} appears on more than one line")]
    DuplicateProduct(ProductId),
}

/// Cart
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one unit of `product`.
    ///
    /// If the product is already in the cart its quantity goes up by one,
    /// otherwise a snapshot of the product is appended with quantity 1. Stock
    /// is not checked here; the catalog disables adding unavailable products.
    pub fn add_item(&mut self, product: &Product) {
        if let Some(line) = self.line_mut(&product.id) {
            line.increment();

            debug!(product = %product.id, quantity = line.quantity(), "incremented cart line");

            return;
        }

        self.lines.push(to_cart_line(product));

        debug!(product = %product.id, lines = self.lines.len(), "added cart line");
    }

    /// Set the quantity of the line for `id`.
    ///
    /// Quantities below 1 are clamped to 1; only [`Cart::remove_item`] drops a
    /// line. Returns `false` without changing anything when no line matches.
    pub fn update_quantity(&mut self, id: &ProductId, quantity: i64) -> bool {
        let Some(line) = self.line_mut(id) else {
            return false;
        };

        line.set_quantity(clamp_quantity(quantity));

        debug!(product = %id, quantity = line.quantity(), "updated cart line quantity");

        true
    }

    /// Add one to the quantity of the line for `id`.
    pub fn increment_quantity(&mut self, id: &ProductId) -> bool {
        let Some(quantity) = self.line(id).map(CartLine::quantity) else {
            return false;
        };

        self.update_quantity(id, i64::from(quantity) + 1)
    }

    /// Take one from the quantity of the line for `id`, stopping at 1.
    pub fn decrement_quantity(&mut self, id: &ProductId) -> bool {
        let Some(quantity) = self.line(id).map(CartLine::quantity) else {
            return false;
        };

        self.update_quantity(id, i64::from(quantity) - 1)
    }

    /// Remove the line for `id`, returning it if there was one.
    pub fn remove_item(&mut self, id: &ProductId) -> Option<CartLine> {
        let position = self
            .lines
            .iter()
            .position(|line| line.product_id() == id)?;

        let removed = self.lines.remove(position);

        debug!(product = %id, lines = self.lines.len(), "removed cart line");

        Some(removed)
    }

    /// Sum of `price * quantity` over every line.
    pub fn subtotal(&self) -> Price {
        pricing::subtotal(&self.lines)
    }

    /// Sum of quantities, as shown on the cart badge.
    pub fn item_count(&self) -> u64 {
        self.lines
            .iter()
            .map(|line| u64::from(line.quantity()))
            .sum()
    }

    /// Subtotal, delivery fee and total.
    pub fn totals(&self) -> Totals {
        Totals::from_lines(&self.lines)
    }

    /// Lines in insertion order.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// The line for `id`, if any.
    pub fn line(&self, id: &ProductId) -> Option<&CartLine> {
        self.lines.iter().find(|line| line.product_id() == id)
    }

    /// Get the number of lines in the cart.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Check if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Remove every line.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Serialise the cart to its JSON snapshot.
    ///
    /// # Errors
    ///
    /// Returns a [`CartError::Snapshot`] if serialisation fails.
    pub fn snapshot(&self) -> Result<String, CartError> {
        Ok(serde_json::to_string(&self.lines)?)
    }

    /// Rebuild a cart from a snapshot.
    ///
    /// A snapshot that is not valid JSON, or that breaks the cart invariants
    /// (zero quantities, blank or repeated product ids), yields an empty cart.
    pub fn restore(blob: &str) -> Self {
        let lines = match serde_json::from_str::<Vec<CartLine>>(blob) {
            Ok(lines) => lines,
            Err(error) => {
                warn!(%error, "discarding unreadable cart snapshot");

                return Self::default();
            }
        };

        match Self::from_lines(lines) {
            Ok(cart) => cart,
            Err(reason) => {
                warn!(%reason, "discarding invalid cart snapshot");

                Self::default()
            }
        }
    }

    /// Write the snapshot to `key` in `store`.
    ///
    /// # Errors
    ///
    /// Returns a [`CartError`] if serialisation or the store write fails.
    pub fn save_to<S: KeyValueStore + ?Sized>(
        &self,
        store: &mut S,
        key: &str,
    ) -> Result<(), CartError> {
        let blob = self.snapshot()?;

        store.write(key, &blob)?;

        debug!(key, lines = self.lines.len(), "saved cart snapshot");

        Ok(())
    }

    /// Read the cart stored under `key`.
    ///
    /// A missing slot, an unreadable store or a corrupt snapshot all give an
    /// empty cart.
    pub fn load_from<S: KeyValueStore + ?Sized>(store: &S, key: &str) -> Self {
        match store.read(key) {
            Ok(Some(blob)) => Self::restore(&blob),
            Ok(None) => Self::default(),
            Err(error) => {
                warn!(%error, key, "could not read cart snapshot");

                Self::default()
            }
        }
    }

    /// Delete the snapshot stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns a [`CartError::Storage`] if the store delete fails.
    pub fn discard_from<S: KeyValueStore + ?Sized>(
        store: &mut S,
        key: &str,
    ) -> Result<(), CartError> {
        store.delete(key)?;

        Ok(())
    }

    fn from_lines(lines: Vec<CartLine>) -> Result<Self, InvalidSnapshot> {
        let mut seen = FxHashSet::default();

        for (index, line) in lines.iter().enumerate() {
            if line.product_id().is_blank() {
                return Err(InvalidSnapshot::BlankProductId(index));
            }

            if !seen.insert(line.product_id()) {
                return Err(InvalidSnapshot::DuplicateProduct(line.product_id().clone()));
            }
        }

        Ok(Self { lines })
    }

    fn line_mut(&mut self, id: &ProductId) -> Option<&mut CartLine> {
        self.lines.iter_mut().find(|line| line.product_id() == id)
    }
}

fn clamp_quantity(quantity: i64) -> NonZeroU32 {
    let clamped = u32::try_from(quantity.max(1)).unwrap_or(u32::MAX);

    NonZeroU32::new(clamped).unwrap_or(NonZeroU32::MIN)
}
