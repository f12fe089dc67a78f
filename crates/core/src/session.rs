//! Cart session
//!
//! One shopper's cart plus the persistent slot it is handed over through.
//! Page handlers borrow the session; the cart is only written to the slot at
//! explicit transition points.

use tracing::{info, warn};

use crate::{
    cart::{Cart, CartError, CartLine},
    checkout::{
        CheckoutError, CustomerDetails, Navigator, OrderChannel, OrderDispatch, OrderSubmission,
    },
    products::{Product, ProductId},
    storage::KeyValueStore,
};

/// Session-scoped owner of a [`Cart`] and its persistent slot.
#[derive(Debug)]
pub struct CartSession<S> {
    cart: Cart,
    store: S,
    key: String,
}

impl<S: KeyValueStore> CartSession<S> {
    /// Start with an empty cart, as on a first visit to the shop.
    pub fn start(store: S, key: impl Into<String>) -> Self {
        Self {
            cart: Cart::new(),
            store,
            key: key.into(),
        }
    }

    /// Pick up the cart left in the slot, as the checkout page does on load.
    ///
    /// A missing or corrupt snapshot resumes with an empty cart.
    pub fn resume(store: S, key: impl Into<String>) -> Self {
        let key = key.into();
        let cart = Cart::load_from(&store, &key);

        Self { cart, store, key }
    }

    /// The current cart.
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// The backing store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Key of the slot this session writes to.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Give the backing store back, e.g. to resume on another page.
    pub fn into_store(self) -> S {
        self.store
    }

    /// See [`Cart::add_item`].
    pub fn add_item(&mut self, product: &Product) {
        self.cart.add_item(product);
    }

    /// See [`Cart::update_quantity`].
    pub fn update_quantity(&mut self, id: &ProductId, quantity: i64) -> bool {
        self.cart.update_quantity(id, quantity)
    }

    /// See [`Cart::remove_item`].
    pub fn remove_item(&mut self, id: &ProductId) -> Option<CartLine> {
        self.cart.remove_item(id)
    }

    /// Empty the cart and its slot.
    ///
    /// # Errors
    ///
    /// Returns a [`CartError`] if the slot cannot be deleted.
    pub fn clear(&mut self) -> Result<(), CartError> {
        self.cart.clear();

        Cart::discard_from(&mut self.store, &self.key)
    }

    /// Write the cart to the slot without any checkout checks.
    ///
    /// # Errors
    ///
    /// Returns a [`CartError`] if the snapshot cannot be written.
    pub fn save(&mut self) -> Result<(), CartError> {
        self.cart.save_to(&mut self.store, &self.key)
    }

    /// Hand the cart over to the checkout page.
    ///
    /// # Errors
    ///
    /// - [`CheckoutError::EmptyCart`]: there is nothing to check out.
    /// - [`CheckoutError::Cart`]: the snapshot could not be written.
    pub fn proceed_to_checkout(&mut self) -> Result<(), CheckoutError> {
        if self.cart.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }

        self.save()?;

        info!(
            key = %self.key,
            lines = self.cart.len(),
            items = self.cart.item_count(),
            "cart handed to checkout"
        );

        Ok(())
    }

    /// Send the order and forget the cart.
    ///
    /// On success the in-memory cart is cleared and the slot deleted. A slot
    /// that cannot be deleted is logged; the order has already been handed
    /// off at that point. Refusals change nothing.
    ///
    /// # Errors
    ///
    /// - [`CheckoutError::EmptyCart`]: the cart has no lines.
    /// - [`CheckoutError::MissingField`]: a contact field is blank.
    pub fn submit_order<N: Navigator>(
        &mut self,
        customer: CustomerDetails,
        channel: &OrderChannel<N>,
    ) -> Result<OrderDispatch, CheckoutError> {
        let submission = OrderSubmission::new(&self.cart, customer)?;
        let dispatch = channel.send(&submission);

        self.cart.clear();

        if let Err(error) = Cart::discard_from(&mut self.store, &self.key) {
            warn!(%error, key = %self.key, "failed to clear cart slot after order hand-off");
        }

        Ok(dispatch)
    }
}
