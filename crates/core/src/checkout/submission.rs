//! Order submission

use crate::{
    cart::{Cart, CartLine},
    checkout::{CheckoutError, CustomerDetails},
    pricing::Totals,
};

/// A finalised order, built at checkout and discarded once handed off.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderSubmission {
    customer: CustomerDetails,
    lines: Vec<CartLine>,
    totals: Totals,
}

impl OrderSubmission {
    /// Build a submission from the cart as it is now.
    ///
    /// # Errors
    ///
    /// - [`CheckoutError::EmptyCart`]: the cart has no lines.
    /// - [`CheckoutError::MissingField`]: a contact field is blank.
    pub fn new(cart: &Cart, customer: CustomerDetails) -> Result<Self, CheckoutError> {
        if cart.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }

        customer.validate()?;

        Ok(Self {
            customer,
            lines: cart.lines().to_vec(),
            totals: cart.totals(),
        })
    }

    /// Who placed the order.
    pub fn customer(&self) -> &CustomerDetails {
        &self.customer
    }

    /// Ordered lines, in cart order.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Subtotal, delivery and total.
    pub fn totals(&self) -> Totals {
        self.totals
    }
}
