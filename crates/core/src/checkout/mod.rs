//! Checkout
//!
//! Turns a cart and the shopper's contact details into a single text message
//! and hands a deep link carrying it to the host's navigation. The hand-off is
//! one-way: nothing is awaited, acknowledged, retried or deduplicated.

use thiserror::Error;

use crate::cart::CartError;

mod channel;
mod customer;
mod message;
mod submission;

pub use channel::{Navigator, OrderChannel, OrderDispatch};
pub use customer::CustomerDetails;
pub use message::{format_order_message, order_url};
pub use submission::OrderSubmission;

/// Reasons a checkout is refused.
#[derive(Debug, Error)]
pub enum CheckoutError {
    /// There is nothing to order.
    #[error("Your cart is empty")]
    EmptyCart,

    /// A required contact field is blank.
    #[error("Customer {0} is required")]
    MissingField(&'static str),

    /// The cart could not be handed over to the checkout page.
    #[error(transparent)]
    Cart(#[from] CartError),
}
