//! Storefront
//!
//! Storefront is the cart engine behind a small clothing shop: a catalog read
//! through a provider interface, a client-side cart persisted between the shop
//! and checkout pages, and a checkout that hands a formatted order to an
//! external messaging link.

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod config;
pub mod prelude;
pub mod prices;
pub mod pricing;
pub mod products;
pub mod session;
pub mod storage;
