//! Marquee
//!
//! Marquee is an in-memory cart and session engine for a movie storefront: one cart per user session, a catalog of listings to fill it from, and a checkout that turns a full cart into a receipt.

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod history;
pub mod prelude;
pub mod pricing;
pub mod session;
pub mod utils;
