//! Marquee prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    cart::{Cart, CartItem},
    catalog::{Catalog, CatalogError, Movie},
    checkout::{CheckoutError, CustomerDetails, Receipt, checkout},
    history::{SearchEntry, SearchHistory},
    pricing::TicketPricing,
    session::{Session, SessionError, SessionStore},
};
