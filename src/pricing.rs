//! Ticket pricing.

use rust_decimal::Decimal;
use rusty_money::{Money, MoneyError, iso};

use crate::cart::CartItem;

/// Standard ticket price: $3.99, in cents.
const STANDARD_TICKET_CENTS: i64 = 399;

/// Flat per-ticket pricing for carted movies.
///
/// Every item in a cart is charged the same ticket price.
#[derive(Debug, Clone, PartialEq)]
pub struct TicketPricing {
    price: Money<'static, iso::Currency>,
}

impl TicketPricing {
    /// Creates pricing with the given per-ticket price.
    #[must_use]
    pub fn new(price: Money<'static, iso::Currency>) -> Self {
        Self { price }
    }

    /// The standard storefront price of $3.99 per ticket.
    #[must_use]
    pub fn standard() -> Self {
        Self::new(Money::from_decimal(
            Decimal::new(STANDARD_TICKET_CENTS, 2),
            iso::USD,
        ))
    }

    /// Returns the per-ticket price.
    pub fn ticket_price(&self) -> &Money<'static, iso::Currency> {
        &self.price
    }

    /// Calculates the total price of the given cart items.
    ///
    /// # Errors
    ///
    /// Returns a [`MoneyError`] if the money arithmetic fails.
    pub fn total(&self, items: &[CartItem]) -> Result<Money<'static, iso::Currency>, MoneyError> {
        items
            .iter()
            .try_fold(Money::from_minor(0, self.price.currency()), |acc, _| {
                acc.add(self.price)
            })
    }
}

impl Default for TicketPricing {
    fn default() -> Self {
        Self::standard()
    }
}
