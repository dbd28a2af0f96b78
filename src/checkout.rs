//! Checkout.
//!
//! Turns a session's cart into a completed purchase: validates the customer
//! details from the purchase form, totals the tickets, drains the cart and
//! produces a [`Receipt`].

use std::io;

use jiff::Timestamp;
use rusty_money::{Money, MoneyError, iso::Currency};
use tabled::{
    builder::Builder,
    settings::{Alignment, Style, object::Columns},
};
use thiserror::Error;
use tracing::info;

use crate::{
    cart::{Cart, CartItem},
    pricing::TicketPricing,
};

/// Errors that can occur while placing an order.
#[derive(Debug, Error)]
pub enum CheckoutError {
    /// The cart holds no items.
    #[error("cannot check out an empty cart")]
    EmptyCart,

    /// A required purchase-form field was left blank.
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    /// The email address is not plausibly an email address.
    #[error("invalid email address: {0}")]
    InvalidEmail(String),

    /// Wrapped money arithmetic error.
    #[error(transparent)]
    Money(#[from] MoneyError),

    /// IO error writing the receipt.
    #[error("IO error")]
    Io,
}

/// The purchase form's customer details.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomerDetails {
    first_name: String,
    last_name: String,
    email: String,
}

impl CustomerDetails {
    /// Creates customer details from the purchase form fields.
    #[must_use]
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
        }
    }

    /// Returns the customer's first name.
    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    /// Returns the customer's last name.
    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    /// Returns the customer's email address.
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Checks that every required field is filled in.
    ///
    /// # Errors
    ///
    /// Returns [`CheckoutError::MissingField`] for a blank field, or
    /// [`CheckoutError::InvalidEmail`] for an email with no `@`.
    pub fn validate(&self) -> Result<(), CheckoutError> {
        if self.first_name.trim().is_empty() {
            return Err(CheckoutError::MissingField("first name"));
        }

        if self.last_name.trim().is_empty() {
            return Err(CheckoutError::MissingField("last name"));
        }

        if self.email.trim().is_empty() {
            return Err(CheckoutError::MissingField("email"));
        }

        if !self.email.contains('@') {
            return Err(CheckoutError::InvalidEmail(self.email.clone()));
        }

        Ok(())
    }
}

/// A completed purchase.
#[derive(Debug, Clone)]
pub struct Receipt {
    items: Vec<CartItem>,
    ticket_price: Money<'static, Currency>,
    total: Money<'static, Currency>,
    customer: CustomerDetails,
    placed_at: Timestamp,
}

impl Receipt {
    /// Returns the purchased items, in the order they were carted.
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Returns the number of tickets purchased.
    #[must_use]
    pub fn ticket_count(&self) -> usize {
        self.items.len()
    }

    /// Returns the per-ticket price paid.
    pub fn ticket_price(&self) -> &Money<'static, Currency> {
        &self.ticket_price
    }

    /// Returns the order total.
    pub fn total(&self) -> &Money<'static, Currency> {
        &self.total
    }

    /// Returns the customer the order was placed for.
    pub fn customer(&self) -> &CustomerDetails {
        &self.customer
    }

    /// Returns when the order was placed.
    pub fn placed_at(&self) -> Timestamp {
        self.placed_at
    }

    /// Writes the receipt as a text table.
    ///
    /// # Errors
    ///
    /// Returns [`CheckoutError::Io`] if writing fails.
    pub fn write_to(&self, mut out: impl io::Write) -> Result<(), CheckoutError> {
        let mut builder = Builder::default();

        builder.push_record(["Movie", "Price"]);

        for item in &self.items {
            builder.push_record([item.name().to_string(), self.ticket_price.to_string()]);
        }

        builder.push_record(["Total".to_string(), self.total.to_string()]);

        let mut table = builder.build();

        table.with(Style::psql());
        table.modify(Columns::last(), Alignment::right());

        writeln!(out, "{table}").map_err(|_err| CheckoutError::Io)?;
        writeln!(
            out,
            "{} {} <{}>: {} ticket(s)",
            self.customer.first_name(),
            self.customer.last_name(),
            self.customer.email(),
            self.ticket_count(),
        )
        .map_err(|_err| CheckoutError::Io)
    }
}

/// Places an order for everything in the cart.
///
/// On success the cart is drained: the original storefront empties the cart
/// once a purchase goes through.
///
/// # Errors
///
/// Returns a [`CheckoutError`] if the customer details are incomplete, the
/// cart is empty, or the total cannot be calculated. The cart is left
/// untouched on any error.
pub fn checkout(
    cart: &mut Cart,
    pricing: &TicketPricing,
    customer: CustomerDetails,
) -> Result<Receipt, CheckoutError> {
    customer.validate()?;

    if cart.is_empty() {
        return Err(CheckoutError::EmptyCart);
    }

    let total = pricing.total(cart.items())?;
    let items = cart.take_items();

    info!(
        tickets = items.len(),
        total = %total,
        email = customer.email(),
        "order placed"
    );

    Ok(Receipt {
        items,
        ticket_price: *pricing.ticket_price(),
        total,
        customer,
        placed_at: Timestamp::now(),
    })
}

#[cfg(test)]
mod tests {
    use rusty_money::iso::USD;
    use testresult::TestResult;

    use super::*;

    fn carted() -> Cart {
        let mut cart = Cart::new();

        cart.add("Inception", 27205);
        cart.add("The Matrix", 603);

        cart
    }

    fn customer() -> CustomerDetails {
        CustomerDetails::new("Ada", "Lovelace", "ada@example.com")
    }

    #[test]
    fn checkout_totals_and_drains_the_cart() -> TestResult {
        let mut cart = carted();

        let receipt = checkout(&mut cart, &TicketPricing::standard(), customer())?;

        assert_eq!(receipt.ticket_count(), 2);
        assert_eq!(receipt.total(), &Money::from_minor(798, USD));
        assert_eq!(receipt.items().first().map(CartItem::id), Some(27205));
        assert!(cart.is_empty(), "cart should be drained after checkout");

        Ok(())
    }

    #[test]
    fn checkout_empty_cart_fails() {
        let mut cart = Cart::new();

        let result = checkout(&mut cart, &TicketPricing::standard(), customer());

        assert!(
            matches!(result, Err(CheckoutError::EmptyCart)),
            "expected EmptyCart, got {result:?}"
        );
    }

    #[test]
    fn checkout_blank_field_fails_and_keeps_cart() {
        let mut cart = carted();

        let result = checkout(
            &mut cart,
            &TicketPricing::standard(),
            CustomerDetails::new("", "Lovelace", "ada@example.com"),
        );

        assert!(
            matches!(result, Err(CheckoutError::MissingField("first name"))),
            "expected MissingField, got {result:?}"
        );
        assert_eq!(cart.len(), 2, "cart must be untouched on a failed checkout");
    }

    #[test]
    fn checkout_rejects_email_without_at_sign() {
        let mut cart = carted();

        let result = checkout(
            &mut cart,
            &TicketPricing::standard(),
            CustomerDetails::new("Ada", "Lovelace", "not-an-email"),
        );

        assert!(
            matches!(result, Err(CheckoutError::InvalidEmail(_))),
            "expected InvalidEmail, got {result:?}"
        );
    }

    #[test]
    fn validate_accepts_complete_details() -> TestResult {
        customer().validate()?;

        Ok(())
    }

    #[test]
    fn validate_reports_first_blank_field() {
        let details = CustomerDetails::new("Ada", "  ", "ada@example.com");

        let result = details.validate();

        assert!(
            matches!(result, Err(CheckoutError::MissingField("last name"))),
            "expected MissingField for last name, got {result:?}"
        );
    }

    #[test]
    fn receipt_renders_one_row_per_ticket() -> TestResult {
        let mut cart = carted();
        let receipt = checkout(&mut cart, &TicketPricing::standard(), customer())?;

        let mut rendered = Vec::new();

        receipt.write_to(&mut rendered)?;

        let rendered = String::from_utf8(rendered)?;

        assert!(rendered.contains("Inception"), "missing first movie row");
        assert!(rendered.contains("The Matrix"), "missing second movie row");
        assert!(rendered.contains("Total"), "missing total row");
        assert!(
            rendered.contains("ada@example.com"),
            "missing customer summary line"
        );

        Ok(())
    }

    #[test]
    fn receipt_records_placement_details() -> TestResult {
        let before = Timestamp::now();
        let mut cart = carted();

        let receipt = checkout(&mut cart, &TicketPricing::standard(), customer())?;

        assert!(receipt.placed_at() >= before);
        assert_eq!(receipt.customer().first_name(), "Ada");
        assert_eq!(receipt.ticket_price(), &Money::from_minor(399, USD));

        Ok(())
    }
}
