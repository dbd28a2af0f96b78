//! Storefront Demo
//!
//! Simulates one user session: load the catalog, cart some listings, check
//! out and print the receipt.
//!
//! Use `-c` to point at a different catalog fixture
//! Use `-n` to limit how many listings get carted

use std::io;

use anyhow::Result;
use clap::Parser;
use uuid::Uuid;

use marquee::{
    catalog::Catalog,
    checkout::{CustomerDetails, checkout},
    pricing::TicketPricing,
    session::SessionStore,
    utils::StorefrontArgs,
};

/// Storefront Demo
#[expect(clippy::print_stdout, reason = "Example code")]
pub fn main() -> Result<()> {
    let args = StorefrontArgs::parse();

    let catalog = Catalog::from_yaml_file(&args.catalog)?;
    let pricing = TicketPricing::standard();

    let mut sessions = SessionStore::new();
    let session = Uuid::now_v7();

    let cart = sessions.cart_mut(session);

    for movie in catalog
        .movies()
        .iter()
        .take(args.n.unwrap_or(catalog.len()))
    {
        catalog.add_to_cart(cart, movie.id)?;
    }

    println!("session {session}: {} ticket(s) in the cart\n", cart.len());

    let customer = CustomerDetails::new("Ada", "Lovelace", "ada@example.com");
    let receipt = checkout(cart, &pricing, customer)?;

    let stdout = io::stdout();
    let handle = stdout.lock();

    receipt.write_to(handle)?;

    sessions.end(session)?;

    Ok(())
}
