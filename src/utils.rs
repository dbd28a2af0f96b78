//! Utils

use clap::Parser;

/// Arguments for the storefront demo
#[derive(Debug, Parser)]
pub struct StorefrontArgs {
    /// Path to the movie catalog fixture file
    #[clap(short, long, default_value = "fixtures/movies.yml")]
    pub catalog: String,

    /// Number of listings to add to the cart (defaults to the whole catalog)
    #[clap(short, long)]
    pub n: Option<usize>,
}
