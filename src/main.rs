//! Storefront - command-line view of the store catalog.
//!
//! # Usage
//!
//! ```bash
//! # Every product, in server order
//! storefront
//!
//! # One category, cheapest first
//! storefront electronics priceAsc
//! ```
//!
//! Configuration comes from `STOREFRONT__*` environment variables (see
//! `storefront_state::config`). When `STOREFRONT__LOGIN__USERNAME` and
//! `STOREFRONT__LOGIN__PASSWORD` are set, the session logs in first.

use storefront_state::application::Storefront;
use storefront_state::bootstrap::{build_storefront, init_tracing};
use storefront_state::config::AppConfig;
use storefront_state::domain::catalog::{CategoryFilter, SortMode};

#[tokio::main]
async fn main() {
    let result: Result<(), Box<dyn std::error::Error>> = run().await;

    if let Err(e) = result {
        eprintln!("storefront: {e}");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    init_tracing(&config.logging)?;

    let mut args = std::env::args().skip(1);
    let category = args.next().map(CategoryFilter::from);
    let sort = args.next().map(|s| s.parse::<SortMode>()).transpose()?;

    let storefront = build_storefront(&config)?;

    if let Some(credentials) = config.login.credentials() {
        let session = storefront.session().login(&credentials?).await;
        match session.error() {
            Some(message) => eprintln!("Login: {message}"),
            None => println!("Logged in."),
        }
    }

    storefront.catalog().load_catalog().await;
    if let Some(category) = category {
        storefront.catalog().set_category_filter(category);
    }
    if let Some(sort) = sort {
        storefront.catalog().set_sort_mode(sort);
    }

    print_catalog(&storefront);
    Ok(())
}

fn print_catalog(storefront: &Storefront) {
    let catalog = storefront.catalog().snapshot();

    if let Some(message) = catalog.error() {
        eprintln!("{message}");
    }

    let categories: Vec<&str> = catalog.categories().iter().map(CategoryFilter::as_str).collect();
    println!("Categories: {}", categories.join(", "));
    println!(
        "Showing {} of {} products ({}, sorted by {})",
        catalog.filtered_products().len(),
        catalog.products().len(),
        catalog.selected_category(),
        catalog.sort_mode().as_str(),
    );

    for product in catalog.filtered_products() {
        let rating = storefront.ratings().display_rating(product);
        println!(
            "{:>4}  {:<50.50}  ${:>8.2}  {:.1} ({})",
            product.id.value(),
            product.title,
            product.price,
            rating.value,
            rating.label
        );
    }
}
