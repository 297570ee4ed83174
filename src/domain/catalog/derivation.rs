//! Derivation of the visible product list.

use super::{CategoryFilter, Product, SortMode};

/// Computes the visible list from the full product list.
///
/// Products outside `category` are dropped, keeping relative order. The
/// remainder is then stable-sorted according to `sort`; ties keep their
/// server order and `SortMode::None` leaves the order untouched.
pub fn derive_filtered(
    products: &[Product],
    category: &CategoryFilter,
    sort: SortMode,
) -> Vec<Product> {
    let mut visible: Vec<Product> = products
        .iter()
        .filter(|product| category.matches(&product.category))
        .cloned()
        .collect();

    match sort {
        SortMode::None => {}
        SortMode::PriceAsc => visible.sort_by(|a, b| a.price.total_cmp(&b.price)),
        SortMode::PriceDesc => visible.sort_by(|a, b| b.price.total_cmp(&a.price)),
        SortMode::RatingAsc => visible.sort_by(|a, b| a.rating.rate.total_cmp(&b.rating.rate)),
        SortMode::RatingDesc => visible.sort_by(|a, b| b.rating.rate.total_cmp(&a.rating.rate)),
    }

    visible
}
