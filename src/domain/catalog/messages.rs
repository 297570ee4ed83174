//! User-facing failure messages for catalog requests.

use crate::domain::foundation::ProductId;

pub const PRODUCTS_FETCH_FAILED_MESSAGE: &str = "Failed to fetch products.";

pub const CATEGORIES_FETCH_FAILED_MESSAGE: &str = "Failed to fetch categories.";

/// Surfaced for a 404-class detail response, regardless of the payload.
pub const PRODUCT_NOT_FOUND_MESSAGE: &str = "Product not found.";

pub fn product_fetch_failed_message(id: ProductId) -> String {
    format!("Failed to fetch product with ID: {}.", id)
}
