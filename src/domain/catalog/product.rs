//! Product as served by the store API.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::ProductId;

/// Aggregate review score of a product.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ProductRating {
    /// Average score, 0 to 5.
    pub rate: f64,
    /// Number of reviews behind the average.
    pub count: u32,
}

/// A catalog entry. Immutable once fetched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub title: String,
    pub price: f64,
    #[serde(default)]
    pub description: String,
    pub category: String,
    /// Image URL.
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub rating: ProductRating,
}
