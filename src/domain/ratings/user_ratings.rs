//! The user's local ratings, keyed by product.

use std::collections::BTreeMap;

use super::UserRating;
use crate::domain::catalog::Product;
use crate::domain::foundation::{ProductId, ValidationError};

/// Label shown next to a rating the user assigned.
pub const YOUR_RATING_LABEL: &str = "Your rating";

/// The rating to show for a product, with its caption.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayRating {
    pub value: f64,
    pub label: String,
    pub is_user_rating: bool,
}

/// Product id to user-assigned rating. Absent means "no override".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserRatings {
    ratings: BTreeMap<ProductId, UserRating>,
}

impl UserRatings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, product_id: ProductId) -> Option<UserRating> {
        self.ratings.get(&product_id).copied()
    }

    pub fn len(&self) -> usize {
        self.ratings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ratings.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (ProductId, UserRating)> + '_ {
        self.ratings.iter().map(|(id, rating)| (*id, *rating))
    }

    /// Sets the rating for a product; `0` removes it.
    pub fn set(
        &mut self,
        product_id: ProductId,
        stars: u8,
    ) -> Result<Option<UserRating>, ValidationError> {
        if stars == 0 {
            self.ratings.remove(&product_id);
            return Ok(None);
        }
        let rating = UserRating::try_from_u8(stars)?;
        self.ratings.insert(product_id, rating);
        Ok(Some(rating))
    }

    /// Star-widget click: choosing the current rating again clears it.
    pub fn toggle(
        &mut self,
        product_id: ProductId,
        stars: u8,
    ) -> Result<Option<UserRating>, ValidationError> {
        if self.get(product_id).map(|r| r.value()) == Some(stars) {
            return self.set(product_id, 0);
        }
        self.set(product_id, stars)
    }

    pub fn remove(&mut self, product_id: ProductId) -> Option<UserRating> {
        self.ratings.remove(&product_id)
    }

    pub fn clear(&mut self) {
        self.ratings.clear();
    }

    /// The user's rating if present, otherwise the store's average.
    pub fn display_rating(&self, product: &Product) -> DisplayRating {
        match self.get(product.id) {
            Some(rating) => DisplayRating {
                value: f64::from(rating.value()),
                label: YOUR_RATING_LABEL.to_string(),
                is_user_rating: true,
            },
            None => DisplayRating {
                value: product.rating.rate,
                label: format!("{} reviews", product.rating.count),
                is_user_rating: false,
            },
        }
    }

    /// Text form: a JSON object of decimal id strings to star counts.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        let wire: BTreeMap<String, u8> = self
            .ratings
            .iter()
            .map(|(id, rating)| (id.to_string(), rating.value()))
            .collect();
        serde_json::to_string(&wire)
    }

    /// Parses the text form.
    ///
    /// Zero entries mean "no override" and are dropped. Entries with a bad
    /// id or an out-of-range value are skipped with a warning so one corrupt
    /// entry does not lose the rest.
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        let wire: BTreeMap<String, serde_json::Value> = serde_json::from_str(text)?;
        let mut ratings = BTreeMap::new();

        for (key, value) in wire {
            let Ok(product_id) = key.parse::<ProductId>() else {
                tracing::warn!(key = %key, "Skipping user rating with non-numeric product id");
                continue;
            };
            let stars = value.as_u64().unwrap_or(u64::MAX);
            if stars == 0 {
                continue;
            }
            match u8::try_from(stars).ok().map(UserRating::try_from_u8) {
                Some(Ok(rating)) => {
                    ratings.insert(product_id, rating);
                }
                _ => {
                    tracing::warn!(%product_id, value = %value, "Skipping out-of-range user rating");
                }
            }
        }

        Ok(Self { ratings })
    }
}
