//! RatingsContainer - owner of the user's local product ratings.

use std::sync::{Arc, RwLock};

use super::{read, write};
use crate::domain::catalog::Product;
use crate::domain::foundation::{ProductId, ValidationError};
use crate::domain::ratings::{DisplayRating, UserRating, UserRatings};
use crate::ports::KeyValueStore;

/// Holds user ratings and writes every change through to storage.
///
/// Storage failures are logged; the in-memory ratings stay authoritative
/// for the rest of the session.
pub struct RatingsContainer {
    ratings: RwLock<UserRatings>,
    storage: Arc<dyn KeyValueStore>,
    ratings_key: String,
}

impl RatingsContainer {
    /// Creates the container, restoring ratings persisted under `ratings_key`.
    pub fn new(storage: Arc<dyn KeyValueStore>, ratings_key: impl Into<String>) -> Self {
        let ratings_key = ratings_key.into();
        let ratings = Self::hydrate(storage.as_ref(), &ratings_key);
        tracing::debug!(count = ratings.len(), "User ratings loaded");

        Self {
            ratings: RwLock::new(ratings),
            storage,
            ratings_key,
        }
    }

    fn hydrate(storage: &dyn KeyValueStore, key: &str) -> UserRatings {
        let text = match storage.get(key) {
            Ok(Some(text)) => text,
            Ok(None) => return UserRatings::new(),
            Err(e) => {
                tracing::warn!(key, error = %e, "Could not read persisted user ratings");
                return UserRatings::new();
            }
        };
        UserRatings::from_json(&text).unwrap_or_else(|e| {
            tracing::warn!(key, error = %e, "Ignoring malformed persisted user ratings");
            UserRatings::new()
        })
    }

    /// Returns a copy of all ratings.
    pub fn snapshot(&self) -> UserRatings {
        read(&self.ratings).clone()
    }

    pub fn get(&self, product_id: ProductId) -> Option<UserRating> {
        read(&self.ratings).get(product_id)
    }

    /// The rating to show for `product`: the user's own, else the store's.
    pub fn display_rating(&self, product: &Product) -> DisplayRating {
        read(&self.ratings).display_rating(product)
    }

    /// Star-widget click. Choosing the current rating again clears it.
    ///
    /// Returns the rating now in effect.
    pub fn rate(
        &self,
        product_id: ProductId,
        stars: u8,
    ) -> Result<Option<UserRating>, ValidationError> {
        let mut ratings = write(&self.ratings);
        let rating = ratings.toggle(product_id, stars)?;
        self.persist(&ratings);
        tracing::debug!(%product_id, stars = rating.map(|r| r.value()), "User rating changed");
        Ok(rating)
    }

    /// Sets the rating outright; `0` removes it.
    pub fn set_rating(
        &self,
        product_id: ProductId,
        stars: u8,
    ) -> Result<Option<UserRating>, ValidationError> {
        let mut ratings = write(&self.ratings);
        let rating = ratings.set(product_id, stars)?;
        self.persist(&ratings);
        Ok(rating)
    }

    /// Forgets every rating, in memory and in storage.
    pub fn clear(&self) {
        let mut ratings = write(&self.ratings);
        ratings.clear();
        if let Err(e) = self.storage.remove(&self.ratings_key) {
            tracing::warn!(key = %self.ratings_key, error = %e, "Could not remove persisted user ratings");
        }
    }

    fn persist(&self, ratings: &UserRatings) {
        let text = match ratings.to_json() {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!(error = %e, "Could not serialize user ratings");
                return;
            }
        };
        if let Err(e) = self.storage.set(&self.ratings_key, &text) {
            tracing::warn!(key = %self.ratings_key, error = %e, "Could not persist user ratings");
        }
    }
}
