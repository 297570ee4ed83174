//! User ratings domain module.
//!
//! Ratings the user assigns to products locally (1 to 5 stars). They are
//! independent of the catalog and of the store API's aggregate rating, and
//! override the latter for display.

mod user_rating;
mod user_ratings;

pub use user_rating::UserRating;
pub use user_ratings::{DisplayRating, UserRatings, YOUR_RATING_LABEL};
