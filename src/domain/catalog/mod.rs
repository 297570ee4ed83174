//! Catalog domain module.
//!
//! The product list as fetched from the store API, the category list, the
//! active category filter and sort mode, and the single product currently
//! shown in the detail view.
//!
//! `filtered_products` is a derived view: it is recomputed by
//! [`derive_filtered`] whenever the products, the category filter, or the
//! sort mode change, and cannot be written any other way.

mod category;
mod derivation;
mod messages;
mod product;
mod sort_mode;
mod state;

pub use category::CategoryFilter;
pub use derivation::derive_filtered;
pub use messages::{
    product_fetch_failed_message, CATEGORIES_FETCH_FAILED_MESSAGE, PRODUCTS_FETCH_FAILED_MESSAGE,
    PRODUCT_NOT_FOUND_MESSAGE,
};
pub use product::{Product, ProductRating};
pub use sort_mode::{SortKey, SortMode};
pub use state::CatalogState;
