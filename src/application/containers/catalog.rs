//! CatalogContainer - owner of the product catalog state.

use std::sync::{Arc, RwLock};

use super::{read, write};
use crate::domain::catalog::{
    product_fetch_failed_message, CatalogState, CategoryFilter, SortKey, SortMode,
    CATEGORIES_FETCH_FAILED_MESSAGE, PRODUCTS_FETCH_FAILED_MESSAGE, PRODUCT_NOT_FOUND_MESSAGE,
};
use crate::domain::foundation::ProductId;
use crate::ports::StoreGateway;

/// Holds the product list, categories, filter/sort selection, and the
/// product detail view.
pub struct CatalogContainer {
    state: RwLock<CatalogState>,
    gateway: Arc<dyn StoreGateway>,
}

impl CatalogContainer {
    pub fn new(gateway: Arc<dyn StoreGateway>) -> Self {
        Self {
            state: RwLock::new(CatalogState::new()),
            gateway,
        }
    }

    /// Returns a copy of the current state.
    pub fn snapshot(&self) -> CatalogState {
        read(&self.state).clone()
    }

    /// Fetches the full product list, replacing the current one.
    ///
    /// On failure the previous list is kept and `error` is set.
    pub async fn fetch_all_products(&self) {
        write(&self.state).begin_products_fetch();

        let result = self.gateway.list_products().await;

        let mut state = write(&self.state);
        match result {
            Ok(products) => {
                tracing::debug!(count = products.len(), "Products fetched");
                state.products_fetched(products);
            }
            Err(err) => {
                tracing::warn!(status = ?err.status_code, error = %err, "Failed to fetch products");
                state.products_fetch_failed(err.message_or(PRODUCTS_FETCH_FAILED_MESSAGE));
            }
        }
    }

    /// Fetches the category names; the list is prefixed with "all".
    ///
    /// A failure only surfaces when no product error is already showing.
    pub async fn fetch_categories(&self) {
        let result = self.gateway.list_categories().await;

        let mut state = write(&self.state);
        match result {
            Ok(categories) => {
                tracing::debug!(count = categories.len(), "Categories fetched");
                state.categories_fetched(categories);
            }
            Err(err) => {
                tracing::warn!(status = ?err.status_code, error = %err, "Failed to fetch categories");
                if !state.categories_fetch_failed(err.message_or(CATEGORIES_FETCH_FAILED_MESSAGE)) {
                    tracing::debug!("Product error already showing; category error not surfaced");
                }
            }
        }
    }

    /// Fetches products and categories concurrently.
    pub async fn load_catalog(&self) {
        futures::join!(self.fetch_all_products(), self.fetch_categories());
    }

    /// Fetches one product into the detail view.
    ///
    /// Only the most recent call may write its result; responses to earlier
    /// calls, or to calls made before `clear_selected_product`, are dropped.
    pub async fn fetch_product_detail(&self, product_id: ProductId) {
        let tag = write(&self.state).begin_detail_fetch(product_id);

        let result = self.gateway.get_product(product_id).await;

        let mut state = write(&self.state);
        let applied = match result {
            Ok(product) => state.detail_fetched(tag, product),
            Err(err) => {
                tracing::warn!(%product_id, status = ?err.status_code, error = %err, "Failed to fetch product");
                let message = if err.is_not_found() {
                    PRODUCT_NOT_FOUND_MESSAGE.to_string()
                } else {
                    err.message_or(product_fetch_failed_message(product_id))
                };
                state.detail_fetch_failed(tag, message)
            }
        };
        if !applied {
            tracing::debug!(%product_id, "Discarding superseded product detail response");
        }
    }

    pub fn clear_selected_product(&self) {
        write(&self.state).clear_selected_product();
    }

    pub fn set_category_filter(&self, category: impl Into<CategoryFilter>) {
        write(&self.state).set_category_filter(category.into());
    }

    pub fn set_sort_mode(&self, mode: SortMode) {
        write(&self.state).set_sort_mode(mode);
    }

    /// Sort-button press: ascending, then descending, then server order.
    pub fn cycle_sort(&self, key: SortKey) -> SortMode {
        let mode = write(&self.state).cycle_sort(key);
        tracing::debug!(sort = %mode, "Sort mode changed");
        mode
    }

    pub fn clear_error(&self) {
        write(&self.state).clear_error();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{GatewayCall, MockStoreGateway};
    use crate::domain::catalog::{Product, ProductRating};
    use crate::ports::GatewayError;
    use std::time::Duration;

    fn product(id: u64, price: f64, category: &str, rate: f64) -> Product {
        Product {
            id: ProductId::new(id),
            title: format!("Product {id}"),
            price,
            description: String::new(),
            category: category.to_string(),
            image: String::new(),
            rating: ProductRating { rate, count: 10 },
        }
    }

    fn sample() -> Vec<Product> {
        vec![
            product(1, 109.95, "men's clothing", 3.9),
            product(2, 22.3, "men's clothing", 4.1),
            product(5, 695.0, "jewelery", 4.6),
            product(9, 64.0, "electronics", 3.3),
        ]
    }

    fn ids(products: &[Product]) -> Vec<u64> {
        products.iter().map(|p| p.id.value()).collect()
    }

    fn container(gateway: MockStoreGateway) -> CatalogContainer {
        CatalogContainer::new(Arc::new(gateway))
    }

    #[tokio::test]
    async fn fetch_all_products_fills_list_and_view() {
        let catalog = container(MockStoreGateway::new().with_products(sample()));

        catalog.fetch_all_products().await;

        let state = catalog.snapshot();
        assert_eq!(ids(state.products()), vec![1, 2, 5, 9]);
        assert_eq!(ids(state.filtered_products()), vec![1, 2, 5, 9]);
        assert!(!state.is_loading());
        assert!(state.error().is_none());
    }

    #[tokio::test]
    async fn failed_refetch_keeps_previous_products() {
        let gateway = MockStoreGateway::new().with_products(sample());
        let catalog = container(gateway.clone());
        catalog.fetch_all_products().await;

        gateway.set_products(Err(GatewayError::transport("connection reset")));
        catalog.fetch_all_products().await;

        let state = catalog.snapshot();
        assert_eq!(state.products().len(), 4);
        assert_eq!(state.error(), Some(PRODUCTS_FETCH_FAILED_MESSAGE));
    }

    #[tokio::test]
    async fn products_error_prefers_server_message() {
        let gateway = MockStoreGateway::new()
            .with_products_error(GatewayError::status(500, Some("Maintenance".to_string())));
        let catalog = container(gateway);

        catalog.fetch_all_products().await;

        assert_eq!(catalog.snapshot().error(), Some("Maintenance"));
    }

    #[tokio::test]
    async fn categories_are_prefixed_with_all() {
        let catalog = container(MockStoreGateway::new().with_categories(["electronics", "jewelery"]));

        catalog.fetch_categories().await;

        let names: Vec<String> = catalog
            .snapshot()
            .categories()
            .iter()
            .map(|c| c.as_str().to_string())
            .collect();
        assert_eq!(names, vec!["all", "electronics", "jewelery"]);
    }

    #[tokio::test]
    async fn category_error_does_not_mask_product_error() {
        let gateway = MockStoreGateway::new()
            .with_products_error(GatewayError::status(500, Some("Products down".to_string())))
            .with_categories_error(GatewayError::status(500, Some("Categories down".to_string())));
        let catalog = container(gateway);

        catalog.fetch_all_products().await;
        catalog.fetch_categories().await;

        assert_eq!(catalog.snapshot().error(), Some("Products down"));
    }

    #[tokio::test]
    async fn category_error_shows_when_products_succeeded() {
        let gateway = MockStoreGateway::new()
            .with_products(sample())
            .with_categories_error(GatewayError::transport("timeout"));
        let catalog = container(gateway);

        catalog.load_catalog().await;

        let state = catalog.snapshot();
        assert_eq!(state.products().len(), 4);
        assert_eq!(state.error(), Some(CATEGORIES_FETCH_FAILED_MESSAGE));
    }

    #[tokio::test]
    async fn load_catalog_calls_both_endpoints() {
        let gateway = MockStoreGateway::new().with_products(sample()).with_categories(["jewelery"]);
        let catalog = container(gateway.clone());

        catalog.load_catalog().await;

        let calls = gateway.calls();
        assert!(calls.contains(&GatewayCall::ListProducts));
        assert!(calls.contains(&GatewayCall::ListCategories));
        assert_eq!(catalog.snapshot().categories().len(), 2);
    }

    #[tokio::test]
    async fn filter_and_sort_recompute_view() {
        let catalog = container(MockStoreGateway::new().with_products(sample()));
        catalog.fetch_all_products().await;

        catalog.set_category_filter("men's clothing");
        catalog.set_sort_mode(SortMode::PriceAsc);
        assert_eq!(ids(catalog.snapshot().filtered_products()), vec![2, 1]);

        catalog.set_category_filter(CategoryFilter::All);
        catalog.set_sort_mode(SortMode::RatingDesc);
        assert_eq!(ids(catalog.snapshot().filtered_products()), vec![5, 2, 1, 9]);
    }

    #[tokio::test]
    async fn sort_buttons_cycle_and_switch_keys() {
        let catalog = container(MockStoreGateway::new().with_products(sample()));
        catalog.fetch_all_products().await;

        assert_eq!(catalog.cycle_sort(SortKey::Rating), SortMode::RatingAsc);
        assert_eq!(ids(catalog.snapshot().filtered_products()), vec![9, 1, 2, 5]);

        assert_eq!(catalog.cycle_sort(SortKey::Price), SortMode::PriceAsc);
        assert_eq!(ids(catalog.snapshot().filtered_products()), vec![2, 9, 1, 5]);

        assert_eq!(catalog.cycle_sort(SortKey::Price), SortMode::PriceDesc);
        assert_eq!(catalog.cycle_sort(SortKey::Price), SortMode::None);
        assert_eq!(ids(catalog.snapshot().filtered_products()), vec![1, 2, 5, 9]);
    }

    #[tokio::test]
    async fn detail_fetch_selects_product() {
        let catalog = container(MockStoreGateway::new().with_products(sample()));

        catalog.fetch_product_detail(ProductId::new(5)).await;

        let state = catalog.snapshot();
        assert_eq!(state.selected_product().map(|p| p.id), Some(ProductId::new(5)));
        assert!(!state.is_detail_loading());
        assert!(state.detail_error().is_none());
    }

    #[tokio::test]
    async fn missing_product_reports_not_found() {
        let catalog = container(MockStoreGateway::new().with_products(sample()));

        catalog.fetch_product_detail(ProductId::new(999)).await;

        let state = catalog.snapshot();
        assert!(state.selected_product().is_none());
        assert_eq!(state.detail_error(), Some(PRODUCT_NOT_FOUND_MESSAGE));
    }

    #[tokio::test]
    async fn other_detail_failures_name_the_product() {
        let gateway = MockStoreGateway::new()
            .with_products(sample())
            .with_product_error(ProductId::new(2), GatewayError::transport("reset"));
        let catalog = container(gateway);

        catalog.fetch_product_detail(ProductId::new(2)).await;

        assert_eq!(
            catalog.snapshot().detail_error(),
            Some("Failed to fetch product with ID: 2.")
        );
    }

    #[tokio::test]
    async fn slow_earlier_detail_response_is_dropped() {
        let gateway = MockStoreGateway::new()
            .with_products(sample())
            .with_product_delay(ProductId::new(1), Duration::from_millis(60));
        let catalog = container(gateway);

        tokio::join!(catalog.fetch_product_detail(ProductId::new(1)), async {
            tokio::time::sleep(Duration::from_millis(10)).await;
            catalog.fetch_product_detail(ProductId::new(2)).await;
        });

        let state = catalog.snapshot();
        assert_eq!(state.selected_product().map(|p| p.id), Some(ProductId::new(2)));
        assert!(!state.is_detail_loading());
    }

    #[tokio::test]
    async fn clear_selected_product_drops_in_flight_response() {
        let gateway = MockStoreGateway::new()
            .with_products(sample())
            .with_product_delay(ProductId::new(5), Duration::from_millis(40));
        let catalog = container(gateway);

        tokio::join!(catalog.fetch_product_detail(ProductId::new(5)), async {
            tokio::time::sleep(Duration::from_millis(10)).await;
            catalog.clear_selected_product();
        });

        let state = catalog.snapshot();
        assert!(state.selected_product().is_none());
        assert!(!state.is_detail_loading());
    }

    #[tokio::test]
    async fn clear_error_resets_both_errors() {
        let gateway = MockStoreGateway::new().with_products_error(GatewayError::transport("down"));
        let catalog = container(gateway);
        catalog.fetch_all_products().await;
        catalog.fetch_product_detail(ProductId::new(1)).await;

        catalog.clear_error();

        let state = catalog.snapshot();
        assert!(state.error().is_none());
        assert!(state.detail_error().is_none());
    }
}
