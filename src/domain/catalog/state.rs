//! Catalog state and its reducers.

use super::{derive_filtered, CategoryFilter, Product, SortKey, SortMode};
use crate::domain::foundation::{DetailRequestId, ProductId};

/// The detail request whose response is currently awaited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PendingDetail {
    tag: DetailRequestId,
    product_id: ProductId,
}

/// Product list, filter/sort selection, and detail-view state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogState {
    products: Vec<Product>,
    categories: Vec<CategoryFilter>,
    filtered_products: Vec<Product>,
    selected_category: CategoryFilter,
    sort_mode: SortMode,
    is_loading: bool,
    error: Option<String>,
    selected_product: Option<Product>,
    is_detail_loading: bool,
    detail_error: Option<String>,
    pending_detail: Option<PendingDetail>,
}

impl CatalogState {
    pub fn new() -> Self {
        Self::default()
    }

    // --- Queries ---

    /// All products in server order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// The derived list: filtered by category, then sorted.
    pub fn filtered_products(&self) -> &[Product] {
        &self.filtered_products
    }

    /// Category choices, `All` first once categories have loaded.
    pub fn categories(&self) -> &[CategoryFilter] {
        &self.categories
    }

    pub fn selected_category(&self) -> &CategoryFilter {
        &self.selected_category
    }

    pub fn sort_mode(&self) -> SortMode {
        self.sort_mode
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    /// List-level error (products, or categories when no product error).
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn selected_product(&self) -> Option<&Product> {
        self.selected_product.as_ref()
    }

    pub fn is_detail_loading(&self) -> bool {
        self.is_detail_loading
    }

    pub fn detail_error(&self) -> Option<&str> {
        self.detail_error.as_deref()
    }

    /// Product id of the detail request still awaiting a response.
    pub fn pending_detail_product(&self) -> Option<ProductId> {
        self.pending_detail.map(|pending| pending.product_id)
    }

    // --- Filter / sort ---

    pub fn set_category_filter(&mut self, category: CategoryFilter) {
        self.selected_category = category;
        self.recompute();
    }

    pub fn set_sort_mode(&mut self, mode: SortMode) {
        self.sort_mode = mode;
        self.recompute();
    }

    /// Applies a press of the `key` sort button and returns the new mode.
    pub fn cycle_sort(&mut self, key: SortKey) -> SortMode {
        self.set_sort_mode(self.sort_mode.next_for(key));
        self.sort_mode
    }

    fn recompute(&mut self) {
        self.filtered_products =
            derive_filtered(&self.products, &self.selected_category, self.sort_mode);
    }

    // --- Product list lifecycle ---

    pub fn begin_products_fetch(&mut self) {
        self.is_loading = true;
        self.error = None;
    }

    /// Replaces the product list wholesale.
    pub fn products_fetched(&mut self, products: Vec<Product>) {
        self.is_loading = false;
        self.products = products;
        self.recompute();
    }

    /// Keeps the stale product list and surfaces `message`.
    pub fn products_fetch_failed(&mut self, message: impl Into<String>) {
        self.is_loading = false;
        self.error = Some(message.into());
    }

    // --- Categories lifecycle ---

    pub fn categories_fetched(&mut self, categories: Vec<String>) {
        self.categories = std::iter::once(CategoryFilter::All)
            .chain(categories.into_iter().map(CategoryFilter::Only))
            .collect();
    }

    /// Surfaces `message` only when no product error is showing.
    ///
    /// Returns whether the message became the list-level error.
    pub fn categories_fetch_failed(&mut self, message: impl Into<String>) -> bool {
        if self.error.is_some() {
            return false;
        }
        self.error = Some(message.into());
        true
    }

    // --- Detail lifecycle ---

    /// Starts a detail request, superseding any request still in flight.
    pub fn begin_detail_fetch(&mut self, product_id: ProductId) -> DetailRequestId {
        let tag = DetailRequestId::new();
        self.is_detail_loading = true;
        self.selected_product = None;
        self.detail_error = None;
        self.pending_detail = Some(PendingDetail { tag, product_id });
        tag
    }

    fn take_pending(&mut self, tag: DetailRequestId) -> bool {
        match self.pending_detail {
            Some(pending) if pending.tag == tag => {
                self.pending_detail = None;
                self.is_detail_loading = false;
                true
            }
            _ => false,
        }
    }

    /// Applies a detail response. Returns false if `tag` was superseded.
    pub fn detail_fetched(&mut self, tag: DetailRequestId, product: Product) -> bool {
        if !self.take_pending(tag) {
            return false;
        }
        self.selected_product = Some(product);
        true
    }

    /// Applies a detail failure. Returns false if `tag` was superseded.
    pub fn detail_fetch_failed(&mut self, tag: DetailRequestId, message: impl Into<String>) -> bool {
        if !self.take_pending(tag) {
            return false;
        }
        self.selected_product = None;
        self.detail_error = Some(message.into());
        true
    }

    /// Leaves the detail view; any in-flight detail response is dropped.
    pub fn clear_selected_product(&mut self) {
        self.selected_product = None;
        self.detail_error = None;
        self.pending_detail = None;
        self.is_detail_loading = false;
    }

    /// Clears both the list-level and the detail-level error.
    pub fn clear_error(&mut self) {
        self.error = None;
        self.detail_error = None;
    }
}
