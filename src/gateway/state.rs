use std::sync::Arc;

use crate::catalog::CatalogClient;
use crate::order::OrderService;

/// Gateway shared state
#[derive(Clone)]
pub struct AppState {
    /// Order operations over the configured store
    pub orders: OrderService,
    /// Third-party product catalog
    pub catalog: Arc<CatalogClient>,
}

impl AppState {
    pub fn new(orders: OrderService, catalog: Arc<CatalogClient>) -> Self {
        Self { orders, catalog }
    }
}
