//! Order Service - business logic for order operations
//!
//! Handlers decode HTTP input and delegate here; every store access goes
//! through the injected [`OrderStore`].

use std::sync::Arc;

use super::error::OrderError;
use super::models::{NewOrder, NewOrderLine, Order, OrderStatus};
use super::store::OrderStore;
use super::validation::parse_order_number;

/// Order placement input, after JSON decoding
#[derive(Debug, Clone, PartialEq)]
pub struct PlaceOrder {
    pub first_name: String,
    pub last_name: String,
    pub email_address: String,
    pub products: Vec<ProductLine>,
}

/// One submitted product line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProductLine {
    pub product_id: i64,
    pub quantity: i64,
}

/// One item of a batch status change. Either field is `None` when the
/// submitted value was not an integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusChange {
    pub id: Option<i64>,
    pub status: Option<i64>,
}

impl StatusChange {
    pub fn new(id: i64, status: i64) -> Self {
        Self {
            id: Some(id),
            status: Some(status),
        }
    }
}

/// Per-item result of a batch status change
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusChangeOutcome {
    Changed(OrderStatus),
    NotFound,
    InvalidStatus,
    Failed(String),
}

impl StatusChangeOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, StatusChangeOutcome::Changed(_))
    }
}

fn to_order_line(line: &ProductLine) -> Result<NewOrderLine, OrderError> {
    let quantity = i32::try_from(line.quantity)
        .ok()
        .filter(|q| *q > 0)
        .ok_or_else(|| {
            OrderError::InvalidRequest(format!(
                "quantity for product {} must be a positive integer, got {}",
                line.product_id, line.quantity
            ))
        })?;

    Ok(NewOrderLine {
        product_id: line.product_id,
        quantity,
    })
}

/// Order Service - handles all order-related business logic
#[derive(Clone)]
pub struct OrderService {
    store: Arc<dyn OrderStore>,
}

impl OrderService {
    pub fn new(store: Arc<dyn OrderStore>) -> Self {
        Self { store }
    }

    /// Place a new PENDING order with its line items.
    ///
    /// The order and all lines are stored together or not at all.
    pub async fn create_order(&self, req: PlaceOrder) -> Result<Order, OrderError> {
        let lines = req
            .products
            .iter()
            .map(to_order_line)
            .collect::<Result<Vec<_>, _>>()?;

        let new_order = NewOrder::pending(req.first_name, req.last_name, req.email_address);
        let order = self.store.insert_order(new_order, &lines).await?;

        tracing::info!(order_id = order.id, lines = lines.len(), "Order placed");
        Ok(order)
    }

    /// Apply a batch of status changes, one outcome per input item, in order.
    ///
    /// A failing item never stops the rest of the batch.
    pub async fn change_statuses(&self, changes: &[StatusChange]) -> Vec<StatusChangeOutcome> {
        let mut outcomes = Vec::with_capacity(changes.len());
        for change in changes {
            outcomes.push(self.change_status(*change).await);
        }
        outcomes
    }

    async fn change_status(&self, change: StatusChange) -> StatusChangeOutcome {
        let Some(status) = change.status.and_then(OrderStatus::from_id) else {
            tracing::warn!(order_id = ?change.id, status = ?change.status, "Rejected status value");
            return StatusChangeOutcome::InvalidStatus;
        };
        let Some(id) = change.id else {
            return StatusChangeOutcome::NotFound;
        };

        match self.store.update_status(id, status).await {
            Ok(true) => {
                tracing::info!(order_id = id, %status, "Order status changed");
                StatusChangeOutcome::Changed(status)
            }
            Ok(false) => StatusChangeOutcome::NotFound,
            Err(e) => {
                tracing::error!(order_id = id, error = %e, "Status change failed");
                StatusChangeOutcome::Failed(e.to_string())
            }
        }
    }

    /// Delete an order and all of its line items. Returns the deleted id.
    pub async fn delete_order(&self, order_number: &str) -> Result<i64, OrderError> {
        let id = self.resolve(order_number)?;

        if !self.store.delete_order(id).await? {
            return Err(OrderError::NotFound(order_number.to_string()));
        }

        tracing::info!(order_id = id, "Order deleted");
        Ok(id)
    }

    /// Create a fresh PENDING copy of an existing order and its lines.
    /// The source order is left untouched.
    pub async fn recreate_order(&self, order_number: &str) -> Result<Order, OrderError> {
        let source = self.find(order_number).await?;
        let details = self.store.find_details(source.id).await?;

        let lines: Vec<NewOrderLine> = details
            .iter()
            .map(|d| NewOrderLine {
                product_id: d.product_id,
                quantity: d.quantity,
            })
            .collect();

        let new_order =
            NewOrder::pending(source.first_name, source.last_name, source.email_address);
        let order = self.store.insert_order(new_order, &lines).await?;

        tracing::info!(
            source_order_id = source.id,
            order_id = order.id,
            lines = lines.len(),
            "Order recreated"
        );
        Ok(order)
    }

    /// Quantities of an order's line items, in insertion order
    pub async fn order_quantities(&self, order_number: &str) -> Result<Vec<i32>, OrderError> {
        let order = self.find(order_number).await?;
        let details = self.store.find_details(order.id).await?;
        Ok(details.iter().map(|d| d.quantity).collect())
    }

    /// Validate the order number, then fetch the order
    async fn find(&self, order_number: &str) -> Result<Order, OrderError> {
        let id = self.resolve(order_number)?;
        self.store
            .find_order(id)
            .await?
            .ok_or_else(|| OrderError::NotFound(order_number.to_string()))
    }

    fn resolve(&self, order_number: &str) -> Result<i64, OrderError> {
        match parse_order_number(order_number) {
            Ok(Some(id)) => Ok(id),
            Ok(None) => Err(OrderError::NotFound(order_number.to_string())),
            Err(e) => {
                tracing::warn!(order_number, "Rejected order number");
                Err(e)
            }
        }
    }
}
