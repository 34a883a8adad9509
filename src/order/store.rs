//! Order store abstraction
//!
//! The service only talks to [`OrderStore`], so the same logic runs against
//! PostgreSQL in production and [`MemoryOrderStore`] in tests or when no
//! database is configured.

use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;

use super::error::StoreError;
use super::models::{NewOrder, NewOrderLine, Order, OrderDetail, OrderStatus};

/// Repository trait for orders and their line items
#[async_trait]
pub trait OrderStore: Send + Sync {
    /// Get a single order by id
    async fn find_order(&self, id: i64) -> Result<Option<Order>, StoreError>;

    /// Line items of an order, in insertion order
    async fn find_details(&self, order_id: i64) -> Result<Vec<OrderDetail>, StoreError>;

    /// Persist an order and its line items as one unit.
    ///
    /// Either the order and every line are stored, or nothing is.
    async fn insert_order(&self, order: NewOrder, lines: &[NewOrderLine])
    -> Result<Order, StoreError>;

    /// Set the status of an order. Returns false when the order is missing.
    async fn update_status(&self, id: i64, status: OrderStatus) -> Result<bool, StoreError>;

    /// Remove the line items of an order, then the order itself.
    /// Returns false when the order is missing.
    async fn delete_order(&self, id: i64) -> Result<bool, StoreError>;
}

#[derive(Debug)]
struct Tables {
    orders: BTreeMap<i64, Order>,
    details: BTreeMap<i64, OrderDetail>,
    next_order_id: i64,
    next_detail_id: i64,
}

/// In-process order store
#[derive(Debug)]
pub struct MemoryOrderStore {
    tables: Mutex<Tables>,
}

impl Default for MemoryOrderStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryOrderStore {
    pub fn new() -> Self {
        Self {
            tables: Mutex::new(Tables {
                orders: BTreeMap::new(),
                details: BTreeMap::new(),
                next_order_id: 1,
                next_detail_id: 1,
            }),
        }
    }

    // Poisoning is ignored: mutations only start after their checks pass.
    fn tables(&self) -> MutexGuard<'_, Tables> {
        self.tables.lock().unwrap_or_else(|e| e.into_inner())
    }

    pub fn order_count(&self) -> usize {
        self.tables().orders.len()
    }

    pub fn detail_count(&self) -> usize {
        self.tables().details.len()
    }
}

#[async_trait]
impl OrderStore for MemoryOrderStore {
    async fn find_order(&self, id: i64) -> Result<Option<Order>, StoreError> {
        Ok(self.tables().orders.get(&id).cloned())
    }

    async fn find_details(&self, order_id: i64) -> Result<Vec<OrderDetail>, StoreError> {
        Ok(self
            .tables()
            .details
            .values()
            .filter(|d| d.order_id == order_id)
            .cloned()
            .collect())
    }

    async fn insert_order(
        &self,
        order: NewOrder,
        lines: &[NewOrderLine],
    ) -> Result<Order, StoreError> {
        if let Some(bad) = lines.iter().find(|l| l.quantity <= 0) {
            return Err(StoreError::Integrity(format!(
                "quantity must be positive, got {} for product {}",
                bad.quantity, bad.product_id
            )));
        }

        let mut tables = self.tables();
        let id = tables.next_order_id;
        tables.next_order_id += 1;

        let stored = Order {
            id,
            first_name: order.first_name,
            last_name: order.last_name,
            email_address: order.email_address,
            status: order.status,
            created_at: order.created_at,
        };
        tables.orders.insert(id, stored.clone());

        for line in lines {
            let detail_id = tables.next_detail_id;
            tables.next_detail_id += 1;
            tables.details.insert(
                detail_id,
                OrderDetail {
                    id: detail_id,
                    order_id: id,
                    product_id: line.product_id,
                    quantity: line.quantity,
                },
            );
        }

        Ok(stored)
    }

    async fn update_status(&self, id: i64, status: OrderStatus) -> Result<bool, StoreError> {
        match self.tables().orders.get_mut(&id) {
            Some(order) => {
                order.status = status;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete_order(&self, id: i64) -> Result<bool, StoreError> {
        let mut tables = self.tables();
        if !tables.orders.contains_key(&id) {
            return Ok(false);
        }
        tables.details.retain(|_, d| d.order_id != id);
        tables.orders.remove(&id);
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(items: &[(i64, i32)]) -> Vec<NewOrderLine> {
        items
            .iter()
            .map(|&(product_id, quantity)| NewOrderLine {
                product_id,
                quantity,
            })
            .collect()
    }

    fn new_order() -> NewOrder {
        NewOrder::pending("Jan".into(), "Kowalski".into(), "jan@example.com".into())
    }

    #[tokio::test]
    async fn test_insert_assigns_increasing_ids() {
        let store = MemoryOrderStore::new();
        let a = store.insert_order(new_order(), &lines(&[(1, 2)])).await.unwrap();
        let b = store.insert_order(new_order(), &[]).await.unwrap();
        assert!(b.id > a.id);
        assert_eq!(store.order_count(), 2);
        assert_eq!(store.detail_count(), 1);
    }

    #[tokio::test]
    async fn test_details_keep_insertion_order() {
        let store = MemoryOrderStore::new();
        let order = store
            .insert_order(new_order(), &lines(&[(10, 3), (11, 1), (12, 7)]))
            .await
            .unwrap();

        let details = store.find_details(order.id).await.unwrap();
        let quantities: Vec<i32> = details.iter().map(|d| d.quantity).collect();
        assert_eq!(quantities, vec![3, 1, 7]);
        assert!(details.iter().all(|d| d.order_id == order.id));
    }

    #[tokio::test]
    async fn test_insert_rejects_non_positive_quantity_atomically() {
        let store = MemoryOrderStore::new();
        let result = store
            .insert_order(new_order(), &lines(&[(1, 2), (2, 0)]))
            .await;
        assert!(matches!(result, Err(StoreError::Integrity(_))));
        assert_eq!(store.order_count(), 0);
        assert_eq!(store.detail_count(), 0);
    }

    #[tokio::test]
    async fn test_delete_removes_details_and_order() {
        let store = MemoryOrderStore::new();
        let keep = store.insert_order(new_order(), &lines(&[(5, 5)])).await.unwrap();
        let gone = store
            .insert_order(new_order(), &lines(&[(1, 1), (2, 2)]))
            .await
            .unwrap();

        assert!(store.delete_order(gone.id).await.unwrap());
        assert!(store.find_order(gone.id).await.unwrap().is_none());
        assert!(store.find_details(gone.id).await.unwrap().is_empty());
        assert_eq!(store.find_details(keep.id).await.unwrap().len(), 1);

        assert!(!store.delete_order(gone.id).await.unwrap());
    }

    #[tokio::test]
    async fn test_update_status_missing_order() {
        let store = MemoryOrderStore::new();
        assert!(!store.update_status(404, OrderStatus::Completed).await.unwrap());
    }
}
