//! PostgreSQL order store
//!
//! Compound writes (order + lines, cascade delete) run in one transaction.

use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};

use super::error::StoreError;
use super::models::{NewOrder, NewOrderLine, Order, OrderDetail, OrderStatus};
use super::store::OrderStore;

pub struct PgOrderStore {
    pool: PgPool,
}

impl PgOrderStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn row_to_order(row: &PgRow) -> Result<Order, StoreError> {
        let status_id: i16 = row.try_get("status")?;
        let status = OrderStatus::from_id(status_id as i64).ok_or_else(|| {
            StoreError::Integrity(format!("unknown status {} in orders_tb", status_id))
        })?;

        Ok(Order {
            id: row.try_get("id")?,
            first_name: row.try_get("first_name")?,
            last_name: row.try_get("last_name")?,
            email_address: row.try_get("email_address")?,
            status,
            created_at: row.try_get("created_at")?,
        })
    }

    fn row_to_detail(row: &PgRow) -> Result<OrderDetail, StoreError> {
        Ok(OrderDetail {
            id: row.try_get("id")?,
            order_id: row.try_get("order_id")?,
            product_id: row.try_get("product_id")?,
            quantity: row.try_get("quantity")?,
        })
    }
}

#[async_trait]
impl OrderStore for PgOrderStore {
    async fn find_order(&self, id: i64) -> Result<Option<Order>, StoreError> {
        let row = sqlx::query(
            r#"SELECT id, first_name, last_name, email_address, status, created_at
               FROM orders_tb WHERE id = $1"#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(Self::row_to_order).transpose()
    }

    async fn find_details(&self, order_id: i64) -> Result<Vec<OrderDetail>, StoreError> {
        let rows = sqlx::query(
            r#"SELECT id, order_id, product_id, quantity
               FROM order_details_tb WHERE order_id = $1
               ORDER BY id"#,
        )
        .bind(order_id)
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(Self::row_to_detail).collect()
    }

    async fn insert_order(
        &self,
        order: NewOrder,
        lines: &[NewOrderLine],
    ) -> Result<Order, StoreError> {
        let mut tx = self.pool.begin().await?;

        let id = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO orders_tb (first_name, last_name, email_address, status, created_at)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id
            "#,
        )
        .bind(&order.first_name)
        .bind(&order.last_name)
        .bind(&order.email_address)
        .bind(order.status.id())
        .bind(order.created_at)
        .fetch_one(&mut *tx)
        .await?;

        for line in lines {
            sqlx::query(
                r#"INSERT INTO order_details_tb (order_id, product_id, quantity)
                   VALUES ($1, $2, $3)"#,
            )
            .bind(id)
            .bind(line.product_id)
            .bind(line.quantity)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;

        Ok(Order {
            id,
            first_name: order.first_name,
            last_name: order.last_name,
            email_address: order.email_address,
            status: order.status,
            created_at: order.created_at,
        })
    }

    async fn update_status(&self, id: i64, status: OrderStatus) -> Result<bool, StoreError> {
        let result = sqlx::query("UPDATE orders_tb SET status = $1 WHERE id = $2")
            .bind(status.id())
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete_order(&self, id: i64) -> Result<bool, StoreError> {
        let mut tx = self.pool.begin().await?;

        // Lock the parent so no line can be attached between the two deletes
        let exists =
            sqlx::query_scalar::<_, i64>("SELECT id FROM orders_tb WHERE id = $1 FOR UPDATE")
                .bind(id)
                .fetch_optional(&mut *tx)
                .await?;
        if exists.is_none() {
            return Ok(false);
        }

        sqlx::query("DELETE FROM order_details_tb WHERE order_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;
        sqlx::query("DELETE FROM orders_tb WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(true)
    }
}
