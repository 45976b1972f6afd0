//! Order repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;

use delamere_core::error::{AppError, ErrorKind};
use delamere_core::result::AppResult;
use delamere_entity::order::{CreateOrder, Order};

use crate::store::OrderStore;

const ORDER_COLUMNS: &str = "id, buyer_id, livestock_id, payment_status, transaction_id, \
                             invoice_number, certificate_number, created_at";

/// Repository for orders.
#[derive(Debug, Clone)]
pub struct OrderRepository {
    pool: PgPool,
}

impl OrderRepository {
    /// Create a new order repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl OrderStore for OrderRepository {
    async fn find_all(&self) -> AppResult<Vec<Order>> {
        sqlx::query_as::<_, Order>(&format!(
            "SELECT {ORDER_COLUMNS} FROM orders ORDER BY created_at DESC, id DESC"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list orders", e))
    }

    async fn find_by_buyer(&self, buyer_id: i64) -> AppResult<Vec<Order>> {
        sqlx::query_as::<_, Order>(&format!(
            "SELECT {ORDER_COLUMNS} FROM orders WHERE buyer_id = $1 \
             ORDER BY created_at DESC, id DESC"
        ))
        .bind(buyer_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list buyer orders", e)
        })
    }

    async fn create(&self, data: &CreateOrder) -> AppResult<Order> {
        sqlx::query_as::<_, Order>(&format!(
            "INSERT INTO orders \
             (buyer_id, livestock_id, payment_status, transaction_id, invoice_number, \
              certificate_number) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING {ORDER_COLUMNS}"
        ))
        .bind(data.buyer_id)
        .bind(data.livestock_id)
        .bind(data.payment_status)
        .bind(&data.transaction_id)
        .bind(&data.invoice_number)
        .bind(&data.certificate_number)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err)
                if db_err.constraint() == Some("orders_buyer_id_fkey") =>
            {
                AppError::not_found(format!("Buyer {} not found", data.buyer_id))
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to create order", e),
        })
    }
}
