//! Livestock listing repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;

use delamere_core::error::{AppError, ErrorKind};
use delamere_core::result::AppResult;
use delamere_entity::listing::{CreateListing, Listing};

use crate::store::ListingStore;

/// Prices are read as text so they never pass through a float.
const LISTING_COLUMNS: &str = "id, title, description, price::TEXT AS price, breed, \
                               health_status, county, image_url, seller_id, created_at";

/// Repository for livestock listings.
#[derive(Debug, Clone)]
pub struct ListingRepository {
    pool: PgPool,
}

impl ListingRepository {
    /// Create a new listing repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ListingStore for ListingRepository {
    async fn find_by_id(&self, id: i64) -> AppResult<Option<Listing>> {
        sqlx::query_as::<_, Listing>(&format!(
            "SELECT {LISTING_COLUMNS} FROM livestock WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find listing", e))
    }

    async fn find_all(&self) -> AppResult<Vec<Listing>> {
        sqlx::query_as::<_, Listing>(&format!(
            "SELECT {LISTING_COLUMNS} FROM livestock ORDER BY created_at DESC, id DESC"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list livestock", e))
    }

    async fn find_by_seller(&self, seller_id: i64) -> AppResult<Vec<Listing>> {
        sqlx::query_as::<_, Listing>(&format!(
            "SELECT {LISTING_COLUMNS} FROM livestock WHERE seller_id = $1 \
             ORDER BY created_at DESC, id DESC"
        ))
        .bind(seller_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list seller livestock", e)
        })
    }

    async fn create(&self, data: &CreateListing) -> AppResult<Listing> {
        sqlx::query_as::<_, Listing>(&format!(
            "INSERT INTO livestock \
             (title, description, price, breed, health_status, county, image_url, seller_id) \
             VALUES ($1, $2, $3::TEXT::NUMERIC, $4, $5, $6, $7, $8) \
             RETURNING {LISTING_COLUMNS}"
        ))
        .bind(&data.title)
        .bind(&data.description)
        .bind(&data.price)
        .bind(&data.breed)
        .bind(&data.health_status)
        .bind(&data.county)
        .bind(&data.image_url)
        .bind(data.seller_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err)
                if db_err.constraint() == Some("livestock_seller_id_fkey") =>
            {
                AppError::not_found(format!("Seller {} not found", data.seller_id))
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to create listing", e),
        })
    }

    async fn delete(&self, id: i64) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM livestock WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete listing", e)
            })?;
        Ok(result.rows_affected() > 0)
    }
}
