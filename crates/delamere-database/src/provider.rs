//! Store provider selection.

use std::sync::Arc;

use tracing::info;

use delamere_core::config::{DatabaseConfig, StoreProvider};
use delamere_core::result::AppResult;

use crate::connection::DatabasePool;
use crate::memory::MemoryStore;
use crate::migration::run_migrations;
use crate::repositories::{ListingRepository, OrderRepository, UserRepository};
use crate::store::{ListingStore, OrderStore, UserStore};

/// The set of stores the service layer works against.
///
/// The backend is chosen once at startup from `database.provider`.
#[derive(Debug, Clone)]
pub struct Stores {
    /// User accounts.
    pub users: Arc<dyn UserStore>,
    /// Livestock listings.
    pub listings: Arc<dyn ListingStore>,
    /// Orders.
    pub orders: Arc<dyn OrderStore>,
    /// The PostgreSQL pool, when that backend is active.
    pool: Option<DatabasePool>,
}

impl Stores {
    /// Build stores from configuration, connecting and migrating if needed.
    pub async fn connect(config: &DatabaseConfig) -> AppResult<Self> {
        match config.provider {
            StoreProvider::Postgres => {
                info!("Initializing PostgreSQL store provider");
                let pool = DatabasePool::connect(config).await?;
                if config.auto_migrate {
                    run_migrations(pool.pool()).await?;
                }
                Ok(Self::postgres(pool))
            }
            StoreProvider::Memory => {
                info!("Initializing in-memory store provider");
                Ok(Self::memory(MemoryStore::new()))
            }
        }
    }

    /// Stores backed by PostgreSQL repositories.
    pub fn postgres(pool: DatabasePool) -> Self {
        let pg = pool.pool().clone();
        Self {
            users: Arc::new(UserRepository::new(pg.clone())),
            listings: Arc::new(ListingRepository::new(pg.clone())),
            orders: Arc::new(OrderRepository::new(pg)),
            pool: Some(pool),
        }
    }

    /// Stores backed by the given in-memory tables.
    pub fn memory(store: MemoryStore) -> Self {
        Self {
            users: Arc::new(store.users()),
            listings: Arc::new(store.listings()),
            orders: Arc::new(store.orders()),
            pool: None,
        }
    }

    /// Check backend connectivity. In-memory stores are always healthy.
    pub async fn health_check(&self) -> AppResult<bool> {
        match &self.pool {
            Some(pool) => pool.health_check().await,
            None => Ok(true),
        }
    }

    /// Release backend resources.
    pub async fn close(&self) {
        if let Some(pool) = &self.pool {
            pool.close().await;
        }
    }
}
