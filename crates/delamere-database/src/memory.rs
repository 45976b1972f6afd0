//! In-process store implementations backed by `dashmap`.
//!
//! Used when `database.provider = "memory"` and by the test suites. The
//! three stores share one set of tables so that deleting a user cascades to
//! that user's listings and orders, matching the PostgreSQL schema.

use std::sync::Arc;
use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use tracing::debug;

use delamere_core::error::AppError;
use delamere_core::result::AppResult;
use delamere_entity::listing::{CreateListing, Listing};
use delamere_entity::order::{CreateOrder, Order};
use delamere_entity::user::{CreateUser, User, UserRole};

use crate::store::{ListingStore, OrderStore, UserStore};

#[derive(Debug, Default)]
struct Tables {
    users: DashMap<i64, User>,
    /// Email to user id. The entry lock on this index is what makes
    /// registration unique under concurrency.
    emails: DashMap<String, i64>,
    listings: DashMap<i64, Listing>,
    orders: DashMap<i64, Order>,
    next_user_id: AtomicI64,
    next_listing_id: AtomicI64,
    next_order_id: AtomicI64,
}

impl Tables {
    fn next_id(counter: &AtomicI64) -> i64 {
        counter.fetch_add(1, Ordering::SeqCst) + 1
    }
}

/// Handle to a shared set of in-memory tables.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    tables: Arc<Tables>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// User store view over these tables.
    pub fn users(&self) -> MemoryUserStore {
        MemoryUserStore {
            tables: Arc::clone(&self.tables),
        }
    }

    /// Listing store view over these tables.
    pub fn listings(&self) -> MemoryListingStore {
        MemoryListingStore {
            tables: Arc::clone(&self.tables),
        }
    }

    /// Order store view over these tables.
    pub fn orders(&self) -> MemoryOrderStore {
        MemoryOrderStore {
            tables: Arc::clone(&self.tables),
        }
    }
}

/// Newest first, ties broken by id.
fn newest_first<T>(items: &mut [T], key: impl Fn(&T) -> (chrono::DateTime<Utc>, i64)) {
    items.sort_by(|a, b| key(b).cmp(&key(a)));
}

/// In-memory [`UserStore`].
#[derive(Debug, Clone)]
pub struct MemoryUserStore {
    tables: Arc<Tables>,
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn find_by_id(&self, id: i64) -> AppResult<Option<User>> {
        Ok(self.tables.users.get(&id).map(|u| u.value().clone()))
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let Some(id) = self.tables.emails.get(email).map(|id| *id) else {
            return Ok(None);
        };
        Ok(self.tables.users.get(&id).map(|u| u.value().clone()))
    }

    async fn find_all(&self, role: Option<UserRole>) -> AppResult<Vec<User>> {
        let mut users: Vec<User> = self
            .tables
            .users
            .iter()
            .filter(|u| role.is_none_or(|r| u.role == r))
            .map(|u| u.value().clone())
            .collect();
        newest_first(&mut users, |u| (u.created_at, u.id));
        Ok(users)
    }

    async fn count(&self) -> AppResult<i64> {
        Ok(self.tables.users.len() as i64)
    }

    async fn create(&self, data: &CreateUser) -> AppResult<User> {
        match self.tables.emails.entry(data.email.clone()) {
            Entry::Occupied(_) => Err(AppError::conflict("Email already registered")),
            Entry::Vacant(slot) => {
                let user = User {
                    id: Tables::next_id(&self.tables.next_user_id),
                    name: data.name.clone(),
                    phone_number: data.phone_number.clone(),
                    whatsapp_number: data.whatsapp_number.clone(),
                    email: data.email.clone(),
                    password_hash: data.password_hash.clone(),
                    county: data.county.clone(),
                    role: data.role,
                    created_at: Utc::now(),
                };
                self.tables.users.insert(user.id, user.clone());
                slot.insert(user.id);
                debug!(user_id = user.id, "User inserted into memory store");
                Ok(user)
            }
        }
    }

    async fn update_whatsapp(&self, id: i64, whatsapp_number: &str) -> AppResult<Option<User>> {
        Ok(self.tables.users.get_mut(&id).map(|mut user| {
            user.whatsapp_number = Some(whatsapp_number.to_string());
            user.value().clone()
        }))
    }

    async fn delete(&self, id: i64) -> AppResult<bool> {
        let Some((_, user)) = self.tables.users.remove(&id) else {
            return Ok(false);
        };
        self.tables.emails.remove_if(&user.email, |_, owner| *owner == id);
        self.tables.listings.retain(|_, l| l.seller_id != id);
        self.tables.orders.retain(|_, o| o.buyer_id != id);
        debug!(user_id = id, "User and dependent rows removed from memory store");
        Ok(true)
    }
}

/// In-memory [`ListingStore`].
#[derive(Debug, Clone)]
pub struct MemoryListingStore {
    tables: Arc<Tables>,
}

#[async_trait]
impl ListingStore for MemoryListingStore {
    async fn find_by_id(&self, id: i64) -> AppResult<Option<Listing>> {
        Ok(self.tables.listings.get(&id).map(|l| l.value().clone()))
    }

    async fn find_all(&self) -> AppResult<Vec<Listing>> {
        let mut listings: Vec<Listing> = self
            .tables
            .listings
            .iter()
            .map(|l| l.value().clone())
            .collect();
        newest_first(&mut listings, |l| (l.created_at, l.id));
        Ok(listings)
    }

    async fn find_by_seller(&self, seller_id: i64) -> AppResult<Vec<Listing>> {
        let mut listings: Vec<Listing> = self
            .tables
            .listings
            .iter()
            .filter(|l| l.seller_id == seller_id)
            .map(|l| l.value().clone())
            .collect();
        newest_first(&mut listings, |l| (l.created_at, l.id));
        Ok(listings)
    }

    async fn create(&self, data: &CreateListing) -> AppResult<Listing> {
        if !self.tables.users.contains_key(&data.seller_id) {
            return Err(AppError::not_found(format!(
                "Seller {} not found",
                data.seller_id
            )));
        }

        let listing = Listing {
            id: Tables::next_id(&self.tables.next_listing_id),
            title: data.title.clone(),
            description: data.description.clone(),
            price: data.price.clone(),
            breed: data.breed.clone(),
            health_status: data.health_status.clone(),
            county: data.county.clone(),
            image_url: data.image_url.clone(),
            seller_id: data.seller_id,
            created_at: Utc::now(),
        };
        self.tables.listings.insert(listing.id, listing.clone());
        Ok(listing)
    }

    async fn delete(&self, id: i64) -> AppResult<bool> {
        Ok(self.tables.listings.remove(&id).is_some())
    }
}

/// In-memory [`OrderStore`].
#[derive(Debug, Clone)]
pub struct MemoryOrderStore {
    tables: Arc<Tables>,
}

#[async_trait]
impl OrderStore for MemoryOrderStore {
    async fn find_all(&self) -> AppResult<Vec<Order>> {
        let mut orders: Vec<Order> = self
            .tables
            .orders
            .iter()
            .map(|o| o.value().clone())
            .collect();
        newest_first(&mut orders, |o| (o.created_at, o.id));
        Ok(orders)
    }

    async fn find_by_buyer(&self, buyer_id: i64) -> AppResult<Vec<Order>> {
        let mut orders: Vec<Order> = self
            .tables
            .orders
            .iter()
            .filter(|o| o.buyer_id == buyer_id)
            .map(|o| o.value().clone())
            .collect();
        newest_first(&mut orders, |o| (o.created_at, o.id));
        Ok(orders)
    }

    async fn create(&self, data: &CreateOrder) -> AppResult<Order> {
        if !self.tables.users.contains_key(&data.buyer_id) {
            return Err(AppError::not_found(format!(
                "Buyer {} not found",
                data.buyer_id
            )));
        }

        let order = Order {
            id: Tables::next_id(&self.tables.next_order_id),
            buyer_id: data.buyer_id,
            livestock_id: data.livestock_id,
            payment_status: data.payment_status,
            transaction_id: data.transaction_id.clone(),
            invoice_number: data.invoice_number.clone(),
            certificate_number: data.certificate_number.clone(),
            created_at: Utc::now(),
        };
        self.tables.orders.insert(order.id, order.clone());
        Ok(order)
    }
}
