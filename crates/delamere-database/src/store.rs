//! Store traits implemented by every persistence backend.

use async_trait::async_trait;

use delamere_core::result::AppResult;
use delamere_entity::listing::{CreateListing, Listing};
use delamere_entity::order::{CreateOrder, Order};
use delamere_entity::user::{CreateUser, User, UserRole};

/// Persistence for user accounts.
///
/// Implementations must enforce email uniqueness atomically and report a
/// duplicate as `ErrorKind::Conflict`.
#[async_trait]
pub trait UserStore: Send + Sync + std::fmt::Debug + 'static {
    /// Find a user by primary key.
    async fn find_by_id(&self, id: i64) -> AppResult<Option<User>>;

    /// Find a user by email, compared exactly as stored.
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;

    /// List users, newest first, optionally filtered by role.
    async fn find_all(&self, role: Option<UserRole>) -> AppResult<Vec<User>>;

    /// Count all users.
    async fn count(&self) -> AppResult<i64>;

    /// Create a user.
    async fn create(&self, data: &CreateUser) -> AppResult<User>;

    /// Set a user's WhatsApp number. Returns `None` if the user is unknown.
    async fn update_whatsapp(&self, id: i64, whatsapp_number: &str) -> AppResult<Option<User>>;

    /// Delete a user together with their listings and orders.
    /// Returns whether a user was removed.
    async fn delete(&self, id: i64) -> AppResult<bool>;
}

/// Persistence for livestock listings.
#[async_trait]
pub trait ListingStore: Send + Sync + std::fmt::Debug + 'static {
    /// Find a listing by primary key.
    async fn find_by_id(&self, id: i64) -> AppResult<Option<Listing>>;

    /// List every listing, newest first.
    async fn find_all(&self) -> AppResult<Vec<Listing>>;

    /// List one seller's listings, newest first.
    async fn find_by_seller(&self, seller_id: i64) -> AppResult<Vec<Listing>>;

    /// Create a listing. Fails with `NotFound` if the seller does not exist.
    async fn create(&self, data: &CreateListing) -> AppResult<Listing>;

    /// Delete a listing. Orders referring to it are kept.
    async fn delete(&self, id: i64) -> AppResult<bool>;
}

/// Persistence for orders.
#[async_trait]
pub trait OrderStore: Send + Sync + std::fmt::Debug + 'static {
    /// List every order, newest first.
    async fn find_all(&self) -> AppResult<Vec<Order>>;

    /// List one buyer's orders, newest first.
    async fn find_by_buyer(&self, buyer_id: i64) -> AppResult<Vec<Order>>;

    /// Create an order. Fails with `NotFound` if the buyer does not exist.
    async fn create(&self, data: &CreateOrder) -> AppResult<Order>;
}
