//! Demo data for an empty store.

use delamere_auth::password::PasswordHasher;
use delamere_core::config::AppConfig;
use delamere_core::error::AppError;
use delamere_database::Stores;
use delamere_entity::listing::{CreateListing, Price};
use delamere_entity::order::{CreateOrder, PaymentStatus};
use delamere_entity::user::{County, CreateUser, UserRole};

use crate::output;

/// Password shared by every seeded account.
pub const SEED_PASSWORD: &str = "password123";

/// What a seed run produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedOutcome {
    /// The store already had users; nothing was written.
    AlreadySeeded,
    /// Demo data was written.
    Seeded {
        /// Users created.
        users: usize,
        /// Listings created.
        listings: usize,
        /// Orders created.
        orders: usize,
    },
}

/// Execute the seed command
pub async fn execute(config: &AppConfig) -> Result<(), AppError> {
    let stores = super::open_stores(config).await?;
    let hasher = PasswordHasher::new(&config.auth)?;

    let outcome = seed(&stores, &hasher).await;
    stores.close().await;

    match outcome? {
        SeedOutcome::AlreadySeeded => output::print_warning("Database already seeded"),
        SeedOutcome::Seeded {
            users,
            listings,
            orders,
        } => output::print_success(&format!(
            "Seeded {users} users, {listings} listings and {orders} order"
        )),
    }

    Ok(())
}

/// Writes the demo accounts, listings and order when no user exists yet.
pub async fn seed(stores: &Stores, hasher: &PasswordHasher) -> Result<SeedOutcome, AppError> {
    if stores.users.count().await? > 0 {
        return Ok(SeedOutcome::AlreadySeeded);
    }

    let password_hash = hasher.hash(SEED_PASSWORD.to_string()).await?;

    let account = |name: &str, phone: &str, email: &str, county: &str, role| {
        Ok::<_, AppError>(CreateUser {
            name: name.to_string(),
            phone_number: phone.to_string(),
            whatsapp_number: None,
            email: email.to_string(),
            password_hash: password_hash.clone(),
            county: County::parse(county)?,
            role,
        })
    };

    stores
        .users
        .create(&account(
            "Admin User",
            "0700000000",
            "admin@delamere.com",
            "Nairobi",
            UserRole::Admin,
        )?)
        .await?;
    let seller = stores
        .users
        .create(&account(
            "John Farmer",
            "0711111111",
            "john@delamere.com",
            "Nakuru",
            UserRole::Seller,
        )?)
        .await?;
    let buyer = stores
        .users
        .create(&account(
            "Jane Buyer",
            "0722222222",
            "jane@delamere.com",
            "Kiambu",
            UserRole::Buyer,
        )?)
        .await?;

    let cow = stores
        .listings
        .create(&CreateListing {
            title: "Healthy Friesian Cow".to_string(),
            description: "A 3-year-old high milk yielding Friesian cow. Great health, vaccinated."
                .to_string(),
            price: Price::parse("85000")?,
            breed: "Friesian".to_string(),
            health_status: "Excellent".to_string(),
            county: County::parse("Nakuru")?,
            image_url: None,
            seller_id: seller.id,
        })
        .await?;
    stores
        .listings
        .create(&CreateListing {
            title: "Boer Goat for Breeding".to_string(),
            description: "Strong Boer goat perfect for cross-breeding. Dewormed.".to_string(),
            price: Price::parse("15000")?,
            breed: "Boer".to_string(),
            health_status: "Good".to_string(),
            county: County::parse("Baringo")?,
            image_url: None,
            seller_id: seller.id,
        })
        .await?;

    stores
        .orders
        .create(&CreateOrder {
            payment_status: PaymentStatus::Completed,
            transaction_id: Some("TXN-987654321".to_string()),
            ..CreateOrder::pending(buyer.id, cow.id)
        })
        .await?;

    tracing::info!("Demo data seeded");
    Ok(SeedOutcome::Seeded {
        users: 3,
        listings: 2,
        orders: 1,
    })
}
