//! Listing creation, browsing and deletion.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::info;

use delamere_auth::rbac::{Operation, RbacEnforcer};
use delamere_core::error::AppError;
use delamere_core::result::AppResult;
use delamere_database::{Stores, UserStore};
use delamere_entity::listing::{CreateListing, Listing, ListingWithSeller, Price, SellerSummary};
use delamere_entity::user::County;

use crate::context::RequestContext;

/// Input for a new listing. The seller is never part of it.
#[derive(Debug, Clone)]
pub struct NewListing {
    /// Title.
    pub title: String,
    /// Description.
    pub description: String,
    /// Price as a decimal string.
    pub price: String,
    /// Breed.
    pub breed: String,
    /// Health status.
    pub health_status: String,
    /// County name.
    pub county: String,
    /// Optional image reference.
    pub image_url: Option<String>,
}

/// Handles livestock listings.
#[derive(Debug, Clone)]
pub struct ListingService {
    /// Backing stores.
    stores: Stores,
    /// RBAC enforcer.
    rbac: Arc<RbacEnforcer>,
}

impl ListingService {
    /// Creates a new listing service.
    pub fn new(stores: Stores, rbac: Arc<RbacEnforcer>) -> Self {
        Self { stores, rbac }
    }

    /// Lists every listing with its seller, newest first. Public.
    pub async fn list(&self) -> AppResult<Vec<ListingWithSeller>> {
        let listings = self.stores.listings.find_all().await?;
        attach_sellers(self.stores.users.as_ref(), listings).await
    }

    /// Returns one listing with its seller. Public.
    pub async fn get(&self, id: i64) -> AppResult<ListingWithSeller> {
        let listing = self
            .stores
            .listings
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Livestock not found"))?;
        let seller = self
            .stores
            .users
            .find_by_id(listing.seller_id)
            .await?
            .map(|u| SellerSummary::from(&u));
        Ok(ListingWithSeller { listing, seller })
    }

    /// Lists the caller's own listings.
    pub async fn mine(&self, ctx: &RequestContext) -> AppResult<Vec<Listing>> {
        self.rbac
            .authorize(Some(ctx.role), Operation::ListOwnListings)?;
        self.stores.listings.find_by_seller(ctx.user_id).await
    }

    /// Creates a listing owned by the caller.
    pub async fn create(&self, ctx: &RequestContext, input: NewListing) -> AppResult<Listing> {
        self.rbac.authorize(Some(ctx.role), Operation::CreateListing)?;

        let data = CreateListing {
            title: required("Title", input.title)?,
            description: required("Description", input.description)?,
            price: Price::parse(&input.price)?,
            breed: required("Breed", input.breed)?,
            health_status: required("Health status", input.health_status)?,
            county: County::parse(&input.county)?,
            image_url: input.image_url.filter(|url| !url.trim().is_empty()),
            seller_id: ctx.user_id,
        };

        let listing = self.stores.listings.create(&data).await?;
        info!(listing_id = listing.id, seller_id = ctx.user_id, "Listing created");
        Ok(listing)
    }

    /// Deletes a listing. Only its seller or an admin may do so.
    pub async fn delete(&self, ctx: &RequestContext, id: i64) -> AppResult<()> {
        self.rbac.authorize(Some(ctx.role), Operation::DeleteListing)?;

        let listing = self
            .stores
            .listings
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Livestock not found"))?;
        if self
            .rbac
            .policies()
            .policy(Operation::DeleteListing)
            .owner_or_admin
        {
            self.rbac
                .require_owner_or_admin(ctx.user_id, ctx.role, listing.seller_id)?;
        }

        if !self.stores.listings.delete(id).await? {
            return Err(AppError::not_found("Livestock not found"));
        }

        info!(listing_id = id, deleted_by = ctx.user_id, "Listing deleted");
        Ok(())
    }
}

/// Trims a text field and rejects it when empty.
fn required(field: &str, value: String) -> AppResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AppError::validation(format!("{field} is required")));
    }
    Ok(trimmed.to_string())
}

/// Looks up each distinct seller once and pairs listings with them.
pub(crate) async fn attach_sellers(
    users: &dyn UserStore,
    listings: Vec<Listing>,
) -> AppResult<Vec<ListingWithSeller>> {
    let sellers = load_sellers(users, listings.iter().map(|l| l.seller_id)).await?;
    Ok(listings
        .into_iter()
        .map(|listing| {
            let seller = sellers.get(&listing.seller_id).cloned();
            ListingWithSeller { listing, seller }
        })
        .collect())
}

/// Fetches seller summaries for a set of user ids.
pub(crate) async fn load_sellers(
    users: &dyn UserStore,
    ids: impl Iterator<Item = i64>,
) -> AppResult<HashMap<i64, SellerSummary>> {
    let mut sellers = HashMap::new();
    for id in ids {
        if sellers.contains_key(&id) {
            continue;
        }
        if let Some(user) = users.find_by_id(id).await? {
            sellers.insert(id, SellerSummary::from(&user));
        }
    }
    Ok(sellers)
}
