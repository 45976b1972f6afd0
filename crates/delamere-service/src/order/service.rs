//! Placing orders and reading order history.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::info;

use delamere_auth::rbac::{Operation, RbacEnforcer};
use delamere_core::error::AppError;
use delamere_core::result::AppResult;
use delamere_database::Stores;
use delamere_entity::order::{CreateOrder, Order, OrderWithListing};

use crate::context::RequestContext;
use crate::listing::service::load_sellers;

/// Handles orders.
#[derive(Debug, Clone)]
pub struct OrderService {
    /// Backing stores.
    stores: Stores,
    /// RBAC enforcer.
    rbac: Arc<RbacEnforcer>,
}

impl OrderService {
    /// Creates a new order service.
    pub fn new(stores: Stores, rbac: Arc<RbacEnforcer>) -> Self {
        Self { stores, rbac }
    }

    /// Places a pending order for a listing on behalf of the caller.
    pub async fn create(&self, ctx: &RequestContext, livestock_id: i64) -> AppResult<Order> {
        self.rbac.authorize(Some(ctx.role), Operation::CreateOrder)?;

        if self.stores.listings.find_by_id(livestock_id).await?.is_none() {
            return Err(AppError::not_found("Livestock not found"));
        }

        let order = self
            .stores
            .orders
            .create(&CreateOrder::pending(ctx.user_id, livestock_id))
            .await?;

        info!(
            order_id = order.id,
            buyer_id = ctx.user_id,
            livestock_id,
            "Order placed"
        );
        Ok(order)
    }

    /// Returns the caller's orders with the listing and seller each refers to.
    ///
    /// Orders whose listing has since been deleted carry `None` for both.
    pub async fn my_orders(&self, ctx: &RequestContext) -> AppResult<Vec<OrderWithListing>> {
        self.rbac.authorize(Some(ctx.role), Operation::ReadOwnOrders)?;

        let orders = self.stores.orders.find_by_buyer(ctx.user_id).await?;

        let mut listings = HashMap::new();
        for order in &orders {
            if listings.contains_key(&order.livestock_id) {
                continue;
            }
            if let Some(listing) = self.stores.listings.find_by_id(order.livestock_id).await? {
                listings.insert(order.livestock_id, listing);
            }
        }
        let sellers = load_sellers(
            self.stores.users.as_ref(),
            listings.values().map(|l| l.seller_id),
        )
        .await?;

        Ok(orders
            .into_iter()
            .map(|order| {
                let listing = listings.get(&order.livestock_id);
                OrderWithListing {
                    livestock: listing.map(|l| l.to_summary()),
                    seller: listing.and_then(|l| sellers.get(&l.seller_id).cloned()),
                    order,
                }
            })
            .collect())
    }

    /// Returns every order. Admin only.
    pub async fn all(&self, ctx: &RequestContext) -> AppResult<Vec<Order>> {
        self.rbac
            .authorize(Some(ctx.role), Operation::AdminListOrders)?;
        self.stores.orders.find_all().await
    }
}
