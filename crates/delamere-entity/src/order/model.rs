//! Order entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::status::PaymentStatus;
use crate::listing::{ListingSummary, SellerSummary};

/// A buyer's intent to purchase a listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Unique order identifier.
    pub id: i64,
    /// Purchasing user.
    pub buyer_id: i64,
    /// Listing being bought. Not enforced after the listing is deleted.
    pub livestock_id: i64,
    /// Payment state.
    pub payment_status: PaymentStatus,
    /// Payment provider transaction reference.
    pub transaction_id: Option<String>,
    /// Invoice number, issued on payment.
    pub invoice_number: Option<String>,
    /// Livestock movement certificate number.
    pub certificate_number: Option<String>,
    /// When the order was placed.
    pub created_at: DateTime<Utc>,
}

/// Data required to create a new order.
#[derive(Debug, Clone)]
pub struct CreateOrder {
    /// Purchasing user, always taken from the verified caller.
    pub buyer_id: i64,
    /// Listing being bought.
    pub livestock_id: i64,
    /// Initial payment state.
    pub payment_status: PaymentStatus,
    /// Transaction reference.
    pub transaction_id: Option<String>,
    /// Invoice number.
    pub invoice_number: Option<String>,
    /// Certificate number.
    pub certificate_number: Option<String>,
}

impl CreateOrder {
    /// A new pending order with no payment references.
    pub fn pending(buyer_id: i64, livestock_id: i64) -> Self {
        Self {
            buyer_id,
            livestock_id,
            payment_status: PaymentStatus::Pending,
            transaction_id: None,
            invoice_number: None,
            certificate_number: None,
        }
    }
}

/// An order with the listing it refers to, as shown in order history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderWithListing {
    /// The order, flattened.
    #[serde(flatten)]
    pub order: Order,
    /// The listing, or null once it has been deleted.
    pub livestock: Option<ListingSummary>,
    /// The listing's seller, or null once the listing has been deleted.
    pub seller: Option<SellerSummary>,
}
