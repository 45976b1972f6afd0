//! Livestock listing entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::price::Price;
use crate::user::{County, User};

/// An animal offered for sale by a seller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    /// Unique listing identifier.
    pub id: i64,
    /// Short headline.
    pub title: String,
    /// Free-form description.
    pub description: String,
    /// Asking price.
    pub price: Price,
    /// Breed name.
    pub breed: String,
    /// Seller-declared health status.
    pub health_status: String,
    /// County where the animal is kept.
    pub county: County,
    /// Optional image reference.
    pub image_url: Option<String>,
    /// Owning seller.
    pub seller_id: i64,
    /// When the listing was created.
    pub created_at: DateTime<Utc>,
}

impl Listing {
    /// Check whether the given user owns this listing.
    pub fn is_owned_by(&self, user_id: i64) -> bool {
        self.seller_id == user_id
    }

    /// Returns the compact view embedded in order history.
    pub fn to_summary(&self) -> ListingSummary {
        ListingSummary {
            id: self.id,
            title: self.title.clone(),
            price: self.price.clone(),
            breed: self.breed.clone(),
            image_url: self.image_url.clone(),
        }
    }
}

/// Seller contact details shown alongside a listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SellerSummary {
    /// Seller user ID.
    pub id: i64,
    /// Seller display name.
    pub name: String,
    /// Seller phone number.
    pub phone_number: String,
    /// Seller WhatsApp number.
    pub whatsapp_number: Option<String>,
    /// Seller county.
    pub county: County,
}

impl From<&User> for SellerSummary {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            name: user.name.clone(),
            phone_number: user.phone_number.clone(),
            whatsapp_number: user.whatsapp_number.clone(),
            county: user.county.clone(),
        }
    }
}

/// A listing together with its seller's contact details.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingWithSeller {
    /// The listing itself, flattened into the same JSON object.
    #[serde(flatten)]
    pub listing: Listing,
    /// The seller, absent only if the account vanished mid-read.
    pub seller: Option<SellerSummary>,
}

/// Compact listing view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingSummary {
    /// Listing ID.
    pub id: i64,
    /// Title.
    pub title: String,
    /// Price.
    pub price: Price,
    /// Breed.
    pub breed: String,
    /// Image reference.
    pub image_url: Option<String>,
}

/// Data required to create a new listing.
#[derive(Debug, Clone)]
pub struct CreateListing {
    /// Title.
    pub title: String,
    /// Description.
    pub description: String,
    /// Price.
    pub price: Price,
    /// Breed.
    pub breed: String,
    /// Health status.
    pub health_status: String,
    /// County.
    pub county: County,
    /// Image reference.
    pub image_url: Option<String>,
    /// Owning seller, always taken from the verified caller.
    pub seller_id: i64,
}
