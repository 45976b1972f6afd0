//! Request DTOs with validation.

use serde::{Deserialize, Serialize};
use validator::Validate;

use delamere_service::{NewListing, Registration};

/// Registration request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    /// Display name.
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    /// Phone number.
    #[validate(length(min = 10, message = "Phone number must be at least 10 characters"))]
    pub phone_number: String,
    /// WhatsApp number.
    #[serde(default)]
    pub whatsapp_number: Option<String>,
    /// Email address.
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
    /// Password. Length policy is applied by the auth service.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
    /// County name.
    #[validate(length(min = 1, message = "County is required"))]
    pub county: String,
    /// Requested role.
    #[serde(default)]
    pub role: Option<String>,
}

impl From<RegisterRequest> for Registration {
    fn from(req: RegisterRequest) -> Self {
        Self {
            name: req.name,
            phone_number: req.phone_number,
            whatsapp_number: req.whatsapp_number,
            email: req.email,
            password: req.password,
            county: req.county,
            role: req.role,
        }
    }
}

/// Login request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    /// Email address.
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
    /// Password.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Profile update request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileRequest {
    /// New WhatsApp number.
    #[validate(length(min = 1, message = "WhatsApp number is required"))]
    pub whatsapp_number: String,
}

/// A price given either as a JSON string or a JSON number.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PriceInput {
    /// `"85000.00"`
    Text(String),
    /// `85000`
    Number(serde_json::Number),
}

impl PriceInput {
    /// The price as decimal text, ready for exact parsing.
    pub fn into_text(self) -> String {
        match self {
            Self::Text(text) => text,
            Self::Number(number) => number.to_string(),
        }
    }
}

/// Create-listing request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateListingRequest {
    /// Title.
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,
    /// Description.
    #[validate(length(min = 1, message = "Description is required"))]
    pub description: String,
    /// Price.
    pub price: PriceInput,
    /// Breed.
    #[validate(length(min = 1, message = "Breed is required"))]
    pub breed: String,
    /// Health status.
    #[validate(length(min = 1, message = "Health status is required"))]
    pub health_status: String,
    /// County name.
    #[validate(length(min = 1, message = "County is required"))]
    pub county: String,
    /// Optional image reference, stored as `imageUrl`.
    #[serde(default, alias = "imageUrl")]
    pub image: Option<String>,
}

impl From<CreateListingRequest> for NewListing {
    fn from(req: CreateListingRequest) -> Self {
        Self {
            title: req.title,
            description: req.description,
            price: req.price.into_text(),
            breed: req.breed,
            health_status: req.health_status,
            county: req.county,
            image_url: req.image,
        }
    }
}

/// Create-order request body.
///
/// Any buyer id in the body is ignored; the buyer is always the caller.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    /// Listing to buy.
    #[validate(range(min = 1, message = "livestockId must be a positive integer"))]
    pub livestock_id: i64,
}
