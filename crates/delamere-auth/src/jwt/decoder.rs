//! Session token verification.

use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use tracing::debug;

use delamere_core::config::AuthConfig;
use delamere_core::error::AppError;

use super::claims::Claims;

/// Verifies session tokens.
///
/// Verification is stateless: there is no revocation list, so a token stays
/// valid until it expires even if the account changes in the meantime.
#[derive(Clone)]
pub struct JwtDecoder {
    /// HMAC secret key for verification.
    decoding_key: DecodingKey,
    /// Validation configuration.
    validation: Validation,
}

impl std::fmt::Debug for JwtDecoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtDecoder")
            .field("validation", &self.validation)
            .finish()
    }
}

impl JwtDecoder {
    /// Creates a new decoder from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = config.jwt_leeway_seconds;

        Self {
            decoding_key: DecodingKey::from_secret(config.jwt_secret.as_bytes()),
            validation,
        }
    }

    /// Decodes and validates a token string.
    ///
    /// Every failure, whether a bad signature, a malformed token or an
    /// expired one, is reported as `ErrorKind::Unauthenticated`.
    pub fn verify(&self, token: &str) -> Result<Claims, AppError> {
        let token_data =
            decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
                debug!(error = %e, "Session token rejected");
                match e.kind() {
                    jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                        AppError::unauthenticated("Token has expired")
                    }
                    jsonwebtoken::errors::ErrorKind::InvalidSignature => {
                        AppError::unauthenticated("Invalid token signature")
                    }
                    _ => AppError::unauthenticated("Invalid token"),
                }
            })?;

        Ok(token_data.claims)
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, Utc};

    use delamere_core::ErrorKind;
    use delamere_entity::user::UserRole;

    use super::*;
    use crate::jwt::JwtEncoder;

    fn config(secret: &str) -> AuthConfig {
        AuthConfig {
            jwt_secret: secret.to_string(),
            ..AuthConfig::default()
        }
    }

    #[test]
    fn test_round_trip_preserves_identity() {
        let cfg = config("test-secret");
        let token = JwtEncoder::new(&cfg)
            .unwrap()
            .issue(42, UserRole::Seller)
            .unwrap();
        let claims = JwtDecoder::new(&cfg).verify(&token).unwrap();

        assert_eq!(claims.id, 42);
        assert_eq!(claims.role, UserRole::Seller);
        assert_eq!(claims.exp - claims.iat, 24 * 3600);
        assert!(!claims.is_expired());
    }

    #[test]
    fn test_expired_token_rejected_like_malformed() {
        let cfg = config("test-secret");
        let issued = Utc::now() - Duration::hours(25);
        let token = JwtEncoder::new(&cfg)
            .unwrap()
            .issue_at(1, UserRole::Buyer, issued)
            .unwrap();

        let decoder = JwtDecoder::new(&cfg);
        let expired = decoder.verify(&token).unwrap_err();
        let malformed = decoder.verify("not-a-token").unwrap_err();
        assert_eq!(expired.kind, ErrorKind::Unauthenticated);
        assert_eq!(expired.kind, malformed.kind);
    }

    #[test]
    fn test_token_just_inside_window_accepted() {
        let cfg = config("test-secret");
        let issued = Utc::now() - Duration::hours(23);
        let token = JwtEncoder::new(&cfg)
            .unwrap()
            .issue_at(1, UserRole::Buyer, issued)
            .unwrap();
        assert!(JwtDecoder::new(&cfg).verify(&token).is_ok());
    }

    #[test]
    fn test_foreign_signature_rejected() {
        let token = JwtEncoder::new(&config("other-secret"))
            .unwrap()
            .issue(1, UserRole::Admin)
            .unwrap();
        let err = JwtDecoder::new(&config("test-secret"))
            .verify(&token)
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Unauthenticated);
    }

    #[test]
    fn test_tampered_payload_rejected() {
        let cfg = config("test-secret");
        let encoder = JwtEncoder::new(&cfg).unwrap();
        let buyer = encoder.issue(1, UserRole::Buyer).unwrap();
        let admin = encoder.issue(1, UserRole::Admin).unwrap();

        // Splice the admin payload onto the buyer signature.
        let buyer_parts: Vec<&str> = buyer.split('.').collect();
        let admin_parts: Vec<&str> = admin.split('.').collect();
        let forged = format!("{}.{}.{}", buyer_parts[0], admin_parts[1], buyer_parts[2]);

        let err = JwtDecoder::new(&cfg).verify(&forged).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Unauthenticated);
    }
}
