//! Shared fixtures for service unit tests.

use std::sync::Arc;

use delamere_auth::jwt::{JwtDecoder, JwtEncoder};
use delamere_auth::password::{PasswordHasher, PasswordValidator};
use delamere_auth::rbac::RbacEnforcer;
use delamere_core::config::AuthConfig;
use delamere_database::Stores;
use delamere_database::memory::MemoryStore;

use crate::{AdminService, AuthService, ListingService, OrderService, Registration};

pub struct Fixture {
    pub auth: AuthService,
    pub listings: ListingService,
    pub orders: OrderService,
    pub admin: AdminService,
    pub decoder: JwtDecoder,
}

pub fn fixture() -> Fixture {
    let config = AuthConfig {
        jwt_secret: "service-test-secret".to_string(),
        argon2_memory_kib: 1024,
        argon2_iterations: 1,
        admin_emails: vec!["boss@delamere.com".to_string()],
        ..AuthConfig::default()
    };
    let stores = Stores::memory(MemoryStore::new());
    let rbac = Arc::new(RbacEnforcer::new());
    let hasher = Arc::new(PasswordHasher::new(&config).unwrap());

    Fixture {
        auth: AuthService::new(
            stores.users.clone(),
            hasher,
            Arc::new(PasswordValidator::new(&config)),
            Arc::new(JwtEncoder::new(&config).unwrap()),
            Arc::new(config.clone()),
        ),
        listings: ListingService::new(stores.clone(), rbac.clone()),
        orders: OrderService::new(stores.clone(), rbac.clone()),
        admin: AdminService::new(stores, rbac),
        decoder: JwtDecoder::new(&config),
    }
}

pub fn registration(email: &str, role: Option<&str>) -> Registration {
    Registration {
        name: "Test User".to_string(),
        phone_number: "0712345678".to_string(),
        whatsapp_number: None,
        email: email.to_string(),
        password: "secret1".to_string(),
        county: "Nairobi".to_string(),
        role: role.map(str::to_string),
    }
}
