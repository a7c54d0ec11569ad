//! Shared fixtures for database-backed tests.

#![allow(dead_code)]

use std::sync::Arc;

use chrono::Utc;
use sea_orm::ConnectOptions;

use ambillion_api::domain::{
    Argon2Hasher, HashCost, NewUser, Password, Role, UserForm, UserStatus,
};
use ambillion_api::infra::{Database, Persistence};
use ambillion_api::services::UserManager;

/// Fresh in-memory SQLite database with all migrations applied.
///
/// A single pooled connection keeps the in-memory schema alive.
pub async fn setup_database() -> Database {
    let mut options = ConnectOptions::new("sqlite::memory:");
    options
        .max_connections(1)
        .min_connections(1)
        .sqlx_logging(false);

    let db = Database::connect_with(options).await.unwrap();
    db.run_migrations().await.unwrap();
    db
}

pub fn user_manager(db: &Database) -> (UserManager<Persistence>, Arc<Persistence>) {
    let uow = Arc::new(Persistence::new(db.get_connection()));
    let hasher = Arc::new(Argon2Hasher::new(HashCost::minimal()).unwrap());
    (UserManager::new(uow.clone(), hasher), uow)
}

pub fn form(first_name: &str, last_name: &str, email: &str, password: &str) -> UserForm {
    UserForm {
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        company: None,
        email: email.to_string(),
        password: password.to_string(),
        role: None,
        country: None,
    }
}

pub fn new_user(email: &str) -> NewUser {
    let now = Utc::now();
    NewUser {
        first_name: "A".to_string(),
        last_name: "B".to_string(),
        company: Some("Acme".to_string()),
        email: email.to_string(),
        password: Password::from_hash("$argon2id$v=19$placeholder".to_string()),
        role: Role::Manufacturer,
        country: None,
        registered_date: now,
        status: UserStatus::Pending,
        audit_timestamp: now,
    }
}
