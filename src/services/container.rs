//! Service Container - Centralized service access.
//!
//! Commands depend on the `ServiceContainer` trait, not on the concrete
//! wiring, so the wiring can be swapped in tests.

use std::sync::Arc;

use super::{UserManager, UserService};
use crate::config::Config;
use crate::domain::{Argon2Hasher, CredentialHasher};
use crate::errors::AppResult;
use crate::infra::Persistence;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Service container trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
pub trait ServiceContainer: Send + Sync {
    /// Get user service
    fn users(&self) -> Arc<dyn UserService>;
}

/// Concrete implementation of ServiceContainer
pub struct Services {
    user_service: Arc<dyn UserService>,
}

impl Services {
    /// Create a new service container from already built services
    pub fn new(user_service: Arc<dyn UserService>) -> Self {
        Self { user_service }
    }

    /// Create service container from database connection and config.
    ///
    /// # Errors
    /// Fails if the configured hash cost is rejected by Argon2.
    pub fn from_connection(db: sea_orm::DatabaseConnection, config: &Config) -> AppResult<Self> {
        let hasher: Arc<dyn CredentialHasher> = Arc::new(Argon2Hasher::new(config.hash_cost)?);
        let uow = Arc::new(Persistence::new(db));
        let user_service = Arc::new(UserManager::new(uow, hasher));

        Ok(Self { user_service })
    }
}

impl ServiceContainer for Services {
    fn users(&self) -> Arc<dyn UserService> {
        self.user_service.clone()
    }
}
