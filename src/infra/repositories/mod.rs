//! Repository layer - Data access abstraction
//!
//! Repositories provide an abstraction over data persistence,
//! keeping SeaORM entities out of the domain and service layers.

mod document_repository;
pub(crate) mod entities;
mod user_repository;

pub use document_repository::{DocumentRepository, DocumentStore};
pub use user_repository::{UserRepository, UserStore};

// Export mocks for tests (both unit and integration)
#[cfg(any(test, feature = "test-utils"))]
pub use document_repository::MockDocumentRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use user_repository::MockUserRepository;
