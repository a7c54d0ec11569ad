//! Infrastructure layer - External systems integration
//!
//! This module handles all persistence concerns:
//! - Database connections and migrations
//! - SeaORM-backed repositories
//! - Unit of Work for transaction management

pub mod db;
pub mod repositories;
pub mod unit_of_work;

pub use db::{Database, Migrator};
pub use repositories::{DocumentRepository, DocumentStore, UserRepository, UserStore};
pub use unit_of_work::{
    Persistence, TransactionContext, TxDocumentRepository, TxFuture, TxUserRepository, UnitOfWork,
};

#[cfg(any(test, feature = "test-utils"))]
pub use repositories::{MockDocumentRepository, MockUserRepository};
