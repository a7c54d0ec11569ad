//! SeaORM entity definitions
//!
//! These are database-specific entities separate from domain models.

pub mod document;
pub mod user;

// Re-exports for public API convenience
#[allow(unused_imports)]
pub use document::{ActiveModel as DocumentActiveModel, Entity as DocumentEntity, Model as DocumentModel};
#[allow(unused_imports)]
pub use user::{ActiveModel as UserActiveModel, Entity as UserEntity, Model as UserModel};
