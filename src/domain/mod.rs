//! Domain layer - Core business entities and logic
//!
//! This module contains the core domain models that represent
//! business concepts independent of infrastructure concerns.

pub mod document;
pub mod password;
pub mod user;

pub use document::{Document, DocumentId, NewDocument};
pub use password::{Argon2Hasher, CredentialHasher, HashCost, Password};
pub use user::{
    NewUser, Role, User, UserDraft, UserForm, UserId, UserResponse, UserStatus, UserSummary,
};
