//! Ambillion API - User registration and role approval backend
//!
//! Manufacturers self-register and wait in `PENDING` until an administrator
//! approves or rejects them. Administrators also create origin and
//! destination agents, which are approved immediately.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: Core business entities, password hashing
//! - **services**: Application use cases and business logic
//! - **infra**: Database, migrations, repositories, Unit of Work
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Create the schema
//! cargo run -- migrate up
//!
//! # Register a manufacturer and approve it
//! cargo run -- users register --first-name A --last-name B --email a@b.com --password pw123
//! cargo run -- users approve 1
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod services;

// Re-export commonly used types at crate root
pub use config::Config;
pub use domain::{Password, Role, User, UserStatus};
pub use errors::{AppError, AppResult};
pub use services::{StatusChange, UserService};
