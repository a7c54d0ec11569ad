//! CLI module - Command-line interface for the application.
//!
//! Provides commands for:
//! - `migrate` - Database migrations
//! - `users` - Registration, agents, approvals and login

pub mod args;

pub use args::{Cli, Commands};
