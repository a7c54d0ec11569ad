//! CLI argument definitions.
//!
//! Uses clap derive macros for type-safe argument parsing.

use clap::{Args, Parser, Subcommand};

use crate::domain::{Role, UserForm, UserId};

/// Ambillion user administration - registration, agents and approvals
#[derive(Parser, Debug)]
#[command(name = "ambillion-api")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Database URL (overrides DATABASE_URL from the environment)
    #[arg(long, global = true)]
    pub database_url: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run database migrations
    Migrate(MigrateArgs),

    /// Manage users
    Users(UsersArgs),
}

/// Arguments for the migrate command
#[derive(Parser, Debug)]
pub struct MigrateArgs {
    #[command(subcommand)]
    pub action: MigrateAction,
}

/// Migration actions
#[derive(Subcommand, Debug)]
pub enum MigrateAction {
    /// Run pending migrations
    Up,
    /// Rollback last migration
    Down,
    /// Show migration status
    Status,
    /// Reset and re-run all migrations
    Fresh,
}

/// Arguments for the users command
#[derive(Parser, Debug)]
pub struct UsersArgs {
    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub action: UsersAction,
}

/// User management actions
#[derive(Subcommand, Debug)]
pub enum UsersAction {
    /// List all users
    List,

    /// Show one user in detail
    Show {
        /// User id
        id: UserId,
    },

    /// Register a manufacturer (always PENDING)
    Register {
        #[command(flatten)]
        form: UserFormArgs,

        /// Requested role; ignored, registrations are always manufacturers
        #[arg(long, value_parser = parse_role)]
        role: Option<Role>,
    },

    /// Create an approved origin or destination agent
    AddAgent {
        #[command(flatten)]
        form: UserFormArgs,

        /// ORIGIN_AGENT or DESTINATION_AGENT
        #[arg(long, value_parser = parse_role)]
        role: Role,
    },

    /// Replace a user's profile and password
    Update {
        /// User id
        id: UserId,

        #[command(flatten)]
        form: UserFormArgs,

        /// New role; the current one is kept when omitted
        #[arg(long, value_parser = parse_role)]
        role: Option<Role>,
    },

    /// Approve a pending manufacturer
    Approve {
        /// User id
        id: UserId,
    },

    /// Reject a pending manufacturer
    Reject {
        /// User id
        id: UserId,
    },

    /// Check an email/password pair
    Login {
        #[arg(long)]
        email: String,

        #[arg(long, env = "AMBILLION_PASSWORD", hide_env_values = true)]
        password: String,
    },

    /// Delete a user; their documents are kept but detached
    Delete {
        /// User id
        id: UserId,
    },
}

/// Profile fields shared by register, add-agent and update
#[derive(Args, Debug, Clone)]
pub struct UserFormArgs {
    #[arg(long)]
    pub first_name: String,

    #[arg(long)]
    pub last_name: String,

    #[arg(long)]
    pub company: Option<String>,

    #[arg(long)]
    pub email: String,

    #[arg(long, env = "AMBILLION_PASSWORD", hide_env_values = true)]
    pub password: String,

    #[arg(long)]
    pub country: Option<String>,
}

impl UserFormArgs {
    /// Build the service-level form, attaching an optional role.
    pub fn into_form(self, role: Option<Role>) -> UserForm {
        UserForm {
            first_name: self.first_name,
            last_name: self.last_name,
            company: self.company,
            email: self.email,
            password: self.password,
            role,
            country: self.country,
        }
    }
}

fn parse_role(value: &str) -> Result<Role, String> {
    value.parse::<Role>().map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_add_agent() {
        let cli = Cli::try_parse_from([
            "ambillion-api",
            "users",
            "--json",
            "add-agent",
            "--first-name",
            "Li",
            "--last-name",
            "Wei",
            "--email",
            "li@wei.cn",
            "--password",
            "pw123",
            "--country",
            "China",
            "--role",
            "origin_agent",
        ])
        .unwrap();

        let Commands::Users(args) = cli.command else {
            panic!("expected users command");
        };
        assert!(args.json);
        match args.action {
            UsersAction::AddAgent { form, role } => {
                assert_eq!(role, Role::OriginAgent);
                assert_eq!(form.country.as_deref(), Some("China"));
            }
            other => panic!("unexpected action {:?}", other),
        }
    }

    #[test]
    fn test_parse_rejects_unknown_role() {
        let result = Cli::try_parse_from([
            "ambillion-api",
            "users",
            "update",
            "7",
            "--first-name",
            "A",
            "--last-name",
            "B",
            "--email",
            "a@b.com",
            "--password",
            "pw123",
            "--role",
            "SUPERUSER",
        ]);

        assert!(result.is_err());
    }

    #[test]
    fn test_global_flags() {
        let cli = Cli::try_parse_from([
            "ambillion-api",
            "migrate",
            "status",
            "--verbose",
            "--database-url",
            "sqlite::memory:",
        ])
        .unwrap();

        assert!(cli.verbose);
        assert_eq!(cli.database_url.as_deref(), Some("sqlite::memory:"));
    }
}
