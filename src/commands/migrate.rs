//! Migrate command - Schema management for the users and document tables.

use crate::cli::args::{MigrateAction, MigrateArgs};
use crate::config::Config;
use crate::errors::AppResult;
use crate::infra::Database;

/// Execute the migrate command
pub async fn execute(args: MigrateArgs, config: Config) -> AppResult<()> {
    let db = Database::connect_without_migrations(&config).await?;
    db.ping().await?;

    let output = run(&db, args.action).await?;
    if !output.is_empty() {
        println!("{}", output);
    }
    Ok(())
}

/// Apply one migration action, returning anything worth printing.
pub async fn run(db: &Database, action: MigrateAction) -> AppResult<String> {
    match action {
        MigrateAction::Up => {
            tracing::info!("Running pending migrations");
            db.run_migrations().await?;
            tracing::info!("Migrations completed");
        }
        MigrateAction::Down => {
            tracing::info!("Rolling back last migration");
            db.rollback_migration().await?;
            tracing::info!("Rollback completed");
        }
        MigrateAction::Status => {
            let lines: Vec<String> = db
                .migration_status()
                .await?
                .into_iter()
                .map(|(name, applied)| {
                    format!("{:<48} {}", name, if applied { "applied" } else { "pending" })
                })
                .collect();
            return Ok(lines.join("\n"));
        }
        MigrateAction::Fresh => {
            tracing::warn!("Dropping all tables and re-running migrations");
            db.fresh_migrations().await?;
            tracing::info!("Fresh migrations completed");
        }
    }

    Ok(String::new())
}
