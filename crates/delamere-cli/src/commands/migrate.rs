//! Database migration management commands.

use clap::{Args, Subcommand};

use delamere_core::config::{AppConfig, StoreProvider};
use delamere_core::error::AppError;
use delamere_database::connection::DatabasePool;

use crate::output;

/// Arguments for the migrate command
#[derive(Debug, Args)]
pub struct MigrateArgs {
    /// Migration subcommand
    #[command(subcommand)]
    pub command: MigrateCommand,
}

/// Migration subcommands
#[derive(Debug, Subcommand)]
pub enum MigrateCommand {
    /// Run all pending migrations
    Run,
}

/// Execute migration commands
pub async fn execute(args: &MigrateArgs, config: &AppConfig) -> Result<(), AppError> {
    if config.database.provider == StoreProvider::Memory {
        output::print_warning("The memory provider has no schema; nothing to migrate.");
        return Ok(());
    }

    match &args.command {
        MigrateCommand::Run => {
            println!("Running database migrations...");
            let pool = DatabasePool::connect(&config.database).await?;
            let result = delamere_database::migration::run_migrations(pool.pool()).await;
            pool.close().await;
            result?;
            output::print_success("All migrations applied successfully.");
        }
    }

    Ok(())
}
