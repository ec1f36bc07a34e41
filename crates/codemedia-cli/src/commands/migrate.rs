//! Database migration management commands.

use clap::{Args, Subcommand};

use codemedia_core::config::AppConfig;
use codemedia_core::error::AppError;
use codemedia_database::DatabasePool;
use codemedia_database::migration::run_migrations;

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
pub async fn execute(args: &MigrateArgs, config: AppConfig) -> Result<(), AppError> {
    match &args.command {
        MigrateCommand::Run => {
            let db = DatabasePool::connect(&config.database).await?;
            println!("Running database migrations...");
            let known = run_migrations(db.pool()).await?;
            db.close().await;
            output::print_success(&format!("Schema up to date ({known} migrations)."));
        }
    }
    Ok(())
}
