//! User management CLI commands.

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use codemedia_api::app::build_state;
use codemedia_core::config::AppConfig;
use codemedia_core::error::AppError;

use crate::output::{self, OutputFormat};

/// Arguments for user commands
#[derive(Debug, Args)]
pub struct UserArgs {
    /// User subcommand
    #[command(subcommand)]
    pub command: UserCommand,
}

/// User subcommands
#[derive(Debug, Subcommand)]
pub enum UserCommand {
    /// List all users
    List,
}

/// User display row for table output
#[derive(Debug, Serialize, Tabled)]
struct UserRow {
    id: String,
    username: String,
    email: String,
    role: String,
    created_at: String,
}

/// Execute user commands
pub async fn execute(
    args: &UserArgs,
    config: AppConfig,
    format: OutputFormat,
) -> Result<(), AppError> {
    let state = build_state(config).await?;

    match &args.command {
        UserCommand::List => {
            let rows: Vec<UserRow> = state
                .user_service
                .list_users()
                .await?
                .iter()
                .map(|u| UserRow {
                    id: u.id.to_string(),
                    username: u.username.clone(),
                    email: u.email.clone(),
                    role: u.role.to_string(),
                    created_at: u.created_at.format("%Y-%m-%d %H:%M").to_string(),
                })
                .collect();

            output::print_list(&rows, format);
        }
    }

    Ok(())
}
