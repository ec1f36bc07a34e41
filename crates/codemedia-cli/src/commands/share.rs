//! Share code inspection commands.

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use codemedia_api::app::build_state;
use codemedia_core::config::AppConfig;
use codemedia_core::error::AppError;
use codemedia_service::share::ShareListing;

use crate::output::{self, OutputFormat};

/// Arguments for share commands
#[derive(Debug, Args)]
pub struct ShareArgs {
    /// Share subcommand
    #[command(subcommand)]
    pub command: ShareCommand,
}

/// Share subcommands
#[derive(Debug, Subcommand)]
pub enum ShareCommand {
    /// List snippets whose stored state is shared
    List,
    /// Resolve a code the way a visitor would, resetting it if it expired
    Inspect {
        /// The share code
        code: String,
    },
}

/// Share display row for table output
#[derive(Debug, Serialize, Tabled)]
struct ShareRow {
    snippet_id: String,
    title: String,
    code: String,
    created_at: String,
    expires_at: String,
    expired: bool,
}

impl From<&ShareListing> for ShareRow {
    fn from(listing: &ShareListing) -> Self {
        let shared = &listing.snippet.shared;
        let fmt = |t: Option<chrono::DateTime<chrono::Utc>>| {
            t.map(|t| t.format("%Y-%m-%d %H:%M:%S").to_string())
                .unwrap_or_default()
        };
        Self {
            snippet_id: listing.snippet.id.to_string(),
            title: listing.snippet.title.clone(),
            code: shared.code.clone().unwrap_or_default(),
            created_at: fmt(shared.created_at),
            expires_at: fmt(shared.code_expires_at),
            expired: listing.expired,
        }
    }
}

/// Execute share commands
pub async fn execute(
    args: &ShareArgs,
    config: AppConfig,
    format: OutputFormat,
) -> Result<(), AppError> {
    let state = build_state(config).await?;

    match &args.command {
        ShareCommand::List => {
            let listings = state.share_manager.list_shares().await?;
            let rows: Vec<ShareRow> = listings.iter().map(ShareRow::from).collect();
            output::print_list(&rows, format);
        }
        ShareCommand::Inspect { code } => {
            let owned = state.share_manager.resolve_share_code(code).await?;
            let snippet = &owned.snippet;
            if format == OutputFormat::Table {
                output::print_success(&format!("Code '{code}' is active"));
                output::print_kv("snippet", &snippet.id.to_string());
                output::print_kv("title", &snippet.title);
                output::print_kv("language", &snippet.language);
                output::print_kv(
                    "owner",
                    owned.owner.as_ref().map(|o| o.username.as_str()).unwrap_or("-"),
                );
                if let Some(expires) = snippet.shared.code_expires_at {
                    output::print_kv("expires at", &expires.to_rfc3339());
                }
            } else {
                output::print_item(&owned, format);
            }
        }
    }

    Ok(())
}
