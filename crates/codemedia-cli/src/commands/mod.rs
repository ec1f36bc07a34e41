//! CLI command definitions and dispatch.

pub mod config;
pub mod migrate;
pub mod serve;
pub mod share;
pub mod user;

use clap::{Parser, Subcommand};

use codemedia_core::config::AppConfig;
use codemedia_core::error::AppError;

use crate::output::OutputFormat;

/// CodeMedia: code snippet sharing for classrooms
#[derive(Debug, Parser)]
#[command(name = "codemedia", version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "config/default.toml")]
    pub config: String,

    /// Environment overlay loaded from `config/<env>.toml`
    #[arg(short, long, default_value = "development")]
    pub env: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Start the HTTP server
    Serve(serve::ServeArgs),
    /// Database migration management
    Migrate(migrate::MigrateArgs),
    /// Configuration inspection
    Config(config::ConfigArgs),
    /// User management
    User(user::UserArgs),
    /// Share code inspection
    Share(share::ShareArgs),
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(&self) -> Result<(), AppError> {
        let config = AppConfig::load(&self.config, &self.env)?;
        match &self.command {
            Commands::Serve(args) => serve::execute(args, config).await,
            Commands::Migrate(args) => migrate::execute(args, config).await,
            Commands::Config(args) => config::execute(args, config, self.format),
            Commands::User(args) => user::execute(args, config, self.format).await,
            Commands::Share(args) => share::execute(args, config, self.format).await,
        }
    }
}
