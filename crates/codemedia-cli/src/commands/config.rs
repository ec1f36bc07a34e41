//! Configuration inspection commands.

use clap::{Args, Subcommand};

use codemedia_core::config::AppConfig;
use codemedia_core::error::AppError;
use codemedia_database::connection::mask_password;

use crate::output::{self, OutputFormat};

/// Arguments for config commands
#[derive(Debug, Args)]
pub struct ConfigArgs {
    /// Config subcommand
    #[command(subcommand)]
    pub command: ConfigCommand,
}

/// Config subcommands
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show the effective configuration with secrets masked
    Show,
}

/// Execute config commands
pub fn execute(args: &ConfigArgs, config: AppConfig, format: OutputFormat) -> Result<(), AppError> {
    match &args.command {
        ConfigCommand::Show => {
            let masked = masked(config);
            if format == OutputFormat::Table {
                output::print_kv("server", &masked.server.bind_addr());
                output::print_kv("database", &masked.database.url);
                output::print_kv("token ttl (hours)", &masked.auth.token_ttl_hours.to_string());
                output::print_kv("share ttl (minutes)", &masked.share.ttl_minutes.to_string());
                output::print_kv("share code length", &masked.share.code_length.to_string());
                output::print_kv("conceal expired", &masked.share.conceal_expired.to_string());
                output::print_kv("log level", &masked.logging.level);
            } else {
                output::print_item(&masked, format);
            }
        }
    }
    Ok(())
}

fn masked(mut config: AppConfig) -> AppConfig {
    config.auth.jwt_secret = "********".to_string();
    config.database.url = mask_password(&config.database.url);
    config
}
