//! CLI command definitions and dispatch.

pub mod hash;
pub mod token;

use clap::{Parser, Subcommand};

use filegate_core::config::AppConfig;
use filegate_core::error::AppError;

/// FileGate — authentication gateway for a filesystem-scoped web service
#[derive(Debug, Parser)]
#[command(name = "filegate", version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "config/default.toml")]
    pub config: String,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Hash a password for an account entry
    Hash(hash::HashArgs),
    /// Mint a session token for a provisioned account
    Token(token::TokenArgs),
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(&self) -> Result<(), AppError> {
        match &self.command {
            Commands::Hash(args) => hash::execute(args, &self.config).await,
            Commands::Token(args) => token::execute(args, &self.config).await,
        }
    }
}

/// Helper: load configuration from file
pub fn load_config(config_path: &str) -> Result<AppConfig, AppError> {
    AppConfig::load(config_path)
}
