//! pagepress CLI - publish a Markdown vault to a Confluence space
//!
//! Provides commands for:
//! - Publishing the vault (create or update remote pages)
//! - Cleaning up previously published pages by marker label
//! - Viewing and editing configuration

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;
mod output;
mod progress;

use commands::{cleanup::CleanupCommand, config::ConfigCommand, publish::PublishCommand};
use output::OutputFormat;

#[derive(Debug, Parser)]
#[command(name = "pagepress", version, about = "Publish a Markdown vault to Confluence")]
pub struct Cli {
    /// Output in JSON format
    #[arg(long, global = true)]
    json: bool,

    /// Verbose output (can be repeated: -v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Use alternate config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Suppress the progress status line
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Publish the vault to the configured space
    Publish(PublishCommand),
    /// Delete every page carrying the marker label
    Cleanup(CleanupCommand),
    /// View and manage configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup tracing
    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let format = if cli.json {
        OutputFormat::Json
    } else {
        OutputFormat::Human
    };

    let config_path = cli
        .config
        .unwrap_or_else(pagepress_core::config::Config::default_path);

    match cli.command {
        Commands::Publish(cmd) => cmd.execute(&config_path, format, cli.quiet).await,
        Commands::Cleanup(cmd) => cmd.execute(&config_path, format, cli.quiet).await,
        Commands::Config(cmd) => cmd.execute(&config_path, format).await,
    }
}
