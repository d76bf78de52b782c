//! Config command - view and manage pagepress configuration
//!
//! 1. Shows the current configuration (YAML or JSON)
//! 2. Sets individual configuration values via dot-notation keys
//! 3. Prints the configuration file location

use std::path::Path;

use anyhow::{Context, Result};
use clap::Subcommand;
use tracing::info;

use pagepress_core::config::{AuthType, Config};

use crate::output::{get_formatter, OutputFormat};

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Display current configuration
    Show,
    /// Set a configuration value
    Set {
        /// Configuration key (e.g., "publish.space")
        key: String,
        /// New value
        value: String,
    },
    /// Print the configuration file path
    Path,
}

impl ConfigCommand {
    pub async fn execute(&self, config_path: &Path, format: OutputFormat) -> Result<()> {
        match self {
            ConfigCommand::Show => self.execute_show(config_path, format),
            ConfigCommand::Set { key, value } => {
                self.execute_set(config_path, key, value, format)
            }
            ConfigCommand::Path => {
                println!("{}", config_path.display());
                Ok(())
            }
        }
    }

    fn execute_show(&self, config_path: &Path, format: OutputFormat) -> Result<()> {
        let formatter = get_formatter(format);
        let config = Config::load_or_default(config_path);

        info!(config_path = %config_path.display(), "Showing configuration");

        if matches!(format, OutputFormat::Json) {
            let json = serde_json::to_value(&config)
                .context("Failed to serialize configuration to JSON")?;
            formatter.print_json(&json);
        } else {
            formatter.success(&format!("Configuration ({})", config_path.display()));
            formatter.info("");
            let yaml = serde_yaml::to_string(&config)
                .context("Failed to serialize configuration to YAML")?;
            for line in yaml.lines() {
                formatter.info(line);
            }
        }
        Ok(())
    }

    fn execute_set(
        &self,
        config_path: &Path,
        key: &str,
        value: &str,
        format: OutputFormat,
    ) -> Result<()> {
        let formatter = get_formatter(format);
        let mut config = Config::load_or_default(config_path);

        info!(key = %key, "Setting configuration value");

        match apply_config_value(&mut config, key, value) {
            Ok(()) => {
                if let Some(parent) = config_path.parent() {
                    std::fs::create_dir_all(parent)
                        .context("Failed to create configuration directory")?;
                }
                let yaml = serde_yaml::to_string(&config)
                    .context("Failed to serialize configuration")?;
                std::fs::write(config_path, &yaml)
                    .context("Failed to write configuration file")?;

                if matches!(format, OutputFormat::Json) {
                    formatter.print_json(&serde_json::json!({
                        "success": true,
                        "key": key,
                        "value": value,
                        "config_path": config_path.display().to_string(),
                    }));
                } else {
                    formatter.success(&format!("Set {} = {}", key, value));
                    formatter.info(&format!("Saved to {}", config_path.display()));
                }
            }
            Err(e) => {
                formatter.error(&format!("Failed to set '{}': {}", key, e));
                formatter.info("");
                formatter.info("Supported keys:");
                formatter.info("  connection.host                - Page store base URL");
                formatter.info("  connection.api_base_path       - REST API base path");
                formatter.info("  connection.auth_type           - open|basic|bearer");
                formatter.info("  connection.username            - Basic auth username");
                formatter.info("  connection.password            - Basic auth password/token");
                formatter.info("  connection.bearer_token        - Bearer token");
                formatter.info("  publish.space                  - Target space key");
                formatter.info("  publish.root_ancestor_id       - Top-level parent page id");
                formatter.info("  publish.scope_filter           - Folder path to publish");
                formatter.info("  publish.marker_label           - Label marking published pages");
                formatter.info("  publish.note_header_text       - Text prepended to each note");
                formatter.info("  publish.folder_placeholder_body - Body of folder pages");
                formatter.info("  publish.delete_before_publish  - true|false");
                formatter.info("  logging.level                  - trace|debug|info|warn|error");
            }
        }
        Ok(())
    }
}

/// Apply a dot-notation key/value pair to a Config struct
fn apply_config_value(config: &mut Config, key: &str, value: &str) -> Result<()> {
    fn optional(value: &str) -> Option<String> {
        if value.is_empty() || value == "none" {
            None
        } else {
            Some(value.to_string())
        }
    }

    match key {
        "connection.host" => config.connection.host = value.to_string(),
        "connection.api_base_path" => config.connection.api_base_path = value.to_string(),
        "connection.auth_type" => {
            config.connection.auth_type = match value {
                "open" => AuthType::Open,
                "basic" => AuthType::Basic,
                "bearer" => AuthType::Bearer,
                _ => anyhow::bail!("Expected one of: open, basic, bearer"),
            };
        }
        "connection.username" => config.connection.username = optional(value),
        "connection.password" => config.connection.password = optional(value),
        "connection.bearer_token" => config.connection.bearer_token = optional(value),
        "publish.space" => config.publish.space = value.to_string(),
        "publish.root_ancestor_id" => config.publish.root_ancestor_id = optional(value),
        "publish.scope_filter" => config.publish.scope_filter = optional(value),
        "publish.marker_label" => config.publish.marker_label = value.to_string(),
        "publish.note_header_text" => config.publish.note_header_text = value.to_string(),
        "publish.folder_placeholder_body" => {
            config.publish.folder_placeholder_body = value.to_string();
        }
        "publish.delete_before_publish" => {
            config.publish.delete_before_publish = value
                .parse::<bool>()
                .context("Expected true or false")?;
        }
        "logging.level" => config.logging.level = value.to_string(),
        _ => anyhow::bail!("Unknown configuration key: '{}'", key),
    }
    Ok(())
}
