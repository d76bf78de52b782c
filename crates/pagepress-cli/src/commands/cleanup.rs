//! Cleanup command - bulk-delete previously published pages

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Args;
use tracing::info;

use pagepress_confluence::client::ConfluenceClient;
use pagepress_confluence::store::ConfluencePageStore;
use pagepress_core::config::Config;
use pagepress_sync::lifecycle::LifecycleManager;

use crate::output::{get_formatter, OutputFormat};
use crate::progress;

#[derive(Debug, Args)]
pub struct CleanupCommand {
    /// Delete pages carrying this label instead of the configured one
    #[arg(long)]
    pub label: Option<String>,
}

impl CleanupCommand {
    pub async fn execute(
        &self,
        config_path: &Path,
        format: OutputFormat,
        quiet: bool,
    ) -> Result<()> {
        let formatter = get_formatter(format);

        let config = Config::load_or_default(config_path);
        let label = self
            .label
            .clone()
            .unwrap_or_else(|| config.publish.marker_label.clone());
        let space = config
            .publish
            .space_key()
            .context("No valid space configured; set publish.space")?;
        info!(%label, "Cleaning up published pages");

        let client = ConfluenceClient::from_config(&config.connection)
            .context("Failed to build page store client")?;
        let store = Arc::new(ConfluencePageStore::new(client, space));
        let reporter = progress::reporter(quiet, matches!(format, OutputFormat::Json));

        let lifecycle = LifecycleManager::new(store, reporter.clone());
        let deleted = lifecycle.delete_all(&label).await?;
        reporter.clear();

        if matches!(format, OutputFormat::Json) {
            formatter.print_json(&serde_json::json!({
                "label": label,
                "pages_deleted": deleted,
            }));
        } else if deleted == 0 {
            formatter.success(&format!("No pages labelled '{label}' found"));
        } else {
            formatter.success(&format!(
                "Deleted {deleted} page{} labelled '{label}'",
                if deleted == 1 { "" } else { "s" }
            ));
        }
        Ok(())
    }
}
