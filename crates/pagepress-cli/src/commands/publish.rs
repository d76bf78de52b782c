//! Publish command - push the vault to the configured space
//!
//! Wires up the Confluence adapter, the vault adapter, and the
//! orchestrator, runs one publish, and displays the report.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Args;
use tracing::info;

use pagepress_confluence::client::ConfluenceClient;
use pagepress_confluence::store::ConfluencePageStore;
use pagepress_core::config::Config;
use pagepress_sync::orchestrator::{PublishReport, SyncOrchestrator};
use pagepress_sync::vault::VaultTree;

use crate::output::{get_formatter, OutputFormat};
use crate::progress;

#[derive(Debug, Args)]
pub struct PublishCommand {
    /// Root directory of the vault to publish
    pub vault: PathBuf,

    /// Override the target space key
    #[arg(long)]
    pub space: Option<String>,

    /// Publish only documents under this folder path
    #[arg(long)]
    pub scope: Option<String>,

    /// Delete all previously published pages first
    #[arg(long)]
    pub purge: bool,
}

impl PublishCommand {
    pub async fn execute(
        &self,
        config_path: &Path,
        format: OutputFormat,
        quiet: bool,
    ) -> Result<()> {
        let formatter = get_formatter(format);

        // Overrides are applied before the config is frozen for the run.
        let mut config = Config::load_or_default(config_path);
        if let Some(space) = &self.space {
            config.publish.space = space.clone();
        }
        if let Some(scope) = &self.scope {
            config.publish.scope_filter = Some(scope.clone());
        }
        if self.purge {
            config.publish.delete_before_publish = true;
        }
        info!(config_path = %config_path.display(), "Loaded configuration");

        let space = config
            .publish
            .space_key()
            .context("No valid space configured; set publish.space or pass --space")?;

        let client = ConfluenceClient::from_config(&config.connection)
            .context("Failed to build page store client")?;
        let store = Arc::new(ConfluencePageStore::new(client, space));
        let tree = Arc::new(VaultTree::new(&self.vault));
        let reporter = progress::reporter(quiet, matches!(format, OutputFormat::Json));

        let orchestrator =
            SyncOrchestrator::new(store, tree, reporter, Arc::new(config.publish));

        let report = orchestrator.publish().await?;
        display_report(&*formatter, format, &report);
        Ok(())
    }
}

fn display_report(
    formatter: &dyn crate::output::OutputFormatter,
    format: OutputFormat,
    report: &PublishReport,
) {
    if matches!(format, OutputFormat::Json) {
        let json = serde_json::json!({
            "documents_total": report.documents_total,
            "pages_created": report.pages_created,
            "pages_updated": report.pages_updated,
            "pages_deleted": report.pages_deleted,
            "duration_ms": report.duration_ms,
        });
        formatter.print_json(&json);
        return;
    }

    let duration_display = if report.duration_ms >= 1000 {
        format!("{:.1}s", report.duration_ms as f64 / 1000.0)
    } else {
        format!("{}ms", report.duration_ms)
    };

    formatter.success(&format!(
        "Published {} document{} in {}",
        report.documents_total,
        if report.documents_total == 1 { "" } else { "s" },
        duration_display
    ));
    if report.pages_created > 0 {
        formatter.info(&format!("Created: {} page(s)", report.pages_created));
    }
    if report.pages_updated > 0 {
        formatter.info(&format!("Updated: {} page(s)", report.pages_updated));
    }
    if report.pages_deleted > 0 {
        formatter.info(&format!("Deleted: {} page(s)", report.pages_deleted));
    }
}
