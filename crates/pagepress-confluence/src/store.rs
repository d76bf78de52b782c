//! ConfluencePageStore - RemotePageStore implementation for Confluence
//!
//! Wraps the [`ConfluenceClient`] and maps between port-level pages and
//! the wire DTOs to fulfil the [`RemotePageStore`] port contract.
//!
//! ## Design Notes
//!
//! - Holds the target space key so sparse search responses can be mapped
//!   back to complete `RemotePage` values.
//! - Errors cross the port boundary as `anyhow::Error` with the typed
//!   [`ConfluenceError`](crate::ConfluenceError) inside; callers that care
//!   can downcast, the engine treats them as opaque and aborts the run.

use anyhow::{Context, Result};
use tracing::debug;

use pagepress_core::domain::newtypes::{PageId, SpaceKey};
use pagepress_core::domain::page::{RemotePage, SearchResults};
use pagepress_core::ports::page_store::RemotePageStore;

use crate::client::ConfluenceClient;
use crate::wire;

/// Page store implementation that delegates to the Confluence REST API
pub struct ConfluencePageStore {
    client: ConfluenceClient,
    space: SpaceKey,
}

impl ConfluencePageStore {
    /// Creates a store adapter for the given client and target space
    pub fn new(client: ConfluenceClient, space: SpaceKey) -> Self {
        Self { client, space }
    }
}

#[async_trait::async_trait]
impl RemotePageStore for ConfluencePageStore {
    async fn search_by_title(&self, space: &SpaceKey, title: &str) -> Result<SearchResults> {
        let response = self
            .client
            .search_by_title(space, title)
            .await
            .with_context(|| format!("Title search failed for {title:?}"))?;
        debug!(title, size = response.size, "Title search returned");
        Ok(wire::results_from_response(response, space)?)
    }

    async fn search_by_label(&self, label: &str) -> Result<SearchResults> {
        let response = self
            .client
            .search_by_label(label)
            .await
            .with_context(|| format!("Label search failed for {label:?}"))?;
        debug!(label, size = response.size, "Label search returned");
        Ok(wire::results_from_response(response, &self.space)?)
    }

    async fn create_page(&self, page: &RemotePage) -> Result<RemotePage> {
        let created = self
            .client
            .create_page(&wire::content_from_page(page))
            .await
            .with_context(|| format!("Failed to create page {:?}", page.title))?;
        Ok(wire::page_from_content(created, &self.space)?)
    }

    async fn update_page(&self, page: &RemotePage) -> Result<RemotePage> {
        let id = page
            .id
            .as_ref()
            .ok_or_else(|| anyhow::anyhow!("Cannot update page without id: {:?}", page.title))?;
        let updated = self
            .client
            .update_page(id, &wire::content_from_page(page))
            .await
            .with_context(|| format!("Failed to update page {id}"))?;
        Ok(wire::page_from_content(updated, &self.space)?)
    }

    async fn delete_page(&self, id: &PageId) -> Result<()> {
        self.client
            .delete_page(id)
            .await
            .with_context(|| format!("Failed to delete page {id}"))?;
        Ok(())
    }

    async fn attach_label(&self, id: &PageId, label: &str) -> Result<()> {
        self.client
            .attach_label(id, label)
            .await
            .with_context(|| format!("Failed to attach label {label:?} to page {id}"))?;
        Ok(())
    }
}
