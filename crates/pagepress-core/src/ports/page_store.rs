//! Remote page store port (driven/secondary port)
//!
//! This module defines the interface for interacting with the remote page
//! store. The primary implementation targets the Confluence REST API in
//! `pagepress-confluence`, but the trait is store-agnostic: anything that
//! can search pages by title or label, create, update, delete, and attach
//! labels satisfies it.
//!
//! ## Design Notes
//!
//! - Uses `anyhow::Result` because errors at port boundaries are
//!   adapter-specific and don't need domain-level classification; the
//!   adapter's typed error (transport vs. remote status) travels inside.
//! - No retry semantics: every failure propagates unmodified to the
//!   caller, which aborts the run on the first one.
//! - Mutating calls (`create_page`, `update_page`, `delete_page`,
//!   `attach_label`) must never be issued concurrently by callers; the
//!   engine awaits each one before the next.

use crate::domain::newtypes::{PageId, SpaceKey};
use crate::domain::page::{RemotePage, SearchResults};

/// Port trait for remote page store operations
#[async_trait::async_trait]
pub trait RemotePageStore: Send + Sync {
    /// Searches the given space for pages with an exact title match.
    ///
    /// Titles are assumed unique per space; callers take the first result
    /// when the store reports more than one.
    async fn search_by_title(
        &self,
        space: &SpaceKey,
        title: &str,
    ) -> anyhow::Result<SearchResults>;

    /// Searches for all pages carrying the given label, across the store.
    async fn search_by_label(&self, label: &str) -> anyhow::Result<SearchResults>;

    /// Creates a new page.
    ///
    /// # Returns
    /// The created page as the store sees it, including its assigned id
    /// and initial version.
    async fn create_page(&self, page: &RemotePage) -> anyhow::Result<RemotePage>;

    /// Updates an existing page.
    ///
    /// The page must carry its store-assigned id and a version exactly one
    /// greater than the store's current version.
    async fn update_page(&self, page: &RemotePage) -> anyhow::Result<RemotePage>;

    /// Deletes a page by id.
    async fn delete_page(&self, id: &PageId) -> anyhow::Result<()>;

    /// Attaches a label to an existing page.
    async fn attach_label(&self, id: &PageId, label: &str) -> anyhow::Result<()>;
}
