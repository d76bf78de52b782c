//! Local tree port (driven/secondary port)
//!
//! This module defines the interface for enumerating the local documents
//! to publish. The filesystem implementation lives in
//! `pagepress-sync::vault`; engine tests substitute an in-memory tree.
//!
//! ## Design Notes
//!
//! - Read-only and executed once per run: the returned snapshot is
//!   immutable for the rest of the run, local edits after enumeration are
//!   not observed.
//! - Gathering document contents is the one place where parallel I/O is
//!   permitted (no shared mutable state, no ordering requirement), but
//!   implementations must return a deterministically ordered list.

use crate::domain::document::LocalDocument;
use crate::domain::newtypes::FolderPath;

/// Port trait for local document enumeration
#[async_trait::async_trait]
pub trait LocalTree: Send + Sync {
    /// Lists all documents, optionally restricted to a folder subtree.
    ///
    /// # Arguments
    /// * `scope` - When present, only documents whose folder is inside
    ///   this path (inclusive) are returned.
    async fn list_documents(
        &self,
        scope: Option<&FolderPath>,
    ) -> anyhow::Result<Vec<LocalDocument>>;
}
