//! Publish/reconciliation engine for pagepress.
//!
//! This crate turns a tree of local documents into a flat set of remote
//! pages. The pieces:
//!
//! - [`builder`]: pure functions that shape [`RemotePage`] drafts from
//!   local documents and folders
//! - [`resolver`]: maps folder paths to parent page ids, creating folder
//!   pages on demand and memoizing per run
//! - [`reconciler`]: decides create-vs-update for one document
//! - [`lifecycle`]: bulk deletion of previously published pages
//! - [`orchestrator`]: drives a whole run, serializing runs and tracking
//!   progress
//! - [`vault`]: filesystem adapter producing document snapshots
//!
//! [`RemotePage`]: pagepress_core::domain::page::RemotePage

pub mod builder;
pub mod lifecycle;
pub mod orchestrator;
pub mod reconciler;
pub mod resolver;
pub mod vault;

use pagepress_core::domain::errors::DomainError;
use pagepress_core::domain::newtypes::FolderPath;
use thiserror::Error;

/// Errors produced by the publish engine.
///
/// The first error aborts the run; nothing here is retried.
#[derive(Debug, Error)]
pub enum SyncError {
    /// A second run was requested while one was still in flight.
    #[error("a publish run is already in progress")]
    AlreadyRunning,

    /// A folder path could not be mapped to a parent page.
    #[error("could not resolve parent page for folder {folder}: {source}")]
    Resolution {
        folder: FolderPath,
        #[source]
        source: anyhow::Error,
    },

    /// A remote page store operation failed.
    #[error("page store operation failed: {0:#}")]
    Store(#[source] anyhow::Error),

    /// Enumerating or reading the local tree failed.
    #[error("local tree enumeration failed: {0:#}")]
    Vault(#[source] anyhow::Error),

    /// The run aborted while a specific document was in flight.
    #[error("run aborted while processing {item}: {source}")]
    Aborted {
        item: String,
        #[source]
        source: Box<SyncError>,
    },

    /// A domain invariant was violated.
    #[error(transparent)]
    Domain(#[from] DomainError),
}

impl SyncError {
    /// Wraps this error with the identity of the in-flight document.
    #[must_use]
    pub fn while_processing(self, item: impl Into<String>) -> Self {
        SyncError::Aborted {
            item: item.into(),
            source: Box::new(self),
        }
    }
}
