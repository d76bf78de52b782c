//! Remote page representation
//!
//! Port-level DTOs exchanged with the [`RemotePageStore`] port. These are
//! not wire types; the store adapter owns the JSON mapping.
//!
//! [`RemotePageStore`]: crate::ports::page_store::RemotePageStore

use serde::{Deserialize, Serialize};

use super::newtypes::{PageId, SpaceKey};

/// Body encoding expected by the page store.
///
/// The store accepts different representation tags depending on the
/// operation: new pages are submitted as `Storage`, content updates as
/// `Editor`. The asymmetry is required by the store, not a choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BodyRepresentation {
    /// Storage format, used when creating pages
    Storage,
    /// Editor format, used when updating page bodies
    Editor,
}

impl BodyRepresentation {
    /// Returns the wire tag for this representation
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            BodyRepresentation::Storage => "storage",
            BodyRepresentation::Editor => "editor",
        }
    }
}

/// Page body content with its representation tag
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageBody {
    /// Raw body content
    pub value: String,
    /// Encoding the store should interpret `value` as
    pub representation: BodyRepresentation,
}

impl PageBody {
    /// Creates a storage-format body (used for new pages)
    pub fn storage(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            representation: BodyRepresentation::Storage,
        }
    }

    /// Creates an editor-format body (used for updates)
    pub fn editor(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            representation: BodyRepresentation::Editor,
        }
    }
}

/// A page in the remote store.
///
/// `id` is `None` for pages built locally that the store has not assigned
/// an identity to yet; every page returned by the store carries one.
/// `version` is the store's optimistic-concurrency counter and must
/// increment by exactly one on every content update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemotePage {
    /// Store-assigned identity (`None` until created)
    pub id: Option<PageId>,
    /// Page title, unique per space by convention
    pub title: String,
    /// Space the page lives in
    pub space: SpaceKey,
    /// Single direct parent reference, `None` for space-root pages
    pub ancestor: Option<PageId>,
    /// Body content and encoding
    pub body: PageBody,
    /// Optimistic version counter (1 for new pages)
    pub version: u32,
    /// Labels attached to the page
    pub labels: Vec<String>,
}

/// Result of a store search (by title or by label)
#[derive(Debug, Clone, Default)]
pub struct SearchResults {
    /// Total number of matches reported by the store
    pub size: usize,
    /// Matched pages, in store order
    pub results: Vec<RemotePage>,
}

impl SearchResults {
    /// An empty result set
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Returns true if the search matched nothing
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Consumes the results and returns the first match, if any
    #[must_use]
    pub fn into_first(self) -> Option<RemotePage> {
        self.results.into_iter().next()
    }
}
