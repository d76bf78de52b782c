//! Draft construction for remote pages.
//!
//! Pure functions that shape [`RemotePage`] values for the store adapter.
//! The representation asymmetry lives here: brand-new pages carry the
//! `storage` representation, modified pages the `editor` representation,
//! matching what the store expects for each operation.

use pagepress_core::config::PublishConfig;
use pagepress_core::domain::document::LocalDocument;
use pagepress_core::domain::newtypes::{FolderPath, PageId, SpaceKey};
use pagepress_core::domain::page::{PageBody, RemotePage};

/// Builds a draft for a page that does not exist remotely yet.
///
/// The body is the configured header text followed by the raw note
/// content. Version starts at 1. The draft carries no labels; the
/// marker label is attached in a separate call after creation.
#[must_use]
pub fn build_new_page(
    doc: &LocalDocument,
    parent: Option<&PageId>,
    space: &SpaceKey,
    config: &PublishConfig,
) -> RemotePage {
    RemotePage {
        id: None,
        title: doc.title.clone(),
        space: space.clone(),
        ancestor: parent.cloned(),
        body: PageBody::storage(note_body(doc, config)),
        version: 1,
        labels: vec![],
    }
}

/// Builds an update draft from the remotely found page and the local note.
///
/// Keeps the remote identity (id, ancestor) and bumps the version counter
/// by one so the store's optimistic concurrency check accepts the write.
/// The body is always replaced, even if nothing changed locally.
#[must_use]
pub fn build_modified_page(
    existing: &RemotePage,
    doc: &LocalDocument,
    config: &PublishConfig,
) -> RemotePage {
    RemotePage {
        id: existing.id.clone(),
        title: doc.title.clone(),
        space: existing.space.clone(),
        ancestor: existing.ancestor.clone(),
        body: PageBody::editor(note_body(doc, config)),
        version: existing.version + 1,
        labels: existing.labels.clone(),
    }
}

/// Builds a draft for a synthetic folder page.
///
/// Titled after the folder's own name, with the configured placeholder
/// body. The marker label is attached after creation, like for notes.
#[must_use]
pub fn build_folder_page(
    folder: &FolderPath,
    parent: Option<&PageId>,
    space: &SpaceKey,
    config: &PublishConfig,
) -> RemotePage {
    RemotePage {
        id: None,
        title: folder.leaf().unwrap_or_default().to_string(),
        space: space.clone(),
        ancestor: parent.cloned(),
        body: PageBody::storage(config.folder_placeholder_body.clone()),
        version: 1,
        labels: vec![],
    }
}

fn note_body(doc: &LocalDocument, config: &PublishConfig) -> String {
    format!("{}{}", config.note_header_text, doc.content)
}
