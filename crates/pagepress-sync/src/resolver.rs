//! Parent page resolution.
//!
//! Maps a [`FolderPath`] to the page id that documents in that folder
//! should hang under. Results are memoized for the lifetime of one run,
//! keyed on the full path so same-named folders under different parents
//! never share a cache slot. Resolution is recursive: a missing folder
//! page is created under its own (recursively resolved) parent.

use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use tracing::debug;

use pagepress_core::config::PublishConfig;
use pagepress_core::domain::newtypes::{FolderPath, PageId, SpaceKey};
use pagepress_core::ports::page_store::RemotePageStore;

use crate::builder;
use crate::SyncError;

/// Per-run parent resolver with a full-path memo.
pub struct ParentResolver {
    store: Arc<dyn RemotePageStore>,
    space: SpaceKey,
    /// Parent for root-level documents; `None` means the space root.
    root_ancestor: Option<PageId>,
    config: Arc<PublishConfig>,
    cache: HashMap<FolderPath, PageId>,
}

impl ParentResolver {
    pub fn new(
        store: Arc<dyn RemotePageStore>,
        space: SpaceKey,
        root_ancestor: Option<PageId>,
        config: Arc<PublishConfig>,
    ) -> Self {
        Self {
            store,
            space,
            root_ancestor,
            config,
            cache: HashMap::new(),
        }
    }

    /// Resolves the parent page id for documents in `folder`.
    ///
    /// Returns `None` only when `folder` is the vault root and no root
    /// ancestor is configured. Every store interaction happens at most
    /// once per distinct path per run; repeated calls hit the memo.
    pub async fn resolve(&mut self, folder: &FolderPath) -> Result<Option<PageId>, SyncError> {
        self.resolve_inner(folder.clone()).await
    }

    fn resolve_inner(
        &mut self,
        folder: FolderPath,
    ) -> Pin<Box<dyn Future<Output = Result<Option<PageId>, SyncError>> + Send + '_>> {
        Box::pin(async move {
            let Some(leaf) = folder.leaf().map(str::to_string) else {
                return Ok(self.root_ancestor.clone());
            };
            if let Some(id) = self.cache.get(&folder) {
                debug!(%folder, page_id = %id, "parent cache hit");
                return Ok(Some(id.clone()));
            }

            let found = self
                .store
                .search_by_title(&self.space, &leaf)
                .await
                .map_err(|source| SyncError::Resolution {
                    folder: folder.clone(),
                    source,
                })?;

            if let Some(page) = found.into_first() {
                let id = page.id.ok_or_else(|| SyncError::Resolution {
                    folder: folder.clone(),
                    source: anyhow::anyhow!("store returned a page without an id"),
                })?;
                debug!(%folder, page_id = %id, "adopted existing folder page");
                self.cache.insert(folder, id.clone());
                return Ok(Some(id));
            }

            // Missing: create the folder page under its own parent.
            let parent = match folder.parent() {
                Some(parent) => self.resolve_inner(parent).await?,
                None => self.root_ancestor.clone(),
            };
            let draft =
                builder::build_folder_page(&folder, parent.as_ref(), &self.space, &self.config);
            let created = self
                .store
                .create_page(&draft)
                .await
                .map_err(|source| SyncError::Resolution {
                    folder: folder.clone(),
                    source,
                })?;
            let id = created.id.ok_or_else(|| SyncError::Resolution {
                folder: folder.clone(),
                source: anyhow::anyhow!("store returned a created page without an id"),
            })?;
            self.store
                .attach_label(&id, &self.config.marker_label)
                .await
                .map_err(|source| SyncError::Resolution {
                    folder: folder.clone(),
                    source,
                })?;
            debug!(%folder, page_id = %id, "created folder page");
            self.cache.insert(folder, id.clone());
            Ok(Some(id))
        })
    }
}
