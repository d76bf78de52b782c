//! Bulk deletion of previously published pages.

use std::sync::Arc;

use tracing::{debug, info};

use pagepress_core::ports::page_store::RemotePageStore;
use pagepress_core::ports::progress::ProgressReporter;

use crate::SyncError;

/// Deletes every page carrying the marker label.
///
/// Deletions run strictly one at a time, in the order the store returned
/// them. The first failure aborts; already deleted pages stay deleted.
pub struct LifecycleManager {
    store: Arc<dyn RemotePageStore>,
    progress: Arc<dyn ProgressReporter>,
}

impl LifecycleManager {
    pub fn new(store: Arc<dyn RemotePageStore>, progress: Arc<dyn ProgressReporter>) -> Self {
        Self { store, progress }
    }

    /// Deletes all pages labelled `label` and returns how many were deleted.
    ///
    /// The label search is capped by the store, so search-and-delete
    /// passes repeat until the search comes back empty. On success no
    /// labelled page survives, regardless of how many there were.
    pub async fn delete_all(&self, label: &str) -> Result<u32, SyncError> {
        let mut deleted = 0u32;
        loop {
            let found = self
                .store
                .search_by_label(label)
                .await
                .map_err(SyncError::Store)?;
            if found.results.is_empty() {
                break;
            }

            let total = found.results.len();
            info!(label, total, "deleting previously published pages");
            self.progress.begin(total);

            for (index, page) in found.results.into_iter().enumerate() {
                let id = page.id.ok_or_else(|| {
                    SyncError::Store(anyhow::anyhow!(
                        "label search returned page {:?} without an id",
                        page.title
                    ))
                })?;
                self.store
                    .delete_page(&id)
                    .await
                    .map_err(SyncError::Store)?;
                deleted += 1;
                debug!(page_id = %id, title = %page.title, "deleted page");
                self.progress.advance(index + 1, total, &page.title);
            }
        }

        Ok(deleted)
    }
}
