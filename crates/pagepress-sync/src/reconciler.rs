//! Create-vs-update reconciliation for a single document.

use std::sync::Arc;

use tracing::debug;

use pagepress_core::config::PublishConfig;
use pagepress_core::domain::document::LocalDocument;
use pagepress_core::domain::newtypes::SpaceKey;
use pagepress_core::ports::page_store::RemotePageStore;

use crate::builder;
use crate::resolver::ParentResolver;
use crate::SyncError;

/// What the reconciler did with a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReconcileAction {
    Created,
    Updated,
}

/// Reconciles one local document against the remote store.
///
/// Existence is decided by title search within the target space. A miss
/// creates the page and attaches the marker label; a hit updates the
/// first result in place, preserving its remote identity.
pub struct Reconciler {
    store: Arc<dyn RemotePageStore>,
    space: SpaceKey,
    config: Arc<PublishConfig>,
}

impl Reconciler {
    pub fn new(
        store: Arc<dyn RemotePageStore>,
        space: SpaceKey,
        config: Arc<PublishConfig>,
    ) -> Self {
        Self {
            store,
            space,
            config,
        }
    }

    /// Publishes `doc`, creating or updating its remote page.
    ///
    /// The parent is resolved first, so a resolution failure aborts before
    /// any page mutation for this document.
    pub async fn reconcile(
        &self,
        resolver: &mut ParentResolver,
        doc: &LocalDocument,
    ) -> Result<ReconcileAction, SyncError> {
        let parent = resolver.resolve(&doc.folder).await?;

        let found = self
            .store
            .search_by_title(&self.space, &doc.title)
            .await
            .map_err(SyncError::Store)?;

        match found.into_first() {
            None => {
                let draft =
                    builder::build_new_page(doc, parent.as_ref(), &self.space, &self.config);
                let created = self
                    .store
                    .create_page(&draft)
                    .await
                    .map_err(SyncError::Store)?;
                let id = created.id.ok_or_else(|| {
                    SyncError::Store(anyhow::anyhow!("store returned a created page without an id"))
                })?;
                self.store
                    .attach_label(&id, &self.config.marker_label)
                    .await
                    .map_err(SyncError::Store)?;
                debug!(title = %doc.title, page_id = %id, "created page");
                Ok(ReconcileAction::Created)
            }
            Some(existing) => {
                let draft = builder::build_modified_page(&existing, doc, &self.config);
                let updated = self
                    .store
                    .update_page(&draft)
                    .await
                    .map_err(SyncError::Store)?;
                debug!(title = %doc.title, version = updated.version, "updated page");
                Ok(ReconcileAction::Updated)
            }
        }
    }
}
