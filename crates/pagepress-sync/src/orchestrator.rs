//! Run orchestration.
//!
//! Drives one publish run end to end: optional pre-delete, document
//! enumeration, sequential reconciliation, progress flushes, and run
//! bookkeeping. Runs are serialized by an internal token; a second
//! request while one is in flight fails fast with
//! [`SyncError::AlreadyRunning`].

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;

use serde::Serialize;
use tracing::{error, info, instrument};

use pagepress_core::config::PublishConfig;
use pagepress_core::domain::run::SyncRun;
use pagepress_core::ports::local_tree::LocalTree;
use pagepress_core::ports::page_store::RemotePageStore;
use pagepress_core::ports::progress::ProgressReporter;

use crate::lifecycle::LifecycleManager;
use crate::reconciler::{ReconcileAction, Reconciler};
use crate::resolver::ParentResolver;
use crate::SyncError;

/// Outcome of a completed publish run.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PublishReport {
    pub pages_created: u32,
    pub pages_updated: u32,
    pub pages_deleted: u32,
    pub documents_total: usize,
    pub duration_ms: u64,
}

/// Drives publish runs against one store and one local tree.
pub struct SyncOrchestrator {
    store: Arc<dyn RemotePageStore>,
    tree: Arc<dyn LocalTree>,
    progress: Arc<dyn ProgressReporter>,
    config: Arc<PublishConfig>,
    running: AtomicBool,
}

impl SyncOrchestrator {
    pub fn new(
        store: Arc<dyn RemotePageStore>,
        tree: Arc<dyn LocalTree>,
        progress: Arc<dyn ProgressReporter>,
        config: Arc<PublishConfig>,
    ) -> Self {
        Self {
            store,
            tree,
            progress,
            config,
            running: AtomicBool::new(false),
        }
    }

    /// Runs one full publish and returns its report.
    ///
    /// The first error aborts the run; the progress display is cleared on
    /// both terminal paths and the run token is released either way.
    #[instrument(skip(self))]
    pub async fn publish(&self) -> Result<PublishReport, SyncError> {
        let _token = RunToken::acquire(&self.running).ok_or(SyncError::AlreadyRunning)?;

        let started = Instant::now();
        let mut run = SyncRun::new();
        info!(run_id = %run.id(), "starting publish run");

        let outcome = self.execute(&mut run).await;
        self.progress.clear();

        match outcome {
            Ok(mut report) => {
                run.complete()?;
                report.duration_ms = started.elapsed().as_millis() as u64;
                info!(
                    run_id = %run.id(),
                    created = report.pages_created,
                    updated = report.pages_updated,
                    deleted = report.pages_deleted,
                    duration_ms = report.duration_ms,
                    "publish run completed"
                );
                Ok(report)
            }
            Err(err) => {
                let reason = err.to_string();
                let _ = run.fail(&reason);
                error!(
                    run_id = %run.id(),
                    item = run.last_in_progress().unwrap_or("-"),
                    %reason,
                    "publish run failed"
                );
                Err(err)
            }
        }
    }

    async fn execute(&self, run: &mut SyncRun) -> Result<PublishReport, SyncError> {
        let space = self.config.space_key()?;
        let root_ancestor = self.config.root_ancestor()?;
        let scope = self.config.scope()?;

        let mut report = PublishReport::default();

        if self.config.delete_before_publish {
            let lifecycle = LifecycleManager::new(self.store.clone(), self.progress.clone());
            report.pages_deleted = lifecycle.delete_all(&self.config.marker_label).await?;
        }

        let docs = self
            .tree
            .list_documents(scope.as_ref())
            .await
            .map_err(SyncError::Vault)?;
        run.set_total(docs.len());
        report.documents_total = docs.len();
        self.progress.begin(docs.len());
        info!(documents = docs.len(), "enumerated local documents");

        let mut resolver = ParentResolver::new(
            self.store.clone(),
            space.clone(),
            root_ancestor,
            self.config.clone(),
        );
        let reconciler = Reconciler::new(self.store.clone(), space, self.config.clone());

        for doc in &docs {
            let path = doc.display_path();
            run.start_item(&path);
            match reconciler
                .reconcile(&mut resolver, doc)
                .await
                .map_err(|err| err.while_processing(&path))?
            {
                ReconcileAction::Created => report.pages_created += 1,
                ReconcileAction::Updated => report.pages_updated += 1,
            }
            run.finish_item();
            self.progress.advance(run.processed(), run.total(), &path);
        }

        Ok(report)
    }
}

/// RAII token serializing runs on one orchestrator.
struct RunToken<'a> {
    flag: &'a AtomicBool,
}

impl<'a> RunToken<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .ok()
            .map(|_| Self { flag })
    }
}

impl Drop for RunToken<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::SeqCst);
    }
}
