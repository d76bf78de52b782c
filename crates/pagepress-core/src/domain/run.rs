//! SyncRun domain entity
//!
//! This module defines the SyncRun entity which tracks the state and
//! progress of one publish run. A run is a transient aggregate: created
//! when the orchestrator starts, discarded once the final progress flush
//! has happened. It is never persisted across process restarts.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::errors::DomainError;
use super::newtypes::RunId;

/// Status of a sync run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RunStatus {
    /// Run is currently executing
    Running,
    /// Run processed every document without error
    Completed,
    /// Run aborted on the first unrecovered error
    Failed(String),
}

impl RunStatus {
    /// Returns true if the run is still in progress
    pub fn is_running(&self) -> bool {
        matches!(self, RunStatus::Running)
    }

    /// Returns true if the run has reached a terminal state
    pub fn is_finished(&self) -> bool {
        !self.is_running()
    }

    /// Returns true if the run failed
    pub fn is_failed(&self) -> bool {
        matches!(self, RunStatus::Failed(_))
    }
}

impl Default for RunStatus {
    fn default() -> Self {
        RunStatus::Running
    }
}

impl std::fmt::Display for RunStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RunStatus::Running => write!(f, "running"),
            RunStatus::Completed => write!(f, "completed"),
            RunStatus::Failed(msg) => write!(f, "failed: {}", msg),
        }
    }
}

/// Progress and outcome of one publish run.
///
/// Exclusively owned by a single orchestrator invocation; concurrent runs
/// are rejected before a second `SyncRun` ever exists.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SyncRun {
    id: RunId,
    status: RunStatus,
    /// Number of documents enumerated for this run
    total: usize,
    /// Number of documents fully reconciled so far
    processed: usize,
    /// Identity of the in-flight item, retained for diagnostics on failure
    last_in_progress: Option<String>,
    started_at: DateTime<Utc>,
    finished_at: Option<DateTime<Utc>>,
}

impl SyncRun {
    /// Creates a new running SyncRun
    pub fn new() -> Self {
        Self {
            id: RunId::new(),
            status: RunStatus::Running,
            total: 0,
            processed: 0,
            last_in_progress: None,
            started_at: Utc::now(),
            finished_at: None,
        }
    }

    /// Returns the run identifier
    pub fn id(&self) -> RunId {
        self.id
    }

    /// Returns the current status
    pub fn status(&self) -> &RunStatus {
        &self.status
    }

    /// Sets the total number of documents to process
    pub fn set_total(&mut self, total: usize) {
        self.total = total;
    }

    /// Returns the total number of documents
    pub fn total(&self) -> usize {
        self.total
    }

    /// Returns the number of documents processed so far
    pub fn processed(&self) -> usize {
        self.processed
    }

    /// Marks an item as in flight and returns a progress snapshot
    pub fn start_item(&mut self, item: impl Into<String>) {
        self.last_in_progress = Some(item.into());
    }

    /// Records completion of the in-flight item
    pub fn finish_item(&mut self) {
        self.processed += 1;
    }

    /// Returns the identity of the last in-flight item, if any
    pub fn last_in_progress(&self) -> Option<&str> {
        self.last_in_progress.as_deref()
    }

    /// Transitions `Running -> Completed`.
    ///
    /// # Errors
    /// Returns [`DomainError::InvalidState`] if the run already finished.
    pub fn complete(&mut self) -> Result<(), DomainError> {
        if self.status.is_finished() {
            return Err(DomainError::InvalidState {
                from: self.status.to_string(),
                to: "completed".to_string(),
            });
        }
        self.status = RunStatus::Completed;
        self.finished_at = Some(Utc::now());
        Ok(())
    }

    /// Transitions `Running -> Failed`, keeping the in-flight item.
    ///
    /// # Errors
    /// Returns [`DomainError::InvalidState`] if the run already finished.
    pub fn fail(&mut self, reason: impl Into<String>) -> Result<(), DomainError> {
        if self.status.is_finished() {
            return Err(DomainError::InvalidState {
                from: self.status.to_string(),
                to: "failed".to_string(),
            });
        }
        self.status = RunStatus::Failed(reason.into());
        self.finished_at = Some(Utc::now());
        Ok(())
    }

    /// Returns when the run started
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// Returns when the run finished, if it has
    pub fn finished_at(&self) -> Option<DateTime<Utc>> {
        self.finished_at
    }
}

impl Default for SyncRun {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_run_is_running() {
        let run = SyncRun::new();
        assert!(run.status().is_running());
        assert_eq!(run.processed(), 0);
        assert!(run.finished_at().is_none());
    }

    #[test]
    fn test_progress_accounting() {
        let mut run = SyncRun::new();
        run.set_total(2);
        run.start_item("/a");
        run.finish_item();
        assert_eq!(run.processed(), 1);
        assert_eq!(run.last_in_progress(), Some("/a"));
    }

    #[test]
    fn test_complete_transition() {
        let mut run = SyncRun::new();
        run.complete().unwrap();
        assert!(run.status().is_finished());
        assert!(run.finished_at().is_some());
        // Terminal states do not transition again
        assert!(run.fail("late").is_err());
    }

    #[test]
    fn test_fail_keeps_in_flight_item() {
        let mut run = SyncRun::new();
        run.start_item("/folder/a");
        run.fail("store unreachable").unwrap();
        assert!(run.status().is_failed());
        assert_eq!(run.last_in_progress(), Some("/folder/a"));
    }
}
