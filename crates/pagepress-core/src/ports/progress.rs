//! Progress reporting port (driven/secondary port)
//!
//! This module defines the interface for displaying run progress to the
//! user. The CLI implements a status-line reporter; engine tests use a
//! recording fake. Reporting is fire-and-forget: failures to display
//! progress never affect the run.

/// Port trait for progress display
///
/// The orchestrator calls `begin` once per run, `advance` after every
/// processed item (documents during publishing, pages during cleanup),
/// and `clear` exactly once when the run reaches a terminal state.
pub trait ProgressReporter: Send + Sync {
    /// Announces the start of a run with the total number of items
    fn begin(&self, total: usize);

    /// Reports that `processed` of `total` items are done and names the
    /// item currently in flight
    fn advance(&self, processed: usize, total: usize, current: &str);

    /// Final flush; called on both terminal states
    fn clear(&self);
}

/// A reporter that discards all progress events
#[derive(Debug, Clone, Copy, Default)]
pub struct NullProgress;

impl ProgressReporter for NullProgress {
    fn begin(&self, _total: usize) {}
    fn advance(&self, _processed: usize, _total: usize, _current: &str) {}
    fn clear(&self) {}
}
