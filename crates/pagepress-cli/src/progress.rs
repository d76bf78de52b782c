//! Terminal progress reporting.

use std::io::Write;
use std::sync::Arc;

use pagepress_core::ports::progress::{NullProgress, ProgressReporter};

/// Single status line on stderr, rewritten in place.
pub struct StatusLineProgress;

impl ProgressReporter for StatusLineProgress {
    fn begin(&self, total: usize) {
        if total > 0 {
            eprint!("\r\u{2601} 0/{total}");
            let _ = std::io::stderr().flush();
        }
    }

    fn advance(&self, processed: usize, total: usize, current: &str) {
        eprint!("\r\u{1b}[K\u{2601} {processed}/{total} {current}");
        let _ = std::io::stderr().flush();
    }

    fn clear(&self) {
        eprint!("\r\u{1b}[K");
        let _ = std::io::stderr().flush();
    }
}

/// Picks the status line unless output is quiet or machine-readable.
pub fn reporter(quiet: bool, json: bool) -> Arc<dyn ProgressReporter> {
    if quiet || json {
        Arc::new(NullProgress)
    } else {
        Arc::new(StatusLineProgress)
    }
}
