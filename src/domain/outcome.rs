//! Per-item outcomes and the per-run aggregate.
//!
//! A `RunResult` is created when a run starts, updated between item
//! iterations, and reported once at the end. Nothing here persists
//! across runs.

use std::fmt;

/// Reason an item was skipped without an error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// No recognized external identifiers on the item
    NoIdentifiers,

    /// The description file already exists and overwrite was not requested
    AlreadyExists,

    /// The remote catalog reported no file location for the item
    NoLocation,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::NoIdentifiers => write!(f, "no recognized identifiers"),
            SkipReason::AlreadyExists => write!(f, "description file already exists"),
            SkipReason::NoLocation => write!(f, "no location reported"),
        }
    }
}

/// Outcome of processing a single item
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemOutcome {
    /// Description file was written (or would be, in a dry run)
    Written,

    /// Item processed but no file produced
    Skipped(SkipReason),

    /// Item failed; the run continues
    Failed(String),
}

/// A recorded per-item failure
#[derive(Debug, Clone)]
pub struct FailureRecord {
    /// Item title
    pub title: String,

    /// What went wrong
    pub reason: String,
}

/// Aggregate counters for one run
#[derive(Debug, Clone, Default)]
pub struct RunResult {
    /// Items seen, regardless of outcome
    pub processed: usize,

    /// Description files written (or simulated)
    pub written: usize,

    /// Items skipped without error
    pub skipped: usize,

    /// Items that failed
    pub failed: usize,

    /// One record per failed item
    pub failures: Vec<FailureRecord>,
}

impl RunResult {
    /// Create an empty result
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the outcome of one item
    pub fn record(&mut self, title: &str, outcome: &ItemOutcome) {
        self.processed += 1;
        match outcome {
            ItemOutcome::Written => self.written += 1,
            ItemOutcome::Skipped(_) => self.skipped += 1,
            ItemOutcome::Failed(reason) => {
                self.failed += 1;
                self.failures.push(FailureRecord {
                    title: title.to_string(),
                    reason: reason.clone(),
                });
            }
        }
    }
}

impl fmt::Display for RunResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "processed: {}, written: {}, skipped: {}, failed: {}",
            self.processed, self.written, self.skipped, self.failed
        )
    }
}
