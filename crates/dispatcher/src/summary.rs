//! Scan summary

use crate::error::SoftFailure;

/// Outcome counts for one scan
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanSummary {
    /// Records handed to the dispatcher
    pub processed: usize,
    /// Records decoded successfully
    pub decoded: usize,
    /// Records with no value
    pub skipped: usize,
    /// Soft failures, in scan order
    pub failures: Vec<SoftFailure>,
}

impl ScanSummary {
    pub fn failure_count(&self) -> usize {
        self.failures.len()
    }

    /// Number of failures of the given [`SoftFailure::kind`]
    pub fn count_kind(&self, kind: &str) -> usize {
        self.failures.iter().filter(|f| f.kind() == kind).count()
    }
}
