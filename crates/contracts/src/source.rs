//! TelemetrySource trait - Monitoring bus abstraction
//!
//! Real implementations talk to the cluster monitoring bus; file-backed and
//! mock sources implement the same interface.

use crate::{ContractError, RawMetric};

/// Telemetry source trait
///
/// Returns every published metric whose name is in `topics`. Failure means
/// the bus could not be queried at all.
#[trait_variant::make(TelemetrySource: Send)]
pub trait LocalTelemetrySource {
    /// Source name (used for logging)
    fn name(&self) -> &str;

    /// Fetch all metrics for the given topic names
    ///
    /// # Errors
    /// Returns an error when the source is unreachable
    async fn fetch(&self, topics: &[&str]) -> Result<Vec<RawMetric>, ContractError>;
}
