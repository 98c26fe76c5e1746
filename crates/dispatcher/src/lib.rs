//! # Dispatcher
//!
//! Versioned record dispatch.
//!
//! Responsibilities:
//! - Fetch named metrics from a `TelemetrySource`
//! - Parse each record's leading version field
//! - Route `(name, truncated version)` to a decoder through `DecoderRegistry`
//! - Report per-record (soft) failures through the diagnostic sink and keep going
//! - Verify the catalog has configured data sources and list them
//!
//! Fatal conditions (unreachable telemetry, unreachable or empty catalog) are
//! returned as [`DispatchError`]; the caller reports them and exits.

pub mod dispatcher;
pub mod error;
pub mod registry;
pub mod summary;
pub mod version;

pub use contracts::{RawMetric, TelemetryRecord};
pub use dispatcher::{RecordDispatcher, RecordOutcome};
pub use error::{DispatchError, SoftFailure};
pub use registry::DecoderRegistry;
pub use summary::ScanSummary;
pub use version::parse_record;
