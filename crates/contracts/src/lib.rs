//! # Contracts
//!
//! Frozen interface contracts shared by the diagnose workspace: telemetry records,
//! decoder outcomes and the collaborator traits the dispatcher talks to.
//! All business crates can only depend on this crate, reverse dependencies are prohibited.
//!
//! ## Wire model
//! - A raw metric value is a `;`-delimited string whose first field is a decimal
//!   schema version (`"2;oss1;0.5;12.0;..."`)
//! - Routing is keyed by `(metric name, truncated integer version)`

mod catalog;
mod decoder;
mod error;
mod source;
mod telemetry;

pub use catalog::*;
pub use decoder::*;
pub use error::*;
pub use source::{LocalTelemetrySource, TelemetrySource};
pub use telemetry::*;
