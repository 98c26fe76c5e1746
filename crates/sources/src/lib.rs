//! # Sources
//!
//! Concrete collaborators for the record dispatcher.
//!
//! - [`DumpTelemetrySource`]: metrics captured from the monitoring bus into a
//!   text file, one `name<whitespace>value` pair per line
//! - [`StaticCatalog`]: file systems listed in configuration
//! - [`MockTelemetrySource`] / [`MockCatalog`]: test doubles with failure injection
//!
//! ```ignore
//! use sources::DumpTelemetrySource;
//!
//! let source = DumpTelemetrySource::new("/var/tmp/cerebro.dump");
//! let metrics = source.fetch(contracts::ALL_METRIC_NAMES).await?;
//! ```

mod catalog;
mod dump;
mod mock;

pub use catalog::{SourceHandle, StaticCatalog};
pub use dump::{parse_dump, DumpTelemetrySource};
pub use mock::{MockCatalog, MockTelemetrySource};
