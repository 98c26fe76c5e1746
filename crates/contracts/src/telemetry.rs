//! Telemetry records - Monitoring bus output
//!
//! Named, versioned raw metric strings and the routing key derived from them.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Metric names published by current LMT agents
pub const CURRENT_METRIC_NAMES: &[&str] = &["lmt_mdt", "lmt_ost", "lmt_router"];

/// Metric names published by legacy (LMT 2) agents
pub const LEGACY_METRIC_NAMES: &[&str] = &["lmt_oss", "lmt_mds"];

/// Current then legacy metric names, the default fetch set
pub const ALL_METRIC_NAMES: &[&str] = &["lmt_mdt", "lmt_ost", "lmt_router", "lmt_oss", "lmt_mds"];

/// A metric as delivered by a telemetry source, before version parsing.
///
/// Names are not unique: several nodes publish the same metric, possibly in
/// different schema generations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawMetric {
    /// Metric name (e.g. `lmt_ost`)
    pub name: String,

    /// Raw value, `None` when the publisher has not produced one yet
    pub value: Option<String>,
}

impl RawMetric {
    /// Create a metric carrying a value
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: Some(value.into()),
        }
    }

    /// Create a metric with no value
    pub fn empty(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: None,
        }
    }
}

/// Routing key: exact metric name plus truncated integer version
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MetricKey {
    pub name: String,
    pub version: i64,
}

impl MetricKey {
    pub fn new(name: impl Into<String>, version: i64) -> Self {
        Self {
            name: name.into(),
            version,
        }
    }
}

/// Renders as `<name>_v<version>`, the prefix used in diagnostics
impl fmt::Display for MetricKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_v{}", self.name, self.version)
    }
}

/// A metric whose version field has been parsed.
///
/// Scoped to one dispatch iteration.
#[derive(Debug, Clone, PartialEq)]
pub struct TelemetryRecord {
    /// Metric name
    pub name: String,

    /// Version as published (may be fractional, e.g. `2.1`)
    pub version: f64,

    /// Remainder of the raw value after the version field
    pub payload: String,
}

impl TelemetryRecord {
    /// Routing key, with the version truncated toward zero
    pub fn key(&self) -> MetricKey {
        MetricKey::new(self.name.clone(), self.version.trunc() as i64)
    }
}
