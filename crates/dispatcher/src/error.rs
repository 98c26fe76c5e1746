//! Dispatcher error types
//!
//! Two tiers: [`DispatchError`] aborts the scan, [`SoftFailure`] covers one
//! record and never does. The `Display` text of both is the diagnostic line
//! body.

use contracts::{ContractError, MetricKey};
use thiserror::Error;

/// Fatal dispatcher errors
#[derive(Debug, Error)]
pub enum DispatchError {
    /// Telemetry source could not be queried
    #[error("{topics}: {source}")]
    TelemetryUnavailable {
        topics: String,
        #[source]
        source: ContractError,
    },

    /// Catalog source could not be reached
    #[error("{source}")]
    CatalogUnavailable {
        #[source]
        source: ContractError,
    },

    /// Catalog reachable but lists no data sources
    #[error("{label} has no file systems configured")]
    EmptyCatalog { label: String },

    /// Filesystem filter names nothing in the catalog
    #[error("file system {name} is not configured")]
    FilesystemNotConfigured { name: String },
}

impl DispatchError {
    pub fn telemetry_unavailable(topics: &[&str], source: ContractError) -> Self {
        Self::TelemetryUnavailable {
            topics: topics.join(","),
            source,
        }
    }

    pub fn catalog_unavailable(source: ContractError) -> Self {
        Self::CatalogUnavailable { source }
    }

    pub fn empty_catalog(label: impl Into<String>) -> Self {
        Self::EmptyCatalog {
            label: label.into(),
        }
    }

    pub fn filesystem_not_configured(name: impl Into<String>) -> Self {
        Self::FilesystemNotConfigured { name: name.into() }
    }
}

/// Per-record failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SoftFailure {
    /// Leading version field is not a number
    #[error("{name}: error parsing metric version")]
    MalformedVersion { name: String },

    /// No decoder registered for `(name, version)`
    #[error("{key}: unknown metric version")]
    UnknownVersion { key: MetricKey },

    /// Decoder rejected the payload
    #[error("{key}: {reason}")]
    Decode { key: MetricKey, reason: String },
}

impl SoftFailure {
    /// Short label for metrics
    pub fn kind(&self) -> &'static str {
        match self {
            Self::MalformedVersion { .. } => "malformed_version",
            Self::UnknownVersion { .. } => "unknown_version",
            Self::Decode { .. } => "decode",
        }
    }
}
