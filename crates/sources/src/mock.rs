//! Mock collaborators
//!
//! Used for tests without a monitoring bus or relational store; failures can
//! be injected.

use std::sync::atomic::{AtomicUsize, Ordering};

use contracts::{CatalogParams, CatalogSource, ContractError, RawMetric, TelemetrySource};
use tracing::instrument;

use crate::catalog::SourceHandle;

/// Mock telemetry source
#[derive(Debug, Default)]
pub struct MockTelemetrySource {
    metrics: Vec<RawMetric>,
    /// Injected fetch failure
    failure: Option<String>,
    fetches: AtomicUsize,
}

impl MockTelemetrySource {
    /// Source that returns `metrics` (filtered by topic)
    pub fn new(metrics: Vec<RawMetric>) -> Self {
        Self {
            metrics,
            ..Default::default()
        }
    }

    /// Source whose every fetch fails with `message`
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            failure: Some(message.into()),
            ..Default::default()
        }
    }

    /// Number of fetch calls so far
    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

impl TelemetrySource for MockTelemetrySource {
    fn name(&self) -> &str {
        "mock"
    }

    #[instrument(name = "mock_telemetry_fetch", skip(self))]
    async fn fetch(&self, topics: &[&str]) -> Result<Vec<RawMetric>, ContractError> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        if let Some(message) = &self.failure {
            return Err(ContractError::telemetry_unavailable(message.clone()));
        }
        Ok(self
            .metrics
            .iter()
            .filter(|m| topics.contains(&m.name.as_str()))
            .cloned()
            .collect())
    }
}

/// Mock catalog
#[derive(Debug, Default)]
pub struct MockCatalog {
    filesystems: Vec<String>,
    failure: Option<String>,
    enumerations: AtomicUsize,
}

impl MockCatalog {
    pub fn new<I, S>(filesystems: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            filesystems: filesystems.into_iter().map(Into::into).collect(),
            ..Default::default()
        }
    }

    /// Catalog whose every enumeration fails with `message`
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            failure: Some(message.into()),
            ..Default::default()
        }
    }

    pub fn enumeration_count(&self) -> usize {
        self.enumerations.load(Ordering::SeqCst)
    }
}

impl CatalogSource for MockCatalog {
    type Handle = SourceHandle;

    fn label(&self) -> &str {
        "mysql"
    }

    #[instrument(name = "mock_catalog_enumerate", skip(self, _params))]
    async fn enumerate(&self, _params: &CatalogParams) -> Result<Vec<SourceHandle>, ContractError> {
        self.enumerations.fetch_add(1, Ordering::SeqCst);
        if let Some(message) = &self.failure {
            return Err(ContractError::catalog_unavailable(message.clone()));
        }
        Ok(self
            .filesystems
            .iter()
            .map(|name| SourceHandle::new(name.as_str()))
            .collect())
    }
}
