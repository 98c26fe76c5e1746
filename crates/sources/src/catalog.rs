//! Configuration-backed catalog

use contracts::{CatalogParams, CatalogSource, ContractError, DataSourceHandle};
use tracing::{debug, instrument};

/// Handle to one configured file system
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceHandle {
    name: String,
}

impl SourceHandle {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl DataSourceHandle for SourceHandle {
    fn display_name(&self) -> &str {
        &self.name
    }
}

/// Catalog whose file systems are listed in configuration
#[derive(Debug, Clone)]
pub struct StaticCatalog {
    label: String,
    filesystems: Vec<String>,
}

impl StaticCatalog {
    /// Catalog labelled `mysql`, the label existing tooling scrapes for
    pub fn new<I, S>(filesystems: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            label: "mysql".to_string(),
            filesystems: filesystems.into_iter().map(Into::into).collect(),
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }
}

impl CatalogSource for StaticCatalog {
    type Handle = SourceHandle;

    fn label(&self) -> &str {
        &self.label
    }

    #[instrument(name = "static_catalog_enumerate", skip(self), fields(label = %self.label))]
    async fn enumerate(&self, params: &CatalogParams) -> Result<Vec<SourceHandle>, ContractError> {
        debug!(host = %params.host, count = self.filesystems.len(), "Listing configured file systems");
        Ok(self
            .filesystems
            .iter()
            .map(|name| SourceHandle::new(name.as_str()))
            .collect())
    }
}
