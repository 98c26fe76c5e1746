//! CatalogSource trait - configured data sources
//!
//! The catalog enumerates the file systems the relational store is configured
//! for. Handles stay owned by the caller of `enumerate`; the dispatcher only
//! reads their display names.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::ContractError;

/// Connection parameters for the catalog store
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogParams {
    pub host: String,
    /// `0` selects the client library default
    pub port: u16,
    pub user: String,
    pub password: Option<String>,
}

impl Default for CatalogParams {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: 0,
            user: "lwatchclient".to_string(),
            password: None,
        }
    }
}

impl fmt::Debug for CatalogParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CatalogParams")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("user", &self.user)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

/// Opaque handle to one configured data source
pub trait DataSourceHandle: Send + Sync {
    fn display_name(&self) -> &str;
}

/// Catalog source trait
#[trait_variant::make(CatalogSource: Send)]
pub trait LocalCatalogSource {
    type Handle: DataSourceHandle;

    /// Label used as the prefix of catalog diagnostics
    fn label(&self) -> &str;

    /// Enumerate configured data sources
    ///
    /// # Errors
    /// Returns an error when the store cannot be reached
    async fn enumerate(&self, params: &CatalogParams) -> Result<Vec<Self::Handle>, ContractError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_params() {
        let params = CatalogParams::default();
        assert_eq!(params.host, "localhost");
        assert_eq!(params.port, 0);
        assert_eq!(params.user, "lwatchclient");
        assert!(params.password.is_none());
    }

    #[test]
    fn test_debug_redacts_password() {
        let params = CatalogParams {
            password: Some("hunter2".to_string()),
            ..Default::default()
        };
        let rendered = format!("{params:?}");
        assert!(!rendered.contains("hunter2"));
        assert!(rendered.contains("<redacted>"));
    }
}
