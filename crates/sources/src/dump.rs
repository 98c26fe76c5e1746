//! Metric dump file source
//!
//! ```text
//! # comment
//! lmt_ost    2;oss1;0.5;12.0;lustre-OST0000;...
//! lmt_router 1;rtr1;1.0;2.0;123;
//! lmt_mdt
//! ```
//!
//! A line with a name and no value is a metric that has not been published yet.

use std::path::{Path, PathBuf};

use contracts::{ContractError, RawMetric, TelemetrySource};
use tracing::{debug, instrument};

/// Telemetry source reading a dump file on every fetch
#[derive(Debug, Clone)]
pub struct DumpTelemetrySource {
    path: PathBuf,
    name: String,
}

impl DumpTelemetrySource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = format!("dump:{}", path.display());
        Self { path, name }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TelemetrySource for DumpTelemetrySource {
    fn name(&self) -> &str {
        &self.name
    }

    #[instrument(name = "dump_source_fetch", skip(self), fields(path = %self.path.display()))]
    async fn fetch(&self, topics: &[&str]) -> Result<Vec<RawMetric>, ContractError> {
        let content = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| ContractError::TelemetryUnavailable {
                message: format!("cannot read {}: {e}", self.path.display()),
                source: Some(Box::new(e)),
            })?;
        let metrics: Vec<RawMetric> = parse_dump(&content)
            .into_iter()
            .filter(|m| topics.contains(&m.name.as_str()))
            .collect();
        debug!(count = metrics.len(), "Dump parsed");
        Ok(metrics)
    }
}

/// Parse dump text into metrics, in file order
pub fn parse_dump(content: &str) -> Vec<RawMetric> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(|line| match line.split_once(char::is_whitespace) {
            Some((name, value)) if !value.trim().is_empty() => {
                RawMetric::new(name, value.trim())
            }
            Some((name, _)) => RawMetric::empty(name),
            None => RawMetric::empty(line),
        })
        .collect()
}
