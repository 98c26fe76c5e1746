//! RecordDispatcher - fetch, version-parse, route, decode

use contracts::{
    CatalogParams, CatalogSource, DataSourceHandle, MetricFields, MetricKey, RawMetric,
    TelemetrySource,
};
use diagnostics::{errno, DiagnosticSink};
use tracing::{debug, info, instrument};

use crate::error::{DispatchError, SoftFailure};
use crate::registry::DecoderRegistry;
use crate::summary::ScanSummary;
use crate::version::parse_record;

/// Result of dispatching one raw metric
#[derive(Debug)]
pub enum RecordOutcome {
    Decoded { key: MetricKey, fields: MetricFields },
    /// Metric carried no value
    Skipped,
    Failed(SoftFailure),
}

/// Routes telemetry records to decoders and reports outcomes
pub struct RecordDispatcher<'a> {
    registry: DecoderRegistry,
    sink: &'a DiagnosticSink,
}

impl<'a> RecordDispatcher<'a> {
    pub fn new(registry: DecoderRegistry, sink: &'a DiagnosticSink) -> Self {
        Self { registry, sink }
    }

    pub fn registry(&self) -> &DecoderRegistry {
        &self.registry
    }

    /// Fetch every metric named in `topics`
    ///
    /// # Errors
    /// [`DispatchError::TelemetryUnavailable`] when the source cannot be queried
    #[instrument(name = "dispatcher_fetch_all", skip(self, source), fields(source = %source.name()))]
    pub async fn fetch_all<S: TelemetrySource>(
        &self,
        source: &S,
        topics: &[&str],
    ) -> Result<Vec<RawMetric>, DispatchError> {
        let metrics = source
            .fetch(topics)
            .await
            .map_err(|e| DispatchError::telemetry_unavailable(topics, e))?;
        debug!(count = metrics.len(), "Telemetry fetched");
        Ok(metrics)
    }

    /// Version-parse, route and decode one metric
    ///
    /// Soft failures are reported through the sink before returning.
    pub fn dispatch(&self, metric: &RawMetric) -> RecordOutcome {
        let outcome = match metric.value.as_deref() {
            None => {
                debug!(name = %metric.name, "Metric has no value, skipping");
                RecordOutcome::Skipped
            }
            Some(raw) => match self.route(&metric.name, raw) {
                Ok((key, fields)) => RecordOutcome::Decoded { key, fields },
                Err(failure) => {
                    self.sink.report(&failure.to_string());
                    RecordOutcome::Failed(failure)
                }
            },
        };
        observability::record_outcome(outcome_kind(&outcome));
        outcome
    }

    fn route(&self, name: &str, raw: &str) -> Result<(MetricKey, MetricFields), SoftFailure> {
        let record = parse_record(name, raw)?;
        let key = record.key();
        let decoder = self
            .registry
            .get(&key)
            .ok_or_else(|| SoftFailure::UnknownVersion { key: key.clone() })?;

        match decoder.decode(&record.payload) {
            Ok(fields) => {
                debug!(key = %key, fields = fields.len(), "Record decoded");
                Ok((key, fields))
            }
            Err(failure) => {
                let reason = failure
                    .reason()
                    .map(str::to_string)
                    .unwrap_or_else(errno::describe_last);
                Err(SoftFailure::Decode { key, reason })
            }
        }
    }

    /// Dispatch a fetched batch; every record is processed independently
    pub fn dispatch_all(&self, metrics: &[RawMetric]) -> ScanSummary {
        let mut summary = ScanSummary::default();
        for metric in metrics {
            summary.processed += 1;
            match self.dispatch(metric) {
                RecordOutcome::Decoded { .. } => summary.decoded += 1,
                RecordOutcome::Skipped => summary.skipped += 1,
                RecordOutcome::Failed(failure) => summary.failures.push(failure),
            }
        }
        summary
    }

    /// Fetch then dispatch every record
    ///
    /// # Errors
    /// Only a failed fetch; per-record failures are in the summary
    #[instrument(name = "dispatcher_scan", skip(self, source))]
    pub async fn scan<S: TelemetrySource>(
        &self,
        source: &S,
        topics: &[&str],
    ) -> Result<ScanSummary, DispatchError> {
        let metrics = self.fetch_all(source, topics).await?;
        let summary = self.dispatch_all(&metrics);
        info!(
            processed = summary.processed,
            decoded = summary.decoded,
            skipped = summary.skipped,
            failures = summary.failure_count(),
            "Telemetry scan complete"
        );
        Ok(summary)
    }

    /// Verify the catalog lists data sources and report each one
    ///
    /// With `filter`, only the named source is reported. Returns the reported
    /// names.
    ///
    /// # Errors
    /// Unreachable catalog, empty catalog, or a filter matching nothing. No
    /// source line is reported in any error case.
    #[instrument(name = "dispatcher_check_catalog", skip(self, catalog, params))]
    pub async fn check_catalog<C: CatalogSource>(
        &self,
        catalog: &C,
        params: &CatalogParams,
        filter: Option<&str>,
    ) -> Result<Vec<String>, DispatchError> {
        let handles = catalog
            .enumerate(params)
            .await
            .map_err(DispatchError::catalog_unavailable)?;
        if handles.is_empty() {
            debug!(label = %catalog.label(), "Catalog is empty");
            return Err(DispatchError::empty_catalog(catalog.label()));
        }

        let names: Vec<String> = handles
            .iter()
            .map(|handle| handle.display_name())
            .filter(|name| filter.is_none_or(|wanted| wanted == *name))
            .map(str::to_string)
            .collect();
        if let (Some(wanted), true) = (filter, names.is_empty()) {
            return Err(DispatchError::filesystem_not_configured(wanted));
        }

        for name in &names {
            self.sink.report(&format!("{}: {}", catalog.label(), name));
        }
        observability::record_catalog_sources(names.len());
        Ok(names)
    }
}

fn outcome_kind(outcome: &RecordOutcome) -> &'static str {
    match outcome {
        RecordOutcome::Decoded { .. } => "decoded",
        RecordOutcome::Skipped => "skipped",
        RecordOutcome::Failed(failure) => failure.kind(),
    }
}
