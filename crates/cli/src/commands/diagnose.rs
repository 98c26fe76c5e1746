//! Diagnose command implementation.
//!
//! Sequence: load config, select the diagnostic destination, scan telemetry,
//! check the catalog.

use serde::Serialize;
use tracing::{debug, info};

use config_loader::{ConfigLoader, DiagnoseConfig};
use contracts::TelemetrySource;
use diagnostics::DiagnosticSink;
use dispatcher::{DecoderRegistry, RecordDispatcher};
use sources::{DumpTelemetrySource, StaticCatalog};

use crate::cli::Cli;
use crate::error::{CliError, Result};

/// Scan result for `--json` output
#[derive(Debug, Serialize)]
pub struct DiagnoseReport {
    pub destination: String,
    pub telemetry_source: String,
    pub processed: usize,
    pub decoded: usize,
    pub skipped: usize,
    pub failures: Vec<String>,
    pub file_systems: Vec<String>,
}

/// Run one diagnosis against `sink`
///
/// An invalid destination selector exits through the sink before any scan.
///
/// # Errors
/// Fatal conditions only; soft failures are reported as they occur and
/// counted in the report.
pub async fn run_diagnose(cli: &Cli, sink: &DiagnosticSink) -> Result<DiagnoseReport> {
    let config = load_config(cli)?;

    let dest = cli.log_dest.as_deref().unwrap_or(&config.log.dest);
    sink.select_destination_or_exit(dest);
    debug!(destination = %sink.current_destination(), "Diagnostic destination selected");

    let dump = cli
        .dump
        .as_ref()
        .or(config.telemetry.dump.as_ref())
        .ok_or(CliError::NoTelemetrySource)?;
    let source = DumpTelemetrySource::new(dump);
    let topics: Vec<&str> = config.telemetry.metrics.iter().map(String::as_str).collect();

    let dispatcher = RecordDispatcher::new(DecoderRegistry::builtin(), sink);
    let summary = dispatcher.scan(&source, &topics).await?;

    let catalog = StaticCatalog::new(config.catalog.filesystems.iter().cloned());
    let file_systems = dispatcher
        .check_catalog(&catalog, &config.catalog.params(), cli.filesystem.as_deref())
        .await?;

    info!(
        decoded = summary.decoded,
        failures = summary.failure_count(),
        file_systems = file_systems.len(),
        "Diagnosis complete"
    );

    Ok(DiagnoseReport {
        destination: sink.current_destination(),
        telemetry_source: source.name().to_string(),
        processed: summary.processed,
        decoded: summary.decoded,
        skipped: summary.skipped,
        failures: summary.failures.iter().map(ToString::to_string).collect(),
        file_systems,
    })
}

fn load_config(cli: &Cli) -> Result<DiagnoseConfig> {
    let Some(path) = &cli.config else {
        return Ok(DiagnoseConfig::default());
    };
    info!(config = %path.display(), "Loading configuration");
    ConfigLoader::load_from_path(path).map_err(|e| CliError::config(path.display().to_string(), e))
}
