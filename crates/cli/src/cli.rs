//! CLI argument definitions using clap.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// lmtdiagnose - check that LMT telemetry decodes and the catalog lists file systems
#[derive(Parser, Debug)]
#[command(
    name = "lmtdiagnose",
    author,
    version,
    about = "Diagnose LMT telemetry and file system configuration",
    long_about = "Fetches every LMT metric, checks that each record carries a known \n\
                  version and decodes cleanly, then lists the file systems configured \n\
                  in the catalog. Problems are reported through the selected diagnostic \n\
                  destination; fatal problems exit with status 1."
)]
pub struct Cli {
    /// Only report this file system from the catalog
    #[arg(short, long, value_name = "NAME", env = "LMT_FILESYSTEM")]
    pub filesystem: Option<String>,

    /// Path to configuration file (TOML or JSON)
    #[arg(short, long, value_name = "PATH", env = "LMT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Diagnostic destination: stdout, stderr, cerebro, syslog[:facility[:level]] or a file path
    #[arg(long, value_name = "SELECTOR", env = "LMT_LOG_DEST")]
    pub log_dest: Option<String>,

    /// Read telemetry from a metric dump file
    #[arg(long, value_name = "PATH", env = "LMT_DUMP")]
    pub dump: Option<PathBuf>,

    /// Print the scan summary as JSON on stdout
    #[arg(long)]
    pub json: bool,

    /// Increase tracing verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, env = "LMT_VERBOSE")]
    pub verbose: u8,

    /// Only trace errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Tracing output format
    #[arg(long, value_enum, default_value = "compact", env = "LMT_LOG_FORMAT")]
    pub log_format: LogFormat,
}

impl Cli {
    /// Tracing settings derived from `-v`/`-q`/`--log-format`
    pub fn observability_config(&self) -> observability::ObservabilityConfig {
        let level = if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        };
        observability::ObservabilityConfig {
            log_format: self.log_format.into(),
            default_log_level: level.to_string(),
        }
    }
}

/// Log output format
#[derive(ValueEnum, Clone, Copy, Debug, Default)]
pub enum LogFormat {
    /// JSON structured logging
    Json,
    /// Human-readable pretty format
    Pretty,
    /// Compact single-line format
    #[default]
    Compact,
}

impl From<LogFormat> for observability::LogFormat {
    fn from(format: LogFormat) -> Self {
        match format {
            LogFormat::Json => Self::Json,
            LogFormat::Pretty => Self::Pretty,
            LogFormat::Compact => Self::Compact,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["lmtdiagnose"]).unwrap();
        assert!(cli.filesystem.is_none());
        assert!(cli.log_dest.is_none());
        assert!(!cli.json);
        let config = cli.observability_config();
        assert_eq!(config.default_log_level, "warn");
        assert_eq!(config.log_format, observability::LogFormat::Compact);
    }

    #[test]
    fn test_flags() {
        let cli = Cli::try_parse_from([
            "lmtdiagnose",
            "-f",
            "lustre1",
            "--log-dest",
            "syslog:local0",
            "--dump",
            "/tmp/metrics",
            "--json",
            "-vv",
            "--log-format",
            "json",
        ])
        .unwrap();
        assert_eq!(cli.filesystem.as_deref(), Some("lustre1"));
        assert_eq!(cli.log_dest.as_deref(), Some("syslog:local0"));
        assert!(cli.json);
        let config = cli.observability_config();
        assert_eq!(config.default_log_level, "debug");
        assert_eq!(config.log_format, observability::LogFormat::Json);
    }

    #[test]
    fn test_quiet_conflicts_with_verbose() {
        assert!(Cli::try_parse_from(["lmtdiagnose", "-q", "-v"]).is_err());
        let cli = Cli::try_parse_from(["lmtdiagnose", "-q"]).unwrap();
        assert_eq!(cli.observability_config().default_log_level, "error");
    }
}
