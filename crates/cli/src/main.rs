//! # lmtdiagnose
//!
//! 命令行接口入口点。
//!
//! 提供：
//! - 配置加载与诊断目标选择
//! - 遥测扫描 (逐条版本路由与解码)
//! - 目录中文件系统配置检查
//!
//! 致命错误经诊断目标报告后以状态 1 退出。

mod cli;
mod commands;
mod error;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use cli::Cli;
use commands::run_diagnose;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    observability::init_with_config(cli.observability_config())
        .context("Failed to initialize logging")?;

    let program = std::env::args_os()
        .next()
        .map(|arg| arg.to_string_lossy().into_owned())
        .unwrap_or_default();
    let sink = diagnostics::init(&program);

    info!(
        version = env!("CARGO_PKG_VERSION"),
        program = sink.program(),
        "lmtdiagnose starting"
    );

    let report = match run_diagnose(&cli, sink).await {
        Ok(report) => report,
        Err(e) => sink.report_fatal(&e.to_string()),
    };

    if cli.json {
        let json =
            serde_json::to_string_pretty(&report).context("Failed to serialize scan summary")?;
        println!("{json}");
    }

    diagnostics::shutdown();
    Ok(())
}
