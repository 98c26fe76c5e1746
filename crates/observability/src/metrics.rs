//! 扫描指标模块
//!
//! 未安装 recorder 时，所有指标调用均为空操作。

use metrics::{counter, gauge};

/// 单条记录可能的处理结果
pub const OUTCOME_KINDS: &[&str] = &[
    "decoded",
    "skipped",
    "malformed_version",
    "unknown_version",
    "decode",
];

/// 记录单条遥测记录的处理结果
///
/// # Example
///
/// ```ignore
/// use observability::metrics::record_outcome;
///
/// record_outcome("unknown_version");
/// ```
pub fn record_outcome(kind: &'static str) {
    counter!("lmt_diagnose_records_total").increment(1);
    match kind {
        "decoded" => counter!("lmt_diagnose_records_decoded_total").increment(1),
        "skipped" => counter!("lmt_diagnose_records_skipped_total").increment(1),
        _ => counter!("lmt_diagnose_soft_failures_total", "kind" => kind).increment(1),
    }
}

/// 记录目录中已配置的数据源数量
pub fn record_catalog_sources(count: usize) {
    gauge!("lmt_diagnose_catalog_sources").set(count as f64);
}
