//! 配置校验模块
//!
//! 校验规则：
//! - 字段约束 (`validator` derive): 选择器可解析、host/user 非空、至少一个指标主题
//! - filesystems 唯一
//! - metrics 唯一

use std::collections::HashSet;

use contracts::ContractError;
use validator::{Validate, ValidationErrors};

use crate::DiagnoseConfig;

/// 校验 DiagnoseConfig
///
/// 返回第一个遇到的错误，或 Ok(())。
pub fn validate(config: &DiagnoseConfig) -> Result<(), ContractError> {
    check_section("log", config.log.validate())?;
    check_section("catalog", config.catalog.validate())?;
    check_section("telemetry", config.telemetry.validate())?;
    check_unique("catalog.filesystems", &config.catalog.filesystems)?;
    check_unique("telemetry.metrics", &config.telemetry.metrics)?;
    Ok(())
}

/// 取字段名最小的错误，保证报告顺序稳定
fn check_section(
    section: &str,
    result: Result<(), ValidationErrors>,
) -> Result<(), ContractError> {
    let Err(errors) = result else {
        return Ok(());
    };

    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by(|a, b| a.0.cmp(&b.0));

    let Some((field, field_errors)) = fields.into_iter().next() else {
        return Err(ContractError::config_validation(section, errors.to_string()));
    };
    let message = field_errors
        .first()
        .map(|e| match &e.message {
            Some(message) => message.to_string(),
            None => e.code.to_string(),
        })
        .unwrap_or_default();

    Err(ContractError::config_validation(
        format!("{section}.{field}"),
        message,
    ))
}

fn check_unique(field: &str, values: &[String]) -> Result<(), ContractError> {
    let mut seen = HashSet::new();
    for value in values {
        if !seen.insert(value) {
            return Err(ContractError::config_validation(
                format!("{field}[{value}]"),
                "duplicate entry",
            ));
        }
    }
    Ok(())
}
