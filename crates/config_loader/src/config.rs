//! 配置模型
//!
//! 所有字段都有默认值，空文件即为合法配置。

use std::path::PathBuf;

use contracts::{CatalogParams, ALL_METRIC_NAMES};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// `lmtdiagnose` 配置根
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default, deny_unknown_fields)]
pub struct DiagnoseConfig {
    #[validate(nested)]
    pub log: LogConfig,
    #[validate(nested)]
    pub catalog: CatalogConfig,
    #[validate(nested)]
    pub telemetry: TelemetryConfig,
}

/// `[log]` 诊断输出
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default, deny_unknown_fields)]
pub struct LogConfig {
    /// 诊断目标选择器，如 `stderr`、`syslog:local0:warning`、文件路径
    #[validate(custom(function = "validate_selector"))]
    pub dest: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            dest: diagnostics::Selector::STDERR.to_string(),
        }
    }
}

/// `[catalog]` 关系型目录连接参数
#[derive(Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default, deny_unknown_fields)]
pub struct CatalogConfig {
    #[validate(length(min = 1, message = "host cannot be empty"))]
    pub host: String,
    /// 0 表示使用客户端库默认端口
    pub port: u16,
    #[validate(length(min = 1, message = "user cannot be empty"))]
    pub user: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    /// 目录中已配置的文件系统名
    pub filesystems: Vec<String>,
}

impl CatalogConfig {
    /// 转换为目录连接参数
    pub fn params(&self) -> CatalogParams {
        CatalogParams {
            host: self.host.clone(),
            port: self.port,
            user: self.user.clone(),
            password: self.password.clone(),
        }
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        let params = CatalogParams::default();
        Self {
            host: params.host,
            port: params.port,
            user: params.user,
            password: params.password,
            filesystems: Vec::new(),
        }
    }
}

// 密码不进入日志
impl std::fmt::Debug for CatalogConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CatalogConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("user", &self.user)
            .field("password", &self.password.as_ref().map(|_| "***"))
            .field("filesystems", &self.filesystems)
            .finish()
    }
}

/// `[telemetry]` 遥测来源
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default, deny_unknown_fields)]
pub struct TelemetryConfig {
    /// 指标转储文件 (`name<TAB>value` 行)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dump: Option<PathBuf>,
    /// 请求的指标主题
    #[validate(length(min = 1, message = "at least one metric topic is required"))]
    pub metrics: Vec<String>,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            dump: None,
            metrics: ALL_METRIC_NAMES.iter().map(|name| name.to_string()).collect(),
        }
    }
}

fn validate_selector(dest: &str) -> Result<(), ValidationError> {
    diagnostics::Selector::parse(dest).map(|_| ()).map_err(|e| {
        let mut error = ValidationError::new("selector");
        error.message = Some(e.to_string().into());
        error
    })
}
