//! Selector grammar
//!
//! ```text
//! stdout | stderr | cerebro
//! syslog | syslog:<facility> | syslog:<facility>:<severity>
//! <path>                                  (anything else, opened for append)
//! ```
//!
//! The selector is the persisted form of the sink state and must stay stable
//! for existing configuration files.

use std::fmt;
use std::str::FromStr;

use crate::error::SinkError;

/// Syslog facility (closed table)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Facility {
    #[default]
    Daemon,
    Local0,
    Local1,
    Local2,
    Local3,
    Local4,
    Local5,
    Local6,
    Local7,
    User,
}

impl Facility {
    pub const ALL: [Facility; 10] = [
        Self::Daemon,
        Self::Local0,
        Self::Local1,
        Self::Local2,
        Self::Local3,
        Self::Local4,
        Self::Local5,
        Self::Local6,
        Self::Local7,
        Self::User,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Daemon => "daemon",
            Self::Local0 => "local0",
            Self::Local1 => "local1",
            Self::Local2 => "local2",
            Self::Local3 => "local3",
            Self::Local4 => "local4",
            Self::Local5 => "local5",
            Self::Local6 => "local6",
            Self::Local7 => "local7",
            Self::User => "user",
        }
    }

    /// `LOG_*` facility code passed to `openlog(3)`
    pub fn code(self) -> libc::c_int {
        match self {
            Self::Daemon => libc::LOG_DAEMON,
            Self::Local0 => libc::LOG_LOCAL0,
            Self::Local1 => libc::LOG_LOCAL1,
            Self::Local2 => libc::LOG_LOCAL2,
            Self::Local3 => libc::LOG_LOCAL3,
            Self::Local4 => libc::LOG_LOCAL4,
            Self::Local5 => libc::LOG_LOCAL5,
            Self::Local6 => libc::LOG_LOCAL6,
            Self::Local7 => libc::LOG_LOCAL7,
            Self::User => libc::LOG_USER,
        }
    }
}

impl FromStr for Facility {
    type Err = SinkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|f| f.as_str() == s)
            .ok_or_else(|| SinkError::unknown_facility(s))
    }
}

impl fmt::Display for Facility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Syslog severity (closed table)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Severity {
    Emerg,
    Alert,
    Crit,
    #[default]
    Err,
    Warning,
    Notice,
    Info,
    Debug,
}

impl Severity {
    pub const ALL: [Severity; 8] = [
        Self::Emerg,
        Self::Alert,
        Self::Crit,
        Self::Err,
        Self::Warning,
        Self::Notice,
        Self::Info,
        Self::Debug,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Emerg => "emerg",
            Self::Alert => "alert",
            Self::Crit => "crit",
            Self::Err => "err",
            Self::Warning => "warning",
            Self::Notice => "notice",
            Self::Info => "info",
            Self::Debug => "debug",
        }
    }

    /// `LOG_*` priority passed to `syslog(3)`
    pub fn code(self) -> libc::c_int {
        match self {
            Self::Emerg => libc::LOG_EMERG,
            Self::Alert => libc::LOG_ALERT,
            Self::Crit => libc::LOG_CRIT,
            Self::Err => libc::LOG_ERR,
            Self::Warning => libc::LOG_WARNING,
            Self::Notice => libc::LOG_NOTICE,
            Self::Info => libc::LOG_INFO,
            Self::Debug => libc::LOG_DEBUG,
        }
    }
}

impl FromStr for Severity {
    type Err = SinkError;

    // `Self::Err` would be ambiguous with the `Err` variant
    fn from_str(s: &str) -> Result<Self, SinkError> {
        Self::ALL
            .into_iter()
            .find(|sev| sev.as_str() == s)
            .ok_or_else(|| SinkError::unknown_severity(s))
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A parsed selector string
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector {
    Stdout,
    Stderr,
    Syslog { facility: Facility, severity: Severity },
    /// Monitoring bus error channel
    Bus,
    /// File opened for append; the string is kept verbatim
    Path(String),
}

impl Selector {
    pub const STDOUT: &'static str = "stdout";
    pub const STDERR: &'static str = "stderr";
    pub const SYSLOG: &'static str = "syslog";
    pub const BUS: &'static str = "cerebro";

    /// Parse a selector string
    ///
    /// # Errors
    /// Unknown facility or severity tokens in a `syslog:` selector
    pub fn parse(s: &str) -> Result<Self, SinkError> {
        match s {
            Self::STDOUT => Ok(Self::Stdout),
            Self::STDERR => Ok(Self::Stderr),
            Self::SYSLOG => Ok(Self::Syslog {
                facility: Facility::default(),
                severity: Severity::default(),
            }),
            Self::BUS => Ok(Self::Bus),
            _ => match s.strip_prefix("syslog:") {
                Some(rest) => {
                    let (facility, severity) = match rest.split_once(':') {
                        Some((facility, severity)) => (facility, Some(severity)),
                        None => (rest, None),
                    };
                    Ok(Self::Syslog {
                        facility: facility.parse()?,
                        severity: severity.map(str::parse).transpose()?.unwrap_or_default(),
                    })
                }
                None => Ok(Self::Path(s.to_string())),
            },
        }
    }
}

impl FromStr for Selector {
    type Err = SinkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Canonical selector string; `syslog` always renders in full form
impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stdout => f.write_str(Self::STDOUT),
            Self::Stderr => f.write_str(Self::STDERR),
            Self::Syslog { facility, severity } => write!(f, "syslog:{facility}:{severity}"),
            Self::Bus => f.write_str(Self::BUS),
            Self::Path(path) => f.write_str(path),
        }
    }
}
