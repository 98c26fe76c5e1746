//! Destination - the active backend, one variant alive at a time

use crate::backends::{BusChannel, FileDest, SyslogDest};
use crate::error::SinkError;
use crate::message;
use crate::selector::Selector;

/// Active diagnostic backend
#[derive(Debug)]
pub enum Destination {
    File(FileDest),
    Syslog(SyslogDest),
    /// Monitoring bus error channel
    Bus,
}

impl Destination {
    /// Build the destination a selector names
    ///
    /// Files are opened here; the syslog handle is opened on install.
    pub fn open(selector: &Selector, program: &str) -> Result<Self, SinkError> {
        Ok(match selector {
            Selector::Stdout => Self::File(FileDest::stdout()),
            Selector::Stderr => Self::File(FileDest::stderr()),
            Selector::Syslog { facility, severity } => {
                Self::Syslog(SyslogDest::new(program, *facility, *severity))
            }
            Selector::Bus => Self::Bus,
            Selector::Path(path) => Self::File(FileDest::open(path)?),
        })
    }

    /// Selector string that reproduces this destination
    pub fn selector(&self) -> String {
        match self {
            Self::File(file) => file.selector(),
            Self::Syslog(syslog) => Selector::Syslog {
                facility: syslog.facility(),
                severity: syslog.severity(),
            }
            .to_string(),
            Self::Bus => Selector::BUS.to_string(),
        }
    }

    /// Acquire process-global resources after the previous destination is gone
    pub(crate) fn activate(&mut self) {
        if let Self::Syslog(syslog) = self {
            syslog.open();
        }
    }

    pub(crate) fn emit(
        &self,
        program: &str,
        message: &str,
        errno_text: Option<&str>,
        bus: &dyn BusChannel,
    ) {
        match self {
            Self::File(file) => file.write_line(&message::line(program, message, errno_text)),
            Self::Syslog(syslog) => syslog.write(&message::body(message, errno_text)),
            Self::Bus => bus.emit(&message::body(message, errno_text)),
        }
    }
}

impl Default for Destination {
    fn default() -> Self {
        Self::File(FileDest::stderr())
    }
}

impl From<FileDest> for Destination {
    fn from(file: FileDest) -> Self {
        Self::File(file)
    }
}
