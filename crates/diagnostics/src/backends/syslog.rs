//! SyslogDest - forwards diagnostic lines to syslog(3)

use std::ffi::CString;

use tracing::debug;

use crate::selector::{Facility, Severity};

/// Syslog destination
///
/// The severity is fixed for the lifetime of the destination and applied to
/// every message. The program name is used as the syslog ident, so lines are
/// written without the program prefix.
#[derive(Debug)]
pub struct SyslogDest {
    facility: Facility,
    severity: Severity,
    ident: CString,
    opened: bool,
}

impl SyslogDest {
    /// Create an unopened destination; the handle is opened on install
    pub fn new(program: &str, facility: Facility, severity: Severity) -> Self {
        Self {
            facility,
            severity,
            ident: to_cstring(program),
            opened: false,
        }
    }

    pub fn facility(&self) -> Facility {
        self.facility
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn is_open(&self) -> bool {
        self.opened
    }

    /// Open the process syslog handle
    ///
    /// Must run after any previous syslog destination has been dropped,
    /// since the handle is process-global.
    pub(crate) fn open(&mut self) {
        if self.opened {
            return;
        }
        // SAFETY: ident outlives the open handle; it is only dropped after
        // closelog() in Drop.
        unsafe {
            libc::openlog(
                self.ident.as_ptr(),
                libc::LOG_NDELAY | libc::LOG_PID,
                self.facility.code(),
            );
        }
        self.opened = true;
        record_handle_event("open");
        debug!(facility = %self.facility, severity = %self.severity, "Syslog opened");
    }

    /// Log one message body at the configured severity
    pub fn write(&self, body: &str) {
        let message = to_cstring(body);
        // SAFETY: both pointers are valid NUL-terminated strings; the format
        // string consumes exactly one %s argument.
        unsafe {
            libc::syslog(
                self.severity.code(),
                b"%s\0".as_ptr().cast::<libc::c_char>(),
                message.as_ptr(),
            );
        }
    }
}

impl Drop for SyslogDest {
    fn drop(&mut self) {
        if self.opened {
            // SAFETY: closelog has no preconditions.
            unsafe { libc::closelog() };
            record_handle_event("close");
            debug!("Syslog closed");
        }
    }
}

#[cfg(test)]
thread_local! {
    static HANDLE_EVENTS: std::cell::RefCell<Vec<&'static str>> =
        const { std::cell::RefCell::new(Vec::new()) };
}

#[cfg(test)]
fn record_handle_event(event: &'static str) {
    HANDLE_EVENTS.with(|events| events.borrow_mut().push(event));
}

#[cfg(not(test))]
fn record_handle_event(_event: &'static str) {}

/// Syslog handle opens and closes on this thread since the last call
#[cfg(test)]
pub(crate) fn take_handle_events() -> Vec<&'static str> {
    HANDLE_EVENTS.with(|events| std::mem::take(&mut *events.borrow_mut()))
}

fn to_cstring(s: &str) -> CString {
    CString::new(s.replace('\0', "")).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_not_opened() {
        let dest = SyslogDest::new("prog", Facility::Local1, Severity::Notice);
        assert!(!dest.is_open());
        assert_eq!(dest.facility(), Facility::Local1);
        assert_eq!(dest.severity(), Severity::Notice);
    }

    #[test]
    fn test_open_and_drop_pair_up() {
        take_handle_events();
        let mut dest = SyslogDest::new("prog", Facility::User, Severity::Err);
        dest.open();
        dest.open();
        drop(dest);
        assert_eq!(take_handle_events(), ["open", "close"]);

        drop(SyslogDest::new("prog", Facility::User, Severity::Err));
        assert!(take_handle_events().is_empty());
    }

    #[test]
    fn test_interior_nul_is_stripped() {
        assert_eq!(to_cstring("a\0b").to_str().unwrap(), "ab");
    }
}
