//! # Diagnostics
//!
//! Operator-facing diagnostic sink.
//!
//! Responsibilities:
//! - Format `"<program>: <message>[: <strerror>]"` lines
//! - Route them to exactly one backend: a file stream, syslog, or the monitoring bus
//! - Re-select the backend at runtime from a single selector string
//!   (`stderr`, `stdout`, `syslog[:<facility>[:<severity>]]`, `cerebro`, or a path)
//!
//! ```no_run
//! use diagnostics::DiagnosticSink;
//!
//! let sink = DiagnosticSink::new("/usr/sbin/lmtdiagnose");
//! sink.select_destination("syslog:local0:warning").unwrap();
//! sink.report("mysql: fs1");
//! assert_eq!(sink.current_destination(), "syslog:local0:warning");
//! ```

pub mod backends;
mod destination;
pub mod errno;
pub mod error;
mod global;
pub mod message;
pub mod selector;
mod sink;

pub use backends::{BusChannel, FileDest, FileStream, SyslogDest, TracingBusChannel};
pub use destination::Destination;
pub use error::{Result, SinkError};
pub use global::{global, init, shutdown};
pub use message::{MAX_MESSAGE_LEN, TRUNCATION_MARKER};
pub use selector::{Facility, Selector, Severity};
pub use sink::DiagnosticSink;
