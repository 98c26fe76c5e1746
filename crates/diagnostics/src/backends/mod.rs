//! Backend implementations
//!
//! Contains the file stream, syslog and monitoring bus backends.

mod bus;
mod file;
mod syslog;

pub use self::bus::{BusChannel, TracingBusChannel};
pub use self::file::{FileDest, FileStream};
pub use self::syslog::SyslogDest;

#[cfg(test)]
pub(crate) use self::syslog::take_handle_events;
