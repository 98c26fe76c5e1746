//! DiagnosticSink - program name plus the active destination

use std::path::Path;
use std::sync::Arc;

use parking_lot::RwLock;
use tracing::{debug, instrument};

use crate::backends::{BusChannel, TracingBusChannel};
use crate::destination::Destination;
use crate::error::SinkError;
use crate::errno;
use crate::selector::Selector;

const UNKNOWN_PROGRAM: &str = "<unknown>";

/// Operator-facing diagnostic sink
///
/// Emit calls take the destination lock shared; reselection takes it
/// exclusively, because it releases the previous backend.
pub struct DiagnosticSink {
    program: String,
    destination: RwLock<Destination>,
    bus: Arc<dyn BusChannel>,
}

impl DiagnosticSink {
    /// Create a sink writing to unbuffered standard error
    ///
    /// `program` may be a full `argv[0]`; only its basename is kept.
    pub fn new(program: impl AsRef<str>) -> Self {
        Self {
            program: basename(program.as_ref()),
            destination: RwLock::new(Destination::default()),
            bus: Arc::new(TracingBusChannel),
        }
    }

    /// Attach the monitoring bus client used by the `cerebro` destination
    pub fn with_bus_channel(mut self, bus: Arc<dyn BusChannel>) -> Self {
        self.bus = bus;
        self
    }

    /// Program name used as the line prefix
    pub fn program(&self) -> &str {
        &self.program
    }

    /// Parse `selector` and replace the active destination
    ///
    /// On error the previous destination stays installed.
    ///
    /// # Errors
    /// Unknown syslog facility or severity, or a path that cannot be opened
    /// for append
    #[instrument(name = "diagnostic_sink_select", skip(self))]
    pub fn select_destination(&self, selector: &str) -> Result<(), SinkError> {
        let selector = Selector::parse(selector)?;
        let next = Destination::open(&selector, &self.program)?;
        self.install(next);
        Ok(())
    }

    /// Like [`select_destination`](Self::select_destination), but a failure is
    /// reported through the previous destination and terminates the process
    pub fn select_destination_or_exit(&self, selector: &str) {
        if let Err(e) = self.select_destination(selector) {
            match e.errno() {
                Some(errnum) => self.report_with_errno_fatal(errnum, &e.to_string()),
                None => self.report_fatal(&e.to_string()),
            }
        }
    }

    /// Install a prepared destination, releasing the current one first
    pub fn install(&self, next: Destination) {
        let mut current = self.destination.write();
        let previous = current.selector();
        // assignment drops the previous destination: owned file closed,
        // syslog handle released
        *current = next;
        current.activate();
        debug!(from = %previous, to = %current.selector(), "Diagnostic destination switched");
    }

    /// Selector string equivalent to the active destination
    pub fn current_destination(&self) -> String {
        self.destination.read().selector()
    }

    /// `"<program>: <message>"`
    pub fn report(&self, message: &str) {
        self.emit(message, None);
    }

    /// `"<program>: <message>: <strerror(errnum)>"`
    pub fn report_with_errno(&self, errnum: i32, message: &str) {
        self.emit(message, Some(&errno::describe(errnum)));
    }

    /// [`report_with_errno`](Self::report_with_errno) with the thread's current errno
    pub fn report_last_os_error(&self, message: &str) {
        self.report_with_errno(errno::last_errno(), message);
    }

    /// Report, release the destination, exit with status 1
    pub fn report_fatal(&self, message: &str) -> ! {
        self.report(message);
        self.exit()
    }

    pub fn report_with_errno_fatal(&self, errnum: i32, message: &str) -> ! {
        self.report_with_errno(errnum, message);
        self.exit()
    }

    pub fn report_last_os_error_fatal(&self, message: &str) -> ! {
        self.report_with_errno_fatal(errno::last_errno(), message)
    }

    /// Unrecoverable internal error at a source location
    pub fn fatal_error(&self, file: &str, line: u32, message: &str) -> ! {
        self.report_fatal(&crate::message::fatal_error(file, line, message))
    }

    /// Allocation failure at a source location
    pub fn out_of_memory(&self, file: &str, line: u32, message: &str) -> ! {
        self.report_fatal(&crate::message::out_of_memory(file, line, message))
    }

    /// Release the active backend and fall back to standard error
    pub fn release(&self) {
        self.install(Destination::default());
    }

    fn emit(&self, message: &str, errno_text: Option<&str>) {
        self.destination
            .read()
            .emit(&self.program, message, errno_text, self.bus.as_ref());
    }

    fn exit(&self) -> ! {
        self.release();
        std::process::exit(1)
    }
}

impl Default for DiagnosticSink {
    fn default() -> Self {
        Self::new(UNKNOWN_PROGRAM)
    }
}

impl std::fmt::Debug for DiagnosticSink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DiagnosticSink")
            .field("program", &self.program)
            .field("destination", &self.current_destination())
            .finish()
    }
}

fn basename(program: &str) -> String {
    Path::new(program)
        .file_name()
        .and_then(|name| name.to_str())
        .filter(|name| !name.is_empty())
        .unwrap_or(UNKNOWN_PROGRAM)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backends::{take_handle_events, FileDest};
    use std::fs;
    use std::io::{self, Write};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;
    use tempfile::tempdir;

    /// Writer that counts how many times it is closed
    struct CountingWriter {
        closes: Arc<AtomicUsize>,
    }

    impl Write for CountingWriter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl Drop for CountingWriter {
        fn drop(&mut self) {
            self.closes.fetch_add(1, Ordering::SeqCst);
        }
    }

    #[derive(Default)]
    struct RecordingBus {
        lines: Mutex<Vec<String>>,
    }

    impl BusChannel for RecordingBus {
        fn emit(&self, body: &str) {
            self.lines.lock().unwrap().push(body.to_string());
        }
    }

    #[test]
    fn test_program_is_basename() {
        assert_eq!(DiagnosticSink::new("/usr/sbin/lmtdiagnose").program(), "lmtdiagnose");
        assert_eq!(DiagnosticSink::new("").program(), "<unknown>");
        assert_eq!(DiagnosticSink::default().program(), "<unknown>");
    }

    #[test]
    fn test_default_destination_is_stderr() {
        assert_eq!(DiagnosticSink::new("prog").current_destination(), "stderr");
    }

    #[test]
    fn test_report_formats_to_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("diag.log");
        let sink = DiagnosticSink::new("prog");
        sink.select_destination(path.to_str().unwrap()).unwrap();

        sink.report("hello");
        sink.report_with_errno(libc::EAGAIN, "retry");

        let expected = format!(
            "prog: hello\nprog: retry: {}\n",
            errno::describe(libc::EAGAIN)
        );
        assert_eq!(fs::read_to_string(&path).unwrap(), expected);
    }

    #[test]
    fn test_path_round_trips_verbatim() {
        let dir = tempdir().unwrap();
        let raw = format!("{}/./sub/../diag.log", dir.path().display());
        fs::create_dir(dir.path().join("sub")).unwrap();

        let sink = DiagnosticSink::new("prog");
        sink.select_destination(&raw).unwrap();
        assert_eq!(sink.current_destination(), raw);

        let again = DiagnosticSink::new("prog");
        again.select_destination(&sink.current_destination()).unwrap();
        assert_eq!(again.current_destination(), raw);
    }

    #[test]
    fn test_round_trip_all_variants() {
        let sink = DiagnosticSink::new("prog");
        for selector in [
            "stdout",
            "stderr",
            "cerebro",
            "syslog:local2:notice",
            "syslog:user:debug",
        ] {
            sink.select_destination(selector).unwrap();
            let current = sink.current_destination();
            assert_eq!(current, selector);
            sink.select_destination(&current).unwrap();
            assert_eq!(sink.current_destination(), selector);
        }
        sink.select_destination("syslog").unwrap();
        assert_eq!(sink.current_destination(), "syslog:daemon:err");
        sink.release();
    }

    #[test]
    fn test_invalid_selector_keeps_previous_destination() {
        let sink = DiagnosticSink::new("prog");
        sink.select_destination("stdout").unwrap();

        assert!(matches!(
            sink.select_destination("syslog:nope"),
            Err(SinkError::UnknownFacility { .. })
        ));
        assert!(matches!(
            sink.select_destination("syslog:daemon:nope"),
            Err(SinkError::UnknownSeverity { .. })
        ));

        let dir = tempdir().unwrap();
        let bad = dir.path().join("no/such/dir/log");
        assert!(matches!(
            sink.select_destination(bad.to_str().unwrap()),
            Err(SinkError::Open { .. })
        ));

        assert_eq!(sink.current_destination(), "stdout");
    }

    #[test]
    fn test_switching_closes_owned_stream_exactly_once() {
        let closes = Arc::new(AtomicUsize::new(0));
        let sink = DiagnosticSink::new("prog");
        sink.install(
            FileDest::from_writer(
                Some("counting".to_string()),
                CountingWriter {
                    closes: Arc::clone(&closes),
                },
            )
            .into(),
        );
        sink.report("into the counter");
        assert_eq!(closes.load(Ordering::SeqCst), 0);

        sink.select_destination("cerebro").unwrap();
        assert_eq!(closes.load(Ordering::SeqCst), 1);

        sink.select_destination("stderr").unwrap();
        sink.select_destination("stdout").unwrap();
        assert_eq!(closes.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_bus_receives_body_without_program() {
        let bus = Arc::new(RecordingBus::default());
        let sink = DiagnosticSink::new("prog").with_bus_channel(bus.clone());
        sink.select_destination("cerebro").unwrap();

        sink.report("hello");
        sink.report_with_errno(libc::ENOENT, "open");

        let lines = bus.lines.lock().unwrap();
        assert_eq!(lines[0], "hello");
        assert_eq!(lines[1], format!("open: {}", errno::describe(libc::ENOENT)));
    }

    #[test]
    fn test_switching_from_syslog_releases_handle() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("diag.log");
        let sink = DiagnosticSink::new("prog");
        take_handle_events();

        sink.select_destination("syslog:local0:debug").unwrap();
        sink.report("to syslog");
        assert_eq!(take_handle_events(), ["open"]);

        sink.select_destination(path.to_str().unwrap()).unwrap();
        assert_eq!(take_handle_events(), ["close"]);
        assert_eq!(sink.current_destination(), path.to_str().unwrap());
    }

    #[test]
    fn test_syslog_to_syslog_closes_before_opening() {
        let sink = DiagnosticSink::new("prog");
        take_handle_events();

        sink.select_destination("syslog:local0:debug").unwrap();
        sink.select_destination("syslog:local1:info").unwrap();
        assert_eq!(take_handle_events(), ["open", "close", "open"]);
        assert_eq!(sink.current_destination(), "syslog:local1:info");

        // failed reselection leaves the handle alone
        assert!(sink.select_destination("syslog:kern").is_err());
        assert!(take_handle_events().is_empty());

        sink.release();
        assert_eq!(take_handle_events(), ["close"]);
        assert_eq!(sink.current_destination(), "stderr");
    }

    #[test]
    fn test_report_last_os_error_uses_thread_errno() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("diag.log");
        let sink = DiagnosticSink::new("prog");
        sink.select_destination(path.to_str().unwrap()).unwrap();

        assert!(fs::File::open(dir.path().join("missing")).is_err());
        sink.report_last_os_error("open");

        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            format!("prog: open: {}\n", errno::describe(libc::ENOENT))
        );
    }
}
