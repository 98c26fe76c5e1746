//! Process-wide sink instance

use std::sync::OnceLock;

use crate::sink::DiagnosticSink;

static GLOBAL: OnceLock<DiagnosticSink> = OnceLock::new();

/// Install the process-wide sink for `program`
///
/// The first call wins; later calls return the installed sink unchanged.
pub fn init(program: &str) -> &'static DiagnosticSink {
    GLOBAL.get_or_init(|| DiagnosticSink::new(program))
}

/// The process-wide sink, created with program `"<unknown>"` if never initialised
pub fn global() -> &'static DiagnosticSink {
    GLOBAL.get_or_init(DiagnosticSink::default)
}

/// Release the process-wide backend; the sink reverts to standard error
pub fn shutdown() {
    if let Some(sink) = GLOBAL.get() {
        sink.release();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // the only test in this binary touching the process-wide instance
    #[test]
    fn test_init_global_shutdown() {
        let sink = init("/usr/sbin/lmtdiagnose");
        assert!(std::ptr::eq(sink, global()));
        assert!(std::ptr::eq(init("other"), sink));
        assert_eq!(global().program(), "lmtdiagnose");

        global().select_destination("stdout").unwrap();
        assert_eq!(global().current_destination(), "stdout");
        shutdown();
        assert_eq!(global().current_destination(), "stderr");
    }
}
