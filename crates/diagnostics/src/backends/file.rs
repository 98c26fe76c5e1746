//! FileDest - appends diagnostic lines to a byte stream

use std::fmt;
use std::fs::OpenOptions;
use std::io::{self, Write};
use parking_lot::Mutex;
use tracing::debug;

use crate::error::SinkError;
use crate::selector::Selector;

/// Underlying stream of a file destination
pub enum FileStream {
    /// Process standard output, never closed by the sink
    Stdout,
    /// Process standard error, never closed by the sink
    Stderr,
    /// Stream owned by the sink, closed when the destination is released
    Owned(Box<dyn Write + Send>),
}

impl FileStream {
    /// Whether this is one of the process's standard streams
    pub fn is_reserved(&self) -> bool {
        matches!(self, Self::Stdout | Self::Stderr)
    }

    fn write_line(&mut self, line: &str) -> io::Result<()> {
        match self {
            Self::Stdout => {
                let mut out = io::stdout().lock();
                writeln!(out, "{line}")?;
                out.flush()
            }
            Self::Stderr => {
                let mut err = io::stderr().lock();
                writeln!(err, "{line}")?;
                err.flush()
            }
            Self::Owned(writer) => {
                writeln!(writer, "{line}")?;
                writer.flush()
            }
        }
    }
}

impl fmt::Debug for FileStream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stdout => f.write_str("Stdout"),
            Self::Stderr => f.write_str("Stderr"),
            Self::Owned(_) => f.write_str("Owned(..)"),
        }
    }
}

/// File destination: a stream plus the display name it was selected with
#[derive(Debug)]
pub struct FileDest {
    stream: Mutex<FileStream>,
    name: Option<String>,
}

impl FileDest {
    /// Destination writing to standard output
    pub fn stdout() -> Self {
        Self {
            stream: Mutex::new(FileStream::Stdout),
            name: None,
        }
    }

    /// Destination writing to standard error (the process default)
    pub fn stderr() -> Self {
        Self {
            stream: Mutex::new(FileStream::Stderr),
            name: None,
        }
    }

    /// Open `path` for append, creating it if needed
    ///
    /// The path string is stored verbatim so it round-trips unchanged.
    pub fn open(path: &str) -> Result<Self, SinkError> {
        let file = OpenOptions::new()
            .append(true)
            .create(true)
            .open(path)
            .map_err(|e| SinkError::open(path, e))?;
        debug!(path = %path, "Diagnostic log file opened");
        Ok(Self::from_writer(Some(path.to_string()), file))
    }

    /// Destination over any owned stream
    ///
    /// A destination without a name serialises as `"unknown"`.
    pub fn from_writer(name: Option<String>, writer: impl Write + Send + 'static) -> Self {
        Self {
            stream: Mutex::new(FileStream::Owned(Box::new(writer))),
            name,
        }
    }

    /// Display name (`None` for the standard streams and unnamed writers)
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Whether the stream is stdout or stderr
    pub fn is_reserved(&self) -> bool {
        self.stream.lock().is_reserved()
    }

    /// Selector string that reproduces this destination
    pub fn selector(&self) -> String {
        match &*self.stream.lock() {
            FileStream::Stdout => Selector::STDOUT.to_string(),
            FileStream::Stderr => Selector::STDERR.to_string(),
            FileStream::Owned(_) => self.name.clone().unwrap_or_else(|| "unknown".to_string()),
        }
    }

    /// Write one line and flush; write errors are dropped
    pub fn write_line(&self, line: &str) {
        let mut stream = self.stream.lock();
        let _ = stream.write_line(line);
    }
}
