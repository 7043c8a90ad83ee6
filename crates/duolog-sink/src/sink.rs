//! crates/duolog-sink/src/sink.rs
//! Type-erased owned writer used as a logger's output destination.

use std::fmt;
use std::io::{self, Write};

/// Owned, type-erased output destination for formatted log lines.
///
/// A `Sink` wraps any [`Write`] implementor that can cross threads and
/// presents it behind a single concrete type, so loggers can swap their
/// destination at runtime without being generic over the writer. The sink
/// does not buffer, close, or flush on its own; it is a plain conduit.
///
/// # Examples
///
/// ```
/// use std::io::Write;
///
/// use duolog_sink::Sink;
///
/// let mut sink = Sink::from_writer(Vec::new());
/// sink.write_all(b"hello").unwrap();
/// ```
pub struct Sink {
    writer: Box<dyn Write + Send>,
}

impl Sink {
    /// Creates a sink writing to the process standard output.
    #[must_use]
    pub fn stdout() -> Self {
        Self::from_writer(io::stdout())
    }

    /// Creates a sink writing to the process standard error.
    #[must_use]
    pub fn stderr() -> Self {
        Self::from_writer(io::stderr())
    }

    /// Creates a sink that discards everything written to it.
    #[must_use]
    pub fn discard() -> Self {
        Self::from_writer(io::sink())
    }

    /// Wraps an arbitrary writer.
    #[must_use]
    pub fn from_writer<W>(writer: W) -> Self
    where
        W: Write + Send + 'static,
    {
        Self {
            writer: Box::new(writer),
        }
    }
}

impl Default for Sink {
    /// Defaults to standard error, the conventional stream for diagnostics.
    fn default() -> Self {
        Self::stderr()
    }
}

impl Write for Sink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.writer.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }

    fn write_all(&mut self, buf: &[u8]) -> io::Result<()> {
        self.writer.write_all(buf)
    }
}

impl fmt::Debug for Sink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sink").finish_non_exhaustive()
    }
}
