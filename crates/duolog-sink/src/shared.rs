//! crates/duolog-sink/src/shared.rs
//! Cloneable in-memory capture sink for tests and embedders.

use std::io::{self, Write};
use std::sync::{Arc, Mutex, PoisonError};

/// Cloneable in-memory buffer implementing [`Write`].
///
/// Every clone shares the same underlying storage, so one handle can be
/// given to a logger as its sink while another handle reads back the
/// captured output. Access is serialized by an internal mutex; a handle
/// whose peer panicked mid-write keeps working with whatever bytes landed.
///
/// # Examples
///
/// ```
/// use std::io::Write;
///
/// use duolog_sink::SharedBuffer;
///
/// let buffer = SharedBuffer::new();
/// let mut writer = buffer.clone();
///
/// writer.write_all(b"one\n").unwrap();
/// writer.write_all(b"two\n").unwrap();
///
/// assert_eq!(buffer.text().lines().count(), 2);
/// ```
#[derive(Clone, Debug, Default)]
pub struct SharedBuffer {
    inner: Arc<Mutex<Vec<u8>>>,
}

impl SharedBuffer {
    /// Creates an empty buffer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of the captured bytes.
    #[must_use]
    pub fn contents(&self) -> Vec<u8> {
        self.lock().clone()
    }

    /// Returns the captured bytes as text, replacing invalid UTF-8.
    #[must_use]
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.lock()).into_owned()
    }

    /// Discards everything captured so far.
    pub fn clear(&self) {
        self.lock().clear();
    }

    /// Reports whether nothing has been written yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<u8>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
