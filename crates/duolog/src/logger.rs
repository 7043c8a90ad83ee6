//! crates/duolog/src/logger.rs
//! The mutex-guarded logger that formats and emits log lines.

use std::fmt;
use std::io::{self, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

use duolog_sink::Sink;
use time::OffsetDateTime;

use crate::flags::LogFlags;
use crate::header::format_header;
use crate::location::SourceLocation;

/// Severity of an emitted log line.
///
/// Only two levels exist by design: things users of the software care about
/// (`Info`) and things its developers care about while debugging (`Debug`).
/// Errors worth logging are `Info`; errors worth stopping for should bubble
/// up to `main` instead of being logged here.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Severity {
    /// Informational line, always emitted.
    Info,
    /// Debugging line, emitted only while the debug toggle is on.
    Debug,
}

impl Severity {
    /// Returns the literal level tag rendered between brackets.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Info => "INFO",
            Self::Debug => "DEBUG",
        }
    }
}

/// Observer invoked when a sink write fails.
///
/// The hook runs on the emitting thread while the logger's lock is held, so
/// it must not log back into the same logger.
pub type ErrorHook = Box<dyn Fn(&io::Error) + Send + Sync>;

struct Inner {
    sink: Sink,
    flags: LogFlags,
    error_hook: Option<ErrorHook>,
}

/// Two-level line logger writing `<header>[<LEVEL>] <message>` lines.
///
/// A logger owns its output [`Sink`], the prefix [`LogFlags`], and a debug
/// toggle. Sink and flags live behind one mutex that also serializes the
/// emit path, so concurrent emits from independent threads land as whole
/// lines in lock-acquisition order. The debug toggle is atomic: a disabled
/// [`debug`](Self::debug) call costs one load and performs no formatting,
/// takes no lock, and writes nothing.
///
/// Instances are fully independent; nothing is shared between loggers.
///
/// # Examples
///
/// ```
/// use duolog::{LogFlags, Logger, SharedBuffer, Sink};
///
/// let buffer = SharedBuffer::new();
/// let logger = Logger::new(Sink::from_writer(buffer.clone()), false, LogFlags::NONE);
///
/// logger.info("Hello World!");
/// logger.debug("suppressed");
/// logger.set_debug(true);
/// logger.debug("visible");
///
/// assert_eq!(buffer.text(), "[INFO] Hello World!\n[DEBUG] visible\n");
/// ```
///
/// Formatted logging goes through [`format_args!`], whose output implements
/// [`fmt::Display`]:
///
/// ```
/// use duolog::{LogFlags, Logger, SharedBuffer, Sink};
///
/// let buffer = SharedBuffer::new();
/// let logger = Logger::new(Sink::from_writer(buffer.clone()), false, LogFlags::NONE);
///
/// logger.info(format_args!("Hello {}!", "World"));
///
/// assert_eq!(buffer.text(), "[INFO] Hello World!\n");
/// ```
pub struct Logger {
    inner: Mutex<Inner>,
    debug_enabled: AtomicBool,
}

impl Logger {
    /// Creates an independent logger. Never fails.
    #[must_use]
    pub fn new(sink: Sink, debug_enabled: bool, flags: LogFlags) -> Self {
        Self {
            inner: Mutex::new(Inner {
                sink,
                flags,
                error_hook: None,
            }),
            debug_enabled: AtomicBool::new(debug_enabled),
        }
    }

    /// Replaces the output sink.
    ///
    /// Takes effect for every subsequent emit. The previous sink is dropped
    /// without being flushed or closed; stream lifetime stays with the
    /// caller.
    pub fn set_output(&self, sink: Sink) {
        self.lock().sink = sink;
    }

    /// Replaces the prefix flag set.
    pub fn set_flags(&self, flags: LogFlags) {
        self.lock().flags = flags;
    }

    /// Enables or disables the debug level.
    pub fn set_debug(&self, enabled: bool) {
        self.debug_enabled.store(enabled, Ordering::Relaxed);
    }

    /// Installs or removes the write-failure observer.
    ///
    /// Without a hook, write failures are discarded: logging calls never
    /// report errors to their caller.
    pub fn set_error_hook(&self, hook: Option<ErrorHook>) {
        self.lock().error_hook = hook;
    }

    /// Returns whether debug lines are currently emitted.
    #[must_use]
    pub fn debug_enabled(&self) -> bool {
        self.debug_enabled.load(Ordering::Relaxed)
    }

    /// Returns the current prefix flag set.
    #[must_use]
    pub fn flags(&self) -> LogFlags {
        self.lock().flags
    }

    /// Logs at info level.
    ///
    /// Embedded newlines are collapsed to single spaces and surrounding
    /// whitespace is trimmed, so multi-line input becomes one structured
    /// line.
    #[track_caller]
    pub fn info(&self, message: impl fmt::Display) {
        self.emit(Severity::Info, &SourceLocation::caller(), &message);
    }

    /// Logs at debug level; a no-op while the toggle is off.
    #[track_caller]
    pub fn debug(&self, message: impl fmt::Display) {
        if !self.debug_enabled() {
            return;
        }
        self.emit(Severity::Debug, &SourceLocation::caller(), &message);
    }

    /// Logs at info level with an explicitly resolved call site.
    ///
    /// Used by the crate macros and by integrations that carry their own
    /// location information; pass [`SourceLocation::unknown`] when none is
    /// available.
    pub fn info_at(&self, location: SourceLocation, message: impl fmt::Display) {
        self.emit(Severity::Info, &location, &message);
    }

    /// Logs at debug level with an explicitly resolved call site; a no-op
    /// while the toggle is off.
    pub fn debug_at(&self, location: SourceLocation, message: impl fmt::Display) {
        if !self.debug_enabled() {
            return;
        }
        self.emit(Severity::Debug, &location, &message);
    }

    fn emit(&self, severity: Severity, location: &SourceLocation, message: &dyn fmt::Display) {
        // Location is already resolved and the message text is pure input,
        // so both happen before the lock; the emit observes whatever
        // configuration is current once the lock is acquired.
        let message = normalize_message(&message.to_string());

        let mut inner = self.lock();
        let header = format_header(inner.flags, location, now());
        let line = format!("{header}[{}] {message}\n", severity.as_str());
        if let Err(error) = inner.sink.write_all(line.as_bytes()) {
            if let Some(hook) = &inner.error_hook {
                hook(&error);
            }
        }
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        // A panic inside another thread's emit (for example a panicking
        // error hook) must not disable logging process-wide.
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("debug_enabled", &self.debug_enabled())
            .finish_non_exhaustive()
    }
}

fn now() -> OffsetDateTime {
    // The local offset can be indeterminate on some platforms; UTC is the
    // documented fallback.
    OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc())
}

fn normalize_message(raw: &str) -> String {
    raw.replace('\n', " ").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_tags_are_the_rendered_literals() {
        assert_eq!(Severity::Info.as_str(), "INFO");
        assert_eq!(Severity::Debug.as_str(), "DEBUG");
    }

    #[test]
    fn normalize_collapses_newlines_to_spaces() {
        assert_eq!(normalize_message("a\nb"), "a b");
        assert_eq!(normalize_message("a\n\nb"), "a  b");
    }

    #[test]
    fn normalize_trims_surrounding_whitespace() {
        assert_eq!(normalize_message("\nhello\n"), "hello");
        assert_eq!(normalize_message("  spaced\t"), "spaced");
        assert_eq!(normalize_message("trailing\n\n\n\n"), "trailing");
    }
}
