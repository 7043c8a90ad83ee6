//! crates/duolog/src/global.rs
//! Process-wide default logger and its free-function facade.

use std::fmt;
use std::sync::OnceLock;

use duolog_sink::Sink;

use crate::flags::LogFlags;
use crate::logger::{ErrorHook, Logger};

static DEFAULT: OnceLock<Logger> = OnceLock::new();

/// Returns the process-wide default logger.
///
/// Created on first use with its fixed initial configuration: standard
/// error, debug disabled, [`LogFlags::STD`]. The instance lives for the
/// process lifetime and is reconfigured only through the setter functions
/// below (or this handle's own setters — tests typically swap the sink for
/// an in-memory buffer).
pub fn default_logger() -> &'static Logger {
    DEFAULT.get_or_init(|| Logger::new(Sink::stderr(), false, LogFlags::STD))
}

/// Logs at info level through the default logger.
#[track_caller]
pub fn info(message: impl fmt::Display) {
    default_logger().info(message);
}

/// Logs at debug level through the default logger.
#[track_caller]
pub fn debug(message: impl fmt::Display) {
    default_logger().debug(message);
}

/// Replaces the default logger's output sink.
pub fn set_output(sink: Sink) {
    default_logger().set_output(sink);
}

/// Replaces the default logger's prefix flag set.
pub fn set_flags(flags: LogFlags) {
    default_logger().set_flags(flags);
}

/// Enables or disables the default logger's debug level.
pub fn set_debug(enabled: bool) {
    default_logger().set_debug(enabled);
}

/// Installs or removes the default logger's write-failure observer.
pub fn set_error_hook(hook: Option<ErrorHook>) {
    default_logger().set_error_hook(hook);
}
