//! Integration tests for the debug toggle.
//!
//! Debug calls must be complete no-ops while the toggle is off: no bytes
//! written, no message formatting. Info calls are emitted regardless of the
//! toggle.

use std::fmt;

use duolog::{LogFlags, Logger, SharedBuffer, Sink};

fn capture_logger(debug_enabled: bool) -> (Logger, SharedBuffer) {
    let buffer = SharedBuffer::new();
    let logger = Logger::new(
        Sink::from_writer(buffer.clone()),
        debug_enabled,
        LogFlags::NONE,
    );
    (logger, buffer)
}

/// Display implementor that panics if anything ever formats it.
struct MustNotFormat;

impl fmt::Display for MustNotFormat {
    fn fmt(&self, _f: &mut fmt::Formatter<'_>) -> fmt::Result {
        panic!("message was formatted despite the debug toggle being off");
    }
}

/// Verifies a disabled debug call writes nothing at all.
#[test]
fn debug_disabled_writes_no_bytes() {
    let (logger, buffer) = capture_logger(false);

    logger.debug("x");

    assert!(buffer.is_empty());
}

/// Verifies a disabled debug call never formats its message.
#[test]
fn debug_disabled_formats_nothing() {
    let (logger, buffer) = capture_logger(false);

    logger.debug(MustNotFormat);

    assert!(buffer.is_empty());
}

/// Verifies enabling the toggle turns debug calls into emitted lines.
#[test]
fn debug_emits_after_enable() {
    let (logger, buffer) = capture_logger(false);

    logger.set_debug(true);
    logger.debug(format_args!("ran for {} seconds.", 1));

    assert_eq!(buffer.text(), "[DEBUG] ran for 1 seconds.\n");
}

/// Verifies info emits regardless of the toggle state.
#[test]
fn info_ignores_the_toggle() {
    let (logger, buffer) = capture_logger(false);

    logger.info("always");
    logger.set_debug(true);
    logger.info("still");

    assert_eq!(buffer.text(), "[INFO] always\n[INFO] still\n");
}

/// Verifies the toggle can be flipped repeatedly.
#[test]
fn toggle_round_trip_gates_each_call() {
    let (logger, buffer) = capture_logger(true);

    logger.debug("first");
    logger.set_debug(false);
    logger.debug("suppressed");
    logger.set_debug(true);
    logger.debug("second");

    assert_eq!(buffer.text(), "[DEBUG] first\n[DEBUG] second\n");
    assert!(logger.debug_enabled());
}

/// Verifies debug_at honors the toggle like the track_caller path.
#[test]
fn debug_at_is_gated_by_the_toggle() {
    let (logger, buffer) = capture_logger(false);

    logger.debug_at(duolog::SourceLocation::unknown(), MustNotFormat);

    assert!(buffer.is_empty());
}
