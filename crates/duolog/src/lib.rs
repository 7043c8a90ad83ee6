#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! crates/duolog/src/lib.rs
//!
//! # Overview
//!
//! `duolog` is a line logger that supports exactly two levels:
//!
//! 1. Things users care about when running your software (`INFO`).
//! 2. Things developers care about while developing or debugging it
//!    (`DEBUG`).
//!
//! If you need to log an error, log it at info level — an error the user
//! can do nothing about is still information. If you are tempted to log a
//! warning, log it at debug level or not at all. If you need a fatal exit,
//! bubble the error up to `main` and exit gracefully there; this crate
//! deliberately has no equivalent.
//!
//! # Design
//!
//! The crate is built from three pieces. [`format_header`] is a pure
//! function turning a [`LogFlags`] set, a [`SourceLocation`], and a
//! timestamp into the optional line prefix. [`Logger`] owns an output
//! [`Sink`] and the current configuration behind one mutex, emits
//! `<header>[<LEVEL>] <message>` lines, and keeps its debug toggle in an
//! atomic so disabled debug calls cost a single load. A lazily-created
//! process-wide default instance backs the crate-level free functions and
//! the [`info!`] / [`debug!`] macros, giving zero-setup logging alongside
//! independently constructed instances.
//!
//! # Invariants
//!
//! - Every emitted line ends in exactly one newline; embedded newlines in
//!   the message are collapsed to single spaces and surrounding whitespace
//!   is trimmed.
//! - An empty flag set renders no prefix at all.
//! - Lines from concurrent emits on one logger never interleave; they land
//!   in lock-acquisition order.
//! - Debug calls while the toggle is off format nothing and write nothing.
//!
//! # Errors
//!
//! Logging calls are infallible in signature. A genuine sink write failure
//! is passed to the logger's [`ErrorHook`] when one is installed and
//! discarded otherwise; success paths construct no error value.
//!
//! # Examples
//!
//! ```
//! use duolog::{LogFlags, Logger, SharedBuffer, Sink};
//!
//! let buffer = SharedBuffer::new();
//! let logger = Logger::new(Sink::from_writer(buffer.clone()), false, LogFlags::NONE);
//!
//! logger.info("App Started.");
//! logger.debug("Taking time measurement...");
//!
//! // Setting debug enables the debug level.
//! logger.set_debug(true);
//! logger.debug(format_args!("App ran for {} seconds.", 1));
//! logger.info("App Exiting.");
//!
//! assert_eq!(
//!     buffer.text(),
//!     "[INFO] App Started.\n[DEBUG] App ran for 1 seconds.\n[INFO] App Exiting.\n"
//! );
//! ```
//!
//! # See also
//!
//! - [`duolog_sink`] for the sink primitives loggers write into.
//! - The `tracing` feature's `tracing_bridge` module for routing standard
//!   tracing macros through a logger.

mod flags;
mod global;
mod header;
mod location;
mod logger;
mod macros;
#[cfg(feature = "tracing")]
pub mod tracing_bridge;

pub use duolog_sink::{SharedBuffer, Sink};

pub use flags::LogFlags;
pub use global::{debug, default_logger, info, set_debug, set_error_hook, set_flags, set_output};
pub use header::format_header;
pub use location::SourceLocation;
pub use logger::{ErrorHook, Logger, Severity};
#[cfg(feature = "tracing")]
pub use tracing_bridge::{ForwardLayer, init_tracing};
