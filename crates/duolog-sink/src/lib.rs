#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! crates/duolog-sink/src/lib.rs
//!
//! # Overview
//!
//! `duolog-sink` provides the output destination primitives the duolog
//! logger writes its formatted lines into. The crate deliberately knows
//! nothing about log levels, prefix flags, or line layout: it only answers
//! the question "where do the bytes go".
//!
//! # Design
//!
//! The crate exposes [`Sink`], a type-erased owned wrapper around an
//! [`std::io::Write`] implementor, with named constructors for the process
//! standard streams and arbitrary writers. A logger owns exactly one `Sink`
//! at a time and replaces it wholesale; the sink never closes or flushes a
//! writer it is dropping, leaving stream lifetime to the caller.
//!
//! [`SharedBuffer`] is the companion capture sink: a cheaply cloneable
//! in-memory buffer that can be handed to a logger as its destination while
//! the test or embedding code keeps a second handle to read back what was
//! written.
//!
//! # Invariants
//!
//! - A `Sink` forwards every [`write`](std::io::Write::write) and
//!   [`flush`](std::io::Write::flush) call unchanged to the wrapped writer.
//! - Dropping a `Sink` drops the wrapped writer without flushing it.
//! - All clones of a [`SharedBuffer`] observe the same byte sequence.
//!
//! # Errors
//!
//! All operations surface [`std::io::Error`] values originating from the
//! underlying writer. The in-memory [`SharedBuffer`] never fails.
//!
//! # Examples
//!
//! Capture written bytes through a cloned handle:
//!
//! ```
//! use std::io::Write;
//!
//! use duolog_sink::{SharedBuffer, Sink};
//!
//! let buffer = SharedBuffer::new();
//! let mut sink = Sink::from_writer(buffer.clone());
//!
//! sink.write_all(b"captured line\n").unwrap();
//!
//! assert_eq!(buffer.text(), "captured line\n");
//! ```

mod shared;
mod sink;

pub use shared::SharedBuffer;
pub use sink::Sink;
