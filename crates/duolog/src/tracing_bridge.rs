//! crates/duolog/src/tracing_bridge.rs
//! Bridge between the tracing crate and the two-level logger.
//!
//! This module provides a tracing-subscriber layer that forwards tracing
//! events into a [`Logger`]. It enables using standard Rust tracing macros
//! (`trace!`, `debug!`, `info!`, `warn!`, `error!`) while keeping the
//! facility's two-level output: errors and warnings are things users care
//! about, so `ERROR`, `WARN`, and `INFO` events emit at info level, while
//! `DEBUG` and `TRACE` events emit at debug level and honor the logger's
//! debug toggle.
//!
//! # Usage
//!
//! ```rust,ignore
//! use duolog::{LogFlags, Logger, Sink};
//! use duolog::tracing_bridge::init_tracing;
//!
//! init_tracing(Logger::new(Sink::stderr(), false, LogFlags::STD));
//!
//! // Now standard tracing macros reach the logger.
//! tracing::info!("copying file");
//! tracing::debug!("computing delta");
//! ```

use tracing::{Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer};
use tracing_subscriber::registry::LookupSpan;

use crate::location::SourceLocation;
use crate::logger::Logger;

/// A tracing layer that forwards events into a [`Logger`].
///
/// The layer owns its logger; handing it the process default is done by
/// configuring a fresh logger with the same sink, since the default instance
/// is reached through the crate's free functions rather than by value.
pub struct ForwardLayer {
    logger: Logger,
}

impl ForwardLayer {
    /// Creates a layer emitting into `logger`.
    #[must_use]
    pub fn new(logger: Logger) -> Self {
        Self { logger }
    }

    /// Maps a tracing level onto the facility's two severities.
    const fn is_debug_level(level: &Level) -> bool {
        matches!(*level, Level::DEBUG | Level::TRACE)
    }
}

impl<S> Layer<S> for ForwardLayer
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        let debug_level = Self::is_debug_level(metadata.level());
        if debug_level && !self.logger.debug_enabled() {
            return;
        }

        let mut visitor = MessageVisitor::default();
        event.record(&mut visitor);
        let message = visitor.render();

        let location = match (metadata.file(), metadata.line()) {
            (Some(file), Some(line)) => SourceLocation::new(file, line),
            _ => SourceLocation::unknown(),
        };

        if debug_level {
            self.logger.debug_at(location, message);
        } else {
            self.logger.info_at(location, message);
        }
    }
}

/// Visitor extracting the message and remaining fields from an event.
#[derive(Default)]
struct MessageVisitor {
    message: Option<String>,
    fields: String,
}

impl MessageVisitor {
    fn render(self) -> String {
        let mut message = self.message.unwrap_or_default();
        message.push_str(&self.fields);
        message
    }
}

impl tracing::field::Visit for MessageVisitor {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            self.message = Some(format!("{value:?}"));
        } else {
            self.fields.push_str(&format!(" {}={:?}", field.name(), value));
        }
    }

    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        if field.name() == "message" {
            self.message = Some(value.to_owned());
        } else {
            self.fields.push_str(&format!(" {}={}", field.name(), value));
        }
    }
}

/// Installs a [`ForwardLayer`] around `logger` as the global subscriber.
///
/// Panics if a global subscriber is already installed; tests that need a
/// scoped subscriber should build the layer themselves and use
/// `tracing::subscriber::with_default`.
pub fn init_tracing(logger: Logger) {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    tracing_subscriber::registry()
        .with(ForwardLayer::new(logger))
        .init();
}
