//! Routes standard tracing macros through a duolog logger.
//!
//! Run with `cargo run --example tracing_demo --features tracing`.

use duolog::tracing_bridge::init_tracing;
use duolog::{LogFlags, Logger, Sink};

fn main() {
    let logger = Logger::new(Sink::stdout(), true, LogFlags::DATE | LogFlags::TIME);
    init_tracing(logger);

    tracing::info!("application started");
    tracing::info!(attempts = 1, "connecting to upstream");
    tracing::debug!("handshake payload assembled");
    tracing::warn!("upstream slow to respond");
}
