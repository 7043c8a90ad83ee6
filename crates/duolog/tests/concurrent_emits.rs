//! Integration tests for concurrent emission through one shared logger.
//!
//! Lines from independent threads must land complete and non-interleaved;
//! each thread's own lines keep their program order, while cross-thread
//! order is unspecified.

use std::sync::Arc;
use std::thread;

use duolog::{LogFlags, Logger, SharedBuffer, Sink};

const THREADS: usize = 8;
const LINES_PER_THREAD: usize = 25;

/// Verifies N threads produce N complete lines with no partial writes.
#[test]
fn concurrent_emits_produce_whole_lines() {
    let buffer = SharedBuffer::new();
    let logger = Arc::new(Logger::new(
        Sink::from_writer(buffer.clone()),
        false,
        LogFlags::NONE,
    ));

    let handles: Vec<_> = (0..THREADS)
        .map(|thread_id| {
            let logger = Arc::clone(&logger);
            thread::spawn(move || {
                for line in 0..LINES_PER_THREAD {
                    logger.info(format_args!("thread {thread_id} line {line}"));
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().expect("logging thread panicked");
    }

    let output = buffer.text();
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines.len(), THREADS * LINES_PER_THREAD);

    for line in &lines {
        assert!(
            line.starts_with("[INFO] thread "),
            "garbled line: {line:?}"
        );
        assert!(line.contains(" line "), "garbled line: {line:?}");
    }
}

/// Verifies each thread's lines appear in its own program order.
#[test]
fn per_thread_order_is_preserved() {
    let buffer = SharedBuffer::new();
    let logger = Arc::new(Logger::new(
        Sink::from_writer(buffer.clone()),
        false,
        LogFlags::NONE,
    ));

    let handles: Vec<_> = (0..THREADS)
        .map(|thread_id| {
            let logger = Arc::clone(&logger);
            thread::spawn(move || {
                for line in 0..LINES_PER_THREAD {
                    logger.info(format_args!("{thread_id} {line}"));
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().expect("logging thread panicked");
    }

    let output = buffer.text();
    let mut next_expected = [0usize; THREADS];
    for line in output.lines() {
        let body = line.strip_prefix("[INFO] ").expect("severity tag present");
        let mut parts = body.split_whitespace();
        let thread_id: usize = parts
            .next()
            .and_then(|t| t.parse().ok())
            .expect("thread id");
        let sequence: usize = parts
            .next()
            .and_then(|s| s.parse().ok())
            .expect("sequence number");

        assert_eq!(
            sequence, next_expected[thread_id],
            "thread {thread_id} emitted out of order"
        );
        next_expected[thread_id] += 1;
    }

    assert!(next_expected.iter().all(|&n| n == LINES_PER_THREAD));
}

/// Verifies concurrent configuration changes never corrupt emitted lines.
#[test]
fn concurrent_reconfiguration_keeps_lines_whole() {
    let buffer = SharedBuffer::new();
    let logger = Arc::new(Logger::new(
        Sink::from_writer(buffer.clone()),
        false,
        LogFlags::NONE,
    ));

    let writer = {
        let logger = Arc::clone(&logger);
        thread::spawn(move || {
            for line in 0..LINES_PER_THREAD {
                logger.info(format_args!("payload {line}"));
            }
        })
    };
    let reconfigurer = {
        let logger = Arc::clone(&logger);
        thread::spawn(move || {
            for _ in 0..LINES_PER_THREAD {
                logger.set_flags(LogFlags::NONE);
                logger.set_debug(false);
            }
        })
    };
    writer.join().expect("writer panicked");
    reconfigurer.join().expect("reconfigurer panicked");

    let output = buffer.text();
    assert_eq!(output.lines().count(), LINES_PER_THREAD);
    for line in output.lines() {
        assert!(line.starts_with("[INFO] payload "), "garbled line: {line:?}");
    }
}
