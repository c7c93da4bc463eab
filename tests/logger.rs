//! Tests for filtering and line output of an explicit logger.

mod common;

use barelog::{Level, Logger, args};
use common::{Capture, capturing, timestamp_regex};
use std::sync::Arc;
use std::thread;

fn emit_all(logger: &Logger) {
    logger.debug("at-debug", &[]);
    logger.info("at-info", &[]);
    logger.warn("at-warn", &[]);
    logger.error("at-error", &[]);
}

#[test]
fn builder_default() {
    let logger = Logger::builder().build();
    assert_eq!(logger.min_level(), Level::Info);
    assert!(logger.colors_enabled());
}

#[test]
fn new_uses_threshold() {
    let logger = Logger::new(Level::Warn);
    assert_eq!(logger.min_level(), Level::Warn);
    assert!(!logger.enabled(Level::Info));
    assert!(logger.enabled(Level::Warn));
}

#[test]
fn emits_iff_level_reaches_threshold() {
    for threshold in Level::all() {
        let (logger, capture) = capturing(threshold);
        emit_all(&logger);
        let output = capture.contents();

        for level in Level::all() {
            let marker = format!("at-{level}");
            assert_eq!(
                output.contains(&marker),
                level >= threshold,
                "threshold {threshold}, level {level}: {output:?}"
            );
        }
    }
}

#[test]
fn warn_threshold_scenario() {
    let (logger, capture) = capturing(Level::Warn);
    logger.info("x", &[]);
    assert_eq!(capture.contents(), "");

    logger.warn("y", &[]);
    let lines = capture.lines();
    assert_eq!(lines.len(), 1);
    assert!(lines[0].starts_with("WARN  "));
    assert!(timestamp_regex().is_match(&lines[0]));
    assert!(lines[0].ends_with("] y"));
}

#[test]
fn basic_formatting_is_colored() {
    let capture = Capture::default();
    let logger = Logger::builder()
        .level(Level::Debug)
        .sink(capture.clone())
        .build();

    logger.warn("something happened", &[]);
    let output = capture.contents();

    assert!(output.starts_with("\x1b[33mWARN \x1b[0m ["));
    assert!(output.contains("something happened"));
    assert!(timestamp_regex().is_match(&output));
    assert!(output.ends_with('\n'));
}

#[test]
fn key_value_pairs_are_appended() {
    let (logger, capture) = capturing(Level::Info);
    logger.info("login", args!["user", "ana", "attempt", 2]);
    assert!(capture.contents().ends_with("] login | user=ana attempt=2\n"));
}

#[test]
fn odd_key_value_element_is_dropped() {
    let (logger, capture) = capturing(Level::Info);
    logger.error("boom", args!["code", 500, "orphan"]);
    let output = capture.contents();
    assert!(output.ends_with("] boom | code=500\n"));
    assert!(!output.contains("orphan"));
}

#[test]
fn variadic_values_are_joined() {
    let (logger, capture) = capturing(Level::Debug);
    logger.debug_args(args!["retry", 3, "of", 5, "trailing  "]);
    assert!(capture.contents().ends_with("] retry 3 of 5 trailing\n"));
}

#[test]
fn variadic_respects_threshold() {
    let (logger, capture) = capturing(Level::Error);
    logger.warn_args(args!["hidden"]);
    logger.error_args(args!["shown", 1]);
    assert_eq!(capture.lines().len(), 1);
    assert!(capture.contents().contains("shown 1"));
}

#[test]
fn one_line_per_call() {
    let (logger, capture) = capturing(Level::Debug);
    emit_all(&logger);
    assert_eq!(capture.lines().len(), 4);
}

#[test]
fn concurrent_lines_do_not_interleave() {
    let (logger, capture) = capturing(Level::Info);
    let logger = Arc::new(logger);

    let handles: Vec<_> = (0..8)
        .map(|t| {
            let logger = Arc::clone(&logger);
            thread::spawn(move || {
                for i in 0..50 {
                    logger.info("tick", args!["thread", t, "i", i]);
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    let lines = capture.lines();
    assert_eq!(lines.len(), 400);
    for line in lines {
        assert!(line.starts_with("INFO  ["), "{line:?}");
        assert!(line.contains("] tick | thread="), "{line:?}");
    }
}

#[test]
fn flush_succeeds_on_memory_sink() {
    let (logger, _capture) = capturing(Level::Info);
    assert!(logger.flush().is_ok());
}
