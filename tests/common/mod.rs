//! Shared helpers for the integration tests.

#![allow(dead_code)]

use barelog::{Level, Logger};
use regex::Regex;
use std::io::{self, Write};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Cloneable in-memory sink; clones share the same buffer.
#[derive(Clone, Default)]
pub struct Capture(Arc<Mutex<Vec<u8>>>);

impl Capture {
    pub fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }

    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(str::to_string).collect()
    }
}

impl Write for Capture {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Logger writing uncolored lines into a fresh capture buffer.
pub fn capturing(level: Level) -> (Logger, Capture) {
    let capture = Capture::default();
    let logger = Logger::builder()
        .level(level)
        .colors(false)
        .sink(capture.clone())
        .build();
    (logger, capture)
}

pub fn timestamp_regex() -> Regex {
    Regex::new(r"\[\d{4}-\d{2}-\d{2} \d{2}:\d{2}:\d{2}\]").unwrap()
}

static DEFAULT_GUARD: Mutex<()> = Mutex::new(());

/// Serializes tests that replace the process-wide default logger.
pub fn lock_default() -> MutexGuard<'static, ()> {
    DEFAULT_GUARD.lock().unwrap_or_else(PoisonError::into_inner)
}
