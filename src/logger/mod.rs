//! The Logger: a threshold plus one sink, both fixed at construction.

mod builder;

pub use builder::LoggerBuilder;

use crate::fmt;
use crate::level::Level;
use chrono::Local;
use std::fmt::Display;
use std::io::Write;
use std::sync::{Mutex, MutexGuard, PoisonError};

pub(crate) type Sink = Box<dyn Write + Send>;

/// Immutable after build. The sink sits behind a mutex so each line is written
/// whole, even when one logger is shared across threads.
pub struct Logger {
    min_level: Level,
    colors: bool,
    sink: Mutex<Sink>,
}

impl Logger {
    /// Threshold `level`, colored output on stdout.
    #[must_use]
    pub fn new(level: Level) -> Self {
        Self::builder().level(level).build()
    }

    /// A different sink or plain output needs more than a threshold.
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    /// Whether a message at `level` would be written.
    #[must_use]
    pub fn enabled(&self, level: Level) -> bool {
        level >= self.min_level
    }

    /// Core dispatch: filters by severity, then formats and writes one line.
    ///
    /// `kv` holds alternating keys and values; an odd trailing element is dropped.
    pub fn log(&self, level: Level, msg: &str, kv: &[&dyn Display]) {
        if !self.enabled(level) {
            return;
        }
        let line = fmt::format_line(level, &Local::now(), msg, kv, self.colors);
        self.emit(&line);
    }

    /// Variadic convention: the values are space-joined into the message.
    pub fn log_args(&self, level: Level, values: &[&dyn Display]) {
        if !self.enabled(level) {
            return;
        }
        let msg = fmt::join_values(values);
        let line = fmt::format_line(level, &Local::now(), &msg, &[], self.colors);
        self.emit(&line);
    }

    /// Development-time diagnostics, hidden unless the threshold is Debug.
    pub fn debug(&self, msg: &str, kv: &[&dyn Display]) {
        self.log(Level::Debug, msg, kv);
    }

    /// Normal operational milestones: started, connected, config loaded.
    pub fn info(&self, msg: &str, kv: &[&dyn Display]) {
        self.log(Level::Info, msg, kv);
    }

    /// Non-fatal anomalies that may need attention.
    pub fn warn(&self, msg: &str, kv: &[&dyn Display]) {
        self.log(Level::Warn, msg, kv);
    }

    /// Failures that stopped an operation from completing.
    pub fn error(&self, msg: &str, kv: &[&dyn Display]) {
        self.log(Level::Error, msg, kv);
    }

    /// Debug level, message built from space-joined values.
    pub fn debug_args(&self, values: &[&dyn Display]) {
        self.log_args(Level::Debug, values);
    }

    /// Info level, message built from space-joined values.
    pub fn info_args(&self, values: &[&dyn Display]) {
        self.log_args(Level::Info, values);
    }

    /// Warn level, message built from space-joined values.
    pub fn warn_args(&self, values: &[&dyn Display]) {
        self.log_args(Level::Warn, values);
    }

    /// Error level, message built from space-joined values.
    pub fn error_args(&self, values: &[&dyn Display]) {
        self.log_args(Level::Error, values);
    }

    /// Flushes the sink. Every emitted line is already flushed; this is for sinks
    /// written to outside the logger.
    ///
    /// # Errors
    /// The I/O error reported by the sink.
    pub fn flush(&self) -> Result<(), crate::Error> {
        self.sink().flush()?;
        Ok(())
    }

    /// Tests and diagnostics need to verify which threshold is active.
    #[must_use]
    pub const fn min_level(&self) -> Level {
        self.min_level
    }

    /// Piped-output setups check whether ANSI escapes will be written.
    #[must_use]
    pub const fn colors_enabled(&self) -> bool {
        self.colors
    }

    // Write failures are not surfaced: logging is fire-and-forget.
    fn emit(&self, line: &str) {
        let mut sink = self.sink();
        let _ = sink.write_all(line.as_bytes());
        let _ = sink.flush();
    }

    // A panic inside another writer must not silence the logger for good.
    fn sink(&self) -> MutexGuard<'_, Sink> {
        self.sink.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new(Level::default())
    }
}

impl std::fmt::Debug for Logger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Logger")
            .field("min_level", &self.min_level)
            .field("colors", &self.colors)
            .finish_non_exhaustive()
    }
}
