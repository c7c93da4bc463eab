//! Stepwise construction for the cases `Logger::new` does not cover:
//! a different sink, or colors turned off for piped output.

use super::{Logger, Sink};
use crate::level::Level;
use std::io::{self, Write};
use std::sync::Mutex;

/// Collects threshold, colors, and sink before the logger becomes immutable.
pub struct LoggerBuilder {
    min_level: Level,
    colors: bool,
    sink: Sink,
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl LoggerBuilder {
    /// Info threshold, colors on, stdout.
    #[must_use]
    pub fn new() -> Self {
        Self {
            min_level: Level::Info,
            colors: true,
            sink: Box::new(io::stdout()),
        }
    }

    /// Noisy low-level messages slow down production output.
    #[must_use]
    pub const fn level(mut self, level: Level) -> Self {
        self.min_level = level;
        self
    }

    /// Piped output and CI logs usually cannot render ANSI escapes.
    #[must_use]
    pub const fn colors(mut self, enabled: bool) -> Self {
        self.colors = enabled;
        self
    }

    /// Any byte stream: a file, a socket, an in-memory buffer in tests.
    #[must_use]
    pub fn sink(mut self, sink: impl Write + Send + 'static) -> Self {
        self.sink = Box::new(sink);
        self
    }

    /// The sink and threshold are fixed from here on, so a built logger needs no reconfiguration locks.
    #[must_use]
    pub fn build(self) -> Logger {
        Logger {
            min_level: self.min_level,
            colors: self.colors,
            sink: Mutex::new(self.sink),
        }
    }
}
