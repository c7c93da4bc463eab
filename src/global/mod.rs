//! Process-wide default logger and the free functions that forward to it.
//!
//! Prefer passing a `Logger` (or a [`Context`](crate::Context)) explicitly; the
//! default exists for code that has neither. Replacement is last-writer-wins:
//! every call reads the current default, so a `set_default` takes effect for all
//! subsequent calls, while an `Arc<Logger>` fetched earlier keeps the old one.

use crate::config;
use crate::level::Level;
use crate::logger::Logger;
use std::fmt::Display;
use std::io::{self, Write};
use std::sync::{Arc, LazyLock, PoisonError, RwLock};

static DEFAULT_LOGGER: LazyLock<RwLock<Arc<Logger>>> =
    LazyLock::new(|| RwLock::new(Arc::new(Logger::new(Level::Info))));

/// Replaces the default logger. `None` is ignored and the previous default stays.
pub fn set_default(logger: impl Into<Option<Arc<Logger>>>) {
    let Some(logger) = logger.into() else {
        return;
    };
    *DEFAULT_LOGGER
        .write()
        .unwrap_or_else(PoisonError::into_inner) = logger;
}

/// The current default, read at call time.
#[must_use]
pub fn default_logger() -> Arc<Logger> {
    DEFAULT_LOGGER
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .clone()
}

/// Configures the default logger from `BARELOG_LEVEL`.
///
/// Unrecognized values fall back to Info and print one warning on stderr.
pub fn init() {
    let value = std::env::var(config::ENV_LEVEL).unwrap_or_default();
    init_from_value(&value, &mut io::stderr());
}

/// [`init`] with the raw value and the diagnostic stream supplied by the caller.
pub fn init_from_value(value: &str, diag: &mut dyn Write) -> Level {
    let level = config::resolve_level(value, diag);
    set_default(Arc::new(Logger::new(level)));
    level
}

/// Development-time diagnostics, hidden unless the threshold is Debug.
pub fn debug(msg: &str, kv: &[&dyn Display]) {
    default_logger().debug(msg, kv);
}

/// Normal operational milestones: started, connected, config loaded.
pub fn info(msg: &str, kv: &[&dyn Display]) {
    default_logger().info(msg, kv);
}

/// Non-fatal anomalies that may need attention.
pub fn warn(msg: &str, kv: &[&dyn Display]) {
    default_logger().warn(msg, kv);
}

/// Failures that stopped an operation from completing.
pub fn error(msg: &str, kv: &[&dyn Display]) {
    default_logger().error(msg, kv);
}

/// Debug level, message built from space-joined values.
pub fn debug_args(values: &[&dyn Display]) {
    default_logger().debug_args(values);
}

/// Info level, message built from space-joined values.
pub fn info_args(values: &[&dyn Display]) {
    default_logger().info_args(values);
}

/// Warn level, message built from space-joined values.
pub fn warn_args(values: &[&dyn Display]) {
    default_logger().warn_args(values);
}

/// Error level, message built from space-joined values.
pub fn error_args(values: &[&dyn Display]) {
    default_logger().error_args(values);
}
