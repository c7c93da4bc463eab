//! `barelog` - minimal leveled logging.
//!
//! Each emitted line carries a colored level tag, a local timestamp, the
//! message, and optional `key=value` pairs:
//!
//! ```text
//! WARN  [2025-06-02 15:04:05] disk almost full | mount=/var free=3%
//! ```
//!
//! # Example
//!
//! ```
//! use barelog::{Context, Level, Logger, args};
//! use std::sync::Arc;
//!
//! let logger = Logger::new(Level::Warn);
//! logger.info("filtered out", &[]);
//! logger.warn("disk almost full", args!["mount", "/var", "free", "3%"]);
//! logger.error_args(args!["retry", 3, "of", 5, "failed"]);
//!
//! // Scoped propagation: attach a logger to a context and hand it down.
//! let ctx = Context::background().with_logger(Arc::new(Logger::new(Level::Debug)));
//! ctx.logger().debug("visible in this scope", &[]);
//!
//! // Process-wide default, configured from `BARELOG_LEVEL`.
//! barelog::init();
//! barelog::info("started", args!["pid", std::process::id()]);
//! ```
//!
//! # Features
//!
//! - `cli` (default): builds the `barelog` command-line binary

pub mod config;
pub mod context;
pub mod error;
pub mod fmt;
pub mod global;
pub mod internal;
pub mod level;
pub mod logger;

#[cfg(feature = "cli")]
pub mod cli;

pub use config::Config;
pub use context::{Context, from_context, with_logger};
pub use error::Error;
pub use global::{
    debug, debug_args, default_logger, error, error_args, info, info_args, init,
    init_from_value, set_default, warn, warn_args,
};
pub use level::{Level, ParseLevelError};
pub use logger::{Logger, LoggerBuilder};

/// Builds a `&[&dyn Display]` slice for either calling convention: alternating
/// keys and values for `info(msg, kv)`, or message parts for `info_args(values)`.
///
/// ```
/// use barelog::{Level, Logger, args};
///
/// let logger = Logger::new(Level::Info);
/// logger.info("login", args!["user", "ana", "attempt", 2]);
/// ```
#[macro_export]
macro_rules! args {
    ($($value:expr),* $(,)?) => {
        &[$(&$value as &dyn ::core::fmt::Display),*]
    };
}
