//! Call-scoped logger propagation.
//!
//! A [`Context`] travels down a request or task and may carry a logger. The
//! association is a typed field, so independently built components cannot
//! collide on a shared key.

use crate::global;
use crate::logger::Logger;
use std::sync::Arc;

/// Immutable and cheap to clone; deriving never touches the parent.
#[derive(Debug, Clone, Default)]
pub struct Context {
    logger: Option<Arc<Logger>>,
}

impl Context {
    /// The root context: no logger attached.
    #[must_use]
    pub const fn background() -> Self {
        Self { logger: None }
    }

    /// Child context carrying `logger`, replacing any inherited attachment.
    #[must_use]
    pub fn with_logger(&self, logger: Arc<Logger>) -> Self {
        Self {
            logger: Some(logger),
            ..self.clone()
        }
    }

    /// Child context inheriting every attachment of `self`.
    #[must_use]
    pub fn child(&self) -> Self {
        self.clone()
    }

    /// The nearest attached logger, or the process-wide default at call time.
    #[must_use]
    pub fn logger(&self) -> Arc<Logger> {
        self.logger.clone().unwrap_or_else(global::default_logger)
    }

    /// Distinguishes an explicit attachment from the default fallback.
    #[must_use]
    pub const fn has_logger(&self) -> bool {
        self.logger.is_some()
    }
}

/// Free-function form of [`Context::with_logger`].
#[must_use]
pub fn with_logger(parent: &Context, logger: Arc<Logger>) -> Context {
    parent.with_logger(logger)
}

/// Free-function form of [`Context::logger`].
#[must_use]
pub fn from_context(ctx: &Context) -> Arc<Logger> {
    ctx.logger()
}
