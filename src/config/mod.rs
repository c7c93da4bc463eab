//! Configuration: the `BARELOG_LEVEL` environment variable, optionally layered
//! over a small TOML file.
//!
//! Unknown level strings never abort. They fall back to Info and leave one
//! warning on the diagnostic stream.

use crate::internal;
use crate::level::Level;
use crate::logger::Logger;
use serde::Deserialize;
use std::fs;
use std::io::Write;
use std::path::Path;

/// Environment variable holding the default threshold.
pub const ENV_LEVEL: &str = "BARELOG_LEVEL";

/// Case-insensitive level lookup where the empty string means "use the default".
///
/// # Errors
/// [`crate::Error::InvalidLevel`] with the lowercased input for anything that is
/// not `debug`, `info`, `warn`, `warning`, `error`, or empty.
pub fn parse_level(value: &str) -> Result<Level, crate::Error> {
    let value = value.to_lowercase();
    if value.is_empty() {
        return Ok(Level::default());
    }
    Ok(value.parse::<Level>()?)
}

/// [`parse_level`] with the fallback applied: unknown values become Info and
/// a warning naming them goes to `diag`.
pub fn resolve_level(value: &str, diag: &mut dyn Write) -> Level {
    parse_level(value).unwrap_or_else(|err| {
        internal::warn_to(diag, &format!("{err}, using INFO"));
        Level::Info
    })
}

/// An empty file still yields a working logger: every field has a default.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Kept as a string so a typo degrades to Info instead of failing the whole file.
    pub level: String,
    pub colors: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            level: Level::default().as_str().to_string(),
            colors: true,
        }
    }
}

impl Config {
    /// Embedders may ship their config inline rather than as a file.
    ///
    /// # Errors
    /// Returns an error if `content` is not valid TOML for this schema.
    pub fn from_toml(content: &str) -> Result<Self, crate::Error> {
        Ok(toml::from_str(content)?)
    }

    /// Reads a TOML file such as the one passed to `barelog --config`.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self, crate::Error> {
        let content = fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Defaults with `BARELOG_LEVEL` applied.
    #[must_use]
    pub fn from_env() -> Self {
        Self::default().with_env_overrides()
    }

    /// A set, non-empty `BARELOG_LEVEL` wins over the configured level.
    #[must_use]
    pub fn with_env_overrides(self) -> Self {
        match std::env::var(ENV_LEVEL) {
            Ok(level) => self.with_level_override(&level),
            Err(_) => self,
        }
    }

    /// Applies an externally supplied level string unless it is empty.
    #[must_use]
    pub fn with_level_override(mut self, level: &str) -> Self {
        if !level.is_empty() {
            self.level = level.to_string();
        }
        self
    }

    /// Resolves the configured level, warning on `diag` if it is unrecognized.
    pub fn parse_level(&self, diag: &mut dyn Write) -> Level {
        resolve_level(&self.level, diag)
    }

    /// Stdout logger with the configured threshold and colors.
    pub fn build_logger(&self, diag: &mut dyn Write) -> Logger {
        Logger::builder()
            .level(self.parse_level(diag))
            .colors(self.colors)
            .build()
    }
}
