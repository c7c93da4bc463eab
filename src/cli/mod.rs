//! Command-line front end: one invocation emits one line.

use crate::config::Config;
use crate::level::Level;
use crate::logger::Logger;
use clap::Parser;
use std::fmt::Display;
use std::io::Write;
use std::path::PathBuf;

/// Level names accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum LogLevel {
    Debug,
    Info,
    #[value(alias = "warning")]
    Warn,
    Error,
}

impl From<LogLevel> for Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Debug => Self::Debug,
            LogLevel::Info => Self::Info,
            LogLevel::Warn => Self::Warn,
            LogLevel::Error => Self::Error,
        }
    }
}

/// barelog - print one leveled log line.
#[derive(Debug, Parser)]
#[command(name = "barelog", version, about = "Print one leveled log line")]
pub struct Cli {
    /// Minimum level to emit (overrides `BARELOG_LEVEL`, then `--config`, then info)
    #[arg(long, value_enum)]
    pub level: Option<LogLevel>,

    /// TOML file with `level` and `colors`
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Disable ANSI colors
    #[arg(long)]
    pub no_color: bool,

    /// Severity of this message
    #[arg(value_enum)]
    pub severity: LogLevel,

    /// Message text
    pub message: String,

    /// Alternating keys and values appended as key=value
    pub fields: Vec<String>,
}

impl Cli {
    /// Config file (if any), then `BARELOG_LEVEL`, then the flags; later steps win.
    ///
    /// # Errors
    /// Returns an error if the config file cannot be read or parsed.
    pub fn resolve_config(&self) -> Result<Config, crate::Error> {
        let mut config = match &self.config {
            Some(path) => Config::load_from(path)?.with_env_overrides(),
            None => Config::from_env(),
        };
        if let Some(level) = self.level {
            config.level = Level::from(level).as_str().to_string();
        }
        if self.no_color {
            config.colors = false;
        }
        Ok(config)
    }

    /// Builds the logger and writes the message.
    ///
    /// # Errors
    /// Returns an error if configuration fails or the final flush fails.
    pub fn run(&self, diag: &mut dyn Write) -> Result<(), crate::Error> {
        let logger = self.resolve_config()?.build_logger(diag);
        self.emit(&logger);
        logger.flush()
    }

    /// Writes the message through `logger` at the requested severity.
    pub fn emit(&self, logger: &Logger) {
        let fields: Vec<&dyn Display> = self.fields.iter().map(|f| f as &dyn Display).collect();
        logger.log(self.severity.into(), &self.message, &fields);
    }
}
