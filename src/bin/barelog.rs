//! `barelog <severity> <message> [KEY VALUE ...]`
//!
//! Emits one line on stdout. The threshold comes from `--level`, else
//! `BARELOG_LEVEL`, else a `--config` file, else info.

use barelog::cli::Cli;
use barelog::internal;
use clap::Parser;
use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();
    match cli.run(&mut io::stderr()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            internal::warn(&e.to_string());
            ExitCode::FAILURE
        }
    }
}
