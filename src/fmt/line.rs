//! Assembles one complete output line. Kept free of I/O so benches and tests
//! can render lines against a fixed timestamp.

use super::tag::format_tag;
use crate::level::Level;
use chrono::{DateTime, TimeZone};
use std::fmt::{Display, Write};

/// Local wall-clock time, second precision.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// `<tag> [<timestamp>] <message>[ | k=v ...]\n`.
///
/// The ` | ` separator is appended whenever `kv` is non-empty; only complete
/// pairs are rendered, so an odd trailing element is dropped.
#[must_use]
pub fn format_line<Tz>(
    level: Level,
    timestamp: &DateTime<Tz>,
    message: &str,
    kv: &[&dyn Display],
    colors: bool,
) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let mut line = format!(
        "{} [{}] {message}",
        format_tag(level, colors),
        timestamp.format(TIMESTAMP_FORMAT)
    );

    if !kv.is_empty() {
        line.push_str(" | ");
        line.push_str(&render_pairs(kv));
    }

    line.push('\n');
    line
}

/// Renders alternating key/value tokens as `k1=v1 k2=v2`.
#[must_use]
pub fn render_pairs(kv: &[&dyn Display]) -> String {
    let mut out = String::new();
    for (i, pair) in kv.chunks_exact(2).enumerate() {
        if i > 0 {
            out.push(' ');
        }
        // Writing into a String cannot fail.
        let _ = write!(out, "{}={}", pair[0], pair[1]);
    }
    out
}

/// Space-joins printable values into a message, trimming trailing whitespace.
#[must_use]
pub fn join_values(values: &[&dyn Display]) -> String {
    let mut out = String::new();
    for value in values {
        let _ = write!(out, "{value} ");
    }
    out.truncate(out.trim_end().len());
    out
}
