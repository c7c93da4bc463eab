//! Line rendering: colored level tag, timestamp, message, and key-value suffix.

mod color;
mod line;
mod tag;

pub use color::Color;
pub use line::{TIMESTAMP_FORMAT, format_line, join_values, render_pairs};
pub use tag::{TAG_WIDTH, format_tag};
