//! Level tag rendering. A fixed width keeps the timestamp column aligned
//! across `INFO`, `WARN`, and `ERROR`.

use crate::level::Level;

/// Every tag occupies exactly this many columns before the timestamp.
pub const TAG_WIDTH: usize = 5;

/// Left-aligns (and truncates) the level label to [`TAG_WIDTH`], optionally colored.
#[must_use]
pub fn format_tag(level: Level, colors: bool) -> String {
    let padded = format!("{:<width$.width$}", level.label(), width = TAG_WIDTH);
    if colors {
        level.color().paint(&padded)
    } else {
        padded
    }
}
