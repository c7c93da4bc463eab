//! barelog's own diagnostics. These never go through a `Logger`: they report
//! problems configuring one, so they are written straight to a diagnostic stream.

use std::io::{self, Write};

/// Prefix that marks a line as coming from barelog itself.
pub const PREFIX: &str = "barelog";

/// Writes `barelog: <msg>` to `diag`. Failures are ignored like any log write.
pub fn warn_to(diag: &mut dyn Write, msg: &str) {
    let _ = writeln!(diag, "{PREFIX}: {msg}");
}

/// [`warn_to`] on stderr.
pub fn warn(msg: &str) {
    warn_to(&mut io::stderr(), msg);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefixes_message() {
        let mut buf = Vec::<u8>::new();
        warn_to(&mut buf, "something odd");
        assert_eq!(String::from_utf8(buf).unwrap(), "barelog: something odd\n");
    }
}
