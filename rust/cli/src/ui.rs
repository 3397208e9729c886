//! UI helper functions for terminal output formatting.

use std::io::Write;

pub fn write_error(err: &mut dyn Write, msg: &str) -> std::io::Result<()> {
    writeln!(err, "Error: {}", msg)
}

/// Display a warning message to stderr with "WARNING:" prefix
pub fn display_warning(err: &mut dyn Write, message: &str) -> std::io::Result<()> {
    writeln!(err, "WARNING: {}", message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefixes_messages() {
        let mut err = Vec::new();
        write_error(&mut err, "bad card").unwrap();
        display_warning(&mut err, "seed ignored").unwrap();
        let text = String::from_utf8(err).unwrap();
        assert_eq!(text, "Error: bad card\nWARNING: seed ignored\n");
    }
}
