//! Output formatting for different formats.

use clap::ValueEnum;
use serde::Serialize;

/// Available output formats.
#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable report with colors
    #[default]
    Pretty,
    /// JSON output
    Json,
}

/// Print `value` as pretty JSON on stdout.
pub fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Shorten a hex fingerprint for display.
#[must_use]
pub fn short_hex(hex: &str) -> &str {
    &hex[..hex.len().min(16)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_hex_truncates() {
        assert_eq!(short_hex("0123456789abcdef0123"), "0123456789abcdef");
        assert_eq!(short_hex("abcd"), "abcd");
    }
}
