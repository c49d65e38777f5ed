//! CLI output formatting.

use std::io::{self, Write};
use std::path::Path;
use std::time::Duration;

use num_bigint::BigInt;

/// Values with more digits than this are abbreviated unless verbose.
const TRUNCATE_DIGITS: usize = 100;

/// Digits kept on each side of an abbreviated value.
const EDGE_DIGITS: usize = 50;

/// Format a `BigInt` for display, abbreviating long values as
/// `head...tail (N digits)`.
#[must_use]
pub fn format_result(value: &BigInt, verbose: bool) -> String {
    let s = value.to_string();
    let (sign, digits) = s.split_at(usize::from(s.starts_with('-')));
    if !verbose && digits.len() > TRUNCATE_DIGITS {
        format!(
            "{sign}{}...{} ({} digits)",
            &digits[..EDGE_DIGITS],
            &digits[digits.len() - EDGE_DIGITS..],
            digits.len()
        )
    } else {
        s
    }
}

/// Number of decimal digits in `value`, ignoring the sign.
#[must_use]
pub fn digit_count(value: &BigInt) -> usize {
    let s = value.to_string();
    s.trim_start_matches('-').len()
}

/// Format a duration with a unit suited to its magnitude.
#[must_use]
pub fn format_duration(d: Duration) -> String {
    if d < Duration::from_millis(1) {
        format!("{:.2}µs", d.as_secs_f64() * 1e6)
    } else if d < Duration::from_secs(1) {
        format!("{:.2}ms", d.as_secs_f64() * 1e3)
    } else if d < Duration::from_secs(60) {
        format!("{:.3}s", d.as_secs_f64())
    } else {
        let mins = d.as_secs() / 60;
        let rest = d - Duration::from_secs(mins * 60);
        format!("{mins}m{:.1}s", rest.as_secs_f64())
    }
}

/// Group the digits of `n` in threes: `1234567` becomes `1,234,567`.
#[must_use]
pub fn format_number(n: u64) -> String {
    let digits = n.to_string();
    let len = digits.len();
    let mut grouped = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Write a value to a file, followed by a newline.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be created or written.
pub fn write_to_file(path: &Path, value: &BigInt) -> io::Result<()> {
    let mut file = std::fs::File::create(path)?;
    writeln!(file, "{value}")?;
    tracing::debug!(path = %path.display(), "wrote result to file");
    Ok(())
}
