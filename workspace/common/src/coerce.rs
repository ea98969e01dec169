//! Lenient numeric coercion of raw form input.
//!
//! Form controls hand over strings. The prediction service expects numbers,
//! and the client never rejects a value: the longest leading numeric prefix
//! is parsed and anything that does not start with a number becomes 0.

use tracing::debug;

/// Parses a float the way a browser's `parseFloat` would, falling back to 0.
///
/// `"12.5"` → 12.5, `"12.5 GB"` → 12.5, `""` → 0, `"abc"` → 0.
pub fn coerce_float(input: &str) -> f64 {
    let prefix = numeric_prefix(input.trim_start(), true);
    match prefix.parse::<f64>() {
        // "-0" is sent as 0
        Ok(value) if value == 0.0 => 0.0,
        Ok(value) if value.is_finite() => value,
        _ => {
            debug!(input, "coercing non-numeric float input to 0");
            0.0
        }
    }
}

/// Parses an integer the way a browser's `parseInt` would, falling back to 0.
///
/// A fractional part is dropped rather than rounded: `"12.7"` → 12.
pub fn coerce_int(input: &str) -> i64 {
    let prefix = numeric_prefix(input.trim_start(), false);
    match prefix.parse::<i64>() {
        Ok(value) => value,
        Err(_) => {
            debug!(input, "coercing non-numeric integer input to 0");
            0
        }
    }
}

/// Returns the longest prefix of `input` that reads as a decimal number, or
/// an empty string when there are no digits before the first other character.
fn numeric_prefix(input: &str, allow_fraction: bool) -> &str {
    let bytes = input.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }

    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if allow_fraction {
        if bytes.get(end) == Some(&b'.') {
            let frac_start = end + 1;
            let mut frac_end = frac_start;
            while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
                frac_end += 1;
            }
            if digits > 0 || frac_end > frac_start {
                digits += frac_end - frac_start;
                end = frac_end;
            }
        }

        // An exponent only counts when it has digits of its own ("1e" is 1).
        if digits > 0 && matches!(bytes.get(end), Some(b'e' | b'E')) {
            let mut exp_end = end + 1;
            if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
                exp_end += 1;
            }
            let exp_digits = exp_end;
            while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
                exp_end += 1;
            }
            if exp_end > exp_digits {
                end = exp_end;
            }
        }
    }

    if digits == 0 { "" } else { &input[..end] }
}
