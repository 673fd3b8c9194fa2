//! # Lenient Scalar Conversions
//!
//! String-to-number conversions that never fail. They read the longest
//! numeric prefix of the input and ignore the rest, so `"42px"` is `42`
//! and `"foobar"` is `0`. Underscores are accepted between digits
//! (`"1_000"` is `1000`).
//!
//! These are the conversions that loosely-typed models expect when a
//! string column is exposed through an integer or number field.

/// Parse the leading integer of `s`, ignoring leading whitespace.
///
/// Returns 0 when no digits are found. Saturates at the `i64` bounds.
pub fn parse_leading_int(s: &str) -> i64 {
    let s = s.trim_start();
    let bytes = s.as_bytes();
    let start = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let len = scan_digits(bytes, start);
    if len == 0 {
        return 0;
    }

    let negative = bytes.first() == Some(&b'-');
    let literal: String = s[..start + len].chars().filter(|c| *c != '_').collect();
    literal
        .parse::<i64>()
        .unwrap_or(if negative { i64::MIN } else { i64::MAX })
}

/// Parse the leading decimal float of `s`, ignoring leading whitespace.
///
/// Accepts an optional sign, integer digits, a fractional part, and an
/// exponent. Returns 0.0 when no mantissa digits are found or when the
/// result is not finite.
pub fn parse_leading_float(s: &str) -> f64 {
    let s = s.trim_start();
    let bytes = s.as_bytes();
    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));

    let int_len = scan_digits(bytes, end);
    end += int_len;
    let mut has_mantissa = int_len > 0;

    if bytes.get(end) == Some(&b'.') {
        let frac_len = scan_digits(bytes, end + 1);
        if frac_len > 0 {
            end += 1 + frac_len;
            has_mantissa = true;
        }
    }
    if !has_mantissa {
        return 0.0;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_start = end + 1;
        if matches!(bytes.get(exp_start), Some(b'+' | b'-')) {
            exp_start += 1;
        }
        let exp_len = scan_digits(bytes, exp_start);
        if exp_len > 0 {
            end = exp_start + exp_len;
        }
    }

    let literal: String = s[..end].chars().filter(|c| *c != '_').collect();
    literal
        .parse::<f64>()
        .ok()
        .filter(|f| f.is_finite())
        .unwrap_or(0.0)
}

/// Length of the digit run starting at `start`. A single underscore is
/// allowed only between two digits.
fn scan_digits(bytes: &[u8], start: usize) -> usize {
    let mut i = start;
    while i < bytes.len() {
        match bytes[i] {
            b'0'..=b'9' => i += 1,
            b'_' if i > start
                && bytes[i - 1].is_ascii_digit()
                && bytes.get(i + 1).is_some_and(u8::is_ascii_digit) =>
            {
                i += 1
            }
            _ => break,
        }
    }
    i - start
}

/// Render a float the way dynamic runtimes print it: integral values keep
/// a trailing `.0`, everything else uses the shortest round-trip form.
pub fn format_float(value: f64) -> String {
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e16 {
        format!("{value:.1}")
    } else {
        value.to_string()
    }
}

/// Truncate a float toward zero. NaN becomes 0, out-of-range values saturate.
pub fn truncate_float(value: f64) -> i64 {
    // `as` saturates and maps NaN to 0.
    value as i64
}
