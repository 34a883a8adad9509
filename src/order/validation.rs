//! Order number validation
//!
//! Path segments for delete/recreate/fetch are checked here before any
//! store access. A value passes when it is a numeric literal: optional
//! surrounding whitespace, optional sign, digits with an optional fraction
//! (or a bare fraction such as `.5`), and an optional exponent.

use super::error::OrderError;

fn is_space(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\r' | 0x0B | 0x0C)
}

/// Numeric literal predicate (integer or float lexical form)
pub fn is_numeric(value: &str) -> bool {
    let bytes = value.as_bytes();
    let mut i = 0;
    let end = bytes.len();

    while i < end && is_space(bytes[i]) {
        i += 1;
    }
    if i < end && (bytes[i] == b'+' || bytes[i] == b'-') {
        i += 1;
    }

    let int_start = i;
    while i < end && bytes[i].is_ascii_digit() {
        i += 1;
    }
    let mut digits = i - int_start;

    if i < end && bytes[i] == b'.' {
        i += 1;
        let frac_start = i;
        while i < end && bytes[i].is_ascii_digit() {
            i += 1;
        }
        digits += i - frac_start;
    }
    if digits == 0 {
        return false;
    }

    if i < end && (bytes[i] == b'e' || bytes[i] == b'E') {
        let mut j = i + 1;
        if j < end && (bytes[j] == b'+' || bytes[j] == b'-') {
            j += 1;
        }
        let exp_start = j;
        while j < end && bytes[j].is_ascii_digit() {
            j += 1;
        }
        if j == exp_start {
            return false;
        }
        i = j;
    }

    while i < end && is_space(bytes[i]) {
        i += 1;
    }
    i == end
}

/// Validate a raw order number.
///
/// - `Err(InvalidOrderNumber)` when the value is not numeric
/// - `Ok(None)` when it is numeric but cannot name a stored order
///   (fractional, or out of id range)
/// - `Ok(Some(id))` otherwise
pub fn parse_order_number(raw: &str) -> Result<Option<i64>, OrderError> {
    if !is_numeric(raw) {
        return Err(OrderError::InvalidOrderNumber(raw.to_string()));
    }
    let trimmed = raw.trim_matches(|c: char| c.is_ascii() && is_space(c as u8));

    if let Ok(id) = trimmed.parse::<i64>() {
        return Ok(Some(id));
    }

    // Float forms: "12.0", "1e3"
    match trimmed.parse::<f64>() {
        Ok(v) if is_whole_i64(v) => Ok(Some(v as i64)),
        _ => Ok(None),
    }
}

fn is_whole_i64(v: f64) -> bool {
    v.is_finite() && v.fract() == 0.0 && v >= i64::MIN as f64 && v < i64::MAX as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integers_are_numeric() {
        assert!(is_numeric("1"));
        assert!(is_numeric("42"));
        assert!(is_numeric("-7"));
        assert!(is_numeric("+7"));
        assert!(is_numeric("007"));
    }

    #[test]
    fn test_float_forms_are_numeric() {
        assert!(is_numeric("1.5"));
        assert!(is_numeric(".5"));
        assert!(is_numeric("5."));
        assert!(is_numeric("1e3"));
        assert!(is_numeric("1.25E-2"));
        assert!(is_numeric(" 12 "));
    }

    #[test]
    fn test_non_numeric_rejected() {
        assert!(!is_numeric(""));
        assert!(!is_numeric(" "));
        assert!(!is_numeric("abc"));
        assert!(!is_numeric("12abc"));
        assert!(!is_numeric("0x1A"));
        assert!(!is_numeric("."));
        assert!(!is_numeric("-"));
        assert!(!is_numeric("1e"));
        assert!(!is_numeric("1.2.3"));
        assert!(!is_numeric("inf"));
        assert!(!is_numeric("NaN"));
        assert!(!is_numeric("1 2"));
    }

    #[test]
    fn test_parse_order_number() {
        assert_eq!(parse_order_number("15").unwrap(), Some(15));
        assert_eq!(parse_order_number("15.0").unwrap(), Some(15));
        assert_eq!(parse_order_number("1e2").unwrap(), Some(100));
        assert_eq!(parse_order_number(" 8").unwrap(), Some(8));
        assert_eq!(parse_order_number("1.5").unwrap(), None);
        assert_eq!(parse_order_number("1e300").unwrap(), None);
        assert!(matches!(
            parse_order_number("abc"),
            Err(OrderError::InvalidOrderNumber(_))
        ));
    }
}
