//! # Numeric Parsing and Formatting
//!
//! Shared helpers for turning raw user text into floats and floats back into
//! report text. The shop's operators type numbers with either "," or "." as
//! the decimal separator, so both are accepted everywhere.
//!
//! Parsing follows a strict-required / lenient-optional policy: a required
//! field that is empty or unparsable is a [`CalcError::MissingField`], while
//! optional loss fields quietly fall back to 0.
//!
//! ## Example
//!
//! ```rust
//! use yield_core::numeric::{fmt_fixed, parse_decimal, parse_optional};
//!
//! assert_eq!(parse_decimal("bar_length_mm", "10,5").unwrap(), 10.5);
//! assert_eq!(parse_optional("not a number"), 0.0);
//! assert_eq!(fmt_fixed(1.0 / 3.0, 6), "0.333333");
//! ```

use crate::errors::{CalcError, CalcResult};

/// Parse a required numeric field from raw user text.
///
/// Accepts both "." and "," as decimal separator. Empty or non-numeric
/// input fails with [`CalcError::MissingField`] naming the field.
pub fn parse_decimal(field: &str, raw: &str) -> CalcResult<f64> {
    raw.trim()
        .replace(',', ".")
        .parse::<f64>()
        .map_err(|_| CalcError::missing_field(field))
}

/// Parse an optional numeric field, defaulting to 0 when absent or unparsable.
///
/// Used for the loss fields (kerf, nesting loss), which the original tool
/// treats as "blank means none".
pub fn parse_optional(raw: &str) -> f64 {
    raw.trim().replace(',', ".").parse::<f64>().unwrap_or(0.0)
}

/// Format a value with a fixed number of decimal digits, never scientific.
///
/// Report lines use 0 decimals for lengths and counts, 2 for percentages,
/// and 6 for factors and areas.
pub fn fmt_fixed(x: f64, decimals: usize) -> String {
    format!("{x:.decimals$}")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_parse_both_separators() {
        assert_eq!(parse_decimal("w", "10.5").unwrap(), 10.5);
        assert_eq!(parse_decimal("w", "10,5").unwrap(), 10.5);
    }

    #[test]
    fn test_parse_trims_whitespace() {
        assert_eq!(parse_decimal("w", "  42 ").unwrap(), 42.0);
    }

    #[test]
    fn test_parse_rejects_empty_and_garbage() {
        assert_eq!(
            parse_decimal("piece_length_mm", "").unwrap_err(),
            CalcError::missing_field("piece_length_mm")
        );
        assert!(parse_decimal("w", "abc").is_err());
    }

    #[test]
    fn test_optional_defaults_to_zero() {
        assert_eq!(parse_optional(""), 0.0);
        assert_eq!(parse_optional("abc"), 0.0);
        assert_eq!(parse_optional("2,5"), 2.5);
    }

    #[test]
    fn test_fmt_fixed() {
        assert_eq!(fmt_fixed(1000.0, 0), "1000");
        assert_eq!(fmt_fixed(90.0, 2), "90.00");
        assert_eq!(fmt_fixed(1.0 / 3.0, 6), "0.333333");
        // Fixed-point even for small magnitudes, never scientific
        assert_eq!(fmt_fixed(0.011667, 6), "0.011667");
    }
}
