//! # Lenient Conversion Properties
//!
//! The lenient conversions must agree with strict parsing whenever the
//! strict parse succeeds, and must never produce non-finite numbers.

use jss_core::convert::{format_float, parse_leading_float, parse_leading_int};
use jss_core::Input;
use proptest::prelude::*;

proptest! {
    /// Plain integer text parses to the same value as `str::parse`.
    #[test]
    fn leading_int_agrees_with_parse(n in any::<i64>()) {
        prop_assert_eq!(parse_leading_int(&n.to_string()), n);
    }

    /// Trailing garbage after the digits is ignored.
    #[test]
    fn leading_int_ignores_suffix(n in any::<i32>(), suffix in "[a-z ]{0,8}") {
        prop_assert_eq!(parse_leading_int(&format!("{n}{suffix}")), i64::from(n));
    }

    /// The natural float form parses back to the same float.
    #[test]
    fn float_text_round_trips(f in -1.0e12..1.0e12f64) {
        prop_assert_eq!(parse_leading_float(&format_float(f)), f);
    }

    /// Lenient float conversion of any string is finite.
    #[test]
    fn lenient_float_is_finite(s in "\\PC{0,24}") {
        prop_assert!(Input::from(s).to_f64_lossy().is_finite());
    }

    /// Integer coercion of a float truncates toward zero.
    #[test]
    fn float_to_int_truncates(f in -1.0e9..1.0e9f64) {
        prop_assert_eq!(Input::Float(f).to_i64_lossy(), f.trunc() as i64);
    }
}
