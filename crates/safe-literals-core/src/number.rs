//! Numeric literal classification
//!
//! Literal text is read the way rustc reads a base-10 numeric literal: digit
//! separators (`_`) are dropped and a trailing type suffix (`u8`, `i64`,
//! `f32`, ...) is ignored. The normalized text is then parsed as an `i64`
//! first and as an `f64` second; the first success wins.

use std::cmp::Ordering;

use crate::ExpansionError;

const SUFFIXES: [&str; 14] = [
    "i128", "u128", "isize", "usize", "i16", "i32", "i64", "u16", "u32", "u64", "f32", "f64",
    "i8", "u8",
];

/// A literal classified as an integer or a floating-point number.
///
/// # Example
///
/// ```rust
/// use safe_literals_core::ParsedNumber;
///
/// assert_eq!(ParsedNumber::parse("5"), Ok(ParsedNumber::Integer(5)));
/// assert_eq!(ParsedNumber::parse("5.0"), Ok(ParsedNumber::Float(5.0)));
/// assert_eq!(ParsedNumber::parse("1_000u32"), Ok(ParsedNumber::Integer(1000)));
/// assert!(ParsedNumber::parse("\"5\"").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParsedNumber {
    /// Base-10 integer that fits in an `i64`
    Integer(i64),
    /// Floating-point value, finite when produced by [`ParsedNumber::parse`]
    Float(f64),
}

impl ParsedNumber {
    /// Classify literal source text.
    ///
    /// # Errors
    ///
    /// [`ExpansionError::NotNumberLiteral`] when the text is neither an
    /// integer nor a finite decimal float.
    pub fn parse(text: &str) -> Result<Self, ExpansionError> {
        let normalized = normalize(text).ok_or(ExpansionError::NotNumberLiteral)?;

        if let Ok(integer) = normalized.parse::<i64>() {
            return Ok(ParsedNumber::Integer(integer));
        }

        if !is_decimal_float(&normalized) {
            return Err(ExpansionError::NotNumberLiteral);
        }

        match normalized.parse::<f64>() {
            Ok(float) if float.is_finite() => Ok(ParsedNumber::Float(float)),
            _ => Err(ExpansionError::NotNumberLiteral),
        }
    }

    /// Compare against an integer constant.
    ///
    /// Total for every value `parse` and `narrowed_to_f32` can produce,
    /// since neither yields NaN.
    pub fn compare(&self, other: i64) -> Ordering {
        match self {
            ParsedNumber::Integer(value) => value.cmp(&other),
            ParsedNumber::Float(value) => value
                .partial_cmp(&(other as f64))
                .unwrap_or(Ordering::Equal),
        }
    }

    /// The value an `f32` literal with the same text would hold.
    ///
    /// `None` for integers, which never become floats. Floats below the
    /// smallest `f32` subnormal collapse to zero, and values past `f32::MAX`
    /// become infinite.
    ///
    /// ```rust
    /// use safe_literals_core::ParsedNumber;
    ///
    /// assert_eq!(ParsedNumber::Float(1e-50).narrowed_to_f32(), Some(ParsedNumber::Float(0.0)));
    /// assert_eq!(ParsedNumber::Integer(1).narrowed_to_f32(), None);
    /// ```
    pub fn narrowed_to_f32(&self) -> Option<ParsedNumber> {
        match self {
            ParsedNumber::Integer(_) => None,
            ParsedNumber::Float(value) => Some(ParsedNumber::Float(f64::from(*value as f32))),
        }
    }

    /// `self > 0`
    pub fn is_positive(&self) -> bool {
        self.compare(0) == Ordering::Greater
    }

    /// `self < 0`
    pub fn is_negative(&self) -> bool {
        self.compare(0) == Ordering::Less
    }

    /// `self == 0`, where `-0.0` counts as zero
    pub fn is_zero(&self) -> bool {
        self.compare(0) == Ordering::Equal
    }

    /// `self <= bound`
    pub fn is_at_most(&self, bound: i64) -> bool {
        self.compare(bound) != Ordering::Greater
    }

    /// `self >= bound`
    pub fn is_at_least(&self, bound: i64) -> bool {
        self.compare(bound) != Ordering::Less
    }
}

// Drop `_` separators and one type suffix. `None` if nothing numeric is left.
fn normalize(text: &str) -> Option<String> {
    let text = text.trim();
    let unsuffixed = SUFFIXES
        .iter()
        .find_map(|suffix| text.strip_suffix(suffix))
        .unwrap_or(text);

    let normalized: String = unsuffixed.chars().filter(|c| *c != '_').collect();
    let ends_numeric = normalized
        .chars()
        .last()
        .is_some_and(|c| c.is_ascii_digit() || c == '.');

    ends_numeric.then_some(normalized)
}

// `f64::from_str` also reads `inf` and `NaN`; those are not literals.
fn is_decimal_float(text: &str) -> bool {
    text.chars().any(|c| c.is_ascii_digit())
        && text
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, '.' | 'e' | 'E' | '+' | '-'))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_integer_takes_priority() {
        assert_eq!(ParsedNumber::parse("5"), Ok(ParsedNumber::Integer(5)));
        assert_eq!(ParsedNumber::parse("-5"), Ok(ParsedNumber::Integer(-5)));
        assert_eq!(ParsedNumber::parse("0"), Ok(ParsedNumber::Integer(0)));
    }

    #[test]
    fn test_decimal_point_falls_through_to_float() {
        assert_eq!(ParsedNumber::parse("5.0"), Ok(ParsedNumber::Float(5.0)));
        assert_eq!(ParsedNumber::parse("-1.234"), Ok(ParsedNumber::Float(-1.234)));
        assert_eq!(ParsedNumber::parse("1."), Ok(ParsedNumber::Float(1.0)));
    }

    #[test]
    fn test_exponent_is_float() {
        assert_eq!(ParsedNumber::parse("1e3"), Ok(ParsedNumber::Float(1000.0)));
        assert_eq!(ParsedNumber::parse("2.5E-1"), Ok(ParsedNumber::Float(0.25)));
    }

    #[test]
    fn test_suffixes_and_separators() {
        assert_eq!(ParsedNumber::parse("5u8"), Ok(ParsedNumber::Integer(5)));
        assert_eq!(ParsedNumber::parse("-3_i64"), Ok(ParsedNumber::Integer(-3)));
        assert_eq!(ParsedNumber::parse("1_000_000"), Ok(ParsedNumber::Integer(1_000_000)));
        assert_eq!(ParsedNumber::parse("2.5f32"), Ok(ParsedNumber::Float(2.5)));
        assert_eq!(ParsedNumber::parse("7f64"), Ok(ParsedNumber::Integer(7)));
    }

    #[test]
    fn test_beyond_i64_is_float() {
        assert_eq!(
            ParsedNumber::parse("18446744073709551615"),
            Ok(ParsedNumber::Float(18446744073709551615.0))
        );
    }

    #[test]
    fn test_not_numbers() {
        for text in [
            "\"something\"",
            "\"5\"",
            "x",
            "",
            "-",
            "1.2.3",
            "inf",
            "-inf",
            "NaN",
            "infinity",
            "1e999",
            "0xFF",
            "0b1",
            "u8",
            "true",
        ] {
            assert_eq!(
                ParsedNumber::parse(text),
                Err(ExpansionError::NotNumberLiteral),
                "{text:?} should not parse"
            );
        }
    }

    #[test]
    fn test_sign_queries() {
        let zero_int = ParsedNumber::Integer(0);
        let zero_float = ParsedNumber::Float(0.0);
        let negative_zero = ParsedNumber::Float(-0.0);

        for zero in [zero_int, zero_float, negative_zero] {
            assert!(zero.is_zero());
            assert!(!zero.is_positive());
            assert!(!zero.is_negative());
        }

        assert!(ParsedNumber::Float(0.001).is_positive());
        assert!(ParsedNumber::Integer(-1).is_negative());
    }

    #[test]
    fn test_bounds() {
        assert!(ParsedNumber::Integer(1).is_at_most(1));
        assert!(!ParsedNumber::Float(1.0001).is_at_most(1));
        assert!(ParsedNumber::Integer(-1).is_at_least(-1));
        assert!(!ParsedNumber::Float(-1.0001).is_at_least(-1));
    }

    #[test]
    fn test_narrowing_to_f32() {
        let tiny = ParsedNumber::parse("1e-46").unwrap();
        assert!(tiny.is_positive());
        assert!(tiny.narrowed_to_f32().unwrap().is_zero());

        let half = ParsedNumber::parse("0.5f32").unwrap();
        assert_eq!(half.narrowed_to_f32(), Some(half));

        let huge = ParsedNumber::parse("1e300").unwrap();
        assert_eq!(huge.narrowed_to_f32(), Some(ParsedNumber::Float(f64::INFINITY)));
        assert!(huge.narrowed_to_f32().unwrap().is_positive());
    }

    proptest! {
        #[test]
        fn prop_every_i64_parses_as_integer(n in any::<i64>()) {
            prop_assert_eq!(ParsedNumber::parse(&n.to_string()), Ok(ParsedNumber::Integer(n)));
        }

        #[test]
        fn prop_debug_formatted_floats_parse_as_float(x in -1.0e12f64..1.0e12) {
            // `{:?}` always writes a decimal point or an exponent.
            let text = format!("{x:?}");
            prop_assert_eq!(ParsedNumber::parse(&text), Ok(ParsedNumber::Float(x)));
        }

        #[test]
        fn prop_parse_is_deterministic(text in "\\PC{0,12}") {
            prop_assert_eq!(ParsedNumber::parse(&text), ParsedNumber::parse(&text));
        }
    }
}
