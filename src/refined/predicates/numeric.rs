//! Numeric predicates for refined types
//!
//! - [`Positive`]: value > 0
//! - [`Negative`]: value < 0
//! - [`NonPositive`]: value <= 0
//! - [`NonNegative`]: value >= 0
//! - [`NonZero`]: value != 0
//! - [`ZeroToOne`]: 0 <= value <= 1
//! - [`MinusOneToOne`]: -1 <= value <= 1
//!
//! Every predicate is implemented for the signed integers, `f32` and `f64`.
//! Unsigned integers get every predicate except [`Negative`], which no
//! unsigned value can satisfy.
//!
//! The two ranges check the upper bound first, matching the order the
//! literal macros report violations in.
//!
//! # Example
//!
//! ```rust
//! use safe_literals::refined::{Refined, NonPositive, ZeroToOne};
//!
//! type Penalty = Refined<i32, NonPositive>;
//! assert!(Penalty::new(0).is_ok());
//! assert!(Penalty::new(3).is_err());
//!
//! type Probability = Refined<f64, ZeroToOne>;
//! assert!(Probability::new(0.3).is_ok());
//! assert_eq!(
//!     Probability::new(1.5).unwrap_err(),
//!     "value must be less than or equal to one"
//! );
//! ```

use super::super::Predicate;

/// Value must be positive (> 0)
#[derive(Debug, Clone, Copy, Default)]
pub struct Positive;

/// Value must be negative (< 0)
#[derive(Debug, Clone, Copy, Default)]
pub struct Negative;

/// Value must not be positive (<= 0)
#[derive(Debug, Clone, Copy, Default)]
pub struct NonPositive;

/// Value must be non-negative (>= 0)
#[derive(Debug, Clone, Copy, Default)]
pub struct NonNegative;

/// Value must be non-zero (!= 0)
#[derive(Debug, Clone, Copy, Default)]
pub struct NonZero;

/// Value must be in the unit interval [0, 1]
#[derive(Debug, Clone, Copy, Default)]
pub struct ZeroToOne;

/// Value must be in [-1, 1]
#[derive(Debug, Clone, Copy, Default)]
pub struct MinusOneToOne;

const NOT_POSITIVE: &str = "value must be positive";
const NOT_NEGATIVE: &str = "value must be negative";
const POSITIVE: &str = "value must not be positive";
const NEGATIVE: &str = "value must be non-negative";
const ZERO: &str = "value must be non-zero";
const GREATER_THAN_ONE: &str = "value must be less than or equal to one";
const LESS_THAN_ZERO: &str = "value must be greater than or equal to zero";
const LESS_THAN_MINUS_ONE: &str = "value must be greater than or equal to minus one";

fn require(holds: bool, error: &'static str) -> Result<(), &'static str> {
    if holds {
        Ok(())
    } else {
        Err(error)
    }
}

// One predicate for a list of types.
macro_rules! impl_numeric_predicate {
    ($pred:ty, $desc:expr, |$value:ident| $check:expr, [$($ty:ty),+]) => {
        $(
            impl Predicate<$ty> for $pred {
                type Error = &'static str;

                fn check(value: &$ty) -> Result<(), Self::Error> {
                    let $value = *value;
                    $check
                }

                fn description() -> &'static str {
                    $desc
                }
            }
        )+
    };
}

// Every predicate for types that have a negative range.
macro_rules! impl_signed_predicates {
    ($zero:literal, $one:literal, $minus_one:literal, [$($ty:ty),+]) => {
        impl_numeric_predicate!(
            Positive,
            "positive number (> 0)",
            |v| require(v > $zero, NOT_POSITIVE),
            [$($ty),+]
        );
        impl_numeric_predicate!(
            Negative,
            "negative number (< 0)",
            |v| require(v < $zero, NOT_NEGATIVE),
            [$($ty),+]
        );
        impl_numeric_predicate!(
            NonPositive,
            "non-positive number (<= 0)",
            |v| require(v <= $zero, POSITIVE),
            [$($ty),+]
        );
        impl_numeric_predicate!(
            NonNegative,
            "non-negative number (>= 0)",
            |v| require(v >= $zero, NEGATIVE),
            [$($ty),+]
        );
        impl_numeric_predicate!(
            NonZero,
            "non-zero number (!= 0)",
            |v| require(v != $zero, ZERO),
            [$($ty),+]
        );
        impl_numeric_predicate!(
            ZeroToOne,
            "number in [0, 1]",
            |v| require(v <= $one, GREATER_THAN_ONE).and(require(v >= $zero, LESS_THAN_ZERO)),
            [$($ty),+]
        );
        impl_numeric_predicate!(
            MinusOneToOne,
            "number in [-1, 1]",
            |v| require(v <= $one, GREATER_THAN_ONE)
                .and(require(v >= $minus_one, LESS_THAN_MINUS_ONE)),
            [$($ty),+]
        );
    };
}

impl_signed_predicates!(0, 1, -1, [i8, i16, i32, i64, i128, isize]);
impl_signed_predicates!(0.0, 1.0, -1.0, [f32, f64]);

impl_numeric_predicate!(
    Positive,
    "positive number (> 0)",
    |v| require(v > 0, NOT_POSITIVE),
    [u8, u16, u32, u64, u128, usize]
);
impl_numeric_predicate!(
    NonPositive,
    "non-positive number (<= 0)",
    |v| require(v == 0, POSITIVE),
    [u8, u16, u32, u64, u128, usize]
);
impl_numeric_predicate!(
    NonNegative,
    "non-negative number (>= 0)",
    |_v| Ok(()),
    [u8, u16, u32, u64, u128, usize]
);
impl_numeric_predicate!(
    NonZero,
    "non-zero number (!= 0)",
    |v| require(v != 0, ZERO),
    [u8, u16, u32, u64, u128, usize]
);
impl_numeric_predicate!(
    ZeroToOne,
    "number in [0, 1]",
    |v| require(v <= 1, GREATER_THAN_ONE),
    [u8, u16, u32, u64, u128, usize]
);
impl_numeric_predicate!(
    MinusOneToOne,
    "number in [-1, 1]",
    |v| require(v <= 1, GREATER_THAN_ONE),
    [u8, u16, u32, u64, u128, usize]
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::refined::Refined;

    type PositiveI32 = Refined<i32, Positive>;
    type NegativeI32 = Refined<i32, Negative>;
    type NonPositiveI32 = Refined<i32, NonPositive>;
    type NonNegativeI32 = Refined<i32, NonNegative>;
    type NonZeroI32 = Refined<i32, NonZero>;

    #[test]
    fn test_positive() {
        assert!(PositiveI32::new(1).is_ok());
        assert!(PositiveI32::new(i32::MAX).is_ok());
        assert!(PositiveI32::new(0).is_err());
        assert!(PositiveI32::new(i32::MIN).is_err());
        assert!(Refined::<f64, Positive>::new(0.1).is_ok());
        assert!(Refined::<f64, Positive>::new(-0.0).is_err());
    }

    #[test]
    fn test_negative() {
        assert!(NegativeI32::new(-1).is_ok());
        assert!(NegativeI32::new(i32::MIN).is_ok());
        assert_eq!(NegativeI32::new(0).unwrap_err(), "value must be negative");
        assert!(Refined::<f32, Negative>::new(-0.5).is_ok());
    }

    #[test]
    fn test_non_positive() {
        assert!(NonPositiveI32::new(0).is_ok());
        assert!(NonPositiveI32::new(-7).is_ok());
        assert_eq!(NonPositiveI32::new(1).unwrap_err(), "value must not be positive");
        assert!(Refined::<u8, NonPositive>::new(0).is_ok());
        assert!(Refined::<u8, NonPositive>::new(1).is_err());
    }

    #[test]
    fn test_non_negative() {
        assert!(NonNegativeI32::new(0).is_ok());
        assert!(NonNegativeI32::new(-1).is_err());
        assert!(Refined::<f64, NonNegative>::new(0.0).is_ok());
        assert!(Refined::<usize, NonNegative>::new(0).is_ok());
    }

    #[test]
    fn test_non_zero() {
        assert!(NonZeroI32::new(-1).is_ok());
        assert!(NonZeroI32::new(0).is_err());
        assert!(Refined::<u32, NonZero>::new(0).is_err());
        assert!(Refined::<f64, NonZero>::new(-0.0).is_err());
        assert!(Refined::<f64, NonZero>::new(1e-300).is_ok());
    }

    #[test]
    fn test_zero_to_one() {
        type Unit = Refined<f64, ZeroToOne>;
        assert!(Unit::new(0.0).is_ok());
        assert!(Unit::new(1.0).is_ok());
        assert_eq!(Unit::new(1.01).unwrap_err(), GREATER_THAN_ONE);
        assert_eq!(Unit::new(-0.01).unwrap_err(), LESS_THAN_ZERO);

        assert!(Refined::<i64, ZeroToOne>::new(1).is_ok());
        assert!(Refined::<i64, ZeroToOne>::new(2).is_err());
        assert!(Refined::<u16, ZeroToOne>::new(2).is_err());
    }

    #[test]
    fn test_minus_one_to_one() {
        type Signed = Refined<f32, MinusOneToOne>;
        assert!(Signed::new(-1.0).is_ok());
        assert!(Signed::new(1.0).is_ok());
        assert_eq!(Signed::new(2.0).unwrap_err(), GREATER_THAN_ONE);
        assert_eq!(Signed::new(-2.0).unwrap_err(), LESS_THAN_MINUS_ONE);

        assert!(Refined::<i8, MinusOneToOne>::new(-1).is_ok());
        assert!(Refined::<i8, MinusOneToOne>::new(i8::MIN).is_err());
    }

    #[test]
    fn test_description() {
        assert_eq!(
            <Positive as Predicate<i32>>::description(),
            "positive number (> 0)"
        );
        assert_eq!(
            <NonPositive as Predicate<f64>>::description(),
            "non-positive number (<= 0)"
        );
        assert_eq!(
            <ZeroToOne as Predicate<u8>>::description(),
            "number in [0, 1]"
        );
        assert_eq!(
            <MinusOneToOne as Predicate<i16>>::description(),
            "number in [-1, 1]"
        );
    }
}
