//! Type aliases for common refined types
//!
//! # Example
//!
//! ```rust
//! use safe_literals::refined::{NonEmptyString, PositiveI32, ZeroToOneF64};
//!
//! let name: NonEmptyString = safe_literals::non_empty_string!("Alice");
//! let age: PositiveI32 = safe_literals::positive!(25);
//! let opacity: ZeroToOneF64 = safe_literals::zero_to_one!(0.8);
//! ```

use super::predicates::numeric::{
    MinusOneToOne, Negative, NonNegative, NonPositive, NonZero, Positive, ZeroToOne,
};
use super::predicates::string::NonEmpty;
use super::Refined;

// ============================================================================
// String aliases
// ============================================================================

/// A string that is guaranteed to be non-empty
pub type NonEmptyString = Refined<String, NonEmpty>;

// ============================================================================
// Sign aliases
// ============================================================================

/// An i32 that is guaranteed to be positive (> 0)
pub type PositiveI32 = Refined<i32, Positive>;

/// An i64 that is guaranteed to be positive (> 0)
pub type PositiveI64 = Refined<i64, Positive>;

/// An f64 that is guaranteed to be positive (> 0)
pub type PositiveF64 = Refined<f64, Positive>;

/// An i32 that is guaranteed to be negative (< 0)
pub type NegativeI32 = Refined<i32, Negative>;

/// An f64 that is guaranteed to be negative (< 0)
pub type NegativeF64 = Refined<f64, Negative>;

/// An i32 that is guaranteed to be non-positive (<= 0)
pub type NonPositiveI32 = Refined<i32, NonPositive>;

/// An f64 that is guaranteed to be non-positive (<= 0)
pub type NonPositiveF64 = Refined<f64, NonPositive>;

/// An i32 that is guaranteed to be non-negative (>= 0)
pub type NonNegativeI32 = Refined<i32, NonNegative>;

/// An i64 that is guaranteed to be non-negative (>= 0)
pub type NonNegativeI64 = Refined<i64, NonNegative>;

/// An f64 that is guaranteed to be non-negative (>= 0)
pub type NonNegativeF64 = Refined<f64, NonNegative>;

/// An i32 that is guaranteed to be non-zero (!= 0)
pub type NonZeroI32 = Refined<i32, NonZero>;

/// A u32 that is guaranteed to be non-zero (!= 0)
pub type NonZeroU32 = Refined<u32, NonZero>;

/// A usize that is guaranteed to be non-zero (!= 0)
pub type NonZeroUsize = Refined<usize, NonZero>;

/// An f64 that is guaranteed to be non-zero (!= 0)
pub type NonZeroF64 = Refined<f64, NonZero>;

// ============================================================================
// Range aliases
// ============================================================================

/// An f32 in the unit interval [0, 1]
pub type ZeroToOneF32 = Refined<f32, ZeroToOne>;

/// An f64 in the unit interval [0, 1], e.g. a probability or an opacity
pub type ZeroToOneF64 = Refined<f64, ZeroToOne>;

/// An f32 in [-1, 1]
pub type MinusOneToOneF32 = Refined<f32, MinusOneToOne>;

/// An f64 in [-1, 1], e.g. a correlation or a cosine
pub type MinusOneToOneF64 = Refined<f64, MinusOneToOne>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_aliases() {
        assert!(NonEmptyString::new("hello".to_string()).is_ok());
        assert!(NonEmptyString::new("".to_string()).is_err());
    }

    #[test]
    fn test_sign_aliases() {
        assert!(PositiveI32::new(1).is_ok());
        assert!(PositiveF64::new(0.0).is_err());
        assert!(NegativeI32::new(-1).is_ok());
        assert!(NegativeF64::new(0.0).is_err());
        assert!(NonPositiveI32::new(0).is_ok());
        assert!(NonPositiveF64::new(0.5).is_err());
        assert!(NonNegativeI64::new(0).is_ok());
        assert!(NonNegativeF64::new(-0.5).is_err());
    }

    #[test]
    fn test_non_zero_aliases() {
        assert!(NonZeroI32::new(-1).is_ok());
        assert!(NonZeroU32::new(0).is_err());
        assert!(NonZeroUsize::new(1).is_ok());
        assert!(NonZeroF64::new(0.0).is_err());
    }

    #[test]
    fn test_range_aliases() {
        assert!(ZeroToOneF64::new(0.5).is_ok());
        assert!(ZeroToOneF32::new(-0.5).is_err());
        assert!(MinusOneToOneF64::new(-0.5).is_ok());
        assert!(MinusOneToOneF32::new(1.5).is_err());
    }
}
