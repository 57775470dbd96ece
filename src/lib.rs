//! # safe-literals
//!
//! Refined types whose literals are checked while your crate compiles.
//!
//! A [`Refined<T, P>`](refined::Refined) value can only be built by running
//! the predicate `P`. For values that come from outside the program that
//! check has to happen at runtime. For constants written in the source it
//! does not: the macros in this crate read the literal, apply the same
//! predicate during compilation, and expand to a constructor that cannot
//! fail.
//!
//! | Macro | Refinement | Rejected with |
//! |---|---|---|
//! | [`positive!`] | `x > 0` | "should be positive" |
//! | [`negative!`] | `x < 0` | "should be negative" |
//! | [`non_positive!`] | `x <= 0` | "should not be positive" |
//! | [`non_negative!`] | `x >= 0` | "should not be negative" |
//! | [`non_zero!`] | `x != 0` | "should not be zero" |
//! | [`zero_to_one!`] | `0 <= x <= 1` | "should be less than or equal to one" / "should be greater than or equal to zero" |
//! | [`minus_one_to_one!`] | `-1 <= x <= 1` | "should be less than or equal to one" / "should be greater than or equal to minus one" |
//! | [`non_empty_string!`] | string literal with content | "should not be empty" |
//!
//! Numeric macros accept integer and float literals, with or without a type
//! suffix (`5u8`, `0.5f32`) and digit separators (`1_000`). Anything else
//! fails with "should be number literal".
//!
//! ## Quick Example
//!
//! ```rust
//! use safe_literals::refined::{NonEmptyString, PositiveI32, Refined, ZeroToOne};
//! use safe_literals::{non_empty_string, positive, zero_to_one};
//!
//! struct Config {
//!     name: NonEmptyString,
//!     workers: PositiveI32,
//!     sample_rate: Refined<f64, ZeroToOne>,
//! }
//!
//! let config = Config {
//!     name: non_empty_string!("ingest"),
//!     workers: positive!(8),
//!     sample_rate: zero_to_one!(0.1),
//! };
//!
//! assert_eq!(*config.workers, 8);
//! ```
//!
//! A literal that breaks its refinement does not compile:
//!
//! ```compile_fail
//! let workers = safe_literals::positive!(0);
//! ```
//!
//! ```compile_fail
//! let sample_rate = safe_literals::zero_to_one!(1.5);
//! ```
//!
//! ```compile_fail
//! let name = safe_literals::non_empty_string!("");
//! ```
//!
//! Floats are also checked as `f32`, and strings by their value:
//!
//! ```compile_fail
//! use safe_literals::refined::{Positive, Refined};
//!
//! let epsilon: Refined<f32, Positive> = safe_literals::positive!(1e-50);
//! ```
//!
//! ```compile_fail
//! let name = safe_literals::non_empty_string!(r"");
//! ```
//!
//! ## Checking literals without the macros
//!
//! The decision logic is re-exported as [`expansion`], for tools that want
//! the same verdicts outside a macro expansion:
//!
//! ```rust
//! use safe_literals::expansion::{expand, ExpansionError, RefinementKind};
//!
//! let outcome = expand(RefinementKind::Negative, &["3"]);
//! assert_eq!(outcome.error(), Some(ExpansionError::NotNegative));
//! ```

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

// Lets the macro expansions, which name `::safe_literals`, work inside this crate.
extern crate self as safe_literals;

pub mod refined;

/// The literal checker behind the macros.
pub use safe_literals_core as expansion;

pub use safe_literals_macros::{
    minus_one_to_one, negative, non_empty_string, non_negative, non_positive, non_zero,
    positive, zero_to_one,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::refined::{
        MinusOneToOne, Negative, NonEmpty, NonEmptyString, NonNegative, NonPositive, NonZero,
        Positive, Predicate, Refined, ZeroToOne,
    };
    pub use crate::{
        minus_one_to_one, negative, non_empty_string, non_negative, non_positive, non_zero,
        positive, zero_to_one,
    };
}
