//! Predicates for the refinements the literal macros target
//!
//! - **Numeric**: [`Positive`](numeric::Positive), [`Negative`](numeric::Negative),
//!   [`NonPositive`](numeric::NonPositive), [`NonNegative`](numeric::NonNegative),
//!   [`NonZero`](numeric::NonZero), [`ZeroToOne`](numeric::ZeroToOne),
//!   [`MinusOneToOne`](numeric::MinusOneToOne)
//! - **String**: [`NonEmpty`](string::NonEmpty)

pub mod numeric;
pub mod string;
