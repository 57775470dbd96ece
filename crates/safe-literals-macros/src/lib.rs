//! Procedural macros for safe-literals
//!
//! Each macro takes a literal, checks it against a refinement while the
//! crate is being compiled, and expands to a `safe_literals::refined::Refined`
//! value. A literal that fails the check is a compile error at the literal.
//!
//! Use these through the `safe_literals` crate, which re-exports them next to
//! the refined types the expansions construct.

use proc_macro::TokenStream;
use safe_literals_core::RefinementKind;

mod expand;

/// Checked `Refined<_, Positive>` literal (`x > 0`).
///
/// ```ignore
/// let retries = safe_literals::positive!(3);
/// let scale = safe_literals::positive!(0.25);
/// ```
#[proc_macro]
pub fn positive(input: TokenStream) -> TokenStream {
    expand::expand_refinement(RefinementKind::Positive, input.into()).into()
}

/// Checked `Refined<_, Negative>` literal (`x < 0`).
///
/// ```ignore
/// let offset = safe_literals::negative!(-8);
/// ```
#[proc_macro]
pub fn negative(input: TokenStream) -> TokenStream {
    expand::expand_refinement(RefinementKind::Negative, input.into()).into()
}

/// Checked `Refined<_, NonPositive>` literal (`x <= 0`).
#[proc_macro]
pub fn non_positive(input: TokenStream) -> TokenStream {
    expand::expand_refinement(RefinementKind::NonPositive, input.into()).into()
}

/// Checked `Refined<_, NonNegative>` literal (`x >= 0`).
#[proc_macro]
pub fn non_negative(input: TokenStream) -> TokenStream {
    expand::expand_refinement(RefinementKind::NonNegative, input.into()).into()
}

/// Checked `Refined<_, NonZero>` literal (`x != 0`).
///
/// ```ignore
/// let divisor = safe_literals::non_zero!(7u32);
/// ```
#[proc_macro]
pub fn non_zero(input: TokenStream) -> TokenStream {
    expand::expand_refinement(RefinementKind::NonZero, input.into()).into()
}

/// Checked `NonEmptyString` from a string literal.
///
/// The check counts the characters of the literal in plain `"..."`
/// spelling, quotes included, so `" "` passes while `""` and `r""` do not.
///
/// ```ignore
/// let name = safe_literals::non_empty_string!("ingest");
/// ```
#[proc_macro]
pub fn non_empty_string(input: TokenStream) -> TokenStream {
    expand::expand_refinement(RefinementKind::NonEmptyString, input.into()).into()
}

/// Checked `Refined<_, ZeroToOne>` literal (`0 <= x <= 1`).
///
/// ```ignore
/// let ratio = safe_literals::zero_to_one!(0.75);
/// ```
#[proc_macro]
pub fn zero_to_one(input: TokenStream) -> TokenStream {
    expand::expand_refinement(RefinementKind::ZeroToOne, input.into()).into()
}

/// Checked `Refined<_, MinusOneToOne>` literal (`-1 <= x <= 1`).
#[proc_macro]
pub fn minus_one_to_one(input: TokenStream) -> TokenStream {
    expand::expand_refinement(RefinementKind::MinusOneToOne, input.into()).into()
}
