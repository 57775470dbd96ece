//! Predicate evaluation for each refinement kind
//!
//! Two-sided ranges test the upper bound before the lower bound, so a value
//! that could violate both only ever reports [`ExpansionError::GreaterThanOne`].

use crate::{ExpansionError, LiteralArgument, ParsedNumber, RefinementKind};

/// Check a parsed number against a numeric refinement.
///
/// Total: every `kind` and `number` gives a decision.
///
/// A float literal may end up typed as `f32`, by suffix or by inference, so
/// floats must pass both as `f64` and narrowed to `f32`. `1e-50` is not
/// positive: as an `f32` it is `0.0`.
///
/// [`RefinementKind::NonEmptyString`] has no numeric rule and always rejects
/// with [`ExpansionError::Empty`]; [`check`] handles that kind on the raw text.
///
/// # Example
///
/// ```rust
/// use safe_literals_core::{check_number, ExpansionError, ParsedNumber, RefinementKind};
///
/// assert_eq!(check_number(RefinementKind::NonZero, ParsedNumber::Float(0.0)), Err(ExpansionError::Zero));
/// assert_eq!(check_number(RefinementKind::ZeroToOne, ParsedNumber::Float(0.5)), Ok(()));
/// assert_eq!(check_number(RefinementKind::Positive, ParsedNumber::Float(1e-50)), Err(ExpansionError::NotPositive));
/// ```
pub fn check_number(kind: RefinementKind, number: ParsedNumber) -> Result<(), ExpansionError> {
    check_value(kind, number)?;
    match number.narrowed_to_f32() {
        Some(narrowed) => check_value(kind, narrowed),
        None => Ok(()),
    }
}

fn check_value(kind: RefinementKind, number: ParsedNumber) -> Result<(), ExpansionError> {
    match kind {
        RefinementKind::Positive => require(number.is_positive(), ExpansionError::NotPositive),
        RefinementKind::Negative => require(number.is_negative(), ExpansionError::NotNegative),
        RefinementKind::NonPositive => require(!number.is_positive(), ExpansionError::Positive),
        RefinementKind::NonNegative => require(!number.is_negative(), ExpansionError::Negative),
        RefinementKind::NonZero => require(!number.is_zero(), ExpansionError::Zero),
        RefinementKind::ZeroToOne => {
            require(number.is_at_most(1), ExpansionError::GreaterThanOne)?;
            require(number.is_at_least(0), ExpansionError::LessThanZero)
        }
        RefinementKind::MinusOneToOne => {
            require(number.is_at_most(1), ExpansionError::GreaterThanOne)?;
            require(number.is_at_least(-1), ExpansionError::LessThanMinusOne)
        }
        RefinementKind::NonEmptyString => Err(ExpansionError::Empty),
    }
}

/// Check a literal argument against a refinement.
///
/// Numeric kinds parse the text first. [`RefinementKind::NonEmptyString`]
/// looks only at the length of the source text, surrounding quotes included:
/// more than two characters passes. `" "` is therefore accepted and `""`
/// rejected; the check does not look at whitespace.
///
/// # Example
///
/// ```rust
/// use safe_literals_core::{check, ExpansionError, LiteralArgument, RefinementKind};
///
/// let positive = RefinementKind::Positive;
/// assert_eq!(check(positive, LiteralArgument::new("1")), Ok(()));
/// assert_eq!(check(positive, LiteralArgument::new("-1")), Err(ExpansionError::NotPositive));
///
/// let text = RefinementKind::NonEmptyString;
/// assert_eq!(check(text, LiteralArgument::new("\" \"")), Ok(()));
/// assert_eq!(check(text, LiteralArgument::new("\"\"")), Err(ExpansionError::Empty));
/// ```
pub fn check(kind: RefinementKind, argument: LiteralArgument<'_>) -> Result<(), ExpansionError> {
    if kind.is_numeric() {
        let number = ParsedNumber::parse(argument.text())?;
        check_number(kind, number)
    } else {
        require(argument.char_len() > 2, ExpansionError::Empty)
    }
}

fn require(holds: bool, error: ExpansionError) -> Result<(), ExpansionError> {
    if holds {
        Ok(())
    } else {
        Err(error)
    }
}
