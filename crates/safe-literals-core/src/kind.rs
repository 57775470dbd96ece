//! The closed set of refinements a literal can be checked against

use std::error::Error as StdError;
use std::fmt;
use std::str::FromStr;

/// A refinement a literal can be checked against.
///
/// Each kind determines the predicate that is applied, the error reported on
/// rejection, and the name of the wrapper constructor that is emitted.
///
/// # Example
///
/// ```rust
/// use safe_literals_core::RefinementKind;
///
/// let kind: RefinementKind = "zero_to_one".parse().unwrap();
/// assert_eq!(kind, RefinementKind::ZeroToOne);
/// assert_eq!(kind.name(), "ZeroToOne");
/// assert!(kind.is_numeric());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RefinementKind {
    /// `x > 0`
    Positive,
    /// `x < 0`
    Negative,
    /// `x <= 0`
    NonPositive,
    /// `x >= 0`
    NonNegative,
    /// `x != 0`
    NonZero,
    /// A string literal with at least one character
    NonEmptyString,
    /// `0 <= x <= 1`
    ZeroToOne,
    /// `-1 <= x <= 1`
    MinusOneToOne,
}

impl RefinementKind {
    /// Every refinement kind, in declaration order.
    pub const ALL: [RefinementKind; 8] = [
        RefinementKind::Positive,
        RefinementKind::Negative,
        RefinementKind::NonPositive,
        RefinementKind::NonNegative,
        RefinementKind::NonZero,
        RefinementKind::NonEmptyString,
        RefinementKind::ZeroToOne,
        RefinementKind::MinusOneToOne,
    ];

    /// Name of the wrapper constructor emitted for this kind.
    pub fn name(&self) -> &'static str {
        match self {
            RefinementKind::Positive => "Positive",
            RefinementKind::Negative => "Negative",
            RefinementKind::NonPositive => "NonPositive",
            RefinementKind::NonNegative => "NonNegative",
            RefinementKind::NonZero => "NonZero",
            RefinementKind::NonEmptyString => "NonEmptyString",
            RefinementKind::ZeroToOne => "ZeroToOne",
            RefinementKind::MinusOneToOne => "MinusOneToOne",
        }
    }

    /// Name of the function-like macro that checks this kind.
    pub fn macro_name(&self) -> &'static str {
        match self {
            RefinementKind::Positive => "positive",
            RefinementKind::Negative => "negative",
            RefinementKind::NonPositive => "non_positive",
            RefinementKind::NonNegative => "non_negative",
            RefinementKind::NonZero => "non_zero",
            RefinementKind::NonEmptyString => "non_empty_string",
            RefinementKind::ZeroToOne => "zero_to_one",
            RefinementKind::MinusOneToOne => "minus_one_to_one",
        }
    }

    /// Whether the literal must parse as a number.
    ///
    /// Only [`RefinementKind::NonEmptyString`] works on the raw text.
    pub fn is_numeric(&self) -> bool {
        !matches!(self, RefinementKind::NonEmptyString)
    }
}

impl fmt::Display for RefinementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a name matches no [`RefinementKind`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownRefinement(String);

impl UnknownRefinement {
    /// The name that failed to match.
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UnknownRefinement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown refinement `{}`", self.0)
    }
}

impl StdError for UnknownRefinement {}

impl FromStr for RefinementKind {
    type Err = UnknownRefinement;

    /// Accepts either the constructor name (`NonZero`) or the macro name (`non_zero`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RefinementKind::ALL
            .into_iter()
            .find(|kind| kind.name() == s || kind.macro_name() == s)
            .ok_or_else(|| UnknownRefinement(s.to_string()))
    }
}

#[cfg(feature = "proptest")]
use proptest::prelude::*;

#[cfg(feature = "proptest")]
impl Arbitrary for RefinementKind {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_args: Self::Parameters) -> Self::Strategy {
        proptest::sample::select(RefinementKind::ALL.to_vec()).boxed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_constructor_name() {
        for kind in RefinementKind::ALL {
            assert_eq!(kind.name().parse::<RefinementKind>(), Ok(kind));
        }
    }

    #[test]
    fn test_from_macro_name() {
        for kind in RefinementKind::ALL {
            assert_eq!(kind.macro_name().parse::<RefinementKind>(), Ok(kind));
        }
    }

    #[test]
    fn test_unknown_name() {
        let err = "Even".parse::<RefinementKind>().unwrap_err();
        assert_eq!(err.name(), "Even");
        assert_eq!(err.to_string(), "unknown refinement `Even`");
    }

    #[test]
    fn test_only_non_empty_string_is_textual() {
        let textual: Vec<_> = RefinementKind::ALL
            .into_iter()
            .filter(|k| !k.is_numeric())
            .collect();
        assert_eq!(textual, vec![RefinementKind::NonEmptyString]);
    }

    #[test]
    fn test_display_is_constructor_name() {
        assert_eq!(RefinementKind::MinusOneToOne.to_string(), "MinusOneToOne");
    }
}
