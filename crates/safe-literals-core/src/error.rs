//! Error taxonomy for literal expansion
//!
//! Every rejected expansion reports exactly one [`ExpansionError`]. The first
//! failing check wins; errors are never aggregated.

use std::error::Error as StdError;
use std::fmt;

/// Why a literal was rejected for a refinement.
///
/// The `Display` text is the diagnostic shown at the invocation site.
///
/// # Example
///
/// ```rust
/// use safe_literals_core::ExpansionError;
///
/// assert_eq!(ExpansionError::NotPositive.to_string(), "should be positive");
/// assert_eq!(ExpansionError::MissingArguments.to_string(), "missing macro argument(s)");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExpansionError {
    /// The invocation had no argument.
    MissingArguments,
    /// The argument is neither an integer nor a floating-point literal.
    NotNumberLiteral,
    /// A `Positive` literal was zero or negative.
    NotPositive,
    /// A `Negative` literal was zero or positive.
    NotNegative,
    /// A `NonPositive` literal was positive.
    Positive,
    /// A `NonNegative` literal was negative.
    Negative,
    /// A `NonZero` literal was zero.
    Zero,
    /// A `NonEmptyString` literal was empty.
    Empty,
    /// A `ZeroToOne` literal was below zero.
    LessThanZero,
    /// A range literal was above one.
    GreaterThanOne,
    /// A `MinusOneToOne` literal was below minus one.
    LessThanMinusOne,
}

impl ExpansionError {
    /// The diagnostic message for this error.
    pub fn message(&self) -> &'static str {
        match self {
            ExpansionError::MissingArguments => "missing macro argument(s)",
            ExpansionError::NotNumberLiteral => "should be number literal",
            ExpansionError::NotPositive => "should be positive",
            ExpansionError::NotNegative => "should be negative",
            ExpansionError::Positive => "should not be positive",
            ExpansionError::Negative => "should not be negative",
            ExpansionError::Zero => "should not be zero",
            ExpansionError::Empty => "should not be empty",
            ExpansionError::LessThanZero => "should be greater than or equal to zero",
            ExpansionError::GreaterThanOne => "should be less than or equal to one",
            ExpansionError::LessThanMinusOne => "should be greater than or equal to minus one",
        }
    }
}

impl fmt::Display for ExpansionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl StdError for ExpansionError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_matches_message() {
        let all = [
            ExpansionError::MissingArguments,
            ExpansionError::NotNumberLiteral,
            ExpansionError::NotPositive,
            ExpansionError::NotNegative,
            ExpansionError::Positive,
            ExpansionError::Negative,
            ExpansionError::Zero,
            ExpansionError::Empty,
            ExpansionError::LessThanZero,
            ExpansionError::GreaterThanOne,
            ExpansionError::LessThanMinusOne,
        ];

        for error in all {
            assert_eq!(error.to_string(), error.message());
        }
    }

    #[test]
    fn test_messages_are_distinct() {
        use std::collections::HashSet;

        let messages: HashSet<_> = [
            ExpansionError::Positive,
            ExpansionError::NotPositive,
            ExpansionError::Negative,
            ExpansionError::NotNegative,
        ]
        .iter()
        .map(|e| e.message())
        .collect();

        assert_eq!(messages.len(), 4);
    }

    #[test]
    fn test_is_std_error() {
        fn boxed(e: ExpansionError) -> Box<dyn StdError + Send + Sync> {
            Box::new(e)
        }

        assert_eq!(boxed(ExpansionError::Zero).to_string(), "should not be zero");
    }
}
