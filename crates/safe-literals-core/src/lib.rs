//! # safe-literals-core
//!
//! Decision logic behind the `safe_literals` refinement macros.
//!
//! Given a [`RefinementKind`] and the source text of the macro arguments,
//! [`expand`] decides whether the literal satisfies the refinement and
//! returns either the replacement expression or the single reason it was
//! rejected. Nothing here touches the compiler: the functions are pure and
//! deterministic, so they work just as well inside a proc macro as in a
//! standalone checker.
//!
//! ## Pipeline
//!
//! 1. [`first_argument`] takes the first argument; the rest are ignored.
//! 2. [`ParsedNumber::parse`] classifies numeric literals (integer first).
//! 3. [`check`] applies the refinement's predicate.
//! 4. [`Expansion`] renders the wrapper construction on success.
//!
//! ## Example
//!
//! ```rust
//! use safe_literals_core::{expand, ExpansionError, ExpansionOutcome, RefinementKind};
//!
//! let outcome = expand(RefinementKind::Positive, &["1"]);
//! assert!(outcome.is_accepted());
//!
//! let outcome = expand(RefinementKind::NonZero, &["0.0"]);
//! assert_eq!(outcome, ExpansionOutcome::Rejected(ExpansionError::Zero));
//! ```

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

mod argument;
mod check;
mod error;
mod kind;
mod number;
mod outcome;

pub use argument::{first_argument, LiteralArgument};
pub use check::{check, check_number};
pub use error::ExpansionError;
pub use kind::{RefinementKind, UnknownRefinement};
pub use number::ParsedNumber;
pub use outcome::{Expansion, ExpansionOutcome, CRATE_PATH};

/// Check the arguments of one invocation against `kind`.
///
/// Only the first argument is consulted. The checks run in a fixed order and
/// the first failure is reported: missing argument, then number parsing (for
/// numeric kinds), then the predicate itself.
///
/// # Example
///
/// ```rust
/// use safe_literals_core::{expand, ExpansionError, RefinementKind};
///
/// let accepted = expand(RefinementKind::MinusOneToOne, &["-1"]).into_result().unwrap();
/// assert_eq!(accepted.literal(), "-1");
///
/// let none: [&str; 0] = [];
/// assert_eq!(expand(RefinementKind::Positive, &none).error(), Some(ExpansionError::MissingArguments));
/// assert_eq!(
///     expand(RefinementKind::Positive, &["\"something\""]).error(),
///     Some(ExpansionError::NotNumberLiteral)
/// );
/// ```
pub fn expand<S: AsRef<str>>(kind: RefinementKind, arguments: &[S]) -> ExpansionOutcome {
    let outcome: ExpansionOutcome = try_expand(kind, arguments).into();

    #[cfg(feature = "tracing")]
    log_outcome(kind, &outcome);

    outcome
}

#[cfg(feature = "tracing")]
fn log_outcome(kind: RefinementKind, outcome: &ExpansionOutcome) {
    match outcome {
        ExpansionOutcome::Accepted(expansion) => {
            tracing::debug!(%kind, literal = expansion.literal(), "literal accepted");
        }
        ExpansionOutcome::Rejected(error) => {
            tracing::debug!(%kind, %error, "literal rejected");
        }
    }
}

fn try_expand<S: AsRef<str>>(
    kind: RefinementKind,
    arguments: &[S],
) -> Result<Expansion, ExpansionError> {
    let argument = first_argument(arguments)?;
    check(kind, argument)?;
    Ok(Expansion::new(kind, argument.text()))
}
