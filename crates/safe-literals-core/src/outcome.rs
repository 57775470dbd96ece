//! Expansion results and their rendering

use std::fmt;

use crate::{ExpansionError, RefinementKind};

/// Root of every emitted path.
pub const CRATE_PATH: &str = "::safe_literals";

const UNREACHABLE_MESSAGE: &str = "refined literal was checked at compile time";

/// A successful expansion: the wrapper constructor for `kind`, applied to
/// the literal text exactly as it was written.
///
/// `Display` renders the replacement expression. The failable constructor is
/// followed by an unconditional unwrap: the literal has already passed the
/// same predicate, so the unwrap never fails.
///
/// # Example
///
/// ```rust
/// use safe_literals_core::{Expansion, RefinementKind};
///
/// let expansion = Expansion::new(RefinementKind::Positive, "1");
/// assert_eq!(expansion.constructor(), "Positive");
/// assert!(expansion.to_string().contains("::safe_literals::refined::Positive>::new(1)"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expansion {
    kind: RefinementKind,
    literal: String,
}

impl Expansion {
    /// Create an expansion of `literal` for `kind`.
    pub fn new(kind: RefinementKind, literal: impl Into<String>) -> Self {
        Expansion {
            kind,
            literal: literal.into(),
        }
    }

    /// The refinement that accepted the literal.
    pub fn kind(&self) -> RefinementKind {
        self.kind
    }

    /// Name of the constructor being invoked.
    pub fn constructor(&self) -> &'static str {
        self.kind.name()
    }

    /// The literal text as written at the call site.
    pub fn literal(&self) -> &str {
        &self.literal
    }
}

impl fmt::Display for Expansion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            RefinementKind::NonEmptyString => write!(
                f,
                "{CRATE_PATH}::refined::NonEmptyString::new(::std::string::String::from({}))",
                self.literal
            )?,
            kind => write!(
                f,
                "{CRATE_PATH}::refined::Refined::<_, {CRATE_PATH}::refined::{}>::new({})",
                kind.name(),
                self.literal
            )?,
        }
        write!(
            f,
            ".unwrap_or_else(|_| ::core::unreachable!(\"{UNREACHABLE_MESSAGE}\"))"
        )
    }
}

/// Terminal result of checking one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpansionOutcome {
    /// The literal satisfies the refinement.
    Accepted(Expansion),
    /// The literal was rejected for exactly one reason.
    Rejected(ExpansionError),
}

impl ExpansionOutcome {
    /// Whether the literal was accepted.
    pub fn is_accepted(&self) -> bool {
        matches!(self, ExpansionOutcome::Accepted(_))
    }

    /// The rejection reason, if any.
    pub fn error(&self) -> Option<ExpansionError> {
        match self {
            ExpansionOutcome::Accepted(_) => None,
            ExpansionOutcome::Rejected(error) => Some(*error),
        }
    }

    /// Convert into a `Result`.
    pub fn into_result(self) -> Result<Expansion, ExpansionError> {
        self.into()
    }
}

impl From<Result<Expansion, ExpansionError>> for ExpansionOutcome {
    fn from(result: Result<Expansion, ExpansionError>) -> Self {
        match result {
            Ok(expansion) => ExpansionOutcome::Accepted(expansion),
            Err(error) => ExpansionOutcome::Rejected(error),
        }
    }
}

impl From<ExpansionOutcome> for Result<Expansion, ExpansionError> {
    fn from(outcome: ExpansionOutcome) -> Self {
        match outcome {
            ExpansionOutcome::Accepted(expansion) => Ok(expansion),
            ExpansionOutcome::Rejected(error) => Err(error),
        }
    }
}
