//! Argument extraction
//!
//! A refinement macro consults exactly one argument: the first. Anything
//! after it is ignored.

use crate::ExpansionError;

/// The raw source text of the argument a refinement is checked against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LiteralArgument<'a> {
    text: &'a str,
}

impl<'a> LiteralArgument<'a> {
    /// Wrap literal source text.
    pub fn new(text: &'a str) -> Self {
        LiteralArgument { text }
    }

    /// The literal exactly as written at the call site.
    pub fn text(&self) -> &'a str {
        self.text
    }

    /// Length of the source text in characters, quotes included.
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }
}

/// Return the first argument of an invocation.
///
/// # Errors
///
/// [`ExpansionError::MissingArguments`] when `arguments` is empty.
///
/// # Example
///
/// ```rust
/// use safe_literals_core::{first_argument, ExpansionError};
///
/// let argument = first_argument(&["1", "2"]).unwrap();
/// assert_eq!(argument.text(), "1");
///
/// let none: [&str; 0] = [];
/// assert_eq!(first_argument(&none), Err(ExpansionError::MissingArguments));
/// ```
pub fn first_argument<S: AsRef<str>>(
    arguments: &[S],
) -> Result<LiteralArgument<'_>, ExpansionError> {
    let first = arguments.first().ok_or(ExpansionError::MissingArguments)?;

    #[cfg(feature = "tracing")]
    log_ignored(arguments.len() - 1);

    Ok(LiteralArgument::new(first.as_ref()))
}

#[cfg(feature = "tracing")]
fn log_ignored(ignored: usize) {
    if ignored > 0 {
        tracing::debug!(ignored, "ignoring extra macro arguments");
    }
}
