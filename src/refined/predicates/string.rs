//! String predicates for refined types

use super::super::Predicate;

/// String must not be empty
///
/// Implemented for both `String` and `&str`. Whitespace counts as content:
/// `" "` is non-empty.
///
/// # Example
///
/// ```rust
/// use safe_literals::refined::{Refined, NonEmpty};
///
/// type Label<'a> = Refined<&'a str, NonEmpty>;
///
/// assert!(Label::new("ok").is_ok());
/// assert!(Label::new("").is_err());
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct NonEmpty;

impl Predicate<String> for NonEmpty {
    type Error = &'static str;

    fn check(value: &String) -> Result<(), Self::Error> {
        if value.is_empty() {
            Err("string cannot be empty")
        } else {
            Ok(())
        }
    }

    fn description() -> &'static str {
        "non-empty string"
    }
}

impl Predicate<&str> for NonEmpty {
    type Error = &'static str;

    fn check(value: &&str) -> Result<(), Self::Error> {
        if value.is_empty() {
            Err("string cannot be empty")
        } else {
            Ok(())
        }
    }

    fn description() -> &'static str {
        "non-empty string"
    }
}
