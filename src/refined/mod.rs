//! Refined types: values that carry a proof of their predicate
//!
//! This module is the runtime half of the crate. A [`Refined<T, P>`] can
//! only be built through [`Refined::new`], which runs the predicate `P`, so
//! holding one is proof that the value passed. The literal macros
//! ([`positive!`](crate::positive), [`zero_to_one!`](crate::zero_to_one), ...)
//! run the same check while compiling and expand to this constructor.
//!
//! # Quick Start
//!
//! ```rust
//! use safe_literals::refined::{NonEmptyString, PositiveI32, Refined, ZeroToOne};
//!
//! // Checked at runtime, at the boundary
//! let name = NonEmptyString::new("Alice".to_string()).unwrap();
//! let age = PositiveI32::new(30).unwrap();
//!
//! // Checked at compile time
//! let ratio: Refined<f64, ZeroToOne> = safe_literals::zero_to_one!(0.25);
//!
//! println!("{} is {} ({})", name, age, ratio);
//! ```
//!
//! # Custom Predicates
//!
//! ```rust
//! use safe_literals::refined::{Predicate, Refined};
//!
//! pub struct Even;
//!
//! impl Predicate<i32> for Even {
//!     type Error = &'static str;
//!
//!     fn check(value: &i32) -> Result<(), Self::Error> {
//!         if value % 2 == 0 {
//!             Ok(())
//!         } else {
//!             Err("value must be even")
//!         }
//!     }
//! }
//!
//! assert!(Refined::<i32, Even>::new(4).is_ok());
//! assert!(Refined::<i32, Even>::new(5).is_err());
//! ```

mod aliases;
pub mod predicates;
#[cfg(feature = "serde")]
mod serde_impl;

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

pub use aliases::*;
pub use predicates::numeric::{
    MinusOneToOne, Negative, NonNegative, NonPositive, NonZero, Positive, ZeroToOne,
};
pub use predicates::string::NonEmpty;

/// A predicate that constrains values of type `T`.
///
/// Predicates are stateless marker types; the value lives in
/// [`Refined<T, P>`]. For the predicates the literal macros target, `check`
/// must agree with the compile-time rule for every literal the macro accepts,
/// since the expansion unwraps [`Refined::new`] unconditionally.
///
/// # Example
///
/// ```rust
/// use safe_literals::refined::Predicate;
///
/// pub struct Odd;
///
/// impl Predicate<u8> for Odd {
///     type Error = &'static str;
///
///     fn check(value: &u8) -> Result<(), Self::Error> {
///         if value % 2 == 1 {
///             Ok(())
///         } else {
///             Err("value must be odd")
///         }
///     }
/// }
///
/// assert_eq!(Odd::check(&3), Ok(()));
/// assert_eq!(Odd::check(&4), Err("value must be odd"));
/// ```
pub trait Predicate<T>: Send + Sync + 'static {
    /// Error returned when the predicate fails
    type Error: Send + Sync;

    /// Check if the value satisfies the predicate
    fn check(value: &T) -> Result<(), Self::Error>;

    /// Human-readable description of what this predicate requires
    fn description() -> &'static str {
        std::any::type_name::<Self>()
    }
}

/// A value of type `T` that is guaranteed to satisfy predicate `P`.
///
/// `Refined<T, P>` has the same memory layout as `T`; the predicate is only
/// a `PhantomData` marker.
///
/// # Example
///
/// ```rust
/// use safe_literals::refined::{NonZero, Refined};
///
/// fn per_item(total: u32, items: Refined<u32, NonZero>) -> u32 {
///     // no zero check needed
///     total / *items
/// }
///
/// let items = Refined::<u32, NonZero>::new(4).unwrap();
/// assert_eq!(per_item(20, items), 5);
/// assert_eq!(per_item(9, safe_literals::non_zero!(3u32)), 3);
/// ```
pub struct Refined<T, P: Predicate<T>> {
    value: T,
    _predicate: PhantomData<P>,
}

impl<T, P: Predicate<T>> Refined<T, P> {
    /// Create a new refined value, checking the predicate.
    ///
    /// This is the failable constructor every literal macro expands to.
    ///
    /// # Example
    ///
    /// ```rust
    /// use safe_literals::refined::{Refined, MinusOneToOne};
    ///
    /// assert!(Refined::<f64, MinusOneToOne>::new(-0.5).is_ok());
    /// assert_eq!(
    ///     Refined::<f64, MinusOneToOne>::new(-1.5).unwrap_err(),
    ///     "value must be greater than or equal to minus one"
    /// );
    /// ```
    pub fn new(value: T) -> Result<Self, P::Error> {
        P::check(&value)?;
        Ok(Self {
            value,
            _predicate: PhantomData,
        })
    }

    /// Get a reference to the inner value.
    #[inline]
    pub fn get(&self) -> &T {
        &self.value
    }

    /// Consume the refined value, returning the inner value.
    ///
    /// # Example
    ///
    /// ```rust
    /// let n = safe_literals::negative!(-42);
    /// let inner: i32 = n.into_inner();
    /// assert_eq!(inner, -42);
    /// ```
    #[inline]
    pub fn into_inner(self) -> T {
        self.value
    }

    /// Create a refined value without checking the predicate.
    ///
    /// Not `unsafe` in the memory sense, but the caller must guarantee the
    /// predicate holds. Prefer the literal macros for constants: they prove
    /// the same thing while compiling.
    #[inline]
    pub fn new_unchecked(value: T) -> Self {
        Self {
            value,
            _predicate: PhantomData,
        }
    }

    /// Map the inner value, re-checking the predicate.
    ///
    /// # Example
    ///
    /// ```rust
    /// let half = safe_literals::zero_to_one!(0.5);
    /// assert!(half.try_map(|x| x * 2.0).is_ok());
    /// assert!(half.try_map(|x| x * 3.0).is_err());
    /// ```
    pub fn try_map<F>(self, f: F) -> Result<Self, P::Error>
    where
        F: FnOnce(T) -> T,
    {
        Self::new(f(self.value))
    }
}

impl<T: fmt::Debug, P: Predicate<T>> fmt::Debug for Refined<T, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Refined")
            .field("value", &self.value)
            .field("predicate", &std::any::type_name::<P>())
            .finish()
    }
}

impl<T: Clone, P: Predicate<T>> Clone for Refined<T, P> {
    fn clone(&self) -> Self {
        Self {
            value: self.value.clone(),
            _predicate: PhantomData,
        }
    }
}

// Numeric refinements stay as cheap to pass around as the number itself
impl<T: Copy, P: Predicate<T>> Copy for Refined<T, P> {}

impl<T: PartialEq, P: Predicate<T>> PartialEq for Refined<T, P> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T: Eq, P: Predicate<T>> Eq for Refined<T, P> {}

impl<T: PartialOrd, P: Predicate<T>> PartialOrd for Refined<T, P> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.value.partial_cmp(&other.value)
    }
}

impl<T: Ord, P: Predicate<T>> Ord for Refined<T, P> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}

impl<T: Hash, P: Predicate<T>> Hash for Refined<T, P> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<T, P: Predicate<T>> AsRef<T> for Refined<T, P> {
    fn as_ref(&self) -> &T {
        &self.value
    }
}

impl<T, P: Predicate<T>> std::ops::Deref for Refined<T, P> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.value
    }
}

impl<T: fmt::Display, P: Predicate<T>> fmt::Display for Refined<T, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.value.fmt(f)
    }
}
