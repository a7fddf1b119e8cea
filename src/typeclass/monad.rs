//! Monad type class - sequencing computations within a context.
//!
//! This module provides the `Monad` trait, which extends `Applicative` with
//! the ability to sequence computations where each step can depend on the
//! result of the previous step.
//!
//! # Laws
//!
//! All `Monad` implementations must satisfy these laws:
//!
//! ## Left Identity Law
//!
//! Lifting a pure value and binding a function is the same as applying the
//! function:
//!
//! ```text
//! Self::pure(a).flat_map(f) == f(a)
//! ```
//!
//! ## Right Identity Law
//!
//! Binding `pure` to a monad returns the original monad:
//!
//! ```text
//! m.flat_map(Self::pure) == m
//! ```
//!
//! ## Associativity Law
//!
//! The order of binding operations can be reassociated:
//!
//! ```text
//! m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use lawvere::typeclass::Monad;
//!
//! let x = Some(5);
//! let y = x.flat_map(|n| if n > 0 { Some(n * 2) } else { None });
//! assert_eq!(y, Some(10));
//! ```

use super::applicative::Applicative;
use super::identity::Identity;

/// A type class for types that support sequencing of computations.
///
/// `Monad` extends `Applicative` with `flat_map`, which allows the result
/// of one computation to determine what computation to perform next. For
/// the choice family, binding is biased to the last slot: every non-last
/// slot short-circuits and passes through unchanged.
///
/// # Laws
///
/// ```text
/// Self::pure(a).flat_map(f)  == f(a)                          // left identity
/// m.flat_map(Self::pure)     == m                             // right identity
/// m.flat_map(f).flat_map(g)  == m.flat_map(|x| f(x).flat_map(g)) // associativity
/// ```
pub trait Monad: Applicative {
    /// Applies a function to the value inside the monad and flattens the
    /// result.
    ///
    /// The function returns a new container of the same shape; the result
    /// is returned directly, not re-wrapped.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lawvere::typeclass::Monad;
    ///
    /// let x = Some(5);
    /// let y = x.flat_map(|n| Some(n * 2));
    /// assert_eq!(y, Some(10));
    /// ```
    fn flat_map<B, F>(self, function: F) -> Self::WithType<B>
    where
        Self: Sized,
        F: FnOnce(Self::Inner) -> Self::WithType<B>;

    /// Alias for `flat_map`, matching the standard library's naming.
    ///
    /// For `Option` and `Result` the inherent `and_then` shadows this
    /// method and behaves identically.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lawvere::typeclass::Monad;
    /// use lawvere::control::Choice2;
    ///
    /// let chained = Choice2::<String, i32>::b(5).and_then(|n| Choice2::b(n + 1));
    /// assert_eq!(chained, Choice2::b(6));
    /// ```
    #[inline]
    fn and_then<B, F>(self, function: F) -> Self::WithType<B>
    where
        Self: Sized,
        F: FnOnce(Self::Inner) -> Self::WithType<B>,
    {
        self.flat_map(function)
    }

    /// Sequences two containers, discarding the first payload.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lawvere::typeclass::Monad;
    ///
    /// assert_eq!(Some(1).then(Some("next")), Some("next"));
    /// let none: Option<i32> = None;
    /// assert_eq!(none.then(Some("next")), None);
    /// ```
    #[inline]
    fn then<B>(self, next: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.flat_map(|_| next)
    }
}

// =============================================================================
// Standard Implementations
// =============================================================================

impl<A> Monad for Option<A> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Option<B>
    where
        F: FnOnce(A) -> Option<B>,
    {
        self.and_then(function)
    }
}

impl<T, E: Clone> Monad for Result<T, E> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Result<B, E>
    where
        F: FnOnce(T) -> Result<B, E>,
    {
        self.and_then(function)
    }
}

impl<T> Monad for Box<T> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Box<B>
    where
        F: FnOnce(T) -> Box<B>,
    {
        function(*self)
    }
}

impl<A> Monad for Identity<A> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Identity<B>
    where
        F: FnOnce(A) -> Identity<B>,
    {
        function(self.0)
    }
}
