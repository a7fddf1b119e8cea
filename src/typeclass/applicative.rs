//! Applicative type class - combining independent containers.
//!
//! This module provides the `Applicative` trait, which extends `Functor`
//! with the ability to lift bare values (`pure`) and to combine two
//! independently-constructed containers (`zip`, `map2`) without one
//! depending on the other's value ahead of time.
//!
//! # Laws
//!
//! All `Applicative` implementations must satisfy these laws:
//!
//! ## Identity Law
//!
//! Zipping with a lifted identity function changes nothing:
//!
//! ```text
//! fa.zip(Self::pure(|x| x)) == fa
//! ```
//!
//! ## Homomorphism Law
//!
//! Lifting a value and a function then zipping equals lifting the
//! application:
//!
//! ```text
//! Self::pure(x).zip(Self::pure(f)) == Self::pure(f(x))
//! ```
//!
//! # Short-circuiting
//!
//! The instances in this crate are *short-circuiting*: the first container
//! that is not in its "success" shape wins, and no second failure is ever
//! inspected or accumulated. For `zip` the function-holder is consulted
//! first, so its failure takes precedence over the value-holder's. The
//! choice family's monad instance is consistent with this ordering.
//!
//! # Examples
//!
//! ```rust
//! use lawvere::typeclass::Applicative;
//!
//! let x: Option<i32> = <Option<()>>::pure(42);
//! assert_eq!(x, Some(42));
//!
//! let sum = Some(1).map2(Some(2), |a, b| a + b);
//! assert_eq!(sum, Some(3));
//! ```

use super::functor::Functor;
use super::identity::Identity;

/// A type class for types that support lifting values and combining
/// independent containers.
///
/// See the module documentation for the laws and the short-circuiting
/// policy shared by every instance in this crate.
pub trait Applicative: Functor {
    /// Lifts a bare value into the container.
    ///
    /// For the choice family this populates the *last* slot, matching the
    /// last-slot bias of `fmap` and `flat_map`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lawvere::typeclass::Applicative;
    ///
    /// let x: Option<i32> = <Option<()>>::pure(42);
    /// assert_eq!(x, Some(42));
    /// ```
    fn pure<B>(value: B) -> Self::WithType<B>;

    /// Combines this container with a container holding a function.
    ///
    /// The function-holder is consulted first: if it is not in its success
    /// shape, its payload is returned unchanged regardless of `self`.
    /// Otherwise the function is applied to `self`'s success payload, or
    /// `self`'s failure payload passes through unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lawvere::typeclass::Applicative;
    ///
    /// let doubled = Applicative::zip(Some(21), Some(|n: i32| n * 2));
    /// assert_eq!(doubled, Some(42));
    /// ```
    fn zip<B, F>(self, function_holder: Self::WithType<F>) -> Self::WithType<B>
    where
        Self: Sized,
        F: FnOnce(Self::Inner) -> B;

    /// Combines two containers with a binary function.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lawvere::typeclass::Applicative;
    ///
    /// let sum = Some(1).map2(Some(2), |a, b| a + b);
    /// assert_eq!(sum, Some(3));
    /// ```
    fn map2<B, C, F>(self, other: Self::WithType<B>, function: F) -> Self::WithType<C>
    where
        Self: Sized,
        F: FnOnce(Self::Inner, B) -> C;

    /// Pairs up the payloads of two containers.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lawvere::typeclass::Applicative;
    ///
    /// let paired = Some(1).product(Some("one"));
    /// assert_eq!(paired, Some((1, "one")));
    /// ```
    #[inline]
    fn product<B>(self, other: Self::WithType<B>) -> Self::WithType<(Self::Inner, B)>
    where
        Self: Sized,
    {
        self.map2(other, |a, b| (a, b))
    }
}

// =============================================================================
// Option<A> Implementation
// =============================================================================

impl<A> Applicative for Option<A> {
    #[inline]
    fn pure<B>(value: B) -> Option<B> {
        Some(value)
    }

    #[inline]
    fn zip<B, F>(self, function_holder: Option<F>) -> Option<B>
    where
        F: FnOnce(A) -> B,
    {
        match function_holder {
            Some(function) => self.map(function),
            None => None,
        }
    }

    #[inline]
    fn map2<B, C, F>(self, other: Option<B>, function: F) -> Option<C>
    where
        F: FnOnce(A, B) -> C,
    {
        self.and_then(|a| other.map(|b| function(a, b)))
    }
}

// =============================================================================
// Result<T, E> Implementation
// =============================================================================

impl<T, E: Clone> Applicative for Result<T, E> {
    #[inline]
    fn pure<B>(value: B) -> Result<B, E> {
        Ok(value)
    }

    #[inline]
    fn zip<B, F>(self, function_holder: Result<F, E>) -> Result<B, E>
    where
        F: FnOnce(T) -> B,
    {
        match function_holder {
            Ok(function) => self.map(function),
            Err(error) => Err(error),
        }
    }

    #[inline]
    fn map2<B, C, F>(self, other: Result<B, E>, function: F) -> Result<C, E>
    where
        F: FnOnce(T, B) -> C,
    {
        self.and_then(|a| other.map(|b| function(a, b)))
    }
}

// =============================================================================
// Box<T> Implementation
// =============================================================================

impl<T> Applicative for Box<T> {
    #[inline]
    fn pure<B>(value: B) -> Box<B> {
        Box::new(value)
    }

    #[inline]
    fn zip<B, F>(self, function_holder: Box<F>) -> Box<B>
    where
        F: FnOnce(T) -> B,
    {
        Box::new((*function_holder)(*self))
    }

    #[inline]
    fn map2<B, C, F>(self, other: Box<B>, function: F) -> Box<C>
    where
        F: FnOnce(T, B) -> C,
    {
        Box::new(function(*self, *other))
    }
}

// =============================================================================
// Identity<A> Implementation
// =============================================================================

impl<A> Applicative for Identity<A> {
    #[inline]
    fn pure<B>(value: B) -> Identity<B> {
        Identity(value)
    }

    #[inline]
    fn zip<B, F>(self, function_holder: Identity<F>) -> Identity<B>
    where
        F: FnOnce(A) -> B,
    {
        Identity((function_holder.0)(self.0))
    }

    #[inline]
    fn map2<B, C, F>(self, other: Identity<B>, function: F) -> Identity<C>
    where
        F: FnOnce(A, B) -> C,
    {
        Identity(function(self.0, other.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn option_pure_lifts_value() {
        let x: Option<i32> = <Option<()>>::pure(42);
        assert_eq!(x, Some(42));
    }

    #[rstest]
    fn option_zip_applies_held_function() {
        // Fully qualified: Option also has an unrelated inherent `zip`.
        let result: Option<i32> = Applicative::zip(Some(21), Some(|n: i32| n * 2));
        assert_eq!(result, Some(42));
    }

    #[rstest]
    fn option_zip_missing_function_short_circuits() {
        let holder: Option<fn(i32) -> i32> = None;
        let result = Applicative::zip(Some(21), holder);
        assert_eq!(result, None);
    }

    #[rstest]
    fn result_zip_function_holder_error_wins() {
        let holder: Result<fn(i32) -> i32, &str> = Err("holder failed");
        let value: Result<i32, &str> = Err("value failed");
        assert_eq!(value.zip(holder), Err("holder failed"));
    }

    #[rstest]
    fn result_map2_combines() {
        let a: Result<i32, &str> = Ok(1);
        let b: Result<i32, &str> = Ok(2);
        assert_eq!(a.map2(b, |x, y| x + y), Ok(3));
    }

    #[rstest]
    fn product_pairs_payloads() {
        assert_eq!(Some(1).product(Some("one")), Some((1, "one")));
    }

    #[rstest]
    fn identity_homomorphism_law() {
        let lifted = <Identity<()>>::pure(5).zip(<Identity<()>>::pure(|n: i32| n + 1));
        assert_eq!(lifted, Identity(6));
    }

    #[rstest]
    fn box_zip_applies() {
        let result: Box<String> = Box::new(5).zip(Box::new(|n: i32| n.to_string()));
        assert_eq!(*result, "5");
    }
}
