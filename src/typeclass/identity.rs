//! Identity wrapper type - the identity functor.
//!
//! This module provides the `Identity` type, the simplest possible wrapper
//! around a value. It serves as:
//!
//! - The "no additional effect" wrapper: instantiating a lens's `apply`
//!   operation at `Identity` recovers plain `set` and `modify`
//! - A simple model for testing type class laws (the traversal identity law
//!   is stated against it)

use super::TypeConstructor;

/// The identity functor - wraps a value without adding any behavior.
///
/// `Identity` is the simplest possible type constructor. It wraps a single
/// value and provides no additional functionality. Mapping over it applies
/// the function directly; there is no failure, multiplicity, or other
/// effect to thread through.
///
/// # Examples
///
/// ```rust
/// use lawvere::typeclass::Identity;
///
/// let wrapped = Identity::new(42);
/// assert_eq!(wrapped.into_inner(), 42);
///
/// // Using the tuple-struct syntax
/// let wrapped = Identity(42);
/// assert_eq!(wrapped.0, 42);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Identity<A>(pub A);

impl<A> Identity<A> {
    /// Creates a new `Identity` wrapping the given value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lawvere::typeclass::Identity;
    ///
    /// let x = Identity::new(42);
    /// assert_eq!(x.into_inner(), 42);
    /// ```
    #[inline]
    pub const fn new(value: A) -> Self {
        Self(value)
    }

    /// Consumes the `Identity` and returns the inner value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lawvere::typeclass::Identity;
    ///
    /// let x = Identity::new(String::from("hello"));
    /// let inner: String = x.into_inner();
    /// assert_eq!(inner, "hello");
    /// ```
    #[inline]
    pub fn into_inner(self) -> A {
        self.0
    }

    /// Returns a reference to the inner value.
    #[inline]
    pub const fn as_inner(&self) -> &A {
        &self.0
    }
}

impl<A> TypeConstructor for Identity<A> {
    type Inner = A;
    type WithType<B> = Identity<B>;
}

impl<A> From<A> for Identity<A> {
    fn from(value: A) -> Self {
        Self::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0)]
    #[case(42)]
    #[case(-7)]
    fn new_and_into_inner_roundtrip(#[case] value: i32) {
        assert_eq!(Identity::new(value).into_inner(), value);
    }

    #[rstest]
    fn as_inner_borrows_without_consuming() {
        let wrapped = Identity::new(String::from("hello"));
        assert_eq!(wrapped.as_inner(), "hello");
        assert_eq!(wrapped.into_inner(), "hello");
    }

    #[rstest]
    fn from_wraps_value() {
        let wrapped: Identity<i32> = 42.into();
        assert_eq!(wrapped, Identity(42));
    }
}
