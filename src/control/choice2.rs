//! A closed disjoint union of two possibilities.

use std::fmt;

use crate::typeclass::{Applicative, Bifunctor, Functor, Monad, TypeConstructor};

use super::choice3::Choice3;
use super::choice_inspectors;
use super::coproduct::CoProduct2;

/// The canonical coproduct of two types.
///
/// Exactly one of the two slots holds a value. Values are created through
/// [`Choice2::a`] and [`Choice2::b`] and eliminated through
/// [`CoProduct2::match_with`]; the discriminant cannot change afterwards.
///
/// The combinator surface is biased to the last slot: `fmap`, `flat_map`,
/// `zip`, and `traverse` operate on a `b` payload and pass an `a` payload
/// through unchanged. [`Bifunctor`] covers both slots.
///
/// # Examples
///
/// ```rust
/// use lawvere::control::Choice2;
/// use lawvere::typeclass::Functor;
///
/// let ok: Choice2<String, i32> = Choice2::b(21);
/// assert_eq!(ok.fmap(|n| n * 2), Choice2::b(42));
///
/// let failed: Choice2<String, i32> = Choice2::a("out of range".to_string());
/// assert_eq!(failed.clone().fmap(|n| n * 2), failed);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Choice2<A, B> {
    repr: Repr2<A, B>,
}

#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
enum Repr2<A, B> {
    A(A),
    B(B),
}

impl<A, B> Choice2<A, B> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Wraps a value into the first slot.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lawvere::control::Choice2;
    ///
    /// let value: Choice2<i32, String> = Choice2::a(42);
    /// assert!(value.is_a());
    /// ```
    #[inline]
    pub const fn a(value: A) -> Self {
        Self {
            repr: Repr2::A(value),
        }
    }

    /// Wraps a value into the second (last) slot.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lawvere::control::Choice2;
    ///
    /// let value: Choice2<i32, String> = Choice2::b("hello".to_string());
    /// assert!(value.is_b());
    /// ```
    #[inline]
    pub const fn b(value: B) -> Self {
        Self {
            repr: Repr2::B(value),
        }
    }

    // =========================================================================
    // Inspection
    // =========================================================================

    choice_inspectors!(Repr2 { a => A, b => B });

    // =========================================================================
    // Arity Conversion
    // =========================================================================

    /// Widens into a [`Choice3`], reinterpreting the two slots as the first
    /// two of three.
    ///
    /// The brand-new last slot is never produced, so widening is a total,
    /// information-preserving embedding.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lawvere::control::{Choice2, Choice3};
    ///
    /// let value: Choice2<i32, String> = Choice2::b("two".to_string());
    /// let widened: Choice3<i32, String, bool> = value.diverge();
    /// assert_eq!(widened, Choice3::b("two".to_string()));
    /// ```
    #[inline]
    pub fn diverge<C>(self) -> Choice3<A, B, C> {
        self.match_with(Choice3::a, Choice3::b)
    }

    // =========================================================================
    // Effectful Traversal
    // =========================================================================

    /// Traverses the last slot with an effectful transformation.
    ///
    /// For an `a` payload the unchanged choice is lifted into the effect
    /// through `pure`; for a `b` payload the transformation runs and the
    /// last-slot constructor is mapped over the wrapped result.
    ///
    /// Traversing with the effect-wrapped identity yields the
    /// effect-wrapped identity.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lawvere::control::Choice2;
    ///
    /// let value: Choice2<String, &str> = Choice2::b("42");
    /// let traversed = value.traverse(|s| s.parse::<i32>().ok(), Some);
    /// assert_eq!(traversed, Some(Choice2::b(42)));
    /// ```
    #[inline]
    pub fn traverse<C, App, F, P>(self, function: F, pure: P) -> App::WithType<Choice2<A, C>>
    where
        App: Functor<Inner = C>,
        F: FnOnce(B) -> App,
        P: FnOnce(Choice2<A, C>) -> App::WithType<Choice2<A, C>>,
    {
        self.match_with(|a| pure(Choice2::a(a)), |b| function(b).fmap(Choice2::b))
    }

    /// Traverses the last slot with a transformation that may decline.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lawvere::control::Choice2;
    ///
    /// let value: Choice2<String, &str> = Choice2::b("not a number");
    /// assert_eq!(value.traverse_option(|s| s.parse::<i32>().ok()), None);
    /// ```
    #[inline]
    pub fn traverse_option<C, F>(self, function: F) -> Option<Choice2<A, C>>
    where
        F: FnOnce(B) -> Option<C>,
    {
        self.traverse(function, Some)
    }

    /// Traverses the last slot with a transformation that may fail with a
    /// reason.
    #[inline]
    pub fn traverse_result<C, E, F>(self, function: F) -> Result<Choice2<A, C>, E>
    where
        E: Clone,
        F: FnOnce(B) -> Result<C, E>,
    {
        self.traverse(function, Ok)
    }
}

impl<A, B> CoProduct2<A, B> for Choice2<A, B> {
    #[inline]
    fn match_with<R, FA, FB>(self, on_a: FA, on_b: FB) -> R
    where
        FA: FnOnce(A) -> R,
        FB: FnOnce(B) -> R,
    {
        match self.repr {
            Repr2::A(value) => on_a(value),
            Repr2::B(value) => on_b(value),
        }
    }
}

// =============================================================================
// Type Class Implementations
// =============================================================================

impl<A, B> TypeConstructor for Choice2<A, B> {
    type Inner = B;
    type WithType<C> = Choice2<A, C>;
}

impl<A: Clone, B> Functor for Choice2<A, B> {
    #[inline]
    fn fmap<C, F>(self, function: F) -> Choice2<A, C>
    where
        F: FnOnce(B) -> C,
    {
        self.match_with(Choice2::a, |b| Choice2::b(function(b)))
    }

    #[inline]
    fn fmap_ref<C, F>(&self, function: F) -> Choice2<A, C>
    where
        F: FnOnce(&B) -> C,
    {
        match &self.repr {
            Repr2::A(value) => Choice2::a(value.clone()),
            Repr2::B(value) => Choice2::b(function(value)),
        }
    }
}

impl<A: Clone, B> Applicative for Choice2<A, B> {
    #[inline]
    fn pure<C>(value: C) -> Choice2<A, C> {
        Choice2::b(value)
    }

    /// The function-holder is consulted first: its `a` payload wins over
    /// whatever `self` holds, realizing the short-circuiting
    /// (non-accumulating) applicative.
    #[inline]
    fn zip<C, F>(self, function_holder: Choice2<A, F>) -> Choice2<A, C>
    where
        F: FnOnce(B) -> C,
    {
        function_holder.match_with(Choice2::a, |function| self.fmap(function))
    }

    #[inline]
    fn map2<C, D, F>(self, other: Choice2<A, C>, function: F) -> Choice2<A, D>
    where
        F: FnOnce(B, C) -> D,
    {
        self.match_with(Choice2::a, |b| other.fmap(|c| function(b, c)))
    }
}

impl<A: Clone, B> Monad for Choice2<A, B> {
    #[inline]
    fn flat_map<C, F>(self, function: F) -> Choice2<A, C>
    where
        F: FnOnce(B) -> Choice2<A, C>,
    {
        self.match_with(Choice2::a, function)
    }
}

impl<A, B> Bifunctor<A, B> for Choice2<A, B> {
    type Target<C, D> = Choice2<C, D>;

    #[inline]
    fn bimap<C, D, F, G>(self, first_function: F, second_function: G) -> Choice2<C, D>
    where
        F: FnOnce(A) -> C,
        G: FnOnce(B) -> D,
    {
        self.match_with(
            |a| Choice2::a(first_function(a)),
            |b| Choice2::b(second_function(b)),
        )
    }

    #[inline]
    fn bimap_ref<C, D, F, G>(&self, first_function: F, second_function: G) -> Choice2<C, D>
    where
        F: FnOnce(&A) -> C,
        G: FnOnce(&B) -> D,
    {
        match &self.repr {
            Repr2::A(value) => Choice2::a(first_function(value)),
            Repr2::B(value) => Choice2::b(second_function(value)),
        }
    }
}

// =============================================================================
// Debug Implementation
// =============================================================================

impl<A: fmt::Debug, B: fmt::Debug> fmt::Debug for Choice2<A, B> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.repr {
            Repr2::A(value) => formatter.debug_tuple("Choice2::a").field(value).finish(),
            Repr2::B(value) => formatter.debug_tuple("Choice2::b").field(value).finish(),
        }
    }
}

// =============================================================================
// From Implementations
// =============================================================================

impl<A, B> From<Result<B, A>> for Choice2<A, B> {
    /// Converts a `Result` into a `Choice2`, mapping `Err` to the first
    /// slot and `Ok` to the last.
    #[inline]
    fn from(result: Result<B, A>) -> Self {
        match result {
            Ok(value) => Self::b(value),
            Err(error) => Self::a(error),
        }
    }
}

impl<A, B> From<Choice2<A, B>> for Result<B, A> {
    #[inline]
    fn from(choice: Choice2<A, B>) -> Self {
        choice.match_with(Err, Ok)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use static_assertions::assert_impl_all;

    assert_impl_all!(Choice2<i32, String>: Clone, Send, Sync);
    assert_impl_all!(Choice2<u8, bool>: Copy);

    #[rstest]
    fn match_with_selects_populated_slot() {
        let first: Choice2<i32, String> = Choice2::a(42);
        assert_eq!(first.match_with(|n| n, |s| s.len() as i32), 42);

        let second: Choice2<i32, String> = Choice2::b("hello".to_string());
        assert_eq!(second.match_with(|n| n, |s| s.len() as i32), 5);
    }

    #[rstest]
    fn inspectors_report_discriminant() {
        let first: Choice2<i32, &str> = Choice2::a(1);
        assert!(first.is_a());
        assert!(!first.is_b());
    }

    #[rstest]
    fn projections_extract_payloads() {
        let first: Choice2<i32, &str> = Choice2::a(1);
        assert_eq!(first.project_a(), Some(1));
        assert_eq!(first.project_b(), None);
    }

    #[rstest]
    fn fmap_is_biased_to_the_last_slot() {
        let second: Choice2<String, i32> = Choice2::b(21);
        assert_eq!(second.fmap(|n| n * 2), Choice2::b(42));

        let first: Choice2<String, i32> = Choice2::a("left".to_string());
        assert_eq!(first.clone().fmap(|n| n * 2), first);
    }

    #[rstest]
    fn flat_map_short_circuits_on_first_slot() {
        let first: Choice2<String, i32> = Choice2::a("failure".to_string());
        let result = first.clone().flat_map(|n| Choice2::b(n + 1));
        assert_eq!(result, first);
    }

    #[rstest]
    fn zip_function_holder_failure_wins() {
        let value: Choice2<&str, i32> = Choice2::b(1);
        let holder: Choice2<&str, fn(i32) -> i32> = Choice2::a("holder failed");
        assert_eq!(value.zip(holder), Choice2::a("holder failed"));
    }

    #[rstest]
    fn diverge_keeps_slot_positions() {
        let first: Choice2<i32, &str> = Choice2::a(1);
        assert_eq!(first.diverge::<bool>(), Choice3::a(1));

        let second: Choice2<i32, &str> = Choice2::b("two");
        assert_eq!(second.diverge::<bool>(), Choice3::b("two"));
    }

    #[rstest]
    fn traverse_lifts_earlier_slots_unchanged() {
        let first: Choice2<i32, &str> = Choice2::a(1);
        assert_eq!(
            first.traverse_option(|s| s.parse::<u32>().ok()),
            Some(Choice2::a(1))
        );
    }

    #[rstest]
    fn equality_is_per_slot() {
        assert_eq!(Choice2::<i32, i32>::a(1), Choice2::a(1));
        assert_ne!(Choice2::<i32, i32>::a(1), Choice2::b(1));
    }

    #[rstest]
    fn debug_names_the_constructor() {
        let first: Choice2<i32, &str> = Choice2::a(1);
        assert_eq!(format!("{first:?}"), "Choice2::a(1)");
    }

    #[rstest]
    fn round_trips_through_result() {
        let ok: Result<i32, String> = Ok(42);
        let choice: Choice2<String, i32> = ok.into();
        assert_eq!(choice, Choice2::b(42));
        assert_eq!(Result::from(choice), Ok(42));
    }
}
