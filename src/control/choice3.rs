//! A closed disjoint union of three possibilities.

use std::fmt;

use crate::typeclass::{Applicative, Bifunctor, Functor, Monad, TypeConstructor};

use super::choice2::Choice2;
use super::choice4::Choice4;
use super::choice_inspectors;
use super::coproduct::{CoProduct2, CoProduct3};

/// The canonical coproduct of three types.
///
/// Exactly one of the three slots holds a value. Values are created through
/// [`Choice3::a`], [`Choice3::b`], and [`Choice3::c`] and eliminated
/// through [`CoProduct3::match_with`]; the discriminant cannot change
/// afterwards.
///
/// The combinator surface is biased to the last slot: `fmap`, `flat_map`,
/// `zip`, and `traverse` operate on a `c` payload and pass `a` and `b`
/// payloads through unchanged. [`Bifunctor`] covers the last two slots.
///
/// # Examples
///
/// ```rust
/// use lawvere::control::Choice3;
/// use lawvere::typeclass::{Bifunctor, Functor};
///
/// let value: Choice3<String, u8, i32> = Choice3::c(21);
/// assert_eq!(value.fmap(|n| n * 2), Choice3::c(42));
///
/// let warning: Choice3<String, u8, i32> = Choice3::b(7);
/// assert_eq!(warning.bimap(|code| code + 1, |n: i32| n * 2), Choice3::b(8));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Choice3<A, B, C> {
    repr: Repr3<A, B, C>,
}

#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
enum Repr3<A, B, C> {
    A(A),
    B(B),
    C(C),
}

impl<A, B, C> Choice3<A, B, C> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Wraps a value into the first slot.
    #[inline]
    pub const fn a(value: A) -> Self {
        Self {
            repr: Repr3::A(value),
        }
    }

    /// Wraps a value into the second slot.
    #[inline]
    pub const fn b(value: B) -> Self {
        Self {
            repr: Repr3::B(value),
        }
    }

    /// Wraps a value into the third (last) slot.
    #[inline]
    pub const fn c(value: C) -> Self {
        Self {
            repr: Repr3::C(value),
        }
    }

    // =========================================================================
    // Inspection
    // =========================================================================

    choice_inspectors!(Repr3 { a => A, b => B, c => C });

    // =========================================================================
    // Arity Conversion
    // =========================================================================

    /// Widens into a [`Choice4`], reinterpreting the three slots as the
    /// first three of four.
    ///
    /// The brand-new last slot is never produced, so widening is a total,
    /// information-preserving embedding.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lawvere::control::{Choice3, Choice4};
    ///
    /// let value: Choice3<i32, bool, String> = Choice3::c("three".to_string());
    /// let widened: Choice4<i32, bool, String, u8> = value.diverge();
    /// assert_eq!(widened, Choice4::c("three".to_string()));
    /// ```
    #[inline]
    pub fn diverge<D>(self) -> Choice4<A, B, C, D> {
        self.match_with(Choice4::a, Choice4::b, Choice4::c)
    }

    /// Narrows into a [`Choice2`] by resolving the last slot's payload into
    /// one of the two remaining types.
    ///
    /// Earlier slots pass through unchanged; the `c` payload is handed to
    /// the resolver, which may produce any coproduct of the remaining two
    /// types, and the result is re-merged accordingly. Narrowing is total;
    /// the ambiguity is resolved explicitly by the caller.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lawvere::control::{Choice2, Choice3};
    ///
    /// let value: Choice3<String, i32, u8> = Choice3::c(200);
    /// let narrowed = value.converge(|byte| Choice2::b(i32::from(byte)));
    /// assert_eq!(narrowed, Choice2::b(200));
    /// ```
    #[inline]
    pub fn converge<P, F>(self, resolve: F) -> Choice2<A, B>
    where
        P: CoProduct2<A, B>,
        F: FnOnce(C) -> P,
    {
        self.match_with(Choice2::a, Choice2::b, |c| {
            resolve(c).match_with(Choice2::a, Choice2::b)
        })
    }

    // =========================================================================
    // Effectful Traversal
    // =========================================================================

    /// Traverses the last slot with an effectful transformation.
    ///
    /// For `a` and `b` payloads the unchanged choice is lifted into the
    /// effect through `pure`; for a `c` payload the transformation runs and
    /// the last-slot constructor is mapped over the wrapped result.
    ///
    /// Traversing with the effect-wrapped identity yields the
    /// effect-wrapped identity.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lawvere::control::Choice3;
    ///
    /// let value: Choice3<String, u8, &str> = Choice3::c("42");
    /// let traversed = value.traverse(|s| s.parse::<i32>().ok(), Some);
    /// assert_eq!(traversed, Some(Choice3::c(42)));
    /// ```
    #[inline]
    pub fn traverse<D, App, F, P>(self, function: F, pure: P) -> App::WithType<Choice3<A, B, D>>
    where
        App: Functor<Inner = D>,
        F: FnOnce(C) -> App,
        P: Fn(Choice3<A, B, D>) -> App::WithType<Choice3<A, B, D>>,
    {
        self.match_with(
            |a| pure(Choice3::a(a)),
            |b| pure(Choice3::b(b)),
            |c| function(c).fmap(Choice3::c),
        )
    }

    /// Traverses the last slot with a transformation that may decline.
    #[inline]
    pub fn traverse_option<D, F>(self, function: F) -> Option<Choice3<A, B, D>>
    where
        F: FnOnce(C) -> Option<D>,
    {
        self.traverse(function, Some)
    }

    /// Traverses the last slot with a transformation that may fail with a
    /// reason.
    #[inline]
    pub fn traverse_result<D, E, F>(self, function: F) -> Result<Choice3<A, B, D>, E>
    where
        E: Clone,
        F: FnOnce(C) -> Result<D, E>,
    {
        self.traverse(function, Ok)
    }
}

impl<A, B, C> CoProduct3<A, B, C> for Choice3<A, B, C> {
    #[inline]
    fn match_with<R, FA, FB, FC>(self, on_a: FA, on_b: FB, on_c: FC) -> R
    where
        FA: FnOnce(A) -> R,
        FB: FnOnce(B) -> R,
        FC: FnOnce(C) -> R,
    {
        match self.repr {
            Repr3::A(value) => on_a(value),
            Repr3::B(value) => on_b(value),
            Repr3::C(value) => on_c(value),
        }
    }
}

// =============================================================================
// Type Class Implementations
// =============================================================================

impl<A, B, C> TypeConstructor for Choice3<A, B, C> {
    type Inner = C;
    type WithType<D> = Choice3<A, B, D>;
}

impl<A: Clone, B: Clone, C> Functor for Choice3<A, B, C> {
    #[inline]
    fn fmap<D, F>(self, function: F) -> Choice3<A, B, D>
    where
        F: FnOnce(C) -> D,
    {
        self.match_with(Choice3::a, Choice3::b, |c| Choice3::c(function(c)))
    }

    #[inline]
    fn fmap_ref<D, F>(&self, function: F) -> Choice3<A, B, D>
    where
        F: FnOnce(&C) -> D,
    {
        match &self.repr {
            Repr3::A(value) => Choice3::a(value.clone()),
            Repr3::B(value) => Choice3::b(value.clone()),
            Repr3::C(value) => Choice3::c(function(value)),
        }
    }
}

impl<A: Clone, B: Clone, C> Applicative for Choice3<A, B, C> {
    #[inline]
    fn pure<D>(value: D) -> Choice3<A, B, D> {
        Choice3::c(value)
    }

    /// The function-holder is consulted first: its `a` or `b` payload wins
    /// over whatever `self` holds, realizing the short-circuiting
    /// (non-accumulating) applicative.
    #[inline]
    fn zip<D, F>(self, function_holder: Choice3<A, B, F>) -> Choice3<A, B, D>
    where
        F: FnOnce(C) -> D,
    {
        function_holder.match_with(Choice3::a, Choice3::b, |function| self.fmap(function))
    }

    #[inline]
    fn map2<D, E, F>(self, other: Choice3<A, B, D>, function: F) -> Choice3<A, B, E>
    where
        F: FnOnce(C, D) -> E,
    {
        self.match_with(Choice3::a, Choice3::b, |c| other.fmap(|d| function(c, d)))
    }
}

impl<A: Clone, B: Clone, C> Monad for Choice3<A, B, C> {
    #[inline]
    fn flat_map<D, F>(self, function: F) -> Choice3<A, B, D>
    where
        F: FnOnce(C) -> Choice3<A, B, D>,
    {
        self.match_with(Choice3::a, Choice3::b, function)
    }
}

impl<A: Clone, B, C> Bifunctor<B, C> for Choice3<A, B, C> {
    type Target<D, E> = Choice3<A, D, E>;

    #[inline]
    fn bimap<D, E, F, G>(self, first_function: F, second_function: G) -> Choice3<A, D, E>
    where
        F: FnOnce(B) -> D,
        G: FnOnce(C) -> E,
    {
        self.match_with(
            Choice3::a,
            |b| Choice3::b(first_function(b)),
            |c| Choice3::c(second_function(c)),
        )
    }

    #[inline]
    fn bimap_ref<D, E, F, G>(&self, first_function: F, second_function: G) -> Choice3<A, D, E>
    where
        F: FnOnce(&B) -> D,
        G: FnOnce(&C) -> E,
    {
        match &self.repr {
            Repr3::A(value) => Choice3::a(value.clone()),
            Repr3::B(value) => Choice3::b(first_function(value)),
            Repr3::C(value) => Choice3::c(second_function(value)),
        }
    }
}

// =============================================================================
// Debug Implementation
// =============================================================================

impl<A: fmt::Debug, B: fmt::Debug, C: fmt::Debug> fmt::Debug for Choice3<A, B, C> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.repr {
            Repr3::A(value) => formatter.debug_tuple("Choice3::a").field(value).finish(),
            Repr3::B(value) => formatter.debug_tuple("Choice3::b").field(value).finish(),
            Repr3::C(value) => formatter.debug_tuple("Choice3::c").field(value).finish(),
        }
    }
}
