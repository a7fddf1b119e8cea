//! A closed disjoint union of four possibilities.

use std::fmt;

use crate::typeclass::{Applicative, Bifunctor, Functor, Monad, TypeConstructor};

use super::choice3::Choice3;
use super::choice_inspectors;
use super::coproduct::{CoProduct3, CoProduct4};

/// The canonical coproduct of four types.
///
/// Exactly one of the four slots holds a value. Values are created through
/// [`Choice4::a`] through [`Choice4::d`] and eliminated through
/// [`CoProduct4::match_with`]; the discriminant cannot change afterwards.
///
/// The combinator surface is biased to the last slot: `fmap`, `flat_map`,
/// `zip`, and `traverse` operate on a `d` payload and pass earlier payloads
/// through unchanged. [`Bifunctor`] covers the last two slots.
///
/// # Examples
///
/// ```rust
/// use lawvere::control::Choice4;
/// use lawvere::typeclass::Functor;
///
/// let value: Choice4<String, u8, bool, i32> = Choice4::d(21);
/// assert_eq!(value.fmap(|n| n * 2), Choice4::d(42));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Choice4<A, B, C, D> {
    repr: Repr4<A, B, C, D>,
}

#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
enum Repr4<A, B, C, D> {
    A(A),
    B(B),
    C(C),
    D(D),
}

impl<A, B, C, D> Choice4<A, B, C, D> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Wraps a value into the first slot.
    #[inline]
    pub const fn a(value: A) -> Self {
        Self {
            repr: Repr4::A(value),
        }
    }

    /// Wraps a value into the second slot.
    #[inline]
    pub const fn b(value: B) -> Self {
        Self {
            repr: Repr4::B(value),
        }
    }

    /// Wraps a value into the third slot.
    #[inline]
    pub const fn c(value: C) -> Self {
        Self {
            repr: Repr4::C(value),
        }
    }

    /// Wraps a value into the fourth (last) slot.
    #[inline]
    pub const fn d(value: D) -> Self {
        Self {
            repr: Repr4::D(value),
        }
    }

    // =========================================================================
    // Inspection
    // =========================================================================

    choice_inspectors!(Repr4 { a => A, b => B, c => C, d => D });

    // =========================================================================
    // Arity Conversion
    // =========================================================================

    /// Narrows into a [`Choice3`] by resolving the last slot's payload into
    /// one of the three remaining types.
    ///
    /// Earlier slots pass through unchanged; the `d` payload is handed to
    /// the resolver, which may produce any coproduct of the remaining three
    /// types, and the result is re-merged accordingly.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lawvere::control::{Choice3, Choice4};
    ///
    /// let value: Choice4<String, u8, i32, i64> = Choice4::d(7);
    /// let narrowed = value.converge(|wide| Choice3::c(wide as i32));
    /// assert_eq!(narrowed, Choice3::c(7));
    /// ```
    #[inline]
    pub fn converge<P, F>(self, resolve: F) -> Choice3<A, B, C>
    where
        P: CoProduct3<A, B, C>,
        F: FnOnce(D) -> P,
    {
        self.match_with(Choice3::a, Choice3::b, Choice3::c, |d| {
            resolve(d).match_with(Choice3::a, Choice3::b, Choice3::c)
        })
    }

    // =========================================================================
    // Effectful Traversal
    // =========================================================================

    /// Traverses the last slot with an effectful transformation.
    ///
    /// For `a`, `b`, and `c` payloads the unchanged choice is lifted into
    /// the effect through `pure`; for a `d` payload the transformation runs
    /// and the last-slot constructor is mapped over the wrapped result.
    #[inline]
    pub fn traverse<E, App, F, P>(self, function: F, pure: P) -> App::WithType<Choice4<A, B, C, E>>
    where
        App: Functor<Inner = E>,
        F: FnOnce(D) -> App,
        P: Fn(Choice4<A, B, C, E>) -> App::WithType<Choice4<A, B, C, E>>,
    {
        self.match_with(
            |a| pure(Choice4::a(a)),
            |b| pure(Choice4::b(b)),
            |c| pure(Choice4::c(c)),
            |d| function(d).fmap(Choice4::d),
        )
    }

    /// Traverses the last slot with a transformation that may decline.
    #[inline]
    pub fn traverse_option<E, F>(self, function: F) -> Option<Choice4<A, B, C, E>>
    where
        F: FnOnce(D) -> Option<E>,
    {
        self.traverse(function, Some)
    }

    /// Traverses the last slot with a transformation that may fail with a
    /// reason.
    #[inline]
    pub fn traverse_result<E, Er, F>(self, function: F) -> Result<Choice4<A, B, C, E>, Er>
    where
        Er: Clone,
        F: FnOnce(D) -> Result<E, Er>,
    {
        self.traverse(function, Ok)
    }
}

impl<A, B, C, D> CoProduct4<A, B, C, D> for Choice4<A, B, C, D> {
    #[inline]
    fn match_with<R, FA, FB, FC, FD>(self, on_a: FA, on_b: FB, on_c: FC, on_d: FD) -> R
    where
        FA: FnOnce(A) -> R,
        FB: FnOnce(B) -> R,
        FC: FnOnce(C) -> R,
        FD: FnOnce(D) -> R,
    {
        match self.repr {
            Repr4::A(value) => on_a(value),
            Repr4::B(value) => on_b(value),
            Repr4::C(value) => on_c(value),
            Repr4::D(value) => on_d(value),
        }
    }
}

// =============================================================================
// Type Class Implementations
// =============================================================================

impl<A, B, C, D> TypeConstructor for Choice4<A, B, C, D> {
    type Inner = D;
    type WithType<E> = Choice4<A, B, C, E>;
}

impl<A: Clone, B: Clone, C: Clone, D> Functor for Choice4<A, B, C, D> {
    #[inline]
    fn fmap<E, F>(self, function: F) -> Choice4<A, B, C, E>
    where
        F: FnOnce(D) -> E,
    {
        self.match_with(Choice4::a, Choice4::b, Choice4::c, |d| {
            Choice4::d(function(d))
        })
    }

    #[inline]
    fn fmap_ref<E, F>(&self, function: F) -> Choice4<A, B, C, E>
    where
        F: FnOnce(&D) -> E,
    {
        match &self.repr {
            Repr4::A(value) => Choice4::a(value.clone()),
            Repr4::B(value) => Choice4::b(value.clone()),
            Repr4::C(value) => Choice4::c(value.clone()),
            Repr4::D(value) => Choice4::d(function(value)),
        }
    }
}

impl<A: Clone, B: Clone, C: Clone, D> Applicative for Choice4<A, B, C, D> {
    #[inline]
    fn pure<E>(value: E) -> Choice4<A, B, C, E> {
        Choice4::d(value)
    }

    /// The function-holder is consulted first: any earlier payload it holds
    /// wins over whatever `self` holds, realizing the short-circuiting
    /// (non-accumulating) applicative.
    #[inline]
    fn zip<E, F>(self, function_holder: Choice4<A, B, C, F>) -> Choice4<A, B, C, E>
    where
        F: FnOnce(D) -> E,
    {
        function_holder.match_with(Choice4::a, Choice4::b, Choice4::c, |function| {
            self.fmap(function)
        })
    }

    #[inline]
    fn map2<E, G, F>(self, other: Choice4<A, B, C, E>, function: F) -> Choice4<A, B, C, G>
    where
        F: FnOnce(D, E) -> G,
    {
        self.match_with(Choice4::a, Choice4::b, Choice4::c, |d| {
            other.fmap(|e| function(d, e))
        })
    }
}

impl<A: Clone, B: Clone, C: Clone, D> Monad for Choice4<A, B, C, D> {
    #[inline]
    fn flat_map<E, F>(self, function: F) -> Choice4<A, B, C, E>
    where
        F: FnOnce(D) -> Choice4<A, B, C, E>,
    {
        self.match_with(Choice4::a, Choice4::b, Choice4::c, function)
    }
}

impl<A: Clone, B: Clone, C, D> Bifunctor<C, D> for Choice4<A, B, C, D> {
    type Target<E, G> = Choice4<A, B, E, G>;

    #[inline]
    fn bimap<E, G, F, H>(self, first_function: F, second_function: H) -> Choice4<A, B, E, G>
    where
        F: FnOnce(C) -> E,
        H: FnOnce(D) -> G,
    {
        self.match_with(
            Choice4::a,
            Choice4::b,
            |c| Choice4::c(first_function(c)),
            |d| Choice4::d(second_function(d)),
        )
    }

    #[inline]
    fn bimap_ref<E, G, F, H>(&self, first_function: F, second_function: H) -> Choice4<A, B, E, G>
    where
        F: FnOnce(&C) -> E,
        H: FnOnce(&D) -> G,
    {
        match &self.repr {
            Repr4::A(value) => Choice4::a(value.clone()),
            Repr4::B(value) => Choice4::b(value.clone()),
            Repr4::C(value) => Choice4::c(first_function(value)),
            Repr4::D(value) => Choice4::d(second_function(value)),
        }
    }
}

// =============================================================================
// Debug Implementation
// =============================================================================

impl<A: fmt::Debug, B: fmt::Debug, C: fmt::Debug, D: fmt::Debug> fmt::Debug
    for Choice4<A, B, C, D>
{
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.repr {
            Repr4::A(value) => formatter.debug_tuple("Choice4::a").field(value).finish(),
            Repr4::B(value) => formatter.debug_tuple("Choice4::b").field(value).finish(),
            Repr4::C(value) => formatter.debug_tuple("Choice4::c").field(value).finish(),
            Repr4::D(value) => formatter.debug_tuple("Choice4::d").field(value).finish(),
        }
    }
}
