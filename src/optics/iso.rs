//! Iso optics - reversible lenses encoding total conversions.
//!
//! An `Iso<S, T, A, B>` is a [`Lens`] built from a *pair* of plain total
//! functions, a forward `S -> A` and a backward `B -> T`, and is
//! therefore reversible: [`Iso::reverse`] flips the pair into an
//! `Iso<B, A, T, S>` in O(1) with no allocation. In the common "simple"
//! specialization (`S = T`, `A = B`) an iso encodes a total bidirectional
//! conversion between two representations of the same data.
//!
//! Every derived combinator is computed by taking the two direction
//! functions apart, transforming each as an ordinary function, and
//! reconstructing a fresh iso from the results, never by partially
//! updating an existing pair. Consistency with the lens laws therefore
//! never has to be re-derived per combinator: it follows from the pair
//! staying a pair.
//!
//! # Laws
//!
//! For the simple specialization built from `(f, g)`:
//!
//! 1. **Round-trip (forward)**: `g(f(s)) == s` for all `s`
//! 2. **Round-trip (backward)**: `f(g(a)) == a` for all `a`
//!
//! Both the iso and its reverse additionally satisfy the three lens laws.
//!
//! # Examples
//!
//! ```
//! use lawvere::optics::{simple_iso, Iso, Lens};
//!
//! let parse = simple_iso(
//!     |text: String| text.parse::<i32>().unwrap_or_default(),
//!     |number: i32| number.to_string(),
//! );
//!
//! assert_eq!(parse.view("42".to_string()), 42);
//! assert_eq!(parse.review(42), "42");
//!
//! let render = parse.reverse();
//! assert_eq!(render.view(42), "42");
//! ```

use std::marker::PhantomData;

use crate::typeclass::FunctorFamily;

use super::lens::Lens;

/// A lens that is provably reversible into a symmetric lens.
///
/// `reverse` produces the `Iso<B, A, T, S>` reading in the opposite
/// direction; applying it twice gets back an iso equivalent to the
/// original. [`review`](Iso::review) runs the backward direction as a
/// plain function, the mirror image of [`Lens::view`].
pub trait Iso<S, T, A, B>: Lens<S, T, A, B> {
    /// The concrete type of the flipped iso.
    type Reversed: Iso<B, A, T, S>;

    /// Flips this iso around, yielding the inverse `Iso<B, A, T, S>`.
    fn reverse(&self) -> Self::Reversed;

    /// Runs the backward direction: converts a replacement value straight
    /// into an updated container.
    ///
    /// # Examples
    ///
    /// ```
    /// use lawvere::optics::{simple_iso, Iso};
    ///
    /// let parse = simple_iso(
    ///     |text: String| text.parse::<i32>().unwrap_or_default(),
    ///     |number: i32| number.to_string(),
    /// );
    /// assert_eq!(parse.review(7), "7");
    /// ```
    #[inline]
    fn review(&self, value: B) -> T {
        self.reverse().view(value)
    }

    /// Composes with an iso converting further inward.
    ///
    /// Named `compose_iso` to stay distinct from [`Lens::compose`], which
    /// is also available on every iso and produces a (non-reversible)
    /// composed lens.
    #[inline]
    fn compose_iso<C, D, I>(self, inner: I) -> ComposedIso<Self, I, A, B>
    where
        Self: Sized,
        I: Iso<A, B, C, D>,
    {
        ComposedIso::new(self, inner)
    }
}

/// Constructs an iso from a forward and a backward function.
///
/// # Examples
///
/// ```
/// use lawvere::optics::{iso, Lens};
///
/// let celsius = iso(
///     |fahrenheit: f64| (fahrenheit - 32.0) / 1.8,
///     |celsius: f64| celsius * 1.8 + 32.0,
/// );
/// assert_eq!(celsius.view(212.0), 100.0);
/// ```
pub fn iso<S, T, A, B, F, G>(forward: F, backward: G) -> FunctionIso<S, T, A, B, F, G>
where
    F: Fn(S) -> A,
    G: Fn(B) -> T,
{
    FunctionIso::new(forward, backward)
}

/// Constructs a simple iso: a total bidirectional conversion where the
/// container and focus types coincide before and after update.
///
/// This is the specialization where the round-trip laws are stated;
/// `reverse` preserves the simple shape automatically.
///
/// # Examples
///
/// ```
/// use lawvere::optics::{simple_iso, Iso, Lens};
///
/// let chars = simple_iso(
///     |text: String| text.chars().collect::<Vec<_>>(),
///     |chars: Vec<char>| chars.into_iter().collect::<String>(),
/// );
/// assert_eq!(chars.view("hi".to_string()), vec!['h', 'i']);
/// assert_eq!(chars.reverse().view(vec!['h', 'i']), "hi");
/// ```
pub fn simple_iso<S, A, F, G>(forward: F, backward: G) -> FunctionIso<S, S, A, A, F, G>
where
    F: Fn(S) -> A,
    G: Fn(A) -> S,
{
    FunctionIso::new(forward, backward)
}

/// An iso implemented as a stored forward/backward function pair.
///
/// The pair is the whole representation: `apply` feeds the forward
/// function's result to the caller's transformation and maps the backward
/// function over the wrapped replacement, so naturality holds for free:
/// both directions are plain total functions that never inspect the
/// effect.
///
/// # Type Parameters
///
/// - `S`/`T`: container before/after update
/// - `A`/`B`: focus read out / replacement written in
/// - `F`: the forward function type (`Fn(S) -> A`)
/// - `G`: the backward function type (`Fn(B) -> T`)
pub struct FunctionIso<S, T, A, B, F, G>
where
    F: Fn(S) -> A,
    G: Fn(B) -> T,
{
    forward: F,
    backward: G,
    _marker: PhantomData<(S, T, A, B)>,
}

impl<S, T, A, B, F, G> FunctionIso<S, T, A, B, F, G>
where
    F: Fn(S) -> A,
    G: Fn(B) -> T,
{
    /// Creates a new `FunctionIso` from a forward and a backward function.
    #[must_use]
    pub const fn new(forward: F, backward: G) -> Self {
        Self {
            forward,
            backward,
            _marker: PhantomData,
        }
    }

    // =========================================================================
    // Derived Combinators
    //
    // Each combinator takes the direction functions apart, transforms one
    // of them as an ordinary function, and reconstructs a fresh pair.
    // =========================================================================

    /// Contravariantly pre-maps the container: the forward direction first
    /// converts the new container type into `S`; the backward direction is
    /// untouched.
    pub fn map_s<R, H>(self, function: H) -> FunctionIso<R, T, A, B, impl Fn(R) -> A, G>
    where
        H: Fn(R) -> S,
    {
        let forward = self.forward;
        FunctionIso::new(move |source| forward(function(source)), self.backward)
    }

    /// Covariantly post-maps the rebuilt container; the forward direction
    /// is untouched.
    pub fn map_t<U, H>(self, function: H) -> FunctionIso<S, U, A, B, F, impl Fn(B) -> U>
    where
        H: Fn(T) -> U,
    {
        let backward = self.backward;
        FunctionIso::new(self.forward, move |value| function(backward(value)))
    }

    /// Remaps the read side of the focus by post-composing the forward
    /// direction.
    pub fn map_a<C, H>(self, function: H) -> FunctionIso<S, T, C, B, impl Fn(S) -> C, G>
    where
        H: Fn(A) -> C,
    {
        let forward = self.forward;
        FunctionIso::new(move |source| function(forward(source)), self.backward)
    }

    /// Remaps the write side of the focus by pre-composing the backward
    /// direction.
    pub fn map_b<Z, H>(self, function: H) -> FunctionIso<S, T, A, Z, F, impl Fn(Z) -> T>
    where
        H: Fn(Z) -> B,
    {
        let backward = self.backward;
        FunctionIso::new(self.forward, move |value| backward(function(value)))
    }

    /// Combines `map_s` and `map_t`: pre-map the incoming container,
    /// post-map the outgoing one.
    pub fn di_map<R, U, H, K>(
        self,
        pre: H,
        post: K,
    ) -> FunctionIso<R, U, A, B, impl Fn(R) -> A, impl Fn(B) -> U>
    where
        H: Fn(R) -> S,
        K: Fn(T) -> U,
    {
        self.map_s(pre).map_t(post)
    }

    /// Covariantly maps the rebuilt container; alias of
    /// [`map_t`](FunctionIso::map_t), named for the functor vocabulary.
    pub fn fmap<U, H>(self, function: H) -> FunctionIso<S, U, A, B, F, impl Fn(B) -> U>
    where
        H: Fn(T) -> U,
    {
        self.map_t(function)
    }
}

impl<S, T, A, B, F, G> Lens<S, T, A, B> for FunctionIso<S, T, A, B, F, G>
where
    F: Fn(S) -> A,
    G: Fn(B) -> T,
{
    fn apply<Fam, Tr>(&self, transform: Tr, source: S) -> Fam::Wrapped<T>
    where
        Fam: FunctorFamily,
        Tr: FnOnce(A) -> Fam::Wrapped<B>,
    {
        Fam::map(transform((self.forward)(source)), |value| {
            (self.backward)(value)
        })
    }
}

impl<S, T, A, B, F, G> Iso<S, T, A, B> for FunctionIso<S, T, A, B, F, G>
where
    F: Fn(S) -> A + Clone,
    G: Fn(B) -> T + Clone,
{
    type Reversed = FunctionIso<B, A, T, S, G, F>;

    /// An O(1) flip: the stored pair is cloned and swapped, nothing else.
    #[inline]
    fn reverse(&self) -> Self::Reversed {
        FunctionIso::new(self.backward.clone(), self.forward.clone())
    }
}

impl<S, T, A, B, F, G> Clone for FunctionIso<S, T, A, B, F, G>
where
    F: Fn(S) -> A + Clone,
    G: Fn(B) -> T + Clone,
{
    fn clone(&self) -> Self {
        Self {
            forward: self.forward.clone(),
            backward: self.backward.clone(),
            _marker: PhantomData,
        }
    }
}

impl<S, T, A, B, F, G> std::fmt::Debug for FunctionIso<S, T, A, B, F, G>
where
    F: Fn(S) -> A,
    G: Fn(B) -> T,
{
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("FunctionIso")
            .finish_non_exhaustive()
    }
}

/// An iso composed of two isos, converting through the outer into the
/// inner.
///
/// Reversing a composition reverses both parts and swaps their order.
pub struct ComposedIso<I1, I2, A, B> {
    outer: I1,
    inner: I2,
    _marker: PhantomData<(A, B)>,
}

impl<I1, I2, A, B> ComposedIso<I1, I2, A, B> {
    /// Creates a new composed iso from an outer and an inner iso.
    #[must_use]
    pub const fn new(outer: I1, inner: I2) -> Self {
        Self {
            outer,
            inner,
            _marker: PhantomData,
        }
    }
}

impl<S, T, A, B, C, D, I1, I2> Lens<S, T, C, D> for ComposedIso<I1, I2, A, B>
where
    I1: Lens<S, T, A, B>,
    I2: Lens<A, B, C, D>,
{
    fn apply<Fam, F>(&self, transform: F, source: S) -> Fam::Wrapped<T>
    where
        Fam: FunctorFamily,
        F: FnOnce(C) -> Fam::Wrapped<D>,
    {
        self.outer
            .apply::<Fam, _>(|focus| self.inner.apply::<Fam, _>(transform, focus), source)
    }
}

impl<S, T, A, B, C, D, I1, I2> Iso<S, T, C, D> for ComposedIso<I1, I2, A, B>
where
    I1: Iso<S, T, A, B>,
    I2: Iso<A, B, C, D>,
{
    type Reversed = ComposedIso<I2::Reversed, I1::Reversed, B, A>;

    #[inline]
    fn reverse(&self) -> Self::Reversed {
        ComposedIso::new(self.inner.reverse(), self.outer.reverse())
    }
}

impl<I1: Clone, I2: Clone, A, B> Clone for ComposedIso<I1, I2, A, B> {
    fn clone(&self) -> Self {
        Self {
            outer: self.outer.clone(),
            inner: self.inner.clone(),
            _marker: PhantomData,
        }
    }
}

impl<I1: std::fmt::Debug, I2: std::fmt::Debug, A, B> std::fmt::Debug for ComposedIso<I1, I2, A, B> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("ComposedIso")
            .field("outer", &self.outer)
            .field("inner", &self.inner)
            .finish_non_exhaustive()
    }
}

/// Creates an iso from a forward and a backward function.
///
/// # Syntax
///
/// ```text
/// iso!(forward_function, backward_function)
/// ```
///
/// # Examples
///
/// ```
/// use lawvere::optics::Lens;
/// use lawvere::iso;
///
/// let swap = iso!(
///     |(a, b): (i32, String)| (b, a),
///     |(b, a): (String, i32)| (a, b)
/// );
///
/// let swapped = swap.view((42, "hello".to_string()));
/// assert_eq!(swapped, ("hello".to_string(), 42));
/// ```
#[macro_export]
macro_rules! iso {
    ($forward:expr, $backward:expr) => {
        $crate::optics::FunctionIso::new($forward, $backward)
    };
}
