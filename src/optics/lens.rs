//! Lens optics - polymorphic bidirectional accessors.
//!
//! A `Lens<S, T, A, B>` reads an `A` out of an `S` and, given a replacement
//! `B`, rebuilds a `T`. The whole contract is a single higher-order
//! operation, [`Lens::apply`], generic over an arbitrary effect wrapper
//! chosen by the caller (the van Laarhoven encoding): plain `view`, `set`,
//! `modify`, composition, and every remapping combinator are derived from
//! that one primitive by instantiating it at the minimal wrappers
//! [`Const`] and [`Identity`].
//!
//! # Laws
//!
//! Every Lens must satisfy three laws (stated for the simple `S = T`,
//! `A = B` case):
//!
//! 1. **GetPut Law**: Getting and setting back yields the original.
//!    ```text
//!    lens.set(source.clone(), lens.view(source)) == source
//!    ```
//!
//! 2. **PutGet Law**: Setting then getting yields the set value.
//!    ```text
//!    lens.view(lens.set(source, value)) == value
//!    ```
//!
//! 3. **PutPut Law**: Two consecutive sets is equivalent to the last set.
//!    ```text
//!    lens.set(lens.set(source, v1), v2) == lens.set(source, v2)
//!    ```
//!
//! # Examples
//!
//! ```
//! use lawvere::optics::Lens;
//! use lawvere::lens;
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct Point { x: i32, y: i32 }
//!
//! let x_lens = lens!(Point, x);
//!
//! let point = Point { x: 10, y: 20 };
//! assert_eq!(x_lens.view(point.clone()), 10);
//!
//! let updated = x_lens.set(point, 100);
//! assert_eq!(updated, Point { x: 100, y: 20 });
//! ```

use std::marker::PhantomData;

use crate::typeclass::{Const, ConstFamily, FunctorFamily, Identity, IdentityFamily};

/// A polymorphic bidirectional accessor.
///
/// # Type Parameters
///
/// - `S`: the container being read
/// - `T`: the container after update
/// - `A`: the value being read
/// - `B`: the replacement value
///
/// The common "simple" case fixes `S = T` and `A = B`.
///
/// # The primitive operation
///
/// [`Lens::apply`] takes a transformation from the focused `A` to an
/// effect-wrapped `B` (for *any* effect family the caller chooses) plus a
/// source `S`, and produces the rebuilt `T` inside that same effect. The
/// operation must not depend on which family is substituted beyond what
/// the transformation itself does (naturality); everything else on this
/// trait is derived from `apply` alone:
///
/// - [`view`](Lens::view) instantiates it at [`ConstFamily`] (the wrapper
///   records the focused value and ignores the rebuilt container)
/// - [`set`](Lens::set) and [`modify`](Lens::modify) instantiate it at
///   [`IdentityFamily`] (no effect, just the rebuild)
/// - composition and the remapping combinators wrap `apply` in further
///   `apply`-shaped operations
///
/// # Implementing directly
///
/// [`FunctionLens`] covers the common getter/setter case. Implementing
/// `Lens` by hand is the advanced entry point for accessors whose `apply`
/// cannot be phrased as a getter/setter pair: a Rust closure cannot be
/// generic over the effect family, so the trait itself is where an
/// apply-shaped operation is supplied directly.
pub trait Lens<S, T, A, B> {
    /// The primitive operation: transform the focus inside a caller-chosen
    /// effect, rebuilding the container inside the same effect.
    ///
    /// # Examples
    ///
    /// ```
    /// use lawvere::optics::{FunctionLens, Lens};
    /// use lawvere::typeclass::OptionFamily;
    ///
    /// #[derive(Clone, PartialEq, Debug)]
    /// struct Point { x: i32, y: i32 }
    ///
    /// let x_lens = FunctionLens::new(
    ///     |point: &Point| point.x,
    ///     |point: Point, x: i32| Point { x, ..point },
    /// );
    ///
    /// // An update that may decline: the effect is the caller's choice.
    /// let point = Point { x: 10, y: 20 };
    /// let updated = x_lens.apply::<OptionFamily, _>(
    ///     |x| if x > 0 { Some(x * 10) } else { None },
    ///     point,
    /// );
    /// assert_eq!(updated, Some(Point { x: 100, y: 20 }));
    /// ```
    fn apply<Fam, F>(&self, transform: F, source: S) -> Fam::Wrapped<T>
    where
        Fam: FunctorFamily,
        F: FnOnce(A) -> Fam::Wrapped<B>;

    /// Reads the focused value out of the source.
    ///
    /// Derived from [`apply`](Lens::apply) at [`ConstFamily`]: the wrapper
    /// records the focus and discards the container rebuild.
    #[inline]
    fn view(&self, source: S) -> A {
        self.apply::<ConstFamily<A>, _>(Const::new, source)
            .into_value()
    }

    /// Replaces the focused value, rebuilding the container.
    ///
    /// Derived from [`apply`](Lens::apply) at [`IdentityFamily`] with a
    /// transformation that ignores what it read.
    #[inline]
    fn set(&self, source: S, value: B) -> T {
        self.apply::<IdentityFamily, _>(move |_| Identity::new(value), source)
            .into_inner()
    }

    /// Transforms the focused value, rebuilding the container.
    ///
    /// # Examples
    ///
    /// ```
    /// use lawvere::optics::Lens;
    /// use lawvere::lens;
    ///
    /// #[derive(Clone, PartialEq, Debug)]
    /// struct Point { x: i32, y: i32 }
    ///
    /// let x_lens = lens!(Point, x);
    /// let doubled = x_lens.modify(Point { x: 10, y: 20 }, |x| x * 2);
    /// assert_eq!(doubled.x, 20);
    /// ```
    #[inline]
    fn modify<F>(&self, source: S, function: F) -> T
    where
        F: FnOnce(A) -> B,
    {
        self.apply::<IdentityFamily, _>(|focus| Identity::new(function(focus)), source)
            .into_inner()
    }

    /// Composes with a lens focusing inside this lens's focus.
    ///
    /// # Examples
    ///
    /// ```
    /// use lawvere::optics::Lens;
    /// use lawvere::lens;
    ///
    /// #[derive(Clone, PartialEq, Debug)]
    /// struct Inner { value: i32 }
    ///
    /// #[derive(Clone, PartialEq, Debug)]
    /// struct Outer { inner: Inner }
    ///
    /// let nested = lens!(Outer, inner).compose(lens!(Inner, value));
    ///
    /// let data = Outer { inner: Inner { value: 42 } };
    /// assert_eq!(nested.view(data.clone()), 42);
    /// assert_eq!(nested.set(data, 100).inner.value, 100);
    /// ```
    #[inline]
    fn compose<C, D, L>(self, inner: L) -> ComposedLens<Self, L, A, B>
    where
        Self: Sized,
        L: Lens<A, B, C, D>,
    {
        ComposedLens::new(self, inner)
    }

    /// Contravariantly pre-maps the container: adapts this lens to read
    /// from a new container type `R` by first converting `R` into `S`.
    #[inline]
    fn map_s<R, F>(self, function: F) -> SourceMappedLens<Self, F, S>
    where
        Self: Sized,
        F: Fn(R) -> S,
    {
        SourceMappedLens::new(self, function)
    }

    /// Covariantly post-maps the rebuilt container from `T` to `U`.
    #[inline]
    fn map_t<U, F>(self, function: F) -> TargetMappedLens<Self, F, T>
    where
        Self: Sized,
        F: Fn(T) -> U,
    {
        TargetMappedLens::new(self, function)
    }

    /// Remaps the read side of the focus: the caller sees a `C` computed
    /// from the underlying `A`.
    #[inline]
    fn map_a<C, F>(self, function: F) -> ReadMappedLens<Self, F, A>
    where
        Self: Sized,
        F: Fn(A) -> C,
    {
        ReadMappedLens::new(self, function)
    }

    /// Remaps the write side of the focus: the caller supplies a `Z`,
    /// converted into the underlying replacement `B`.
    #[inline]
    fn map_b<Z, F>(self, function: F) -> WriteMappedLens<Self, F, B>
    where
        Self: Sized,
        F: Fn(Z) -> B,
    {
        WriteMappedLens::new(self, function)
    }

    /// Combines [`map_s`](Lens::map_s) and [`map_t`](Lens::map_t) in one
    /// operation: pre-map the incoming container, post-map the outgoing
    /// one.
    #[inline]
    fn di_map<R, U, F, G>(
        self,
        pre: F,
        post: G,
    ) -> TargetMappedLens<SourceMappedLens<Self, F, S>, G, T>
    where
        Self: Sized,
        F: Fn(R) -> S,
        G: Fn(T) -> U,
    {
        self.map_s(pre).map_t(post)
    }
}

/// Constructs a lens from a getter and setter pair.
///
/// The getter borrows the source and produces an owned focus; the setter
/// consumes the source together with a replacement value and rebuilds the
/// container.
///
/// # Examples
///
/// ```
/// use lawvere::optics::{lens, Lens};
///
/// #[derive(Clone, PartialEq, Debug)]
/// struct Point { x: i32, y: i32 }
///
/// let x_lens = lens(
///     |point: &Point| point.x,
///     |point: Point, x: i32| Point { x, ..point },
/// );
/// assert_eq!(x_lens.view(Point { x: 10, y: 20 }), 10);
/// ```
pub fn lens<S, T, A, B, G, St>(getter: G, setter: St) -> FunctionLens<S, T, A, B, G, St>
where
    G: Fn(&S) -> A,
    St: Fn(S, B) -> T,
{
    FunctionLens::new(getter, setter)
}

/// A lens implemented using getter and setter functions.
///
/// This is the most common way to create a lens; the [`lens!`](crate::lens)
/// macro generates a `FunctionLens` internally. Its `apply` reads the
/// focus, hands it to the caller's transformation, and maps the setter
/// over the effect-wrapped replacement, so naturality holds because the
/// getter and setter are plain functions that never inspect the effect.
///
/// # Type Parameters
///
/// - `S`/`T`: container before/after update
/// - `A`/`B`: focus read out / replacement written in
/// - `G`: the getter function type
/// - `St`: the setter function type
pub struct FunctionLens<S, T, A, B, G, St>
where
    G: Fn(&S) -> A,
    St: Fn(S, B) -> T,
{
    getter: G,
    setter: St,
    _marker: PhantomData<(S, T, A, B)>,
}

impl<S, T, A, B, G, St> FunctionLens<S, T, A, B, G, St>
where
    G: Fn(&S) -> A,
    St: Fn(S, B) -> T,
{
    /// Creates a new `FunctionLens` from a getter and setter.
    ///
    /// # Examples
    ///
    /// ```
    /// use lawvere::optics::{FunctionLens, Lens};
    ///
    /// #[derive(Clone, PartialEq, Debug)]
    /// struct Point { x: i32, y: i32 }
    ///
    /// let x_lens = FunctionLens::new(
    ///     |point: &Point| point.x,
    ///     |point: Point, x: i32| Point { x, ..point },
    /// );
    /// ```
    #[must_use]
    pub const fn new(getter: G, setter: St) -> Self {
        Self {
            getter,
            setter,
            _marker: PhantomData,
        }
    }
}

impl<S, T, A, B, G, St> Lens<S, T, A, B> for FunctionLens<S, T, A, B, G, St>
where
    G: Fn(&S) -> A,
    St: Fn(S, B) -> T,
{
    fn apply<Fam, F>(&self, transform: F, source: S) -> Fam::Wrapped<T>
    where
        Fam: FunctorFamily,
        F: FnOnce(A) -> Fam::Wrapped<B>,
    {
        let focus = (self.getter)(&source);
        Fam::map(transform(focus), move |value| (self.setter)(source, value))
    }
}

impl<S, T, A, B, G, St> Clone for FunctionLens<S, T, A, B, G, St>
where
    G: Fn(&S) -> A + Clone,
    St: Fn(S, B) -> T + Clone,
{
    fn clone(&self) -> Self {
        Self {
            getter: self.getter.clone(),
            setter: self.setter.clone(),
            _marker: PhantomData,
        }
    }
}

impl<S, T, A, B, G, St> std::fmt::Debug for FunctionLens<S, T, A, B, G, St>
where
    G: Fn(&S) -> A,
    St: Fn(S, B) -> T,
{
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("FunctionLens")
            .finish_non_exhaustive()
    }
}

/// A lens composed of two lenses, focusing through the outer into the
/// inner.
///
/// # Type Parameters
///
/// - `L1`: the outer lens
/// - `L2`: the inner lens
/// - `A`/`B`: the intermediate focus pair (target of `L1`, source of `L2`)
pub struct ComposedLens<L1, L2, A, B> {
    outer: L1,
    inner: L2,
    _marker: PhantomData<(A, B)>,
}

impl<L1, L2, A, B> ComposedLens<L1, L2, A, B> {
    /// Creates a new composed lens from an outer and an inner lens.
    #[must_use]
    pub const fn new(outer: L1, inner: L2) -> Self {
        Self {
            outer,
            inner,
            _marker: PhantomData,
        }
    }
}

impl<S, T, A, B, C, D, L1, L2> Lens<S, T, C, D> for ComposedLens<L1, L2, A, B>
where
    L1: Lens<S, T, A, B>,
    L2: Lens<A, B, C, D>,
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

impl<L1: Clone, L2: Clone, A, B> Clone for ComposedLens<L1, L2, A, B> {
    fn clone(&self) -> Self {
        Self {
            outer: self.outer.clone(),
            inner: self.inner.clone(),
            _marker: PhantomData,
        }
    }
}

impl<L1: std::fmt::Debug, L2: std::fmt::Debug, A, B> std::fmt::Debug for ComposedLens<L1, L2, A, B> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("ComposedLens")
            .field("outer", &self.outer)
            .field("inner", &self.inner)
            .finish_non_exhaustive()
    }
}

/// A lens whose container is contravariantly pre-mapped: reads an `R` by
/// first converting it into the underlying lens's `S`.
pub struct SourceMappedLens<L, F, S> {
    lens: L,
    function: F,
    _marker: PhantomData<S>,
}

impl<L, F, S> SourceMappedLens<L, F, S> {
    /// Creates a new source-mapped lens.
    #[must_use]
    pub const fn new(lens: L, function: F) -> Self {
        Self {
            lens,
            function,
            _marker: PhantomData,
        }
    }
}

impl<R, S, T, A, B, L, F> Lens<R, T, A, B> for SourceMappedLens<L, F, S>
where
    L: Lens<S, T, A, B>,
    F: Fn(R) -> S,
{
    fn apply<Fam, Tr>(&self, transform: Tr, source: R) -> Fam::Wrapped<T>
    where
        Fam: FunctorFamily,
        Tr: FnOnce(A) -> Fam::Wrapped<B>,
    {
        self.lens
            .apply::<Fam, _>(transform, (self.function)(source))
    }
}

impl<L: Clone, F: Clone, S> Clone for SourceMappedLens<L, F, S> {
    fn clone(&self) -> Self {
        Self {
            lens: self.lens.clone(),
            function: self.function.clone(),
            _marker: PhantomData,
        }
    }
}

impl<L: std::fmt::Debug, F, S> std::fmt::Debug for SourceMappedLens<L, F, S> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("SourceMappedLens")
            .field("lens", &self.lens)
            .finish_non_exhaustive()
    }
}

/// A lens whose rebuilt container is covariantly post-mapped from `T` to a
/// new type.
pub struct TargetMappedLens<L, F, T> {
    lens: L,
    function: F,
    _marker: PhantomData<T>,
}

impl<L, F, T> TargetMappedLens<L, F, T> {
    /// Creates a new target-mapped lens.
    #[must_use]
    pub const fn new(lens: L, function: F) -> Self {
        Self {
            lens,
            function,
            _marker: PhantomData,
        }
    }
}

impl<S, T, U, A, B, L, F> Lens<S, U, A, B> for TargetMappedLens<L, F, T>
where
    L: Lens<S, T, A, B>,
    F: Fn(T) -> U,
{
    fn apply<Fam, Tr>(&self, transform: Tr, source: S) -> Fam::Wrapped<U>
    where
        Fam: FunctorFamily,
        Tr: FnOnce(A) -> Fam::Wrapped<B>,
    {
        Fam::map(self.lens.apply::<Fam, _>(transform, source), |target| {
            (self.function)(target)
        })
    }
}

impl<L: Clone, F: Clone, T> Clone for TargetMappedLens<L, F, T> {
    fn clone(&self) -> Self {
        Self {
            lens: self.lens.clone(),
            function: self.function.clone(),
            _marker: PhantomData,
        }
    }
}

impl<L: std::fmt::Debug, F, T> std::fmt::Debug for TargetMappedLens<L, F, T> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("TargetMappedLens")
            .field("lens", &self.lens)
            .finish_non_exhaustive()
    }
}

/// A lens whose read side is remapped: the caller sees a value computed
/// from the underlying focus.
pub struct ReadMappedLens<L, F, A> {
    lens: L,
    function: F,
    _marker: PhantomData<A>,
}

impl<L, F, A> ReadMappedLens<L, F, A> {
    /// Creates a new read-mapped lens.
    #[must_use]
    pub const fn new(lens: L, function: F) -> Self {
        Self {
            lens,
            function,
            _marker: PhantomData,
        }
    }
}

impl<S, T, A, C, B, L, F> Lens<S, T, C, B> for ReadMappedLens<L, F, A>
where
    L: Lens<S, T, A, B>,
    F: Fn(A) -> C,
{
    fn apply<Fam, Tr>(&self, transform: Tr, source: S) -> Fam::Wrapped<T>
    where
        Fam: FunctorFamily,
        Tr: FnOnce(C) -> Fam::Wrapped<B>,
    {
        self.lens
            .apply::<Fam, _>(|focus| transform((self.function)(focus)), source)
    }
}

impl<L: Clone, F: Clone, A> Clone for ReadMappedLens<L, F, A> {
    fn clone(&self) -> Self {
        Self {
            lens: self.lens.clone(),
            function: self.function.clone(),
            _marker: PhantomData,
        }
    }
}

impl<L: std::fmt::Debug, F, A> std::fmt::Debug for ReadMappedLens<L, F, A> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("ReadMappedLens")
            .field("lens", &self.lens)
            .finish_non_exhaustive()
    }
}

/// A lens whose write side is remapped: the caller supplies a replacement
/// that is converted into the underlying lens's replacement type.
pub struct WriteMappedLens<L, F, B> {
    lens: L,
    function: F,
    _marker: PhantomData<B>,
}

impl<L, F, B> WriteMappedLens<L, F, B> {
    /// Creates a new write-mapped lens.
    #[must_use]
    pub const fn new(lens: L, function: F) -> Self {
        Self {
            lens,
            function,
            _marker: PhantomData,
        }
    }
}

impl<S, T, A, B, Z, L, F> Lens<S, T, A, Z> for WriteMappedLens<L, F, B>
where
    L: Lens<S, T, A, B>,
    F: Fn(Z) -> B,
{
    fn apply<Fam, Tr>(&self, transform: Tr, source: S) -> Fam::Wrapped<T>
    where
        Fam: FunctorFamily,
        Tr: FnOnce(A) -> Fam::Wrapped<Z>,
    {
        self.lens.apply::<Fam, _>(
            |focus| Fam::map(transform(focus), |value| (self.function)(value)),
            source,
        )
    }
}

impl<L: Clone, F: Clone, B> Clone for WriteMappedLens<L, F, B> {
    fn clone(&self) -> Self {
        Self {
            lens: self.lens.clone(),
            function: self.function.clone(),
            _marker: PhantomData,
        }
    }
}

impl<L: std::fmt::Debug, F, B> std::fmt::Debug for WriteMappedLens<L, F, B> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("WriteMappedLens")
            .field("lens", &self.lens)
            .finish_non_exhaustive()
    }
}

/// Creates a lens for a struct field.
///
/// The focused field must implement `Clone`; reading clones it out of the
/// borrowed source.
///
/// # Syntax
///
/// ```text
/// lens!(StructType, field_name)
/// ```
///
/// # Examples
///
/// ```
/// use lawvere::optics::Lens;
/// use lawvere::lens;
///
/// #[derive(Clone, PartialEq, Debug)]
/// struct Point { x: i32, y: i32 }
///
/// let x_lens = lens!(Point, x);
/// let y_lens = lens!(Point, y);
///
/// let point = Point { x: 10, y: 20 };
///
/// assert_eq!(x_lens.view(point.clone()), 10);
/// assert_eq!(y_lens.set(point, 200), Point { x: 10, y: 200 });
/// ```
#[macro_export]
macro_rules! lens {
    ($struct_type:ty, $field:ident) => {
        $crate::optics::lens(
            |source: &$struct_type| source.$field.clone(),
            |mut source: $struct_type, value| {
                source.$field = value;
                source
            },
        )
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::typeclass::{OptionFamily, ResultFamily};

    #[derive(Clone, PartialEq, Debug)]
    struct Point {
        x: i32,
        y: i32,
    }

    fn x_lens() -> impl Lens<Point, Point, i32, i32> {
        lens(
            |point: &Point| point.x,
            |point: Point, x: i32| Point { x, ..point },
        )
    }

    #[test]
    fn view_reads_the_focus() {
        let point = Point { x: 10, y: 20 };
        assert_eq!(x_lens().view(point), 10);
    }

    #[test]
    fn set_replaces_the_focus() {
        let point = Point { x: 10, y: 20 };
        let updated = x_lens().set(point, 100);
        assert_eq!(updated, Point { x: 100, y: 20 });
    }

    #[test]
    fn modify_transforms_the_focus() {
        let point = Point { x: 10, y: 20 };
        assert_eq!(x_lens().modify(point, |x| x * 2).x, 20);
    }

    #[test]
    fn apply_threads_a_declining_effect() {
        let declined = x_lens().apply::<OptionFamily, _>(
            |x| if x > 100 { Some(x) } else { None },
            Point { x: 10, y: 20 },
        );
        assert_eq!(declined, None);
    }

    #[test]
    fn apply_threads_a_failing_effect() {
        let failed = x_lens().apply::<ResultFamily<&str>, _>(
            |_| Err("rejected"),
            Point { x: 10, y: 20 },
        );
        assert_eq!(failed, Err("rejected"));
    }

    #[test]
    fn compose_focuses_through_nesting() {
        #[derive(Clone, PartialEq, Debug)]
        struct Outer {
            point: Point,
        }

        let nested = lens!(Outer, point).compose(lens!(Point, y));

        let data = Outer {
            point: Point { x: 1, y: 2 },
        };
        assert_eq!(nested.view(data.clone()), 2);
        assert_eq!(nested.set(data, 9).point, Point { x: 1, y: 9 });
    }

    #[test]
    fn map_s_premaps_the_container() {
        let from_pair = x_lens().map_s(|(x, y): (i32, i32)| Point { x, y });
        assert_eq!(from_pair.view((3, 4)), 3);
        assert_eq!(from_pair.set((3, 4), 7), Point { x: 7, y: 4 });
    }

    #[test]
    fn map_t_postmaps_the_container() {
        let to_pair = x_lens().map_t(|point: Point| (point.x, point.y));
        assert_eq!(to_pair.set(Point { x: 1, y: 2 }, 9), (9, 2));
    }

    #[test]
    fn map_a_remaps_the_read_side() {
        let textual = x_lens().map_a(|x: i32| x.to_string());
        assert_eq!(textual.view(Point { x: 5, y: 0 }), "5");
    }

    #[test]
    fn map_b_remaps_the_write_side() {
        let from_text = x_lens().map_b(|text: &str| text.len() as i32);
        assert_eq!(from_text.set(Point { x: 1, y: 2 }, "four"), Point { x: 4, y: 2 });
    }

    #[test]
    fn di_map_remaps_both_container_sides() {
        let pair_lens = x_lens().di_map(
            |(x, y): (i32, i32)| Point { x, y },
            |point: Point| (point.x, point.y),
        );
        assert_eq!(pair_lens.view((3, 4)), 3);
        assert_eq!(pair_lens.set((3, 4), 7), (7, 4));
    }
}
