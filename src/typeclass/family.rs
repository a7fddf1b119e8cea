//! Functor families - rank-2 Higher-Kinded Type emulation for optics.
//!
//! The [`TypeConstructor`](super::TypeConstructor) GAT abstracts over a
//! *value's* type constructor, which is enough for the choice family's
//! combinators. The optics layer needs something stronger: a lens's `apply`
//! operation must let the *caller of each call site* choose the effect
//! wrapper, and lens composition must thread one wrapper choice through
//! several polymorphic calls, which is rank-2 polymorphism.
//!
//! A `FunctorFamily` encodes this by standing for the type constructor
//! itself rather than for an applied value: `Family::Wrapped<A>` is the
//! constructor applied to `A`, and `Family::map` is its mapping operation.
//! A function generic over `Fam: FunctorFamily` can then be instantiated at
//! a different family per call site, which is exactly the shape the van
//! Laarhoven encoding requires.
//!
//! # Examples
//!
//! ```rust
//! use lawvere::typeclass::{FunctorFamily, OptionFamily};
//!
//! fn double_inside<Fam: FunctorFamily>(wrapped: Fam::Wrapped<i32>) -> Fam::Wrapped<i32> {
//!     Fam::map(wrapped, |n| n * 2)
//! }
//!
//! assert_eq!(double_inside::<OptionFamily>(Some(21)), Some(42));
//! ```

use std::marker::PhantomData;

use super::identity::Identity;
use super::wrappers::Const;

/// A family of types sharing one constructor and its mapping operation.
///
/// Implementors are zero-sized "brands" naming a type constructor. The
/// constructor applied to `A` is `Self::Wrapped<A>`; `map` transforms the
/// wrapped value while preserving the wrapper's structure.
///
/// # Laws
///
/// 1. **Identity**: `Fam::map(fa, |x| x)` is equivalent to `fa`.
/// 2. **Composition**: `Fam::map(Fam::map(fa, f), g)` is equivalent to
///    `Fam::map(fa, |x| g(f(x)))`.
pub trait FunctorFamily {
    /// The family's constructor applied to `A`.
    type Wrapped<A>;

    /// Applies a function to the wrapped value, preserving the wrapper.
    fn map<A, B, F>(wrapped: Self::Wrapped<A>, function: F) -> Self::Wrapped<B>
    where
        F: FnOnce(A) -> B;
}

/// The family of [`Identity`] wrappers - the "no effect" choice.
///
/// Instantiating a lens's `apply` at this family recovers plain `set` and
/// `modify`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdentityFamily;

impl FunctorFamily for IdentityFamily {
    type Wrapped<A> = Identity<A>;

    #[inline]
    fn map<A, B, F>(wrapped: Identity<A>, function: F) -> Identity<B>
    where
        F: FnOnce(A) -> B,
    {
        Identity::new(function(wrapped.into_inner()))
    }
}

/// The family of [`Const`] wrappers holding a `C` - the "record and ignore"
/// choice.
///
/// Instantiating a lens's `apply` at `ConstFamily<A>` recovers `view`: the
/// focused value rides through the container reassembly untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConstFamily<C>(PhantomData<C>);

impl<C> FunctorFamily for ConstFamily<C> {
    type Wrapped<A> = Const<C, A>;

    #[inline]
    fn map<A, B, F>(wrapped: Const<C, A>, _function: F) -> Const<C, B>
    where
        F: FnOnce(A) -> B,
    {
        wrapped.retag()
    }
}

/// The family of `Option` wrappers - updates that may decline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OptionFamily;

impl FunctorFamily for OptionFamily {
    type Wrapped<A> = Option<A>;

    #[inline]
    fn map<A, B, F>(wrapped: Option<A>, function: F) -> Option<B>
    where
        F: FnOnce(A) -> B,
    {
        wrapped.map(function)
    }
}

/// The family of `Result` wrappers with error type `E` - updates that may
/// fail with a reason.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResultFamily<E>(PhantomData<E>);

impl<E> FunctorFamily for ResultFamily<E> {
    type Wrapped<A> = Result<A, E>;

    #[inline]
    fn map<A, B, F>(wrapped: Result<A, E>, function: F) -> Result<B, E>
    where
        F: FnOnce(A) -> B,
    {
        wrapped.map(function)
    }
}
