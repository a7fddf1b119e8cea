//! Type class traits for the combinator surfaces in this crate.
//!
//! This module provides the contracts the choice family shares with the
//! standard library containers, plus the Higher-Kinded Type emulation they
//! are expressed against:
//!
//! - [`Functor`]: Mapping over the (last-slot) payload
//! - [`Applicative`]: Lifting values and combining independent containers
//! - [`Monad`]: Sequencing computations with dependency
//! - [`Bifunctor`]: Mapping over the last two payload positions
//!
//! ## Higher-Kinded Types Emulation
//!
//! Rust has no native higher-kinded types. Two emulations are used, each
//! matched to the rank of polymorphism required:
//!
//! - [`TypeConstructor`]: a GAT on the *value's* type, enough for the
//!   choice family's combinators, where the constructor is fixed per call.
//! - [`FunctorFamily`]: a GAT on a *brand* type standing for the
//!   constructor itself, required by the optics layer, where one
//!   polymorphic operation must accept a caller-chosen wrapper per call
//!   site (rank-2 polymorphism).
//!
//! ## Minimal Wrappers
//!
//! - [`Identity`]: the "no effect" wrapper; lens `set`/`modify` fall out of
//!   instantiating `apply` at [`IdentityFamily`]
//! - [`Const`]: the "record the focus, ignore the container" wrapper; lens
//!   `view` falls out of instantiating `apply` at [`ConstFamily`]

mod applicative;
mod bifunctor;
mod family;
mod functor;
mod higher;
mod identity;
mod monad;
mod wrappers;

pub use applicative::Applicative;
pub use bifunctor::Bifunctor;
pub use family::{ConstFamily, FunctorFamily, IdentityFamily, OptionFamily, ResultFamily};
pub use functor::Functor;
pub use higher::TypeConstructor;
pub use identity::Identity;
pub use monad::Monad;
pub use wrappers::Const;
