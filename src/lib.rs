//! # lawvere
//!
//! Fixed-arity choice types and law-abiding optics for Rust.
//!
//! ## Overview
//!
//! This library provides two orthogonal generic abstractions for modelling
//! data and data access, both designed so that their algebraic laws hold by
//! construction rather than by convention:
//!
//! - **Choice types**: closed disjoint unions of fixed arity
//!   ([`Choice2`](control::Choice2), [`Choice3`](control::Choice3),
//!   [`Choice4`](control::Choice4)), each variant carrying exactly one value.
//!   Every combinator (mapping, bifunctor mapping, monadic chaining,
//!   applicative combination, effectful traversal, arity conversion) is
//!   derived from a single total `match_with` primitive.
//! - **Optics**: a van Laarhoven [`Lens`](optics::Lens) whose one primitive
//!   operation is polymorphic over an arbitrary effect wrapper, and an
//!   [`Iso`](optics::Iso) that is provably reversible into a symmetric lens.
//!
//! The type class layer ([`Functor`](typeclass::Functor),
//! [`Applicative`](typeclass::Applicative), [`Monad`](typeclass::Monad),
//! [`Bifunctor`](typeclass::Bifunctor)) describes the combinator pattern the
//! choice family shares with the standard library containers.
//!
//! ## Feature Flags
//!
//! - `typeclass`: Type class traits and the HKT emulation layer
//! - `control`: The choice family and its coproduct contracts
//! - `optics`: Lens and Iso
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use lawvere::prelude::*;
//!
//! let value: Choice3<String, u8, i32> = Choice3::c(21);
//! let doubled = value.fmap(|n| n * 2);
//! assert_eq!(doubled, Choice3::c(42));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Note: Disabling redundant_closure_for_method_calls due to clippy 0.1.92 panic bug
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use lawvere::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "control")]
    pub use crate::control::*;

    #[cfg(feature = "optics")]
    pub use crate::optics::*;
}

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "control")]
pub mod control;

#[cfg(feature = "optics")]
pub mod optics;
