//! The choice family - closed disjoint unions of fixed arity.
//!
//! This module provides the canonical coproduct types [`Choice2`],
//! [`Choice3`], and [`Choice4`], together with the [`CoProduct2`],
//! [`CoProduct3`], and [`CoProduct4`] match contracts they implement.
//!
//! Each choice type is a closed sum: exactly one of its slots holds a
//! value, the discriminant is fixed at construction, and the value can only
//! be built through the per-slot constructors and taken apart through
//! `match_with`. Every combinator (`fmap`, `bimap`, `flat_map`, `zip`,
//! `traverse`, `diverge`, `converge`) is defined in terms of that single
//! primitive, which is what makes the functor/bifunctor/monad laws hold by
//! construction.
//!
//! The combinator surface is *biased to the last slot*: mapping and
//! chaining transform the last slot's payload while every earlier slot
//! passes through unchanged, matching the convention that earlier slots
//! model errors or alternatives.
//!
//! # Examples
//!
//! ```rust
//! use lawvere::control::Choice3;
//! use lawvere::typeclass::{Functor, Monad};
//!
//! let parsed: Choice3<String, u8, i32> = Choice3::c(20);
//! let result = parsed.fmap(|n| n + 1).flat_map(|n| Choice3::c(n * 2));
//! assert_eq!(result, Choice3::c(42));
//!
//! // Earlier slots short-circuit.
//! let failed: Choice3<String, u8, i32> = Choice3::a("bad input".to_string());
//! let unchanged = failed.clone().fmap(|n| n + 1);
//! assert_eq!(unchanged, failed);
//! ```

mod choice2;
mod choice3;
mod choice4;
mod coproduct;

pub use choice2::Choice2;
pub use choice3::Choice3;
pub use choice4::Choice4;
pub use coproduct::{CoProduct2, CoProduct3, CoProduct4};

/// Generates the per-slot `is_*` inspectors for a choice type.
///
/// Expanded inside the type's inherent impl; the repr enum stays private,
/// so this cannot be written outside the module that owns it.
macro_rules! choice_inspectors {
    ($repr:ident { $($slot:ident => $variant:ident),+ $(,)? }) => {
        paste::paste! {
            $(
                #[doc = concat!(
                    "Returns `true` if this value occupies the `",
                    stringify!($slot),
                    "` slot."
                )]
                #[inline]
                #[must_use]
                pub const fn [<is_ $slot>](&self) -> bool {
                    matches!(self.repr, $repr::$variant(_))
                }
            )+
        }
    };
}

pub(crate) use choice_inspectors;
