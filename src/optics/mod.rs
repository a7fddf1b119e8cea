//! Optics - polymorphic bidirectional accessors.
//!
//! This module provides two optics:
//!
//! - [`Lens`]: reads a sub-value out of a larger structure and writes an
//!   updated sub-value back in, represented as one higher-order operation
//!   polymorphic over an arbitrary effect wrapper (the van Laarhoven
//!   encoding). `view`, `set`, `modify`, composition, and every remapping
//!   combinator are derived from that single primitive.
//! - [`Iso`]: the invertible special case, a lens built from a pair of
//!   plain total functions, reversible into a symmetric lens in O(1).
//!
//! # Example
//!
//! ```
//! use lawvere::optics::{Lens, simple_iso, Iso};
//! use lawvere::lens;
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct Account { name: String, balance_cents: i64 }
//!
//! // A lens focusing a field.
//! let balance = lens!(Account, balance_cents);
//! let account = Account { name: "a".to_string(), balance_cents: 250 };
//! assert_eq!(balance.view(account.clone()), 250);
//!
//! // An iso converting between representations.
//! let euros = simple_iso(
//!     |cents: i64| cents as f64 / 100.0,
//!     |euros: f64| (euros * 100.0).round() as i64,
//! );
//! assert_eq!(euros.view(250), 2.5);
//! assert_eq!(euros.review(2.5), 250);
//! ```

mod iso;
mod lens;

pub use iso::{iso, simple_iso, ComposedIso, FunctionIso, Iso};
pub use lens::{
    lens, ComposedLens, FunctionLens, Lens, ReadMappedLens, SourceMappedLens, TargetMappedLens,
    WriteMappedLens,
};
