//! Coproduct contracts - the match capability behind the choice family.
//!
//! A coproduct of arity `n` is a value that is exactly one of `n`
//! alternatives. The whole contract is a single total `match_with`
//! operation taking one transformation per alternative: supplying all `n`
//! branches is enforced by the function arity, so the "missing case" error
//! class cannot exist at runtime.
//!
//! The canonical closed implementations are the choice types
//! ([`Choice2`](super::Choice2), [`Choice3`](super::Choice3),
//! [`Choice4`](super::Choice4)); the contracts stay separate so operations
//! like `converge` can accept *any* coproduct of the right shape, not just
//! the canonical one.
//!
//! Everything else here - the per-slot projections - is derived from
//! `match_with` as default methods.

/// A coproduct of two possibilities.
///
/// # Examples
///
/// ```rust
/// use lawvere::control::{Choice2, CoProduct2};
///
/// let value: Choice2<i32, String> = Choice2::a(42);
/// let described = value.match_with(|n| format!("number {n}"), |s| s);
/// assert_eq!(described, "number 42");
/// ```
pub trait CoProduct2<A, B> {
    /// Eliminates the coproduct by applying the transformation matching the
    /// populated slot.
    ///
    /// Total: exactly one of the branches runs, and which one is fixed at
    /// construction time.
    fn match_with<R, FA, FB>(self, on_a: FA, on_b: FB) -> R
    where
        FA: FnOnce(A) -> R,
        FB: FnOnce(B) -> R;

    /// Projects the first slot, if populated.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lawvere::control::{Choice2, CoProduct2};
    ///
    /// let value: Choice2<i32, String> = Choice2::a(42);
    /// assert_eq!(value.project_a(), Some(42));
    /// ```
    #[inline]
    fn project_a(self) -> Option<A>
    where
        Self: Sized,
    {
        self.match_with(Some, |_| None)
    }

    /// Projects the second slot, if populated.
    #[inline]
    fn project_b(self) -> Option<B>
    where
        Self: Sized,
    {
        self.match_with(|_| None, Some)
    }
}

/// A coproduct of three possibilities.
///
/// # Examples
///
/// ```rust
/// use lawvere::control::{Choice3, CoProduct3};
///
/// let value: Choice3<i32, bool, String> = Choice3::c("three".to_string());
/// let length = value.match_with(|_| 0, |_| 0, |s| s.len());
/// assert_eq!(length, 5);
/// ```
pub trait CoProduct3<A, B, C> {
    /// Eliminates the coproduct by applying the transformation matching the
    /// populated slot.
    fn match_with<R, FA, FB, FC>(self, on_a: FA, on_b: FB, on_c: FC) -> R
    where
        FA: FnOnce(A) -> R,
        FB: FnOnce(B) -> R,
        FC: FnOnce(C) -> R;

    /// Projects the first slot, if populated.
    #[inline]
    fn project_a(self) -> Option<A>
    where
        Self: Sized,
    {
        self.match_with(Some, |_| None, |_| None)
    }

    /// Projects the second slot, if populated.
    #[inline]
    fn project_b(self) -> Option<B>
    where
        Self: Sized,
    {
        self.match_with(|_| None, Some, |_| None)
    }

    /// Projects the third slot, if populated.
    #[inline]
    fn project_c(self) -> Option<C>
    where
        Self: Sized,
    {
        self.match_with(|_| None, |_| None, Some)
    }
}

/// A coproduct of four possibilities.
pub trait CoProduct4<A, B, C, D> {
    /// Eliminates the coproduct by applying the transformation matching the
    /// populated slot.
    fn match_with<R, FA, FB, FC, FD>(self, on_a: FA, on_b: FB, on_c: FC, on_d: FD) -> R
    where
        FA: FnOnce(A) -> R,
        FB: FnOnce(B) -> R,
        FC: FnOnce(C) -> R,
        FD: FnOnce(D) -> R;

    /// Projects the first slot, if populated.
    #[inline]
    fn project_a(self) -> Option<A>
    where
        Self: Sized,
    {
        self.match_with(Some, |_| None, |_| None, |_| None)
    }

    /// Projects the second slot, if populated.
    #[inline]
    fn project_b(self) -> Option<B>
    where
        Self: Sized,
    {
        self.match_with(|_| None, Some, |_| None, |_| None)
    }

    /// Projects the third slot, if populated.
    #[inline]
    fn project_c(self) -> Option<C>
    where
        Self: Sized,
    {
        self.match_with(|_| None, |_| None, Some, |_| None)
    }

    /// Projects the fourth slot, if populated.
    #[inline]
    fn project_d(self) -> Option<D>
    where
        Self: Sized,
    {
        self.match_with(|_| None, |_| None, |_| None, Some)
    }
}
