//! Bifunctor type class - mapping over two type parameters.
//!
//! This module provides the `Bifunctor` trait, which represents types with
//! two independently transformable payload positions. While `Functor`
//! transforms `F<A>` to `F<B>`, `Bifunctor` transforms `F<A, B>` to
//! `F<C, D>`.
//!
//! For the choice family the two positions are the *last two* slots: every
//! earlier slot passes through unchanged, so `Choice3<A, B, C>` is a
//! bifunctor over `B` and `C`, and `Choice4<A, B, C, D>` over `C` and `D`.
//!
//! # Laws
//!
//! All `Bifunctor` implementations must satisfy these laws:
//!
//! ## Identity Law
//!
//! ```text
//! bf.bimap(|x| x, |y| y) == bf
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! bf.bimap(|x| f2(f1(x)), |y| g2(g1(y))) == bf.bimap(f1, g1).bimap(f2, g2)
//! ```
//!
//! ## first/second Consistency Law
//!
//! ```text
//! bf.bimap(f, g) == bf.first(f).second(g) == bf.second(g).first(f)
//! ```
//!
//! # Examples
//!
//! ```rust
//! use lawvere::typeclass::Bifunctor;
//! use lawvere::control::Choice3;
//!
//! let value: Choice3<u8, i32, String> = Choice3::b(21);
//! let mapped = value.bimap(|n| n * 2, |s: String| s.len());
//! assert_eq!(mapped, Choice3::b(42));
//! ```

/// A type class for types with two type parameters that can have functions
/// mapped over both.
///
/// See the module-level documentation for laws and the choice family's
/// last-two-slots convention.
///
/// # Examples
///
/// ```rust
/// use lawvere::typeclass::Bifunctor;
///
/// let tuple = (42, "hello".to_string());
/// let result = tuple.bimap(|x| x * 2, |s| s.len());
/// assert_eq!(result, (84, 5));
/// ```
pub trait Bifunctor<A, B> {
    /// The resulting type constructor after applying the transformation.
    ///
    /// For `Choice3<X, A, B>`, `Target<C, D> = Choice3<X, C, D>`.
    /// For `Result<T, E>` (implemented as `Bifunctor<E, T>`),
    /// `Target<C, D> = Result<D, C>`.
    type Target<C, D>;

    /// Applies two functions to both type parameters simultaneously.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lawvere::typeclass::Bifunctor;
    ///
    /// let tuple = (42, "hello".to_string());
    /// assert_eq!(tuple.bimap(|x| x * 2, |s| s.len()), (84, 5));
    /// ```
    fn bimap<C, D, F, G>(self, first_function: F, second_function: G) -> Self::Target<C, D>
    where
        F: FnOnce(A) -> C,
        G: FnOnce(B) -> D;

    /// Applies a function to the first type parameter only.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lawvere::typeclass::Bifunctor;
    /// use lawvere::control::Choice2;
    ///
    /// let value: Choice2<i32, String> = Choice2::a(42);
    /// assert_eq!(value.first(|x| x.to_string()), Choice2::a("42".to_string()));
    /// ```
    #[inline]
    fn first<C, F>(self, function: F) -> Self::Target<C, B>
    where
        F: FnOnce(A) -> C,
        Self: Sized,
    {
        self.bimap(function, |b| b)
    }

    /// Applies a function to the second type parameter only.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lawvere::typeclass::Bifunctor;
    /// use lawvere::control::Choice2;
    ///
    /// let value: Choice2<i32, String> = Choice2::b("hello".to_string());
    /// assert_eq!(value.second(|s| s.len()), Choice2::b(5));
    /// ```
    #[inline]
    fn second<D, G>(self, function: G) -> Self::Target<A, D>
    where
        G: FnOnce(B) -> D,
        Self: Sized,
    {
        self.bimap(|a| a, function)
    }

    /// Applies two functions to references of both type parameters without
    /// consuming self.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lawvere::typeclass::Bifunctor;
    ///
    /// let tuple = (42, "hello".to_string());
    /// let result = tuple.bimap_ref(|x| x * 2, |s| s.len());
    /// assert_eq!(tuple.0, 42); // tuple is still available
    /// assert_eq!(result, (84, 5));
    /// ```
    fn bimap_ref<C, D, F, G>(&self, first_function: F, second_function: G) -> Self::Target<C, D>
    where
        F: FnOnce(&A) -> C,
        G: FnOnce(&B) -> D;

    /// Applies a function to a reference of the first type parameter.
    ///
    /// Requires `B: Clone` because the untransformed value must be cloned.
    #[inline]
    fn first_ref<C, F>(&self, function: F) -> Self::Target<C, B>
    where
        B: Clone,
        F: FnOnce(&A) -> C,
        Self: Sized,
    {
        self.bimap_ref(function, |b| b.clone())
    }

    /// Applies a function to a reference of the second type parameter.
    ///
    /// Requires `A: Clone` because the untransformed value must be cloned.
    #[inline]
    fn second_ref<D, G>(&self, function: G) -> Self::Target<A, D>
    where
        A: Clone,
        G: FnOnce(&B) -> D,
        Self: Sized,
    {
        self.bimap_ref(|a| a.clone(), function)
    }
}

// =============================================================================
// (A, B) Implementation
// =============================================================================

impl<A, B> Bifunctor<A, B> for (A, B) {
    type Target<C, D> = (C, D);

    #[inline]
    fn bimap<C, D, F, G>(self, first_function: F, second_function: G) -> (C, D)
    where
        F: FnOnce(A) -> C,
        G: FnOnce(B) -> D,
    {
        (first_function(self.0), second_function(self.1))
    }

    #[inline]
    fn bimap_ref<C, D, F, G>(&self, first_function: F, second_function: G) -> (C, D)
    where
        F: FnOnce(&A) -> C,
        G: FnOnce(&B) -> D,
    {
        (first_function(&self.0), second_function(&self.1))
    }
}

// =============================================================================
// Result<T, E> Implementation
// =============================================================================

/// `Result<T, E>` is a `Bifunctor<E, T>`: `first` transforms the error
/// type (like `map_err`) and `second` transforms the success type (like
/// `map`), keeping `second` consistent with `Functor::fmap`.
impl<T, E> Bifunctor<E, T> for Result<T, E> {
    type Target<C, D> = Result<D, C>;

    #[inline]
    fn bimap<C, D, F, G>(self, first_function: F, second_function: G) -> Result<D, C>
    where
        F: FnOnce(E) -> C,
        G: FnOnce(T) -> D,
    {
        match self {
            Ok(value) => Ok(second_function(value)),
            Err(error) => Err(first_function(error)),
        }
    }

    #[inline]
    fn bimap_ref<C, D, F, G>(&self, first_function: F, second_function: G) -> Result<D, C>
    where
        F: FnOnce(&E) -> C,
        G: FnOnce(&T) -> D,
    {
        match self {
            Ok(value) => Ok(second_function(value)),
            Err(error) => Err(first_function(error)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn tuple_bimap_transforms_both() {
        let tuple = (42, "hello".to_string());
        assert_eq!(tuple.bimap(|x| x * 2, |s| s.len()), (84, 5));
    }

    #[rstest]
    fn tuple_identity_law() {
        let tuple = (1, "one");
        assert_eq!(tuple.bimap(|x| x, |y| y), tuple);
    }

    #[rstest]
    fn result_first_maps_error() {
        let failed: Result<i32, String> = Err("error".to_string());
        assert_eq!(failed.first(|e| e.len()), Err(5));
    }

    #[rstest]
    fn result_second_maps_success() {
        let ok: Result<i32, String> = Ok(21);
        assert_eq!(ok.second(|x| x * 2), Ok(42));
    }

    #[rstest]
    fn tuple_first_second_consistency_law() {
        let tuple = (2, "ab");
        let f = |x: i32| x * 10;
        let g = |s: &str| s.len();

        let by_bimap = tuple.bimap(f, g);
        let by_first_second = tuple.first(f).second(g);
        let by_second_first = tuple.second(g).first(f);

        assert_eq!(by_bimap, by_first_second);
        assert_eq!(by_first_second, by_second_first);
    }

    #[rstest]
    fn result_bimap_ref_leaves_original() {
        let ok: Result<String, i32> = Ok("hello".to_string());
        let mapped = ok.bimap_ref(|e| e * 2, |s| s.len());
        assert_eq!(mapped, Ok(5));
        assert_eq!(ok, Ok("hello".to_string()));
    }
}
