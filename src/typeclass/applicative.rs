//! Applicative type class - lifting values and combining independent contexts.
//!
//! `Applicative` extends [`Functor`] with two abilities:
//!
//! - `of` lifts a plain value into the minimal context, without side effects
//!   and without altering the value.
//! - `apply` combines a context holding a function with a context holding a
//!   value. The two operands are *independent*: neither decides whether the
//!   other is evaluated. This is what lets [`Validation`] accumulate every
//!   failure instead of stopping at the first one.
//!
//! [`Validation`]: crate::effect::Validation
//!
//! # Laws
//!
//! ## Identity
//!
//! ```text
//! apply(of(|x| x), v) == v
//! ```
//!
//! ## Homomorphism
//!
//! ```text
//! apply(of(f), of(x)) == of(f(x))
//! ```
//!
//! ## Interchange
//!
//! ```text
//! apply(u, of(y)) == apply(of(|f| f(y)), u)
//! ```
//!
//! # Examples
//!
//! ```rust
//! use contextual::effect::OptionKind;
//! use contextual::typeclass::Applicative;
//!
//! let lifted: Option<i32> = OptionKind::of(42);
//! assert_eq!(lifted, Some(42));
//!
//! let sum = OptionKind::map2(Some(1), Some(2), |x, y| x + y);
//! assert_eq!(sum, Some(3));
//! ```

use super::functor::Functor;
use super::higher::Portable;

/// A type class for contexts that can lift values and combine independent contexts.
///
/// `of` requires `Clone` because deferred contexts (Reader, State, Task)
/// produce the lifted value again on every evaluation.
pub trait Applicative: Functor {
    /// Lifts a plain value into the context.
    fn of<A>(value: A) -> Self::Of<A>
    where
        A: Portable + Clone;

    /// Applies a function held in one context to a value held in another.
    fn apply<A, B, F>(function: Self::Of<F>, fa: Self::Of<A>) -> Self::Of<B>
    where
        A: Portable,
        B: Portable,
        F: Fn(A) -> B + Portable;

    /// Combines two independent contexts with a binary function.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use contextual::effect::OptionKind;
    /// use contextual::typeclass::Applicative;
    ///
    /// assert_eq!(OptionKind::map2(Some(2), Some(3), |a, b| a * b), Some(6));
    /// assert_eq!(OptionKind::map2(Some(2), None::<i32>, |a, b| a * b), None);
    /// ```
    fn map2<A, B, C, F>(fa: Self::Of<A>, fb: Self::Of<B>, function: F) -> Self::Of<C>
    where
        A: Portable + Clone,
        B: Portable,
        C: Portable,
        F: Fn(A, B) -> C + Portable + Clone,
    {
        let curried = Self::map::<A, _, _>(fa, move |a: A| {
            let function = function.clone();
            move |b: B| function(a.clone(), b)
        });
        Self::apply::<B, C, _>(curried, fb)
    }

    /// Combines three independent contexts with a ternary function.
    fn map3<A, B, C, D, F>(
        fa: Self::Of<A>,
        fb: Self::Of<B>,
        fc: Self::Of<C>,
        function: F,
    ) -> Self::Of<D>
    where
        A: Portable + Clone,
        B: Portable + Clone,
        C: Portable,
        D: Portable,
        F: Fn(A, B, C) -> D + Portable + Clone,
    {
        let paired = Self::map2::<A, B, (A, B), _>(fa, fb, |a, b| (a, b));
        Self::map2::<(A, B), C, D, _>(paired, fc, move |(a, b), c| function(a, b, c))
    }

    /// Pairs the values of two independent contexts.
    fn product<A, B>(fa: Self::Of<A>, fb: Self::Of<B>) -> Self::Of<(A, B)>
    where
        A: Portable + Clone,
        B: Portable,
    {
        Self::map2::<A, B, (A, B), _>(fa, fb, |a, b| (a, b))
    }
}
