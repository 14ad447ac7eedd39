//! Monad type class - sequencing computations within a context.
//!
//! This module provides the `Monad` trait, which extends `Applicative` with
//! the ability to sequence computations where each step can depend on the
//! result of the previous step.
//!
//! # Laws
//!
//! All `Monad` implementations must satisfy these laws:
//!
//! ## Left Identity Law
//!
//! Lifting a pure value and chaining a function is the same as applying the function:
//!
//! ```text
//! chain(of(a), f) == f(a)
//! ```
//!
//! ## Right Identity Law
//!
//! Chaining `of` returns the original context:
//!
//! ```text
//! chain(m, of) == m
//! ```
//!
//! ## Associativity Law
//!
//! ```text
//! chain(chain(m, f), g) == chain(m, |x| chain(f(x), g))
//! ```
//!
//! The [`laws`](crate::laws) module turns these equations into reusable checks.
//!
//! # Examples
//!
//! ```rust
//! use contextual::effect::OptionKind;
//! use contextual::typeclass::{Applicative, Monad};
//!
//! fn halve(value: i32) -> Option<i32> {
//!     if value % 2 == 0 { Some(value / 2) } else { None }
//! }
//!
//! assert_eq!(OptionKind::chain(OptionKind::of(16), halve), Some(8));
//! assert_eq!(OptionKind::chain(Some(3), halve), None);
//! ```

use super::applicative::Applicative;
use super::higher::Portable;

/// A type class for contexts that support sequencing of dependent computations.
///
/// `chain` over an absent or failed context short-circuits without invoking
/// its argument.
pub trait Monad: Applicative {
    /// Applies a function returning a new context and flattens one level of nesting.
    fn chain<A, B, F>(fa: Self::Of<A>, function: F) -> Self::Of<B>
    where
        A: Portable,
        B: Portable,
        F: Fn(A) -> Self::Of<B> + Portable;

    /// Alias for `chain` matching Rust's `Option::and_then` naming.
    #[inline]
    fn and_then<A, B, F>(fa: Self::Of<A>, function: F) -> Self::Of<B>
    where
        A: Portable,
        B: Portable,
        F: Fn(A) -> Self::Of<B> + Portable,
    {
        Self::chain::<A, B, F>(fa, function)
    }

    /// Sequences two computations, discarding the first result.
    ///
    /// A failure in `fa` propagates and `next` is never reached.
    #[inline]
    fn then<A, B>(fa: Self::Of<A>, next: Self::Of<B>) -> Self::Of<B>
    where
        A: Portable,
        B: Portable,
        Self::Of<B>: Clone,
    {
        Self::chain::<A, B, _>(fa, move |_| next.clone())
    }

    /// Removes one level of nesting.
    #[inline]
    fn flatten<A>(ffa: Self::Of<Self::Of<A>>) -> Self::Of<A>
    where
        A: Portable,
    {
        Self::chain::<Self::Of<A>, A, _>(ffa, |inner| inner)
    }

    /// Derives `apply` from `chain`, sequencing the function before the value.
    ///
    /// Monadic contexts that have no reason to evaluate operands independently
    /// implement [`Applicative::apply`] through this helper.
    #[inline]
    fn apply_via_chain<A, B, F>(function: Self::Of<F>, fa: Self::Of<A>) -> Self::Of<B>
    where
        A: Portable,
        B: Portable,
        F: Fn(A) -> B + Portable,
        Self::Of<A>: Clone,
    {
        Self::chain::<F, B, _>(function, move |f: F| Self::map::<A, B, F>(fa.clone(), f))
    }
}
