//! Functor type class - mapping over context values.
//!
//! This module provides the `Functor` trait, which represents contexts that
//! can have a function applied to their inner value(s) while preserving the
//! context's shape: `None` stays `None`, an `Err` keeps its error, a Task's
//! failure channel is left untouched.
//!
//! # Laws
//!
//! All `Functor` implementations must satisfy these laws:
//!
//! ## Identity Law
//!
//! Mapping the identity function over a functor returns an equivalent functor:
//!
//! ```text
//! map(fa, |x| x) == fa
//! ```
//!
//! ## Composition Law
//!
//! Mapping two functions in sequence is equivalent to mapping their composition:
//!
//! ```text
//! map(map(fa, f), g) == map(fa, |x| g(f(x)))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use contextual::effect::OptionKind;
//! use contextual::typeclass::Functor;
//!
//! let transformed = OptionKind::map(Some(5), |n: i32| n.to_string());
//! assert_eq!(transformed, Some("5".to_string()));
//!
//! // None is preserved
//! let untouched = OptionKind::map(None, |n: i32| n.to_string());
//! assert_eq!(untouched, None);
//! ```

use super::higher::{Portable, TypeConstructor};

/// A type class for contexts that can have a function mapped over their contents.
///
/// The trait is implemented on a context's witness type, so `map` is an
/// associated function rather than a method. Concrete contexts expose the same
/// operation as an inherent method for everyday use.
///
/// # Laws
///
/// ```text
/// map(fa, |x| x) == fa
/// map(map(fa, f), g) == map(fa, |x| g(f(x)))
/// ```
pub trait Functor: TypeConstructor {
    /// Applies `function` to the value(s) inside the context.
    ///
    /// Absent or failed contexts are returned unchanged and `function` is not
    /// invoked.
    fn map<A, B, F>(fa: Self::Of<A>, function: F) -> Self::Of<B>
    where
        A: Portable,
        B: Portable,
        F: Fn(A) -> B + Portable;

    /// Replaces the value inside the context with a constant.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use contextual::effect::OptionKind;
    /// use contextual::typeclass::Functor;
    ///
    /// assert_eq!(OptionKind::replace(Some(5), "replaced"), Some("replaced"));
    /// assert_eq!(OptionKind::replace(None::<i32>, "replaced"), None);
    /// ```
    #[inline]
    fn replace<A, B>(fa: Self::Of<A>, value: B) -> Self::Of<B>
    where
        A: Portable,
        B: Portable + Clone,
    {
        Self::map::<A, B, _>(fa, move |_| value.clone())
    }

    /// Discards the value inside the context, keeping only its shape.
    #[inline]
    fn void<A>(fa: Self::Of<A>) -> Self::Of<()>
    where
        A: Portable,
    {
        Self::map::<A, (), _>(fa, |_| ())
    }
}
