//! Identity - the context that adds nothing.
//!
//! `Identity` is the base case for transformer stacks: stacking a context on
//! top of `IdentityKind` yields that context's plain behaviour, which makes it
//! the simplest model for checking the transformer layer against the laws.

use super::applicative::Applicative;
use super::functor::Functor;
use super::higher::{Portable, TypeConstructor};
use super::monad::Monad;

/// A value wrapped with no extra dimension.
///
/// # Examples
///
/// ```rust
/// use contextual::typeclass::{Identity, IdentityKind, Monad};
///
/// let doubled = IdentityKind::chain(Identity(21), |x: i32| Identity(x * 2));
/// assert_eq!(doubled.into_inner(), 42);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Identity<A>(pub A);

impl<A> Identity<A> {
    /// Returns the wrapped value.
    #[inline]
    pub fn into_inner(self) -> A {
        self.0
    }
}

/// Witness for [`Identity`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct IdentityKind;

impl TypeConstructor for IdentityKind {
    type Of<A: Portable> = Identity<A>;
}

impl Functor for IdentityKind {
    #[inline]
    fn map<A, B, F>(fa: Identity<A>, function: F) -> Identity<B>
    where
        A: Portable,
        B: Portable,
        F: Fn(A) -> B + Portable,
    {
        Identity(function(fa.0))
    }
}

impl Applicative for IdentityKind {
    #[inline]
    fn of<A>(value: A) -> Identity<A>
    where
        A: Portable + Clone,
    {
        Identity(value)
    }

    #[inline]
    fn apply<A, B, F>(function: Identity<F>, fa: Identity<A>) -> Identity<B>
    where
        A: Portable,
        B: Portable,
        F: Fn(A) -> B + Portable,
    {
        Identity((function.0)(fa.0))
    }
}

impl Monad for IdentityKind {
    #[inline]
    fn chain<A, B, F>(fa: Identity<A>, function: F) -> Identity<B>
    where
        A: Portable,
        B: Portable,
        F: Fn(A) -> Identity<B> + Portable,
    {
        function(fa.0)
    }
}
