//! Numeric wrappers that pick a combine operation for a number.
//!
//! A Writer that counts or scales something needs its side channel to be a
//! [`Monoid`](super::Monoid), but a plain integer has two equally good
//! monoids. The wrappers below choose one:
//!
//! - [`Sum`]: addition, identity `0`
//! - [`Product`]: multiplication, identity `1`

/// The additive monoid.
///
/// # Examples
///
/// ```rust
/// use contextual::typeclass::{Monoid, Semigroup, Sum};
///
/// assert_eq!(Sum(3).combine(Sum(5)), Sum(8));
/// assert_eq!(Sum::<i32>::empty(), Sum(0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Sum<A>(pub A);

impl<A> Sum<A> {
    /// Returns the wrapped number.
    #[inline]
    pub fn into_inner(self) -> A {
        self.0
    }
}

impl<A> From<A> for Sum<A> {
    fn from(value: A) -> Self {
        Self(value)
    }
}

/// The multiplicative monoid.
///
/// # Examples
///
/// ```rust
/// use contextual::typeclass::{Monoid, Product, Semigroup};
///
/// assert_eq!(Product(3).combine(Product(5)), Product(15));
/// assert_eq!(Product::<i32>::empty(), Product(1));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Product<A>(pub A);

impl<A> Product<A> {
    /// Returns the wrapped number.
    #[inline]
    pub fn into_inner(self) -> A {
        self.0
    }
}

impl<A> From<A> for Product<A> {
    fn from(value: A) -> Self {
        Self(value)
    }
}
