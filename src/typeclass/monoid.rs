//! Monoid type class - semigroups with an identity element.
//!
//! A Writer starts every pure value with the identity element as its log, and
//! chaining two Writers combines their logs. For that to be lawful the
//! identity must be neutral on both sides and `combine` associative.
//!
//! # Laws
//!
//! ```text
//! T::empty().combine(a) == a
//! a.combine(T::empty()) == a
//! (a.combine(b)).combine(c) == a.combine(b.combine(c))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use contextual::typeclass::{Monoid, Semigroup};
//!
//! assert_eq!(String::empty().combine(String::from("hello")), "hello");
//! let entries: Vec<&str> = Vec::combine_all(vec![vec!["a"], vec![], vec!["b"]]);
//! assert_eq!(entries, vec!["a", "b"]);
//! ```

use std::ops::{Add, Mul};

use super::semigroup::Semigroup;
use super::wrappers::{Product, Sum};

/// A semigroup with an identity element.
pub trait Monoid: Semigroup {
    /// The identity element for `combine`.
    fn empty() -> Self;

    /// Folds a sequence with `combine`, starting from `empty()`.
    fn combine_all<I>(iterator: I) -> Self
    where
        I: IntoIterator<Item = Self>,
        Self: Sized,
    {
        iterator
            .into_iter()
            .fold(Self::empty(), |accumulator, element| {
                accumulator.combine(element)
            })
    }

    /// Returns `true` when the value equals the identity element.
    fn is_empty_value(&self) -> bool
    where
        Self: PartialEq + Sized,
    {
        *self == Self::empty()
    }
}

impl Monoid for String {
    fn empty() -> Self {
        Self::new()
    }
}

impl<T> Monoid for Vec<T> {
    fn empty() -> Self {
        Self::new()
    }
}

impl<T: Semigroup> Monoid for Option<T> {
    fn empty() -> Self {
        None
    }
}

impl Monoid for () {
    fn empty() -> Self {}
}

/// Numeric types with an additive zero.
///
/// Implemented for the primitive integers and floats so that [`Sum`] has an
/// identity without pulling in a numeric-traits crate.
pub trait Zero {
    /// The additive identity.
    fn zero() -> Self;
}

/// Numeric types with a multiplicative one.
pub trait One {
    /// The multiplicative identity.
    fn one() -> Self;
}

macro_rules! impl_numeric_identities {
    ($($numeric:ty => $zero:expr, $one:expr);* $(;)?) => {
        $(
            impl Zero for $numeric {
                fn zero() -> Self {
                    $zero
                }
            }

            impl One for $numeric {
                fn one() -> Self {
                    $one
                }
            }
        )*
    };
}

impl_numeric_identities! {
    i8 => 0, 1;
    i16 => 0, 1;
    i32 => 0, 1;
    i64 => 0, 1;
    i128 => 0, 1;
    isize => 0, 1;
    u8 => 0, 1;
    u16 => 0, 1;
    u32 => 0, 1;
    u64 => 0, 1;
    u128 => 0, 1;
    usize => 0, 1;
    f32 => 0.0, 1.0;
    f64 => 0.0, 1.0;
}

impl<A: Add<Output = A> + Zero> Monoid for Sum<A> {
    fn empty() -> Self {
        Self(A::zero())
    }
}

impl<A: Mul<Output = A> + One> Monoid for Product<A> {
    fn empty() -> Self {
        Self(A::one())
    }
}

impl<A: Monoid, B: Monoid> Monoid for (A, B) {
    fn empty() -> Self {
        (A::empty(), B::empty())
    }
}

impl<A: Monoid, B: Monoid, C: Monoid> Monoid for (A, B, C) {
    fn empty() -> Self {
        (A::empty(), B::empty(), C::empty())
    }
}
