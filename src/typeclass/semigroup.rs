//! Semigroup type class - values with an associative combine operation.
//!
//! Semigroups are what a Writer's side channel and a Validation's failure
//! list are built from: two logs concatenate into one log, two failure lists
//! concatenate into one failure list. The operation must be associative, so
//! the grouping of a long chain of combines never changes the result.
//!
//! # Laws
//!
//! For all `a`, `b`, `c`:
//!
//! ```text
//! (a.combine(b)).combine(c) == a.combine(b.combine(c))
//! ```
//!
//! Order is significant: `a.combine(b)` places `a`'s contribution before `b`'s.
//!
//! # Examples
//!
//! ```rust
//! use contextual::typeclass::Semigroup;
//!
//! let log = vec!["opened"].combine(vec!["closed"]);
//! assert_eq!(log, vec!["opened", "closed"]);
//! ```

use std::ops::{Add, Mul};

use super::wrappers::{Product, Sum};

/// A type class for types with an associative binary operation.
///
/// # Examples
///
/// ```rust
/// use contextual::typeclass::Semigroup;
///
/// let a = String::from("foo");
/// let b = String::from("bar");
/// assert_eq!(a.combine(b), "foobar");
/// ```
pub trait Semigroup {
    /// Combines two values into one, `self` first.
    #[must_use]
    fn combine(self, other: Self) -> Self;

    /// Combines two borrowed values, leaving both untouched.
    ///
    /// The default implementation clones both operands.
    #[must_use]
    fn combine_ref(&self, other: &Self) -> Self
    where
        Self: Clone,
    {
        self.clone().combine(other.clone())
    }

    /// Reduces a sequence with `combine`, or `None` when it is empty.
    ///
    /// ```rust
    /// use contextual::typeclass::Semigroup;
    ///
    /// let words = vec![String::from("a"), String::from("b")];
    /// assert_eq!(String::reduce_all(words), Some(String::from("ab")));
    /// assert_eq!(String::reduce_all(Vec::new()), None);
    /// ```
    fn reduce_all<I>(iterator: I) -> Option<Self>
    where
        I: IntoIterator<Item = Self>,
        Self: Sized,
    {
        iterator
            .into_iter()
            .reduce(|accumulator, element| accumulator.combine(element))
    }
}

impl Semigroup for String {
    fn combine(mut self, other: Self) -> Self {
        self.push_str(&other);
        self
    }

    fn combine_ref(&self, other: &Self) -> Self {
        let mut result = Self::with_capacity(self.len() + other.len());
        result.push_str(self);
        result.push_str(other);
        result
    }
}

impl<T> Semigroup for Vec<T> {
    fn combine(mut self, mut other: Self) -> Self {
        self.append(&mut other);
        self
    }
}

/// `Some` values combine their contents; `None` is skipped.
impl<T: Semigroup> Semigroup for Option<T> {
    fn combine(self, other: Self) -> Self {
        match (self, other) {
            (Some(left), Some(right)) => Some(left.combine(right)),
            (Some(value), None) | (None, Some(value)) => Some(value),
            (None, None) => None,
        }
    }
}

impl Semigroup for () {
    fn combine(self, _other: Self) -> Self {}
}

impl<A: Add<Output = A>> Semigroup for Sum<A> {
    fn combine(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl<A: Mul<Output = A>> Semigroup for Product<A> {
    fn combine(self, other: Self) -> Self {
        Self(self.0 * other.0)
    }
}

/// Pairs combine component-wise, e.g. a log together with a counter.
impl<A: Semigroup, B: Semigroup> Semigroup for (A, B) {
    fn combine(self, other: Self) -> Self {
        (self.0.combine(other.0), self.1.combine(other.1))
    }
}

impl<A: Semigroup, B: Semigroup, C: Semigroup> Semigroup for (A, B, C) {
    fn combine(self, other: Self) -> Self {
        (
            self.0.combine(other.0),
            self.1.combine(other.1),
            self.2.combine(other.2),
        )
    }
}
