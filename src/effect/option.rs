//! Option - presence or absence of a value.
//!
//! The data type is the standard library's `Option<T>`; this module supplies
//! its witness [`OptionKind`] for the generic contracts, the
//! [`OptionExt`] extension trait for the operations the standard library
//! spells differently, and the construction adapters [`of`], [`none`] and
//! [`from_nullable`].
//!
//! | Operation     | Rust spelling                         |
//! |---------------|---------------------------------------|
//! | `of`          | [`of`] / `Some`                       |
//! | `none`        | [`none`] / `None`                     |
//! | `map`         | `Option::map`, [`OptionKind::map`]    |
//! | `chain`       | [`OptionExt::chain`], `and_then`      |
//! | `filter`      | `Option::filter`                      |
//! | `getOrElse`   | [`OptionExt::get_or_else`]            |
//! | `orElse`      | `Option::or_else`                     |
//!
//! # Examples
//!
//! ```rust
//! use contextual::effect::option::{self, OptionExt};
//!
//! let halve = |x: i32| if x % 2 == 0 { Some(x / 2) } else { None };
//!
//! assert_eq!(option::of(16).chain(halve).chain(halve), Some(4));
//! assert_eq!(option::of(6).chain(halve).chain(halve).get_or_else(-1), -1);
//! ```

use crate::typeclass::{Applicative, Functor, Monad, Portable, TypeConstructor};

use super::transformer_stack::ShortCircuit;

/// Lifts a value into `Some`.
#[inline]
pub const fn of<T>(value: T) -> Option<T> {
    Some(value)
}

/// The absent value.
#[inline]
pub const fn none<T>() -> Option<T> {
    None
}

/// Normalizes a possibly-absent value into an `Option`.
///
/// Accepts either a plain value (treated as present) or an `Option` (passed
/// through), which is the shape nullable inputs arrive in once they cross into
/// Rust. An `Option` argument fits both shapes, so the result type has to be
/// known at the call site.
///
/// # Examples
///
/// ```rust
/// use contextual::effect::option::from_nullable;
///
/// let plain: Option<i32> = from_nullable(5_i32);
/// let passed: Option<&str> = from_nullable(Some("a"));
/// let absent: Option<u8> = from_nullable(None);
///
/// assert_eq!(plain, Some(5));
/// assert_eq!(passed, Some("a"));
/// assert_eq!(absent, None);
/// ```
#[inline]
pub fn from_nullable<T>(value: impl Into<Option<T>>) -> Option<T> {
    value.into()
}

/// Operations on `Option` named after the context vocabulary.
pub trait OptionExt<T> {
    /// Returns the value, or `default` when absent. Never fails.
    fn get_or_else(self, default: T) -> T;

    /// Returns the value, or computes a fallback lazily when absent.
    fn get_or_else_with<F>(self, default: F) -> T
    where
        F: FnOnce() -> T;

    /// Sequences a dependent computation; `None` short-circuits without
    /// invoking `function`.
    fn chain<U, F>(self, function: F) -> Option<U>
    where
        F: FnOnce(T) -> Option<U>;
}

impl<T> OptionExt<T> for Option<T> {
    #[inline]
    fn get_or_else(self, default: T) -> T {
        self.unwrap_or(default)
    }

    #[inline]
    fn get_or_else_with<F>(self, default: F) -> T
    where
        F: FnOnce() -> T,
    {
        self.unwrap_or_else(default)
    }

    #[inline]
    fn chain<U, F>(self, function: F) -> Option<U>
    where
        F: FnOnce(T) -> Option<U>,
    {
        self.and_then(function)
    }
}

/// Witness for `Option`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OptionKind;

impl TypeConstructor for OptionKind {
    type Of<A: Portable> = Option<A>;
}

impl Functor for OptionKind {
    #[inline]
    fn map<A, B, F>(fa: Option<A>, function: F) -> Option<B>
    where
        A: Portable,
        B: Portable,
        F: Fn(A) -> B + Portable,
    {
        fa.map(function)
    }
}

impl Applicative for OptionKind {
    #[inline]
    fn of<A>(value: A) -> Option<A>
    where
        A: Portable + Clone,
    {
        Some(value)
    }

    #[inline]
    fn apply<A, B, F>(function: Option<F>, fa: Option<A>) -> Option<B>
    where
        A: Portable,
        B: Portable,
        F: Fn(A) -> B + Portable,
    {
        match (function, fa) {
            (Some(function), Some(value)) => Some(function(value)),
            _ => None,
        }
    }
}

impl Monad for OptionKind {
    #[inline]
    fn chain<A, B, F>(fa: Option<A>, function: F) -> Option<B>
    where
        A: Portable,
        B: Portable,
        F: Fn(A) -> Option<B> + Portable,
    {
        fa.and_then(function)
    }
}

impl ShortCircuit for OptionKind {
    type Failure = ();

    #[inline]
    fn succeed<A: Portable>(value: A) -> Option<A> {
        Some(value)
    }

    #[inline]
    fn fail<A: Portable>((): ()) -> Option<A> {
        None
    }

    #[inline]
    fn branch<A: Portable>(value: Option<A>) -> Result<A, ()> {
        value.ok_or(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[rstest]
    #[case(Some(4), 4)]
    #[case(None, 0)]
    fn get_or_else_is_total(#[case] input: Option<i32>, #[case] expected: i32) {
        assert_eq!(input.get_or_else(0), expected);
    }

    #[rstest]
    fn chain_on_none_does_not_invoke_function() {
        let calls = Arc::new(AtomicUsize::new(0));
        let observed = Arc::clone(&calls);
        let result = none::<i32>().chain(move |x| {
            observed.fetch_add(1, Ordering::SeqCst);
            Some(x)
        });
        assert_eq!(result, None);
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[rstest]
    #[case(Some(10), Some(10))]
    #[case(Some(3), None)]
    #[case(None, None)]
    fn filter_turns_rejected_values_absent(
        #[case] input: Option<i32>,
        #[case] expected: Option<i32>,
    ) {
        assert_eq!(input.filter(|x| *x > 5), expected);
    }

    #[rstest]
    fn or_else_supplies_alternative_only_when_absent() {
        assert_eq!(none::<i32>().or_else(|| Some(9)), Some(9));
        assert_eq!(of(1).or_else(|| Some(9)), Some(1));
    }

    #[rstest]
    fn witness_apply_needs_both_operands() {
        let add_one = |x: i32| x + 1;
        assert_eq!(OptionKind::apply(Some(add_one), Some(1)), Some(2));
        assert_eq!(OptionKind::apply(None::<fn(i32) -> i32>, Some(1)), None);
        assert_eq!(OptionKind::apply(Some(add_one), None), None);
    }

    #[rstest]
    fn branch_separates_value_from_absence() {
        assert_eq!(OptionKind::branch(Some(3)), Ok(3));
        assert_eq!(OptionKind::branch(None::<i32>), Err(()));
        assert_eq!(OptionKind::fail::<i32>(()), None);
    }
}
