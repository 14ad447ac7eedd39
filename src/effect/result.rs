//! Result - success or failure with detail.
//!
//! The data type is the standard library's `Result<T, E>`; this module adds
//! its witness [`ResultKind`], the [`ResultExt`] extension trait and the
//! construction adapter [`from_throwable`].
//!
//! `chain` on an `Err` preserves the original error unchanged; errors are
//! never merged. [`ResultExt::fold`] is the one sanctioned way to leave the
//! context with a plain value.
//!
//! # Examples
//!
//! ```rust
//! use contextual::effect::result::ResultExt;
//!
//! let safe_divide = |x: i32| if x == 0 { Err("div0") } else { Ok(100 / x) };
//!
//! assert_eq!(Ok::<_, &str>(10).chain(safe_divide), Ok(10));
//! assert_eq!(Ok::<_, &str>(0).chain(safe_divide), Err("div0"));
//! assert_eq!(Ok::<_, &str>(0).chain(safe_divide).fold(|e| e.len() as i32, |v| v), 4);
//! ```

use std::marker::PhantomData;
use std::panic::{self, UnwindSafe};

use crate::typeclass::{Applicative, Functor, Monad, Portable, TypeConstructor};

use super::error::Panicked;
use super::transformer_stack::ShortCircuit;

/// Runs `function`, converting a panic into `Err(Panicked)`.
///
/// This is the synchronous conversion boundary for programmer errors; `map`
/// and `chain` themselves never catch panics.
///
/// # Examples
///
/// ```rust
/// use contextual::effect::result::from_throwable;
///
/// assert_eq!(from_throwable(|| 2 + 2), Ok(4));
///
/// let failed = from_throwable(|| -> i32 { panic!("parse error") });
/// assert_eq!(failed.unwrap_err().message, "parse error");
/// ```
pub fn from_throwable<T, F>(function: F) -> Result<T, Panicked>
where
    F: FnOnce() -> T + UnwindSafe,
{
    panic::catch_unwind(function).map_err(|payload| Panicked::from_payload(payload.as_ref()))
}

/// Operations on `Result` named after the context vocabulary.
pub trait ResultExt<T, E> {
    /// Eliminates the result into a plain value.
    fn fold<U, OnErr, OnOk>(self, on_err: OnErr, on_ok: OnOk) -> U
    where
        OnErr: FnOnce(E) -> U,
        OnOk: FnOnce(T) -> U;

    /// Sequences a dependent computation; an `Err` short-circuits and keeps
    /// its error unchanged.
    fn chain<U, F>(self, function: F) -> Result<U, E>
    where
        F: FnOnce(T) -> Result<U, E>;

    /// Transforms only the error channel.
    fn map_error<E2, F>(self, function: F) -> Result<T, E2>
    where
        F: FnOnce(E) -> E2;

    /// Returns the success value, or `default` on failure.
    fn get_or_else(self, default: T) -> T;
}

impl<T, E> ResultExt<T, E> for Result<T, E> {
    #[inline]
    fn fold<U, OnErr, OnOk>(self, on_err: OnErr, on_ok: OnOk) -> U
    where
        OnErr: FnOnce(E) -> U,
        OnOk: FnOnce(T) -> U,
    {
        match self {
            Ok(value) => on_ok(value),
            Err(error) => on_err(error),
        }
    }

    #[inline]
    fn chain<U, F>(self, function: F) -> Result<U, E>
    where
        F: FnOnce(T) -> Result<U, E>,
    {
        self.and_then(function)
    }

    #[inline]
    fn map_error<E2, F>(self, function: F) -> Result<T, E2>
    where
        F: FnOnce(E) -> E2,
    {
        self.map_err(function)
    }

    #[inline]
    fn get_or_else(self, default: T) -> T {
        self.unwrap_or(default)
    }
}

/// Witness for `Result<_, E>`.
pub struct ResultKind<E>(PhantomData<fn() -> E>);

impl<E> std::fmt::Debug for ResultKind<E> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.write_str("ResultKind")
    }
}

impl<E: Portable> TypeConstructor for ResultKind<E> {
    type Of<A: Portable> = Result<A, E>;
}

impl<E: Portable> Functor for ResultKind<E> {
    #[inline]
    fn map<A, B, F>(fa: Result<A, E>, function: F) -> Result<B, E>
    where
        A: Portable,
        B: Portable,
        F: Fn(A) -> B + Portable,
    {
        fa.map(function)
    }
}

impl<E: Portable> Applicative for ResultKind<E> {
    #[inline]
    fn of<A>(value: A) -> Result<A, E>
    where
        A: Portable + Clone,
    {
        Ok(value)
    }

    /// The function operand's error wins when both operands failed.
    #[inline]
    fn apply<A, B, F>(function: Result<F, E>, fa: Result<A, E>) -> Result<B, E>
    where
        A: Portable,
        B: Portable,
        F: Fn(A) -> B + Portable,
    {
        match (function, fa) {
            (Ok(function), Ok(value)) => Ok(function(value)),
            (Err(error), _) | (Ok(_), Err(error)) => Err(error),
        }
    }
}

impl<E: Portable> Monad for ResultKind<E> {
    #[inline]
    fn chain<A, B, F>(fa: Result<A, E>, function: F) -> Result<B, E>
    where
        A: Portable,
        B: Portable,
        F: Fn(A) -> Result<B, E> + Portable,
    {
        fa.and_then(function)
    }
}

impl<E: Portable + Clone> ShortCircuit for ResultKind<E> {
    type Failure = E;

    #[inline]
    fn succeed<A: Portable>(value: A) -> Result<A, E> {
        Ok(value)
    }

    #[inline]
    fn fail<A: Portable>(failure: E) -> Result<A, E> {
        Err(failure)
    }

    #[inline]
    fn branch<A: Portable>(value: Result<A, E>) -> Result<A, E> {
        value
    }
}
