//! `ReaderT` - environment access on top of any monad.
//!
//! `ReaderT<R, M, A>` wraps a function `R -> M::Of<A>`. Every step sees the
//! same environment, and the inner monad `M` sequences the effects the steps
//! produce. A configuration-driven asynchronous service is
//! `ReaderT<Config, TaskKind<E>, A>`.
//!
//! # Examples
//!
//! ```rust
//! use contextual::effect::{OptionKind, ReaderT};
//!
//! #[derive(Clone)]
//! struct Limits {
//!     max: u32,
//! }
//!
//! fn checked(value: u32) -> ReaderT<Limits, OptionKind, u32> {
//!     ReaderT::new(move |limits: Limits| (value <= limits.max).then_some(value))
//! }
//!
//! let program = checked(5).chain(|v| checked(v * 3));
//! assert_eq!(program.run(Limits { max: 20 }), Some(15));
//! assert_eq!(program.run(Limits { max: 10 }), None);
//! ```

use std::marker::PhantomData;
use std::sync::Arc;

use crate::typeclass::{Applicative, Functor, Monad, Portable, TypeConstructor};

/// A computation that reads an `R` and produces its result inside `M`.
pub struct ReaderT<R, M, A>
where
    R: Portable,
    M: Monad,
    A: Portable,
{
    run_function: Arc<dyn Fn(R) -> M::Of<A> + Send + Sync>,
}

impl<R, M, A> ReaderT<R, M, A>
where
    R: Portable,
    M: Monad,
    A: Portable,
{
    /// Creates a `ReaderT` from a function of the environment.
    pub fn new<F>(function: F) -> Self
    where
        F: Fn(R) -> M::Of<A> + Send + Sync + 'static,
    {
        Self {
            run_function: Arc::new(function),
        }
    }

    /// Supplies the environment and returns the inner computation.
    pub fn run(&self, environment: R) -> M::Of<A> {
        (self.run_function)(environment)
    }

    /// Lifts a value, ignoring the environment.
    pub fn of(value: A) -> Self
    where
        A: Clone,
    {
        Self::new(move |_| M::of::<A>(value.clone()))
    }

    /// Lifts an inner computation that does not read the environment.
    pub fn lift(inner: M::Of<A>) -> Self
    where
        M::Of<A>: Clone,
    {
        Self::new(move |_| inner.clone())
    }

    /// Projects a value out of the environment.
    pub fn asks<F>(projection: F) -> Self
    where
        R: Clone,
        F: Fn(R) -> A + Portable,
    {
        let projection = Arc::new(projection);
        Self::new(move |environment| {
            let projection = Arc::clone(&projection);
            M::map::<R, A, _>(M::of(environment), move |environment| projection(environment))
        })
    }

    /// Runs `computation` against a modified environment.
    pub fn local<F>(modifier: F, computation: Self) -> Self
    where
        F: Fn(R) -> R + Send + Sync + 'static,
    {
        let original = computation.run_function;
        Self::new(move |environment| original(modifier(environment)))
    }

    /// Transforms the result inside `M`.
    pub fn map<B, F>(self, function: F) -> ReaderT<R, M, B>
    where
        B: Portable,
        F: Fn(A) -> B + Portable,
    {
        let original = self.run_function;
        let function = Arc::new(function);
        ReaderT::new(move |environment| {
            let function = Arc::clone(&function);
            M::map::<A, B, _>(original(environment), move |value| function(value))
        })
    }

    /// Sequences a dependent step; both steps read the same environment.
    pub fn chain<B, F>(self, function: F) -> ReaderT<R, M, B>
    where
        R: Clone,
        B: Portable,
        F: Fn(A) -> ReaderT<R, M, B> + Portable,
    {
        let original = self.run_function;
        let function = Arc::new(function);
        ReaderT::new(move |environment: R| {
            let function = Arc::clone(&function);
            let shared = environment.clone();
            M::chain::<A, B, _>(original(environment), move |value| {
                function(value).run(shared.clone())
            })
        })
    }

    /// Alias for [`chain`](Self::chain).
    pub fn and_then<B, F>(self, function: F) -> ReaderT<R, M, B>
    where
        R: Clone,
        B: Portable,
        F: Fn(A) -> ReaderT<R, M, B> + Portable,
    {
        self.chain(function)
    }
}

impl<R, M> ReaderT<R, M, R>
where
    R: Portable + Clone,
    M: Monad,
{
    /// Yields the environment itself.
    pub fn ask() -> Self {
        Self::new(|environment| M::of::<R>(environment))
    }
}

impl<R, M, A> Clone for ReaderT<R, M, A>
where
    R: Portable,
    M: Monad,
    A: Portable,
{
    fn clone(&self) -> Self {
        Self {
            run_function: Arc::clone(&self.run_function),
        }
    }
}

impl<R, M, A> std::fmt::Debug for ReaderT<R, M, A>
where
    R: Portable,
    M: Monad,
    A: Portable,
{
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.write_str("ReaderT(<function>)")
    }
}

/// Witness for `ReaderT<R, M, _>`.
pub struct ReaderTKind<R, M>(PhantomData<fn() -> (R, M)>);

impl<R, M> std::fmt::Debug for ReaderTKind<R, M> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.write_str("ReaderTKind")
    }
}

impl<R: Portable + Clone, M: Monad> TypeConstructor for ReaderTKind<R, M> {
    type Of<A: Portable> = ReaderT<R, M, A>;
}

impl<R: Portable + Clone, M: Monad> Functor for ReaderTKind<R, M> {
    #[inline]
    fn map<A, B, F>(fa: ReaderT<R, M, A>, function: F) -> ReaderT<R, M, B>
    where
        A: Portable,
        B: Portable,
        F: Fn(A) -> B + Portable,
    {
        fa.map(function)
    }
}

impl<R: Portable + Clone, M: Monad> Applicative for ReaderTKind<R, M> {
    #[inline]
    fn of<A>(value: A) -> ReaderT<R, M, A>
    where
        A: Portable + Clone,
    {
        ReaderT::of(value)
    }

    fn apply<A, B, F>(function: ReaderT<R, M, F>, fa: ReaderT<R, M, A>) -> ReaderT<R, M, B>
    where
        A: Portable,
        B: Portable,
        F: Fn(A) -> B + Portable,
    {
        ReaderT::new(move |environment: R| {
            M::apply::<A, B, F>(function.run(environment.clone()), fa.run(environment))
        })
    }
}

impl<R: Portable + Clone, M: Monad> Monad for ReaderTKind<R, M> {
    #[inline]
    fn chain<A, B, F>(fa: ReaderT<R, M, A>, function: F) -> ReaderT<R, M, B>
    where
        A: Portable,
        B: Portable,
        F: Fn(A) -> ReaderT<R, M, B> + Portable,
    {
        fa.chain(function)
    }
}
