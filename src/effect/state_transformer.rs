//! `StateT` - state threading on top of any monad.
//!
//! `StateT<S, M, A>` wraps a function `S -> M::Of<(A, S)>`. The inner monad
//! `M` sequences effects; the state is threaded through each step the same way
//! plain [`State`](super::State) threads it. With `M = ResultKind<E>` a step
//! can abort, with `M = TaskKind<E>` a step can suspend.
//!
//! # Examples
//!
//! ```rust
//! use contextual::effect::{ResultKind, StateT};
//!
//! type Counter<A> = StateT<u32, ResultKind<String>, A>;
//!
//! fn decrement() -> Counter<()> {
//!     StateT::new(|n: u32| match n.checked_sub(1) {
//!         Some(next) => Ok(((), next)),
//!         None => Err("underflow".to_string()),
//!     })
//! }
//!
//! let twice = decrement().chain(|()| decrement());
//! assert_eq!(twice.run(5), Ok(((), 3)));
//! assert_eq!(twice.run(1), Err("underflow".to_string()));
//! ```

use std::marker::PhantomData;
use std::sync::Arc;

use crate::typeclass::{Applicative, Functor, Monad, Portable, TypeConstructor};

/// A stateful computation whose steps run inside the monad `M`.
pub struct StateT<S, M, A>
where
    S: Portable,
    M: Monad,
    A: Portable,
{
    run_function: Arc<dyn Fn(S) -> M::Of<(A, S)> + Send + Sync>,
}

impl<S, M, A> StateT<S, M, A>
where
    S: Portable,
    M: Monad,
    A: Portable,
{
    /// Creates a `StateT` from a transition function.
    pub fn new<F>(function: F) -> Self
    where
        F: Fn(S) -> M::Of<(A, S)> + Send + Sync + 'static,
    {
        Self {
            run_function: Arc::new(function),
        }
    }

    /// Supplies the initial state, returning `(value, final state)` inside `M`.
    pub fn run(&self, initial: S) -> M::Of<(A, S)> {
        (self.run_function)(initial)
    }

    /// Runs and keeps only the value.
    pub fn eval(&self, initial: S) -> M::Of<A> {
        M::map::<(A, S), A, _>(self.run(initial), |(value, _)| value)
    }

    /// Runs and keeps only the final state.
    pub fn exec(&self, initial: S) -> M::Of<S> {
        M::map::<(A, S), S, _>(self.run(initial), |(_, state)| state)
    }

    /// Lifts a value, leaving the state untouched.
    pub fn of(value: A) -> Self
    where
        A: Clone,
        S: Clone,
    {
        Self::new(move |state| M::of::<(A, S)>((value.clone(), state)))
    }

    /// Lifts an inner computation; the state passes through unchanged.
    pub fn lift(inner: M::Of<A>) -> Self
    where
        S: Clone,
        M::Of<A>: Clone,
    {
        Self::new(move |state: S| {
            M::map::<A, (A, S), _>(inner.clone(), move |value| (value, state.clone()))
        })
    }

    /// Projects a value out of the current state.
    pub fn gets<F>(projection: F) -> Self
    where
        A: Clone,
        S: Clone,
        F: Fn(&S) -> A + Send + Sync + 'static,
    {
        Self::new(move |state| M::of::<(A, S)>((projection(&state), state)))
    }

    /// Transforms the value.
    pub fn map<B, F>(self, function: F) -> StateT<S, M, B>
    where
        B: Portable,
        F: Fn(A) -> B + Portable,
    {
        let original = self.run_function;
        let function = Arc::new(function);
        StateT::new(move |state| {
            let function = Arc::clone(&function);
            M::map::<(A, S), (B, S), _>(original(state), move |(value, next)| {
                (function(value), next)
            })
        })
    }

    /// Sequences a dependent step inside `M`, feeding it the updated state.
    pub fn chain<B, F>(self, function: F) -> StateT<S, M, B>
    where
        B: Portable,
        F: Fn(A) -> StateT<S, M, B> + Portable,
    {
        let original = self.run_function;
        let function = Arc::new(function);
        StateT::new(move |state| {
            let function = Arc::clone(&function);
            M::chain::<(A, S), (B, S), _>(original(state), move |(value, next)| {
                function(value).run(next)
            })
        })
    }

    /// Alias for [`chain`](Self::chain).
    pub fn and_then<B, F>(self, function: F) -> StateT<S, M, B>
    where
        B: Portable,
        F: Fn(A) -> StateT<S, M, B> + Portable,
    {
        self.chain(function)
    }

    /// Runs this step for its effects and state change, then `next`.
    pub fn then<B>(self, next: StateT<S, M, B>) -> StateT<S, M, B>
    where
        B: Portable,
    {
        self.chain(move |_| next.clone())
    }
}

impl<S, M> StateT<S, M, S>
where
    S: Portable + Clone,
    M: Monad,
{
    /// Yields the current state as the value.
    pub fn get() -> Self {
        Self::new(|state: S| M::of::<(S, S)>((state.clone(), state)))
    }
}

impl<S, M> StateT<S, M, ()>
where
    S: Portable + Clone,
    M: Monad,
{
    /// Replaces the state.
    pub fn put(state: S) -> Self {
        Self::new(move |_| M::of::<((), S)>(((), state.clone())))
    }

    /// Updates the state with a function.
    pub fn modify<F>(modifier: F) -> Self
    where
        F: Fn(S) -> S + Send + Sync + 'static,
    {
        Self::new(move |state| M::of::<((), S)>(((), modifier(state))))
    }
}

impl<S, M, A> Clone for StateT<S, M, A>
where
    S: Portable,
    M: Monad,
    A: Portable,
{
    fn clone(&self) -> Self {
        Self {
            run_function: Arc::clone(&self.run_function),
        }
    }
}

impl<S, M, A> std::fmt::Debug for StateT<S, M, A>
where
    S: Portable,
    M: Monad,
    A: Portable,
{
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.write_str("StateT(<function>)")
    }
}

/// Witness for `StateT<S, M, _>`.
pub struct StateTKind<S, M>(PhantomData<fn() -> (S, M)>);

impl<S, M> std::fmt::Debug for StateTKind<S, M> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.write_str("StateTKind")
    }
}

impl<S: Portable + Clone, M: Monad> TypeConstructor for StateTKind<S, M> {
    type Of<A: Portable> = StateT<S, M, A>;
}

impl<S: Portable + Clone, M: Monad> Functor for StateTKind<S, M> {
    #[inline]
    fn map<A, B, F>(fa: StateT<S, M, A>, function: F) -> StateT<S, M, B>
    where
        A: Portable,
        B: Portable,
        F: Fn(A) -> B + Portable,
    {
        fa.map(function)
    }
}

impl<S: Portable + Clone, M: Monad> Applicative for StateTKind<S, M> {
    #[inline]
    fn of<A>(value: A) -> StateT<S, M, A>
    where
        A: Portable + Clone,
    {
        StateT::of(value)
    }

    /// Runs the function step, then the value step.
    fn apply<A, B, F>(function: StateT<S, M, F>, fa: StateT<S, M, A>) -> StateT<S, M, B>
    where
        A: Portable,
        B: Portable,
        F: Fn(A) -> B + Portable,
    {
        StateT::new(move |state| {
            let fa = fa.clone();
            M::chain::<(F, S), (B, S), _>(function.run(state), move |(function, next): (F, S)| {
                M::map::<(A, S), (B, S), _>(fa.run(next), move |(value, last)| {
                    (function(value), last)
                })
            })
        })
    }
}

impl<S: Portable + Clone, M: Monad> Monad for StateTKind<S, M> {
    #[inline]
    fn chain<A, B, F>(fa: StateT<S, M, A>, function: F) -> StateT<S, M, B>
    where
        A: Portable,
        B: Portable,
        F: Fn(A) -> StateT<S, M, B> + Portable,
    {
        fa.chain(function)
    }
}
