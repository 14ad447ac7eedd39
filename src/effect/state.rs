//! State - computation that threads a state value through each step.
//!
//! A `State<S, A>` wraps a function `S -> (A, S)`. The output state of one
//! step becomes the input state of the next; there is no hidden shared state
//! anywhere else. Nothing runs until [`State::run`] supplies the initial
//! state, and running the same State with the same initial state always
//! yields the same pair.
//!
//! # Laws
//!
//! ## Monad Laws
//!
//! - Left Identity: `State::of(a).chain(f) == f(a)`
//! - Right Identity: `m.chain(State::of) == m`
//! - Associativity: `m.chain(f).chain(g) == m.chain(|x| f(x).chain(g))`
//!
//! ## State Laws
//!
//! - Get Put: `get().chain(put) == of(())`
//! - Put Get: `put(s).then(get()) == put(s).then(of(s))`
//! - Put Put: `put(s1).then(put(s2)) == put(s2)`
//!
//! # Examples
//!
//! A stack machine:
//!
//! ```rust
//! use contextual::effect::State;
//!
//! fn push(value: i32) -> State<Vec<i32>, ()> {
//!     State::modify(move |mut stack: Vec<i32>| {
//!         stack.push(value);
//!         stack
//!     })
//! }
//!
//! fn pop() -> State<Vec<i32>, Option<i32>> {
//!     State::new(|mut stack: Vec<i32>| {
//!         let top = stack.pop();
//!         (top, stack)
//!     })
//! }
//!
//! let program = push(1).then(push(2)).then(pop());
//! let (top, stack) = program.run(vec![]);
//! assert_eq!(top, Some(2));
//! assert_eq!(stack, vec![1]);
//! ```

use std::marker::PhantomData;
use std::sync::Arc;

use crate::typeclass::{Applicative, Functor, Monad, Portable, TypeConstructor};

/// A computation from an input state `S` to a value `A` and an output state.
pub struct State<S, A> {
    run_function: Arc<dyn Fn(S) -> (A, S) + Send + Sync>,
}

impl<S, A> State<S, A>
where
    S: 'static,
    A: 'static,
{
    /// Creates a State from a transition function.
    ///
    /// ```rust
    /// use contextual::effect::State;
    ///
    /// let counter: State<i32, i32> = State::new(|count| (count, count + 1));
    /// assert_eq!(counter.run(5), (5, 6));
    /// ```
    pub fn new<F>(function: F) -> Self
    where
        F: Fn(S) -> (A, S) + Send + Sync + 'static,
    {
        Self {
            run_function: Arc::new(function),
        }
    }

    /// Supplies the initial state and returns `(value, final state)`.
    pub fn run(&self, initial: S) -> (A, S) {
        (self.run_function)(initial)
    }

    /// Runs and keeps only the value.
    pub fn eval(&self, initial: S) -> A {
        self.run(initial).0
    }

    /// Runs and keeps only the final state.
    pub fn exec(&self, initial: S) -> S {
        self.run(initial).1
    }

    /// Lifts a value, leaving the state untouched.
    pub fn of(value: A) -> Self
    where
        A: Clone + Send + Sync,
    {
        Self::new(move |state| (value.clone(), state))
    }

    /// Projects a value out of the current state without changing it.
    pub fn gets<F>(projection: F) -> Self
    where
        F: Fn(&S) -> A + Send + Sync + 'static,
    {
        Self::new(move |state| (projection(&state), state))
    }

    /// Transforms the value.
    pub fn map<B, F>(self, function: F) -> State<S, B>
    where
        F: Fn(A) -> B + Send + Sync + 'static,
        B: 'static,
    {
        let original = self.run_function;
        State::new(move |state| {
            let (value, next) = original(state);
            (function(value), next)
        })
    }

    /// Sequences a dependent step, feeding it the updated state.
    ///
    /// ```rust
    /// use contextual::effect::State;
    ///
    /// let program: State<i32, i32> = State::get().chain(|current| {
    ///     State::put(current * 10).then(State::of(current))
    /// });
    /// assert_eq!(program.run(4), (4, 40));
    /// ```
    pub fn chain<B, F>(self, function: F) -> State<S, B>
    where
        F: Fn(A) -> State<S, B> + Send + Sync + 'static,
        B: 'static,
    {
        let original = self.run_function;
        State::new(move |state| {
            let (value, next) = original(state);
            function(value).run(next)
        })
    }

    /// Alias for [`chain`](Self::chain).
    pub fn and_then<B, F>(self, function: F) -> State<S, B>
    where
        F: Fn(A) -> State<S, B> + Send + Sync + 'static,
        B: 'static,
    {
        self.chain(function)
    }

    /// Runs this step for its state change, then `next`.
    pub fn then<B>(self, next: State<S, B>) -> State<S, B>
    where
        B: 'static,
    {
        let original = self.run_function;
        State::new(move |state| {
            let (_, intermediate) = original(state);
            next.run(intermediate)
        })
    }

    /// Applies the function produced by this step to the value of `other`,
    /// running this step first.
    pub fn apply<B, C>(self, other: State<S, B>) -> State<S, C>
    where
        A: Fn(B) -> C,
        B: 'static,
        C: 'static,
    {
        let original = self.run_function;
        State::new(move |state| {
            let (function, intermediate) = original(state);
            let (value, last) = other.run(intermediate);
            (function(value), last)
        })
    }

    /// Combines two steps left to right.
    pub fn map2<B, C, F>(self, other: State<S, B>, function: F) -> State<S, C>
    where
        F: Fn(A, B) -> C + Send + Sync + 'static,
        B: 'static,
        C: 'static,
    {
        let original = self.run_function;
        State::new(move |state| {
            let (left, intermediate) = original(state);
            let (right, last) = other.run(intermediate);
            (function(left, right), last)
        })
    }
}

impl<S: Clone + 'static> State<S, S> {
    /// Yields the current state as the value.
    pub fn get() -> Self {
        Self::new(|state: S| (state.clone(), state))
    }
}

impl<S: 'static> State<S, ()> {
    /// Replaces the state.
    pub fn put(state: S) -> Self
    where
        S: Clone + Send + Sync,
    {
        Self::new(move |_| ((), state.clone()))
    }

    /// Updates the state with a function.
    pub fn modify<F>(modifier: F) -> Self
    where
        F: Fn(S) -> S + Send + Sync + 'static,
    {
        Self::new(move |state| ((), modifier(state)))
    }
}

impl<S, A> Clone for State<S, A> {
    fn clone(&self) -> Self {
        Self {
            run_function: Arc::clone(&self.run_function),
        }
    }
}

impl<S, A> std::fmt::Debug for State<S, A> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.write_str("State(<function>)")
    }
}

/// Witness for `State<S, _>`.
pub struct StateKind<S>(PhantomData<fn() -> S>);

impl<S> std::fmt::Debug for StateKind<S> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.write_str("StateKind")
    }
}

impl<S: Portable> TypeConstructor for StateKind<S> {
    type Of<A: Portable> = State<S, A>;
}

impl<S: Portable> Functor for StateKind<S> {
    #[inline]
    fn map<A, B, F>(fa: State<S, A>, function: F) -> State<S, B>
    where
        A: Portable,
        B: Portable,
        F: Fn(A) -> B + Portable,
    {
        fa.map(function)
    }
}

impl<S: Portable> Applicative for StateKind<S> {
    #[inline]
    fn of<A>(value: A) -> State<S, A>
    where
        A: Portable + Clone,
    {
        State::of(value)
    }

    #[inline]
    fn apply<A, B, F>(function: State<S, F>, fa: State<S, A>) -> State<S, B>
    where
        A: Portable,
        B: Portable,
        F: Fn(A) -> B + Portable,
    {
        function.apply(fa)
    }
}

impl<S: Portable> Monad for StateKind<S> {
    #[inline]
    fn chain<A, B, F>(fa: State<S, A>, function: F) -> State<S, B>
    where
        A: Portable,
        B: Portable,
        F: Fn(A) -> State<S, B> + Portable,
    {
        fa.chain(function)
    }
}
