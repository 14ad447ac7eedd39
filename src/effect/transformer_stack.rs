//! `TransformerStack` - an outer short-circuiting context inside any monad.
//!
//! `TransformerStack<O, I, A>` wraps a value of type `I::Of<O::Of<A>>`: the
//! inner monad `I` sequences effects, and the outer context `O` (Option or
//! Result) decides whether the next step runs at all. With `I = TaskKind<E>`
//! and `O = OptionKind` this is an asynchronous lookup that may come back
//! empty; with `I = StateKind<S>` and `O = ResultKind<E>` it is a stateful
//! computation that may abort.
//!
//! Only the `Inner<Outer<T>>` nesting is provided. Running the stack hands
//! back the inner monad, so running the inner layer is the final step.
//!
//! # Laws
//!
//! For every pair of lawful witnesses the composite satisfies the Monad laws.
//! In addition:
//!
//! - Lift Identity: `lift_inner(I::of(a)) == of(a)`
//! - Short Circuit: `fail(e).chain(f) == fail(e)`, and `f` is never invoked
//!
//! # Examples
//!
//! ```rust
//! use contextual::effect::OptionT;
//! use contextual::typeclass::IdentityKind;
//!
//! let found: OptionT<IdentityKind, i32> = OptionT::of(20);
//! let missing: OptionT<IdentityKind, i32> = OptionT::none();
//!
//! let double = |x: i32| OptionT::<IdentityKind, i32>::of(x * 2);
//!
//! assert_eq!(found.chain(double).run().into_inner(), Some(40));
//! assert_eq!(missing.chain(double).run().into_inner(), None);
//! ```

use std::marker::PhantomData;
use std::sync::Arc;

use crate::typeclass::{Applicative, Functor, Monad, Portable, TypeConstructor};

use super::option::OptionKind;
use super::result::ResultKind;

/// A monad whose values either carry a result or signal that processing stops.
///
/// This is the capability the outer layer of a [`TransformerStack`] needs:
/// build a success, build a failure, and tell the two apart.
pub trait ShortCircuit: Monad {
    /// What a stopped computation carries: `()` for Option, `E` for Result.
    type Failure: Portable + Clone;

    /// Wraps a value as a success.
    fn succeed<A: Portable>(value: A) -> Self::Of<A>;

    /// Builds a stopped computation.
    fn fail<A: Portable>(failure: Self::Failure) -> Self::Of<A>;

    /// Separates a success from a failure.
    fn branch<A: Portable>(value: Self::Of<A>) -> Result<A, Self::Failure>;
}

/// Inner monad `I` around outer short-circuiting context `O` around `A`.
pub struct TransformerStack<O, I, A>
where
    O: ShortCircuit,
    I: Monad,
    A: Portable,
{
    inner: I::Of<O::Of<A>>,
}

/// A stack whose outer layer is `Option`.
pub type OptionT<I, A> = TransformerStack<OptionKind, I, A>;

/// A stack whose outer layer is `Result<_, E>`.
pub type ResultT<E, I, A> = TransformerStack<ResultKind<E>, I, A>;

impl<O, I, A> TransformerStack<O, I, A>
where
    O: ShortCircuit,
    I: Monad,
    A: Portable,
{
    /// Wraps an existing nested value.
    pub const fn new(inner: I::Of<O::Of<A>>) -> Self {
        Self { inner }
    }

    /// Unwraps the stack, returning the inner monad.
    pub fn run(self) -> I::Of<O::Of<A>> {
        self.inner
    }

    /// Lifts a plain value into both layers.
    pub fn of(value: A) -> Self
    where
        A: Clone,
    {
        Self::new(I::map::<A, O::Of<A>, _>(I::of(value), O::succeed::<A>))
    }

    /// Builds a stack that has already stopped.
    pub fn fail(failure: O::Failure) -> Self {
        Self::new(I::map::<O::Failure, O::Of<A>, _>(I::of(failure), O::fail::<A>))
    }

    /// Lifts an inner computation; its result becomes a success.
    ///
    /// ```rust
    /// use contextual::effect::{ResultT, State, StateKind};
    ///
    /// let tick: State<u32, u32> = State::new(|n| (n, n + 1));
    /// let lifted: ResultT<String, StateKind<u32>, u32> = ResultT::lift_inner(tick);
    /// assert_eq!(lifted.run().run(7), (Ok(7), 8));
    /// ```
    pub fn lift_inner(inner: I::Of<A>) -> Self {
        Self::new(I::map::<A, O::Of<A>, _>(inner, O::succeed::<A>))
    }

    /// Lifts an outer value that does not depend on the inner monad.
    pub fn lift_outer(outer: O::Of<A>) -> Self
    where
        O::Of<A>: Clone,
    {
        Self::new(I::of::<O::Of<A>>(outer))
    }

    /// Transforms the value when one is present.
    pub fn map<B, F>(self, function: F) -> TransformerStack<O, I, B>
    where
        B: Portable,
        F: Fn(A) -> B + Portable,
    {
        let function = Arc::new(function);
        TransformerStack::new(I::map::<O::Of<A>, O::Of<B>, _>(self.inner, move |outer: O::Of<A>| {
            let function = Arc::clone(&function);
            O::map::<A, B, _>(outer, move |value| function(value))
        }))
    }

    /// Sequences a dependent stack.
    ///
    /// The inner monad's `chain` sequences the effects. When the outer layer
    /// has already stopped, the failure is re-wrapped inside the inner monad
    /// and `function` is not invoked.
    pub fn chain<B, F>(self, function: F) -> TransformerStack<O, I, B>
    where
        B: Portable,
        F: Fn(A) -> TransformerStack<O, I, B> + Portable,
    {
        TransformerStack::new(I::chain::<O::Of<A>, O::Of<B>, _>(self.inner, move |outer: O::Of<A>| {
            match O::branch::<A>(outer) {
                Ok(value) => function(value).inner,
                Err(failure) => I::map::<O::Failure, O::Of<B>, _>(I::of(failure), O::fail::<B>),
            }
        }))
    }

    /// Alias for [`chain`](Self::chain).
    pub fn and_then<B, F>(self, function: F) -> TransformerStack<O, I, B>
    where
        B: Portable,
        F: Fn(A) -> TransformerStack<O, I, B> + Portable,
    {
        self.chain(function)
    }

    /// Sequences `next` after this stack, discarding this stack's value.
    pub fn then<B>(self, next: TransformerStack<O, I, B>) -> TransformerStack<O, I, B>
    where
        B: Portable,
        TransformerStack<O, I, B>: Clone,
    {
        self.chain(move |_| next.clone())
    }

    /// Replaces a stopped computation with a fallback stack built from the
    /// failure; successes pass through.
    pub fn recover<F>(self, handler: F) -> Self
    where
        O::Of<A>: Clone,
        F: Fn(O::Failure) -> Self + Portable,
    {
        Self::new(I::chain::<O::Of<A>, O::Of<A>, _>(self.inner, move |outer: O::Of<A>| {
            match O::branch::<A>(outer) {
                Ok(value) => I::of::<O::Of<A>>(O::succeed(value)),
                Err(failure) => handler(failure).inner,
            }
        }))
    }
}

impl<O, I, F> TransformerStack<O, I, F>
where
    O: ShortCircuit,
    I: Monad,
    F: Portable,
{
    /// Applies the wrapped function to a wrapped value.
    ///
    /// The function stack's inner effects run before the value stack's. A
    /// stopped function stack wins over a stopped value stack.
    pub fn apply<A, B>(self, value: TransformerStack<O, I, A>) -> TransformerStack<O, I, B>
    where
        A: Portable,
        B: Portable,
        F: Fn(A) -> B,
    {
        <StackKind<O, I> as Applicative>::apply::<A, B, F>(self, value)
    }
}

impl<I, A> TransformerStack<OptionKind, I, A>
where
    I: Monad,
    A: Portable,
{
    /// A stack holding an absent value.
    pub fn none() -> Self {
        Self::fail(())
    }
}

impl<O, I, A> Clone for TransformerStack<O, I, A>
where
    O: ShortCircuit,
    I: Monad,
    A: Portable,
    I::Of<O::Of<A>>: Clone,
{
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<O, I, A> std::fmt::Debug for TransformerStack<O, I, A>
where
    O: ShortCircuit,
    I: Monad,
    A: Portable,
    I::Of<O::Of<A>>: std::fmt::Debug,
{
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("TransformerStack")
            .field("inner", &self.inner)
            .finish()
    }
}

impl<O, I, A> PartialEq for TransformerStack<O, I, A>
where
    O: ShortCircuit,
    I: Monad,
    A: Portable,
    I::Of<O::Of<A>>: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

/// Witness for `TransformerStack<O, I, _>`.
pub struct StackKind<O, I>(PhantomData<fn() -> (O, I)>);

impl<O, I> std::fmt::Debug for StackKind<O, I> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.write_str("StackKind")
    }
}

impl<O: ShortCircuit, I: Monad> TypeConstructor for StackKind<O, I> {
    type Of<A: Portable> = TransformerStack<O, I, A>;
}

impl<O: ShortCircuit, I: Monad> Functor for StackKind<O, I> {
    #[inline]
    fn map<A, B, F>(fa: TransformerStack<O, I, A>, function: F) -> TransformerStack<O, I, B>
    where
        A: Portable,
        B: Portable,
        F: Fn(A) -> B + Portable,
    {
        fa.map(function)
    }
}

impl<O: ShortCircuit, I: Monad> Applicative for StackKind<O, I> {
    #[inline]
    fn of<A>(value: A) -> TransformerStack<O, I, A>
    where
        A: Portable + Clone,
    {
        TransformerStack::of(value)
    }

    /// Runs the function layer first, then the value layer.
    fn apply<A, B, F>(
        function: TransformerStack<O, I, F>,
        fa: TransformerStack<O, I, A>,
    ) -> TransformerStack<O, I, B>
    where
        A: Portable,
        B: Portable,
        F: Fn(A) -> B + Portable,
    {
        let lifted = I::map::<O::Of<F>, _, _>(function.inner, |outer_function: O::Of<F>| {
            let branched = O::branch::<F>(outer_function);
            move |outer_value: O::Of<A>| match (&branched, O::branch::<A>(outer_value)) {
                (Ok(function), Ok(value)) => O::succeed::<B>(function(value)),
                (Err(failure), _) => O::fail::<B>(failure.clone()),
                (Ok(_), Err(failure)) => O::fail::<B>(failure),
            }
        });
        TransformerStack::new(I::apply::<O::Of<A>, O::Of<B>, _>(lifted, fa.inner))
    }
}

impl<O: ShortCircuit, I: Monad> Monad for StackKind<O, I> {
    #[inline]
    fn chain<A, B, F>(fa: TransformerStack<O, I, A>, function: F) -> TransformerStack<O, I, B>
    where
        A: Portable,
        B: Portable,
        F: Fn(A) -> TransformerStack<O, I, B> + Portable,
    {
        fa.chain(function)
    }
}
