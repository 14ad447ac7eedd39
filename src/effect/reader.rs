//! Reader - computation that depends on a read-only environment.
//!
//! A `Reader<R, A>` wraps a function `R -> A`. Composing Readers threads the
//! same environment through every step without passing it by hand, which makes
//! Reader the context of choice for configuration access and dependency
//! injection.
//!
//! Nothing runs until [`Reader::run`] supplies the environment, and running
//! the same Reader with the same environment always yields the same value.
//! The wrapped function lives behind an `Arc`, so Readers are cheap to clone
//! and can be sent across threads or embedded in a [`Task`](crate::effect::Task).
//!
//! # Laws
//!
//! ## Monad Laws
//!
//! - Left Identity: `Reader::of(a).chain(f) == f(a)`
//! - Right Identity: `m.chain(Reader::of) == m`
//! - Associativity: `m.chain(f).chain(g) == m.chain(|x| f(x).chain(g))`
//!
//! ## Environment Laws
//!
//! - Ask Retrieval: `Reader::ask().run(r) == r`
//! - Local Identity: `Reader::local(|r| r, m) == m`
//! - Local Composition: `local(f, local(g, m)) == local(|r| g(f(r)), m)`
//!
//! Equality here means "runs to the same value for every environment".
//!
//! # Examples
//!
//! ```rust
//! use contextual::effect::Reader;
//!
//! #[derive(Clone)]
//! struct Config {
//!     port: u16,
//!     host: String,
//! }
//!
//! fn port() -> Reader<Config, u16> {
//!     Reader::asks(|config: Config| config.port)
//! }
//!
//! fn host() -> Reader<Config, String> {
//!     Reader::asks(|config: Config| config.host)
//! }
//!
//! fn address() -> Reader<Config, String> {
//!     host().map2(port(), |host, port| format!("{host}:{port}"))
//! }
//!
//! let config = Config { port: 8080, host: "localhost".to_string() };
//! assert_eq!(address().run(config), "localhost:8080");
//! ```

use std::marker::PhantomData;
use std::sync::Arc;

use crate::typeclass::{Applicative, Functor, Monad, Portable, TypeConstructor};

/// A computation that, given an environment of type `R`, produces an `A`.
///
/// # Examples
///
/// ```rust
/// use contextual::effect::Reader;
///
/// let computation: Reader<i32, i32> =
///     Reader::ask().chain(|environment| Reader::of(environment * 2));
/// assert_eq!(computation.run(21), 42);
/// ```
pub struct Reader<R, A> {
    run_function: Arc<dyn Fn(R) -> A + Send + Sync>,
}

impl<R, A> Reader<R, A>
where
    R: 'static,
    A: 'static,
{
    /// Creates a Reader from a function of the environment.
    ///
    /// ```rust
    /// use contextual::effect::Reader;
    ///
    /// let reader: Reader<i32, String> = Reader::new(|environment: i32| environment.to_string());
    /// assert_eq!(reader.run(42), "42");
    /// ```
    pub fn new<F>(function: F) -> Self
    where
        F: Fn(R) -> A + Send + Sync + 'static,
    {
        Self {
            run_function: Arc::new(function),
        }
    }

    /// Supplies the environment and returns the result.
    pub fn run(&self, environment: R) -> A {
        (self.run_function)(environment)
    }

    /// Lifts a value, ignoring the environment.
    pub fn of(value: A) -> Self
    where
        A: Clone + Send + Sync,
    {
        Self::new(move |_| value.clone())
    }

    /// Projects a value out of the environment.
    ///
    /// ```rust
    /// use contextual::effect::Reader;
    ///
    /// let length: Reader<String, usize> = Reader::asks(|text: String| text.len());
    /// assert_eq!(length.run("hello".to_string()), 5);
    /// ```
    pub fn asks<F>(projection: F) -> Self
    where
        F: Fn(R) -> A + Send + Sync + 'static,
    {
        Self::new(projection)
    }

    /// Runs `computation` against a modified environment.
    ///
    /// The modification is scoped to `computation`; Readers composed around
    /// the result still see the original environment.
    ///
    /// ```rust
    /// use contextual::effect::Reader;
    ///
    /// let doubled = Reader::local(|r: i32| r * 2, Reader::ask());
    /// let combined = doubled.map2(Reader::ask(), |inner, outer| (inner, outer));
    /// assert_eq!(combined.run(5), (10, 5));
    /// ```
    pub fn local<F>(modifier: F, computation: Self) -> Self
    where
        F: Fn(R) -> R + Send + Sync + 'static,
    {
        let original = computation.run_function;
        Self::new(move |environment| original(modifier(environment)))
    }

    /// Transforms the result.
    pub fn map<B, F>(self, function: F) -> Reader<R, B>
    where
        F: Fn(A) -> B + Send + Sync + 'static,
        B: 'static,
    {
        let original = self.run_function;
        Reader::new(move |environment| function(original(environment)))
    }

    /// Sequences a dependent Reader; both see the same environment.
    pub fn chain<B, F>(self, function: F) -> Reader<R, B>
    where
        F: Fn(A) -> Reader<R, B> + Send + Sync + 'static,
        R: Clone,
        B: 'static,
    {
        let original = self.run_function;
        Reader::new(move |environment: R| {
            let value = original(environment.clone());
            function(value).run(environment)
        })
    }

    /// Alias for [`chain`](Self::chain).
    pub fn and_then<B, F>(self, function: F) -> Reader<R, B>
    where
        F: Fn(A) -> Reader<R, B> + Send + Sync + 'static,
        R: Clone,
        B: 'static,
    {
        self.chain(function)
    }

    /// Runs both Readers against the environment and keeps the second result.
    pub fn then<B>(self, next: Reader<R, B>) -> Reader<R, B>
    where
        R: Clone,
        B: 'static,
    {
        let original = self.run_function;
        Reader::new(move |environment: R| {
            let _ = original(environment.clone());
            next.run(environment)
        })
    }

    /// Applies the function produced by this Reader to another's result.
    pub fn apply<B, C>(self, other: Reader<R, B>) -> Reader<R, C>
    where
        A: Fn(B) -> C,
        R: Clone,
        B: 'static,
        C: 'static,
    {
        let original = self.run_function;
        Reader::new(move |environment: R| {
            let function = original(environment.clone());
            function(other.run(environment))
        })
    }

    /// Combines two Readers over the same environment.
    pub fn map2<B, C, F>(self, other: Reader<R, B>, function: F) -> Reader<R, C>
    where
        F: Fn(A, B) -> C + Send + Sync + 'static,
        R: Clone,
        B: 'static,
        C: 'static,
    {
        let original = self.run_function;
        Reader::new(move |environment: R| {
            let left = original(environment.clone());
            function(left, other.run(environment))
        })
    }
}

impl<R: 'static> Reader<R, R> {
    /// Yields the environment itself.
    pub fn ask() -> Self {
        Self::new(|environment| environment)
    }
}

impl<R, A> Clone for Reader<R, A> {
    fn clone(&self) -> Self {
        Self {
            run_function: Arc::clone(&self.run_function),
        }
    }
}

impl<R, A> std::fmt::Debug for Reader<R, A> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.write_str("Reader(<function>)")
    }
}

/// Witness for `Reader<R, _>`.
pub struct ReaderKind<R>(PhantomData<fn() -> R>);

impl<R> std::fmt::Debug for ReaderKind<R> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.write_str("ReaderKind")
    }
}

impl<R: Portable + Clone> TypeConstructor for ReaderKind<R> {
    type Of<A: Portable> = Reader<R, A>;
}

impl<R: Portable + Clone> Functor for ReaderKind<R> {
    #[inline]
    fn map<A, B, F>(fa: Reader<R, A>, function: F) -> Reader<R, B>
    where
        A: Portable,
        B: Portable,
        F: Fn(A) -> B + Portable,
    {
        fa.map(function)
    }
}

impl<R: Portable + Clone> Applicative for ReaderKind<R> {
    #[inline]
    fn of<A>(value: A) -> Reader<R, A>
    where
        A: Portable + Clone,
    {
        Reader::of(value)
    }

    #[inline]
    fn apply<A, B, F>(function: Reader<R, F>, fa: Reader<R, A>) -> Reader<R, B>
    where
        A: Portable,
        B: Portable,
        F: Fn(A) -> B + Portable,
    {
        function.apply(fa)
    }
}

impl<R: Portable + Clone> Monad for ReaderKind<R> {
    #[inline]
    fn chain<A, B, F>(fa: Reader<R, A>, function: F) -> Reader<R, B>
    where
        A: Portable,
        B: Portable,
        F: Fn(A) -> Reader<R, B> + Portable,
    {
        fa.chain(function)
    }
}
