//! Writer - a value paired with an accumulated side channel.
//!
//! The Writer context carries a value together with output produced while
//! computing it: a log, metrics, an audit trail. The output type must be a
//! [`Monoid`]: `of` starts with the identity element, and `chain` combines the
//! accumulated output with the next step's output, left then right.
//!
//! # Overview
//!
//! A `Writer<W, A>` is an eager pair `(A, W)`; nothing is deferred. Because
//! `chain` relies on [`Semigroup::combine`](crate::typeclass::Semigroup::combine)
//! being associative and `empty` being neutral, the Monad laws for Writer hold
//! exactly when the Monoid laws hold for `W`.
//!
//! # Laws
//!
//! - Left Identity: `Writer::of(a).chain(f) == f(a)`
//! - Right Identity: `m.chain(Writer::of) == m`
//! - Associativity: `m.chain(f).chain(g) == m.chain(|x| f(x).chain(g))`
//! - Tell: `tell(w1).then(tell(w2)) == tell(w1.combine(w2))`
//!
//! # Examples
//!
//! ```rust
//! use contextual::effect::Writer;
//!
//! fn log(message: &str) -> Writer<Vec<String>, ()> {
//!     Writer::tell(vec![message.to_string()])
//! }
//!
//! let computation = log("step 1")
//!     .then(log("step 2"))
//!     .then(Writer::of(42));
//!
//! let (result, logs) = computation.run();
//! assert_eq!(result, 42);
//! assert_eq!(logs, vec!["step 1", "step 2"]);
//! ```

use std::marker::PhantomData;

use crate::typeclass::{Applicative, Functor, Monad, Monoid, Portable, TypeConstructor};

/// A value of type `A` together with accumulated output of type `W`.
///
/// # Examples
///
/// ```rust
/// use contextual::effect::Writer;
/// use contextual::typeclass::Sum;
///
/// let counted: Writer<Sum<u32>, &str> = Writer::tell(Sum(1))
///     .then(Writer::tell(Sum(1)))
///     .map(|()| "two steps");
///
/// assert_eq!(counted.run(), ("two steps", Sum(2)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Writer<W, A> {
    value: A,
    log: W,
}

impl<W, A> Writer<W, A> {
    /// Creates a Writer from a value and the output produced alongside it.
    pub const fn new(value: A, log: W) -> Self {
        Self { value, log }
    }

    /// Leaves the context, returning the value and the accumulated output.
    pub fn run(self) -> (A, W) {
        (self.value, self.log)
    }

    /// The value, by reference.
    pub const fn value(&self) -> &A {
        &self.value
    }

    /// The accumulated output, by reference.
    pub const fn log(&self) -> &W {
        &self.log
    }

    /// Applies a function to the value; the output is untouched.
    ///
    /// ```rust
    /// use contextual::effect::Writer;
    ///
    /// let writer: Writer<Vec<&str>, i32> = Writer::new(21, vec!["log"]);
    /// assert_eq!(writer.map(|value| value * 2).run(), (42, vec!["log"]));
    /// ```
    pub fn map<B, F>(self, function: F) -> Writer<W, B>
    where
        F: FnOnce(A) -> B,
    {
        Writer {
            value: function(self.value),
            log: self.log,
        }
    }

    /// Post-processes the accumulated output; the value is untouched.
    ///
    /// ```rust
    /// use contextual::effect::Writer;
    ///
    /// let writer: Writer<Vec<&str>, i32> = Writer::new(1, vec!["secret", "public"]);
    /// let redacted = writer.censor(|log| log.into_iter().filter(|e| *e != "secret").collect());
    /// assert_eq!(redacted.run(), (1, vec!["public"]));
    /// ```
    pub fn censor<F>(self, modifier: F) -> Self
    where
        F: FnOnce(W) -> W,
    {
        Self {
            value: self.value,
            log: modifier(self.log),
        }
    }

    /// Exposes the output produced so far next to the value.
    pub fn listen(self) -> Writer<W, (A, W)>
    where
        W: Clone,
    {
        Writer {
            value: (self.value, self.log.clone()),
            log: self.log,
        }
    }
}

impl<W: Monoid, A> Writer<W, A> {
    /// Lifts a value with the identity element as its output.
    ///
    /// ```rust
    /// use contextual::effect::Writer;
    ///
    /// let writer: Writer<Vec<String>, i32> = Writer::of(42);
    /// let (value, log) = writer.run();
    /// assert_eq!(value, 42);
    /// assert!(log.is_empty());
    /// ```
    pub fn of(value: A) -> Self {
        Self {
            value,
            log: W::empty(),
        }
    }

    /// Sequences a dependent computation, combining outputs left then right.
    ///
    /// ```rust
    /// use contextual::effect::Writer;
    ///
    /// let writer: Writer<Vec<&str>, i32> = Writer::new(10, vec!["first"]);
    /// let chained = writer.chain(|value| Writer::new(value * 2, vec!["second"]));
    /// assert_eq!(chained.run(), (20, vec!["first", "second"]));
    /// ```
    pub fn chain<B, F>(self, function: F) -> Writer<W, B>
    where
        F: FnOnce(A) -> Writer<W, B>,
    {
        let next = function(self.value);
        Writer {
            value: next.value,
            log: self.log.combine(next.log),
        }
    }

    /// Alias for [`chain`](Self::chain).
    pub fn and_then<B, F>(self, function: F) -> Writer<W, B>
    where
        F: FnOnce(A) -> Writer<W, B>,
    {
        self.chain(function)
    }

    /// Sequences two Writers, keeping the second value and both outputs.
    pub fn then<B>(self, next: Writer<W, B>) -> Writer<W, B> {
        Writer {
            value: next.value,
            log: self.log.combine(next.log),
        }
    }

    /// Applies this Writer's function to another Writer's value.
    pub fn apply<B, C>(self, other: Writer<W, B>) -> Writer<W, C>
    where
        A: FnOnce(B) -> C,
    {
        Writer {
            value: (self.value)(other.value),
            log: self.log.combine(other.log),
        }
    }

    /// Combines two Writers with a binary function.
    pub fn map2<B, C, F>(self, other: Writer<W, B>, function: F) -> Writer<W, C>
    where
        F: FnOnce(A, B) -> C,
    {
        Writer {
            value: function(self.value, other.value),
            log: self.log.combine(other.log),
        }
    }
}

impl<W: Monoid> Writer<W, ()> {
    /// Produces output without a meaningful value.
    ///
    /// ```rust
    /// use contextual::effect::Writer;
    ///
    /// let entry: Writer<Vec<&str>, ()> = Writer::tell(vec!["connected"]);
    /// assert_eq!(entry.run(), ((), vec!["connected"]));
    /// ```
    pub const fn tell(entry: W) -> Self {
        Self {
            value: (),
            log: entry,
        }
    }
}

/// Witness for `Writer<W, _>`.
pub struct WriterKind<W>(PhantomData<fn() -> W>);

impl<W> std::fmt::Debug for WriterKind<W> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.write_str("WriterKind")
    }
}

impl<W: Monoid + Portable> TypeConstructor for WriterKind<W> {
    type Of<A: Portable> = Writer<W, A>;
}

impl<W: Monoid + Portable> Functor for WriterKind<W> {
    #[inline]
    fn map<A, B, F>(fa: Writer<W, A>, function: F) -> Writer<W, B>
    where
        A: Portable,
        B: Portable,
        F: Fn(A) -> B + Portable,
    {
        fa.map(function)
    }
}

impl<W: Monoid + Portable> Applicative for WriterKind<W> {
    #[inline]
    fn of<A>(value: A) -> Writer<W, A>
    where
        A: Portable + Clone,
    {
        Writer::of(value)
    }

    #[inline]
    fn apply<A, B, F>(function: Writer<W, F>, fa: Writer<W, A>) -> Writer<W, B>
    where
        A: Portable,
        B: Portable,
        F: Fn(A) -> B + Portable,
    {
        function.apply(fa)
    }
}

impl<W: Monoid + Portable> Monad for WriterKind<W> {
    #[inline]
    fn chain<A, B, F>(fa: Writer<W, A>, function: F) -> Writer<W, B>
    where
        A: Portable,
        B: Portable,
        F: Fn(A) -> Writer<W, B> + Portable,
    {
        fa.chain(function)
    }
}
