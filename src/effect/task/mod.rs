//! Task - lazy, re-runnable asynchronous computation.
//!
//! A `Task<E, T>` describes asynchronous work that settles with `Ok(T)` or a
//! [`TaskError<E>`]. Building a Task performs no work: the body starts only
//! when [`Task::run`] is awaited, and every `run` is a fresh execution. That
//! makes a Task safe to embed inside a [`Writer`](crate::effect::Writer),
//! [`Reader`](crate::effect::Reader) or [`State`](crate::effect::State)
//! description without starting anything early.
//!
//! # Execution boundary
//!
//! `run` is the only place where a panic in the body is converted into a
//! typed failure ([`TaskError::Panicked`]). Retries, timeouts and
//! cancellation are applied there as well:
//!
//! - [`Task::retry`] re-invokes the body after `Failed` and `TimedOut`
//!   outcomes, waiting according to a [`Backoff`] between attempts.
//! - [`Task::timeout`] bounds each attempt; [`Task::timeout_overall`] bounds
//!   the whole run, retries included.
//! - [`Task::with_cancellation`] settles with `Cancelled` as soon as the
//!   [`CancelToken`] fires; continuations registered with `chain` that have
//!   not started yet never run.
//!
//! # Combining many tasks
//!
//! [`Task::all`] runs tasks concurrently and stops at the first error
//! (fail-fast); [`Task::all_settled`] runs them concurrently and collects every
//! outcome; [`Task::sequence`] runs them one after another. All three keep
//! results in input order.
//!
//! # Examples
//!
//! ```rust
//! use std::sync::Arc;
//! use std::sync::atomic::{AtomicU32, Ordering};
//! use contextual::effect::Task;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let calls = Arc::new(AtomicU32::new(0));
//! let counter = Arc::clone(&calls);
//! let flaky: Task<String, u32> = Task::new(move || {
//!     let calls = Arc::clone(&counter);
//!     async move {
//!         let attempt = calls.fetch_add(1, Ordering::SeqCst) + 1;
//!         if attempt < 3 { Err(format!("attempt {attempt} failed")) } else { Ok(attempt) }
//!     }
//! });
//!
//! assert_eq!(flaky.retry(3).map(|n| n * 10).run().await, Ok(30));
//! assert_eq!(calls.load(Ordering::SeqCst), 3);
//! # }
//! ```

mod cancel;
mod error;
mod policy;

pub use cancel::CancelToken;
pub use error::{TaskError, TimeoutError};
pub use policy::{Backoff, RetryPolicy};

use std::future::{Future, IntoFuture};
use std::marker::PhantomData;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use std::time::Duration;

use futures::FutureExt;
use futures::future::{self, BoxFuture};
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

use crate::effect::Panicked;
use crate::typeclass::{Applicative, Functor, Monad, Portable, TypeConstructor};

type Attempt<E, T> = Arc<dyn Fn() -> BoxFuture<'static, Result<T, TaskError<E>>> + Send + Sync>;

/// A lazy asynchronous computation producing `Result<T, TaskError<E>>`.
pub struct Task<E, T> {
    attempt: Attempt<E, T>,
    retry: Option<RetryPolicy>,
}

/// The settle side handed to a [`Task::from_callback`] registration.
///
/// Settling consumes the value, so a source settles at most once. Dropping it
/// without settling makes the task fail with [`TaskError::Abandoned`].
#[derive(Debug)]
pub struct Settle<T, E> {
    sender: oneshot::Sender<Result<T, E>>,
}

impl<T, E> Settle<T, E> {
    /// Settles with an outcome.
    pub fn settle(self, outcome: Result<T, E>) {
        // The receiver is gone only when the run was dropped; nobody is left to tell.
        let _ = self.sender.send(outcome);
    }

    /// Settles successfully.
    pub fn ok(self, value: T) {
        self.settle(Ok(value));
    }

    /// Settles with a domain error.
    pub fn err(self, error: E) {
        self.settle(Err(error));
    }
}

async fn execute<E, T>(
    attempt: Attempt<E, T>,
    retry: Option<RetryPolicy>,
) -> Result<T, TaskError<E>>
where
    E: Send + 'static,
    T: Send + 'static,
{
    let Some(policy) = retry else {
        return attempt().await;
    };
    let max_attempts = policy.attempts();
    let mut made = 0;
    loop {
        made += 1;
        match attempt().await {
            Ok(value) => return Ok(value),
            Err(error) if error.is_retryable() && made < max_attempts => {
                let delay = policy.backoff.delay_after(made);
                tracing::debug!(
                    attempt = made,
                    max_attempts,
                    ?delay,
                    "task attempt failed, retrying"
                );
                if !delay.is_zero() {
                    tokio::time::sleep(delay).await;
                }
            }
            Err(error) => {
                if error.is_retryable() {
                    tracing::warn!(attempts = made, "task retries exhausted");
                }
                return Err(error);
            }
        }
    }
}

impl<E, T> Task<E, T>
where
    E: Send + 'static,
    T: Send + 'static,
{
    fn from_attempt<F, Fut>(attempt: F) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<T, TaskError<E>>> + Send + 'static,
    {
        Self {
            attempt: Arc::new(move || attempt().boxed()),
            retry: None,
        }
    }

    /// One full execution, retries included, without the panic boundary.
    fn execution(&self) -> BoxFuture<'static, Result<T, TaskError<E>>> {
        execute(Arc::clone(&self.attempt), self.retry).boxed()
    }

    /// Folds any pending retry policy into the attempt so that wrappers
    /// applied afterwards see the whole retrying run as a single attempt.
    fn sealed(self) -> Attempt<E, T> {
        if self.retry.is_none() {
            return self.attempt;
        }
        Arc::new(move || self.execution())
    }

    /// Creates a Task from a factory that builds a fresh future on every run.
    ///
    /// ```rust
    /// use contextual::effect::Task;
    ///
    /// let task: Task<String, i32> = Task::new(|| async { Ok(21 * 2) });
    /// let value = futures::executor::block_on(task.run());
    /// assert_eq!(value, Ok(42));
    /// ```
    pub fn new<F, Fut>(factory: F) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<T, E>> + Send + 'static,
    {
        Self::from_attempt(move || factory().map(|outcome| outcome.map_err(TaskError::Failed)))
    }

    /// A Task that succeeds with `value` on every run.
    pub fn of(value: T) -> Self
    where
        T: Clone + Sync,
    {
        Self::from_attempt(move || future::ready(Ok(value.clone())))
    }

    /// A Task that fails with `error` on every run.
    pub fn fail(error: E) -> Self
    where
        E: Clone + Sync,
    {
        Self::from_attempt(move || future::ready(Err(TaskError::Failed(error.clone()))))
    }

    /// A Task that settles with `outcome` on every run.
    pub fn from_result(outcome: Result<T, E>) -> Self
    where
        T: Clone + Sync,
        E: Clone + Sync,
    {
        Self::from_attempt(move || future::ready(outcome.clone().map_err(TaskError::Failed)))
    }

    /// Wraps a synchronous body. The body runs when the task runs, not before.
    pub fn from_fn<F>(body: F) -> Self
    where
        F: Fn() -> Result<T, E> + Send + Sync + 'static,
    {
        let body = Arc::new(body);
        Self::from_attempt(move || {
            let body = Arc::clone(&body);
            future::lazy(move |_| body().map_err(TaskError::Failed))
        })
    }

    /// Adapts a callback-style source.
    ///
    /// `register` is called once per run with a [`Settle`] handle. If the
    /// source drops the handle without settling, the run fails with
    /// [`TaskError::Abandoned`].
    ///
    /// ```rust
    /// use contextual::effect::{Task, TaskError};
    ///
    /// let answered: Task<String, u8> = Task::from_callback(|settle| {
    ///     std::thread::spawn(move || settle.ok(7));
    /// });
    /// let ignored: Task<String, u8> = Task::from_callback(|settle| drop(settle));
    ///
    /// # tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(async {
    /// assert_eq!(answered.run().await, Ok(7));
    /// assert_eq!(ignored.run().await, Err(TaskError::Abandoned));
    /// # });
    /// ```
    pub fn from_callback<F>(register: F) -> Self
    where
        F: Fn(Settle<T, E>) + Send + Sync + 'static,
    {
        Self::from_attempt(move || {
            let (sender, receiver) = oneshot::channel();
            register(Settle { sender });
            async move {
                match receiver.await {
                    Ok(outcome) => outcome.map_err(TaskError::Failed),
                    Err(_) => Err(TaskError::Abandoned),
                }
            }
        })
    }

    /// Succeeds with `value` after `duration`.
    pub fn delay(duration: Duration, value: T) -> Self
    where
        T: Clone + Sync,
    {
        Self::from_attempt(move || {
            let value = value.clone();
            async move {
                tokio::time::sleep(duration).await;
                Ok(value)
            }
        })
    }

    /// Runs the task once, retries included.
    ///
    /// A panic raised by the body settles the run as
    /// [`TaskError::Panicked`] instead of unwinding into the caller.
    pub async fn run(&self) -> Result<T, TaskError<E>> {
        match AssertUnwindSafe(self.execution()).catch_unwind().await {
            Ok(outcome) => outcome,
            Err(payload) => {
                let panicked = Panicked::from_payload(payload.as_ref());
                tracing::error!(message = %panicked.message, "task body panicked");
                Err(TaskError::Panicked(panicked))
            }
        }
    }

    /// Runs the task once, settling with `Cancelled` if `token` fires first.
    pub async fn run_with(&self, token: &CancelToken) -> Result<T, TaskError<E>> {
        self.clone().with_cancellation(token.clone()).run().await
    }

    /// Starts a run on the tokio runtime and returns a handle to it.
    pub fn spawn(&self) -> TaskHandle<E, T> {
        let token = CancelToken::new();
        let task = self.clone().with_cancellation(token.clone());
        let join = tokio::spawn(async move { task.run().await });
        TaskHandle { token, join }
    }

    /// Transforms the success value.
    pub fn map<U, F>(self, function: F) -> Task<E, U>
    where
        U: Send + 'static,
        F: Fn(T) -> U + Send + Sync + 'static,
    {
        let source = self.sealed();
        let function = Arc::new(function);
        Task::from_attempt(move || {
            let function = Arc::clone(&function);
            source().map(move |outcome| outcome.map(|value| function(value)))
        })
    }

    /// Transforms the domain error; timeouts, cancellation and panics pass
    /// through unchanged.
    pub fn map_error<E2, F>(self, function: F) -> Task<E2, T>
    where
        E2: Send + 'static,
        F: Fn(E) -> E2 + Send + Sync + 'static,
    {
        let source = self.sealed();
        let function = Arc::new(function);
        Task::from_attempt(move || {
            let function = Arc::clone(&function);
            source().map(move |outcome| outcome.map_err(|error| error.map_failure(|e| function(e))))
        })
    }

    /// Sequences a dependent task. The continuation runs only after this task
    /// succeeds, and never if the run is cancelled first.
    ///
    /// ```rust
    /// use contextual::effect::Task;
    ///
    /// let user_id: Task<String, u32> = Task::of(7);
    /// let profile = user_id.chain(|id| Task::of(format!("user-{id}")));
    /// assert_eq!(futures::executor::block_on(profile.run()), Ok("user-7".to_string()));
    /// ```
    pub fn chain<U, F>(self, function: F) -> Task<E, U>
    where
        U: Send + 'static,
        F: Fn(T) -> Task<E, U> + Send + Sync + 'static,
    {
        let source = self.sealed();
        let function = Arc::new(function);
        Task::from_attempt(move || {
            let first = source();
            let function = Arc::clone(&function);
            async move {
                let value = first.await?;
                function(value).execution().await
            }
        })
    }

    /// Alias for [`chain`](Self::chain).
    pub fn and_then<U, F>(self, function: F) -> Task<E, U>
    where
        U: Send + 'static,
        F: Fn(T) -> Task<E, U> + Send + Sync + 'static,
    {
        self.chain(function)
    }

    /// Runs `next` after this task succeeds, keeping only `next`'s value.
    pub fn then<U>(self, next: Task<E, U>) -> Task<E, U>
    where
        U: Send + 'static,
    {
        self.chain(move |_| next.clone())
    }

    /// Runs the function task and the value task concurrently and applies one
    /// to the other. The first error to settle wins.
    pub fn apply<A, U>(self, other: Task<E, A>) -> Task<E, U>
    where
        T: Fn(A) -> U,
        A: Send + 'static,
        U: Send + 'static,
    {
        self.map2(other, |function, value| function(value))
    }

    /// Runs both tasks concurrently and combines their values.
    ///
    /// ```rust
    /// use contextual::effect::Task;
    ///
    /// let width: Task<String, u32> = Task::of(3);
    /// let height: Task<String, u32> = Task::of(4);
    /// let area = width.map2(height, |w, h| w * h);
    /// assert_eq!(futures::executor::block_on(area.run()), Ok(12));
    /// ```
    pub fn map2<A, U, F>(self, other: Task<E, A>, function: F) -> Task<E, U>
    where
        A: Send + 'static,
        U: Send + 'static,
        F: Fn(T, A) -> U + Send + Sync + 'static,
    {
        let left = self.sealed();
        let right = other.sealed();
        let function = Arc::new(function);
        Task::from_attempt(move || {
            let function = Arc::clone(&function);
            future::try_join(left(), right())
                .map(move |outcome| outcome.map(|(l, r)| function(l, r)))
        })
    }

    /// Replaces a domain failure with the task built by `handler`.
    ///
    /// Only `Failed` is recovered; timeouts, cancellation and panics pass
    /// through.
    pub fn recover<F>(self, handler: F) -> Self
    where
        F: Fn(E) -> Self + Send + Sync + 'static,
    {
        let source = self.sealed();
        let handler = Arc::new(handler);
        Self::from_attempt(move || {
            let first = source();
            let handler = Arc::clone(&handler);
            async move {
                match first.await {
                    Err(TaskError::Failed(error)) => handler(error).execution().await,
                    outcome => outcome,
                }
            }
        })
    }

    /// Bounds every attempt by `duration`.
    ///
    /// A retry policy already set on the task, or set later, applies around
    /// the bounded attempt, so each attempt gets its own full `duration`.
    pub fn timeout(self, duration: Duration) -> Self {
        Self {
            attempt: bounded(self.attempt, duration),
            retry: self.retry,
        }
    }

    /// Bounds the whole run, retries and backoff included, by `duration`.
    pub fn timeout_overall(self, duration: Duration) -> Self {
        Self {
            attempt: bounded(self.sealed(), duration),
            retry: None,
        }
    }

    /// Attempts the body up to `times` times in total, without delay.
    pub fn retry(self, times: u32) -> Self {
        self.retry_with(RetryPolicy::new(times))
    }

    /// Attempts the body according to `policy`.
    ///
    /// ```rust
    /// use std::time::Duration;
    /// use contextual::effect::{Backoff, RetryPolicy, Task};
    ///
    /// let policy = RetryPolicy::new(4).with_backoff(Backoff::Multiplicative {
    ///     initial: Duration::from_millis(10),
    ///     factor: 2,
    /// });
    /// let task: Task<String, u8> = Task::fail("unreachable".to_string()).retry_with(policy);
    /// # let _ = task;
    /// ```
    pub fn retry_with(self, policy: RetryPolicy) -> Self {
        let attempt = self.sealed();
        Self {
            attempt,
            retry: Some(policy),
        }
    }

    /// Settles with `Cancelled` as soon as `token` fires.
    ///
    /// The rest of the run is dropped at that point: pending continuations do
    /// not start and in-flight futures are not polled again.
    pub fn with_cancellation(self, token: CancelToken) -> Self {
        let source = self.sealed();
        Self::from_attempt(move || {
            let source = Arc::clone(&source);
            let token = token.clone();
            async move {
                tokio::select! {
                    biased;
                    () = token.cancelled() => {
                        tracing::debug!("task cancelled before settling");
                        Err(TaskError::Cancelled)
                    }
                    outcome = async move { source().await } => outcome,
                }
            }
        })
    }

    /// Runs every task concurrently and stops at the first error.
    ///
    /// Values come back in input order. When one task fails the others are
    /// dropped.
    pub fn all<I>(tasks: I) -> Task<E, Vec<T>>
    where
        I: IntoIterator<Item = Self>,
    {
        let tasks: Arc<[Self]> = tasks.into_iter().collect();
        Task::from_attempt(move || future::try_join_all(tasks.iter().map(Self::execution)))
    }

    /// Runs every task concurrently and collects every outcome in input order.
    /// The combined task itself never fails.
    pub fn all_settled<I>(tasks: I) -> Task<E, Vec<Result<T, TaskError<E>>>>
    where
        I: IntoIterator<Item = Self>,
    {
        let tasks: Arc<[Self]> = tasks.into_iter().collect();
        Task::from_attempt(move || {
            future::join_all(tasks.iter().map(Self::execution)).map(Ok::<_, TaskError<E>>)
        })
    }

    /// Runs tasks one after another in input order, stopping at the first
    /// error.
    pub fn sequence<I>(tasks: I) -> Task<E, Vec<T>>
    where
        I: IntoIterator<Item = Self>,
    {
        let tasks: Arc<[Self]> = tasks.into_iter().collect();
        Task::from_attempt(move || {
            let tasks = Arc::clone(&tasks);
            async move {
                let mut values = Vec::with_capacity(tasks.len());
                for task in tasks.iter() {
                    values.push(task.execution().await?);
                }
                Ok::<_, TaskError<E>>(values)
            }
        })
    }
}

fn bounded<E, T>(attempt: Attempt<E, T>, duration: Duration) -> Attempt<E, T>
where
    E: Send + 'static,
    T: Send + 'static,
{
    Arc::new(move || {
        let work = attempt();
        async move {
            match tokio::time::timeout(duration, work).await {
                Ok(outcome) => outcome,
                Err(_) => {
                    tracing::debug!(?duration, "task attempt timed out");
                    Err(TaskError::TimedOut(TimeoutError { duration }))
                }
            }
        }
        .boxed()
    })
}

impl<E, T> Clone for Task<E, T> {
    fn clone(&self) -> Self {
        Self {
            attempt: Arc::clone(&self.attempt),
            retry: self.retry,
        }
    }
}

impl<E, T> std::fmt::Debug for Task<E, T> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("Task")
            .field("retry", &self.retry)
            .finish_non_exhaustive()
    }
}

impl<E, T> IntoFuture for Task<E, T>
where
    E: Send + 'static,
    T: Send + 'static,
{
    type Output = Result<T, TaskError<E>>;
    type IntoFuture = BoxFuture<'static, Self::Output>;

    fn into_future(self) -> Self::IntoFuture {
        async move { self.run().await }.boxed()
    }
}

/// A run started with [`Task::spawn`].
#[derive(Debug)]
pub struct TaskHandle<E, T> {
    token: CancelToken,
    join: JoinHandle<Result<T, TaskError<E>>>,
}

impl<E, T> TaskHandle<E, T> {
    /// Requests cancellation of the spawned run.
    pub fn cancel(&self) {
        self.token.cancel();
    }

    /// The token controlling the spawned run.
    pub const fn token(&self) -> &CancelToken {
        &self.token
    }

    /// Waits for the spawned run to settle.
    pub async fn join(self) -> Result<T, TaskError<E>> {
        match self.join.await {
            Ok(outcome) => outcome,
            Err(error) if error.is_panic() => Err(TaskError::Panicked(Panicked::from_payload(
                error.into_panic().as_ref(),
            ))),
            Err(_) => Err(TaskError::Cancelled),
        }
    }
}

/// Witness for `Task<E, _>`.
pub struct TaskKind<E>(PhantomData<fn() -> E>);

impl<E> std::fmt::Debug for TaskKind<E> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.write_str("TaskKind")
    }
}

impl<E: Portable> TypeConstructor for TaskKind<E> {
    type Of<A: Portable> = Task<E, A>;
}

impl<E: Portable> Functor for TaskKind<E> {
    #[inline]
    fn map<A, B, F>(fa: Task<E, A>, function: F) -> Task<E, B>
    where
        A: Portable,
        B: Portable,
        F: Fn(A) -> B + Portable,
    {
        fa.map(function)
    }
}

impl<E: Portable> Applicative for TaskKind<E> {
    #[inline]
    fn of<A>(value: A) -> Task<E, A>
    where
        A: Portable + Clone,
    {
        Task::of(value)
    }

    #[inline]
    fn apply<A, B, F>(function: Task<E, F>, fa: Task<E, A>) -> Task<E, B>
    where
        A: Portable,
        B: Portable,
        F: Fn(A) -> B + Portable,
    {
        function.apply(fa)
    }
}

impl<E: Portable> Monad for TaskKind<E> {
    #[inline]
    fn chain<A, B, F>(fa: Task<E, A>, function: F) -> Task<E, B>
    where
        A: Portable,
        B: Portable,
        F: Fn(A) -> Task<E, B> + Portable,
    {
        fa.chain(function)
    }
}
