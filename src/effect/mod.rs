//! Concrete contexts and monad transformers.
//!
//! Every context here implements the contracts from [`crate::typeclass`]
//! through a zero-sized witness (`OptionKind`, `WriterKind<W>`, `TaskKind<E>`,
//! ...), so generic code written against [`Monad`](crate::typeclass::Monad)
//! works with all of them.
//!
//! # Contexts
//!
//! | Context                  | Models                                    | Witness            |
//! |--------------------------|-------------------------------------------|--------------------|
//! | `Option<T>`              | presence or absence                       | [`OptionKind`]     |
//! | `Result<T, E>`           | success or failure with detail            | [`ResultKind`]     |
//! | [`Validation<E, T>`]     | success or every failure collected        | [`ValidationKind`] |
//! | [`Writer<W, T>`]         | a value with accumulated output           | [`WriterKind`]     |
//! | [`Reader<R, T>`]         | a value computed from an environment      | [`ReaderKind`]     |
//! | [`State<S, T>`]          | a value computed while threading state    | [`StateKind`]      |
//! | [`Task<E, T>`]           | lazy asynchronous work                    | [`TaskKind`]       |
//!
//! `Validation` is an applicative only: its `apply` accumulates errors, which
//! no lawful `chain` could do, so it deliberately has no `Monad` witness.
//!
//! # Transformers
//!
//! [`TransformerStack`] (with the [`OptionT`] and [`ResultT`] aliases) puts a
//! short-circuiting context inside any monad. [`ReaderT`] and [`StateT`] add
//! an environment or a state on top of any monad.
//!
//! ```rust
//! use contextual::effect::{ResultKind, StateT};
//!
//! type Machine<A> = StateT<Vec<i32>, ResultKind<String>, A>;
//!
//! fn push(value: i32) -> Machine<()> {
//!     StateT::modify(move |mut stack: Vec<i32>| {
//!         stack.push(value);
//!         stack
//!     })
//! }
//!
//! fn pop() -> Machine<i32> {
//!     StateT::new(|mut stack: Vec<i32>| match stack.pop() {
//!         Some(top) => Ok((top, stack)),
//!         None => Err("pop on empty stack".to_string()),
//!     })
//! }
//!
//! let add = pop().chain(|a| pop().chain(move |b| push(a + b)));
//! assert_eq!(push(2).then(push(3)).then(add).exec(vec![]), Ok(vec![5]));
//! assert_eq!(pop().run(vec![]), Err("pop on empty stack".to_string()));
//! ```

mod error;

pub use error::Panicked;

// =============================================================================
// Option, Result, Validation
// =============================================================================

pub mod option;
pub mod result;
mod validation;

pub use option::{OptionExt, OptionKind};
pub use result::{ResultExt, ResultKind};
pub use validation::{NonEmpty, Validation, ValidationKind};

// =============================================================================
// Writer, Reader, State
// =============================================================================

mod reader;
mod state;
mod writer;

pub use reader::{Reader, ReaderKind};
pub use state::{State, StateKind};
pub use writer::{Writer, WriterKind};

// =============================================================================
// Task
// =============================================================================

#[cfg(feature = "async")]
mod task;

#[cfg(feature = "async")]
pub use task::{
    Backoff, CancelToken, RetryPolicy, Settle, Task, TaskError, TaskHandle, TaskKind, TimeoutError,
};

// =============================================================================
// Monad Transformers
// =============================================================================

mod reader_transformer;
mod state_transformer;
mod transformer_stack;

pub use reader_transformer::{ReaderT, ReaderTKind};
pub use state_transformer::{StateT, StateTKind};
pub use transformer_stack::{OptionT, ResultT, ShortCircuit, StackKind, TransformerStack};
