//! # contextual
//!
//! Context-wrapping values for Rust: absence, failure with detail,
//! accumulated validation errors, logging, environment access, state
//! threading and lazy asynchronous work, all composed through one
//! `map`/`chain` contract.
//!
//! ## Overview
//!
//! - **Type Classes**: [`Functor`](typeclass::Functor),
//!   [`Applicative`](typeclass::Applicative), [`Monad`](typeclass::Monad),
//!   [`Semigroup`](typeclass::Semigroup) and [`Monoid`](typeclass::Monoid),
//!   expressed through zero-sized witness types so generic code can be written
//!   once for every context.
//! - **Contexts**: `Option`, `Result`, [`Validation`](effect::Validation),
//!   [`Writer`](effect::Writer), [`Reader`](effect::Reader),
//!   [`State`](effect::State) and [`Task`](effect::Task).
//! - **Transformers**: [`TransformerStack`](effect::TransformerStack),
//!   [`ReaderT`](effect::ReaderT) and [`StateT`](effect::StateT).
//! - **Laws**: executable checks in [`laws`] for the contracts above.
//!
//! ## Feature Flags
//!
//! - `typeclass`: the contracts and the law checks
//! - `effect`: the synchronous contexts and the transformers
//! - `async`: `Task` and its runtime support (tokio, futures)
//! - `serde`: `Serialize`/`Deserialize` for data-shaped types
//! - `full`: everything
//!
//! ## Example
//!
//! ```rust
//! use contextual::prelude::*;
//!
//! fn parse(input: &str) -> Result<i32, String> {
//!     input.parse().map_err(|_| format!("not a number: {input}"))
//! }
//!
//! let validated = Validation::<String, i32>::from_result(parse("4"))
//!     .map2(Validation::from_result(parse("x")), |a, b| a + b)
//!     .map2(Validation::from_result(parse("y")), |a, b| a + b);
//!
//! assert_eq!(
//!     validated.errors(),
//!     Some(&["not a number: x".to_string(), "not a number: y".to_string()][..])
//! );
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// ```rust
/// use contextual::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "effect")]
    pub use crate::effect::*;
}

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "typeclass")]
pub mod laws;

#[cfg(feature = "effect")]
pub mod effect;
