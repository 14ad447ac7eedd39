//! Capability contracts and the algebra they rely on.
//!
//! - [`Functor`]: `map` over a context
//! - [`Applicative`]: `of` and `apply` for independent contexts
//! - [`Monad`]: `chain` for dependent contexts
//! - [`Semigroup`] / [`Monoid`]: combinable values for logs and failure lists
//!
//! ## Higher-Kinded Types Emulation
//!
//! Rust does not have native higher-kinded types. Each context therefore has a
//! zero-sized witness type implementing [`TypeConstructor`] through a Generic
//! Associated Type, and the contracts are implemented on that witness. Generic
//! code such as the transformer layer takes the witness as a type parameter,
//! which is how a caller supplies the `of`/`map`/`chain` capability record.
//!
//! # Examples
//!
//! ```rust
//! use contextual::effect::OptionKind;
//! use contextual::typeclass::{Applicative, Monad};
//!
//! fn double_inside<M: Monad>(value: M::Of<i32>) -> M::Of<i32> {
//!     M::chain::<i32, i32, _>(value, |x| M::of(x * 2))
//! }
//!
//! assert_eq!(double_inside::<OptionKind>(Some(21)), Some(42));
//! assert_eq!(double_inside::<OptionKind>(None), None);
//! ```

mod applicative;
mod functor;
mod higher;
mod identity;
mod monad;
mod monoid;
mod semigroup;
mod wrappers;

pub use applicative::Applicative;
pub use functor::Functor;
pub use higher::{Portable, TypeConstructor};
pub use identity::{Identity, IdentityKind};
pub use monad::Monad;
pub use monoid::{Monoid, One, Zero};
pub use semigroup::Semigroup;
pub use wrappers::{Product, Sum};
