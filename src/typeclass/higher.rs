//! Higher-Kinded Type emulation through witness types and Generic Associated Types.
//!
//! Rust cannot abstract over a type constructor such as `Option<_>` directly.
//! Instead every context in this crate has a zero-sized *witness* type (for
//! example [`OptionKind`](crate::effect::OptionKind)) that names the
//! constructor through the generic associated type [`TypeConstructor::Of`].
//! The contract traits ([`Functor`](super::Functor),
//! [`Applicative`](super::Applicative), [`Monad`](super::Monad)) are
//! implemented on the witness, so the witness doubles as the capability record
//! that generic code (the transformer layer, the law harness) is parameterized
//! over.
//!
//! # Example
//!
//! ```rust
//! use contextual::typeclass::{TypeConstructor, Identity, IdentityKind};
//!
//! fn wrap_twice<K: TypeConstructor>(value: K::Of<K::Of<i32>>) -> K::Of<K::Of<i32>> {
//!     value
//! }
//!
//! let nested: Identity<Identity<i32>> = wrap_twice::<IdentityKind>(Identity(Identity(1)));
//! assert_eq!(nested, Identity(Identity(1)));
//! ```

/// Values that may travel through any context.
///
/// Deferred contexts (Reader, State, Task) store their bodies behind
/// `Arc<dyn Fn + Send + Sync>` so that they can be embedded in one another and
/// moved across task boundaries. Every value and function that passes through
/// a generic contract therefore has to be `Send + Sync + 'static`.
pub trait Portable: Send + Sync + 'static {}

impl<T: Send + Sync + 'static> Portable for T {}

/// A witness for a type constructor.
///
/// # Laws
///
/// The witness carries no data. `Of<A>` must itself be [`Portable`] whenever
/// `A` is, so that contexts nest freely.
///
/// # Example
///
/// ```rust
/// use contextual::effect::OptionKind;
/// use contextual::typeclass::TypeConstructor;
///
/// let value: <OptionKind as TypeConstructor>::Of<i32> = Some(3);
/// assert_eq!(value, Some(3));
/// ```
pub trait TypeConstructor: Portable {
    /// The constructor applied to `A`.
    type Of<A: Portable>: Portable;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::typeclass::{Identity, IdentityKind};

    #[test]
    fn identity_of_is_identity_wrapper() {
        fn assert_of<K: TypeConstructor<Of<i32> = Identity<i32>>>() {}
        assert_of::<IdentityKind>();
    }

    #[test]
    fn portable_covers_plain_values() {
        fn assert_portable<T: Portable>() {}
        assert_portable::<i32>();
        assert_portable::<String>();
        assert_portable::<Vec<Option<u8>>>();
    }
}
