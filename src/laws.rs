//! Executable law checks for witnesses and monoids.
//!
//! Each checker builds both sides of every law from the samples it is given,
//! runs them through `observe`, and reports the first mismatch as a
//! [`LawViolation`]. `observe` is how deferred contexts become comparable:
//! `|reader| reader.run(env)` for a Reader,
//! `|task| block_on(task.run())` for a Task, `|x| x` for eager contexts.
//!
//! The checkers are meant to be driven from property tests:
//!
//! ```rust
//! use contextual::effect::OptionKind;
//! use contextual::laws::check_monad_laws;
//!
//! let halve = |x: i32| if x % 2 == 0 { Some(x / 2) } else { None };
//! let decrement = |x: i32| x.checked_sub(1);
//!
//! for value in [-4, 0, 7, 12] {
//!     check_monad_laws::<OptionKind, _, _, _, _, _>(value, Some(value), halve, decrement, |m| m)
//!         .expect("Option is a lawful monad");
//! }
//! ```

use std::fmt::Debug;

use crate::typeclass::{Functor, Monad, Monoid, Portable};

/// Both sides of a law evaluated to different observations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{law} law violated: left = {left}, right = {right}")]
pub struct LawViolation {
    /// Name of the law.
    pub law: &'static str,
    /// Debug rendering of the left-hand observation.
    pub left: String,
    /// Debug rendering of the right-hand observation.
    pub right: String,
}

fn compare<O>(law: &'static str, left: O, right: O) -> Result<(), LawViolation>
where
    O: PartialEq + Debug,
{
    if left == right {
        Ok(())
    } else {
        Err(LawViolation {
            law,
            left: format!("{left:?}"),
            right: format!("{right:?}"),
        })
    }
}

/// Checks functor identity and composition for `M` on the sample `fa`.
///
/// `f` and `g` are endomorphisms so that a single `observe` covers every side.
pub fn check_functor_laws<M, A, F, G, Observe, O>(
    fa: M::Of<A>,
    f: F,
    g: G,
    observe: Observe,
) -> Result<(), LawViolation>
where
    M: Functor,
    A: Portable,
    M::Of<A>: Clone,
    F: Fn(A) -> A + Portable + Clone,
    G: Fn(A) -> A + Portable + Clone,
    Observe: Fn(M::Of<A>) -> O,
    O: PartialEq + Debug,
{
    compare(
        "functor identity",
        observe(M::map::<A, A, _>(fa.clone(), |value| value)),
        observe(fa.clone()),
    )?;

    let composed_f = f.clone();
    let composed_g = g.clone();
    compare(
        "functor composition",
        observe(M::map::<A, A, _>(M::map::<A, A, _>(fa.clone(), f), g)),
        observe(M::map::<A, A, _>(fa, move |value| composed_g(composed_f(value)))),
    )
}

/// Checks left identity, right identity and associativity for `M`.
///
/// `value` feeds the left identity law, `ma` the other two.
pub fn check_monad_laws<M, A, F, G, Observe, O>(
    value: A,
    ma: M::Of<A>,
    f: F,
    g: G,
    observe: Observe,
) -> Result<(), LawViolation>
where
    M: Monad,
    A: Portable + Clone,
    M::Of<A>: Clone,
    F: Fn(A) -> M::Of<A> + Portable + Clone,
    G: Fn(A) -> M::Of<A> + Portable + Clone,
    Observe: Fn(M::Of<A>) -> O,
    O: PartialEq + Debug,
{
    compare(
        "monad left identity",
        observe(M::chain::<A, A, _>(M::of(value.clone()), f.clone())),
        observe(f(value)),
    )?;

    compare(
        "monad right identity",
        observe(M::chain::<A, A, _>(ma.clone(), M::of::<A>)),
        observe(ma.clone()),
    )?;

    let nested_f = f.clone();
    let nested_g = g.clone();
    compare(
        "monad associativity",
        observe(M::chain::<A, A, _>(M::chain::<A, A, _>(ma.clone(), f), g)),
        observe(M::chain::<A, A, _>(ma, move |x| {
            M::chain::<A, A, _>(nested_f(x), nested_g.clone())
        })),
    )
}

/// Checks associativity and both identities for a monoid.
pub fn check_monoid_laws<T>(a: T, b: T, c: T) -> Result<(), LawViolation>
where
    T: Monoid + Clone + PartialEq + Debug,
{
    compare(
        "semigroup associativity",
        a.clone().combine(b.clone()).combine(c.clone()),
        a.clone().combine(b.combine(c)),
    )?;
    compare("monoid left identity", T::empty().combine(a.clone()), a.clone())?;
    compare("monoid right identity", a.clone().combine(T::empty()), a)
}
