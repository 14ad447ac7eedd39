#![cfg(feature = "effect")]
//! Property-based tests for monad transformer laws.
//!
//! ## Monad Laws
//! - Left Identity: of(a).chain(f) == f(a)
//! - Right Identity: m.chain(of) == m
//! - Associativity: m.chain(f).chain(g) == m.chain(|x| f(x).chain(g))
//!
//! ## Lift Laws
//! - Lift Identity: lift(inner::of(a)) == of(a)
//! - Short Circuit: fail(e).chain(f) == fail(e)

use contextual::effect::{
    OptionKind, OptionT, ReaderT, ReaderTKind, ResultKind, ResultT, StackKind, State, StateKind,
    StateT, StateTKind,
};
use contextual::laws::check_monad_laws;
use contextual::typeclass::{Applicative, Identity, IdentityKind};
use proptest::prelude::*;

// =============================================================================
// TransformerStack
// =============================================================================

proptest! {
    #[test]
    fn prop_option_stack_monad_laws(value in -1000i32..1000, seed in any::<Option<i16>>()) {
        let m: OptionT<IdentityKind, i32> = OptionT::lift_outer(seed.map(i32::from));
        let f = |x: i32| if x % 2 == 0 { OptionT::of(x / 2) } else { OptionT::none() };
        let g = |x: i32| OptionT::of(x.wrapping_add(3));
        let result = check_monad_laws::<StackKind<OptionKind, IdentityKind>, _, _, _, _, _>(
            value,
            m,
            f,
            g,
            |m: OptionT<IdentityKind, i32>| m.run(),
        );
        prop_assert_eq!(result, Ok(()));
    }

    #[test]
    fn prop_result_over_state_monad_laws(value in -100i32..100, initial in 0u32..100) {
        type Step<A> = ResultT<String, StateKind<u32>, A>;
        let m: Step<i32> =
            Step::lift_inner(State::new(|n: u32| (i32::try_from(n).unwrap_or(0), n + 1)));
        let f = |x: i32| {
            if x < 0 {
                Step::fail(format!("negative {x}"))
            } else {
                Step::lift_inner(State::new(move |n: u32| (x + 1, n * 2)))
            }
        };
        let g = |x: i32| Step::lift_inner(State::new(move |n: u32| (x * 3, n + 7)));
        type Witness = StackKind<ResultKind<String>, StateKind<u32>>;
        let result = check_monad_laws::<Witness, _, _, _, _, _>(
            value,
            m,
            f,
            g,
            move |m: Step<i32>| m.run().run(initial),
        );
        prop_assert_eq!(result, Ok(()));
    }

    #[test]
    fn prop_lift_inner_identity(value in any::<i32>()) {
        let lifted: OptionT<IdentityKind, i32> = OptionT::lift_inner(IdentityKind::of(value));
        let direct: OptionT<IdentityKind, i32> = OptionT::of(value);
        prop_assert_eq!(lifted, direct);
    }

    #[test]
    fn prop_short_circuit(error in "[a-z]{1,8}", value in any::<i32>()) {
        type Checked<A> = ResultT<String, IdentityKind, A>;
        let chained = Checked::<i32>::fail(error.clone()).chain(move |_| Checked::of(value));
        prop_assert_eq!(chained.run(), Identity(Err(error)));
    }
}

// =============================================================================
// StateT and ReaderT
// =============================================================================

proptest! {
    #[test]
    fn prop_state_transformer_monad_laws(value in -100i32..100, initial in -100i32..100) {
        type Step<A> = StateT<i32, OptionKind, A>;
        let m: Step<i32> = StateT::get();
        let f = |x: i32| -> Step<i32> {
            StateT::new(move |s: i32| if s == x { None } else { Some((x + s, s + 1)) })
        };
        let g = |x: i32| -> Step<i32> { StateT::new(move |s: i32| Some((x * 2, s - x))) };
        let result = check_monad_laws::<StateTKind<i32, OptionKind>, _, _, _, _, _>(
            value,
            m,
            f,
            g,
            move |m: Step<i32>| m.run(initial),
        );
        prop_assert_eq!(result, Ok(()));
    }

    #[test]
    fn prop_reader_transformer_monad_laws(value in -100i32..100, environment in -100i32..100) {
        type Step<A> = ReaderT<i32, ResultKind<String>, A>;
        let m: Step<i32> = ReaderT::ask();
        let f = |x: i32| -> Step<i32> {
            ReaderT::new(move |r: i32| {
                if r == x { Err(format!("collision at {r}")) } else { Ok(x - r) }
            })
        };
        let g = |x: i32| -> Step<i32> { ReaderT::new(move |r: i32| Ok(x * r)) };
        let result = check_monad_laws::<ReaderTKind<i32, ResultKind<String>>, _, _, _, _, _>(
            value,
            m,
            f,
            g,
            move |m: Step<i32>| m.run(environment),
        );
        prop_assert_eq!(result, Ok(()));
    }

    #[test]
    fn prop_state_transformer_lift_identity(value in any::<i32>(), initial in any::<u8>()) {
        let lifted: StateT<u8, OptionKind, i32> = StateT::lift(Some(value));
        let direct: StateT<u8, OptionKind, i32> = StateT::of(value);
        prop_assert_eq!(lifted.run(initial), direct.run(initial));
    }
}
