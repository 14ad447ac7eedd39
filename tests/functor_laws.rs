#![cfg(feature = "effect")]
//! Property-based tests for the Functor and Monad laws of Option, Result and
//! Validation.
//!
//! ## Functor Laws
//! - Identity: fa.map(|x| x) == fa
//! - Composition: fa.map(f).map(g) == fa.map(|x| g(f(x)))
//!
//! ## Monad Laws
//! - Left Identity: of(a).chain(f) == f(a)
//! - Right Identity: m.chain(of) == m
//! - Associativity: m.chain(f).chain(g) == m.chain(|x| f(x).chain(g))

use contextual::effect::{OptionKind, ResultKind, Validation, ValidationKind};
use contextual::laws::{check_functor_laws, check_monad_laws};
use proptest::prelude::*;

fn validation() -> impl Strategy<Value = Validation<String, i32>> {
    prop_oneof![
        any::<i32>().prop_map(Validation::valid),
        prop::collection::vec("[a-z]{1,5}", 1..4)
            .prop_map(|errors| {
                Validation::invalid_all(errors).expect("generated at least one error")
            }),
    ]
}

// =============================================================================
// Option
// =============================================================================

proptest! {
    #[test]
    fn prop_option_functor_laws(value in any::<Option<i32>>()) {
        let result = check_functor_laws::<OptionKind, _, _, _, _, _>(
            value,
            |x: i32| x.wrapping_add(1),
            |x: i32| x.wrapping_mul(2),
            |m| m,
        );
        prop_assert_eq!(result, Ok(()));
    }

    #[test]
    fn prop_option_monad_laws(value in any::<i32>(), m in any::<Option<i32>>()) {
        let halve = |x: i32| if x % 2 == 0 { Some(x / 2) } else { None };
        let decrement = |x: i32| x.checked_sub(1);
        let result =
            check_monad_laws::<OptionKind, _, _, _, _, _>(value, m, halve, decrement, |m| m);
        prop_assert_eq!(result, Ok(()));
    }
}

// =============================================================================
// Result
// =============================================================================

proptest! {
    #[test]
    fn prop_result_functor_laws(value in any::<Result<i32, String>>()) {
        let result = check_functor_laws::<ResultKind<String>, _, _, _, _, _>(
            value,
            |x: i32| x.wrapping_sub(7),
            |x: i32| x.wrapping_mul(3),
            |m| m,
        );
        prop_assert_eq!(result, Ok(()));
    }

    #[test]
    fn prop_result_monad_laws(value in any::<i32>(), m in any::<Result<i32, String>>()) {
        let divide = |x: i32| if x == 0 { Err("div0".to_string()) } else { Ok(100 / x) };
        let negate = |x: i32| x.checked_neg().ok_or_else(|| "overflow".to_string());
        let result =
            check_monad_laws::<ResultKind<String>, _, _, _, _, _>(value, m, divide, negate, |m| m);
        prop_assert_eq!(result, Ok(()));
    }
}

// =============================================================================
// Validation
// =============================================================================

proptest! {
    #[test]
    fn prop_validation_functor_laws(value in validation()) {
        let result = check_functor_laws::<ValidationKind<String>, _, _, _, _, _>(
            value,
            |x: i32| x.wrapping_add(11),
            |x: i32| x.wrapping_neg(),
            |m| m,
        );
        prop_assert_eq!(result, Ok(()));
    }
}
