#![cfg(feature = "effect")]
//! Property-based tests for Writer laws.
//!
//! ## Monad Laws
//! - Left Identity: of(a).chain(f) == f(a)
//! - Right Identity: m.chain(of) == m
//! - Associativity: m.chain(f).chain(g) == m.chain(|x| f(x).chain(g))
//!
//! ## Writer Laws
//! - Tell: tell(w1).then(tell(w2)) == tell(w1.combine(w2))

use contextual::effect::{Writer, WriterKind};
use contextual::laws::{check_functor_laws, check_monad_laws};
use contextual::typeclass::{Semigroup, Sum};
use proptest::prelude::*;

fn entries() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-z]{1,6}", 0..4)
}

proptest! {
    #[test]
    fn prop_writer_functor_laws(value in -1000i32..1000, log in entries()) {
        let writer: Writer<Vec<String>, i32> = Writer::new(value, log);
        let result = check_functor_laws::<WriterKind<Vec<String>>, _, _, _, _, _>(
            writer,
            |x: i32| x.wrapping_add(7),
            |x: i32| x.wrapping_mul(3),
            Writer::run,
        );
        prop_assert_eq!(result, Ok(()));
    }

    #[test]
    fn prop_writer_monad_laws(value in -1000i32..1000, seed in -1000i32..1000, log in entries()) {
        let f = |x: i32| Writer::new(x.wrapping_add(1), vec![format!("f{x}")]);
        let g = |x: i32| Writer::new(x.wrapping_mul(2), vec![format!("g{x}")]);
        let result = check_monad_laws::<WriterKind<Vec<String>>, _, _, _, _, _>(
            value,
            Writer::new(seed, log),
            f,
            g,
            Writer::run,
        );
        prop_assert_eq!(result, Ok(()));
    }

    #[test]
    fn prop_writer_monad_laws_with_sum(value in any::<i16>(), total in any::<i16>()) {
        let f = |x: i64| Writer::new(x + 1, Sum(1_i64));
        let g = |x: i64| Writer::new(x - 1, Sum(-1_i64));
        let result = check_monad_laws::<WriterKind<Sum<i64>>, _, _, _, _, _>(
            i64::from(value),
            Writer::new(i64::from(value), Sum(i64::from(total))),
            f,
            g,
            Writer::run,
        );
        prop_assert_eq!(result, Ok(()));
    }

    #[test]
    fn prop_tell_combines(first in entries(), second in entries()) {
        let separate = Writer::tell(first.clone()).then(Writer::tell(second.clone()));
        let combined = Writer::tell(first.combine(second));
        prop_assert_eq!(separate.run(), combined.run());
    }
}
