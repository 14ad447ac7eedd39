#![cfg(feature = "async")]
//! Tests for `TransformerStack` over asynchronous and stateful inner monads.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};
use std::time::Duration;

use contextual::effect::{
    OptionKind, OptionT, ResultT, StackKind, State, StateKind, Task, TaskError, TaskKind,
};
use contextual::typeclass::{Applicative, Functor};
use rstest::rstest;

type Lookup<A> = OptionT<TaskKind<String>, A>;

fn find_user(id: u32) -> Lookup<String> {
    OptionT::new(Task::from_fn(move || {
        Ok(match id {
            1 => Some("ada".to_string()),
            2 => Some("grace".to_string()),
            _ => None,
        })
    }))
}

#[rstest]
#[tokio::test]
async fn option_over_task_short_circuits_on_none() {
    let invoked = Arc::new(AtomicBool::new(false));
    let flag = Arc::clone(&invoked);
    let missing: Lookup<i32> = OptionT::new(Task::from_fn(|| Ok(None)));

    let program = missing.chain(move |x| {
        flag.store(true, Ordering::SeqCst);
        Lookup::of(x * 2)
    });

    assert_eq!(program.run().run().await, Ok(None));
    assert!(!invoked.load(Ordering::SeqCst));
}

#[rstest]
#[case(1, Some("ADA".to_string()))]
#[case(2, Some("GRACE".to_string()))]
#[case(3, None)]
#[tokio::test]
async fn option_over_task_threads_present_values(
    #[case] id: u32,
    #[case] expected: Option<String>,
) {
    let program = find_user(id).map(|name| name.to_uppercase());
    assert_eq!(program.run().run().await, Ok(expected));
}

#[rstest]
#[tokio::test]
async fn inner_task_failure_is_not_swallowed() {
    let broken: Lookup<i32> = OptionT::lift_inner(Task::fail("connection reset".to_string()));
    let program = broken.chain(|x| Lookup::of(x + 1));
    assert_eq!(
        program.run().run().await,
        Err(TaskError::Failed("connection reset".to_string()))
    );
}

#[rstest]
#[tokio::test]
async fn inner_effects_run_once_per_run() {
    let calls = Arc::new(AtomicU32::new(0));
    let counter = Arc::clone(&calls);
    let counted: Lookup<u32> = OptionT::lift_inner(Task::from_fn(move || {
        Ok(counter.fetch_add(1, Ordering::SeqCst))
    }));
    let stack = counted.chain(|n| Lookup::of(n + 100));

    assert_eq!(stack.clone().run().run().await, Ok(Some(100)));
    assert_eq!(stack.run().run().await, Ok(Some(101)));
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}

#[rstest]
#[tokio::test(start_paused = true)]
async fn task_controls_still_apply_to_the_inner_layer() {
    let slow: Lookup<i32> = OptionT::lift_inner(Task::delay(Duration::from_secs(1), 5));
    let bounded: Lookup<i32> = OptionT::new(slow.run().timeout(Duration::from_millis(10)));
    assert!(matches!(
        bounded.run().run().await,
        Err(TaskError::TimedOut(_))
    ));
}

#[rstest]
#[tokio::test]
async fn result_over_task_recovers_from_outer_failure() {
    type Fetch<A> = ResultT<String, TaskKind<String>, A>;
    let failing: Fetch<u32> = Fetch::fail("not cached".to_string());
    let recovered =
        failing.recover(|reason| Fetch::of(u32::try_from(reason.len()).unwrap_or(u32::MAX)));
    assert_eq!(recovered.run().run().await, Ok(Ok(10)));
}

#[rstest]
fn result_over_state_keeps_effects_before_failure() {
    type Step<A> = ResultT<String, StateKind<Vec<String>>, A>;
    let record = |entry: &'static str| {
        Step::lift_inner(State::modify(move |mut log: Vec<String>| {
            log.push(entry.to_string());
            log
        }))
    };
    let program = record("open")
        .then(Step::<()>::fail("disk full".to_string()))
        .then(record("close"));

    let (outcome, log) = program.run().run(Vec::new());
    assert_eq!(outcome, Err("disk full".to_string()));
    assert_eq!(log, vec!["open".to_string()]);
}

#[rstest]
#[tokio::test]
async fn witness_functions_work_through_the_stack() {
    type Lookups = StackKind<OptionKind, TaskKind<String>>;
    let join = |a: String, b: String| format!("{a}+{b}");
    let doubled = Lookups::map(find_user(1), |name: String| name.len() * 2);
    let paired = Lookups::map2(find_user(1), find_user(2), join);
    let missing = Lookups::map2(find_user(1), find_user(9), join);

    assert_eq!(doubled.run().run().await, Ok(Some(6)));
    assert_eq!(paired.run().run().await, Ok(Some("ada+grace".to_string())));
    assert_eq!(missing.run().run().await, Ok(None));
}
