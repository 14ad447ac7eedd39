#![cfg(feature = "async")]
//! End-to-end scenarios combining several contexts through the prelude.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use contextual::prelude::*;
use rstest::rstest;

// =============================================================================
// Option and Result
// =============================================================================

#[rstest]
fn option_pipeline_formats_half() {
    let halve = |x: i32| if x / 2 == 0 { None } else { Some(x / 2) };
    let result = Some(16).and_then(halve).map(|x| format!("{:.2}", f64::from(x)));
    assert_eq!(result, Some("8.00".to_string()));

    let via_witness = OptionKind::chain(OptionKind::chain(Some(16), halve), |x: i32| {
        Some(format!("{:.2}", f64::from(x)))
    });
    assert_eq!(via_witness, Some("8.00".to_string()));
}

#[rstest]
#[case(10, Ok(10))]
#[case(0, Err("div0".to_string()))]
fn result_pipeline_divides_hundred(#[case] input: i32, #[case] expected: Result<i32, String>) {
    let divide = |x: i32| if x == 0 { Err("div0".to_string()) } else { Ok(100 / x) };
    assert_eq!(ResultKind::<String>::chain(Ok(input), divide), expected);
}

// =============================================================================
// Validation and Writer
// =============================================================================

#[rstest]
fn validation_collects_both_form_errors() {
    let form = Validation::combine3(
        Validation::<String, String>::invalid("bad name".to_string()),
        Validation::<String, String>::invalid("bad email".to_string()),
        Validation::valid(30_u32),
        |name, email, age| (name, email, age),
    );
    assert_eq!(
        form.errors(),
        Some(&["bad name".to_string(), "bad email".to_string()][..])
    );
}

#[rstest]
fn writer_log_follows_call_order() {
    let program = Writer::tell(vec!["a"])
        .then(Writer::tell(vec!["b", "c"]))
        .then(Writer::tell(vec!["d"]));
    assert_eq!(program.run().1, vec!["a", "b", "c", "d"]);
}

// =============================================================================
// State
// =============================================================================

#[rstest]
fn state_stack_machine_yields_sixteen() {
    type Machine<A> = State<Vec<i32>, A>;

    let push = |value: i32| -> Machine<()> {
        State::modify(move |mut stack: Vec<i32>| {
            stack.push(value);
            stack
        })
    };
    let apply = |operation: fn(i32, i32) -> i32| -> Machine<()> {
        State::modify(move |mut stack: Vec<i32>| {
            if let (Some(right), Some(left)) = (stack.pop(), stack.pop()) {
                stack.push(operation(left, right));
            }
            stack
        })
    };
    let pop: Machine<Option<i32>> = State::new(|mut stack: Vec<i32>| (stack.pop(), stack));

    let program = push(3)
        .then(push(5))
        .then(apply(|a, b| a + b))
        .then(push(2))
        .then(apply(|a, b| a * b))
        .then(pop);

    assert_eq!(program.run(Vec::new()), (Some(16), Vec::new()));
}

// =============================================================================
// Reader feeding a Task
// =============================================================================

#[derive(Debug, Clone)]
struct Services {
    greeting: String,
}

#[rstest]
#[tokio::test]
async fn reader_builds_task_lazily() {
    let started = Arc::new(AtomicBool::new(false));
    let flag = Arc::clone(&started);
    let build: Reader<Services, Task<String, String>> = Reader::asks(move |services: Services| {
        let flag = Arc::clone(&flag);
        Task::from_fn(move || {
            flag.store(true, Ordering::SeqCst);
            Ok(services.greeting.clone())
        })
    });

    let task = build.run(Services {
        greeting: "hello".to_string(),
    });
    assert!(!started.load(Ordering::SeqCst));
    assert_eq!(task.run().await, Ok("hello".to_string()));
    assert!(started.load(Ordering::SeqCst));
}

// =============================================================================
// Transformer stack
// =============================================================================

#[rstest]
#[tokio::test]
async fn option_over_task_stops_at_none() {
    let invoked = Arc::new(AtomicBool::new(false));
    let flag = Arc::clone(&invoked);
    let lookup: OptionT<TaskKind<String>, i32> = OptionT::new(Task::of(None));
    let program = lookup.chain(move |x| {
        flag.store(true, Ordering::SeqCst);
        OptionT::of(x + 1)
    });
    assert_eq!(program.run().run().await, Ok(None));
    assert!(!invoked.load(Ordering::SeqCst));
}
