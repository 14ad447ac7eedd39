//! Benchmark for context composition: chain depth across contexts.
//!
//! Measures how the cost of `chain` grows with the length of a pipeline for
//! the eager contexts, the closure-based contexts and Task.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use contextual::effect::{OptionT, Reader, State, Task, TaskKind, Validation, Writer};
use contextual::typeclass::Sum;

const DEPTHS: [usize; 3] = [1, 10, 100];

// =============================================================================
// Eager contexts
// =============================================================================

fn benchmark_eager_chain(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("eager_chain");

    for depth in DEPTHS {
        group.bench_with_input(BenchmarkId::new("option", depth), &depth, |bencher, &depth| {
            bencher.iter(|| {
                let result = (0..depth)
                    .fold(Some(black_box(0_u64)), |acc, _| acc.and_then(|x| x.checked_add(1)));
                black_box(result)
            });
        });

        group.bench_with_input(BenchmarkId::new("writer", depth), &depth, |bencher, &depth| {
            bencher.iter(|| {
                let result = (0..depth).fold(Writer::new(black_box(0_u64), Sum(0_u64)), |acc, _| {
                    acc.chain(|x| Writer::new(x + 1, Sum(1)))
                });
                black_box(result.run())
            });
        });

        group.bench_with_input(BenchmarkId::new("validation", depth), &depth, |bencher, &depth| {
            bencher.iter(|| {
                let seed = Validation::<String, u64>::valid(black_box(0));
                let result = (0..depth)
                    .fold(seed, |acc, _| acc.map2(Validation::valid(1), |a, b| a + b));
                black_box(result)
            });
        });
    }

    group.finish();
}

// =============================================================================
// Closure-based contexts
// =============================================================================

fn benchmark_deferred_chain(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("deferred_chain");

    for depth in DEPTHS {
        group.bench_with_input(BenchmarkId::new("reader", depth), &depth, |bencher, &depth| {
            bencher.iter(|| {
                let reader = (0..depth).fold(Reader::<u64, u64>::ask(), |acc, _| {
                    acc.chain(|x| Reader::asks(move |r: u64| x + r))
                });
                black_box(reader.run(black_box(1)))
            });
        });

        group.bench_with_input(BenchmarkId::new("state", depth), &depth, |bencher, &depth| {
            bencher.iter(|| {
                let state = (0..depth).fold(State::<u64, ()>::of(()), |acc, _| {
                    acc.then(State::modify(|n: u64| n + 1))
                });
                black_box(state.run(black_box(0)))
            });
        });
    }

    group.finish();
}

// =============================================================================
// Task
// =============================================================================

fn benchmark_task_chain(criterion: &mut Criterion) {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()
        .expect("failed to build tokio runtime");
    let mut group = criterion.benchmark_group("task_chain");

    for depth in DEPTHS {
        group.bench_with_input(BenchmarkId::new("task", depth), &depth, |bencher, &depth| {
            bencher.to_async(&runtime).iter(|| async move {
                let task = (0..depth)
                    .fold(Task::<String, u64>::of(0), |acc, _| acc.chain(|x| Task::of(x + 1)));
                black_box(task.run().await)
            });
        });

        let id = BenchmarkId::new("option_over_task", depth);
        group.bench_with_input(id, &depth, |bencher, &depth| {
            bencher.to_async(&runtime).iter(|| async move {
                let stack = (0..depth).fold(OptionT::<TaskKind<String>, u64>::of(0), |acc, _| {
                    acc.chain(|x| OptionT::of(x + 1))
                });
                black_box(stack.run().run().await)
            });
        });

        group.bench_with_input(BenchmarkId::new("task_retry", depth), &depth, |bencher, &depth| {
            bencher.to_async(&runtime).iter(|| async move {
                let task = (0..depth)
                    .fold(Task::<String, u64>::of(0), |acc, _| acc.map(|x| x + 1))
                    .retry(3);
                black_box(task.run().await)
            });
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_eager_chain, benchmark_deferred_chain, benchmark_task_chain);
criterion_main!(benches);
