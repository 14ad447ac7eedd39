#![cfg(feature = "async")]
//! Tests for `ReaderT` over Option and Task.

use contextual::effect::{OptionKind, ReaderT, ReaderTKind, Task, TaskKind};
use contextual::typeclass::Applicative;
use rstest::rstest;

#[derive(Debug, Clone, PartialEq)]
struct Settings {
    region: String,
    replicas: u8,
}

fn settings() -> Settings {
    Settings {
        region: "eu-west".to_string(),
        replicas: 3,
    }
}

fn replica(index: u8) -> ReaderT<Settings, OptionKind, String> {
    ReaderT::new(move |settings: Settings| {
        (index < settings.replicas).then(|| format!("{}-{index}", settings.region))
    })
}

#[rstest]
#[case(0, Some("eu-west-0".to_string()))]
#[case(2, Some("eu-west-2".to_string()))]
#[case(3, None)]
fn option_inner_reports_absence(#[case] index: u8, #[case] expected: Option<String>) {
    assert_eq!(replica(index).run(settings()), expected);
}

#[rstest]
fn chain_stops_on_absent_step() {
    let program =
        replica(0).chain(|first| replica(5).map(move |second| format!("{first},{second}")));
    assert_eq!(program.run(settings()), None);
}

#[rstest]
fn local_changes_only_the_wrapped_step() {
    let widen = |settings: Settings| Settings { replicas: 10, ..settings };
    let widened = ReaderT::local(widen, replica(5));
    let program = widened.chain(|wide| replica(5).map(move |narrow| (wide.clone(), narrow)));
    assert_eq!(program.run(settings()), None);
    assert_eq!(
        ReaderT::local(widen, replica(5)).run(settings()),
        Some("eu-west-5".to_string())
    );
}

#[rstest]
fn witness_apply_reads_one_environment() {
    let prefix: ReaderT<Settings, OptionKind, _> =
        ReaderT::asks(|settings: Settings| {
            move |name: String| format!("{}/{name}", settings.region)
        });
    let name: ReaderT<Settings, OptionKind, String> = replica(1);
    let applied = ReaderTKind::<Settings, OptionKind>::apply(prefix, name);
    assert_eq!(applied.run(settings()), Some("eu-west/eu-west-1".to_string()));
}

#[rstest]
#[tokio::test]
async fn task_inner_defers_work_until_run() {
    let lookup: ReaderT<Settings, TaskKind<String>, u8> =
        ReaderT::new(|settings: Settings| Task::from_fn(move || Ok(settings.replicas)));
    let program = lookup.chain(|replicas| ReaderT::asks(move |settings: Settings| {
        format!("{replicas} replicas in {}", settings.region)
    }));
    let task = program.run(settings());
    assert_eq!(task.run().await, Ok("3 replicas in eu-west".to_string()));
}
