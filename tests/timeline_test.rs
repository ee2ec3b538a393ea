// Integration tests for snapshot timelines and whole sessions

use algotrace::algorithms::{GraphAlgorithm, SortAlgorithm};
use algotrace::cli::{Command, HeapOp, ListOp, QueueOp};
use algotrace::config::Config;
use algotrace::data::ArrayShape;
use algotrace::errors::Error;
use algotrace::session::{Scene, Session};

fn config(data: &[i64]) -> Config {
    Config {
        data: Some(data.to_vec()),
        ..Config::default()
    }
}

#[test]
fn test_tiny_budget_truncates_but_keeps_steps() {
    let config = Config {
        snapshot_limit: 64,
        ..config(&[9, 8, 7, 6, 5, 4, 3, 2, 1])
    };
    let command = Command::Sort {
        algorithm: SortAlgorithm::Insertion,
        shape: ArrayShape::Random,
    };
    let session = Session::build(&config, &command).unwrap();

    assert!(matches!(
        session.scene.check(),
        Err(Error::SnapshotLimitExceeded { limit: 64, .. })
    ));
    let Scene::Bars { timeline, .. } = &session.scene else {
        panic!("sorts are drawn as bars");
    };
    // The seed alone is over budget, so only frame 0 survives
    assert_eq!(timeline.captured(), 1);
    assert!(timeline.len() > 10);
    assert_eq!(timeline.state_at(timeline.len()), timeline.initial());
}

#[test]
fn test_session_timeline_starts_from_seed() {
    let command = Command::Queue {
        op: QueueOp::Dequeue,
    };
    let session = Session::build(&config(&[4, 5, 6]), &command).unwrap();
    assert_eq!(session.outcome, "Some(4)");

    let Scene::Bars { timeline, .. } = &session.scene else {
        panic!("queues are drawn as bars");
    };
    assert_eq!(timeline.initial(), &vec![4, 5, 6]);
    assert_eq!(timeline.state_at(timeline.len()), &vec![5, 6]);
}

#[test]
fn test_heap_session_seeds_a_valid_heap() {
    let command = Command::Heap { op: HeapOp::Peek };
    let session = Session::build(&config(&[9, 3, 7, 1]), &command).unwrap();
    assert_eq!(session.outcome, "Some(1)");
}

#[test]
fn test_list_session_records_every_frame() {
    let command = Command::List {
        op: ListOp::DeleteTail,
    };
    let session = Session::build(&config(&[1, 2, 3]), &command).unwrap();
    let Scene::List(timeline) = &session.scene else {
        panic!("lists are drawn as chains");
    };
    assert_eq!(timeline.captured(), timeline.len() + 1);
    assert_eq!(timeline.state_at(timeline.len()).values(), vec![1, 2]);
    assert!(session.scene.check().is_ok());
}

#[test]
fn test_json_output_is_a_step_array() {
    let command = Command::Graph {
        algorithm: GraphAlgorithm::Dfs,
        start: "0".into(),
        target: None,
        directed: true,
        weighted: false,
    };
    let session = Session::build(&Config::default(), &command).unwrap();
    let json: serde_json::Value = serde_json::from_str(&session.to_json().unwrap()).unwrap();

    let steps = json.as_array().unwrap();
    assert_eq!(steps.len(), session.steps().len());
    assert_eq!(steps[0]["kind"], "highlight");
    assert!(steps.iter().all(|s| s["message"].is_string()));
}
