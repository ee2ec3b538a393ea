// Integration tests for the graph traversals and Dijkstra

use algotrace::algorithms::graph::{bfs, dfs, dijkstra};
use algotrace::data::grid_graph;
use algotrace::step::{Aux, Step, StepKind};
use algotrace::structures::graph::Graph;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn diamond() -> Graph {
    let mut graph = Graph::new(false, false);
    for id in ["0", "1", "2", "3"] {
        graph.add_node(id, id, 0.0, 0.0);
    }
    graph.add_edge("0", "1", 1);
    graph.add_edge("0", "2", 1);
    graph.add_edge("1", "3", 1);
    graph.add_edge("2", "3", 1);
    graph
}

fn triangle() -> Graph {
    let mut graph = Graph::new(true, true);
    for id in ["0", "1", "2"] {
        graph.add_node(id, id, 0.0, 0.0);
    }
    graph.add_edge("0", "1", 4);
    graph.add_edge("0", "2", 1);
    graph.add_edge("2", "1", 1);
    graph
}

#[test]
fn test_bfs_diamond_order() {
    let mut steps: Vec<Step> = Vec::new();
    assert_eq!(bfs(&diamond(), "0", &mut steps), vec!["0", "1", "2", "3"]);
    assert_eq!(steps.first().map(|s| s.kind), Some(StepKind::Highlight));
    assert_eq!(steps.last().map(|s| s.kind), Some(StepKind::Sorted));
}

#[test]
fn test_dfs_diamond_order() {
    let mut steps: Vec<Step> = Vec::new();
    assert_eq!(dfs(&diamond(), "0", &mut steps), vec!["0", "1", "3", "2"]);
}

#[test]
fn test_dijkstra_scenario() {
    let mut steps: Vec<Step> = Vec::new();
    let paths = dijkstra(&triangle(), "0", Some("1"), &mut steps);

    assert_eq!(paths.distances.get("0"), Some(&Some(0)));
    assert_eq!(paths.distances.get("1"), Some(&Some(2)));
    assert_eq!(paths.distances.get("2"), Some(&Some(1)));
    assert_eq!(
        paths.path,
        Some(vec!["0".to_string(), "2".to_string(), "1".to_string()])
    );

    // Every distance update carries the whole table
    assert!(steps
        .iter()
        .filter(|s| s.kind == StepKind::UpdateDistances)
        .all(|s| matches!(&s.aux, Some(Aux::Distances { distances, .. }) if distances.len() == 3)));
}

#[test]
fn test_unreachable_target_has_no_path() {
    let mut graph = triangle();
    graph.add_node("9", "9", 0.0, 0.0);
    let paths = dijkstra(&graph, "0", Some("9"), &mut ());
    assert_eq!(paths.distances.get("9"), Some(&None));
    assert!(paths.path.is_none());
}

#[test]
fn test_missing_start_is_rejected() {
    let graph = diamond();
    for run in [bfs::<Vec<Step>>, dfs::<Vec<Step>>] {
        let mut steps: Vec<Step> = Vec::new();
        assert!(run(&graph, "42", &mut steps).is_empty());
        assert_eq!(steps.len(), 1);
        assert!(steps[0].rejected);
    }
}

#[test]
fn test_traversals_reach_whole_grid() {
    let graph = grid_graph(&mut StdRng::seed_from_u64(42), false, true);
    assert_eq!(bfs(&graph, "0", &mut ()).len(), 16);
    assert_eq!(dfs(&graph, "0", &mut ()).len(), 16);

    let paths = dijkstra(&graph, "0", Some("15"), &mut ());
    let path = paths.path.unwrap();
    assert_eq!(path.first().map(String::as_str), Some("0"));
    assert_eq!(path.last().map(String::as_str), Some("15"));
}
