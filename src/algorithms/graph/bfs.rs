use crate::step::{Recorder, Step, StepKind};
use crate::structures::graph::Graph;
use rustc_hash::FxHashSet;
use std::collections::VecDeque;

/// Breadth-first traversal from `start`, neighbors taken in lexicographic order.
/// Returns the nodes in the order they were dequeued.
pub fn bfs<R: Recorder<Graph>>(graph: &Graph, start: &str, rec: &mut R) -> Vec<String> {
    if !graph.contains(start) {
        rec.record(graph, Step::reject(format!("Start node {} does not exist", start)));
        return Vec::new();
    }

    let mut visited: FxHashSet<&str> = FxHashSet::default();
    let mut discovered = vec![start.to_string()];
    let mut order = Vec::new();
    let mut queue = VecDeque::from([start]);
    visited.insert(start);

    rec.record(
        graph,
        Step::new(StepKind::Highlight, format!("Starting BFS from node {}", start)).with_nodes([start]),
    );

    while let Some(current) = queue.pop_front() {
        order.push(current.to_string());
        rec.record(
            graph,
            Step::new(StepKind::Active, format!("Visiting node {}", current)).with_nodes([current]),
        );

        let mut neighbors = graph.neighbors(current);
        neighbors.sort_unstable();
        for neighbor in neighbors {
            if !visited.insert(neighbor) {
                continue;
            }
            discovered.push(neighbor.to_string());
            queue.push_back(neighbor);

            rec.record(
                graph,
                Step::new(
                    StepKind::Visited,
                    format!("Discovered neighbor {}, adding to queue", neighbor),
                )
                .with_nodes([neighbor]),
            );
            rec.record(
                graph,
                Step::new(
                    StepKind::Compare,
                    format!("Traversing edge {} -> {}", current, neighbor),
                )
                .with_nodes([current, neighbor]),
            );
        }

        rec.record(
            graph,
            Step::new(
                StepKind::Visited,
                format!("Finished processing node {}", current),
            )
            .with_nodes([current]),
        );
    }

    rec.record(
        graph,
        Step::new(
            StepKind::Sorted,
            format!("BFS traversal complete. Visited {} nodes.", discovered.len()),
        )
        .with_nodes(&discovered),
    );
    order
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::graph::tests::diamond;

    #[test]
    fn test_bfs_order() {
        let graph = diamond();
        let mut steps: Vec<Step> = Vec::new();
        let order = bfs(&graph, "0", &mut steps);

        assert_eq!(order, vec!["0", "1", "2", "3"]);
        assert_eq!(steps[0].kind, StepKind::Highlight);
        assert_eq!(steps.last().unwrap().node_ids, vec!["0", "1", "2", "3"]);
    }

    #[test]
    fn test_bfs_unknown_start_rejected() {
        let graph = diamond();
        let mut steps: Vec<Step> = Vec::new();
        assert!(bfs(&graph, "9", &mut steps).is_empty());
        assert_eq!(steps.len(), 1);
        assert!(steps[0].rejected);
    }
}
