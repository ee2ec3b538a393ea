use crate::step::{Recorder, Step, StepKind};
use crate::structures::graph::Graph;
use rustc_hash::FxHashSet;

/// Depth-first traversal from `start` with an explicit stack.
///
/// Nodes are marked visited when popped, so a node can sit on the stack more than once;
/// the extra copies are skipped on pop. Neighbors are pushed in reverse lexicographic
/// order so the smallest one is explored first. Returns the visit order.
pub fn dfs<R: Recorder<Graph>>(graph: &Graph, start: &str, rec: &mut R) -> Vec<String> {
    if !graph.contains(start) {
        rec.record(graph, Step::reject(format!("Start node {} does not exist", start)));
        return Vec::new();
    }

    let mut visited: FxHashSet<&str> = FxHashSet::default();
    let mut order = Vec::new();
    let mut stack = vec![start];

    rec.record(
        graph,
        Step::new(StepKind::Highlight, format!("Starting DFS from node {}", start)).with_nodes([start]),
    );

    while let Some(current) = stack.pop() {
        if !visited.insert(current) {
            continue;
        }
        order.push(current.to_string());
        rec.record(
            graph,
            Step::new(StepKind::Active, format!("Visiting node {}", current)).with_nodes([current]),
        );

        let mut neighbors = graph.neighbors(current);
        neighbors.sort_unstable_by(|a, b| b.cmp(a));
        for neighbor in neighbors {
            if visited.contains(neighbor) {
                continue;
            }
            stack.push(neighbor);
            rec.record(
                graph,
                Step::new(
                    StepKind::Compare,
                    format!("Discovered neighbor {}, adding to stack", neighbor),
                )
                .with_nodes([current, neighbor]),
            );
        }
    }

    rec.record(
        graph,
        Step::new(
            StepKind::Sorted,
            format!("DFS traversal complete. Visited {} nodes.", order.len()),
        )
        .with_nodes(&order),
    );
    order
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::graph::tests::diamond;

    #[test]
    fn test_dfs_order() {
        let graph = diamond();
        let order = dfs(&graph, "0", &mut ());
        assert_eq!(order, vec!["0", "1", "3", "2"]);
    }

    #[test]
    fn test_duplicate_pushes_are_skipped() {
        // 2 is pushed from both 0 and 3 before it is popped
        let graph = diamond();
        let mut steps: Vec<Step> = Vec::new();
        dfs(&graph, "0", &mut steps);

        let pushes_of_2 = steps
            .iter()
            .filter(|s| s.kind == StepKind::Compare && s.node_ids.last().map(String::as_str) == Some("2"))
            .count();
        let visits_of_2 = steps
            .iter()
            .filter(|s| s.kind == StepKind::Active && s.node_ids == vec!["2"])
            .count();
        assert_eq!(pushes_of_2, 2);
        assert_eq!(visits_of_2, 1);
    }
}
