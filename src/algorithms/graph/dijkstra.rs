use crate::step::{format_distance, Aux, EdgeRef, Recorder, Step, StepKind};
use crate::structures::graph::Graph;
use indexmap::IndexMap;
use rustc_hash::FxHashSet;

/// Outcome of a shortest-path run
#[derive(Debug, Clone, PartialEq)]
pub struct ShortestPaths {
    /// Final tentative distance per node, in node order (`None` = unreached)
    pub distances: IndexMap<String, Option<i64>>,
    /// Predecessor on the best known route
    pub previous: IndexMap<String, Option<String>>,
    /// Route from the source to the target, when a reachable target was given
    pub path: Option<Vec<String>>,
}

fn distances_aux(distances: &IndexMap<String, Option<i64>>, edges: Vec<EdgeRef>) -> Aux {
    Aux::Distances {
        distances: distances.clone(),
        edges,
    }
}

/// Dijkstra's algorithm with an O(V²) linear scan for the closest unvisited node.
///
/// Ties go to the node inserted first. With a `target` the scan stops as soon as the
/// target is settled and the route is emitted as one `path` step per edge; otherwise (or
/// when the target is unreachable) the run ends with a summary `sorted` step.
pub fn dijkstra<R: Recorder<Graph>>(
    graph: &Graph,
    source: &str,
    target: Option<&str>,
    rec: &mut R,
) -> ShortestPaths {
    let mut distances: IndexMap<String, Option<i64>> =
        graph.node_ids().map(|id| (id.to_string(), None)).collect();
    let mut previous: IndexMap<String, Option<String>> =
        graph.node_ids().map(|id| (id.to_string(), None)).collect();

    if !graph.contains(source) {
        rec.record(graph, Step::reject(format!("Start node {} does not exist", source)));
        return ShortestPaths {
            distances,
            previous,
            path: None,
        };
    }

    distances.insert(source.to_string(), Some(0));
    rec.record(
        graph,
        Step::new(
            StepKind::UpdateDistances,
            format!("Initialize distances: {} = 0, others = ∞", source),
        )
        .with_nodes([source])
        .with_aux(distances_aux(&distances, Vec::new())),
    );

    let mut visited: FxHashSet<String> = FxHashSet::default();
    let mut settled_order: Vec<String> = Vec::new();

    loop {
        let closest = distances
            .iter()
            .filter(|(id, _)| !visited.contains(id.as_str()))
            .filter_map(|(id, d)| d.map(|d| (id.clone(), d)))
            .fold(None, |best: Option<(String, i64)>, (id, d)| match best {
                Some((_, best_d)) if best_d <= d => best,
                _ => Some((id, d)),
            });
        let Some((current, current_distance)) = closest else {
            break;
        };

        visited.insert(current.clone());
        settled_order.push(current.clone());

        if target == Some(current.as_str()) {
            rec.record(
                graph,
                Step::new(
                    StepKind::Visited,
                    format!(
                        "Reached target node {} with distance {}",
                        current, current_distance
                    ),
                )
                .with_nodes([&current])
                .with_aux(distances_aux(&distances, Vec::new())),
            );
            break;
        }

        rec.record(
            graph,
            Step::new(
                StepKind::Visited,
                format!("Visiting node {} (distance: {})", current, current_distance),
            )
            .with_nodes([&current])
            .with_aux(distances_aux(&distances, Vec::new())),
        );

        for edge in graph.edges(&current) {
            if visited.contains(&edge.target) {
                continue;
            }
            let candidate = current_distance + edge.weight;
            let known = distances.get(&edge.target).copied().flatten();

            rec.record(
                graph,
                Step::new(
                    StepKind::Compare,
                    format!(
                        "Checking neighbor {}: new dist {} vs old dist {}",
                        edge.target,
                        candidate,
                        format_distance(known)
                    ),
                )
                .with_nodes([&current, &edge.target])
                .with_aux(distances_aux(
                    &distances,
                    vec![EdgeRef::new(&current, &edge.target)],
                )),
            );

            if known.map_or(true, |k| candidate < k) {
                distances.insert(edge.target.clone(), Some(candidate));
                previous.insert(edge.target.clone(), Some(current.clone()));
                rec.record(
                    graph,
                    Step::new(
                        StepKind::UpdateDistances,
                        format!("Updating distance for {} to {}", edge.target, candidate),
                    )
                    .with_nodes([&edge.target])
                    .with_aux(distances_aux(&distances, Vec::new())),
                );
            }
        }
    }

    let path = target
        .filter(|t| distances.get(*t).copied().flatten().is_some())
        .map(|t| reconstruct_path(&previous, t));

    match &path {
        Some(route) => emit_path(graph, route, &distances, rec),
        None => {
            rec.record(
                graph,
                Step::new(StepKind::Sorted, "Dijkstra algorithm completed")
                    .with_nodes(&settled_order)
                    .with_aux(distances_aux(&distances, Vec::new())),
            );
        }
    }

    ShortestPaths {
        distances,
        previous,
        path,
    }
}

fn reconstruct_path(previous: &IndexMap<String, Option<String>>, target: &str) -> Vec<String> {
    let mut path = vec![target.to_string()];
    let mut current = target;
    while let Some(Some(prev)) = previous.get(current) {
        path.push(prev.clone());
        current = prev.as_str();
    }
    path.reverse();
    path
}

/// One `path` step per edge of the route, each revealing one more hop
fn emit_path<R: Recorder<Graph>>(
    graph: &Graph,
    route: &[String],
    distances: &IndexMap<String, Option<i64>>,
    rec: &mut R,
) {
    let description = format!("Path found: {}", route.join(" -> "));
    if route.len() == 1 {
        rec.record(
            graph,
            Step::new(StepKind::Path, description)
                .with_nodes(route)
                .with_aux(distances_aux(distances, Vec::new())),
        );
        return;
    }

    for hop in 1..route.len() {
        let edges = route[..=hop]
            .windows(2)
            .map(|pair| EdgeRef::new(&pair[0], &pair[1]))
            .collect();
        rec.record(
            graph,
            Step::new(StepKind::Path, description.clone())
                .with_nodes(&route[..=hop])
                .with_aux(distances_aux(distances, edges)),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

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
    fn test_shortest_distances_and_path() {
        let graph = triangle();
        let mut steps: Vec<Step> = Vec::new();
        let result = dijkstra(&graph, "0", Some("1"), &mut steps);

        assert_eq!(result.distances["0"], Some(0));
        assert_eq!(result.distances["1"], Some(2));
        assert_eq!(result.distances["2"], Some(1));
        assert_eq!(result.path, Some(vec!["0".to_string(), "2".into(), "1".into()]));

        let path_steps: Vec<&Step> = steps.iter().filter(|s| s.kind == StepKind::Path).collect();
        assert_eq!(path_steps.len(), 2);
        assert_eq!(path_steps[1].node_ids, vec!["0", "2", "1"]);
    }

    #[test]
    fn test_update_only_on_improvement() {
        let graph = triangle();
        let mut steps: Vec<Step> = Vec::new();
        dijkstra(&graph, "0", None, &mut steps);

        // initial + 1 via 0->1, 2 via 0->2, 1 improved via 2->1
        let updates = steps.iter().filter(|s| s.kind == StepKind::UpdateDistances).count();
        assert_eq!(updates, 4);
        assert_eq!(steps.last().unwrap().kind, StepKind::Sorted);
    }

    #[test]
    fn test_unreachable_target_ends_with_summary() {
        let mut graph = triangle();
        graph.add_node("3", "3", 0.0, 0.0);
        let mut steps: Vec<Step> = Vec::new();
        let result = dijkstra(&graph, "0", Some("3"), &mut steps);

        assert_eq!(result.distances["3"], None);
        assert_eq!(result.path, None);
        let last = steps.last().unwrap();
        assert_eq!(last.kind, StepKind::Sorted);
        assert!(steps.iter().all(|s| s.kind != StepKind::Path));
    }

    #[test]
    fn test_source_is_target() {
        let graph = triangle();
        let mut steps: Vec<Step> = Vec::new();
        let result = dijkstra(&graph, "0", Some("0"), &mut steps);

        assert_eq!(result.path, Some(vec!["0".to_string()]));
        assert_eq!(steps.last().unwrap().kind, StepKind::Path);
    }
}
