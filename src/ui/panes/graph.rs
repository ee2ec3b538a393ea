//! Graph pane: the demo grid on a canvas, colored by what the steps so far have done

use crate::step::{Aux, Step, StepKind};
use crate::structures::graph::Graph;
use crate::ui::theme::DEFAULT_THEME;
use indexmap::IndexMap;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{
        canvas::{Canvas, Line as CanvasLine},
        Block, Borders,
    },
    Frame,
};
use rustc_hash::FxHashSet;

const CANVAS_WIDTH: f64 = 800.0;
const CANVAS_HEIGHT: f64 = 400.0;

/// Accumulated effect of a prefix of graph steps
#[derive(Debug, Default, Clone, PartialEq)]
pub struct GraphView {
    /// Node the algorithm is currently working on
    pub active: Option<String>,
    pub visited: FxHashSet<String>,
    /// Edge inspected by the latest step, if it was a comparison
    pub compared: Option<(String, String)>,
    pub path: Vec<String>,
    pub path_edges: FxHashSet<(String, String)>,
    pub distances: IndexMap<String, Option<i64>>,
    pub done: bool,
}

impl GraphView {
    /// Fold `steps` from an empty view
    pub fn from_steps(steps: &[Step]) -> Self {
        let mut view = GraphView::default();
        for step in steps {
            view.apply(step);
        }
        view
    }

    fn apply(&mut self, step: &Step) {
        self.compared = None;
        if step.rejected {
            return;
        }
        match step.kind {
            StepKind::Highlight | StepKind::Active => {
                self.active = step.node_ids.last().cloned();
            }
            StepKind::Visited => {
                self.visited.extend(step.node_ids.iter().cloned());
            }
            StepKind::Compare => {
                if let [from, to] = step.node_ids.as_slice() {
                    self.compared = Some((from.clone(), to.clone()));
                }
            }
            StepKind::Sorted => {
                self.visited.extend(step.node_ids.iter().cloned());
                self.active = None;
                self.done = true;
            }
            StepKind::Path => {
                self.path = step.node_ids.clone();
            }
            _ => {}
        }
        if let Some(Aux::Distances { distances, edges }) = &step.aux {
            self.distances = distances.clone();
            if step.kind == StepKind::Path {
                self.path_edges = edges
                    .iter()
                    .map(|e| (e.from.clone(), e.to.clone()))
                    .collect();
            }
        }
    }

    fn on_path_edge(&self, from: &str, to: &str) -> bool {
        self.path_edges.contains(&(from.to_string(), to.to_string()))
            || self.path_edges.contains(&(to.to_string(), from.to_string()))
    }

    fn is_compared(&self, from: &str, to: &str) -> bool {
        self.compared.as_ref().is_some_and(|(a, b)| {
            (a == from && b == to) || (a == to && b == from)
        })
    }

    fn node_color(&self, id: &str) -> Color {
        if self.path.iter().any(|n| n == id) {
            DEFAULT_THEME.secondary
        } else if self.active.as_deref() == Some(id) {
            DEFAULT_THEME.primary
        } else if self.compared.as_ref().is_some_and(|(_, to)| to == id) {
            DEFAULT_THEME.compare
        } else if self.visited.contains(id) {
            if self.done {
                DEFAULT_THEME.success
            } else {
                DEFAULT_THEME.visited
            }
        } else {
            DEFAULT_THEME.fg
        }
    }
}

/// Render the graph pane after `position` steps
pub fn render_graph_pane(
    frame: &mut Frame,
    area: Rect,
    graph: &Graph,
    steps: &[Step],
    position: usize,
) {
    let view = GraphView::from_steps(&steps[..position.min(steps.len())]);

    let block = Block::default()
        .title(" Graph ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_focused));

    let canvas = Canvas::default()
        .block(block)
        .x_bounds([0.0, CANVAS_WIDTH])
        .y_bounds([0.0, CANVAS_HEIGHT])
        .paint(|ctx| {
            for edge in graph.all_edges() {
                let (Some(from), Some(to)) = (graph.node(&edge.source), graph.node(&edge.target))
                else {
                    continue;
                };
                let color = if view.on_path_edge(&edge.source, &edge.target) {
                    DEFAULT_THEME.secondary
                } else if view.is_compared(&edge.source, &edge.target) {
                    DEFAULT_THEME.compare
                } else {
                    DEFAULT_THEME.idle
                };
                // Canvas y grows upward; graph coordinates grow downward
                ctx.draw(&CanvasLine::new(
                    from.x,
                    CANVAS_HEIGHT - from.y,
                    to.x,
                    CANVAS_HEIGHT - to.y,
                    color,
                ));
            }

            ctx.layer();

            if graph.is_weighted() {
                for edge in graph.all_edges() {
                    // Undirected edges are stored twice; label one direction
                    if !graph.is_directed() && edge.source > edge.target {
                        continue;
                    }
                    let (Some(from), Some(to)) =
                        (graph.node(&edge.source), graph.node(&edge.target))
                    else {
                        continue;
                    };
                    ctx.print(
                        (from.x + to.x) / 2.0,
                        CANVAS_HEIGHT - (from.y + to.y) / 2.0,
                        Span::styled(
                            edge.weight.to_string(),
                            Style::default().fg(DEFAULT_THEME.comment),
                        ),
                    );
                }
            }

            for node in graph.nodes() {
                let label = match view.distances.get(&node.id) {
                    Some(distance) => format!(
                        "({}) {}",
                        node.value,
                        crate::step::format_distance(*distance)
                    ),
                    None => format!("({})", node.value),
                };
                ctx.print(
                    node.x,
                    CANVAS_HEIGHT - node.y,
                    Span::styled(
                        label,
                        Style::default()
                            .fg(view.node_color(&node.id))
                            .add_modifier(Modifier::BOLD),
                    ),
                );
            }
        });

    frame.render_widget(canvas, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::graph::{bfs, dijkstra};

    fn diamond() -> Graph {
        let mut graph = Graph::new(false, false);
        for (i, id) in ["0", "1", "2", "3"].iter().enumerate() {
            graph.add_node(id, id, i as f64 * 100.0, 0.0);
        }
        graph.add_edge("0", "1", 1);
        graph.add_edge("0", "2", 1);
        graph.add_edge("1", "3", 1);
        graph.add_edge("2", "3", 1);
        graph
    }

    #[test]
    fn test_empty_prefix_is_blank() {
        let view = GraphView::from_steps(&[]);
        assert!(view.active.is_none());
        assert!(view.visited.is_empty());
        assert!(!view.done);
    }

    #[test]
    fn test_bfs_fold_ends_with_everything_visited() {
        let graph = diamond();
        let mut steps: Vec<Step> = Vec::new();
        bfs(&graph, "0", &mut steps);

        let first = GraphView::from_steps(&steps[..1]);
        assert_eq!(first.active.as_deref(), Some("0"));

        let last = GraphView::from_steps(&steps);
        assert!(last.done);
        assert_eq!(last.visited.len(), 4);
        assert!(last.active.is_none());
    }

    #[test]
    fn test_dijkstra_fold_tracks_distances_and_path() {
        let mut graph = Graph::new(true, true);
        for id in ["0", "1", "2"] {
            graph.add_node(id, id, 0.0, 0.0);
        }
        graph.add_edge("0", "1", 4);
        graph.add_edge("0", "2", 1);
        graph.add_edge("2", "1", 1);

        let mut steps: Vec<Step> = Vec::new();
        dijkstra(&graph, "0", Some("1"), &mut steps);

        let view = GraphView::from_steps(&steps);
        assert_eq!(view.distances.get("1"), Some(&Some(2)));
        assert_eq!(view.path, vec!["0", "2", "1"]);
        assert!(view.on_path_edge("0", "2"));
        assert!(view.on_path_edge("2", "1"));
        assert!(!view.on_path_edge("0", "1"));
    }
}
