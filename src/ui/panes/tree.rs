//! Binary tree pane
//!
//! Nodes are placed on a character grid: the column comes from the node's in-order
//! rank, the row from its depth (two rows per level, the odd rows hold the `/` and `\`
//! connectors).

use super::node_color;
use crate::step::Step;
use crate::structures::tree::Tree;
use crate::structures::NodeId;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Where a node sits on the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub id: NodeId,
    /// Center column
    pub column: usize,
    pub depth: usize,
}

/// Place every reachable node. `cell` is the width reserved per node.
pub fn layout(tree: &Tree, cell: usize) -> Vec<Placement> {
    let depths = tree.depths();
    let mut placements = Vec::with_capacity(tree.len());
    let mut stack: Vec<NodeId> = Vec::new();
    let mut current = tree.root();
    while current.is_some() || !stack.is_empty() {
        while let Some(id) = current {
            stack.push(id);
            current = tree[id].left;
        }
        if let Some(id) = stack.pop() {
            placements.push(Placement {
                id,
                column: placements.len() * cell + cell / 2,
                depth: depths[id.index()],
            });
            current = tree[id].right;
        }
    }
    placements
}

/// Widest value label, plus one column of padding
fn cell_width(tree: &Tree) -> usize {
    tree.nodes()
        .iter()
        .map(|n| n.value.to_string().chars().count())
        .max()
        .unwrap_or(1)
        + 1
}

type Grid = Vec<Vec<(char, Color)>>;

fn put(grid: &mut Grid, row: usize, column: usize, text: &str, color: Color) {
    let Some(line) = grid.get_mut(row) else {
        return;
    };
    for (offset, ch) in text.chars().enumerate() {
        if let Some(cell) = line.get_mut(column + offset) {
            *cell = (ch, color);
        }
    }
}

fn draw(tree: &Tree, step: Option<&Step>) -> Grid {
    let cell = cell_width(tree);
    let placements = layout(tree, cell);
    let rows = tree.height() * 2;
    let width = placements.len() * cell + 1;
    let mut grid: Grid = vec![vec![(' ', DEFAULT_THEME.fg); width]; rows];

    let column_of = |id: NodeId| {
        placements
            .iter()
            .find(|p| p.id == id)
            .map(|p| p.column)
    };

    for placement in &placements {
        let node = &tree[placement.id];
        let row = placement.depth * 2;
        let label = node.value.to_string();
        let start = placement.column.saturating_sub(label.chars().count() / 2);
        put(
            &mut grid,
            row,
            start,
            &label,
            node_color(step, &placement.id.to_string()),
        );

        let children = [(node.left, "/"), (node.right, "\\")];
        for (child, connector) in children {
            if let Some(child_column) = child.and_then(column_of) {
                let mid = (placement.column + child_column) / 2;
                put(&mut grid, row + 1, mid, connector, DEFAULT_THEME.comment);
            }
        }
    }
    grid
}

fn to_lines(grid: Grid) -> Vec<Line<'static>> {
    grid.into_iter()
        .map(|row| {
            let mut spans: Vec<Span> = Vec::new();
            let mut run = String::new();
            let mut run_color = None;
            for (ch, color) in row {
                if run_color != Some(color) && !run.is_empty() {
                    spans.push(styled(std::mem::take(&mut run), run_color));
                }
                run_color = Some(color);
                run.push(ch);
            }
            if !run.is_empty() {
                spans.push(styled(run, run_color));
            }
            Line::from(spans)
        })
        .collect()
}

fn styled(text: String, color: Option<Color>) -> Span<'static> {
    let color = color.unwrap_or(DEFAULT_THEME.fg);
    Span::styled(text, Style::default().fg(color).add_modifier(Modifier::BOLD))
}

pub fn render_tree_pane(frame: &mut Frame, area: Rect, title: &str, tree: &Tree, step: Option<&Step>) {
    let block = Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL)
        .border_style(
            Style::default()
                .fg(DEFAULT_THEME.border_focused)
                .add_modifier(Modifier::BOLD),
        );

    if tree.is_empty() {
        let paragraph = Paragraph::new("(empty tree)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    let mut lines = to_lines(draw(tree, step));
    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        format!("size: {}  height: {}", tree.len(), tree.height()),
        Style::default().fg(DEFAULT_THEME.comment),
    )));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::operations::bst;

    fn bst_of(values: &[i64]) -> Tree {
        let mut tree = Tree::new();
        for &v in values {
            bst::insert(&mut tree, v, &mut ());
        }
        tree
    }

    #[test]
    fn test_layout_orders_columns_in_order() {
        let tree = bst_of(&[50, 30, 70, 20]);
        let placements = layout(&tree, 3);
        let values: Vec<i64> = placements.iter().map(|p| tree[p.id].value).collect();
        assert_eq!(values, vec![20, 30, 50, 70]);
        assert!(placements.windows(2).all(|w| w[0].column < w[1].column));

        let depths: Vec<usize> = placements.iter().map(|p| p.depth).collect();
        assert_eq!(depths, vec![2, 1, 0, 1]);
    }

    #[test]
    fn test_grid_has_connectors() {
        let tree = bst_of(&[5, 3, 8]);
        let grid = draw(&tree, None);
        assert_eq!(grid.len(), 4);
        let connectors: String = grid[1].iter().map(|(ch, _)| *ch).collect();
        assert!(connectors.contains('/'));
        assert!(connectors.contains('\\'));
        let top: String = grid[0].iter().map(|(ch, _)| *ch).collect();
        assert_eq!(top.trim(), "5");
    }
}
