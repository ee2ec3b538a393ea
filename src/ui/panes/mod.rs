//! TUI pane rendering modules
//!
//! Every pane is a stateless render function over one recorded state and the step that
//! produced it.
//!
//! # Pane Modules
//!
//! - [`bars`]: arrays, stacks, queues and heaps as a bar chart
//! - [`list`]: linked list chain from head to `null`
//! - [`tree`]: binary trees and BSTs on a character grid
//! - [`table`]: hash table slots
//! - [`graph`]: the demo graph on a canvas, folded from the steps so far
//! - [`narration`]: scrolling log of step messages
//! - [`info`]: algorithm card, result and snapshot memory
//! - [`status`]: status bar with keybindings and playback state

pub mod bars;
pub mod graph;
pub mod info;
pub mod list;
pub mod narration;
pub mod status;
pub mod table;
pub mod tree;

pub use bars::render_bars_pane;
pub use graph::{render_graph_pane, GraphView};
pub use info::{render_info_pane, InfoRenderData};
pub use list::render_list_pane;
pub use narration::render_narration_pane;
pub use status::render_status_bar;
pub use table::render_table_pane;
pub use tree::render_tree_pane;

use crate::step::Step;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::style::Color;

/// Color of node `id` (as in `node-3`) while `step` is the current step
pub(crate) fn node_color(step: Option<&Step>, id: &str) -> Color {
    match step {
        Some(step) if step.node_ids.iter().any(|n| n == id) => {
            if step.rejected {
                DEFAULT_THEME.error
            } else {
                DEFAULT_THEME.step_color(step.kind)
            }
        }
        _ => DEFAULT_THEME.fg,
    }
}
