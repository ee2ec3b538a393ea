//! Hash table pane: one row per slot

use crate::operations::hash_table::CROWDED_LOAD;
use crate::step::Step;
use crate::structures::hash_table::HashTable;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Row, Table},
    Frame,
};

/// Render the slots, highlighting the ones the current step points at
pub fn render_table_pane(frame: &mut Frame, area: Rect, table: &HashTable, step: Option<&Step>) {
    let block = Block::default()
        .title(format!(" Hash Table (capacity {}) ", table.capacity()))
        .borders(Borders::ALL)
        .border_style(
            Style::default()
                .fg(DEFAULT_THEME.border_focused)
                .add_modifier(Modifier::BOLD),
        );

    let header = Row::new(["Index", "Key", "Value"]).style(
        Style::default()
            .fg(DEFAULT_THEME.primary)
            .add_modifier(Modifier::BOLD),
    );

    let rows: Vec<Row> = table
        .slots()
        .iter()
        .enumerate()
        .map(|(index, slot)| {
            let (key, value) = match slot {
                Some(entry) => (entry.key.to_string(), entry.value.to_string()),
                None => ("-".to_string(), String::new()),
            };
            let style = match step {
                Some(step) if step.positions.contains(&index) => Style::default()
                    .bg(DEFAULT_THEME.current_line_bg)
                    .fg(if step.rejected {
                        DEFAULT_THEME.error
                    } else {
                        DEFAULT_THEME.step_color(step.kind)
                    })
                    .add_modifier(Modifier::BOLD),
                _ if slot.is_none() => Style::default().fg(DEFAULT_THEME.comment),
                _ => Style::default().fg(DEFAULT_THEME.fg),
            };
            Row::new([Cell::from(index.to_string()), Cell::from(key), Cell::from(value)])
                .style(style)
        })
        .collect();

    let load = table.load_factor();
    let footer = Row::new([
        Cell::from(format!("size {}", table.len())),
        Cell::from(format!("load {:.2}", load)),
        Cell::from(format!("collisions {}", table.collisions())),
    ])
    .style(Style::default().fg(load_color(load)));

    let widget = Table::new(
        rows,
        [
            Constraint::Length(8),
            Constraint::Length(12),
            Constraint::Min(10),
        ],
    )
    .header(header)
    .footer(footer)
    .block(block);

    frame.render_widget(widget, area);
}

fn load_color(load: f64) -> Color {
    if load < 0.5 {
        DEFAULT_THEME.success
    } else if load < CROWDED_LOAD {
        DEFAULT_THEME.secondary
    } else {
        DEFAULT_THEME.error
    }
}
