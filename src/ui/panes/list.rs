//! Linked list pane

use super::node_color;
use crate::step::Step;
use crate::structures::linked_list::LinkedList;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Render the list as a chain of boxes from head to `null`
pub fn render_list_pane(frame: &mut Frame, area: Rect, list: &LinkedList, step: Option<&Step>) {
    let block = Block::default()
        .title(" Linked List ")
        .borders(Borders::ALL)
        .border_style(
            Style::default()
                .fg(DEFAULT_THEME.border_focused)
                .add_modifier(Modifier::BOLD),
        );

    let arrow = Style::default().fg(DEFAULT_THEME.comment);
    let mut chain = vec![Span::styled("head → ", arrow)];
    for id in list.ids() {
        let color = node_color(step, &id.to_string());
        chain.push(Span::styled(
            format!("[{}]", list[id].value),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ));
        chain.push(Span::styled(" → ", arrow));
    }
    chain.push(Span::styled("null", arrow));

    let ends = match (list.head(), list.tail()) {
        (Some(head), Some(tail)) => format!(
            "head: {} ({})  tail: {} ({})  size: {}",
            head,
            list[head].value,
            tail,
            list[tail].value,
            list.len()
        ),
        _ => "empty list".to_string(),
    };

    let text = vec![
        Line::from(chain),
        Line::default(),
        Line::from(Span::styled(ends, Style::default().fg(DEFAULT_THEME.comment))),
    ];

    let paragraph = Paragraph::new(text).block(block).wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}
