//! Step log: every message up to the current step, newest highlighted

use crate::step::Step;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Padding, Paragraph},
    Frame,
};

/// Render messages of the first `position` steps.
///
/// The view follows the newest message unless the user scrolled up; `scroll_offset` is
/// clamped here like the other scrollable panes.
pub fn render_narration_pane(
    frame: &mut Frame,
    area: Rect,
    steps: &[Step],
    position: usize,
    scroll_offset: &mut usize,
) {
    let block = Block::default()
        .title(" Steps ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal));

    let shown = &steps[..position.min(steps.len())];
    if shown.is_empty() {
        let hint = if steps.is_empty() {
            "(no steps recorded)"
        } else {
            "Press → to take the first step"
        };
        let paragraph = Paragraph::new(hint)
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    let block = block.padding(Padding::new(1, 0, 0, 0));
    let last = shown.len() - 1;
    let items: Vec<ListItem> = shown
        .iter()
        .enumerate()
        .map(|(i, step)| {
            let kind_style = Style::default().fg(DEFAULT_THEME.step_color(step.kind));
            let mut text_style = Style::default().fg(if step.rejected {
                DEFAULT_THEME.error
            } else if i == last {
                DEFAULT_THEME.fg
            } else {
                DEFAULT_THEME.comment
            });
            if i == last {
                text_style = text_style
                    .bg(DEFAULT_THEME.current_line_bg)
                    .add_modifier(Modifier::BOLD);
            }
            ListItem::new(Line::from(vec![
                Span::styled(format!("{:>4} ", i + 1), Style::default().fg(DEFAULT_THEME.comment)),
                Span::styled(format!("{:<16} ", step.kind.as_str()), kind_style),
                Span::styled(step.message.clone(), text_style),
            ]))
        })
        .collect();

    let total_items = items.len();
    let visible_height = area.height.saturating_sub(2).max(1) as usize;

    if total_items > visible_height {
        let max_scroll = total_items - visible_height;
        *scroll_offset = (*scroll_offset).min(max_scroll);
    } else {
        *scroll_offset = 0;
    }

    let visible: Vec<ListItem> = items
        .into_iter()
        .skip(*scroll_offset)
        .take(visible_height)
        .collect();

    frame.render_widget(List::new(visible).block(block), area);
}
