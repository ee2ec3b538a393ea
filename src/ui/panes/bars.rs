//! Bar chart pane for arrays, stacks, queues and heaps

use crate::session::Linear;
use crate::step::Step;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph},
    Frame,
};

const BAR_GAP: u16 = 1;
const MAX_BAR_WIDTH: u16 = 7;

/// Label under bar `index` of `len`
fn bar_label(layout: Linear, index: usize, len: usize) -> String {
    match layout {
        Linear::Stack if index + 1 == len => "top".to_string(),
        Linear::Queue if index == 0 && len == 1 => "f/r".to_string(),
        Linear::Queue if index == 0 => "front".to_string(),
        Linear::Queue if index + 1 == len => "rear".to_string(),
        _ => index.to_string(),
    }
}

fn pane_title(layout: Linear) -> &'static str {
    match layout {
        Linear::Array => " Array ",
        Linear::Stack => " Stack (top →) ",
        Linear::Queue => " Queue (front ←) ",
        Linear::Heap => " Min-Heap ",
    }
}

/// Color of bar `index` while `step` is the current step
fn bar_color(step: Option<&Step>, index: usize) -> Color {
    match step {
        Some(step) if step.positions.contains(&index) => {
            if step.rejected {
                DEFAULT_THEME.error
            } else {
                DEFAULT_THEME.step_color(step.kind)
            }
        }
        _ => DEFAULT_THEME.idle,
    }
}

/// Width of each bar so `count` bars fill `width` columns
fn bar_width(width: u16, count: usize) -> u16 {
    let count = count.max(1) as u16;
    let gaps = BAR_GAP.saturating_mul(count.saturating_sub(1));
    (width.saturating_sub(gaps) / count).clamp(1, MAX_BAR_WIDTH)
}

/// Render `values` as bars, highlighting the positions `step` points at
pub fn render_bars_pane(
    frame: &mut Frame,
    area: Rect,
    layout: Linear,
    values: &[i64],
    step: Option<&Step>,
) {
    let block = Block::default()
        .title(pane_title(layout))
        .borders(Borders::ALL)
        .border_style(
            Style::default()
                .fg(DEFAULT_THEME.border_focused)
                .add_modifier(Modifier::BOLD),
        );

    if values.is_empty() {
        let paragraph = Paragraph::new("(empty)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    // Bars can't go below zero, so shift everything up when negatives are present
    let floor = values.iter().copied().min().unwrap_or(0).min(0);
    let bars: Vec<Bar> = values
        .iter()
        .enumerate()
        .map(|(i, &value)| {
            let color = bar_color(step, i);
            Bar::default()
                .value((value - floor) as u64 + 1)
                .text_value(value.to_string())
                .label(Line::from(bar_label(layout, i, values.len())))
                .style(Style::default().fg(color))
                .value_style(Style::default().bg(color).fg(Color::Black))
        })
        .collect();

    let inner_width = area.width.saturating_sub(2);
    let chart = BarChart::default()
        .block(block)
        .data(BarGroup::default().bars(&bars))
        .bar_width(bar_width(inner_width, values.len()))
        .bar_gap(BAR_GAP);

    frame.render_widget(chart, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::step::StepKind;

    #[test]
    fn test_labels_mark_ends() {
        assert_eq!(bar_label(Linear::Stack, 2, 3), "top");
        assert_eq!(bar_label(Linear::Stack, 0, 3), "0");
        assert_eq!(bar_label(Linear::Queue, 0, 3), "front");
        assert_eq!(bar_label(Linear::Queue, 2, 3), "rear");
        assert_eq!(bar_label(Linear::Heap, 2, 3), "2");
    }

    #[test]
    fn test_only_pointed_bars_are_colored() {
        let step = Step::at(StepKind::Swap, vec![1], "swap");
        assert_eq!(bar_color(Some(&step), 1), DEFAULT_THEME.error);
        assert_eq!(bar_color(Some(&step), 0), DEFAULT_THEME.idle);
        assert_eq!(bar_color(None, 1), DEFAULT_THEME.idle);
    }

    #[test]
    fn test_bar_width_fits() {
        assert_eq!(bar_width(100, 5), MAX_BAR_WIDTH);
        assert_eq!(bar_width(20, 10), 1);
        assert_eq!(bar_width(0, 3), 1);
    }
}
