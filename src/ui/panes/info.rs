//! Side pane: what is running, its complexity and the result

use crate::catalog::AlgorithmInfo;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Padding, Paragraph, Wrap},
    Frame,
};

/// Everything the info pane shows
pub struct InfoRenderData<'a> {
    pub title: &'a str,
    pub info: Option<&'a AlgorithmInfo>,
    /// Shown once playback reaches the end
    pub outcome: &'a str,
    pub at_end: bool,
    pub progress: f64,
    pub memory_usage: usize,
}

fn row<'a>(label: &'a str, value: impl Into<String>) -> Line<'a> {
    Line::from(vec![
        Span::styled(format!("{:<9}", label), Style::default().fg(DEFAULT_THEME.comment)),
        Span::styled(value.into(), Style::default().fg(DEFAULT_THEME.fg)),
    ])
}

pub fn render_info_pane(frame: &mut Frame, area: Rect, data: &InfoRenderData) {
    let block = Block::default()
        .title(" Info ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal))
        .padding(Padding::new(1, 1, 0, 0));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(inner);

    let mut lines = vec![
        Line::from(Span::styled(
            data.title.to_string(),
            Style::default()
                .fg(DEFAULT_THEME.primary)
                .add_modifier(Modifier::BOLD),
        )),
        Line::default(),
    ];

    if let Some(info) = data.info {
        lines.push(row("Best", info.complexity.best));
        lines.push(row("Average", info.complexity.average));
        lines.push(row("Worst", info.complexity.worst));
        lines.push(row("Space", info.complexity.space));
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            info.description,
            Style::default().fg(DEFAULT_THEME.fg),
        )));
        lines.push(Line::default());
    }

    if data.at_end {
        lines.push(row("Result", data.outcome));
    } else {
        lines.push(row("Result", "…"));
    }
    lines.push(row("Memory", format!("{} KiB", data.memory_usage.div_ceil(1024))));

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), chunks[0]);

    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(DEFAULT_THEME.success).bg(DEFAULT_THEME.current_line_bg))
        .ratio(data.progress.clamp(0.0, 1.0));
    frame.render_widget(gauge, chunks[1]);
}
