use crate::step::StepKind;
use ratatui::style::Color;

pub struct Theme {
    pub fg: Color,
    pub primary: Color,   // Blue
    pub secondary: Color, // Orange
    pub comment: Color,   // Grey
    pub success: Color,   // Green
    pub error: Color,     // Red
    pub border_focused: Color,
    pub border_normal: Color,
    pub current_line_bg: Color,
    pub compare: Color, // Yellow
    pub visited: Color, // Mauve
    pub search: Color,  // Teal
    pub idle: Color,    // Bars and nodes no step points at
}

pub const DEFAULT_THEME: Theme = Theme {
    fg: Color::Rgb(205, 214, 244),
    primary: Color::Rgb(137, 180, 250),   // Blue
    secondary: Color::Rgb(250, 179, 135), // Orange
    comment: Color::Rgb(108, 112, 134),
    success: Color::Rgb(166, 227, 161),
    error: Color::Rgb(243, 139, 168),
    border_focused: Color::Rgb(249, 226, 175), // Yellow border for focus
    border_normal: Color::Rgb(108, 112, 134),  // Grey border for normal
    current_line_bg: Color::Rgb(50, 50, 70),   // Slightly lighter BG for current line
    compare: Color::Rgb(249, 226, 175),
    visited: Color::Rgb(203, 166, 247),
    search: Color::Rgb(148, 226, 213),
    idle: Color::Rgb(88, 91, 112),
};

impl Theme {
    /// Color used for whatever a step of `kind` points at
    pub fn step_color(&self, kind: StepKind) -> Color {
        match kind {
            StepKind::Compare => self.compare,
            StepKind::Swap | StepKind::Delete => self.error,
            StepKind::Sorted | StepKind::Insert => self.success,
            StepKind::Active | StepKind::UpdateDistances => self.primary,
            StepKind::Visited => self.visited,
            StepKind::Path | StepKind::Minimum | StepKind::Highlight => self.secondary,
            StepKind::Search => self.search,
        }
    }
}
