//! Main TUI application state and logic

use crate::session::{Scene, Session};
use crate::step::Step;
use crate::ui::panes::{self, InfoRenderData};
use crate::ui::playback::Playback;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;
use std::time::{Duration, Instant};

/// The main application state
pub struct App {
    /// The recorded run being replayed
    pub session: Session,

    pub playback: Playback,

    /// Scroll offset of the step log (`usize::MAX` follows the newest step)
    pub narration_scroll: usize,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,

    /// Last time a step was taken in play mode
    pub last_play_time: Instant,

    /// Last time space was pressed (for debouncing)
    pub last_space_press: Instant,
}

impl App {
    pub fn new(session: Session) -> Self {
        let playback = Playback::new(session.steps().len(), session.speed);
        let long_ago = Instant::now()
            .checked_sub(Duration::from_secs(1))
            .unwrap_or_else(Instant::now);
        App {
            session,
            playback,
            narration_scroll: usize::MAX,
            should_quit: false,
            status_message: String::from("Ready!"),
            last_play_time: long_ago,
            last_space_press: long_ago,
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            if self.playback.is_playing() && self.last_play_time.elapsed() >= self.playback.delay() {
                self.advance();
                self.last_play_time = Instant::now();
            }

            // Poll with a timeout so auto-play keeps ticking
            if event::poll(Duration::from_millis(50))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    /// Step most recently applied, if any
    fn current_step(&self) -> Option<&Step> {
        self.playback
            .current_step()
            .and_then(|i| self.session.steps().get(i))
    }

    fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(70), Constraint::Percentage(30)])
            .split(main_chunks[0]);

        // Left column: structure (top) | step log (bottom)
        let left_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
            .split(columns[0]);

        let position = self.playback.position();
        let step = self.current_step();
        match &self.session.scene {
            Scene::Bars { layout, timeline } => {
                panes::render_bars_pane(frame, left_rows[0], *layout, timeline.state_at(position), step)
            }
            Scene::List(timeline) => {
                panes::render_list_pane(frame, left_rows[0], timeline.state_at(position), step)
            }
            Scene::Tree(timeline) => panes::render_tree_pane(
                frame,
                left_rows[0],
                &self.session.title,
                timeline.state_at(position),
                step,
            ),
            Scene::Table(timeline) => {
                panes::render_table_pane(frame, left_rows[0], timeline.state_at(position), step)
            }
            Scene::Graph { graph, steps } => {
                panes::render_graph_pane(frame, left_rows[0], graph, steps, position)
            }
        }
        let rejected = step.is_some_and(|s| s.rejected);

        panes::render_narration_pane(
            frame,
            left_rows[1],
            self.session.steps(),
            position,
            &mut self.narration_scroll,
        );

        let info = InfoRenderData {
            title: &self.session.title,
            info: self.session.info.as_ref(),
            outcome: &self.session.outcome,
            at_end: self.playback.at_end(),
            progress: self.playback.progress(),
            memory_usage: self.session.scene.memory_usage(),
        };
        panes::render_info_pane(frame, columns[1], &info);

        panes::render_status_bar(
            frame,
            main_chunks[1],
            &self.status_message,
            &self.playback,
            rejected,
        );
    }

    /// Handle keyboard events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            // Number keys step forward N times directly
            KeyCode::Char(c @ '1'..='9') => {
                self.playback.pause();
                let n = c.to_digit(10).unwrap_or(1) as usize;
                let stepped = self.playback.step_by(n);
                self.status_message = format!("Stepped forward {} step(s)", stepped);
                self.narration_scroll = usize::MAX;
            }
            KeyCode::Left => {
                self.playback.pause();
                self.step_backward();
            }
            KeyCode::Right => {
                self.playback.pause();
                self.advance();
            }
            KeyCode::Up => {
                if self.narration_scroll == usize::MAX {
                    self.narration_scroll = self.playback.position();
                }
                self.narration_scroll = self.narration_scroll.saturating_sub(1);
            }
            KeyCode::Down => {
                self.narration_scroll = self.narration_scroll.saturating_add(1);
            }
            KeyCode::Char('+') | KeyCode::Char('=') => {
                self.playback.faster();
                self.status_message = format!("Speed {}x", self.playback.speed());
            }
            KeyCode::Char('-') | KeyCode::Char('_') => {
                self.playback.slower();
                self.status_message = format!("Speed {}x", self.playback.speed());
            }
            KeyCode::Char(' ') => {
                // 200ms debounce against key repeat
                if self.last_space_press.elapsed() >= Duration::from_millis(200) {
                    self.last_space_press = Instant::now();
                    self.playback.toggle();
                    if self.playback.is_playing() {
                        self.last_play_time = Instant::now()
                            .checked_sub(self.playback.delay())
                            .unwrap_or_else(Instant::now);
                        self.status_message = "Playing...".to_string();
                    } else {
                        self.status_message = "Paused".to_string();
                    }
                }
            }
            KeyCode::Enter => {
                self.playback.seek_end();
                self.status_message = "Jumped to end".to_string();
                self.narration_scroll = usize::MAX;
            }
            KeyCode::Backspace => {
                self.playback.seek_start();
                self.status_message = "Jumped to start".to_string();
                self.narration_scroll = usize::MAX;
            }
            _ => {}
        }
    }

    fn advance(&mut self) {
        if self.playback.step_forward() {
            self.status_message = match self.current_step() {
                Some(step) if step.rejected => format!("Rejected: {}", step.message),
                _ if self.playback.is_playing() => "Playing...".to_string(),
                _ => "Stepped forward".to_string(),
            };
            self.narration_scroll = usize::MAX;
        } else {
            self.status_message = "Playback complete".to_string();
        }
    }

    fn step_backward(&mut self) {
        if self.playback.step_backward() {
            self.status_message = "Stepped backward".to_string();
            self.narration_scroll = usize::MAX;
        } else {
            self.status_message = "Cannot step backward: already at the start".to_string();
        }
    }
}
