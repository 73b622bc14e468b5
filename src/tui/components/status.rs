//! # Status Views
//!
//! Full-screen placeholders shown instead of the search UI while the fetch
//! is outstanding or after it failed.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::component::Component;

const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Spinner plus "Loading..." centered in the area.
pub struct LoadingView {
    frame_index: usize,
}

impl LoadingView {
    pub fn new(frame_index: usize) -> Self {
        Self { frame_index }
    }
}

impl Component for LoadingView {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let spinner = SPINNER_FRAMES[self.frame_index % SPINNER_FRAMES.len()];
        let lines = vec![
            Line::from(Span::styled(
                spinner,
                Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled("Loading...", Style::default().fg(Color::Blue))),
        ];
        render_centered(frame, area, lines);
    }
}

/// The fetch failure message centered in the area.
pub struct ErrorView<'a> {
    message: &'a str,
}

impl<'a> ErrorView<'a> {
    pub fn new(message: &'a str) -> Self {
        Self { message }
    }
}

impl Component for ErrorView<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let line = Line::from(Span::styled(
            self.message,
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ));
        render_centered(frame, area, vec![line]);
    }
}

fn render_centered(frame: &mut Frame, area: Rect, lines: Vec<Line<'_>>) {
    let [center] = Layout::vertical([Constraint::Length(lines.len() as u16)])
        .flex(Flex::Center)
        .areas(area);
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), center);
}
