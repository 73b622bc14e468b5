//! # Header Component
//!
//! Top bar with the screen title and, once posts are loaded, how many of
//! them the current query shows.
//!
//! Stateless: all fields are props set by the parent each frame.
//!
//! ```text
//! 1. Counts known:  " Post Search                   12 of 100 "
//! 2. No counts:     " Post Search "
//! ```

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::component::Component;

pub const TITLE: &str = "Post Search";

pub struct Header {
    /// `(visible, total)`; `None` until the dataset is loaded
    pub counts: Option<(usize, usize)>,
}

impl Header {
    pub fn new(counts: Option<(usize, usize)>) -> Self {
        Self { counts }
    }
}

impl Component for Header {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let bar = Style::default()
            .fg(Color::White)
            .bg(Color::Blue)
            .add_modifier(Modifier::BOLD);

        let title = format!(" {TITLE} ");
        let mut spans = vec![Span::styled(title.clone(), bar)];

        if let Some((visible, total)) = self.counts {
            let counts = format!("{visible} of {total} ");
            let gap = (area.width as usize).saturating_sub(title.len() + counts.len());
            spans.push(Span::styled(" ".repeat(gap), bar));
            spans.push(Span::styled(counts, bar.remove_modifier(Modifier::BOLD)));
        }

        frame.render_widget(Paragraph::new(Line::from(spans)).style(bar), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render(header: &mut Header) -> String {
        let mut terminal = Terminal::new(TestBackend::new(50, 1)).unwrap();
        terminal.draw(|f| header.render(f, f.area())).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_header_with_counts() {
        let text = render(&mut Header::new(Some((12, 100))));
        assert!(text.contains("Post Search"));
        assert!(text.trim_end().ends_with("12 of 100"));
    }

    #[test]
    fn test_header_without_counts() {
        let text = render(&mut Header::new(None));
        assert!(text.contains("Post Search"));
        assert!(!text.contains(" of "));
    }
}
