//! # SearchBox Component
//!
//! Single-line editor bound to the search query.
//!
//! ## Responsibilities
//!
//! - Capture text input (typing, paste)
//! - Handle editing (backspace, delete, cursor movement)
//! - Emit the full query whenever the text changes
//! - Show a placeholder while empty
//!
//! The buffer is internal state; the parent turns `QueryChanged` into a
//! core `Action::QueryChanged`. Enter is deliberately not handled here: it
//! belongs to the post list.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, BorderType, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

pub const PLACEHOLDER: &str = "Search by title...";

/// High-level events emitted by the SearchBox
#[derive(Debug, Clone, PartialEq)]
pub enum SearchEvent {
    QueryChanged(String),
}

pub struct SearchBox {
    /// Text buffer (Internal State)
    pub buffer: String,
    /// Byte offset of the cursor, always on a char boundary
    cursor: usize,
}

impl SearchBox {
    pub fn new() -> Self {
        Self {
            buffer: String::new(),
            cursor: 0,
        }
    }

    fn changed(&self) -> Option<SearchEvent> {
        Some(SearchEvent::QueryChanged(self.buffer.clone()))
    }

    /// Byte offset where the visible slice starts so the cursor stays inside
    /// a box `inner_width` columns wide.
    fn visible_start(&self, inner_width: usize) -> usize {
        if inner_width == 0 {
            return self.cursor;
        }
        let mut start = 0;
        while start < self.cursor && self.buffer[start..self.cursor].width() >= inner_width {
            start = next_char_boundary(&self.buffer, start);
        }
        start
    }
}

impl Default for SearchBox {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for SearchBox {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::Blue))
            .title(" Search ");

        let inner_width = area.width.saturating_sub(2) as usize;
        let start = self.visible_start(inner_width);

        let paragraph = if self.buffer.is_empty() {
            Paragraph::new(PLACEHOLDER).style(Style::default().fg(Color::DarkGray))
        } else {
            Paragraph::new(&self.buffer[start..]).style(Style::default().fg(Color::White))
        };
        frame.render_widget(paragraph.block(block), area);

        let cursor_col = self.buffer[start..self.cursor].width() as u16;
        let max_x = area.x + area.width.saturating_sub(2);
        frame.set_cursor_position(((area.x + 1 + cursor_col).min(max_x), area.y + 1));
    }
}

impl EventHandler for SearchBox {
    type Event = SearchEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::InputChar(c) => {
                self.buffer.insert(self.cursor, *c);
                self.cursor += c.len_utf8();
                self.changed()
            }
            TuiEvent::Paste(text) => {
                // Single-line field
                let clean: String = text.chars().filter(|c| !c.is_control()).collect();
                if clean.is_empty() {
                    return None;
                }
                self.buffer.insert_str(self.cursor, &clean);
                self.cursor += clean.len();
                self.changed()
            }
            TuiEvent::Backspace => {
                if self.cursor == 0 {
                    return None;
                }
                let prev = prev_char_boundary(&self.buffer, self.cursor);
                self.buffer.drain(prev..self.cursor);
                self.cursor = prev;
                self.changed()
            }
            TuiEvent::Delete => {
                if self.cursor >= self.buffer.len() {
                    return None;
                }
                let next = next_char_boundary(&self.buffer, self.cursor);
                self.buffer.drain(self.cursor..next);
                self.changed()
            }
            TuiEvent::CursorLeft => {
                self.cursor = prev_char_boundary(&self.buffer, self.cursor);
                None
            }
            TuiEvent::CursorRight => {
                if self.cursor < self.buffer.len() {
                    self.cursor = next_char_boundary(&self.buffer, self.cursor);
                }
                None
            }
            TuiEvent::CursorHome => {
                self.cursor = 0;
                None
            }
            TuiEvent::CursorEnd => {
                self.cursor = self.buffer.len();
                None
            }
            _ => None,
        }
    }
}

/// Find the byte offset of the previous character boundary before `pos` in `text`.
fn prev_char_boundary(text: &str, pos: usize) -> usize {
    text[..pos]
        .char_indices()
        .next_back()
        .map(|(i, _)| i)
        .unwrap_or(0)
}

/// Find the byte offset of the next character boundary after `pos` in `text`.
fn next_char_boundary(text: &str, pos: usize) -> usize {
    text[pos..]
        .char_indices()
        .nth(1)
        .map(|(i, _)| pos + i)
        .unwrap_or(text.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn type_str(input: &mut SearchBox, text: &str) -> Option<SearchEvent> {
        text.chars()
            .map(|c| input.handle_event(&TuiEvent::InputChar(c)))
            .last()
            .flatten()
    }

    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_typing_emits_full_query() {
        let mut input = SearchBox::new();
        assert_eq!(
            input.handle_event(&TuiEvent::InputChar('h')),
            Some(SearchEvent::QueryChanged("h".to_string()))
        );
        assert_eq!(
            type_str(&mut input, "ello"),
            Some(SearchEvent::QueryChanged("hello".to_string()))
        );
    }

    #[test]
    fn test_backspace() {
        let mut input = SearchBox::new();
        type_str(&mut input, "ab");
        assert_eq!(
            input.handle_event(&TuiEvent::Backspace),
            Some(SearchEvent::QueryChanged("a".to_string()))
        );
        input.handle_event(&TuiEvent::Backspace);
        assert_eq!(input.handle_event(&TuiEvent::Backspace), None);
        assert!(input.buffer.is_empty());
    }

    #[test]
    fn test_edit_in_middle() {
        let mut input = SearchBox::new();
        type_str(&mut input, "helo");
        input.handle_event(&TuiEvent::CursorLeft);
        assert_eq!(
            input.handle_event(&TuiEvent::InputChar('l')),
            Some(SearchEvent::QueryChanged("hello".to_string()))
        );
        input.handle_event(&TuiEvent::CursorHome);
        assert_eq!(
            input.handle_event(&TuiEvent::Delete),
            Some(SearchEvent::QueryChanged("ello".to_string()))
        );
        input.handle_event(&TuiEvent::CursorEnd);
        assert_eq!(input.handle_event(&TuiEvent::Delete), None);
    }

    #[test]
    fn test_multibyte_editing() {
        let mut input = SearchBox::new();
        type_str(&mut input, "café");
        input.handle_event(&TuiEvent::CursorLeft);
        input.handle_event(&TuiEvent::CursorRight);
        assert_eq!(
            input.handle_event(&TuiEvent::Backspace),
            Some(SearchEvent::QueryChanged("caf".to_string()))
        );
    }

    #[test]
    fn test_paste_drops_newlines() {
        let mut input = SearchBox::new();
        assert_eq!(
            input.handle_event(&TuiEvent::Paste("qui\nest\r\n".to_string())),
            Some(SearchEvent::QueryChanged("quiest".to_string()))
        );
        assert_eq!(input.handle_event(&TuiEvent::Paste("\n".to_string())), None);
    }

    #[test]
    fn test_cursor_moves_do_not_emit() {
        let mut input = SearchBox::new();
        type_str(&mut input, "abc");
        assert_eq!(input.handle_event(&TuiEvent::CursorLeft), None);
        assert_eq!(input.handle_event(&TuiEvent::CursorHome), None);
        assert_eq!(input.handle_event(&TuiEvent::Submit), None);
    }

    #[test]
    fn test_render_placeholder_when_empty() {
        let mut terminal = Terminal::new(TestBackend::new(40, 3)).unwrap();
        let mut input = SearchBox::new();
        terminal.draw(|f| input.render(f, f.area())).unwrap();
        assert!(screen_text(&terminal).contains(PLACEHOLDER));
    }

    #[test]
    fn test_render_shows_query() {
        let mut terminal = Terminal::new(TestBackend::new(40, 3)).unwrap();
        let mut input = SearchBox::new();
        type_str(&mut input, "hello");
        terminal.draw(|f| input.render(f, f.area())).unwrap();

        let text = screen_text(&terminal);
        assert!(text.contains("hello"));
        assert!(!text.contains(PLACEHOLDER));
    }

    #[test]
    fn test_long_query_scrolls_to_cursor() {
        let mut input = SearchBox::new();
        type_str(&mut input, "abcdefghij");
        // 6 inner columns: the cursor sits after the last char
        let start = input.visible_start(6);
        assert_eq!(&input.buffer[start..], "fghij");
        input.handle_event(&TuiEvent::CursorHome);
        assert_eq!(input.visible_start(6), 0);
    }
}
