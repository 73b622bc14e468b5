//! # Post List Component
//!
//! The filtered posts, one row each, keyed by post id.
//!
//! Two separate notions of "selected" live here:
//! - the **cursor** (`ListState`), moved with arrows / wheel, purely for
//!   keyboard navigation;
//! - the **highlight** (`App::highlighted`), set when a row is tapped with
//!   Enter or a mouse click. Highlighted rows get a tinted background.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `PostListState` lives in `TuiState`
//! - `PostList` is created each frame with borrowed state and props

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::core::post::{Post, PostId};
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

const CURSOR_SYMBOL: &str = "▶ ";
const ID_COLUMN_WIDTH: usize = 6;
const HIGHLIGHT_BG: Color = Color::Rgb(204, 229, 255);

/// Events emitted by the post list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListEvent {
    /// A row was tapped.
    Tap(PostId),
}

/// Persistent state for the post list.
#[derive(Debug, Default)]
pub struct PostListState {
    pub list_state: ListState,
    /// Ids of the rows currently shown, in order
    rows: Vec<PostId>,
    /// Inner area of the last render, for mouse hit testing
    rows_area: Rect,
}

impl PostListState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Re-key the rows after the filtered view changed. Keeps the cursor
    /// in range; an empty view has no cursor.
    pub fn sync(&mut self, posts: &[Post]) {
        self.rows = posts.iter().map(|p| p.id).collect();
        if self.rows.is_empty() {
            self.list_state.select(None);
        } else {
            let last = self.rows.len() - 1;
            let selected = self.list_state.selected().unwrap_or(0).min(last);
            self.list_state.select(Some(selected));
        }
    }

    pub fn cursor(&self) -> Option<usize> {
        self.list_state.selected()
    }

    fn page_size(&self) -> usize {
        (self.rows_area.height as usize).max(1)
    }

    fn move_cursor(&mut self, delta: isize) {
        if self.rows.is_empty() {
            return;
        }
        let last = self.rows.len() - 1;
        let current = self.list_state.selected().unwrap_or(0);
        let next = current.saturating_add_signed(delta).min(last);
        self.list_state.select(Some(next));
    }

    /// Maps a screen position to a row index using the last rendered layout.
    pub fn hit_test(&self, column: u16, row: u16) -> Option<usize> {
        let area = self.rows_area;
        if column < area.x
            || column >= area.x + area.width
            || row < area.y
            || row >= area.y + area.height
        {
            return None;
        }
        let index = self.list_state.offset() + (row - area.y) as usize;
        (index < self.rows.len()).then_some(index)
    }
}

impl EventHandler for PostListState {
    type Event = ListEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::ListUp => {
                self.move_cursor(-1);
                None
            }
            TuiEvent::ListDown => {
                self.move_cursor(1);
                None
            }
            TuiEvent::ListPageUp => {
                self.move_cursor(-(self.page_size() as isize));
                None
            }
            TuiEvent::ListPageDown => {
                self.move_cursor(self.page_size() as isize);
                None
            }
            TuiEvent::Submit => self
                .cursor()
                .and_then(|i| self.rows.get(i))
                .map(|&id| ListEvent::Tap(id)),
            TuiEvent::MouseClick(column, row) => {
                let index = self.hit_test(*column, *row)?;
                self.list_state.select(Some(index));
                Some(ListEvent::Tap(self.rows[index]))
            }
            _ => None,
        }
    }
}

/// Transient render wrapper for the post list.
pub struct PostList<'a> {
    state: &'a mut PostListState,
    posts: &'a [Post],
    highlighted: Option<PostId>,
}

impl<'a> PostList<'a> {
    pub fn new(state: &'a mut PostListState, posts: &'a [Post], highlighted: Option<PostId>) -> Self {
        Self {
            state,
            posts,
            highlighted,
        }
    }
}

impl Component for PostList<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Blue))
            .title(" Posts ")
            .title_bottom(Line::from(" ↑↓ Move  Enter/Click Highlight  Esc Quit ").centered());

        self.state.rows_area = block.inner(area);

        if self.posts.is_empty() {
            let empty = Paragraph::new("No posts match")
                .style(Style::default().fg(Color::DarkGray))
                .centered()
                .block(block);
            frame.render_widget(empty, area);
            return;
        }

        let title_width = (self.state.rows_area.width as usize)
            .saturating_sub(CURSOR_SYMBOL.width() + ID_COLUMN_WIDTH);

        let items: Vec<ListItem> = self
            .posts
            .iter()
            .map(|post| {
                let style = if self.highlighted == Some(post.id) {
                    Style::default().fg(Color::Black).bg(HIGHLIGHT_BG)
                } else {
                    Style::default()
                };
                let id = format!("{:>width$}  ", post.id, width = ID_COLUMN_WIDTH - 2);
                ListItem::new(Line::from(vec![
                    Span::styled(id, Style::default().fg(Color::DarkGray)),
                    Span::raw(truncate(&post.title, title_width)),
                ]))
                .style(style)
            })
            .collect();

        let list = List::new(items)
            .block(block)
            .highlight_symbol(CURSOR_SYMBOL)
            .highlight_style(Style::default().add_modifier(Modifier::BOLD));

        frame.render_stateful_widget(list, area, &mut self.state.list_state);
    }
}

/// Unicode-width-aware truncation with ellipsis.
fn truncate(s: &str, max_width: usize) -> String {
    if max_width == 0 {
        return String::new();
    }
    if s.width() <= max_width {
        return s.to_string();
    }
    let mut result = String::new();
    let mut width = 0;
    for c in s.chars() {
        let cw = c.width().unwrap_or(0);
        if width + cw + 1 > max_width {
            break;
        }
        result.push(c);
        width += cw;
    }
    result.push('…');
    result
}
