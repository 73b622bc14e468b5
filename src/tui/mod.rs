//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the screen,
//! and translates keyboard and mouse events into core `Action` values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! - **Loading**: draws every ~80ms so the spinner turns.
//! - **Ready / Error**: sleeps up to 500ms, only redraws on events, on
//!   terminal resize, or when the fetch result arrives.
//!
//! All pending events are drained before the next draw so fast typing
//! doesn't queue up frames.

pub mod component;
pub mod components;
pub mod event;
pub mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::sync::{Arc, mpsc};
use std::time::{Duration, Instant};

use crossterm::event::{
    DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
};
use crossterm::execute;
use ratatui::DefaultTerminal;

use crate::api::{HttpPostSource, PostSource};
use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::state::{App, LoadState};
use crate::tui::component::EventHandler;
use crate::tui::components::{ListEvent, PostListState, SearchBox, SearchEvent};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// TUI-specific presentation state (not part of core screen logic)
pub struct TuiState {
    pub search_box: SearchBox,
    pub post_list: PostListState,
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            search_box: SearchBox::new(),
            post_list: PostListState::new(),
        }
    }
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(stdout(), EnableMouseCapture, EnableBracketedPaste)?;
        info!("Terminal modes enabled (mouse, bracketed paste)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture, DisableBracketedPaste);
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let source: Arc<dyn PostSource> = Arc::new(HttpPostSource::new(config.posts_url));
    let mut app = App::new();
    let mut tui = TuiState::new();

    // Fetch results come back on this channel
    let (tx, rx) = mpsc::channel();
    spawn_fetch(source, tx);

    let mut terminal = ratatui::init();
    let result = match TerminalModeGuard::new() {
        Ok(_guard) => event_loop(&mut terminal, &mut app, &mut tui, &rx),
        Err(e) => {
            warn!("Failed to enable terminal modes: {}", e);
            event_loop(&mut terminal, &mut app, &mut tui, &rx)
        }
    };
    ratatui::restore();

    info!("Exiting in state {:?}", app.load_state);
    result
}

fn event_loop(
    terminal: &mut DefaultTerminal,
    app: &mut App,
    tui: &mut TuiState,
    rx: &mpsc::Receiver<Action>,
) -> std::io::Result<()> {
    let start_time = Instant::now();
    let mut needs_redraw = true; // Force first frame

    loop {
        let animating = app.load_state == LoadState::Loading;
        if animating {
            needs_redraw = true;
        }

        if needs_redraw {
            let spinner_frame = (start_time.elapsed().as_secs_f32() * 12.0) as usize;
            terminal.draw(|f| ui::draw_ui(f, app, tui, spinner_frame))?;
            needs_redraw = false;
        }

        // Dynamic poll timeout: short when animating (~12fps), long when idle
        let timeout = if animating {
            Duration::from_millis(80)
        } else {
            Duration::from_millis(500)
        };
        let first_event = poll_event_timeout(timeout);
        if first_event.is_some() {
            needs_redraw = true;
        }

        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            if dispatch(app, tui, &event) == Effect::Quit {
                return Ok(());
            }
        }

        // Fetch completion
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received fetch result");
            if update(app, action) == Effect::Quit {
                return Ok(());
            }
            tui.post_list.sync(&app.filtered);
        }
    }
}

/// Routes one terminal event to the component that owns it and applies
/// the resulting core action.
fn dispatch(app: &mut App, tui: &mut TuiState, event: &TuiEvent) -> Effect {
    match event {
        TuiEvent::Quit | TuiEvent::ForceQuit => return update(app, Action::Quit),
        TuiEvent::Resize => return Effect::None,
        _ => {}
    }

    // Search box and list don't exist until the data is in
    if app.load_state != LoadState::Ready {
        return Effect::None;
    }

    if let Some(ListEvent::Tap(id)) = tui.post_list.handle_event(event) {
        return update(app, Action::Select(id));
    }

    if let Some(SearchEvent::QueryChanged(query)) = tui.search_box.handle_event(event) {
        let effect = update(app, Action::QueryChanged(query));
        tui.post_list.sync(&app.filtered);
        return effect;
    }

    Effect::None
}

fn spawn_fetch(source: Arc<dyn PostSource>, tx: mpsc::Sender<Action>) -> tokio::task::JoinHandle<()> {
    info!("Spawning fetch ({} source)", source.name());
    tokio::spawn(async move {
        let action = match source.fetch_posts().await {
            Ok(posts) => Action::PostsLoaded(posts),
            Err(e) => Action::LoadFailed(e.to_string()),
        };
        if tx.send(action).is_err() {
            warn!("Fetch finished after the screen closed, discarding result");
        }
    })
}
