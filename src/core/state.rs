//! # Application State
//!
//! Core screen state for post-search. Domain data only; presentation
//! state (search box cursor, list cursor) lives in the `tui` module.
//!
//! ```text
//! App
//! ├── load_state: LoadState         // Loading | Error(msg) | Ready
//! ├── dataset: Vec<Post>            // everything the fetch returned
//! ├── query: String                 // current search text
//! ├── filtered: Vec<Post>           // dataset ∩ query, rebuilt on change
//! └── highlighted: Option<PostId>   // last tapped post
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use crate::core::post::{Post, PostId};

/// Fixed user-facing message for any fetch failure.
pub const LOAD_ERROR_MESSAGE: &str = "Unable to load data";

/// Lifecycle of the single fetch. `Error` and `Ready` are terminal.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadState {
    #[default]
    Loading,
    Error(String),
    Ready,
}

impl LoadState {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, LoadState::Loading)
    }
}

#[derive(Debug, Default)]
pub struct App {
    pub load_state: LoadState,
    pub dataset: Vec<Post>,
    pub query: String,
    pub filtered: Vec<Post>,
    /// Survives filtering: a highlighted post that scrolls out of the
    /// filtered view is highlighted again when it comes back.
    pub highlighted: Option<PostId>,
}

impl App {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_highlighted(&self, id: PostId) -> bool {
        self.highlighted == Some(id)
    }
}
