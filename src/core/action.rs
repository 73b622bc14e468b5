//! # Actions
//!
//! Everything that can happen on the screen becomes an `Action`.
//! The fetch finishes? That's `Action::PostsLoaded(posts)`.
//! User types a character? The new query arrives as `Action::QueryChanged`.
//!
//! The `update()` function takes the current state and an action,
//! applies it, and returns an `Effect` telling the event loop what to do
//! next. No I/O here.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```

use log::{debug, info, warn};

use crate::core::filter::filter;
use crate::core::post::{Post, PostId};
use crate::core::state::{App, LOAD_ERROR_MESSAGE, LoadState};

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// The fetch returned a dataset.
    PostsLoaded(Vec<Post>),
    /// The fetch failed. The cause is for the log only.
    LoadFailed(String),
    /// The search text changed to the given value.
    QueryChanged(String),
    /// A row was tapped.
    Select(PostId),
    Quit,
}

/// Side effects requested by the reducer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::PostsLoaded(posts) => {
            if app.load_state.is_terminal() {
                warn!(
                    "Ignoring late fetch result ({} posts): state is {:?}",
                    posts.len(),
                    app.load_state
                );
                return Effect::None;
            }
            info!("Loaded {} posts", posts.len());
            app.filtered = posts.clone();
            app.dataset = posts;
            app.load_state = LoadState::Ready;
            Effect::None
        }
        Action::LoadFailed(cause) => {
            if app.load_state.is_terminal() {
                warn!("Ignoring late fetch failure: {}", cause);
                return Effect::None;
            }
            warn!("Failed to load posts: {}", cause);
            app.load_state = LoadState::Error(LOAD_ERROR_MESSAGE.to_string());
            Effect::None
        }
        Action::QueryChanged(query) => {
            if app.load_state != LoadState::Ready {
                debug!("Query change before data is ready, ignoring");
                return Effect::None;
            }
            app.filtered = filter(&app.dataset, &query);
            debug!(
                "Query {:?} matches {}/{} posts",
                query,
                app.filtered.len(),
                app.dataset.len()
            );
            app.query = query;
            Effect::None
        }
        Action::Select(id) => {
            if !app.is_highlighted(id) {
                debug!("Highlighting post {}", id);
            }
            app.highlighted = Some(id);
            Effect::None
        }
        Action::Quit => Effect::Quit,
    }
}
