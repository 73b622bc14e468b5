//! # Core Screen Logic
//!
//! This module contains post-search's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • State (screen data)  │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │  • filter() (search)    │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │
//!                   ┌────────────┴────────────┐
//!                   ▼                         ▼
//!            ┌────────────┐            ┌────────────┐
//!            │    TUI     │            │    API     │
//!            │  Adapter   │            │  (fetch)   │
//!            │ (ratatui)  │            │ (reqwest)  │
//!            └────────────┘            └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`post`]: The `Post` record as it comes off the wire
//! - [`filter`]: Case-insensitive title search
//! - [`state`]: The `App` struct — all screen state in one place
//! - [`action`]: The `Action` enum and the `update()` reducer
//! - [`config`]: Settings resolution (file, env, CLI)

pub mod action;
pub mod config;
pub mod filter;
pub mod post;
pub mod state;

pub use action::{Action, Effect, update};
pub use post::{Post, PostId};
pub use state::{App, LoadState};
