//! # TUI Components
//!
//! All UI pieces of the search screen.
//!
//! ## Component Architecture
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Display components that receive all data as parameters:
//! - `Header`: Title bar with visible/total counts
//! - `LoadingView`, `ErrorView`: Full-screen placeholders before data is ready
//!
//! ### Stateful Components (Event-Driven)
//!
//! Components that manage local state and emit events:
//! - `SearchBox`: Query editor, emits `QueryChanged`
//! - `PostListState` / `PostList`: Cursor navigation and row taps, emits `Tap`
//!
//! Components receive external data as props, not by reaching into `App`.
//! The event loop translates their events into core `Action`s.
//!
//! ```text
//! components/
//! ├── mod.rs         (this file)
//! ├── header.rs      (Top bar)
//! ├── search_box.rs  (Query input)
//! ├── post_list.rs   (Filtered rows)
//! └── status.rs      (Loading / error views)
//! ```

pub mod header;
pub mod post_list;
pub mod search_box;
pub mod status;

pub use header::Header;
pub use post_list::{ListEvent, PostList, PostListState};
pub use search_box::{SearchBox, SearchEvent};
pub use status::{ErrorView, LoadingView};
