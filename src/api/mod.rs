pub mod source;

pub use source::{FetchError, HttpPostSource, PostSource};
