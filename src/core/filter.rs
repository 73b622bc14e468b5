//! # Title Filter
//!
//! Derives the visible subset of the dataset from the search query.
//! The result is rebuilt from scratch on every call; datasets are small
//! enough that nothing is cached.

use crate::core::post::Post;

/// Returns the posts whose title contains `query`, ignoring case.
///
/// Order is preserved. An empty query matches every post.
pub fn filter(dataset: &[Post], query: &str) -> Vec<Post> {
    if query.is_empty() {
        return dataset.to_vec();
    }

    let needle = query.to_lowercase();
    dataset
        .iter()
        .filter(|post| matches(post, &needle))
        .cloned()
        .collect()
}

/// `needle` must already be lowercased.
fn matches(post: &Post, needle: &str) -> bool {
    post.title.to_lowercase().contains(needle)
}
