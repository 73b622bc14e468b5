//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use async_trait::async_trait;

use crate::api::{FetchError, PostSource};
use crate::core::action::{Action, update};
use crate::core::post::Post;
use crate::core::state::App;

/// A source that hands back a fixed dataset without any network.
pub struct StaticSource(pub Vec<Post>);

#[async_trait]
impl PostSource for StaticSource {
    fn name(&self) -> &str {
        "static"
    }

    async fn fetch_posts(&self) -> Result<Vec<Post>, FetchError> {
        Ok(self.0.clone())
    }
}

/// A source that always fails as if the server returned 500.
pub struct FailingSource;

#[async_trait]
impl PostSource for FailingSource {
    fn name(&self) -> &str {
        "failing"
    }

    async fn fetch_posts(&self) -> Result<Vec<Post>, FetchError> {
        Err(FetchError::Status(500))
    }
}

/// The two-post dataset used by most scenario tests.
pub fn hello_goodbye() -> Vec<Post> {
    vec![Post::new(1, "Hello World"), Post::new(2, "Goodbye")]
}

/// A handful of posts shaped like the real endpoint's data.
pub fn sample_posts() -> Vec<Post> {
    vec![
        Post::new(
            1,
            "sunt aut facere repellat provident occaecati excepturi optio reprehenderit",
        ),
        Post::new(2, "qui est esse"),
        Post::new(3, "ea molestias quasi exercitationem repellat qui ipsa sit aut"),
        Post::new(4, "eum et est occaecati"),
        Post::new(5, "nesciunt quas odio"),
        Post::new(6, "dolorem eum magni eos aperiam quia"),
        Post::new(7, "magnam facilis autem"),
        Post::new(8, "Dolorem Dolore Est Ipsam"),
    ]
}

/// Creates an App that has already received `posts` from the fetch.
pub fn ready_app(posts: Vec<Post>) -> App {
    let mut app = App::new();
    update(&mut app, Action::PostsLoaded(posts));
    app
}
