use serde::{Deserialize, Serialize};

/// Stable identifier assigned by the remote API.
pub type PostId = i64;

/// A single post as returned by the posts endpoint.
///
/// Only `id` and `title` are required on the wire. Any other fields the
/// API sends (`userId`, ...) are ignored.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Post {
    pub id: PostId,
    pub title: String,
    #[serde(default)]
    pub body: String,
}

impl Post {
    pub fn new(id: PostId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            body: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_ignores_extra_fields() {
        let json = r#"{"userId": 7, "id": 3, "title": "qui est esse", "body": "est rerum"}"#;
        let post: Post = serde_json::from_str(json).unwrap();
        assert_eq!(post.id, 3);
        assert_eq!(post.title, "qui est esse");
        assert_eq!(post.body, "est rerum");
    }

    #[test]
    fn test_deserialize_body_is_optional() {
        let post: Post = serde_json::from_str(r#"{"id": 1, "title": "Hello World"}"#).unwrap();
        assert_eq!(post, Post::new(1, "Hello World"));
    }

    #[test]
    fn test_deserialize_rejects_missing_title() {
        let result: Result<Post, _> = serde_json::from_str(r#"{"id": 1}"#);
        assert!(result.is_err());
    }
}
