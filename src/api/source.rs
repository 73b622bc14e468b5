use std::fmt;

use async_trait::async_trait;
use log::{debug, info};

use crate::core::post::Post;

/// Errors that can occur while fetching posts.
///
/// The screen shows one message for all of these; the variants exist so
/// the log says what actually went wrong.
#[derive(Debug)]
pub enum FetchError {
    /// Network-level failure (DNS, connection refused, body read).
    Network(String),
    /// The server answered with a non-success status.
    Status(u16),
    /// The body was not a JSON array of posts.
    Parse(String),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Network(msg) => write!(f, "network error: {msg}"),
            FetchError::Status(status) => write!(f, "unexpected HTTP status {status}"),
            FetchError::Parse(msg) => write!(f, "parse error: {msg}"),
        }
    }
}

impl std::error::Error for FetchError {}

/// Somewhere posts can be loaded from.
#[async_trait]
pub trait PostSource: Send + Sync {
    /// Returns a short name for logging.
    fn name(&self) -> &str;

    /// Loads the full dataset in one request.
    async fn fetch_posts(&self) -> Result<Vec<Post>, FetchError>;
}

/// Fetches posts with a single `GET` to a fixed URL.
pub struct HttpPostSource {
    client: reqwest::Client,
    url: String,
}

impl HttpPostSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: url.into(),
        }
    }
}

#[async_trait]
impl PostSource for HttpPostSource {
    fn name(&self) -> &str {
        "http"
    }

    async fn fetch_posts(&self) -> Result<Vec<Post>, FetchError> {
        info!("GET {}", self.url);

        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        let status = response.status();
        debug!("Response status: {}", status);
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;
        debug!("Response body: {} bytes", body.len());

        serde_json::from_str::<Vec<Post>>(&body).map_err(|e| FetchError::Parse(e.to_string()))
    }
}
