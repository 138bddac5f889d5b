use async_trait::async_trait;

use crate::error::FetchError;

/// URIs with this prefix read a local file's raw text instead of touching
/// the network. Used for tests and offline runs.
pub const FILE_SCHEME: &str = "file:";

/// Boundary for obtaining the page text behind a query URI.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    async fn fetch(&self, uri: &str) -> Result<String, FetchError>;
}

/// Production fetcher: plain GET, no retries, no auth.
#[derive(Clone)]
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }
}

impl Default for HttpFetcher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch(&self, uri: &str) -> Result<String, FetchError> {
        if let Some(path) = uri.strip_prefix(FILE_SCHEME) {
            return Ok(tokio::fs::read_to_string(path).await?);
        }

        let response = self.client.get(uri).send().await?;
        if !response.status().is_success() {
            return Err(FetchError::Status(response.status()));
        }

        Ok(response.text().await?)
    }
}
