use async_trait::async_trait;
use reqwest::{Client, Url};
use serde_json::Value;

use crate::{
    errors::{FetchError, SourceInitError},
    sources::CollectionSource,
    text::truncate_chars,
};

const ERROR_BODY_CHARS: usize = 512;

/// Plain GET against the configured endpoint. No retry, no pagination, and
/// no timeout beyond the transport defaults.
pub struct HttpSource {
    client: Client,
}

impl HttpSource {
    /// Creates a source with its own client.
    pub fn new() -> Result<Self, SourceInitError> {
        let client = Client::builder()
            .user_agent(concat!("ground-sync/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client })
    }

    /// Wraps an existing client.
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl CollectionSource for HttpSource {
    async fn fetch(&self, url: &Url) -> Result<Value, FetchError> {
        let network = |source| FetchError::Network {
            url: url.to_string(),
            source,
        };

        let response = self.client.get(url.clone()).send().await.map_err(network)?;
        let status = response.status();

        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(FetchError::HttpStatus {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("Unknown"),
                body: truncate_chars(&body, ERROR_BODY_CHARS),
            });
        }

        let bytes = response.bytes().await.map_err(network)?;
        tracing::debug!(%url, bytes = bytes.len(), "fetched collection");

        serde_json::from_slice(&bytes).map_err(FetchError::Decode)
    }
}
