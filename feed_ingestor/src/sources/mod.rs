//! Collection source abstraction.
//!
//! [`CollectionSource`] is the single seam between the sync logic and the
//! network: one call, one decoded payload or one classified [`FetchError`].
//! [`http::HttpSource`] is the production implementation; tests substitute
//! canned payloads.

pub mod http;

use async_trait::async_trait;
use reqwest::Url;
use serde_json::Value;

use crate::errors::FetchError;

#[async_trait]
pub trait CollectionSource {
    /// Fetches the first page of the collection at `url`.
    async fn fetch(&self, url: &Url) -> Result<Value, FetchError>;
}
