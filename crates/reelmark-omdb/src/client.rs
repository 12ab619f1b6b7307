use async_trait::async_trait;
use reelmark_types::{MovieDetail, MovieId, MovieSummary};
use std::time::Duration;

use crate::traits::{MetadataApi, SearchError};
use crate::wire::{parse_detail, parse_search};
use crate::Result;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// HTTP client for the OMDb API
///
/// Both queries are GET requests against one endpoint, parameterized by
/// `s=<term>` or `i=<id>` plus the API key.
#[derive(Debug, Clone)]
pub struct OmdbClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl OmdbClient {
    pub const DEFAULT_BASE_URL: &'static str = "https://www.omdbapi.com/";

    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(concat!("reelmark/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            base_url: Self::DEFAULT_BASE_URL.to_string(),
            api_key: api_key.into(),
        })
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get(&self, params: &[(&str, &str)]) -> Result<String> {
        let body = self
            .http
            .get(&self.base_url)
            .query(params)
            .query(&[("apikey", self.api_key.as_str())])
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;
        Ok(body)
    }
}

#[async_trait]
impl MetadataApi for OmdbClient {
    async fn search(&self, term: &str) -> std::result::Result<Vec<MovieSummary>, SearchError> {
        tracing::debug!(term, "searching");
        let body = self.get(&[("s", term)]).await?;
        let movies = parse_search(&body)?;
        tracing::debug!(term, hits = movies.len(), "search finished");
        Ok(movies)
    }

    async fn fetch_detail(&self, id: &MovieId) -> Result<MovieDetail> {
        tracing::debug!(id = %id, "fetching detail");
        let body = self.get(&[("i", id.as_str())]).await?;
        parse_detail(id, &body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_base_url() -> Result<()> {
        let client = OmdbClient::new("key")?;
        assert_eq!(client.base_url(), "https://www.omdbapi.com/");

        let client = client.with_base_url("http://127.0.0.1:9/");
        assert_eq!(client.base_url(), "http://127.0.0.1:9/");
        Ok(())
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_network_error() -> Result<()> {
        // Port 9 (discard) on loopback refuses connections on test hosts
        let client = OmdbClient::new("key")?.with_base_url("http://127.0.0.1:9/");

        let err = client.search("alien").await.unwrap_err();
        assert!(matches!(err, SearchError::Network(_)));

        assert!(client.fetch_detail(&MovieId::from("tt1")).await.is_err());
        Ok(())
    }
}
