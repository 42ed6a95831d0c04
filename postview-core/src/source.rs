//! Remote post sources.

use anyhow::Result;
use async_trait::async_trait;
use postview_commons::http::{HttpTimeouts, create_client};
use postview_config::SourceConfig;
use url::Url;

use crate::error::FetchFailure;
use crate::post::{Post, decode_posts};

/// Capability to read the post collection. The view does not care which
/// client implements it.
#[async_trait]
pub trait PostSource: Send + Sync {
    async fn fetch_posts(&self) -> Result<Vec<Post>, FetchFailure>;
}

/// Reads posts with a single `GET` against a fixed endpoint.
#[derive(Clone)]
pub struct HttpPostSource {
    client: reqwest::Client,
    endpoint: Url,
}

impl HttpPostSource {
    pub fn new(client: reqwest::Client, endpoint: Url) -> Self {
        Self { client, endpoint }
    }

    pub fn from_config(config: &SourceConfig) -> Result<Self> {
        let endpoint = config.endpoint_url()?;
        let timeouts = HttpTimeouts {
            connect: config.connect_timeout(),
            request: config.timeout(),
        };
        let client = create_client(timeouts, config.user_agent.as_deref());
        Ok(Self::new(client, endpoint))
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl PostSource for HttpPostSource {
    async fn fetch_posts(&self) -> Result<Vec<Post>, FetchFailure> {
        let url = self.endpoint.as_str();
        tracing::debug!(url, "fetching posts");

        let response = self
            .client
            .get(self.endpoint.clone())
            .send()
            .await
            .map_err(|source| FetchFailure::transport(url, source))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchFailure::status(url, status.as_u16()));
        }

        let body = response
            .bytes()
            .await
            .map_err(|source| FetchFailure::transport(url, source))?;
        let posts = decode_posts(&body).map_err(|source| FetchFailure::decode(url, source))?;

        tracing::debug!(url, count = posts.len(), "fetched posts");
        Ok(posts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_config_uses_configured_endpoint() {
        let config = SourceConfig {
            endpoint: "http://127.0.0.1:8080/posts".to_string(),
            ..SourceConfig::default()
        };
        let source = HttpPostSource::from_config(&config).unwrap();
        assert_eq!(source.endpoint().as_str(), "http://127.0.0.1:8080/posts");
    }

    #[test]
    fn from_config_rejects_invalid_endpoint() {
        let config = SourceConfig {
            endpoint: "posts".to_string(),
            ..SourceConfig::default()
        };
        assert!(HttpPostSource::from_config(&config).is_err());
    }
}
