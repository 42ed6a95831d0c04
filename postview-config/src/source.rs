use std::time::Duration;

use anyhow::{Context, Result, ensure};
use serde::Deserialize;
use url::Url;

use crate::constants::source;

/// Where posts are fetched from and how long a fetch may take.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SourceConfig {
    /// Absolute http(s) URL returning a JSON array of posts
    #[serde(default = "SourceConfig::default_endpoint")]
    pub endpoint: String,

    /// Whole-request timeout in seconds
    #[serde(default = "SourceConfig::default_timeout_seconds")]
    pub timeout_seconds: u64,

    /// TCP connect timeout in seconds
    #[serde(default = "SourceConfig::default_connect_timeout_seconds")]
    pub connect_timeout_seconds: u64,

    /// Overrides the default `postview/<version>` user agent
    #[serde(default)]
    pub user_agent: Option<String>,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            endpoint: Self::default_endpoint(),
            timeout_seconds: Self::default_timeout_seconds(),
            connect_timeout_seconds: Self::default_connect_timeout_seconds(),
            user_agent: None,
        }
    }
}

impl SourceConfig {
    fn default_endpoint() -> String {
        source::DEFAULT_ENDPOINT.to_string()
    }

    const fn default_timeout_seconds() -> u64 {
        source::DEFAULT_TIMEOUT_SECONDS
    }

    const fn default_connect_timeout_seconds() -> u64 {
        source::DEFAULT_CONNECT_TIMEOUT_SECONDS
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_seconds)
    }

    /// Parsed endpoint. Only http and https are accepted.
    pub fn endpoint_url(&self) -> Result<Url> {
        let url = Url::parse(&self.endpoint)
            .with_context(|| format!("invalid source endpoint '{}'", self.endpoint))?;
        ensure!(
            matches!(url.scheme(), "http" | "https"),
            "source endpoint '{}' must use http or https",
            self.endpoint
        );
        Ok(url)
    }

    pub fn validate(&self) -> Result<()> {
        self.endpoint_url()?;
        ensure!(
            self.timeout_seconds > 0,
            "source.timeout_seconds must be greater than zero"
        );
        ensure!(
            self.connect_timeout_seconds > 0,
            "source.connect_timeout_seconds must be greater than zero"
        );
        Ok(())
    }
}
