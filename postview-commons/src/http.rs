//! HTTP client utilities

use reqwest::{Client, ClientBuilder};
use std::time::Duration;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
pub const SHORT_TIMEOUT: Duration = Duration::from_secs(5);

pub const DEFAULT_USER_AGENT: &str = concat!("postview/", env!("CARGO_PKG_VERSION"));

/// Connect and whole-request timeouts applied to every client.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HttpTimeouts {
    pub connect: Duration,
    pub request: Duration,
}

impl Default for HttpTimeouts {
    fn default() -> Self {
        Self {
            connect: SHORT_TIMEOUT,
            request: DEFAULT_TIMEOUT,
        }
    }
}

/// Create an HTTP client with the given timeouts and user agent.
///
/// Falls back to a plain client if the builder rejects the configuration,
/// which only happens when the TLS backend cannot be initialised.
pub fn create_client(timeouts: HttpTimeouts, user_agent: Option<&str>) -> Client {
    ClientBuilder::new()
        .timeout(timeouts.request)
        .connect_timeout(timeouts.connect)
        .user_agent(user_agent.unwrap_or(DEFAULT_USER_AGENT))
        .build()
        .unwrap_or_else(|error| {
            tracing::warn!(%error, "failed to build configured HTTP client, using defaults");
            Client::new()
        })
}
