use thiserror::Error;

use crate::post::DecodeFailure;

/// Any unsuccessful attempt to retrieve posts.
///
/// The variants only enrich the diagnostic; callers treat every failure the
/// same way.
#[derive(Debug, Error)]
pub enum FetchFailure {
    #[error("request to {url} failed")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("request to {url} timed out")]
    Timeout {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("{url} responded with HTTP {status}")]
    Status { url: String, status: u16 },
    #[error("failed to decode posts from {url}")]
    Decode {
        url: String,
        #[source]
        source: DecodeFailure,
    },
}

impl FetchFailure {
    pub(crate) fn transport(url: &str, source: reqwest::Error) -> Self {
        if source.is_timeout() {
            Self::Timeout {
                url: url.to_string(),
                source,
            }
        } else {
            Self::Transport {
                url: url.to_string(),
                source,
            }
        }
    }

    pub fn decode(url: &str, source: DecodeFailure) -> Self {
        Self::Decode {
            url: url.to_string(),
            source,
        }
    }

    pub fn status(url: &str, status: u16) -> Self {
        Self::Status {
            url: url.to_string(),
            status,
        }
    }

    /// The URL the failed request targeted.
    pub fn url(&self) -> &str {
        match self {
            Self::Transport { url, .. }
            | Self::Timeout { url, .. }
            | Self::Status { url, .. }
            | Self::Decode { url, .. } => url,
        }
    }
}
