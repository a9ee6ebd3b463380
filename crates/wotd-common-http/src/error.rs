use std::time::Duration;

/// Failures talking to a remote service.
#[derive(Debug, thiserror::Error)]
pub enum HttpError {
    #[error("failed to build HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),

    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("request to {url} timed out")]
    Timeout { url: String },

    #[error("rate limited (retry after {retry_after:?})")]
    RateLimited { retry_after: Option<Duration> },

    #[error("server error: {status}")]
    ServerError { status: u16, body: String },

    #[error("client error: {status}")]
    ClientError { status: u16, body: String },

    #[error("invalid JSON from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Drop the query string, which may carry API keys.
fn redact(url: &str) -> String {
    url.split_once('?').map_or(url, |(base, _)| base).to_string()
}

impl HttpError {
    pub(crate) fn request(url: &str, source: reqwest::Error) -> Self {
        let url = redact(url);
        if source.is_timeout() {
            HttpError::Timeout { url }
        } else {
            HttpError::Request {
                url,
                source: source.without_url(),
            }
        }
    }

    pub(crate) fn decode(url: &str, source: serde_json::Error) -> Self {
        HttpError::Decode {
            url: redact(url),
            source,
        }
    }

    /// HTTP status carried by the error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            HttpError::ServerError { status, .. } | HttpError::ClientError { status, .. } => {
                Some(*status)
            }
            HttpError::RateLimited { .. } => Some(429),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}
