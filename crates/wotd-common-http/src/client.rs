//! Shared `reqwest` client with status mapping.

use reqwest::{Client, ClientBuilder, Response};
use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::error::HttpError;

#[derive(Debug, Clone)]
pub struct HttpConfig {
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
    pub user_agent: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
            user_agent: format!("wotd/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

/// Cheap to clone; clones share one connection pool.
#[derive(Debug, Clone)]
pub struct HttpClient {
    inner: Client,
}

impl HttpClient {
    pub fn new() -> Result<Self, HttpError> {
        Self::with_config(HttpConfig::default())
    }

    pub fn with_config(config: HttpConfig) -> Result<Self, HttpError> {
        let inner = ClientBuilder::new()
            .connect_timeout(config.connect_timeout)
            .timeout(config.request_timeout)
            .user_agent(config.user_agent)
            .build()
            .map_err(HttpError::ClientBuild)?;
        Ok(Self { inner })
    }

    /// Send a GET request. Any status is returned as-is.
    pub async fn get(&self, url: &str) -> Result<Response, HttpError> {
        tracing::debug!(url = %url, "GET");
        let response = self
            .inner
            .get(url)
            .send()
            .await
            .map_err(|e| HttpError::request(url, e))?;
        tracing::debug!(status = %response.status(), url = %url, "GET response");
        Ok(response)
    }

    /// GET a URL and return its body, failing on a non-success status.
    pub async fn get_text(&self, url: &str) -> Result<String, HttpError> {
        let response = Self::check_response(self.get(url).await?).await?;
        response.text().await.map_err(|e| HttpError::request(url, e))
    }

    /// GET a URL and decode its JSON body, failing on a non-success status.
    pub async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, HttpError> {
        let body = self.get_text(url).await?;
        serde_json::from_str(&body).map_err(|source| HttpError::decode(url, source))
    }

    /// Map a non-success status onto [`HttpError`].
    pub async fn check_response(response: Response) -> Result<Response, HttpError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        if status.as_u16() == 429 {
            let retry_after = response
                .headers()
                .get("retry-after")
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.parse::<u64>().ok())
                .map(Duration::from_secs);
            return Err(HttpError::RateLimited { retry_after });
        }

        let body = response.text().await.unwrap_or_default();
        let status = status.as_u16();
        if (500..600).contains(&status) {
            Err(HttpError::ServerError { status, body })
        } else {
            Err(HttpError::ClientError { status, body })
        }
    }
}
