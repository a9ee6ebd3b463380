//! Sitemap notification for search engines.

use regex::Regex;
use serde::Serialize;
use url::Url;
use wotd_common_http::HttpClient;

pub const PING_O_MATIC_URL: &str = "http://rpc.pingomatic.com/ping/";
const RESPONSE_PREVIEW_CHARS: usize = 100;

/// A notification endpoint, with its query already filled in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchEngine {
    pub name: String,
    pub url: String,
}

impl SearchEngine {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }

    /// Ping-O-Matic, which relays to Google, Bing and other aggregators.
    pub fn ping_o_matic(title: &str, site_url: &str, sitemap_url: &str) -> Result<Self, url::ParseError> {
        let url = Url::parse_with_params(
            PING_O_MATIC_URL,
            &[
                ("title", title),
                ("blogurl", site_url),
                ("rssurl", sitemap_url),
                ("chk_weblogscom", "on"),
                ("chk_google", "on"),
            ],
        )?;
        Ok(Self::new("Ping-O-Matic", url.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PingResult {
    pub engine: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
}

impl PingResult {
    pub fn is_success(&self) -> bool {
        self.error.is_none() && self.status.is_some_and(|s| (200..300).contains(&s))
    }
}

/// Extract `words_hash` from a deployed `health.txt`.
pub fn parse_words_hash(health: &str) -> Option<String> {
    let pattern = Regex::new(r"(?m)^words_hash:\s*(\w+)").ok()?;
    pattern
        .captures(health)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

#[derive(Debug, Clone)]
pub struct PingService {
    client: HttpClient,
    site_url: String,
}

impl PingService {
    pub fn new(client: HttpClient, site_url: &str) -> Self {
        Self {
            client,
            site_url: site_url.strip_suffix('/').unwrap_or(site_url).to_string(),
        }
    }

    pub fn site_url(&self) -> &str {
        &self.site_url
    }

    pub fn sitemap_url(&self) -> String {
        format!("{}/sitemap-index.xml", self.site_url)
    }

    pub fn health_url(&self) -> String {
        format!("{}/health.txt", self.site_url)
    }

    /// The live site's `words_hash`, or `None` when it cannot be read.
    pub async fn fetch_deployed_hash(&self) -> Option<String> {
        let url = self.health_url();
        match self.client.get_text(&url).await {
            Ok(body) => {
                let hash = parse_words_hash(&body);
                if hash.is_none() {
                    tracing::warn!(url = %url, "could not find words_hash in health.txt");
                }
                hash
            }
            Err(e) => {
                tracing::error!(url = %url, error = %e, "error fetching health.txt");
                None
            }
        }
    }

    /// Notify one engine. Failures are captured in the result.
    pub async fn ping(&self, engine: &SearchEngine) -> PingResult {
        tracing::info!(engine = %engine.name, "pinging");
        match self.client.get(&engine.url).await {
            Ok(response) => {
                let status = response.status().as_u16();
                let body = response
                    .text()
                    .await
                    .ok()
                    .map(|text| text.chars().take(RESPONSE_PREVIEW_CHARS).collect());
                PingResult {
                    engine: engine.name.clone(),
                    status: Some(status),
                    error: None,
                    body,
                }
            }
            Err(e) => PingResult {
                engine: engine.name.clone(),
                status: None,
                error: Some(e.to_string()),
                body: None,
            },
        }
    }

    pub async fn ping_all(&self, engines: &[SearchEngine]) -> Vec<PingResult> {
        let mut results = Vec::with_capacity(engines.len());
        for engine in engines {
            let result = self.ping(engine).await;
            match &result.error {
                Some(error) => {
                    tracing::error!(engine = %result.engine, error = %error, "failed to ping search engine")
                }
                None => {
                    tracing::info!(engine = %result.engine, status = ?result.status, "pinged search engine")
                }
            }
            results.push(result);
        }
        results
    }
}
