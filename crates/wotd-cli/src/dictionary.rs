//! Dictionary lookups for new words.

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;
use url::Url;
use wotd_common_config::env::{vars, ApiKeys};
use wotd_common_core::{is_valid_dictionary_data, DictionaryDefinition, WordEntry};
use wotd_common_http::{HttpClient, HttpError};

pub const WORDNIK_BASE_URL: &str = "https://api.wordnik.com/v4";
const WORDNIK_LIMIT: &str = "200";

#[derive(Debug, Error)]
pub enum DictionaryError {
    #[error("missing dictionary API key: set {var}")]
    MissingApiKey { var: &'static str },

    #[error("'{word}' not found in dictionary")]
    NotFound { word: String },

    #[error("dictionary request failed: {0}")]
    Http(#[from] HttpError),

    #[error("unexpected dictionary response: {0}")]
    InvalidResponse(String),
}

/// Definitions for one word, with the adapter's untouched payload.
#[derive(Debug, Clone, PartialEq)]
pub struct DictionaryResponse {
    pub word: String,
    pub definitions: Vec<DictionaryDefinition>,
    pub raw: Value,
}

/// A dictionary service that can define words.
#[async_trait]
pub trait DictionaryAdapter: Send + Sync {
    /// Name stored in each word file's `adapter` field.
    fn name(&self) -> &str;

    /// Fetch definitions, failing with [`DictionaryError::NotFound`] when the
    /// service has nothing usable for `word`.
    async fn fetch_word_data(&self, word: &str) -> Result<DictionaryResponse, DictionaryError>;

    /// Build the stored entry for `date` from a lookup result.
    fn to_word_entry(&self, response: DictionaryResponse, date: &str, preserve_case: bool) -> WordEntry {
        let mut entry = WordEntry::new(response.word, date).with_data(self.name(), response.raw);
        entry.preserve_case = Some(preserve_case);
        entry
    }
}

/// Wordnik v4 definitions API.
#[derive(Debug, Clone)]
pub struct WordnikAdapter {
    client: HttpClient,
    api_key: String,
    base_url: String,
}

impl WordnikAdapter {
    pub fn new(client: HttpClient, api_key: impl Into<String>) -> Self {
        Self {
            client,
            api_key: api_key.into(),
            base_url: WORDNIK_BASE_URL.to_string(),
        }
    }

    /// Read the API key from `WORDNIK_API_KEY`.
    pub fn from_env(client: HttpClient) -> Result<Self, DictionaryError> {
        let api_key = ApiKeys::wordnik().ok_or(DictionaryError::MissingApiKey {
            var: vars::WORDNIK_API_KEY,
        })?;
        Ok(Self::new(client, api_key))
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    fn definitions_url(&self, word: &str) -> Result<Url, DictionaryError> {
        let mut url = Url::parse(&self.base_url)
            .map_err(|e| DictionaryError::InvalidResponse(format!("bad base URL: {e}")))?;

        url.path_segments_mut()
            .map_err(|_| DictionaryError::InvalidResponse("base URL cannot have a path".to_string()))?
            .pop_if_empty()
            .extend(["word.json", word, "definitions"]);

        url.query_pairs_mut()
            .append_pair("limit", WORDNIK_LIMIT)
            .append_pair("includeRelated", "false")
            .append_pair("useCanonical", "false")
            .append_pair("includeTags", "false")
            .append_pair("api_key", &self.api_key);

        Ok(url)
    }
}

#[async_trait]
impl DictionaryAdapter for WordnikAdapter {
    fn name(&self) -> &str {
        "wordnik"
    }

    async fn fetch_word_data(&self, word: &str) -> Result<DictionaryResponse, DictionaryError> {
        let url = self.definitions_url(word)?;
        tracing::debug!(word, "fetching definitions from wordnik");

        let raw: Value = match self.client.get_json(url.as_str()).await {
            Ok(raw) => raw,
            Err(e) if e.is_not_found() => {
                return Err(DictionaryError::NotFound {
                    word: word.to_string(),
                })
            }
            Err(HttpError::Decode { source, .. }) => {
                return Err(DictionaryError::InvalidResponse(source.to_string()))
            }
            Err(e) => return Err(e.into()),
        };
        let definitions: Vec<DictionaryDefinition> = serde_json::from_value(raw.clone())
            .map_err(|e| DictionaryError::InvalidResponse(e.to_string()))?;

        if !is_valid_dictionary_data(&definitions) {
            return Err(DictionaryError::NotFound {
                word: word.to_string(),
            });
        }

        tracing::info!(word, definitions = definitions.len(), "fetched definitions");
        Ok(DictionaryResponse {
            word: word.to_string(),
            definitions,
            raw,
        })
    }
}
