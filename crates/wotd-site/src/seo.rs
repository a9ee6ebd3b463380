//! Meta descriptions, canonical URLs and social metadata.

use serde::Serialize;
use wotd_common_config::SiteConfig;

use crate::url::{UrlBuilder, UrlError};

/// Longest definition excerpt used in a meta description.
pub const MAX_DEFINITION_CHARS: usize = 100;

/// Site-wide values every page's metadata is derived from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeoConfig {
    pub site_name: String,
    pub default_title: String,
    pub default_description: String,
    pub locale: String,
    pub author: String,
    pub keywords: Vec<String>,
}

impl From<&SiteConfig> for SeoConfig {
    fn from(config: &SiteConfig) -> Self {
        Self {
            site_name: config.site_id.clone(),
            default_title: config.site_title.clone(),
            default_description: config.site_description.clone(),
            locale: config.locale.clone(),
            author: config.author.clone(),
            keywords: config.keywords.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenGraph {
    pub title: String,
    pub description: String,
    pub url: String,
    pub site_name: String,
    pub locale: String,
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Twitter {
    pub card: String,
    pub title: String,
    pub description: String,
    pub site: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeoMetadata {
    pub title: String,
    pub description: String,
    pub canonical: String,
    pub open_graph: OpenGraph,
    pub twitter: Twitter,
    pub keywords: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
}

/// Cut `text` to [`MAX_DEFINITION_CHARS`] characters, marking the cut with `...`.
pub fn truncate_description(text: &str) -> String {
    if text.chars().count() <= MAX_DEFINITION_CHARS {
        return text.to_string();
    }
    let cut: String = text.chars().take(MAX_DEFINITION_CHARS).collect();
    format!("{}...", cut.trim())
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

#[derive(Debug, Clone)]
pub struct Seo {
    config: SeoConfig,
    urls: UrlBuilder,
}

impl Seo {
    pub fn new(config: SeoConfig, urls: UrlBuilder) -> Self {
        Self { config, urls }
    }

    pub fn from_site_config(config: &SiteConfig) -> Self {
        Self::new(SeoConfig::from(config), UrlBuilder::from_config(config))
    }

    pub fn config(&self) -> &SeoConfig {
        &self.config
    }

    pub fn urls(&self) -> &UrlBuilder {
        &self.urls
    }

    /// A custom description wins; otherwise `"<word>: <definition> | <site>"`
    /// when both are known, else the site default.
    pub fn meta_description(
        &self,
        word: Option<&str>,
        definition: Option<&str>,
        custom: Option<&str>,
    ) -> String {
        if let Some(custom) = non_empty(custom) {
            return custom.to_string();
        }

        match (non_empty(word), non_empty(definition)) {
            (Some(word), Some(definition)) => format!(
                "{word}: {} | {}",
                truncate_description(definition),
                self.config.site_name
            ),
            _ => self.config.default_description.clone(),
        }
    }

    /// Full metadata block for a page.
    ///
    /// Fails only when `pathname` cannot be turned into a canonical URL.
    pub fn generate_seo_metadata(
        &self,
        title: Option<&str>,
        description: Option<&str>,
        pathname: &str,
        keywords: &[String],
    ) -> Result<SeoMetadata, UrlError> {
        let title = match non_empty(title) {
            Some(title) => format!("{title} - {}", self.config.site_name),
            None => self.config.default_title.clone(),
        };
        let description = non_empty(description)
            .map(str::to_string)
            .unwrap_or_else(|| self.config.default_description.clone());
        let canonical = self.urls.full_url(pathname)?;

        let keywords = self
            .config
            .keywords
            .iter()
            .chain(keywords)
            .map(|k| k.trim())
            .filter(|k| !k.is_empty())
            .collect::<Vec<_>>()
            .join(", ");

        Ok(SeoMetadata {
            open_graph: OpenGraph {
                title: title.clone(),
                description: description.clone(),
                url: canonical.clone(),
                site_name: self.config.site_name.clone(),
                locale: self.config.locale.clone(),
                kind: "website".to_string(),
            },
            twitter: Twitter {
                card: "summary_large_image".to_string(),
                title: title.clone(),
                description: description.clone(),
                site: self.config.site_name.clone(),
            },
            author: non_empty(Some(&self.config.author)).map(str::to_string),
            title,
            description,
            canonical,
            keywords,
        })
    }
}
