//! Canonical URL construction under a configurable base path.

use thiserror::Error;
use wotd_common_config::SiteConfig;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UrlError {
    #[error("invalid path '{path}': contains multiple consecutive slashes")]
    ConsecutiveSlashes { path: String },
}

/// Builds site-relative and absolute URLs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlBuilder {
    base_path: String,
    site_url: String,
}

impl UrlBuilder {
    pub fn new(base_path: impl Into<String>, site_url: impl Into<String>) -> Self {
        Self {
            base_path: base_path.into(),
            site_url: site_url.into(),
        }
    }

    pub fn from_config(config: &SiteConfig) -> Self {
        Self::new(&config.base_path, &config.site_url)
    }

    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    fn base(&self) -> &str {
        if self.base_path.is_empty() {
            "/"
        } else {
            &self.base_path
        }
    }

    /// Prefix `path` with the base path.
    ///
    /// Empty and `/` map to the base path with a trailing slash. Other paths
    /// lose a trailing slash unless they contain a `.`. Case is preserved.
    pub fn url(&self, path: &str) -> Result<String, UrlError> {
        let base = self.base();

        if path.is_empty() || path == "/" {
            return Ok(if base.ends_with('/') {
                base.to_string()
            } else {
                format!("{base}/")
            });
        }

        if path.contains("//") {
            tracing::error!(path, "path contains multiple consecutive slashes");
            return Err(UrlError::ConsecutiveSlashes {
                path: path.to_string(),
            });
        }

        let normalized = if path.starts_with('/') {
            path.to_string()
        } else {
            format!("/{path}")
        };
        let base = base.strip_suffix('/').unwrap_or(base);

        if normalized.contains('.') {
            return Ok(format!("{base}{normalized}"));
        }

        let trimmed = normalized.strip_suffix('/').unwrap_or(&normalized);
        Ok(format!("{base}{trimmed}"))
    }

    /// Absolute URL for `path` on the configured site origin.
    pub fn full_url(&self, path: &str) -> Result<String, UrlError> {
        let origin = self.site_url.strip_suffix('/').unwrap_or(&self.site_url);
        Ok(format!("{origin}{}", self.url(path)?))
    }

    /// Site path for a word page, without the base path. Empty for an empty word.
    pub fn word_path(word: &str) -> String {
        if word.is_empty() {
            String::new()
        } else {
            format!("/words/{word}")
        }
    }

    /// Remove the base path from an incoming pathname.
    ///
    /// Only strips on a segment boundary, and returns the remainder without
    /// leading or trailing slashes (`""` for the site root).
    pub fn strip_base_path(&self, pathname: &str) -> String {
        let base = self.base_path.trim_end_matches('/');
        let mut rest = pathname;

        if !base.is_empty() {
            if rest == base {
                rest = "";
            } else if let Some(stripped) = rest.strip_prefix(base).filter(|r| r.starts_with('/')) {
                rest = stripped;
            }
        }

        rest.trim_matches('/').to_string()
    }
}
