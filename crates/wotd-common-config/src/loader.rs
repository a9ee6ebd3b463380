//! Configuration loading.

use crate::env::{parse_bool, vars, EnvError};
use crate::types::{defaults, SiteConfig};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variables: {}", .vars.join(", "))]
    MissingRequired { vars: Vec<String> },

    #[error("invalid value for {var}: {message}")]
    InvalidValue { var: String, message: String },

    #[error("validation error: {message}")]
    ValidationError { message: String },
}

/// Variables that must be set in strict mode.
const REQUIRED_VARS: &[&str] = &[
    vars::SITE_URL,
    vars::SITE_TITLE,
    vars::SITE_DESCRIPTION,
    vars::SITE_ID,
    vars::SITE_AUTHOR,
];

/// Builds a [`SiteConfig`] from a snapshot of environment variables.
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    vars: HashMap<String, String>,
}

impl ConfigLoader {
    /// Snapshot the process environment.
    pub fn from_env() -> Self {
        Self {
            vars: std::env::vars().collect(),
        }
    }

    /// Use an explicit variable map.
    pub fn from_map<K, V, I>(vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            vars: vars.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }

    /// Layer the entries of a dotenv file over the current snapshot.
    pub fn with_dotenv_file(mut self, path: impl AsRef<Path>) -> Result<Self, EnvError> {
        for item in dotenvy::from_path_iter(path.as_ref())? {
            let (key, value) = item?;
            self.vars.insert(key, value);
        }
        Ok(self)
    }

    /// Override a single variable.
    pub fn with_var(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(key.into(), value.into());
        self
    }

    /// Empty values count as unset.
    fn get(&self, var: &str) -> Option<&str> {
        self.vars
            .get(var)
            .map(String::as_str)
            .filter(|v| !v.trim().is_empty())
    }

    fn get_or(&self, var: &str, default: &str) -> String {
        self.get(var).unwrap_or(default).to_string()
    }

    /// Load with defaults for anything unset.
    pub fn load(&self) -> Result<SiteConfig, ConfigError> {
        let config = SiteConfig {
            site_url: self.get_or(vars::SITE_URL, defaults::SITE_URL),
            site_title: self.get_or(vars::SITE_TITLE, defaults::SITE_TITLE),
            site_description: self.get_or(vars::SITE_DESCRIPTION, defaults::SITE_DESCRIPTION),
            site_id: self.get_or(vars::SITE_ID, defaults::SITE_ID),
            base_path: self.get_or(vars::BASE_PATH, defaults::BASE_PATH),
            source_dir: self.get_or(vars::SOURCE_DIR, defaults::SOURCE_DIR),
            locale: self.get_or(vars::SITE_LOCALE, defaults::SITE_LOCALE),
            author: self.get_or(vars::SITE_AUTHOR, ""),
            author_url: self.get_or(vars::SITE_AUTHOR_URL, ""),
            attribution_message: self.get_or(vars::SITE_ATTRIBUTION_MESSAGE, ""),
            keywords: self
                .get(vars::SITE_KEYWORDS)
                .map(split_keywords)
                .unwrap_or_default(),
            node_env: self.get_or(vars::NODE_ENV, defaults::NODE_ENV),
            version: self.get_or(vars::PACKAGE_VERSION, env!("CARGO_PKG_VERSION")),
            data_dir: PathBuf::from(self.get_or(vars::WOTD_DATA_DIR, defaults::DATA_DIR)),
            show_empty_stats: self
                .get(vars::SHOW_EMPTY_STATS)
                .map(parse_bool)
                .unwrap_or(false),
        };

        validate(&config)?;
        Ok(config)
    }

    /// Load, failing if any required variable is unset.
    pub fn load_strict(&self) -> Result<SiteConfig, ConfigError> {
        let missing: Vec<String> = REQUIRED_VARS
            .iter()
            .filter(|var| self.get(var).is_none())
            .map(|var| var.to_string())
            .collect();

        if !missing.is_empty() {
            return Err(ConfigError::MissingRequired { vars: missing });
        }

        self.load()
    }
}

fn split_keywords(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|k| !k.is_empty())
        .map(String::from)
        .collect()
}

/// Check values that would produce broken URLs.
pub fn validate(config: &SiteConfig) -> Result<(), ConfigError> {
    let parsed = url::Url::parse(&config.site_url).map_err(|e| ConfigError::InvalidValue {
        var: vars::SITE_URL.to_string(),
        message: e.to_string(),
    })?;

    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(ConfigError::InvalidValue {
            var: vars::SITE_URL.to_string(),
            message: format!("unsupported scheme '{}'", parsed.scheme()),
        });
    }

    if !config.base_path.is_empty() && !config.base_path.starts_with('/') {
        return Err(ConfigError::InvalidValue {
            var: vars::BASE_PATH.to_string(),
            message: "must start with '/'".to_string(),
        });
    }

    if config.site_id.trim().is_empty() {
        return Err(ConfigError::ValidationError {
            message: "site id cannot be empty".to_string(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_env() -> Vec<(&'static str, &'static str)> {
        vec![
            ("SITE_URL", "https://words.example.com"),
            ("SITE_TITLE", "Words"),
            ("SITE_DESCRIPTION", "Daily words"),
            ("SITE_ID", "words"),
            ("SITE_AUTHOR", "Jo"),
        ]
    }

    #[test]
    fn test_load_uses_defaults() {
        let config = ConfigLoader::from_map(Vec::<(String, String)>::new())
            .load()
            .unwrap();
        assert_eq!(config, SiteConfig::default());
    }

    #[test]
    fn test_load_reads_variables() {
        let config = ConfigLoader::from_map(full_env())
            .with_var("BASE_PATH", "/vocab")
            .with_var("SITE_KEYWORDS", "words, vocabulary,,  english ")
            .with_var("SHOW_EMPTY_STATS", "yes")
            .with_var("WOTD_DATA_DIR", "/srv/data")
            .load()
            .unwrap();

        assert_eq!(config.site_url, "https://words.example.com");
        assert_eq!(config.base_path, "/vocab");
        assert_eq!(config.keywords, vec!["words", "vocabulary", "english"]);
        assert!(config.show_empty_stats);
        assert_eq!(config.data_dir, PathBuf::from("/srv/data"));
    }

    #[test]
    fn test_empty_value_falls_back_to_default() {
        let config = ConfigLoader::from_map([("SITE_TITLE", "  ")]).load().unwrap();
        assert_eq!(config.site_title, defaults::SITE_TITLE);
    }

    #[test]
    fn test_strict_reports_all_missing() {
        let err = ConfigLoader::from_map([("SITE_URL", "https://a.example")])
            .load_strict()
            .unwrap_err();
        match err {
            ConfigError::MissingRequired { vars } => {
                assert_eq!(
                    vars,
                    vec!["SITE_TITLE", "SITE_DESCRIPTION", "SITE_ID", "SITE_AUTHOR"]
                );
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_strict_succeeds_with_required() {
        let config = ConfigLoader::from_map(full_env()).load_strict().unwrap();
        assert_eq!(config.author, "Jo");
    }

    #[test]
    fn test_rejects_relative_site_url() {
        let err = ConfigLoader::from_map([("SITE_URL", "words.example.com")])
            .load()
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { ref var, .. } if var == "SITE_URL"));
    }

    #[test]
    fn test_rejects_non_http_scheme() {
        let err = ConfigLoader::from_map([("SITE_URL", "ftp://words.example.com")])
            .load()
            .unwrap_err();
        assert!(err.to_string().contains("unsupported scheme"));
    }

    #[test]
    fn test_rejects_base_path_without_slash() {
        let err = ConfigLoader::from_map([("BASE_PATH", "vocab")])
            .load()
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { ref var, .. } if var == "BASE_PATH"));
    }
}
