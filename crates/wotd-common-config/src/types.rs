//! Configuration types.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default values for optional settings.
pub mod defaults {
    pub const SITE_URL: &str = "https://localhost:4321";
    pub const SITE_TITLE: &str = "Occasional Word of the Day";
    pub const SITE_DESCRIPTION: &str = "A word-of-the-day site featuring interesting vocabulary";
    pub const SITE_ID: &str = "occasional-wotd";
    pub const BASE_PATH: &str = "/";
    pub const SOURCE_DIR: &str = "demo";
    pub const SITE_LOCALE: &str = "en-US";
    pub const NODE_ENV: &str = "production";
    pub const DATA_DIR: &str = "data";
}

/// Site-wide configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Absolute site origin, e.g. `https://example.com`.
    pub site_url: String,
    /// Default page title.
    pub site_title: String,
    /// Default page description.
    pub site_description: String,
    /// Short site identifier, used as the SEO site name.
    pub site_id: String,
    /// URL prefix the site is served under.
    pub base_path: String,
    /// Data set name under the data directory.
    pub source_dir: String,
    /// Locale for Open Graph metadata.
    pub locale: String,
    /// Author name.
    pub author: String,
    /// Author homepage.
    pub author_url: String,
    /// Dictionary attribution line.
    pub attribution_message: String,
    /// Site-wide SEO keywords.
    pub keywords: Vec<String>,
    /// Deployment environment.
    pub node_env: String,
    /// Published version string.
    pub version: String,
    /// Root of the word data.
    pub data_dir: PathBuf,
    /// List stats pages even when they have no words.
    pub show_empty_stats: bool,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            site_url: defaults::SITE_URL.to_string(),
            site_title: defaults::SITE_TITLE.to_string(),
            site_description: defaults::SITE_DESCRIPTION.to_string(),
            site_id: defaults::SITE_ID.to_string(),
            base_path: defaults::BASE_PATH.to_string(),
            source_dir: defaults::SOURCE_DIR.to_string(),
            locale: defaults::SITE_LOCALE.to_string(),
            author: String::new(),
            author_url: String::new(),
            attribution_message: String::new(),
            keywords: Vec::new(),
            node_env: defaults::NODE_ENV.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            data_dir: PathBuf::from(defaults::DATA_DIR),
            show_empty_stats: false,
        }
    }
}

impl SiteConfig {
    /// Directory holding `<YYYY>/<YYYYMMDD>.json` word files.
    pub fn words_dir(&self) -> PathBuf {
        self.data_dir.join(&self.source_dir).join("words")
    }

    /// Whether this is a production deployment.
    pub fn is_production(&self) -> bool {
        self.node_env == "production"
    }
}
