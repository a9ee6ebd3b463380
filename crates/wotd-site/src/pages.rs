//! Title and description for every page the site renders.

use chrono::NaiveDate;
use serde::Serialize;
use std::collections::HashMap;
use wotd_stats::StatsSlug;

use crate::breadcrumbs::PageMetadataLookup;
use crate::collection::WordCollection;
use crate::details::WordDetails;
use crate::seo::Seo;

pub const HOME_TITLE: &str = "Word of the Day";
pub const UNKNOWN_TITLE: &str = "Unknown Page";
const TAGLINE: &str = "Discover a new word every day.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum PageCategory {
    Root,
    Error,
    Words,
    Stats,
    Year,
    Word,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageMetadata {
    pub title: String,
    pub description: String,
    pub category: PageCategory,
    /// Number of matching words, for stats pages.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
}

impl PageMetadata {
    fn new(title: impl Into<String>, description: impl Into<String>, category: PageCategory) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            category,
            count: None,
        }
    }

    fn unknown() -> Self {
        Self::new(UNKNOWN_TITLE, "", PageCategory::Error)
    }
}

/// A page path (no leading or trailing slash) with its metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageEntry {
    pub path: String,
    #[serde(flatten)]
    pub metadata: PageMetadata,
}

/// Metadata for every page, computed once from the word history.
#[derive(Debug, Clone, Default)]
pub struct PageMetadataRegistry {
    pages: Vec<PageEntry>,
    index: HashMap<String, usize>,
}

fn normalize(path: &str) -> &str {
    path.trim_matches('/')
}

fn home_description(words: &WordCollection, today: NaiveDate) -> String {
    match words.current_word(today) {
        Some(current) => format!("Today's word: {}. {TAGLINE}", current.word),
        None => TAGLINE.to_string(),
    }
}

impl PageMetadataRegistry {
    /// Compute metadata for all static, stats, year and word pages.
    ///
    /// Word pages take their description from [`Seo::meta_description`].
    pub fn build(words: &WordCollection, seo: &Seo, today: NaiveDate) -> Self {
        let mut registry = Self::default();

        registry.insert(
            "",
            PageMetadata::new(HOME_TITLE, home_description(words, today), PageCategory::Root),
        );
        registry.insert(
            "404",
            PageMetadata::new(
                "404 - Page Not Found",
                "A web page that cannot be found; an error indicating the requested content does not exist.",
                PageCategory::Error,
            ),
        );
        registry.insert(
            "words",
            PageMetadata::new(
                "All Words",
                "Browse the complete alphabetical list of all featured words, organized by year.",
                PageCategory::Words,
            ),
        );
        registry.insert(
            "stats",
            PageMetadata::new(
                "Stats",
                "Explore word statistics, patterns, and linguistic analysis for all featured words.",
                PageCategory::Stats,
            ),
        );

        for slug in StatsSlug::ALL {
            let count = slug.count(words.words(), today);
            let arg = slug.description_arg(words.words());
            let mut metadata = PageMetadata::new(
                slug.title(),
                slug.meta_description(count, arg.as_deref()),
                PageCategory::Stats,
            );
            metadata.count = Some(count);
            registry.insert(&slug.path(), metadata);
        }

        for year in words.available_years() {
            registry.insert(
                &format!("words/{year}"),
                PageMetadata::new(
                    format!("{year} words"),
                    format!("Words featured during {year}."),
                    PageCategory::Year,
                ),
            );
        }

        for entry in words.words() {
            let details = WordDetails::from_entry(entry);
            registry.insert(
                &format!("words/{}", entry.word),
                PageMetadata::new(
                    entry.word.clone(),
                    seo.meta_description(Some(&entry.word), details.definition.as_deref(), None),
                    PageCategory::Word,
                ),
            );
        }

        tracing::debug!(pages = registry.pages.len(), "built page metadata");
        registry
    }

    fn insert(&mut self, path: &str, metadata: PageMetadata) {
        let path = normalize(path).to_string();
        if self.index.contains_key(&path) {
            tracing::warn!(path = %path, "duplicate page path, keeping the first");
            return;
        }
        self.index.insert(path.clone(), self.pages.len());
        self.pages.push(PageEntry { path, metadata });
    }

    /// Metadata for a known page.
    pub fn get(&self, path: &str) -> Option<&PageMetadata> {
        self.index
            .get(normalize(path))
            .map(|&i| &self.pages[i].metadata)
    }

    /// Metadata for `path`, or an "Unknown Page" placeholder.
    pub fn page_metadata(&self, path: &str) -> PageMetadata {
        match self.get(path) {
            Some(metadata) => metadata.clone(),
            None => {
                tracing::warn!(path, "no metadata for page");
                PageMetadata::unknown()
            }
        }
    }

    /// Every page except home.
    ///
    /// Stats pages with no matching words are left out unless `show_empty`.
    pub fn all_pages(&self, show_empty: bool) -> Vec<&PageEntry> {
        self.pages
            .iter()
            .filter(|page| !page.path.is_empty())
            .filter(|page| show_empty || page.metadata.count != Some(0))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }
}

impl PageMetadataLookup for PageMetadataRegistry {
    fn page_title(&self, path: &str) -> Option<String> {
        self.get(path).map(|metadata| metadata.title.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::breadcrumbs::generate_breadcrumbs;
    use crate::seo::SeoConfig;
    use crate::url::UrlBuilder;
    use serde_json::json;
    use wotd_common_core::WordEntry;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 3).unwrap()
    }

    fn seo() -> Seo {
        let config = SeoConfig {
            site_name: "occasional-wotd".to_string(),
            default_title: "Occasional Word of the Day".to_string(),
            default_description: "A word-of-the-day site".to_string(),
            locale: "en-US".to_string(),
            author: String::new(),
            keywords: Vec::new(),
        };
        Seo::new(config, UrlBuilder::new("/", "https://example.com"))
    }

    fn registry() -> PageMetadataRegistry {
        let words = WordCollection::new(vec![
            WordEntry::new("level", "20240103").with_data(
                "wordnik",
                json!([{"text": "A flat surface.", "partOfSpeech": "noun"}]),
            ),
            WordEntry::new("hopeful", "20240102"),
            WordEntry::new("aback", "20240101"),
            WordEntry::new("zephyr", "20231115"),
        ]);
        PageMetadataRegistry::build(&words, &seo(), today())
    }

    #[test]
    fn test_static_pages() {
        let pages = registry();
        assert_eq!(pages.page_metadata("/").title, HOME_TITLE);
        assert_eq!(
            pages.page_metadata("").description,
            "Today's word: level. Discover a new word every day."
        );
        let not_found = pages.page_metadata("/404/");
        assert_eq!(not_found.title, "404 - Page Not Found");
        assert_eq!(
            not_found.description,
            "A web page that cannot be found; an error indicating the requested content does not exist."
        );
        assert_eq!(pages.page_metadata("words").title, "All Words");
        assert_eq!(pages.page_metadata("/stats").title, "Stats");
    }

    #[test]
    fn test_home_without_words() {
        let pages = PageMetadataRegistry::build(&WordCollection::default(), &seo(), today());
        assert_eq!(pages.page_metadata("").description, TAGLINE);
    }

    #[test]
    fn test_year_and_word_pages() {
        let pages = registry();
        let year = pages.page_metadata("/words/2023");
        assert_eq!(year.title, "2023 words");
        assert_eq!(year.description, "Words featured during 2023.");

        let word = pages.page_metadata("words/level");
        assert_eq!(word.title, "level");
        assert_eq!(word.description, "level: A flat surface. | occasional-wotd");

        let bare = pages.page_metadata("words/hopeful");
        assert_eq!(bare.description, "A word-of-the-day site");
    }

    #[test]
    fn test_word_description_truncates_long_definitions() {
        let definition = "x".repeat(150);
        let words = WordCollection::new(vec![WordEntry::new("lengthy", "20240103")
            .with_data("wordnik", json!([{"text": definition}]))]);
        let pages = PageMetadataRegistry::build(&words, &seo(), today());

        let expected = format!("lengthy: {}... | occasional-wotd", "x".repeat(100));
        assert_eq!(pages.page_metadata("words/lengthy").description, expected);
    }

    #[test]
    fn test_stats_pages_carry_counts() {
        let pages = registry();
        let palindromes = pages.page_metadata("stats/palindromes");
        assert_eq!(palindromes.count, Some(1));
        assert_eq!(palindromes.category, PageCategory::Stats);
        assert!(palindromes.description.starts_with("1 word"));
        assert_eq!(pages.page_metadata("stats/words-ending-ful").count, Some(1));
        assert_eq!(pages.page_metadata("stats/current-streak").count, Some(3));
    }

    #[test]
    fn test_unknown_page() {
        let metadata = registry().page_metadata("/nowhere");
        assert_eq!(metadata.title, UNKNOWN_TITLE);
    }

    #[test]
    fn test_all_pages_filters_empty_stats() {
        let pages = registry();
        let listed: Vec<&str> = pages
            .all_pages(false)
            .iter()
            .map(|p| p.path.as_str())
            .collect();
        assert!(!listed.contains(&""));
        assert!(listed.contains(&"stats/palindromes"));
        assert!(!listed.contains(&"stats/all-vowels"));
        assert!(listed.contains(&"words/2024"));
        assert!(listed.contains(&"words/aback"));

        let all = pages.all_pages(true);
        assert!(all.iter().any(|p| p.path == "stats/all-vowels"));
        assert_eq!(all.len(), pages.len() - 1);
    }

    #[test]
    fn test_breadcrumbs_use_registry_titles() {
        let pages = registry();
        let urls = UrlBuilder::new("/", "https://example.com");
        let crumbs = generate_breadcrumbs("/stats/palindromes", &urls, &pages);
        assert_eq!(crumbs[1].label, "stats");
        assert_eq!(crumbs[2].label, "palindromes");
        assert_eq!(crumbs[2].href, "/stats/palindromes");
    }
}
