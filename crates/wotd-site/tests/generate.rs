//! End-to-end site generation from word files on disk.

use chrono::NaiveDate;
use serde_json::{json, Value};
use std::fs;
use tempfile::TempDir;
use wotd_common_config::SiteConfig;
use wotd_common_core::WordEntry;
use wotd_site::{SiteGenerator, WordCache, WordCollection, WordFileStore};

fn seed(words_dir: &std::path::Path) {
    let store = WordFileStore::new(words_dir);
    let entries = [
        ("20240103", "racecar", "A car built for racing."),
        ("20240102", "hopeful", "Feeling or inspiring optimism."),
        ("20231229", "quickly", "At a fast speed."),
    ];
    for (date, word, text) in entries {
        let entry = WordEntry::new(word, date)
            .with_data("wordnik", json!([{"text": text, "partOfSpeech": "noun"}]));
        store.write(&entry).unwrap();
    }
}

fn config(data_dir: &std::path::Path) -> SiteConfig {
    SiteConfig {
        site_url: "https://words.example.com".to_string(),
        base_path: "/daily".to_string(),
        data_dir: data_dir.to_path_buf(),
        version: "9.9.9".to_string(),
        ..SiteConfig::default()
    }
}

#[test]
fn test_generate_site_from_disk() {
    let data = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    let config = config(data.path());
    seed(&config.words_dir());

    let cache = WordCache::new(WordFileStore::new(config.words_dir()).loader());
    let words = WordCollection::new(cache.words().to_vec());
    assert_eq!(words.len(), 3);

    let today = NaiveDate::from_ymd_opt(2024, 1, 3).unwrap();
    let report = SiteGenerator::new(config, out.path())
        .generate(&words, today)
        .unwrap();

    assert_eq!(report.word_count, 3);
    assert_eq!(report.files.len(), 7);
    assert_eq!(report.words_hash, words.data_hash());
    for file in &report.files {
        assert!(file.exists(), "{} missing", file.display());
    }

    let listed: Vec<String> =
        serde_json::from_str(&fs::read_to_string(out.path().join("words.json")).unwrap()).unwrap();
    assert_eq!(listed, vec!["racecar", "hopeful", "quickly"]);

    let health = fs::read_to_string(out.path().join("health.txt")).unwrap();
    assert!(health.contains(&format!("words_hash: {}", report.words_hash)));
    assert!(health.contains("latest_word: racecar"));
    assert!(health.contains("version: 9.9.9"));

    let robots = fs::read_to_string(out.path().join("robots.txt")).unwrap();
    assert!(robots.ends_with("Sitemap: https://words.example.com/daily/sitemap-index.xml\n"));

    let sitemap = fs::read_to_string(out.path().join("sitemap-0.xml")).unwrap();
    assert!(sitemap.contains("<loc>https://words.example.com/daily/</loc>"));
    assert!(sitemap.contains("<loc>https://words.example.com/daily/words/racecar</loc>"));
    assert!(sitemap.contains("<loc>https://words.example.com/daily/stats/palindromes</loc>"));
    assert!(!sitemap.contains("stats/all-vowels"));

    let rss = fs::read_to_string(out.path().join("rss.xml")).unwrap();
    assert_eq!(rss.matches("<item>").count(), 3);
    assert!(rss.contains("<description>A car built for racing.</description>"));

    let pages: Vec<Value> =
        serde_json::from_str(&fs::read_to_string(out.path().join("pages.json")).unwrap()).unwrap();
    assert_eq!(pages.len(), report.page_count);
    let word_page = pages
        .iter()
        .find(|p| p["path"] == "words/hopeful")
        .unwrap();
    assert_eq!(word_page["seo"]["title"], "hopeful - occasional-wotd");
    assert_eq!(
        word_page["seo"]["description"],
        "hopeful: Feeling or inspiring optimism. | occasional-wotd"
    );
    assert_eq!(word_page["breadcrumbs"][1]["label"], "all words");
}

#[test]
fn test_show_empty_stats_lists_every_stats_page() {
    let data = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    let mut config = config(data.path());
    config.show_empty_stats = true;
    seed(&config.words_dir());

    let words = WordCollection::new(WordFileStore::new(config.words_dir()).loader().load());
    let today = NaiveDate::from_ymd_opt(2024, 1, 3).unwrap();
    SiteGenerator::new(config, out.path())
        .generate(&words, today)
        .unwrap();

    let sitemap = fs::read_to_string(out.path().join("sitemap-0.xml")).unwrap();
    assert!(sitemap.contains("stats/all-vowels"));
}

#[test]
fn test_empty_history_still_generates() {
    let out = TempDir::new().unwrap();
    let config = SiteConfig::default();
    let today = NaiveDate::from_ymd_opt(2024, 1, 3).unwrap();

    let report = SiteGenerator::new(config, out.path())
        .generate(&WordCollection::default(), today)
        .unwrap();

    assert_eq!(report.word_count, 0);
    let health = fs::read_to_string(out.path().join("health.txt")).unwrap();
    assert!(health.contains("word_count: 0"));
    assert!(health.contains("latest_word: \n"));
}
