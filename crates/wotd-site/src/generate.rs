//! Writes every generated site file into an output directory.

use chrono::NaiveDate;
use serde::Serialize;
use std::path::{Path, PathBuf};
use wotd_common_config::SiteConfig;
use wotd_common_fs::{ensure_dir, write_string_atomic};
use wotd_common_log::spans::Timer;
use wotd_common_log::timed;

use crate::collection::WordCollection;
use crate::error::Result;
use crate::feeds::{self, HEALTH_TXT, PAGES_JSON, ROBOTS_TXT, RSS_XML, SITEMAP_INDEX_XML, SITEMAP_XML, WORDS_JSON};
use crate::pages::PageMetadataRegistry;
use crate::seo::Seo;

/// Summary of one generation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateReport {
    pub output_dir: PathBuf,
    pub files: Vec<PathBuf>,
    pub word_count: usize,
    pub page_count: usize,
    pub words_hash: String,
    pub duration_ms: u128,
}

#[derive(Debug, Clone)]
pub struct SiteGenerator {
    config: SiteConfig,
    output_dir: PathBuf,
}

impl SiteGenerator {
    pub fn new(config: SiteConfig, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            config,
            output_dir: output_dir.into(),
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    fn write(&self, files: &mut Vec<PathBuf>, name: &str, contents: &str) -> Result<()> {
        let path = self.output_dir.join(name);
        write_string_atomic(&path, contents)?;
        tracing::debug!(path = %path.display(), bytes = contents.len(), "wrote site file");
        files.push(path);
        Ok(())
    }

    /// Render every output for `words` as of `today`.
    pub fn generate(&self, words: &WordCollection, today: NaiveDate) -> Result<GenerateReport> {
        let timer = Timer::start("generate_site");
        let show_empty = self.config.show_empty_stats;
        let seo = Seo::from_site_config(&self.config);
        let urls = seo.urls();

        ensure_dir(&self.output_dir)?;

        let registry = timed!("build_page_metadata", PageMetadataRegistry::build(words, &seo, today));
        let documents = feeds::page_documents(&registry, &seo, show_empty)?;
        let locations = feeds::sitemap_locations(&registry, urls, show_empty)?;

        let mut files = Vec::new();
        self.write(&mut files, WORDS_JSON, &feeds::words_json(words)?)?;
        self.write(&mut files, RSS_XML, &feeds::rss_xml(words, &seo)?)?;
        self.write(&mut files, SITEMAP_XML, &feeds::sitemap_xml(&locations))?;
        self.write(&mut files, SITEMAP_INDEX_XML, &feeds::sitemap_index_xml(urls)?)?;
        self.write(&mut files, ROBOTS_TXT, &feeds::robots_txt(urls)?)?;
        self.write(&mut files, PAGES_JSON, &feeds::pages_json(&documents)?)?;
        // Last: the hash in health.txt marks a finished build
        self.write(&mut files, HEALTH_TXT, &feeds::health_txt(words, &self.config.version))?;

        let report = GenerateReport {
            output_dir: self.output_dir.clone(),
            files,
            word_count: words.len(),
            page_count: documents.len(),
            words_hash: words.data_hash(),
            duration_ms: timer.finish(),
        };

        tracing::info!(
            output = %report.output_dir.display(),
            words = report.word_count,
            pages = report.page_count,
            duration_ms = %report.duration_ms,
            "site generated"
        );
        Ok(report)
    }
}
