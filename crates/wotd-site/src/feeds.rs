//! Machine-readable outputs: word list, RSS, sitemaps, health and robots.

use chrono::{TimeZone, Utc};
use serde::Serialize;
use std::fmt::Write as _;
use wotd_common_core::date::parse_date_key;

use crate::breadcrumbs::{generate_breadcrumbs, BreadcrumbItem};
use crate::collection::WordCollection;
use crate::details::WordDetails;
use crate::error::{Result, SiteError};
use crate::pages::PageMetadataRegistry;
use crate::seo::{Seo, SeoMetadata};
use crate::url::UrlBuilder;

/// Items included in the RSS feed.
pub const RSS_ITEM_LIMIT: usize = 14;

pub const WORDS_JSON: &str = "words.json";
pub const RSS_XML: &str = "rss.xml";
pub const SITEMAP_XML: &str = "sitemap-0.xml";
pub const SITEMAP_INDEX_XML: &str = "sitemap-index.xml";
pub const HEALTH_TXT: &str = "health.txt";
pub const ROBOTS_TXT: &str = "robots.txt";
pub const PAGES_JSON: &str = "pages.json";

/// Escape XML special characters.
pub fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

fn rfc2822(date: &str) -> Option<String> {
    let midnight = parse_date_key(date)?.and_hms_opt(0, 0, 0)?;
    Some(Utc.from_utc_datetime(&midnight).to_rfc2822())
}

/// Word strings, newest first.
pub fn words_json(words: &WordCollection) -> Result<String> {
    serde_json::to_string_pretty(&words.word_strings()).map_err(|source| SiteError::Serialize {
        what: WORDS_JSON,
        source,
    })
}

/// RSS 2.0 feed of the most recent words.
pub fn rss_xml(words: &WordCollection, seo: &Seo) -> Result<String> {
    let config = seo.config();
    let urls = seo.urls();

    let mut xml = String::new();
    xml.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    xml.push_str("<rss version=\"2.0\">\n<channel>\n");
    let _ = writeln!(xml, "<title>{}</title>", escape_xml(&config.default_title));
    let _ = writeln!(xml, "<link>{}</link>", escape_xml(&urls.full_url("/")?));
    let _ = writeln!(
        xml,
        "<description>{}</description>",
        escape_xml(&config.default_description)
    );
    let _ = writeln!(xml, "<language>{}</language>", escape_xml(&config.locale));

    for entry in words.words().iter().take(RSS_ITEM_LIMIT) {
        let link = escape_xml(&urls.full_url(&UrlBuilder::word_path(&entry.word))?);
        let details = WordDetails::from_entry(entry);

        xml.push_str("<item>\n");
        let _ = writeln!(xml, "<title>{}</title>", escape_xml(&entry.word));
        let _ = writeln!(xml, "<link>{link}</link>");
        let _ = writeln!(xml, "<guid isPermaLink=\"true\">{link}</guid>");
        match rfc2822(&entry.date) {
            Some(date) => {
                let _ = writeln!(xml, "<pubDate>{date}</pubDate>");
            }
            None => tracing::warn!(word = %entry.word, date = %entry.date, "no pubDate for feed item"),
        }
        if let Some(definition) = &details.definition {
            let _ = writeln!(xml, "<description>{}</description>", escape_xml(definition));
        }
        xml.push_str("</item>\n");
    }

    xml.push_str("</channel>\n</rss>\n");
    Ok(xml)
}

/// `<urlset>` listing the given absolute URLs.
pub fn sitemap_xml(locations: &[String]) -> String {
    let mut xml = String::new();
    xml.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    xml.push_str("<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n");
    for location in locations {
        let _ = writeln!(xml, "<url><loc>{}</loc></url>", escape_xml(location));
    }
    xml.push_str("</urlset>\n");
    xml
}

/// Sitemap index pointing at the single sitemap file.
pub fn sitemap_index_xml(urls: &UrlBuilder) -> Result<String> {
    let sitemap = urls.full_url(&format!("/{SITEMAP_XML}"))?;
    let mut xml = String::new();
    xml.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    xml.push_str("<sitemapindex xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n");
    let _ = writeln!(xml, "<sitemap><loc>{}</loc></sitemap>", escape_xml(&sitemap));
    xml.push_str("</sitemapindex>\n");
    Ok(xml)
}

/// Canonical URLs for home and every listed page except the 404 page.
pub fn sitemap_locations(
    registry: &PageMetadataRegistry,
    urls: &UrlBuilder,
    show_empty: bool,
) -> Result<Vec<String>> {
    let mut locations = vec![urls.full_url("/")?];
    for page in registry.all_pages(show_empty) {
        if page.path == "404" {
            continue;
        }
        locations.push(urls.full_url(&format!("/{}", page.path))?);
    }
    Ok(locations)
}

/// Deployment fingerprint, one `key: value` per line.
pub fn health_txt(words: &WordCollection, version: &str) -> String {
    let latest = words.latest();
    let mut text = String::new();
    let _ = writeln!(text, "status: ok");
    let _ = writeln!(text, "words_hash: {}", words.data_hash());
    let _ = writeln!(text, "word_count: {}", words.len());
    let _ = writeln!(text, "latest_word: {}", latest.map(|w| w.word.as_str()).unwrap_or(""));
    let _ = writeln!(text, "latest_date: {}", latest.map(|w| w.date.as_str()).unwrap_or(""));
    let _ = writeln!(text, "version: {version}");
    text
}

pub fn robots_txt(urls: &UrlBuilder) -> Result<String> {
    let sitemap = urls.full_url(&format!("/{SITEMAP_INDEX_XML}"))?;
    Ok(format!("User-agent: *\nAllow: /\n\nSitemap: {sitemap}\n"))
}

#[derive(Debug, Clone, Serialize)]
pub struct PageDocument {
    pub path: String,
    pub seo: SeoMetadata,
    pub breadcrumbs: Vec<BreadcrumbItem>,
}

/// SEO metadata and breadcrumbs for home and every listed page.
pub fn page_documents(
    registry: &PageMetadataRegistry,
    seo: &Seo,
    show_empty: bool,
) -> Result<Vec<PageDocument>> {
    let home = registry.page_metadata("");
    let mut documents = vec![PageDocument {
        path: String::new(),
        seo: seo.generate_seo_metadata(None, Some(&home.description), "/", &[])?,
        breadcrumbs: Vec::new(),
    }];

    for page in registry.all_pages(show_empty) {
        let pathname = format!("/{}", page.path);
        documents.push(PageDocument {
            path: page.path.clone(),
            seo: seo.generate_seo_metadata(
                Some(&page.metadata.title),
                Some(&page.metadata.description),
                &pathname,
                &[],
            )?,
            breadcrumbs: generate_breadcrumbs(&pathname, seo.urls(), registry),
        });
    }

    Ok(documents)
}

pub fn pages_json(documents: &[PageDocument]) -> Result<String> {
    serde_json::to_string_pretty(documents).map_err(|source| SiteError::Serialize {
        what: PAGES_JSON,
        source,
    })
}
