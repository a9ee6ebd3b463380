//! Word-of-the-day site model and static outputs.
//!
//! Loads the word history from disk, derives page metadata, SEO blocks and
//! breadcrumbs, and writes the feeds, sitemaps and health file a deployment
//! serves next to the rendered pages.

pub mod breadcrumbs;
pub mod collection;
pub mod details;
pub mod error;
pub mod feeds;
pub mod generate;
pub mod pages;
pub mod seo;
pub mod url;
pub mod words;

pub use breadcrumbs::{generate_breadcrumbs, BreadcrumbItem, PageMetadataLookup};
pub use collection::{word_data_hash, AdjacentWords, WordCollection};
pub use details::WordDetails;
pub use error::{Result, SiteError};
pub use generate::{GenerateReport, SiteGenerator};
pub use pages::{PageCategory, PageEntry, PageMetadata, PageMetadataRegistry};
pub use seo::{Seo, SeoConfig, SeoMetadata};
pub use url::{UrlBuilder, UrlError};
pub use words::{WordCache, WordFileLoader, WordFileStore};
