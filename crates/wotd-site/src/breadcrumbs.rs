//! Breadcrumb navigation built from a pathname.

use serde::Serialize;
use std::collections::HashMap;

use crate::url::UrlBuilder;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BreadcrumbItem {
    pub label: String,
    pub href: String,
}

impl BreadcrumbItem {
    fn new(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: href.into(),
        }
    }
}

/// Page titles by site path.
pub trait PageMetadataLookup {
    /// Title for `path` (leading/trailing slashes ignored), if the page is known.
    fn page_title(&self, path: &str) -> Option<String>;
}

impl PageMetadataLookup for HashMap<String, String> {
    fn page_title(&self, path: &str) -> Option<String> {
        self.get(path.trim_matches('/')).cloned()
    }
}

/// Build `home > segment > ...` breadcrumbs for `pathname`.
///
/// The site root yields no breadcrumbs. Labels come from the lookup's
/// lowercased title, falling back to the raw segment.
pub fn generate_breadcrumbs(
    pathname: &str,
    urls: &UrlBuilder,
    lookup: &dyn PageMetadataLookup,
) -> Vec<BreadcrumbItem> {
    let path = urls.strip_base_path(pathname);
    if path.is_empty() || path == "home" {
        return Vec::new();
    }

    let mut breadcrumbs = vec![BreadcrumbItem::new("home", "/")];
    let mut href = String::new();

    for segment in path.split('/').filter(|s| !s.is_empty()) {
        href.push('/');
        href.push_str(segment);

        let label = lookup
            .page_title(&href)
            .map(|title| title.to_lowercase())
            .filter(|title| !title.is_empty())
            .unwrap_or_else(|| segment.to_string());

        breadcrumbs.push(BreadcrumbItem::new(label, href.clone()));
    }

    breadcrumbs
}
