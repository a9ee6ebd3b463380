//! Site generation errors.

use thiserror::Error;

use crate::url::UrlError;

#[derive(Debug, Error)]
pub enum SiteError {
    #[error(transparent)]
    Url(#[from] UrlError),

    #[error(transparent)]
    Data(#[from] wotd_common_core::Error),

    #[error("failed to serialize {what}: {source}")]
    Serialize {
        what: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, SiteError>;
