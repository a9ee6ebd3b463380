//! CLI error handling.

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use thiserror::Error;
use wotd_common_config::{ConfigError, EnvError};
use wotd_common_http::HttpError;
use wotd_site::SiteError;

use crate::dictionary::DictionaryError;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// CLI error type with context
#[derive(Debug, Error)]
pub enum CliError {
    #[error("{message}")]
    Config {
        message: String,
        #[source]
        source: Option<BoxError>,
        hint: Option<String>,
    },

    #[error("{message}")]
    Io {
        message: String,
        #[source]
        source: Option<BoxError>,
        path: Option<PathBuf>,
    },

    #[error("{message}")]
    Network {
        message: String,
        #[source]
        source: Option<BoxError>,
        url: Option<String>,
    },

    #[error("{message}")]
    Validation {
        message: String,
        field: Option<String>,
    },

    #[error("{message}")]
    NotFound {
        message: String,
        resource_type: String,
        resource_name: String,
    },

    #[error("{message}")]
    Conflict {
        message: String,
        hint: Option<String>,
    },

    #[error("{message}")]
    Dictionary {
        message: String,
        #[source]
        source: Option<DictionaryError>,
    },

    #[error("{0}")]
    Other(#[from] anyhow::Error),
}

impl CliError {
    /// Stable error code, printed with the message.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Config { .. } => "E001",
            Self::Io { .. } => "E002",
            Self::Network { .. } => "E003",
            Self::Validation { .. } => "E004",
            Self::NotFound { .. } => "E005",
            Self::Conflict { .. } => "E006",
            Self::Dictionary { .. } => "E007",
            Self::Other(_) => "E999",
        }
    }

    /// Process exit status for this error.
    pub fn exit_status(&self) -> u8 {
        match self {
            Self::Config { .. } => 2,
            Self::Io { .. } => 3,
            Self::Network { .. } => 4,
            Self::Validation { .. } => 5,
            Self::NotFound { .. } => 6,
            Self::Conflict { .. } => 7,
            Self::Dictionary { .. } => 8,
            Self::Other(_) => 1,
        }
    }

    pub fn exit_code(&self) -> ExitCode {
        ExitCode::from(self.exit_status())
    }

    pub fn hint(&self) -> Option<&str> {
        match self {
            Self::Config { hint, .. } | Self::Conflict { hint, .. } => hint.as_deref(),
            _ => None,
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            source: None,
            hint: None,
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
            field: None,
        }
    }

    pub fn validation_field(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
            field: Some(field.into()),
        }
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict {
            message: message.into(),
            hint: None,
        }
    }

    pub fn conflict_with_hint(message: impl Into<String>, hint: impl Into<String>) -> Self {
        Self::Conflict {
            message: message.into(),
            hint: Some(hint.into()),
        }
    }

    pub fn not_found(
        resource_type: impl Into<String>,
        resource_name: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::NotFound {
            message: message.into(),
            resource_type: resource_type.into(),
            resource_name: resource_name.into(),
        }
    }
}

impl From<io::Error> for CliError {
    fn from(err: io::Error) -> Self {
        Self::Io {
            message: err.to_string(),
            source: Some(Box::new(err)),
            path: None,
        }
    }
}

impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        Self::Other(anyhow::anyhow!("JSON serialization failed: {err}"))
    }
}

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        Self::Config {
            message: format!("Configuration error: {err}"),
            source: Some(Box::new(err)),
            hint: Some("Set the variables in the environment or a .env file".to_string()),
        }
    }
}

impl From<EnvError> for CliError {
    fn from(err: EnvError) -> Self {
        Self::Config {
            message: err.to_string(),
            source: Some(Box::new(err)),
            hint: None,
        }
    }
}

impl From<wotd_common_core::Error> for CliError {
    fn from(err: wotd_common_core::Error) -> Self {
        use wotd_common_core::Error;

        let path = match &err {
            Error::FileSystem { path, .. } => Some(path.clone()),
            _ => None,
        };

        match err {
            Error::InvalidDate(date) => {
                Self::validation_field("date", format!("Invalid date '{date}': expected YYYYMMDD"))
            }
            Error::Config(message) => Self::config(message),
            other => Self::Io {
                message: other.to_string(),
                source: Some(Box::new(other)),
                path,
            },
        }
    }
}

impl From<SiteError> for CliError {
    fn from(err: SiteError) -> Self {
        match err {
            SiteError::Url(e) => Self::validation_field("path", e.to_string()),
            SiteError::Data(e) => e.into(),
            other => Self::Other(anyhow::Error::new(other)),
        }
    }
}

impl From<HttpError> for CliError {
    fn from(err: HttpError) -> Self {
        Self::Network {
            message: err.to_string(),
            source: Some(Box::new(err)),
            url: None,
        }
    }
}

impl From<DictionaryError> for CliError {
    fn from(err: DictionaryError) -> Self {
        match err {
            DictionaryError::NotFound { word } => Self::not_found(
                "word",
                word.clone(),
                format!("'{word}' not found in dictionary"),
            ),
            other => Self::Dictionary {
                message: other.to_string(),
                source: Some(other),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_config_exits_with_two() {
        let err: CliError = ConfigError::MissingRequired {
            vars: vec!["SITE_URL".to_string(), "SITE_ID".to_string()],
        }
        .into();
        assert_eq!(err.exit_status(), 2);
        assert_eq!(err.code(), "E001");
        assert!(err.to_string().contains("SITE_URL, SITE_ID"));
        assert!(err.hint().is_some());
    }

    #[test]
    fn test_dictionary_not_found_maps_to_not_found() {
        let err: CliError = DictionaryError::NotFound {
            word: "qwzx".to_string(),
        }
        .into();
        assert_eq!(err.exit_status(), 6);
        assert_eq!(err.to_string(), "'qwzx' not found in dictionary");
    }

    #[test]
    fn test_invalid_date_is_validation() {
        let err: CliError = wotd_common_core::Error::InvalidDate("2024".to_string()).into();
        assert_eq!(err.exit_status(), 5);
        assert!(matches!(err, CliError::Validation { field: Some(ref f), .. } if f == "date"));
    }

    #[test]
    fn test_exit_statuses_are_distinct() {
        let errors = [
            CliError::config("c"),
            CliError::from(io::Error::new(io::ErrorKind::Other, "io")),
            CliError::validation("v"),
            CliError::not_found("word", "w", "nf"),
            CliError::conflict("x"),
            CliError::Other(anyhow::anyhow!("other")),
        ];
        let mut statuses: Vec<u8> = errors.iter().map(CliError::exit_status).collect();
        statuses.sort_unstable();
        statuses.dedup();
        assert_eq!(statuses.len(), errors.len());
        assert!(!statuses.contains(&0));
    }
}
