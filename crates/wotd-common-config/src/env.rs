//! Environment variables and `.env` file discovery.

use std::env;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EnvError {
    #[error("failed to load .env file: {0}")]
    DotenvError(#[from] dotenvy::Error),
}

/// Variable names read by the site tools.
pub mod vars {
    pub const SITE_URL: &str = "SITE_URL";
    pub const SITE_TITLE: &str = "SITE_TITLE";
    pub const SITE_DESCRIPTION: &str = "SITE_DESCRIPTION";
    pub const SITE_ID: &str = "SITE_ID";
    pub const BASE_PATH: &str = "BASE_PATH";
    pub const SOURCE_DIR: &str = "SOURCE_DIR";
    pub const SITE_LOCALE: &str = "SITE_LOCALE";
    pub const SITE_AUTHOR: &str = "SITE_AUTHOR";
    pub const SITE_AUTHOR_URL: &str = "SITE_AUTHOR_URL";
    pub const SITE_ATTRIBUTION_MESSAGE: &str = "SITE_ATTRIBUTION_MESSAGE";
    pub const SITE_KEYWORDS: &str = "SITE_KEYWORDS";
    pub const PACKAGE_VERSION: &str = "PACKAGE_VERSION";
    pub const SHOW_EMPTY_STATS: &str = "SHOW_EMPTY_STATS";

    pub const WOTD_DATA_DIR: &str = "WOTD_DATA_DIR";
    pub const WORDNIK_API_KEY: &str = "WORDNIK_API_KEY";
    pub const NODE_ENV: &str = "NODE_ENV";
}

/// `.env` files applied to the process environment, in load order.
#[derive(Debug, Clone, Default)]
pub struct Environment {
    loaded: Vec<PathBuf>,
}

impl Environment {
    /// Load `.env.local`, `.env.<NODE_ENV>` and `.env` from the working
    /// directory. Variables already set are never replaced, so earlier files
    /// take precedence over later ones. Missing files are skipped.
    pub fn init() -> Result<Self, EnvError> {
        Self::init_in(Path::new(""))
    }

    /// Same as [`Environment::init`], reading the files from `dir`.
    ///
    /// `NODE_ENV` is read after `.env.local`, which may set it.
    pub fn init_in(dir: &Path) -> Result<Self, EnvError> {
        let mut environment = Self::default();
        environment.load(dir.join(".env.local"))?;
        if let Ok(node_env) = env::var(vars::NODE_ENV) {
            environment.load(dir.join(format!(".env.{node_env}")))?;
        }
        environment.load(dir.join(".env"))?;
        Ok(environment)
    }

    fn load(&mut self, path: PathBuf) -> Result<(), EnvError> {
        match dotenvy::from_path(&path) {
            Ok(()) => {
                self.loaded.push(path);
                Ok(())
            }
            Err(dotenvy::Error::Io(e)) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    pub fn loaded_files(&self) -> &[PathBuf] {
        &self.loaded
    }
}

/// Interpret a boolean-ish environment value.
pub fn parse_bool(value: &str) -> bool {
    matches!(value.trim().to_lowercase().as_str(), "true" | "1" | "yes")
}

pub struct ApiKeys;

impl ApiKeys {
    /// `WORDNIK_API_KEY`, if set and non-empty.
    pub fn wordnik() -> Option<String> {
        env::var(vars::WORDNIK_API_KEY)
            .ok()
            .filter(|k| !k.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bool_parsing() {
        assert!(parse_bool("true"));
        assert!(parse_bool(" TRUE "));
        assert!(parse_bool("1"));
        assert!(parse_bool("yes"));
        assert!(!parse_bool("false"));
        assert!(!parse_bool(""));
        assert!(!parse_bool("on"));
    }

    #[test]
    fn test_node_env_from_local_file_selects_stage_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(".env.local"), "NODE_ENV=wotdstage\n").unwrap();
        std::fs::write(dir.path().join(".env.wotdstage"), "WOTD_STAGE_MARKER=staged\n").unwrap();
        env::remove_var(vars::NODE_ENV);

        let loaded = Environment::init_in(dir.path()).unwrap();

        assert_eq!(
            loaded.loaded_files().to_vec(),
            vec![dir.path().join(".env.local"), dir.path().join(".env.wotdstage")]
        );
        assert_eq!(env::var("WOTD_STAGE_MARKER").unwrap(), "staged");
        env::remove_var(vars::NODE_ENV);
    }

    #[test]
    fn test_init_without_files() {
        let env = Environment::init().unwrap();
        assert!(env.loaded_files().iter().all(|p| p.exists()));
    }
}
