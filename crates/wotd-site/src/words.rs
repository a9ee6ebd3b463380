//! Word file loading, caching and persistence.
//!
//! Files live at `<words_dir>/<YYYY>/<YYYYMMDD>.json`.

use regex::Regex;
use serde::Serialize;
use std::cell::OnceCell;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use wotd_common_core::date::{is_valid_date_key, year_of};
use wotd_common_core::{Error, Result, WordEntry};
use wotd_common_fs::{list_files_with_extension, read_to_string, write_string_atomic, MAX_WORD_FILE_SIZE};

fn date_pattern() -> Option<&'static Regex> {
    static PATTERN: OnceLock<Option<Regex>> = OnceLock::new();
    PATTERN
        .get_or_init(|| Regex::new(r"(\d{8})\.json$").ok())
        .as_ref()
}

/// The `YYYYMMDD` key embedded in a word file name.
pub fn date_from_file_name(path: &Path) -> Option<String> {
    let name = path.file_name()?.to_str()?;
    date_pattern()?
        .captures(name)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

fn parse_word_file(path: &Path) -> Result<WordEntry> {
    let contents = read_to_string(path, MAX_WORD_FILE_SIZE)?;
    let mut entry: WordEntry = serde_json::from_str(&contents)
        .map_err(|e| Error::Serialization(format!("{}: {e}", path.display())))?;

    if entry.date.is_empty() {
        if let Some(date) = date_from_file_name(path) {
            entry.date = date;
        }
    }

    Ok(entry)
}

/// Reads every word file under a directory tree.
#[derive(Debug, Clone)]
pub struct WordFileLoader {
    words_dir: PathBuf,
}

impl WordFileLoader {
    pub fn new(words_dir: impl Into<PathBuf>) -> Self {
        Self {
            words_dir: words_dir.into(),
        }
    }

    pub fn words_dir(&self) -> &Path {
        &self.words_dir
    }

    /// Paths of all word files, sorted.
    pub fn files(&self) -> Vec<PathBuf> {
        list_files_with_extension(&self.words_dir, "json")
            .into_iter()
            .filter(|path| date_from_file_name(path).is_some())
            .collect()
    }

    /// Load every parseable entry, newest first.
    ///
    /// Unreadable or malformed files are skipped with a warning.
    pub fn load(&self) -> Vec<WordEntry> {
        let mut words: Vec<WordEntry> = self
            .files()
            .iter()
            .filter_map(|path| match parse_word_file(path) {
                Ok(entry) => Some(entry),
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "skipping word file");
                    None
                }
            })
            .collect();

        words.sort_by(|a, b| b.date.cmp(&a.date));
        tracing::debug!(
            dir = %self.words_dir.display(),
            count = words.len(),
            "loaded word files"
        );
        words
    }
}

/// Memoized snapshot of the word collection for a single build.
#[derive(Debug)]
pub struct WordCache {
    loader: WordFileLoader,
    words: OnceCell<Vec<WordEntry>>,
}

impl WordCache {
    pub fn new(loader: WordFileLoader) -> Self {
        Self {
            loader,
            words: OnceCell::new(),
        }
    }

    /// Words sorted by date descending, loaded on first access.
    pub fn words(&self) -> &[WordEntry] {
        self.words.get_or_init(|| self.loader.load())
    }

    pub fn is_loaded(&self) -> bool {
        self.words.get().is_some()
    }

    /// Drop the snapshot so the next `words()` call reloads from disk.
    pub fn invalidate(&mut self) {
        self.words.take();
    }
}

/// Read/write access to individual word files.
#[derive(Debug, Clone)]
pub struct WordFileStore {
    words_dir: PathBuf,
}

impl WordFileStore {
    pub fn new(words_dir: impl Into<PathBuf>) -> Self {
        Self {
            words_dir: words_dir.into(),
        }
    }

    pub fn loader(&self) -> WordFileLoader {
        WordFileLoader::new(&self.words_dir)
    }

    /// `<words_dir>/<YYYY>/<date>.json`.
    pub fn path_for(&self, date: &str) -> Result<PathBuf> {
        let year = year_of(date)
            .filter(|_| is_valid_date_key(date))
            .ok_or_else(|| Error::InvalidDate(date.to_string()))?;
        Ok(self.words_dir.join(year).join(format!("{date}.json")))
    }

    /// Entry stored for `date`, if any.
    pub fn read(&self, date: &str) -> Result<Option<WordEntry>> {
        let path = self.path_for(date)?;
        if !path.exists() {
            return Ok(None);
        }
        parse_word_file(&path).map(Some)
    }

    /// Read the entry at an explicit file path.
    pub fn read_path(&self, path: &Path) -> Result<WordEntry> {
        parse_word_file(path)
    }

    /// First stored entry whose word matches case-insensitively.
    pub fn find_by_word(&self, word: &str) -> Option<WordEntry> {
        let needle = word.to_lowercase();
        self.loader()
            .load()
            .into_iter()
            .find(|entry| entry.word.to_lowercase() == needle)
    }

    /// Write `entry` to its dated path and return that path.
    pub fn write(&self, entry: &WordEntry) -> Result<PathBuf> {
        let path = self.path_for(&entry.date)?;
        self.write_path(&path, entry)?;
        Ok(path)
    }

    /// Write `entry` to `path` as 4-space indented JSON.
    pub fn write_path(&self, path: &Path, entry: &WordEntry) -> Result<()> {
        let json = to_pretty_json(entry)?;
        write_string_atomic(path, &json)
    }
}

/// Serialize with 4-space indentation and a trailing newline.
pub fn to_pretty_json<T: Serialize>(value: &T) -> Result<String> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value
        .serialize(&mut serializer)
        .map_err(|e| Error::Serialization(e.to_string()))?;
    buf.push(b'\n');
    String::from_utf8(buf).map_err(|e| Error::Serialization(e.to_string()))
}
