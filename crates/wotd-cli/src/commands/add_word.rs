//! Add-word command implementation.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::Parser;
use serde::Serialize;
use tracing::Instrument;
use wotd_common_core::date::{format_date_key, parse_date_key};
use wotd_common_http::HttpClient;
use wotd_common_log::spans::word_span;
use wotd_site::WordFileStore;

use crate::cli::CommandContext;
use crate::dictionary::{DictionaryAdapter, WordnikAdapter};
use crate::error::CliError;
use crate::output::{print_output, FormattedOutput};

/// Add a word with dictionary lookup
#[derive(Debug, Parser)]
pub struct AddWordCommand {
    /// Word to add
    pub word: String,

    /// Date in YYYYMMDD format (defaults to today)
    pub date: Option<String>,

    /// Replace the word already stored for the date
    #[arg(short, long)]
    pub overwrite: bool,

    /// Keep the word's capitalization
    #[arg(short, long)]
    pub preserve_case: bool,
}

/// Validated-later input for [`add_word`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddWordRequest {
    pub word: String,
    pub date: Option<String>,
    pub overwrite: bool,
    pub preserve_case: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddWordOutcome {
    pub word: String,
    pub date: String,
    pub path: PathBuf,
    pub adapter: String,
    /// Word that was stored for the date before an overwrite.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub replaced: Option<String>,
}

impl FormattedOutput for AddWordOutcome {
    fn format_text(&self) -> String {
        let mut text = format!(
            "Added '{}' for {} ({})\n  file: {}",
            self.word,
            self.date,
            self.adapter,
            self.path.display()
        );
        if let Some(previous) = &self.replaced {
            text.push_str(&format!("\n  replaced: {previous}"));
        }
        text
    }
}

fn resolve_date(date: Option<&str>, today: NaiveDate) -> Result<String, CliError> {
    let Some(date) = date else {
        return Ok(format_date_key(today));
    };

    let parsed = parse_date_key(date).ok_or_else(|| {
        CliError::validation_field("date", format!("Invalid date '{date}': expected YYYYMMDD"))
    })?;
    if parsed > today {
        return Err(CliError::validation_field(
            "date",
            format!("Date {date} is in the future"),
        ));
    }
    Ok(date.to_string())
}

/// Look up `request.word` and store it for the requested date.
pub async fn add_word(
    store: &WordFileStore,
    adapter: &dyn DictionaryAdapter,
    request: AddWordRequest,
    today: NaiveDate,
) -> Result<AddWordOutcome, CliError> {
    let trimmed = request.word.trim();
    if trimmed.is_empty() {
        return Err(CliError::validation_field("word", "Word cannot be empty"));
    }
    let date = resolve_date(request.date.as_deref(), today)?;

    if let Some(existing) = store.find_by_word(trimmed) {
        if existing.date != date {
            return Err(CliError::conflict(format!(
                "'{}' already exists for {}",
                existing.word, existing.date
            )));
        }
        if !request.overwrite {
            return Err(CliError::conflict_with_hint(
                format!("'{}' already exists for {date}", existing.word),
                "Use --overwrite to replace it",
            ));
        }
    }

    let mut replaced = None;
    match store.read(&date) {
        Ok(Some(existing)) => {
            if !request.overwrite && !existing.word.eq_ignore_ascii_case(trimmed) {
                return Err(CliError::conflict_with_hint(
                    format!("A different word ('{}') already exists for {date}", existing.word),
                    "Use --overwrite to replace it",
                ));
            }
            replaced = Some(existing.word);
        }
        Ok(None) => {}
        Err(e) => {
            tracing::warn!(date = %date, error = %e, "ignoring unreadable word file");
        }
    }

    let word = if request.preserve_case {
        trimmed.to_string()
    } else {
        trimmed.to_lowercase()
    };

    let response = adapter
        .fetch_word_data(&word)
        .instrument(word_span(&word, &date))
        .await?;
    let entry = adapter.to_word_entry(response, &date, request.preserve_case);
    let path = store.write(&entry)?;
    tracing::info!(word = %entry.word, date = %date, path = %path.display(), "word added");

    Ok(AddWordOutcome {
        word: entry.word,
        date,
        path,
        adapter: entry.adapter,
        replaced,
    })
}

impl AddWordCommand {
    pub fn request(&self) -> AddWordRequest {
        AddWordRequest {
            word: self.word.clone(),
            date: self.date.clone(),
            overwrite: self.overwrite,
            preserve_case: self.preserve_case,
        }
    }

    pub async fn execute(&self, ctx: &CommandContext) -> Result<(), CliError> {
        let config = ctx.config.load()?;
        let store = WordFileStore::new(config.words_dir());
        let adapter = WordnikAdapter::from_env(HttpClient::new()?)?;

        let outcome = add_word(&store, &adapter, self.request(), ctx.today).await?;
        print_output(ctx, &outcome)
    }
}
