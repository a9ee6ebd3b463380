//! Word records shared by every crate.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::date;

/// One word-of-the-day record, as stored in `<YYYY>/<YYYYMMDD>.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WordEntry {
    /// The headword. Lowercase unless `preserve_case` is set.
    pub word: String,
    /// Date key in `YYYYMMDD` form.
    #[serde(default)]
    pub date: String,
    /// Name of the dictionary adapter that produced `data`.
    #[serde(default)]
    pub adapter: String,
    /// Whether the original capitalization must be shown verbatim.
    ///
    /// `None` for files written before the field existed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preserve_case: Option<bool>,
    /// Adapter-specific dictionary payload.
    #[serde(default)]
    pub data: Value,
    /// Untransformed adapter response, when kept.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw_data: Option<Value>,
}

impl WordEntry {
    /// Create an entry with an empty payload.
    pub fn new(word: impl Into<String>, date: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            date: date.into(),
            adapter: String::new(),
            preserve_case: Some(false),
            data: Value::Null,
            raw_data: None,
        }
    }

    /// Set the dictionary payload.
    pub fn with_data(mut self, adapter: impl Into<String>, data: Value) -> Self {
        self.adapter = adapter.into();
        self.data = data;
        self
    }

    /// Whether capitalization is preserved for display.
    pub fn preserves_case(&self) -> bool {
        self.preserve_case.unwrap_or(false)
    }

    /// `YYYY` part of the date key.
    pub fn year(&self) -> Option<&str> {
        date::year_of(&self.date)
    }
}

/// A single definition, in the adapter-independent shape.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DictionaryDefinition {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub part_of_speech: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attribution_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_dictionary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_url: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub examples: Vec<String>,
}

impl DictionaryDefinition {
    /// Non-blank definition text.
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref().map(str::trim).filter(|t| !t.is_empty())
    }

    /// Non-blank part of speech.
    pub fn part_of_speech(&self) -> Option<&str> {
        self.part_of_speech
            .as_deref()
            .map(str::trim)
            .filter(|p| !p.is_empty())
    }
}

/// Whether a definition list contains at least one usable entry.
pub fn is_valid_dictionary_data(data: &[DictionaryDefinition]) -> bool {
    data.iter()
        .any(|d| d.text().is_some() || d.part_of_speech().is_some())
}
