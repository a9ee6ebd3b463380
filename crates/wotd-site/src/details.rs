//! Display details extracted from a word's dictionary payload.

use serde::Serialize;
use wotd_common_core::{DictionaryDefinition, WordEntry};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WordDetails {
    pub word: String,
    pub part_of_speech: Option<String>,
    pub definition: Option<String>,
    pub attribution: Option<String>,
    pub source_dictionary: Option<String>,
    pub source_url: Option<String>,
}

impl WordDetails {
    /// Pick the first definition with text, and the first part of speech seen.
    ///
    /// A payload that is not a definition list yields empty details.
    pub fn from_entry(entry: &WordEntry) -> Self {
        let definitions = definitions(entry);
        let mut details = Self {
            word: entry.word.clone(),
            ..Self::default()
        };

        details.part_of_speech = definitions
            .iter()
            .find_map(|d| d.part_of_speech())
            .map(str::to_string);

        if let Some(primary) = definitions.iter().find(|d| d.text().is_some()) {
            details.definition = primary.text().map(str::to_string);
            details.attribution = primary.attribution_text.clone();
            details.source_dictionary = primary.source_dictionary.clone();
            details.source_url = primary.source_url.clone();
        }

        details
    }

    pub fn has_definition(&self) -> bool {
        self.definition.is_some()
    }
}

/// The payload as a definition list, empty when it has another shape.
pub fn definitions(entry: &WordEntry) -> Vec<DictionaryDefinition> {
    if entry.data.is_null() {
        return Vec::new();
    }

    match serde_json::from_value(entry.data.clone()) {
        Ok(definitions) => definitions,
        Err(e) => {
            tracing::warn!(
                word = %entry.word,
                date = %entry.date,
                error = %e,
                "word data is not a definition list"
            );
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_first_definition_with_text() {
        let entry = WordEntry::new("ephemeral", "20240101").with_data(
            "wordnik",
            json!([
                {"partOfSpeech": "adjective", "text": ""},
                {
                    "text": "Lasting for a very short time.",
                    "attributionText": "from The American Heritage Dictionary",
                    "sourceDictionary": "ahd-5",
                    "sourceUrl": "https://wordnik.com/words/ephemeral"
                }
            ]),
        );

        let details = WordDetails::from_entry(&entry);
        assert_eq!(details.word, "ephemeral");
        assert_eq!(details.part_of_speech.as_deref(), Some("adjective"));
        assert_eq!(
            details.definition.as_deref(),
            Some("Lasting for a very short time.")
        );
        assert_eq!(details.source_dictionary.as_deref(), Some("ahd-5"));
        assert!(details.has_definition());
    }

    #[test]
    fn test_missing_or_invalid_payload() {
        let empty = WordDetails::from_entry(&WordEntry::new("bare", "20240101"));
        assert_eq!(empty.word, "bare");
        assert!(!empty.has_definition());
        assert!(empty.part_of_speech.is_none());

        let odd = WordEntry::new("odd", "20240101").with_data("custom", json!({"meaning": "x"}));
        assert_eq!(WordDetails::from_entry(&odd).definition, None);
    }
}
