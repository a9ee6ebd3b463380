//! Queries over the word history.

use chrono::NaiveDate;
use sha2::{Digest, Sha256};
use std::collections::BTreeMap;
use wotd_common_core::date::format_date_key;
use wotd_common_core::WordEntry;

const PAST_WORDS_LIMIT: usize = 5;

/// The word history, always sorted newest first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WordCollection {
    words: Vec<WordEntry>,
}

/// Entries on either side of a given date.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AdjacentWords<'a> {
    /// The next older entry.
    pub previous: Option<&'a WordEntry>,
    /// The next newer entry.
    pub next: Option<&'a WordEntry>,
}

impl WordCollection {
    pub fn new(mut words: Vec<WordEntry>) -> Self {
        words.sort_by(|a, b| b.date.cmp(&a.date));
        Self { words }
    }

    pub fn words(&self) -> &[WordEntry] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn latest(&self) -> Option<&WordEntry> {
        self.words.first()
    }

    /// Most recent entry not dated after `today`, else the newest entry.
    pub fn current_word(&self, today: NaiveDate) -> Option<&WordEntry> {
        let today = format_date_key(today);
        self.words
            .iter()
            .find(|w| w.date <= today)
            .or_else(|| self.words.first())
    }

    /// Up to five entries dated strictly before `date`, newest first.
    pub fn past_words(&self, date: &str) -> Vec<&WordEntry> {
        self.words
            .iter()
            .filter(|w| w.date.as_str() < date)
            .take(PAST_WORDS_LIMIT)
            .collect()
    }

    pub fn word_by_date(&self, date: &str) -> Option<&WordEntry> {
        self.words.iter().find(|w| w.date == date)
    }

    /// Case-insensitive lookup by headword.
    pub fn word_by_name(&self, word: &str) -> Option<&WordEntry> {
        let needle = word.to_lowercase();
        self.words.iter().find(|w| w.word.to_lowercase() == needle)
    }

    pub fn adjacent_words(&self, date: &str) -> AdjacentWords<'_> {
        let Some(index) = self.words.iter().position(|w| w.date == date) else {
            return AdjacentWords::default();
        };

        AdjacentWords {
            previous: self.words.get(index + 1),
            next: index.checked_sub(1).and_then(|i| self.words.get(i)),
        }
    }

    pub fn words_by_year(&self, year: &str) -> Vec<&WordEntry> {
        self.words
            .iter()
            .filter(|w| w.date.starts_with(year))
            .collect()
    }

    /// Entries keyed by `YYYY`, each group newest first.
    pub fn group_by_year(&self) -> BTreeMap<String, Vec<&WordEntry>> {
        let mut groups: BTreeMap<String, Vec<&WordEntry>> = BTreeMap::new();
        for word in &self.words {
            if let Some(year) = word.year() {
                groups.entry(year.to_string()).or_default().push(word);
            }
        }
        groups
    }

    /// Distinct years, newest first.
    pub fn available_years(&self) -> Vec<String> {
        self.group_by_year().into_keys().rev().collect()
    }

    /// Entries oldest first.
    pub fn chronological(&self) -> Vec<&WordEntry> {
        self.words.iter().rev().collect()
    }

    pub fn word_strings(&self) -> Vec<String> {
        self.words.iter().map(|w| w.word.clone()).collect()
    }

    pub fn data_hash(&self) -> String {
        word_data_hash(&self.word_strings())
    }
}

impl From<Vec<WordEntry>> for WordCollection {
    fn from(words: Vec<WordEntry>) -> Self {
        Self::new(words)
    }
}

/// Hex SHA-256 of `"<count>:<sorted words joined by ','>"`.
///
/// Independent of input order, so deployments can compare word sets cheaply.
pub fn word_data_hash<S: AsRef<str>>(words: &[S]) -> String {
    let mut sorted: Vec<&str> = words.iter().map(AsRef::as_ref).collect();
    sorted.sort_unstable();

    let mut hasher = Sha256::new();
    hasher.update(format!("{}:{}", sorted.len(), sorted.join(",")));
    format!("{:x}", hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collection() -> WordCollection {
        WordCollection::new(vec![
            WordEntry::new("alpha", "20230615"),
            WordEntry::new("delta", "20240103"),
            WordEntry::new("Bravo", "20240101"),
            WordEntry::new("charlie", "20240102"),
            WordEntry::new("echo", "20240110"),
        ])
    }

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn names(words: &[&WordEntry]) -> Vec<String> {
        words.iter().map(|w| w.word.clone()).collect()
    }

    #[test]
    fn test_sorted_descending() {
        let words = collection();
        assert_eq!(
            words.word_strings(),
            vec!["echo", "delta", "charlie", "Bravo", "alpha"]
        );
        assert_eq!(words.latest().unwrap().word, "echo");
    }

    #[test]
    fn test_current_word() {
        let words = collection();
        assert_eq!(words.current_word(day(2024, 1, 5)).unwrap().word, "delta");
        assert_eq!(words.current_word(day(2024, 1, 10)).unwrap().word, "echo");
        // Everything in the future: fall back to the newest
        assert_eq!(words.current_word(day(2020, 1, 1)).unwrap().word, "echo");
        assert!(WordCollection::default().current_word(day(2024, 1, 1)).is_none());
    }

    #[test]
    fn test_past_words() {
        let words = collection();
        assert_eq!(
            names(&words.past_words("20240103")),
            vec!["charlie", "Bravo", "alpha"]
        );
        assert!(words.past_words("20230615").is_empty());

        let many = WordCollection::new(
            (1..=9)
                .map(|d| WordEntry::new(format!("w{d}"), format!("2024010{d}")))
                .collect(),
        );
        assert_eq!(
            names(&many.past_words("20240109")),
            vec!["w8", "w7", "w6", "w5", "w4"]
        );
    }

    #[test]
    fn test_lookup() {
        let words = collection();
        assert_eq!(words.word_by_date("20240102").unwrap().word, "charlie");
        assert!(words.word_by_date("20240104").is_none());
        assert_eq!(words.word_by_name("bravo").unwrap().date, "20240101");
        assert_eq!(words.word_by_name("ECHO").unwrap().date, "20240110");
    }

    #[test]
    fn test_adjacent_words() {
        let words = collection();
        let adjacent = words.adjacent_words("20240102");
        assert_eq!(adjacent.previous.unwrap().word, "Bravo");
        assert_eq!(adjacent.next.unwrap().word, "delta");

        let newest = words.adjacent_words("20240110");
        assert!(newest.next.is_none());
        assert_eq!(newest.previous.unwrap().word, "delta");

        let oldest = words.adjacent_words("20230615");
        assert!(oldest.previous.is_none());

        assert_eq!(words.adjacent_words("19990101"), AdjacentWords::default());
    }

    #[test]
    fn test_years() {
        let words = collection();
        assert_eq!(words.available_years(), vec!["2024", "2023"]);
        assert_eq!(words.words_by_year("2024").len(), 4);

        let groups = words.group_by_year();
        assert_eq!(names(&groups["2023"]), vec!["alpha"]);
        assert_eq!(groups["2024"][0].word, "echo");
    }

    #[test]
    fn test_chronological() {
        let words = collection();
        assert_eq!(words.chronological()[0].word, "alpha");
        assert_eq!(words.chronological()[4].word, "echo");
    }

    #[test]
    fn test_word_data_hash() {
        let a = word_data_hash(&["beta", "alpha"]);
        let b = word_data_hash(&["alpha", "beta"]);
        assert_eq!(a, b);
        assert_eq!(a.len(), 64);
        assert_ne!(a, word_data_hash(&["alpha"]));

        let mut hasher = Sha256::new();
        hasher.update("2:alpha,beta");
        assert_eq!(a, format!("{:x}", hasher.finalize()));
    }

    #[test]
    fn test_empty_hash_is_stable() {
        let empty: [&str; 0] = [];
        assert_eq!(word_data_hash(&empty), WordCollection::default().data_hash());
    }
}
