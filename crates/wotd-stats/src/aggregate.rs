//! Aggregates over a whole word collection.

use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};
use wotd_common_core::WordEntry;

use crate::definitions::Suffix;
use crate::text;

/// A word together with its length in characters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordLength {
    pub word: String,
    pub length: usize,
}

/// Extremes and per-word letter frequency.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WordStats {
    pub longest: Option<WordLength>,
    pub shortest: Option<WordLength>,
    pub longest_palindrome: Option<WordLength>,
    pub shortest_palindrome: Option<WordLength>,
    /// Number of words containing each letter.
    pub letter_frequency: BTreeMap<char, usize>,
}

fn replace_if(slot: &mut Option<WordLength>, word: &str, length: usize, better: fn(usize, usize) -> bool) {
    let replace = match slot {
        Some(current) => better(length, current.length),
        None => true,
    };
    if replace {
        *slot = Some(WordLength {
            word: word.to_string(),
            length,
        });
    }
}

/// Single pass over the collection. The first word seen at an extreme length wins.
pub fn word_stats(words: &[WordEntry]) -> WordStats {
    let mut stats = WordStats::default();

    for entry in words {
        let word = entry.word.as_str();
        let length = word.chars().count();

        replace_if(&mut stats.longest, word, length, |a, b| a > b);
        replace_if(&mut stats.shortest, word, length, |a, b| a < b);

        if text::is_palindrome(word) {
            replace_if(&mut stats.longest_palindrome, word, length, |a, b| a > b);
            replace_if(&mut stats.shortest_palindrome, word, length, |a, b| a < b);
        }

        let unique: BTreeSet<char> = word
            .chars()
            .map(|c| c.to_ascii_lowercase())
            .filter(|c| c.is_ascii_lowercase())
            .collect();
        for letter in unique {
            *stats.letter_frequency.entry(letter).or_insert(0) += 1;
        }
    }

    stats
}

/// Rank letters by count, highest first, ties broken alphabetically.
pub fn letter_frequency_ranking(frequency: &BTreeMap<char, usize>) -> Vec<(char, usize)> {
    let mut ranked: Vec<(char, usize)> = frequency.iter().map(|(c, n)| (*c, *n)).collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
    ranked
}

/// Raw letter occurrence counts across all words.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LetterStats {
    pub most_common: Option<char>,
    pub least_common: Option<char>,
    pub frequency: BTreeMap<char, usize>,
}

/// Count every letter occurrence (not deduplicated per word).
pub fn letter_stats(words: &[WordEntry]) -> LetterStats {
    let mut frequency = BTreeMap::new();
    for entry in words {
        for c in entry.word.chars().map(|c| c.to_ascii_lowercase()) {
            if c.is_ascii_lowercase() {
                *frequency.entry(c).or_insert(0) += 1;
            }
        }
    }

    let ranked = letter_frequency_ranking(&frequency);
    LetterStats {
        most_common: ranked.first().map(|(c, _)| *c),
        least_common: ranked.last().map(|(c, _)| *c),
        frequency,
    }
}

/// Named letter patterns a word can match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum LetterPattern {
    Palindrome,
    StartEndSame,
    DoubleLetters,
    TripleLetters,
    AlphabeticalSequence,
    AllVowels,
    AllConsonants,
}

impl LetterPattern {
    pub const ALL: [LetterPattern; 7] = [
        LetterPattern::Palindrome,
        LetterPattern::StartEndSame,
        LetterPattern::DoubleLetters,
        LetterPattern::TripleLetters,
        LetterPattern::AlphabeticalSequence,
        LetterPattern::AllVowels,
        LetterPattern::AllConsonants,
    ];

    pub fn matches(&self, word: &str) -> bool {
        match self {
            LetterPattern::Palindrome => text::is_palindrome(word),
            LetterPattern::StartEndSame => text::is_start_end_same(word),
            LetterPattern::DoubleLetters => text::has_double_letters(word),
            LetterPattern::TripleLetters => text::has_triple_letters(word),
            LetterPattern::AlphabeticalSequence => text::has_alphabetical_sequence(word),
            LetterPattern::AllVowels => text::is_all_vowels(word),
            LetterPattern::AllConsonants => text::is_all_consonants(word),
        }
    }
}

/// Words matching `pattern`, in collection order.
pub fn words_matching(words: &[WordEntry], pattern: LetterPattern) -> Vec<&WordEntry> {
    words.iter().filter(|w| pattern.matches(&w.word)).collect()
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LetterPatternStats<'a> {
    pub start_end_same: Vec<&'a WordEntry>,
    pub double_letters: Vec<&'a WordEntry>,
    pub triple_letters: Vec<&'a WordEntry>,
    pub alphabetical: Vec<&'a WordEntry>,
    pub palindromes: Vec<&'a WordEntry>,
}

pub fn letter_pattern_stats(words: &[WordEntry]) -> LetterPatternStats<'_> {
    LetterPatternStats {
        start_end_same: words_matching(words, LetterPattern::StartEndSame),
        double_letters: words_matching(words, LetterPattern::DoubleLetters),
        triple_letters: words_matching(words, LetterPattern::TripleLetters),
        alphabetical: words_matching(words, LetterPattern::AlphabeticalSequence),
        palindromes: words_matching(words, LetterPattern::Palindrome),
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PatternStats<'a> {
    pub all_vowels: Vec<&'a WordEntry>,
    pub all_consonants: Vec<&'a WordEntry>,
    pub palindromes: Vec<&'a WordEntry>,
}

pub fn pattern_stats(words: &[WordEntry]) -> PatternStats<'_> {
    PatternStats {
        all_vowels: words_matching(words, LetterPattern::AllVowels),
        all_consonants: words_matching(words, LetterPattern::AllConsonants),
        palindromes: words_matching(words, LetterPattern::Palindrome),
    }
}

/// Words bucketed by ending. Every suffix has a bucket, possibly empty.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct WordEndingStats<'a> {
    buckets: BTreeMap<Suffix, Vec<&'a WordEntry>>,
}

impl<'a> WordEndingStats<'a> {
    pub fn get(&self, suffix: Suffix) -> &[&'a WordEntry] {
        self.buckets.get(&suffix).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn iter(&self) -> impl Iterator<Item = (Suffix, &[&'a WordEntry])> {
        self.buckets.iter().map(|(s, words)| (*s, words.as_slice()))
    }
}

pub fn word_ending_stats(words: &[WordEntry]) -> WordEndingStats<'_> {
    let mut buckets: BTreeMap<Suffix, Vec<&WordEntry>> =
        Suffix::ALL.iter().map(|s| (*s, Vec::new())).collect();

    for entry in words {
        for suffix in text::word_endings(&entry.word) {
            buckets.entry(suffix).or_default().push(entry);
        }
    }

    WordEndingStats { buckets }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SyllableStats<'a> {
    pub most_syllables: Option<&'a WordEntry>,
    pub least_syllables: Option<&'a WordEntry>,
}

/// Words with the most and fewest syllables. First seen wins ties.
pub fn syllable_stats(words: &[WordEntry]) -> SyllableStats<'_> {
    let mut stats = SyllableStats::default();
    let mut most = 0;
    let mut least = 0;

    for entry in words {
        let syllables = text::count_syllables(&entry.word);
        if stats.most_syllables.is_none() || syllables > most {
            stats.most_syllables = Some(entry);
            most = syllables;
        }
        if stats.least_syllables.is_none() || syllables < least {
            stats.least_syllables = Some(entry);
            least = syllables;
        }
    }

    stats
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LetterTypeStats<'a> {
    pub most_vowels: Option<&'a WordEntry>,
    pub most_consonants: Option<&'a WordEntry>,
}

/// Words with the most vowels and most consonants. First seen wins ties.
pub fn letter_type_stats(words: &[WordEntry]) -> LetterTypeStats<'_> {
    let mut stats = LetterTypeStats::default();
    let mut vowels = 0;
    let mut consonants = 0;

    for entry in words {
        let v = text::vowel_count(&entry.word);
        let c = text::consonant_count(&entry.word);
        if stats.most_vowels.is_none() || v > vowels {
            stats.most_vowels = Some(entry);
            vowels = v;
        }
        if stats.most_consonants.is_none() || c > consonants {
            stats.most_consonants = Some(entry);
            consonants = c;
        }
    }

    stats
}

/// Date of the first entry whose word matches exactly.
pub fn find_word_date<'a>(words: &'a [WordEntry], word: &str) -> Option<&'a str> {
    if word.is_empty() {
        return None;
    }
    words
        .iter()
        .find(|w| w.word == word)
        .map(|w| w.date.as_str())
}
