//! Stats page catalogue.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use wotd_common_core::WordEntry;

use crate::aggregate::{letter_pattern_stats, letter_stats, pattern_stats, word_ending_stats};
use crate::milestone::chronological_milestones;
use crate::streak::streak_stats;

/// Word endings tracked by the stats pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Suffix {
    Ing,
    Ed,
    Ly,
    Ness,
    Ful,
    Less,
}

impl Suffix {
    pub const ALL: [Suffix; 6] = [
        Suffix::Ing,
        Suffix::Ed,
        Suffix::Ly,
        Suffix::Ness,
        Suffix::Ful,
        Suffix::Less,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Suffix::Ing => "ing",
            Suffix::Ed => "ed",
            Suffix::Ly => "ly",
            Suffix::Ness => "ness",
            Suffix::Ful => "ful",
            Suffix::Less => "less",
        }
    }

    /// The stats page listing words with this ending.
    pub fn slug(&self) -> StatsSlug {
        match self {
            Suffix::Ing => StatsSlug::WordsEndingIng,
            Suffix::Ed => StatsSlug::WordsEndingEd,
            Suffix::Ly => StatsSlug::WordsEndingLy,
            Suffix::Ness => StatsSlug::WordsEndingNess,
            Suffix::Ful => StatsSlug::WordsEndingFul,
            Suffix::Less => StatsSlug::WordsEndingLess,
        }
    }
}

impl fmt::Display for Suffix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Every stats page, identified by its URL slug.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StatsSlug {
    // Letter patterns
    AlphabeticalOrder,
    DoubleLetters,
    TripleLetters,
    SameStartEnd,
    Palindromes,
    // Word patterns
    AllConsonants,
    AllVowels,
    // Dynamic
    MostCommonLetter,
    LeastCommonLetter,
    MilestoneWords,
    CurrentStreak,
    LongestStreak,
    // Endings
    WordsEndingEd,
    WordsEndingIng,
    WordsEndingLy,
    WordsEndingNess,
    WordsEndingFul,
    WordsEndingLess,
}

impl StatsSlug {
    pub const ALL: [StatsSlug; 18] = [
        StatsSlug::AlphabeticalOrder,
        StatsSlug::DoubleLetters,
        StatsSlug::TripleLetters,
        StatsSlug::SameStartEnd,
        StatsSlug::Palindromes,
        StatsSlug::AllConsonants,
        StatsSlug::AllVowels,
        StatsSlug::MostCommonLetter,
        StatsSlug::LeastCommonLetter,
        StatsSlug::MilestoneWords,
        StatsSlug::CurrentStreak,
        StatsSlug::LongestStreak,
        StatsSlug::WordsEndingEd,
        StatsSlug::WordsEndingIng,
        StatsSlug::WordsEndingLy,
        StatsSlug::WordsEndingNess,
        StatsSlug::WordsEndingFul,
        StatsSlug::WordsEndingLess,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            StatsSlug::AlphabeticalOrder => "alphabetical-order",
            StatsSlug::DoubleLetters => "double-letters",
            StatsSlug::TripleLetters => "triple-letters",
            StatsSlug::SameStartEnd => "same-start-end",
            StatsSlug::Palindromes => "palindromes",
            StatsSlug::AllConsonants => "all-consonants",
            StatsSlug::AllVowels => "all-vowels",
            StatsSlug::MostCommonLetter => "most-common-letter",
            StatsSlug::LeastCommonLetter => "least-common-letter",
            StatsSlug::MilestoneWords => "milestone-words",
            StatsSlug::CurrentStreak => "current-streak",
            StatsSlug::LongestStreak => "longest-streak",
            StatsSlug::WordsEndingEd => "words-ending-ed",
            StatsSlug::WordsEndingIng => "words-ending-ing",
            StatsSlug::WordsEndingLy => "words-ending-ly",
            StatsSlug::WordsEndingNess => "words-ending-ness",
            StatsSlug::WordsEndingFul => "words-ending-ful",
            StatsSlug::WordsEndingLess => "words-ending-less",
        }
    }

    /// Site path of the page, without leading slash.
    pub fn path(&self) -> String {
        format!("stats/{}", self.as_str())
    }

    /// The suffix behind a `words-ending-*` page.
    pub fn suffix(&self) -> Option<Suffix> {
        match self {
            StatsSlug::WordsEndingEd => Some(Suffix::Ed),
            StatsSlug::WordsEndingIng => Some(Suffix::Ing),
            StatsSlug::WordsEndingLy => Some(Suffix::Ly),
            StatsSlug::WordsEndingNess => Some(Suffix::Ness),
            StatsSlug::WordsEndingFul => Some(Suffix::Ful),
            StatsSlug::WordsEndingLess => Some(Suffix::Less),
            _ => None,
        }
    }

    fn suffix_str(&self) -> &'static str {
        self.suffix().map(|s| s.as_str()).unwrap_or_default()
    }

    pub fn title(&self) -> String {
        let title = match self {
            StatsSlug::AlphabeticalOrder => "Alphabetical Order",
            StatsSlug::DoubleLetters => "Double Letters",
            StatsSlug::TripleLetters => "Triple Letters",
            StatsSlug::SameStartEnd => "Same Start and End",
            StatsSlug::Palindromes => "Palindromes",
            StatsSlug::AllConsonants => "All Consonants",
            StatsSlug::AllVowels => "All Vowels",
            StatsSlug::MostCommonLetter => "Most Common Letter",
            StatsSlug::LeastCommonLetter => "Least Common Letter",
            StatsSlug::MilestoneWords => "Milestone Words",
            StatsSlug::CurrentStreak => "Current Streak",
            StatsSlug::LongestStreak => "Longest Streak",
            StatsSlug::WordsEndingEd
            | StatsSlug::WordsEndingIng
            | StatsSlug::WordsEndingLy
            | StatsSlug::WordsEndingNess
            | StatsSlug::WordsEndingFul
            | StatsSlug::WordsEndingLess => {
                return format!("Words Ending in -{}", self.suffix_str());
            }
        };
        title.to_string()
    }

    /// Meta description for the page. `arg` is the letter for the
    /// most/least common letter pages and ignored elsewhere.
    pub fn meta_description(&self, count: usize, arg: Option<&str>) -> String {
        let words = pluralize(count, "word");
        match self {
            StatsSlug::AlphabeticalOrder => {
                format!("{words} with three letters in alphabetical order.")
            }
            StatsSlug::DoubleLetters => format!("{words} with double letters."),
            StatsSlug::TripleLetters => format!("{words} with three identical letters in a row."),
            StatsSlug::SameStartEnd => format!("{words} that start and end with the same letter."),
            StatsSlug::Palindromes => format!("{words} that read the same backwards."),
            StatsSlug::AllConsonants => format!("{words} made only of consonants."),
            StatsSlug::AllVowels => format!("{words} made only of vowels."),
            StatsSlug::MostCommonLetter => match arg.filter(|a| !a.is_empty()) {
                Some(letter) => format!("{words} containing \"{letter}\", the most common letter."),
                None => format!("{words} containing the most common letter."),
            },
            StatsSlug::LeastCommonLetter => match arg.filter(|a| !a.is_empty()) {
                Some(letter) => format!("{words} containing \"{letter}\", the least common letter."),
                None => format!("{words} containing the least common letter."),
            },
            StatsSlug::MilestoneWords => format!("{} in the word history.", pluralize(count, "milestone word")),
            StatsSlug::CurrentStreak => format!("The current streak is {}.", pluralize(count, "day")),
            StatsSlug::LongestStreak => format!("The longest streak is {}.", pluralize(count, "day")),
            StatsSlug::WordsEndingEd
            | StatsSlug::WordsEndingIng
            | StatsSlug::WordsEndingLy
            | StatsSlug::WordsEndingNess
            | StatsSlug::WordsEndingFul
            | StatsSlug::WordsEndingLess => format!("{words} ending in -{}.", self.suffix_str()),
        }
    }

    /// Extra description argument derived from the data, if the page has one.
    pub fn description_arg(&self, words: &[WordEntry]) -> Option<String> {
        match self {
            StatsSlug::MostCommonLetter => letter_stats(words).most_common.map(String::from),
            StatsSlug::LeastCommonLetter => letter_stats(words).least_common.map(String::from),
            _ => None,
        }
    }

    /// Number of items the page lists. Total over every slug.
    pub fn count(&self, words: &[WordEntry], today: NaiveDate) -> usize {
        match self {
            StatsSlug::AlphabeticalOrder => letter_pattern_stats(words).alphabetical.len(),
            StatsSlug::DoubleLetters => letter_pattern_stats(words).double_letters.len(),
            StatsSlug::TripleLetters => letter_pattern_stats(words).triple_letters.len(),
            StatsSlug::SameStartEnd => letter_pattern_stats(words).start_end_same.len(),
            StatsSlug::Palindromes => letter_pattern_stats(words).palindromes.len(),
            StatsSlug::AllConsonants => pattern_stats(words).all_consonants.len(),
            StatsSlug::AllVowels => pattern_stats(words).all_vowels.len(),
            StatsSlug::MostCommonLetter => count_containing(words, letter_stats(words).most_common),
            StatsSlug::LeastCommonLetter => {
                count_containing(words, letter_stats(words).least_common)
            }
            StatsSlug::MilestoneWords => chronological_milestones(words).len(),
            StatsSlug::CurrentStreak => streak_stats(words, today).current_streak,
            StatsSlug::LongestStreak => streak_stats(words, today).longest_streak,
            StatsSlug::WordsEndingEd
            | StatsSlug::WordsEndingIng
            | StatsSlug::WordsEndingLy
            | StatsSlug::WordsEndingNess
            | StatsSlug::WordsEndingFul
            | StatsSlug::WordsEndingLess => self
                .suffix()
                .map(|suffix| word_ending_stats(words).get(suffix).len())
                .unwrap_or(0),
        }
    }
}

fn count_containing(words: &[WordEntry], letter: Option<char>) -> usize {
    match letter {
        Some(letter) => words
            .iter()
            .filter(|w| w.word.to_lowercase().contains(letter))
            .count(),
        None => 0,
    }
}

fn pluralize(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("1 {noun}")
    } else {
        format!("{count} {noun}s")
    }
}

impl fmt::Display for StatsSlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownSlug(pub String);

impl fmt::Display for UnknownSlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown stats page '{}'", self.0)
    }
}

impl std::error::Error for UnknownSlug {}

impl FromStr for StatsSlug {
    type Err = UnknownSlug;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        StatsSlug::ALL
            .iter()
            .copied()
            .find(|slug| slug.as_str() == s)
            .ok_or_else(|| UnknownSlug(s.to_string()))
    }
}
