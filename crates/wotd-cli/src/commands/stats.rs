//! Stats command implementation.

use std::collections::BTreeMap;
use std::fmt::Write as _;

use chrono::NaiveDate;
use clap::Parser;
use serde::Serialize;
use wotd_site::{WordCache, WordCollection, WordFileLoader};
use wotd_stats::{
    chronological_milestones, letter_stats, streak_stats, syllable_stats, word_ending_stats, word_stats,
    StatsSlug, StreakStats, WordLength,
};

use crate::cli::CommandContext;
use crate::error::CliError;
use crate::output::{print_output, FormattedOutput};

/// Print statistics for the word collection
#[derive(Debug, Parser)]
pub struct StatsCommand {}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MilestoneWord {
    pub milestone: usize,
    pub word: String,
    pub date: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsPageCount {
    pub path: String,
    pub title: String,
    pub count: usize,
}

/// Owned snapshot of every aggregate shown by `wotd stats`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsReport {
    pub word_count: usize,
    pub words_hash: String,
    pub streak: StreakStats,
    pub longest: Option<WordLength>,
    pub shortest: Option<WordLength>,
    pub longest_palindrome: Option<WordLength>,
    pub shortest_palindrome: Option<WordLength>,
    pub most_common_letter: Option<char>,
    pub least_common_letter: Option<char>,
    pub most_syllables: Option<String>,
    pub least_syllables: Option<String>,
    pub milestones: Vec<MilestoneWord>,
    pub endings: BTreeMap<String, usize>,
    pub pages: Vec<StatsPageCount>,
}

impl StatsReport {
    pub fn build(words: &WordCollection, today: NaiveDate) -> Self {
        let entries = words.words();
        let extremes = word_stats(entries);
        let letters = letter_stats(entries);
        let syllables = syllable_stats(entries);

        let milestones = chronological_milestones(entries)
            .into_iter()
            .map(|m| MilestoneWord {
                milestone: m.milestone,
                word: m.word.word.clone(),
                date: m.word.date.clone(),
            })
            .collect();

        let endings = word_ending_stats(entries)
            .iter()
            .map(|(suffix, matched)| (suffix.as_str().to_string(), matched.len()))
            .collect();

        let pages = StatsSlug::ALL
            .iter()
            .map(|slug| StatsPageCount {
                path: slug.path(),
                title: slug.title(),
                count: slug.count(entries, today),
            })
            .collect();

        Self {
            word_count: words.len(),
            words_hash: words.data_hash(),
            streak: streak_stats(entries, today),
            longest: extremes.longest,
            shortest: extremes.shortest,
            longest_palindrome: extremes.longest_palindrome,
            shortest_palindrome: extremes.shortest_palindrome,
            most_common_letter: letters.most_common,
            least_common_letter: letters.least_common,
            most_syllables: syllables.most_syllables.map(|e| e.word.clone()),
            least_syllables: syllables.least_syllables.map(|e| e.word.clone()),
            milestones,
            endings,
            pages,
        }
    }
}

fn word_or_dash(value: Option<&WordLength>) -> String {
    value.map_or_else(|| "-".to_string(), |w| format!("{} ({})", w.word, w.length))
}

fn or_dash<T: ToString>(value: Option<T>) -> String {
    value.map_or_else(|| "-".to_string(), |v| v.to_string())
}

impl FormattedOutput for StatsReport {
    fn format_text(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "Words:               {}", self.word_count);
        let _ = writeln!(out, "Words hash:          {}", self.words_hash);
        let _ = writeln!(
            out,
            "Streak:              {} current, {} longest{}",
            self.streak.current_streak,
            self.streak.longest_streak,
            if self.streak.is_active { " (active)" } else { "" }
        );
        let _ = writeln!(out, "Longest word:        {}", word_or_dash(self.longest.as_ref()));
        let _ = writeln!(out, "Shortest word:       {}", word_or_dash(self.shortest.as_ref()));
        let _ = writeln!(
            out,
            "Longest palindrome:  {}",
            word_or_dash(self.longest_palindrome.as_ref())
        );
        let _ = writeln!(
            out,
            "Shortest palindrome: {}",
            word_or_dash(self.shortest_palindrome.as_ref())
        );
        let _ = writeln!(out, "Most common letter:  {}", or_dash(self.most_common_letter));
        let _ = writeln!(out, "Least common letter: {}", or_dash(self.least_common_letter));
        let _ = writeln!(out, "Most syllables:      {}", or_dash(self.most_syllables.as_deref()));
        let _ = writeln!(out, "Least syllables:     {}", or_dash(self.least_syllables.as_deref()));

        if !self.milestones.is_empty() {
            let _ = writeln!(out, "\nMilestones:");
            for m in &self.milestones {
                let _ = writeln!(out, "  #{:<5} {} ({})", m.milestone, m.word, m.date);
            }
        }

        let _ = writeln!(out, "\nEndings:");
        for (suffix, count) in &self.endings {
            let _ = writeln!(out, "  -{suffix:<6} {count}");
        }

        let _ = writeln!(out, "\nStats pages:");
        for page in &self.pages {
            let _ = writeln!(out, "  {:<4} {} ({})", page.count, page.title, page.path);
        }

        out.trim_end().to_string()
    }
}

impl StatsCommand {
    pub async fn execute(&self, ctx: &CommandContext) -> Result<(), CliError> {
        let config = ctx.config.load()?;
        let words_dir = config.words_dir();
        let cache = WordCache::new(WordFileLoader::new(&words_dir));
        let words = WordCollection::new(cache.words().to_vec());
        tracing::debug!(dir = %words_dir.display(), count = words.len(), "loaded words");

        print_output(ctx, &StatsReport::build(&words, ctx.today))
    }
}
