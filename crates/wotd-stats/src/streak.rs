//! Consecutive-day streaks.

use chrono::NaiveDate;
use serde::Serialize;
use wotd_common_core::date::{format_date_key, parse_date_key};
use wotd_common_core::WordEntry;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StreakStats {
    pub current_streak: usize,
    pub longest_streak: usize,
    pub is_active: bool,
}

/// Whether two `YYYYMMDD` keys are exactly one calendar day apart, in either order.
///
/// Invalid keys are logged and never consecutive.
pub fn are_consecutive_days(older: &str, newer: &str) -> bool {
    match (parse_date_key(older), parse_date_key(newer)) {
        (Some(a), Some(b)) => (b - a).num_days().abs() == 1,
        _ => {
            tracing::warn!(older, newer, "invalid date in consecutive day check");
            false
        }
    }
}

fn sorted_descending(words: &[WordEntry]) -> Vec<&WordEntry> {
    let mut sorted: Vec<&WordEntry> = words.iter().collect();
    sorted.sort_by(|a, b| b.date.cmp(&a.date));
    sorted
}

/// Current and longest streaks relative to `today`.
///
/// The collection is active when its newest entry is dated today or yesterday.
pub fn streak_stats(words: &[WordEntry], today: NaiveDate) -> StreakStats {
    let sorted = sorted_descending(words);
    let Some(most_recent) = sorted.first() else {
        return StreakStats::default();
    };

    let today_key = format_date_key(today);
    let yesterday_key = today.pred_opt().map(format_date_key);
    let is_active =
        most_recent.date == today_key || Some(&most_recent.date) == yesterday_key.as_ref();

    let current_streak = if is_active {
        1 + sorted
            .windows(2)
            .take_while(|pair| are_consecutive_days(&pair[1].date, &pair[0].date))
            .count()
    } else {
        0
    };

    let mut longest = 0;
    let mut run = 1;
    for pair in sorted.windows(2) {
        if are_consecutive_days(&pair[1].date, &pair[0].date) {
            run += 1;
        } else {
            longest = longest.max(run);
            run = 1;
        }
    }
    let longest_streak = longest.max(run);

    StreakStats {
        current_streak,
        longest_streak,
        is_active,
    }
}

/// Entries forming the longest streak, oldest first.
///
/// When several runs share the maximum length, the most recent one is returned.
pub fn longest_streak_words(words: &[WordEntry]) -> Vec<&WordEntry> {
    let sorted = sorted_descending(words);
    if sorted.len() <= 1 {
        return sorted;
    }

    let mut longest: &[&WordEntry] = &sorted[..1];
    let mut start = 0;
    for i in 1..sorted.len() {
        if !are_consecutive_days(&sorted[i].date, &sorted[i - 1].date) {
            start = i;
        }
        if i + 1 - start > longest.len() {
            longest = &sorted[start..=i];
        }
    }

    longest.iter().rev().copied().collect()
}
