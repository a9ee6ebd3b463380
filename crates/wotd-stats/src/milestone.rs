//! Chronological milestone words.

use serde::Serialize;
use wotd_common_core::WordEntry;

const EARLY_MILESTONES: [usize; 4] = [1, 25, 50, 75];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Milestone<'a> {
    /// 1-based chronological rank.
    pub milestone: usize,
    pub word: &'a WordEntry,
}

/// Entries at ranks 1, 25, 50, 75 and every multiple of 100, oldest first.
///
/// Ranks are counted in ascending date order regardless of input order.
pub fn chronological_milestones(words: &[WordEntry]) -> Vec<Milestone<'_>> {
    let mut ascending: Vec<&WordEntry> = words.iter().collect();
    ascending.sort_by(|a, b| a.date.cmp(&b.date));

    let hundreds = (1..=ascending.len() / 100).map(|n| n * 100);

    EARLY_MILESTONES
        .into_iter()
        .chain(hundreds)
        .filter(|rank| *rank <= ascending.len())
        .map(|rank| Milestone {
            milestone: rank,
            word: ascending[rank - 1],
        })
        .collect()
}
