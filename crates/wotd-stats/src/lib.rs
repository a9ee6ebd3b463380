//! Statistics over a collection of word-of-the-day entries.
//!
//! Everything here is pure: functions take a slice of [`WordEntry`] (and,
//! where dates matter, an explicit `today`) and return derived values.
//!
//! [`WordEntry`]: wotd_common_core::WordEntry

pub mod aggregate;
pub mod definitions;
pub mod milestone;
pub mod streak;
pub mod text;

pub use aggregate::*;
pub use definitions::{StatsSlug, Suffix};
pub use milestone::{chronological_milestones, Milestone};
pub use streak::{are_consecutive_days, longest_streak_words, streak_stats, StreakStats};
