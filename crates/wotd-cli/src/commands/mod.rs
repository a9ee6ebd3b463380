//! Command implementations.

mod add_word;
mod build;
mod migrate;
mod ping;
mod stats;

pub use add_word::{add_word, AddWordCommand, AddWordOutcome, AddWordRequest};
pub use build::{BuildCommand, BuildOutput};
pub use migrate::{migrate_preserve_case, MigratePreserveCaseCommand, MigrationSummary};
pub use ping::{PingOutcome, PingSearchEnginesCommand};
pub use stats::{StatsCommand, StatsReport};
