//! One-off migration setting `preserveCase` on stored word files.

use clap::Parser;
use serde::Serialize;
use wotd_site::WordFileStore;

use crate::cli::CommandContext;
use crate::error::CliError;
use crate::output::{print_output, FormattedOutput};

/// Set the preserveCase field on every word file
#[derive(Debug, Parser)]
pub struct MigratePreserveCaseCommand {}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MigrationSummary {
    pub updated: usize,
    pub skipped: usize,
    pub failed: usize,
    pub total: usize,
}

impl FormattedOutput for MigrationSummary {
    fn format_text(&self) -> String {
        format!(
            "Migration complete: {} updated, {} skipped, {} failed ({} files)",
            self.updated, self.skipped, self.failed, self.total
        )
    }
}

/// Rewrite every word file whose `preserveCase` is missing or disagrees with
/// the word's capitalization. Per-file failures are counted, not returned.
pub fn migrate_preserve_case(store: &WordFileStore) -> MigrationSummary {
    let files = store.loader().files();
    let mut summary = MigrationSummary {
        total: files.len(),
        ..MigrationSummary::default()
    };

    for path in files {
        let mut entry = match store.read_path(&path) {
            Ok(entry) => entry,
            Err(e) => {
                tracing::error!(path = %path.display(), error = %e, "failed to read word file");
                summary.failed += 1;
                continue;
            }
        };

        let expected = entry.word != entry.word.to_lowercase();
        if entry.preserve_case == Some(expected) {
            summary.skipped += 1;
            continue;
        }

        entry.preserve_case = Some(expected);
        match store.write_path(&path, &entry) {
            Ok(()) => {
                tracing::info!(word = %entry.word, preserve_case = expected, "updated word file");
                summary.updated += 1;
            }
            Err(e) => {
                tracing::error!(path = %path.display(), error = %e, "failed to write word file");
                summary.failed += 1;
            }
        }
    }

    summary
}

impl MigratePreserveCaseCommand {
    pub async fn execute(&self, ctx: &CommandContext) -> Result<(), CliError> {
        let config = ctx.config.load()?;
        let store = WordFileStore::new(config.words_dir());
        let summary = migrate_preserve_case(&store);
        print_output(ctx, &summary)
    }
}
