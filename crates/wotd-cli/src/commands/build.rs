//! Build command implementation.

use std::path::PathBuf;

use clap::Parser;
use serde::Serialize;
use wotd_site::{GenerateReport, SiteGenerator, WordCache, WordCollection, WordFileLoader};

use crate::cli::CommandContext;
use crate::error::CliError;
use crate::output::{print_output, FormattedOutput};

/// Generate the static site outputs
#[derive(Debug, Parser)]
pub struct BuildCommand {
    /// Directory the generated files are written to
    #[arg(short, long, default_value = "dist")]
    pub output: PathBuf,

    /// List stats pages that have no matching words
    #[arg(long)]
    pub show_empty_stats: bool,
}

#[derive(Debug, Serialize)]
#[serde(transparent)]
pub struct BuildOutput(pub GenerateReport);

impl FormattedOutput for BuildOutput {
    fn format_text(&self) -> String {
        let report = &self.0;
        let mut lines = vec![format!(
            "Generated {} files for {} words ({} pages) in {} ms",
            report.files.len(),
            report.word_count,
            report.page_count,
            report.duration_ms
        )];
        lines.push(format!("  output:     {}", report.output_dir.display()));
        lines.push(format!("  words_hash: {}", report.words_hash));
        lines.extend(
            report
                .files
                .iter()
                .map(|file| format!("  - {}", file.display())),
        );
        lines.join("\n")
    }
}

impl BuildCommand {
    pub async fn execute(&self, ctx: &CommandContext) -> Result<(), CliError> {
        let mut config = ctx.config.load_strict()?;
        if self.show_empty_stats {
            config.show_empty_stats = true;
        }

        let words_dir = config.words_dir();
        let cache = WordCache::new(WordFileLoader::new(&words_dir));
        let words = WordCollection::new(cache.words().to_vec());
        if words.is_empty() {
            tracing::warn!(dir = %words_dir.display(), "no words found, generating an empty site");
        }

        let report = SiteGenerator::new(config, &self.output).generate(&words, ctx.today)?;
        print_output(ctx, &BuildOutput(report))
    }
}
