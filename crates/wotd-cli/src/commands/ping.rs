//! Ping-search-engines command implementation.

use clap::Parser;
use serde::Serialize;
use wotd_common_config::defaults;
use wotd_common_http::HttpClient;

use crate::cli::CommandContext;
use crate::error::CliError;
use crate::output::{print_output, FormattedOutput};
use crate::ping::{PingResult, PingService, SearchEngine};

/// Notify search engines about sitemap updates
#[derive(Debug, Parser)]
pub struct PingSearchEnginesCommand {
    /// Deployed site URL
    #[arg(long, value_hint = clap::ValueHint::Url)]
    pub site_url: String,

    /// Hash of the words just deployed; pinging is skipped when it matches the live site
    #[arg(long)]
    pub deployed_hash: Option<String>,

    /// List the engines without contacting them
    #[arg(long)]
    pub dry_run: bool,

    /// Ping even when the live hash matches
    #[arg(long)]
    pub force: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "kebab-case")]
pub enum PingOutcome {
    /// Live content already matches the deployed hash.
    Unchanged { hash: String },
    DryRun {
        sitemap: String,
        engines: Vec<SearchEngine>,
    },
    Pinged {
        sitemap: String,
        results: Vec<PingResult>,
    },
}

impl FormattedOutput for PingOutcome {
    fn format_text(&self) -> String {
        match self {
            Self::Unchanged { .. } => {
                "No new content detected (hash matches deployed). Skipping ping.".to_string()
            }
            Self::DryRun { sitemap, engines } => {
                let mut lines = vec![format!("Dry run: would ping {} engine(s) for {sitemap}", engines.len())];
                lines.extend(engines.iter().map(|e| format!("  - {}: {}", e.name, e.url)));
                lines.join("\n")
            }
            Self::Pinged { sitemap, results } => {
                let ok = results.iter().filter(|r| r.is_success()).count();
                let mut lines = vec![format!("Pinged {ok}/{} engine(s) for {sitemap}", results.len())];
                lines.extend(results.iter().map(|r| match (&r.error, r.status) {
                    (Some(error), _) => format!("  x {}: {error}", r.engine),
                    (None, Some(status)) => format!("  - {}: HTTP {status}", r.engine),
                    (None, None) => format!("  - {}", r.engine),
                }));
                lines.join("\n")
            }
        }
    }
}

impl PingSearchEnginesCommand {
    pub async fn run(&self, service: &PingService, site_title: &str) -> Result<PingOutcome, CliError> {
        if let (Some(expected), false) = (&self.deployed_hash, self.force) {
            if let Some(live) = service.fetch_deployed_hash().await {
                if &live == expected {
                    tracing::info!(hash = %live, "deployed hash unchanged");
                    return Ok(PingOutcome::Unchanged { hash: live });
                }
                tracing::info!(live = %live, deployed = %expected, "deployed hash changed");
            }
        }

        let sitemap = service.sitemap_url();
        let engine = SearchEngine::ping_o_matic(site_title, service.site_url(), &sitemap)
            .map_err(|e| CliError::validation_field("site-url", format!("Invalid ping URL: {e}")))?;
        let engines = vec![engine];

        if self.dry_run {
            return Ok(PingOutcome::DryRun { sitemap, engines });
        }

        let results = service.ping_all(&engines).await;
        Ok(PingOutcome::Pinged { sitemap, results })
    }

    pub async fn execute(&self, ctx: &CommandContext) -> Result<(), CliError> {
        let site_title = match ctx.config.load() {
            Ok(config) => config.site_title,
            Err(e) => {
                tracing::debug!(error = %e, "using default site title");
                defaults::SITE_TITLE.to_string()
            }
        };

        let service = PingService::new(HttpClient::new()?, &self.site_url);
        let outcome = self.run(&service, &site_title).await?;
        print_output(ctx, &outcome)
    }
}
