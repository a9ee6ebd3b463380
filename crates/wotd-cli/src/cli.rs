//! CLI argument definitions using clap derive macros.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{ArgAction, Parser, Subcommand, ValueHint};
use tracing::Instrument;
use wotd_common_config::{ConfigLoader, Environment};
use wotd_common_log::spans::command_span;
use wotd_common_log::LogLevel;

use crate::commands::{
    AddWordCommand, BuildCommand, MigratePreserveCaseCommand, PingSearchEnginesCommand,
    StatsCommand,
};
use crate::error::CliError;

/// Word of the Day site tools
///
/// Build the static site outputs, inspect word statistics and manage the
/// word collection.
#[derive(Debug, Parser)]
#[command(
    name = "wotd",
    author,
    version,
    about,
    long_about = None,
    propagate_version = true,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Increase verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Extra dotenv file layered over the environment
    #[arg(long, global = true, env = "WOTD_ENV_FILE", value_hint = ValueHint::FilePath)]
    pub env_file: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, default_value = "text", value_enum)]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format selection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Available subcommands
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate feeds, sitemaps, page metadata and health file
    Build(BuildCommand),

    /// Print statistics for the word collection
    Stats(StatsCommand),

    /// Add a word with dictionary lookup
    AddWord(AddWordCommand),

    /// Set the preserveCase field on every word file
    MigratePreserveCase(MigratePreserveCaseCommand),

    /// Notify search engines about sitemap updates
    PingSearchEngines(PingSearchEnginesCommand),
}

/// Context passed to all commands
#[derive(Debug, Clone)]
pub struct CommandContext {
    pub config: ConfigLoader,
    pub format: OutputFormat,
    pub verbose: u8,
    /// Local calendar date the command runs on.
    pub today: NaiveDate,
}

impl Cli {
    /// Level requested on the command line, if any.
    pub fn log_level(&self) -> Option<LogLevel> {
        if self.quiet {
            Some(LogLevel::Error)
        } else if self.verbose > 0 {
            Some(LogLevel::from_verbosity(self.verbose))
        } else {
            None
        }
    }

    /// Load `.env` files and snapshot the environment.
    pub fn context(&self) -> Result<CommandContext, CliError> {
        let env = Environment::init()?;
        for path in env.loaded_files() {
            tracing::debug!(path = %path.display(), "loaded env file");
        }

        let mut config = ConfigLoader::from_env();
        if let Some(path) = &self.env_file {
            config = config.with_dotenv_file(path)?;
        }

        Ok(CommandContext {
            config,
            format: self.format,
            verbose: self.verbose,
            today: chrono::Local::now().date_naive(),
        })
    }

    /// Execute the selected command
    pub async fn execute(self) -> Result<(), CliError> {
        let ctx = self.context()?;
        let span = command_span(self.command.name());

        async move {
            match self.command {
                Command::Build(cmd) => cmd.execute(&ctx).await,
                Command::Stats(cmd) => cmd.execute(&ctx).await,
                Command::AddWord(cmd) => cmd.execute(&ctx).await,
                Command::MigratePreserveCase(cmd) => cmd.execute(&ctx).await,
                Command::PingSearchEngines(cmd) => cmd.execute(&ctx).await,
            }
        }
        .instrument(span)
        .await
    }
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Command::Build(_) => "build",
            Command::Stats(_) => "stats",
            Command::AddWord(_) => "add-word",
            Command::MigratePreserveCase(_) => "migrate-preserve-case",
            Command::PingSearchEngines(_) => "ping-search-engines",
        }
    }
}
