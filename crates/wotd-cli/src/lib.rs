//! Command-line tools for the word-of-the-day site.
//!
//! The `wotd` binary builds the static outputs, prints collection statistics
//! and maintains the word files.

pub mod cli;
pub mod commands;
pub mod dictionary;
pub mod error;
pub mod output;
pub mod ping;

pub use cli::{Cli, CommandContext, OutputFormat};
pub use error::CliError;
