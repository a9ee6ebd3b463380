//! Main entry point for the `wotd` binary.

use std::process::ExitCode;

use clap::Parser;
use tracing::error;
use wotd_cli::Cli;
use wotd_common_log::LogConfig;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let mut log_config = LogConfig::from_env();
    if let Some(level) = cli.log_level() {
        log_config = log_config.with_level(level);
    }
    if let Err(e) = wotd_common_log::init(log_config) {
        eprintln!("warning: failed to initialize logging: {e}");
    }

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .expect("Failed to create Tokio runtime");

    match runtime.block_on(cli.execute()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(code = e.code(), "{e}");
            eprintln!("error[{}]: {e}", e.code());
            if let Some(hint) = e.hint() {
                eprintln!("  hint: {hint}");
            }
            e.exit_code()
        }
    }
}
