//! Storefront command line shop

use std::{io, process::ExitCode};

use tracing::error;

use crate::config::CliConfig;

mod commands;
mod config;
mod errors;
mod navigator;
mod observability;

/// Storefront CLI entry point
fn main() -> ExitCode {
    let config = match CliConfig::load() {
        Ok(config) => config,
        Err(error) => error.exit(),
    };

    if let Err(error) = observability::init_subscriber(&config.logging) {
        #[expect(
            clippy::print_stderr,
            reason = "logging failed to initialise, must use eprintln"
        )]
        {
            eprintln!("{error}");
        }

        return ExitCode::FAILURE;
    }

    match commands::run(config, &mut io::stdout().lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            error!("{error}");

            ExitCode::FAILURE
        }
    }
}
