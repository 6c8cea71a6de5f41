//! Main entry point for mf2validate.

use anyhow::{Context, Result};
use clap::Parser;
use mf2_common::logging::init_logging;
use mf2_config::ConfigLoader;
use mf2_validate::{exit, run, Args, ValidateError};
use std::process::ExitCode;
use tracing::{debug, error, info};

fn main() -> ExitCode {
    let args = Args::parse();
    match try_main(&args) {
        Ok(code) => ExitCode::from(code),
        Err(err) => {
            let cause = err.downcast_ref::<ValidateError>();
            let code = cause.map_or(exit::CONFIG_ERROR, ValidateError::exit_code);
            // Message errors are part of the report already.
            let reported = matches!(
                cause,
                Some(ValidateError::Model(_) | ValidateError::Check { .. })
            );
            if !reported {
                eprintln!("mf2validate: {err:#}");
            }
            error!(exit_code = code, "{err:#}");
            ExitCode::from(code)
        }
    }
}

fn try_main(args: &Args) -> Result<u8> {
    let loader = ConfigLoader::discover(args.config.as_deref(), |key| std::env::var(key).ok());
    let config = loader
        .load()
        .map_err(ValidateError::from)
        .context("failed to load configuration")?;
    let settings = args.resolve(&config)?;

    init_logging(&settings.logging)
        .map_err(ValidateError::Logging)
        .context("failed to initialise logging")?;
    // No subscriber before this point.
    info!(path = %loader.path().display(), "configuration resolved");
    debug!(?settings, "starting");

    let rules = config.plural_rules().map_err(ValidateError::from)?;
    let stdout = std::io::stdout();
    let outcome = run(&settings.options, &rules, stdout.lock())?;
    Ok(outcome.exit_code())
}
