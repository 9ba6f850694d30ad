//! config-manifest: flatten a YAML configuration into a JSON manifest.
//!
//! Entry point and error handling boundary. Library errors are typed;
//! this layer adds `anyhow` context and turns failures into exit codes.

mod cli;

use config_manifest::config::Settings;
use config_manifest::constants::EXIT_FAILURE;
use config_manifest::env::Env;
use config_manifest::generator::{self, GenerateError};
use config_manifest::logging;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use cli::args::Cli;

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.quiet);

    match run(&cli) {
        Ok(out) => {
            println!("{}", out.display());
            ExitCode::SUCCESS
        }
        Err(err) => {
            use colored::Colorize;
            eprintln!("{} {err:#}", "Error:".red().bold());
            let code = err
                .downcast_ref::<GenerateError>()
                .map_or(EXIT_FAILURE, GenerateError::exit_code);
            ExitCode::from(code)
        }
    }
}

fn run(cli: &Cli) -> Result<PathBuf> {
    let mut settings = Settings::load(cli.settings.as_deref(), &Env::real())
        .context("failed to load settings")?;
    cli.apply_overrides(&mut settings);
    settings.validate().context("invalid settings")?;

    let out = generator::generate(&cli.config, &cli.out, &settings)?;
    Ok(out)
}
