//! matn-seo CLI
#![deny(unsafe_code)]

use anyhow::Context;
use clap::Parser;
use matn_seo::{Cli, Commands, commands};
use matn_seo_core::Config;
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    cli.color.apply();

    let config =
        Config::load(cli.config.as_deref()).context("failed to load configuration")?;

    init_logging(cli.quiet, cli.verbose, config.log_level.as_deref());
    debug!(
        verbose = cli.verbose,
        quiet = cli.quiet,
        json = cli.json,
        config = ?cli.config,
        "CLI initialized"
    );

    let result = match cli.command {
        Commands::Analyze(args) => {
            commands::analyze::cmd_analyze(args, cli.json, &config)
        }
        Commands::Suggest(args) => commands::suggest::cmd_suggest(args, cli.json, &config),
        Commands::Readability(args) => commands::readability::cmd_readability(args, cli.json),
    };
    if let Err(ref err) = result {
        tracing::error!(error = %err, "fatal error");
    }
    result
}

/// Initialize stderr logging. Precedence: `RUST_LOG`, then CLI
/// verbosity flags, then the configured log level.
fn init_logging(quiet: bool, verbose: u8, config_level: Option<&str>) {
    let default = if quiet {
        "error".to_owned()
    } else {
        match verbose {
            0 => config_level.unwrap_or("warn").to_owned(),
            1 => "info".to_owned(),
            2 => "debug".to_owned(),
            _ => "trace".to_owned(),
        }
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
