//! Readability command — sentence and paragraph length checks only.

use std::path::PathBuf;

use clap::Args;
use tracing::instrument;

use matn_seo_core::HtmlDocument;
use matn_seo_core::checks::readability::run_readability_checks;

use super::{print_checks, read_input_file};

/// Arguments for the `readability` subcommand.
#[derive(Args, Debug)]
pub struct ReadabilityArgs {
    /// HTML file to check.
    pub file: PathBuf,
}

/// Check sentence and paragraph length of a file.
#[instrument(name = "cmd_readability", skip_all, fields(file = %args.file.display()))]
pub fn cmd_readability(args: ReadabilityArgs, global_json: bool) -> anyhow::Result<()> {
    let markup = read_input_file(&args.file)?;
    let checks = run_readability_checks(&HtmlDocument::parse(&markup));

    if global_json {
        println!("{}", serde_json::to_string_pretty(&checks)?);
    } else {
        print_checks("Readability", &checks);
    }
    Ok(())
}
