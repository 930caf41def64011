//! Suggest command — mine content for candidate keywords.

use std::path::PathBuf;

use clap::Args;
use tracing::{debug, instrument};

use matn_seo_core::{AnalysisInput, Config, HtmlDocument, analyze_document};

use super::{print_checks, read_input_file};

/// Arguments for the `suggest` subcommand.
#[derive(Args, Debug)]
pub struct SuggestArgs {
    /// HTML file to mine for keywords.
    pub file: PathBuf,

    /// How many primary-keyword candidates to show.
    #[arg(long, value_name = "COUNT")]
    pub main: Option<usize>,

    /// How many secondary-keyword candidates to show.
    #[arg(long, value_name = "COUNT")]
    pub secondary: Option<usize>,
}

/// Suggest keywords for a file that has none declared yet.
#[instrument(name = "cmd_suggest", skip_all, fields(file = %args.file.display()))]
pub fn cmd_suggest(args: SuggestArgs, global_json: bool, config: &Config) -> anyhow::Result<()> {
    debug!(main = ?args.main, secondary = ?args.secondary, "executing suggest command");

    let mut limits = config.limits.clone();
    if let Some(main) = args.main {
        limits.main_suggestions = main;
    }
    if let Some(secondary) = args.secondary {
        limits.secondary_suggestions = secondary;
    }

    let markup = read_input_file(&args.file)?;
    let input = AnalysisInput::new(markup, "", Vec::new());
    let document = HtmlDocument::parse(&input.markup);
    let report = analyze_document(&input, &document, &limits)?;

    if global_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{} words\n", report.total_words);
        print_checks("Keyword suggestions", &report.suggestion_checks);
    }
    Ok(())
}
