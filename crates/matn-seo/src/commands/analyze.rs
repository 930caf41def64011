//! Analyze command — full keyword and readability battery with score gating.

use std::path::PathBuf;

use anyhow::bail;
use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use matn_seo_core::{AnalysisInput, Config, analyze_document, HtmlDocument};

use super::{print_checks, read_input_file};

/// Arguments for the `analyze` subcommand.
#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// HTML file to analyze.
    pub file: PathBuf,

    /// Primary keyword the content targets.
    #[arg(short, long)]
    pub keyword: String,

    /// Secondary keywords (repeatable).
    #[arg(short, long = "secondary", value_name = "KEYWORD")]
    pub secondary: Vec<String>,

    /// Fail when the score lands below this value.
    #[arg(long, value_name = "SCORE")]
    pub min_score: Option<u32>,
}

/// Analyze a file against its declared keywords.
#[instrument(name = "cmd_analyze", skip_all, fields(file = %args.file.display()))]
pub fn cmd_analyze(args: AnalyzeArgs, global_json: bool, config: &Config) -> anyhow::Result<()> {
    debug!(keyword = %args.keyword, secondary = ?args.secondary, "executing analyze command");

    let markup = read_input_file(&args.file)?;
    let input = AnalysisInput::new(markup, args.keyword, args.secondary);
    let document = HtmlDocument::parse(&input.markup);
    let report = analyze_document(&input, &document, &config.limits)?;

    if global_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!(
            "{} words, keyword used {} times ({:.2}% density)\n",
            report.total_words, report.keyword_count, report.keyword_density,
        );
        print_checks("SEO checks", &report.seo_checks);
        print_checks("Readability", &report.readability_checks);
        println!("Score: {}", format_score(report.score));
    }

    let min_score = args.min_score.or(config.min_score);
    if let Some(min) = min_score
        && u32::from(report.score) < min
    {
        bail!(
            "{} scores {} (minimum: {min}). Address the failing checks above.",
            args.file.display(),
            report.score,
        );
    }
    Ok(())
}

fn format_score(score: u8) -> String {
    match score {
        80.. => score.green().to_string(),
        50..80 => score.yellow().to_string(),
        _ => score.red().to_string(),
    }
}
