//! Library interface for the `matn-seo` CLI.
//!
//! This crate exposes the CLI's argument parser and command structure as
//! a library, primarily for testing. The actual entry point is in
//! `main.rs`.

pub mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Color output preference.
#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
pub enum ColorChoice {
    /// Detect terminal capabilities automatically.
    #[default]
    Auto,
    /// Always emit colors.
    Always,
    /// Never emit colors.
    Never,
}

impl ColorChoice {
    /// Configure global color output based on this choice.
    pub fn apply(self) {
        match self {
            Self::Auto => {} // owo-colors auto-detects by default
            Self::Always => owo_colors::set_override(true),
            Self::Never => owo_colors::set_override(false),
        }
    }
}

const ENV_HELP: &str = "\
ENVIRONMENT VARIABLES:
    RUST_LOG                 Log filter (e.g., debug, matn_seo_core=trace)
    MATN_SEO_MIN_SCORE       Fail when the score lands below this value
    MATN_SEO_LIMITS__*       Override analysis limits, e.g. MATN_SEO_LIMITS__MAX_KEYWORD_DENSITY
";

/// Command-line interface definition for matn-seo.
#[derive(Parser)]
#[command(name = "matn-seo")]
#[command(about = "SEO and readability analysis for Persian and Latin-script content", long_about = None)]
#[command(version, arg_required_else_help = true)]
#[command(after_long_help = ENV_HELP)]
pub struct Cli {
    /// The subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,

    /// Path to configuration file
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Only print errors (suppresses warnings/info)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// More detail (repeatable; e.g. -vv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Colorize output
    #[arg(long, global = true, value_enum, default_value_t)]
    pub color: ColorChoice,

    /// Output as JSON (for scripting)
    #[arg(long, global = true)]
    pub json: bool,
}

/// Available subcommands for the CLI.
#[derive(Subcommand)]
pub enum Commands {
    /// Run the full keyword and readability analysis
    Analyze(commands::analyze::AnalyzeArgs),

    /// Suggest primary and secondary keywords for content
    Suggest(commands::suggest::SuggestArgs),

    /// Check sentence and paragraph length only
    Readability(commands::readability::ReadabilityArgs),
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }
}
