//! Command implementations.

use std::path::Path;

use anyhow::Context;
use owo_colors::OwoColorize;

use matn_seo_core::{CheckResult, CheckStatus};

pub mod analyze;
pub mod readability;
pub mod suggest;

/// Read the HTML input file for a command.
pub fn read_input_file(path: &Path) -> anyhow::Result<String> {
    std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))
}

/// Print one check battery in human-readable form.
pub fn print_checks(heading: &str, checks: &[CheckResult]) {
    if checks.is_empty() {
        return;
    }
    println!("{}", heading.bold());
    for check in checks {
        let icon = match check.status {
            CheckStatus::Success => "✓".green().to_string(),
            CheckStatus::Warning => "!".yellow().to_string(),
            CheckStatus::Error => "✕".red().to_string(),
        };
        println!("  {icon} {}: {}", check.title.bold(), check.description);
        if let Some(detail) = &check.detail {
            println!("      {}", detail.dimmed());
        }
        for suggestion in &check.suggestions {
            println!(
                "      {} (frequency {}, quality {:.1}, relevance {:.1})",
                suggestion.keyword,
                suggestion.frequency,
                suggestion.quality,
                suggestion.relevance,
            );
        }
        for excerpt in &check.flagged {
            println!("      {}", truncate_excerpt(excerpt).dimmed());
        }
    }
    println!();
}

/// Keep flagged excerpts to one terminal-friendly line.
fn truncate_excerpt(excerpt: &str) -> String {
    const MAX_CHARS: usize = 80;
    let mut out: String = excerpt.chars().take(MAX_CHARS).collect();
    if excerpt.chars().count() > MAX_CHARS {
        out.push('…');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_excerpts_are_untouched() {
        assert_eq!(truncate_excerpt("short"), "short");
    }

    #[test]
    fn long_excerpts_are_truncated_on_char_boundaries() {
        let long = "م".repeat(100);
        let truncated = truncate_excerpt(&long);
        assert_eq!(truncated.chars().count(), 81);
        assert!(truncated.ends_with('…'));
    }
}
