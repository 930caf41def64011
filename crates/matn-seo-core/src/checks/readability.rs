//! Sentence- and paragraph-length readability checks.
//!
//! Both checks are advisory: readability guidance never moves the
//! overall score, it only flags the offending passages.

use crate::document::StructuredDocument;
use crate::sentences;
use crate::text;

use super::{CheckResult, CheckStatus};

/// Sentences up to this many words are comfortable on a first read.
pub const SHORT_SENTENCE_WORDS: usize = 15;
/// Sentences beyond this many words are flagged as long.
pub const LONG_SENTENCE_WORDS: usize = 20;
/// Paragraphs up to this many words read as a single unit.
pub const SHORT_PARAGRAPH_WORDS: usize = 100;
/// Paragraphs beyond this many words are flagged overlong.
pub const LONG_PARAGRAPH_WORDS: usize = 150;

/// Share of long items that still passes outright.
const SUCCESS_SHARE: f64 = 25.0;
/// Share of long items that warns instead of failing.
const WARNING_SHARE: f64 = 35.0;

/// Run sentence- and paragraph-length checks against a document.
#[tracing::instrument(skip_all)]
pub fn run_readability_checks(document: &impl StructuredDocument) -> Vec<CheckResult> {
    vec![
        check_sentence_length(&document.plain_text()),
        check_paragraph_length(&document.paragraphs()),
    ]
}

fn check_sentence_length(plain_text: &str) -> CheckResult {
    let title = "Sentence length";
    let sentences = sentences::split_sentences(plain_text);
    if sentences.is_empty() {
        return CheckResult::new(
            CheckStatus::Warning,
            title,
            "Not enough text to judge sentence length.",
        )
        .advisory();
    }

    let long: Vec<String> = sentences
        .iter()
        .filter(|s| text::count_words(s) > LONG_SENTENCE_WORDS)
        .cloned()
        .collect();
    let share = long.len() as f64 / sentences.len() as f64 * 100.0;
    let detail = format!(
        "{} of {} sentences exceed {LONG_SENTENCE_WORDS} words ({share:.0}%)",
        long.len(),
        sentences.len(),
    );
    banded_result(title, share, &detail, "sentences").with_flagged(long)
}

fn check_paragraph_length(paragraphs: &[String]) -> CheckResult {
    let title = "Paragraph length";
    let measured: Vec<(&String, usize)> = paragraphs
        .iter()
        .map(|p| (p, text::count_words(p)))
        .filter(|(_, words)| *words > 0)
        .collect();
    if measured.is_empty() {
        return CheckResult::new(
            CheckStatus::Warning,
            title,
            "Not enough text to judge paragraph length.",
        )
        .advisory();
    }

    let long: Vec<String> = measured
        .iter()
        .filter(|(_, words)| *words > LONG_PARAGRAPH_WORDS)
        .map(|(p, _)| (*p).clone())
        .collect();
    let share = long.len() as f64 / measured.len() as f64 * 100.0;
    let detail = format!(
        "{} of {} paragraphs exceed {LONG_PARAGRAPH_WORDS} words ({share:.0}%)",
        long.len(),
        measured.len(),
    );
    banded_result(title, share, &detail, "paragraphs").with_flagged(long)
}

fn banded_result(title: &str, share: f64, detail: &str, unit: &str) -> CheckResult {
    let result = if share <= SUCCESS_SHARE {
        CheckResult::new(
            CheckStatus::Success,
            title,
            format!("Most {unit} are a comfortable length."),
        )
    } else if share <= WARNING_SHARE {
        CheckResult::new(
            CheckStatus::Warning,
            title,
            format!("A noticeable share of {unit} run long; consider splitting them."),
        )
    } else {
        CheckResult::new(
            CheckStatus::Error,
            title,
            format!("Too many {unit} run long; split them for easier reading."),
        )
    };
    result.with_detail(detail.to_owned()).advisory()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::HtmlDocument;

    #[test]
    fn short_sentences_pass() {
        let doc = HtmlDocument::parse(
            "<p>The cat sat on the mat. The dog slept by the door. Both were happy.</p>",
        );
        let checks = run_readability_checks(&doc);
        assert_eq!(checks[0].status, CheckStatus::Success);
        assert!(checks[0].flagged.is_empty());
    }

    #[test]
    fn all_long_sentences_fail_and_are_flagged() {
        let long = "this sentence keeps going and going with far too many words \
                    for anyone to follow comfortably on a first reading today";
        let doc = HtmlDocument::parse(&format!("<p>{long}. {long}.</p>"));
        let checks = run_readability_checks(&doc);
        assert_eq!(checks[0].status, CheckStatus::Error);
        assert_eq!(checks[0].flagged.len(), 2);
    }

    #[test]
    fn empty_content_warns_instead_of_failing() {
        let doc = HtmlDocument::parse("");
        let checks = run_readability_checks(&doc);
        assert_eq!(checks.len(), 2);
        assert!(checks.iter().all(|c| c.status == CheckStatus::Warning));
    }

    #[test]
    fn overlong_paragraph_is_flagged() {
        let paragraph = "word ".repeat(200);
        let doc = HtmlDocument::parse(&format!("<p>{paragraph}</p><p>short one here.</p>"));
        let checks = run_readability_checks(&doc);
        let para_check = &checks[1];
        assert_eq!(para_check.title, "Paragraph length");
        assert_eq!(para_check.status, CheckStatus::Error);
        assert_eq!(para_check.flagged.len(), 1);
    }

    #[test]
    fn readability_checks_never_affect_the_score() {
        let doc = HtmlDocument::parse("<p>Plain text here with a few words.</p>");
        assert!(run_readability_checks(&doc).iter().all(|c| !c.score_affecting));
    }
}
