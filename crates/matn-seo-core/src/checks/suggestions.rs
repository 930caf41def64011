//! Keyword suggestion checks for content that lacks declared keywords.

use crate::document::StructuredDocument;
use crate::keywords::{self, ScoringContext};

use super::{CheckResult, CheckStatus};

/// Build main- and secondary-keyword suggestion checks.
///
/// Both results are advisory: suggestions guide the author toward a
/// keyword but never grade the content.
#[tracing::instrument(skip_all, fields(main_count, secondary_count))]
pub fn run_suggestion_checks(
    document: &impl StructuredDocument,
    main_count: usize,
    secondary_count: usize,
) -> Vec<CheckResult> {
    let ctx = ScoringContext::from_document(document);
    let main = keywords::detect_main_keyword(&ctx, main_count);
    let secondary = keywords::detect_secondary_keywords(&ctx, secondary_count);
    vec![
        main_suggestion_check(main),
        secondary_suggestion_check(secondary),
    ]
}

fn main_suggestion_check(suggestions: Vec<crate::keywords::KeywordSuggestion>) -> CheckResult {
    let title = "Suggested primary keyword";
    if suggestions.is_empty() {
        CheckResult::new(
            CheckStatus::Warning,
            title,
            "No recurring phrase stands out yet; write more focused content first.",
        )
        .advisory()
    } else {
        CheckResult::new(
            CheckStatus::Success,
            title,
            "These phrases recur prominently and could serve as the primary keyword.",
        )
        .with_suggestions(suggestions)
        .advisory()
    }
}

fn secondary_suggestion_check(suggestions: Vec<crate::keywords::KeywordSuggestion>) -> CheckResult {
    let title = "Suggested secondary keywords";
    if suggestions.is_empty() {
        CheckResult::new(
            CheckStatus::Warning,
            title,
            "No supporting phrases found; cover related subtopics in more depth.",
        )
        .advisory()
    } else {
        CheckResult::new(
            CheckStatus::Success,
            title,
            "These supporting phrases could serve as secondary keywords.",
        )
        .with_suggestions(suggestions)
        .advisory()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::HtmlDocument;

    #[test]
    fn rich_content_yields_suggestions() {
        let doc = HtmlDocument::parse(
            "<h1>garden design</h1>\
             <p>garden design rewards patience. garden design needs a plan. \
             soil preparation helps every garden design succeed.</p>",
        );
        let checks = run_suggestion_checks(&doc, 3, 5);
        assert_eq!(checks.len(), 2);
        assert_eq!(checks[0].status, CheckStatus::Success);
        assert!(checks[0].suggestions.iter().any(|s| s.keyword == "garden design"));
    }

    #[test]
    fn thin_content_warns_with_guidance() {
        let doc = HtmlDocument::parse("<p>hello there.</p>");
        let checks = run_suggestion_checks(&doc, 3, 5);
        assert!(checks.iter().all(|c| c.status == CheckStatus::Warning));
        assert!(checks.iter().all(|c| c.suggestions.is_empty()));
    }

    #[test]
    fn suggestion_checks_are_advisory() {
        let doc = HtmlDocument::parse("<p>some words.</p>");
        assert!(run_suggestion_checks(&doc, 3, 5).iter().all(|c| !c.score_affecting));
    }
}
