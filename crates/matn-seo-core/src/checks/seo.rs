//! Keyword placement and density checks.

use crate::config::Limits;
use crate::document::StructuredDocument;
use crate::error::{AnalysisError, AnalysisResult};
use crate::text;

use super::{CheckResult, CheckStatus};

/// Run the full keyword check battery against a document.
///
/// The primary keyword must be non-empty; suggestion mode is the path
/// for content that has no keyword yet.
#[tracing::instrument(skip_all, fields(keyword = main_keyword))]
pub fn run_seo_checks(
    main_keyword: &str,
    secondary_keywords: &[String],
    document: &impl StructuredDocument,
    limits: &Limits,
) -> AnalysisResult<Vec<CheckResult>> {
    let keyword = text::normalize_for_match(main_keyword);
    if keyword.is_empty() {
        return Err(AnalysisError::MissingKeyword);
    }

    // Only the density rule excludes headings; coverage and ratio
    // measurements see the whole text.
    let body = text::normalize_for_match(&document.body_text());
    let plain = text::normalize_for_match(&document.plain_text());
    Ok(vec![
        check_h1(&keyword, document),
        check_first_paragraph(&keyword, document),
        check_body_density(&keyword, &body, limits),
        check_heading_density(&keyword, document, limits),
        check_secondary_coverage(secondary_keywords, &plain, limits),
        check_images(&keyword, &plain, document, limits),
        check_links(&keyword, secondary_keywords, document, limits),
        check_emphasis(&keyword, document),
    ])
}

fn check_h1(keyword: &str, document: &impl StructuredDocument) -> CheckResult {
    let title = "Keyword in main heading";
    let found = document
        .headings()
        .iter()
        .filter(|h| h.level == 1)
        .any(|h| text::normalize_for_match(&h.text).contains(keyword));
    if found {
        CheckResult::new(
            CheckStatus::Success,
            title,
            "The main heading contains the primary keyword.",
        )
    } else {
        CheckResult::new(
            CheckStatus::Error,
            title,
            "Add the primary keyword to the main (H1) heading.",
        )
    }
}

fn check_first_paragraph(keyword: &str, document: &impl StructuredDocument) -> CheckResult {
    let title = "Keyword in opening paragraph";
    let first = document.first_paragraph().unwrap_or_default();
    if text::normalize_for_match(&first).contains(keyword) {
        CheckResult::new(
            CheckStatus::Success,
            title,
            "The opening paragraph introduces the primary keyword.",
        )
    } else {
        CheckResult::new(
            CheckStatus::Error,
            title,
            "Mention the primary keyword in the opening paragraph.",
        )
    }
}

fn check_body_density(keyword: &str, body: &str, limits: &Limits) -> CheckResult {
    let title = "Keyword density";
    let occurrences = text::find_keyword(body, keyword).len();
    let total = text::count_words(body);
    let density = if total == 0 {
        0.0
    } else {
        occurrences as f64 / total as f64 * 100.0
    };
    let detail = format!("{occurrences} occurrences in {total} words ({density:.2}%)");

    let result = if density < limits.min_keyword_density {
        CheckResult::new(
            CheckStatus::Warning,
            title,
            "The primary keyword appears too rarely; use it more often.",
        )
    } else if density > limits.max_keyword_density {
        CheckResult::new(
            CheckStatus::Error,
            title,
            "The primary keyword is overused and may read as keyword stuffing.",
        )
    } else {
        CheckResult::new(
            CheckStatus::Success,
            title,
            "The primary keyword density is in the recommended range.",
        )
    };
    result.with_detail(detail)
}

fn check_heading_density(
    keyword: &str,
    document: &impl StructuredDocument,
    limits: &Limits,
) -> CheckResult {
    let title = "Keyword in subheadings";
    let headings = text::normalize_for_match(&document.headings_text());
    if headings.is_empty() {
        return CheckResult::new(
            CheckStatus::Warning,
            title,
            "The content has no headings; add headings that use the primary keyword.",
        );
    }

    let occurrences = text::find_keyword(&headings, keyword).len();
    if occurrences == 0 {
        return CheckResult::new(
            CheckStatus::Error,
            title,
            "No heading contains the primary keyword.",
        );
    }

    let total = text::count_words(&headings);
    let density = if total == 0 {
        0.0
    } else {
        occurrences as f64 / total as f64 * 100.0
    };
    let detail = format!("{occurrences} occurrences in {total} heading words ({density:.2}%)");
    if (limits.min_heading_density..=limits.max_heading_density).contains(&density) {
        CheckResult::new(
            CheckStatus::Success,
            title,
            "Headings use the primary keyword at a healthy rate.",
        )
        .with_detail(detail)
    } else {
        CheckResult::new(
            CheckStatus::Warning,
            title,
            "Heading keyword usage is outside the recommended range.",
        )
        .with_detail(detail)
    }
}

fn check_secondary_coverage(
    secondary_keywords: &[String],
    plain: &str,
    limits: &Limits,
) -> CheckResult {
    let title = "Secondary keyword coverage";
    if secondary_keywords.is_empty() {
        return CheckResult::new(
            CheckStatus::Warning,
            title,
            "No secondary keywords were declared; add related phrases to target.",
        );
    }

    let found: Vec<&String> = secondary_keywords
        .iter()
        .filter(|k| {
            let needle = text::normalize_for_match(k);
            !needle.is_empty() && plain.contains(&needle)
        })
        .collect();
    let coverage = found.len() as f64 / secondary_keywords.len() as f64 * 100.0;
    let detail = format!(
        "{} of {} present ({coverage:.0}%): {}",
        found.len(),
        secondary_keywords.len(),
        found.iter().map(|k| k.as_str()).collect::<Vec<_>>().join(", "),
    );

    if coverage >= limits.min_secondary_coverage {
        CheckResult::new(
            CheckStatus::Success,
            title,
            "Most declared secondary keywords appear in the content.",
        )
        .with_detail(detail)
    } else {
        CheckResult::new(
            CheckStatus::Warning,
            title,
            "Several declared secondary keywords are missing from the content.",
        )
        .with_detail(detail)
    }
}

fn check_images(
    keyword: &str,
    plain: &str,
    document: &impl StructuredDocument,
    limits: &Limits,
) -> CheckResult {
    let title = "Image alt text";
    let images = document.images();
    if images.is_empty() {
        return CheckResult::new(
            CheckStatus::Error,
            title,
            "The content has no images; add illustrative images with alt text.",
        );
    }

    let with_keyword = images
        .iter()
        .filter(|img| text::normalize_for_match(&img.alt).contains(keyword))
        .count();
    let coverage = with_keyword as f64 / images.len() as f64 * 100.0;
    let words_per_image = text::count_words(plain) as f64 / images.len() as f64;
    let detail = format!(
        "{with_keyword} of {} alt texts mention the keyword ({coverage:.0}%), {words_per_image:.0} words per image",
        images.len(),
    );

    let result = if coverage >= limits.min_image_coverage
        && words_per_image <= f64::from(limits.max_words_per_image)
    {
        CheckResult::new(
            CheckStatus::Success,
            title,
            "Images are frequent enough and their alt text uses the keyword.",
        )
    } else if coverage < limits.low_image_coverage {
        CheckResult::new(
            CheckStatus::Error,
            title,
            "Most image alt texts omit the primary keyword.",
        )
    } else {
        CheckResult::new(
            CheckStatus::Warning,
            title,
            "Image alt text or image frequency could be improved.",
        )
    };
    result.with_detail(detail)
}

fn check_links(
    keyword: &str,
    secondary_keywords: &[String],
    document: &impl StructuredDocument,
    limits: &Limits,
) -> CheckResult {
    let title = "Keyword in link text";
    let links = document.links();
    if links.is_empty() {
        return CheckResult::new(
            CheckStatus::Warning,
            title,
            "The content has no links; link related pages using a keyword.",
        );
    }

    // An anchor counts when it mentions any declared keyword, primary
    // or secondary.
    let mut needles: Vec<String> = vec![keyword.to_owned()];
    needles.extend(
        secondary_keywords
            .iter()
            .map(|k| text::normalize_for_match(k))
            .filter(|k| !k.is_empty()),
    );
    let with_keyword = links
        .iter()
        .filter(|link| {
            let anchor = text::normalize_for_match(&link.text);
            needles.iter().any(|needle| anchor.contains(needle))
        })
        .count();
    let coverage = with_keyword as f64 / links.len() as f64 * 100.0;
    let detail = format!(
        "{with_keyword} of {} link texts mention a declared keyword ({coverage:.0}%)",
        links.len(),
    );
    if coverage >= limits.min_link_coverage {
        CheckResult::new(
            CheckStatus::Success,
            title,
            "Link anchor text makes good use of the declared keywords.",
        )
        .with_detail(detail)
    } else {
        CheckResult::new(
            CheckStatus::Warning,
            title,
            "Few link anchors mention a declared keyword.",
        )
        .with_detail(detail)
    }
}

fn check_emphasis(keyword: &str, document: &impl StructuredDocument) -> CheckResult {
    let title = "Keyword visually emphasized";
    let found = document
        .emphasized_runs()
        .iter()
        .any(|run| text::normalize_for_match(run).contains(keyword));
    let result = if found {
        CheckResult::new(
            CheckStatus::Success,
            title,
            "The primary keyword is highlighted at least once.",
        )
    } else {
        CheckResult::new(
            CheckStatus::Warning,
            title,
            "Consider highlighting one occurrence of the primary keyword.",
        )
    };
    result.advisory()
}
