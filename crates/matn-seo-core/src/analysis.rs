//! Analysis orchestration: one entry point that runs the right battery
//! for the input and aggregates the score.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::cache::SuggestionCache;
use crate::checks::{self, CheckResult, CheckStatus};
use crate::config::Limits;
use crate::document::{HtmlDocument, StructuredDocument};
use crate::error::AnalysisResult;
use crate::score;
use crate::text;

/// Content and keywords to analyze.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct AnalysisInput {
    /// HTML markup of the content under analysis.
    pub markup: String,
    /// The primary keyword; empty selects suggestion mode.
    pub main_keyword: String,
    /// Declared secondary keywords.
    pub secondary_keywords: Vec<String>,
}

impl AnalysisInput {
    /// Create an input, dropping duplicate secondary keywords while
    /// keeping their first-seen order.
    pub fn new(
        markup: impl Into<String>,
        main_keyword: impl Into<String>,
        secondary_keywords: Vec<String>,
    ) -> Self {
        let mut seen = std::collections::HashSet::new();
        let secondary_keywords = secondary_keywords
            .into_iter()
            .filter(|k| !k.trim().is_empty() && seen.insert(text::normalize_for_match(k)))
            .collect();
        Self {
            markup: markup.into(),
            main_keyword: main_keyword.into(),
            secondary_keywords,
        }
    }

    /// Whether this input runs in suggestion mode.
    #[must_use]
    pub fn is_suggestion_mode(&self) -> bool {
        self.main_keyword.trim().is_empty()
    }
}

/// Full result of one analysis run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct AnalysisReport {
    /// Words in the whole content, headings included.
    pub total_words: usize,
    /// Occurrences of the primary keyword in the body.
    pub keyword_count: usize,
    /// Primary keyword density in the body, in percent.
    pub keyword_density: f64,
    /// Keyword placement and density checks.
    pub seo_checks: Vec<CheckResult>,
    /// Sentence and paragraph length checks.
    pub readability_checks: Vec<CheckResult>,
    /// Keyword suggestion checks.
    pub suggestion_checks: Vec<CheckResult>,
    /// Overall score from 0 to 100.
    pub score: u8,
}

/// Analyze HTML content in one shot.
#[tracing::instrument(skip_all, fields(suggestion_mode = input.is_suggestion_mode()))]
pub fn analyze(input: &AnalysisInput) -> AnalysisResult<AnalysisReport> {
    analyze_document(input, &HtmlDocument::parse(&input.markup), &Limits::default())
}

/// Analyze an already-parsed document with explicit limits.
pub fn analyze_document(
    input: &AnalysisInput,
    document: &impl StructuredDocument,
    limits: &Limits,
) -> AnalysisResult<AnalysisReport> {
    if input.is_suggestion_mode() {
        let suggestion_checks = suggestion_battery(document, limits);
        return Ok(suggestion_report(document, suggestion_checks));
    }
    keyword_report(input, document, limits)
}

fn keyword_report(
    input: &AnalysisInput,
    document: &impl StructuredDocument,
    limits: &Limits,
) -> AnalysisResult<AnalysisReport> {
    let seo_checks = checks::seo::run_seo_checks(
        &input.main_keyword,
        &input.secondary_keywords,
        document,
        limits,
    )?;
    let readability_checks = checks::readability::run_readability_checks(document);
    let score = score::calculate_score(&seo_checks);

    let body = text::normalize_for_match(&document.body_text());
    let keyword = text::normalize_for_match(&input.main_keyword);
    let keyword_count = text::find_keyword(&body, &keyword).len();
    let body_words = text::count_words(&body);
    let keyword_density = if body_words == 0 {
        0.0
    } else {
        keyword_count as f64 / body_words as f64 * 100.0
    };

    Ok(AnalysisReport {
        total_words: text::count_words(&document.plain_text()),
        keyword_count,
        keyword_density,
        seo_checks,
        readability_checks,
        suggestion_checks: Vec::new(),
        score,
    })
}

fn suggestion_battery(document: &impl StructuredDocument, limits: &Limits) -> Vec<CheckResult> {
    let total_words = text::count_words(&document.plain_text());
    if total_words < limits.min_suggestion_words {
        return vec![
            CheckResult::new(
                CheckStatus::Warning,
                "Suggested primary keyword",
                format!(
                    "Too little text to suggest keywords; write at least {} words first.",
                    limits.min_suggestion_words,
                ),
            )
            .advisory(),
        ];
    }
    checks::suggestions::run_suggestion_checks(
        document,
        limits.main_suggestions,
        limits.secondary_suggestions,
    )
}

fn suggestion_report(
    document: &impl StructuredDocument,
    suggestion_checks: Vec<CheckResult>,
) -> AnalysisReport {
    AnalysisReport {
        total_words: text::count_words(&document.plain_text()),
        keyword_count: 0,
        keyword_density: 0.0,
        seo_checks: Vec::new(),
        readability_checks: Vec::new(),
        suggestion_checks,
        score: 0,
    }
}

/// Reusable analyzer that carries limits and an optional suggestion
/// cache across runs.
#[derive(Debug)]
pub struct Analyzer {
    limits: Limits,
    cache: Option<SuggestionCache>,
}

impl Analyzer {
    /// Create an analyzer with the given limits and no cache.
    #[must_use]
    pub fn new(limits: Limits) -> Self {
        Self { limits, cache: None }
    }

    /// Enable a bounded suggestion cache.
    #[must_use]
    pub fn with_cache(mut self, capacity: usize) -> Self {
        self.cache = Some(SuggestionCache::new(capacity));
        self
    }

    /// Analyze one input, reusing cached suggestion checks when the
    /// content is unchanged.
    pub fn analyze(&mut self, input: &AnalysisInput) -> AnalysisResult<AnalysisReport> {
        let document = HtmlDocument::parse(&input.markup);
        if !input.is_suggestion_mode() {
            return keyword_report(input, &document, &self.limits);
        }

        if let Some(cache) = &self.cache
            && let Some(hit) = cache.get(&input.markup)
        {
            tracing::debug!("suggestion cache hit");
            return Ok(suggestion_report(&document, hit.clone()));
        }
        let suggestion_checks = suggestion_battery(&document, &self.limits);
        if let Some(cache) = &mut self.cache {
            cache.insert(&input.markup, suggestion_checks.clone());
        }
        Ok(suggestion_report(&document, suggestion_checks))
    }
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::new(Limits::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn article(repeats: usize, filler_sentences: usize) -> String {
        let mut body = String::new();
        for _ in 0..repeats {
            body.push_str("<p>garden design rewards a patient start.</p>");
        }
        for i in 0..filler_sentences {
            body.push_str(&format!(
                "<p>Paths and borders shape how a space number {i} is used daily.</p>",
            ));
        }
        format!(
            "<h1>garden design basics</h1>\
             <p>garden design starts with the site you have.</p>\
             {body}\
             <img src=\"a.jpg\" alt=\"garden design sketch\">\
             <a href=\"/soil\">garden design and soil</a>",
        )
    }

    #[test]
    fn keyword_mode_produces_all_batteries() {
        let input = AnalysisInput::new(article(3, 10), "garden design", vec![]);
        let report = analyze(&input).unwrap();
        assert_eq!(report.seo_checks.len(), 8);
        assert_eq!(report.readability_checks.len(), 2);
        assert!(report.suggestion_checks.is_empty());
        assert!(report.keyword_count > 0);
        assert!(report.keyword_density > 0.0);
    }

    #[test]
    fn analysis_is_idempotent() {
        let input = AnalysisInput::new(article(3, 10), "garden design", vec![]);
        let first = analyze(&input).unwrap();
        let second = analyze(&input).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn empty_keyword_selects_suggestion_mode() {
        let input = AnalysisInput::new(article(5, 10), "", vec![]);
        let report = analyze(&input).unwrap();
        assert!(report.seo_checks.is_empty());
        assert!(report.readability_checks.is_empty());
        assert_eq!(report.suggestion_checks.len(), 2);
        assert_eq!(report.score, 0);
    }

    #[test]
    fn thin_content_gates_suggestion_mode() {
        let input = AnalysisInput::new("<p>just a few words here.</p>", "", vec![]);
        let report = analyze(&input).unwrap();
        assert_eq!(report.suggestion_checks.len(), 1);
        assert_eq!(report.suggestion_checks[0].status, CheckStatus::Warning);
        assert!(report.suggestion_checks[0].description.contains("50"));
    }

    #[test]
    fn duplicate_secondary_keywords_are_dropped() {
        let input = AnalysisInput::new(
            "<p>x</p>",
            "kw",
            vec!["a".into(), "A ".into(), "b".into(), "".into()],
        );
        assert_eq!(input.secondary_keywords, vec!["a".to_owned(), "b".to_owned()]);
    }

    #[test]
    fn adding_keyword_occurrences_raises_density() {
        let sparse = analyze(&AnalysisInput::new(article(1, 20), "garden design", vec![])).unwrap();
        let dense = analyze(&AnalysisInput::new(article(6, 20), "garden design", vec![])).unwrap();
        assert!(dense.keyword_density > sparse.keyword_density);
        assert!(dense.keyword_count > sparse.keyword_count);
    }

    #[test]
    fn analyzer_cache_serves_repeated_suggestion_runs() {
        let input = AnalysisInput::new(article(5, 10), "", vec![]);
        let mut analyzer = Analyzer::default().with_cache(8);
        let first = analyzer.analyze(&input).unwrap();
        let second = analyzer.analyze(&input).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.suggestion_checks.len(), 2);
    }

    #[test]
    fn report_serializes_to_json() {
        let input = AnalysisInput::new(article(3, 10), "garden design", vec![]);
        let report = analyze(&input).unwrap();
        let json = serde_json::to_value(&report).unwrap();
        assert!(json.get("score").is_some());
        assert_eq!(json["seo_checks"].as_array().unwrap().len(), 8);
    }
}
