//! Suggestion ranking and adaptive threshold selection.
//!
//! Thresholds scale with content length: a 150-word note cannot support
//! the same evidence bar as a 1500-word article. Main-keyword thresholds
//! sit strictly above secondary-keyword thresholds in every bucket, and a
//! three-stage fallback guarantees a non-empty result whenever any
//! candidate survived filtering.

use std::cmp::Ordering;

use super::KeywordSuggestion;
use super::filter;
use super::scoring::{self, ScoringContext};
use crate::ngrams;

/// Quality/relevance floors for one content-length bucket.
#[derive(Debug, Clone, Copy)]
pub struct Thresholds {
    /// Minimum quality score.
    pub quality: f64,
    /// Minimum relevance score.
    pub relevance: f64,
    /// Minimum summed score for the second fallback stage.
    pub combined: f64,
}

/// Bucket thresholds for the main keyword, by total word count.
const fn main_thresholds(total_words: usize) -> Thresholds {
    match total_words {
        0..200 => Thresholds { quality: 6.0, relevance: 3.0, combined: 9.0 },
        200..400 => Thresholds { quality: 9.0, relevance: 6.0, combined: 15.0 },
        400..700 => Thresholds { quality: 12.0, relevance: 6.0, combined: 18.0 },
        700..1000 => Thresholds { quality: 15.0, relevance: 9.0, combined: 24.0 },
        _ => Thresholds { quality: 18.0, relevance: 12.0, combined: 30.0 },
    }
}

/// Bucket thresholds for secondary keywords; lower bar at every bucket.
const fn secondary_thresholds(total_words: usize) -> Thresholds {
    match total_words {
        0..200 => Thresholds { quality: 3.0, relevance: 3.0, combined: 6.0 },
        200..400 => Thresholds { quality: 6.0, relevance: 3.0, combined: 9.0 },
        400..700 => Thresholds { quality: 9.0, relevance: 6.0, combined: 15.0 },
        700..1000 => Thresholds { quality: 12.0, relevance: 6.0, combined: 18.0 },
        _ => Thresholds { quality: 15.0, relevance: 9.0, combined: 24.0 },
    }
}

/// Mine, filter, score, and rank candidate phrases; return the top `max`.
///
/// Sort order is strict: quality, then relevance, then frequency, all
/// descending, with the phrase text as the final deterministic
/// tie-break.
#[tracing::instrument(skip_all, fields(total_words = ctx.total_words, max))]
pub fn suggest_keywords(ctx: &ScoringContext, max: usize) -> Vec<KeywordSuggestion> {
    let counts = ngrams::count_frequencies(&ctx.words);
    let filtered = filter::filter_candidates(&counts);

    let mut suggestions: Vec<KeywordSuggestion> = filtered
        .into_iter()
        .filter(|(phrase, _)| {
            let words = phrase.split(' ').count();
            (ngrams::MIN_NGRAM..=ngrams::MAX_NGRAM).contains(&words)
        })
        .map(|(phrase, frequency)| {
            let quality = scoring::quality(&phrase, frequency, ctx);
            let relevance = scoring::relevance(&phrase, ctx);
            KeywordSuggestion {
                word_count: phrase.split(' ').count(),
                keyword: phrase,
                frequency,
                quality,
                relevance,
            }
        })
        .collect();

    suggestions.sort_by(rank_order);
    suggestions.truncate(max);
    suggestions
}

/// Suggest up to `max` main-keyword candidates.
///
/// Never spuriously empty: whenever at least one candidate survived the
/// filter, the final fallback stage returns the globally top-ranked
/// candidates by combined score.
pub fn detect_main_keyword(ctx: &ScoringContext, max: usize) -> Vec<KeywordSuggestion> {
    let pool = suggest_keywords(ctx, max * 3);
    select(pool, main_thresholds(ctx.total_words), max)
}

/// Suggest up to `max` secondary-keyword candidates.
pub fn detect_secondary_keywords(ctx: &ScoringContext, max: usize) -> Vec<KeywordSuggestion> {
    let pool = suggest_keywords(ctx, max * 2);
    select(pool, secondary_thresholds(ctx.total_words), max)
}

/// Three-stage selection: individual thresholds, then summed threshold,
/// then unconditional top-by-sum.
fn select(pool: Vec<KeywordSuggestion>, thresholds: Thresholds, max: usize) -> Vec<KeywordSuggestion> {
    if pool.is_empty() {
        return Vec::new();
    }

    let mut chosen: Vec<KeywordSuggestion> = pool
        .iter()
        .filter(|s| s.quality >= thresholds.quality && s.relevance >= thresholds.relevance)
        .cloned()
        .collect();

    if chosen.len() < max {
        chosen = pool
            .iter()
            .filter(|s| s.combined_score() >= thresholds.combined)
            .cloned()
            .collect();
    }

    if chosen.len() < max {
        chosen = pool;
        chosen.sort_by(|a, b| {
            b.combined_score()
                .partial_cmp(&a.combined_score())
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.keyword.cmp(&b.keyword))
        });
    }

    chosen.truncate(max);
    chosen
}

fn rank_order(a: &KeywordSuggestion, b: &KeywordSuggestion) -> Ordering {
    b.quality
        .partial_cmp(&a.quality)
        .unwrap_or(Ordering::Equal)
        .then_with(|| b.relevance.partial_cmp(&a.relevance).unwrap_or(Ordering::Equal))
        .then_with(|| b.frequency.cmp(&a.frequency))
        .then_with(|| a.keyword.cmp(&b.keyword))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::HtmlDocument;

    fn ctx_from(markup: &str) -> ScoringContext {
        ScoringContext::from_document(&HtmlDocument::parse(markup))
    }

    fn repeated_markup() -> String {
        let body = "<p>garden design makes small spaces work. \
                    garden design rewards patience and planning. \
                    soil preparation comes before garden design.</p>";
        format!("<h1>garden design</h1>{body}")
    }

    #[test]
    fn suggestions_are_ranked_and_bounded() {
        let ctx = ctx_from(&repeated_markup());
        let suggestions = suggest_keywords(&ctx, 5);
        assert!(!suggestions.is_empty());
        assert!(suggestions.len() <= 5);
        for pair in suggestions.windows(2) {
            assert!(pair[0].quality >= pair[1].quality);
        }
        assert_eq!(suggestions[0].keyword, "garden design");
    }

    #[test]
    fn suggestions_respect_word_count_bounds() {
        let ctx = ctx_from(&repeated_markup());
        for s in suggest_keywords(&ctx, 10) {
            assert!((2..=4).contains(&s.word_count));
        }
    }

    #[test]
    fn detect_main_never_empty_when_candidates_exist() {
        let ctx = ctx_from(&repeated_markup());
        assert!(!suggest_keywords(&ctx, 10).is_empty());
        assert!(!detect_main_keyword(&ctx, 3).is_empty());
        assert!(!detect_secondary_keywords(&ctx, 5).is_empty());
    }

    #[test]
    fn detect_on_empty_content_is_empty() {
        let ctx = ctx_from("");
        assert!(detect_main_keyword(&ctx, 3).is_empty());
        assert!(detect_secondary_keywords(&ctx, 5).is_empty());
    }

    #[test]
    fn main_thresholds_strictly_above_secondary_per_bucket() {
        for words in [0, 100, 250, 450, 800, 5000] {
            let main = main_thresholds(words);
            let secondary = secondary_thresholds(words);
            assert!(main.quality > secondary.quality, "bucket at {words} words");
            assert!(main.relevance >= secondary.relevance);
            assert!(main.combined > secondary.combined);
        }
    }

    #[test]
    fn thresholds_increase_with_length() {
        let short = main_thresholds(100);
        let long = main_thresholds(2000);
        assert!(long.quality > short.quality);
        assert!(long.combined > short.combined);
    }

    #[test]
    fn determinism_across_runs() {
        let ctx = ctx_from(&repeated_markup());
        let first = suggest_keywords(&ctx, 10);
        let second = suggest_keywords(&ctx, 10);
        assert_eq!(first, second);
    }
}
