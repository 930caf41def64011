//! Two-factor candidate scoring: quality and relevance.
//!
//! Quality measures how keyword-worthy a phrase is on its own (length,
//! frequency, placement); relevance measures how strongly the document
//! is actually about it (heading hierarchy, first paragraph, spread
//! across paragraphs). Both are hand-tuned heuristics with hard clamps,
//! not learned models.

use crate::document::StructuredDocument;
use crate::text;

/// Upper bound of the quality score.
pub const MAX_QUALITY: f64 = 45.0;

/// Upper bound of the relevance score.
pub const MAX_RELEVANCE: f64 = 30.0;

/// Cap on the summed heading-hierarchy relevance weight.
const HEADING_WEIGHT_CAP: f64 = 15.0;

/// Structural views needed by the scorer, match-normalized once.
#[derive(Debug, Clone)]
pub struct ScoringContext {
    /// Normalized text of each top-level heading.
    pub top_headings: Vec<String>,
    /// Normalized `(level, text)` for every heading.
    pub headings: Vec<(u8, String)>,
    /// Normalized first paragraph, empty when none exists.
    pub first_paragraph: String,
    /// Normalized paragraph texts.
    pub paragraphs: Vec<String>,
    /// Word count of the whole document.
    pub total_words: usize,
    /// Mining tokens of the whole document.
    pub words: Vec<String>,
}

impl ScoringContext {
    /// Precompute the scoring views from a structured document.
    #[tracing::instrument(skip_all)]
    pub fn from_document(doc: &impl StructuredDocument) -> Self {
        let plain = doc.plain_text();
        let headings: Vec<(u8, String)> = doc
            .headings()
            .into_iter()
            .map(|h| (h.level, text::normalize_for_match(&h.text)))
            .collect();
        Self {
            top_headings: headings
                .iter()
                .filter(|(level, _)| *level == 1)
                .map(|(_, text)| text.clone())
                .collect(),
            headings,
            first_paragraph: doc
                .first_paragraph()
                .map(|p| text::normalize_for_match(&p))
                .unwrap_or_default(),
            paragraphs: doc
                .paragraphs()
                .iter()
                .map(|p| text::normalize_for_match(p))
                .collect(),
            total_words: text::count_words(&plain),
            words: text::extract_words(&plain),
        }
    }
}

/// Quality score for a candidate phrase, clamped to `[0, MAX_QUALITY]`.
pub fn quality(phrase: &str, frequency: u32, ctx: &ScoringContext) -> f64 {
    let word_count = phrase.split(' ').count();
    let mut score = match word_count {
        4 => 8.0,
        3 => 6.0,
        2 => 4.0,
        _ => 1.0,
    };

    score += (f64::from(frequency) + 1.0).log2().mul_add(2.0, 0.0).min(10.0);

    let top_matches = ctx
        .top_headings
        .iter()
        .filter(|h| h.contains(phrase))
        .count();
    if top_matches > 0 {
        score += 15.0;
    } else {
        let sub_matches = ctx
            .headings
            .iter()
            .filter(|(level, text)| *level > 1 && text.contains(phrase))
            .count();
        if sub_matches > 0 {
            score += (sub_matches as f64 * 3.0).min(8.0);
        }
    }

    if ctx.first_paragraph.contains(phrase) {
        score += 10.0;
    }

    let density = phrase_density(word_count, frequency, ctx.total_words);
    if (0.5..=2.5).contains(&density) {
        score += 5.0;
    } else if (0.3..=3.5).contains(&density) {
        score += 3.0;
    }

    score.clamp(0.0, MAX_QUALITY)
}

/// Relevance score for a candidate phrase, clamped to `[0, MAX_RELEVANCE]`.
pub fn relevance(phrase: &str, ctx: &ScoringContext) -> f64 {
    let heading_weight: f64 = ctx
        .headings
        .iter()
        .filter(|(_, text)| text.contains(phrase))
        .map(|(level, _)| match level {
            1 => 10.0,
            2 => 5.0,
            3 => 3.0,
            4..=6 => 1.0,
            _ => 0.0,
        })
        .sum();
    let mut score = heading_weight.min(HEADING_WEIGHT_CAP);

    if ctx.first_paragraph.contains(phrase) {
        score += 8.0;
    }

    score += distribution_weight(phrase, &ctx.paragraphs);

    score.clamp(0.0, MAX_RELEVANCE)
}

/// Word-count-weighted density of a phrase, as a percentage.
fn phrase_density(word_count: usize, frequency: u32, total_words: usize) -> f64 {
    if total_words == 0 {
        return 0.0;
    }
    (frequency as usize * word_count) as f64 / total_words as f64 * 100.0
}

/// Weight for how widely the phrase spreads across paragraphs.
fn distribution_weight(phrase: &str, paragraphs: &[String]) -> f64 {
    if paragraphs.is_empty() {
        return 0.0;
    }
    let containing = paragraphs.iter().filter(|p| p.contains(phrase)).count();
    let percentage = containing as f64 / paragraphs.len() as f64 * 100.0;
    if percentage >= 40.0 {
        7.0
    } else if percentage >= 25.0 {
        5.0
    } else if percentage >= 15.0 {
        3.0
    } else if percentage >= 5.0 {
        1.0
    } else {
        0.0
    }
}
