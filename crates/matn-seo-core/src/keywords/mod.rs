//! Candidate-keyword mining: filtering, scoring, and suggestion ranking.
//!
//! The pipeline is count → filter → score → rank. Each stage is a pure
//! function; [`ScoringContext`] carries the structural views (headings,
//! first paragraph, paragraph list) that scoring needs, precomputed once
//! per analysis.

pub mod filter;
pub mod scoring;
pub mod suggest;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

pub use scoring::ScoringContext;
pub use suggest::{detect_main_keyword, detect_secondary_keywords, suggest_keywords};

/// A ranked candidate keyword phrase.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct KeywordSuggestion {
    /// The candidate phrase, normalized.
    pub keyword: String,
    /// Raw occurrence count in the content.
    pub frequency: u32,
    /// Number of words in the phrase (2–4).
    pub word_count: usize,
    /// Quality score in [0, 45].
    pub quality: f64,
    /// Relevance score in [0, 30].
    pub relevance: f64,
}

impl KeywordSuggestion {
    /// Combined quality + relevance score used by the fallback ranking.
    pub fn combined_score(&self) -> f64 {
        self.quality + self.relevance
    }
}
