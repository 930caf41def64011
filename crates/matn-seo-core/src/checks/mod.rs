//! Check results shared by the SEO, readability, and suggestion batteries.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::keywords::KeywordSuggestion;

pub mod readability;
pub mod seo;
pub mod suggestions;

/// Outcome severity of a single check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum CheckStatus {
    /// The content satisfies this check.
    Success,
    /// The content is acceptable but could be improved.
    Warning,
    /// The content fails this check.
    Error,
}

/// One evaluated check with its verdict and guidance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct CheckResult {
    /// Verdict for this check.
    pub status: CheckStatus,
    /// Short human-readable name of the check.
    pub title: String,
    /// Explanation of the verdict and what to do about it.
    pub description: String,
    /// Supplementary measurement detail, when one exists.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    /// Keyword suggestions attached to this check.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub suggestions: Vec<KeywordSuggestion>,
    /// Offending text excerpts, e.g. overlong sentences.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub flagged: Vec<String>,
    /// Whether this check participates in the overall score.
    pub score_affecting: bool,
}

impl CheckResult {
    /// Create a score-affecting check result.
    pub fn new(
        status: CheckStatus,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            status,
            title: title.into(),
            description: description.into(),
            detail: None,
            suggestions: Vec::new(),
            flagged: Vec::new(),
            score_affecting: true,
        }
    }

    /// Attach a supplementary measurement detail.
    #[must_use]
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    /// Exclude this check from the overall score.
    #[must_use]
    pub fn advisory(mut self) -> Self {
        self.score_affecting = false;
        self
    }

    /// Attach keyword suggestions.
    #[must_use]
    pub fn with_suggestions(mut self, suggestions: Vec<KeywordSuggestion>) -> Self {
        self.suggestions = suggestions;
        self
    }

    /// Attach offending text excerpts.
    #[must_use]
    pub fn with_flagged(mut self, flagged: Vec<String>) -> Self {
        self.flagged = flagged;
        self
    }
}
