//! Core engine for SEO content analysis.
//!
//! Takes HTML content plus declared keywords and produces a report:
//! keyword placement and density checks, sentence- and paragraph-length
//! readability checks, and an overall 0-100 score. When no keyword is
//! declared, suggestion mode mines the content for candidate phrases
//! instead. Persian and mixed Persian/Latin text is a first-class
//! citizen throughout, including half-space (zero-width non-joiner)
//! handling.
//!
//! ```
//! use matn_seo_core::{AnalysisInput, analyze};
//!
//! let input = AnalysisInput::new(
//!     "<h1>garden design</h1><p>garden design starts with the site.</p>",
//!     "garden design",
//!     vec![],
//! );
//! let report = analyze(&input)?;
//! assert!(!report.seo_checks.is_empty());
//! # Ok::<(), matn_seo_core::AnalysisError>(())
//! ```

pub mod analysis;
pub mod cache;
pub mod checks;
pub mod config;
pub mod dictionaries;
pub mod document;
pub mod error;
pub mod keywords;
pub mod ngrams;
pub mod score;
pub mod sentences;
pub mod text;

pub use analysis::{AnalysisInput, AnalysisReport, Analyzer, analyze, analyze_document};
pub use cache::SuggestionCache;
pub use checks::{CheckResult, CheckStatus};
pub use config::{Config, Limits};
pub use document::{HtmlDocument, StructuredDocument};
pub use error::{AnalysisError, AnalysisResult, ConfigError, ConfigResult};
pub use keywords::KeywordSuggestion;
pub use score::calculate_score;
