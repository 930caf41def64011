//! Error types for matn-seo-core.
//!
//! The analysis engine itself is total over string input — empty or
//! degenerate content produces "insufficient data" check results, not
//! errors. Errors exist only at the edges: configuration loading and
//! caller contract violations.

use thiserror::Error;

/// Errors that can occur when working with configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to deserialize configuration.
    #[error("invalid configuration: {0}")]
    Deserialize(#[from] Box<figment::Error>),
}

/// Result type alias using [`ConfigError`].
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors that can occur when driving the analysis pipeline.
#[derive(Error, Debug)]
pub enum AnalysisError {
    /// Keyword-dependent checks were requested without a primary keyword.
    ///
    /// Callers must run suggestion mode instead when no keyword is set.
    #[error("primary keyword is empty; run suggestion mode instead")]
    MissingKeyword,
}

/// Result type alias using [`AnalysisError`].
pub type AnalysisResult<T> = Result<T, AnalysisError>;
