//! Configuration loading and tunable analysis limits.

use std::path::Path;

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};

/// Tunable thresholds for the check battery.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct Limits {
    /// Minimum healthy keyword density in the body, in percent.
    pub min_keyword_density: f64,
    /// Maximum healthy keyword density in the body, in percent.
    pub max_keyword_density: f64,
    /// Minimum healthy keyword density across headings, in percent.
    pub min_heading_density: f64,
    /// Maximum healthy keyword density across headings, in percent.
    pub max_heading_density: f64,
    /// Most body words one image should have to carry.
    pub max_words_per_image: u32,
    /// Share of declared secondary keywords that must appear, in percent.
    pub min_secondary_coverage: f64,
    /// Share of link anchors that should mention the keyword, in percent.
    pub min_link_coverage: f64,
    /// Share of image alt texts that should mention the keyword, in percent.
    pub min_image_coverage: f64,
    /// Alt-text coverage below this share is an outright failure, in percent.
    pub low_image_coverage: f64,
    /// Minimum words before suggestion mode produces suggestions.
    pub min_suggestion_words: usize,
    /// How many primary-keyword suggestions to surface.
    pub main_suggestions: usize,
    /// How many secondary-keyword suggestions to surface.
    pub secondary_suggestions: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            min_keyword_density: 0.5,
            max_keyword_density: 2.5,
            min_heading_density: 3.0,
            max_heading_density: 10.0,
            max_words_per_image: 400,
            min_secondary_coverage: 70.0,
            min_link_coverage: 50.0,
            min_image_coverage: 70.0,
            low_image_coverage: 40.0,
            min_suggestion_words: 50,
            main_suggestions: 3,
            secondary_suggestions: 5,
        }
    }
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct Config {
    /// Analysis thresholds.
    pub limits: Limits,
    /// Fail the CLI when the overall score lands below this value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_score: Option<u32>,
    /// Log filter directive, e.g. `info` or `matn_seo_core=debug`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_level: Option<String>,
}

impl Config {
    /// Load configuration from defaults, an optional TOML file, and
    /// `MATN_SEO_`-prefixed environment variables, in increasing
    /// precedence.
    pub fn load(path: Option<&Path>) -> ConfigResult<Self> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));
        if let Some(path) = path {
            figment = figment.merge(Toml::file(path));
        }
        figment
            .merge(Env::prefixed("MATN_SEO_").split("__"))
            .extract()
            .map_err(|e| ConfigError::Deserialize(Box::new(e)))
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn defaults_are_sane() {
        let limits = Limits::default();
        assert!(limits.min_keyword_density < limits.max_keyword_density);
        assert!(limits.min_heading_density < limits.max_heading_density);
        assert!(limits.low_image_coverage < limits.min_image_coverage);
    }

    #[test]
    fn load_without_file_yields_defaults() {
        let config = Config::load(None).unwrap();
        assert_eq!(config.limits, Limits::default());
        assert_eq!(config.min_score, None);
    }

    #[test]
    fn toml_file_overrides_defaults() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "min_score = 80\n[limits]\nmax_keyword_density = 3.5").unwrap();
        let config = Config::load(Some(file.path())).unwrap();
        assert_eq!(config.min_score, Some(80));
        assert!((config.limits.max_keyword_density - 3.5).abs() < f64::EPSILON);
        assert!((config.limits.min_keyword_density - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn invalid_toml_is_an_error() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "limits = \"not a table\"").unwrap();
        assert!(Config::load(Some(file.path())).is_err());
    }
}
