//! Configuration for prosecheck.
//!
//! Two layers: [`Config`] is the YAML file format (auto-discovered like a
//! lint config), and [`AnalysisConfig`] is the explicit options structure
//! the analysis core consumes. CLI flags override file values before the
//! analysis config is built.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{AnalysisError, AnalysisResult};
use crate::resources;

/// Options consumed by the analysis core.
///
/// A threshold of zero means the corresponding check is disabled; negative
/// values are unrepresentable by construction.
#[derive(Debug, Clone)]
pub struct AnalysisConfig {
    /// Token-distance window for repeated-word flags (0 = disabled).
    pub proximity_window: usize,
    /// Sentences with at least this many words are flagged (0 = disabled).
    pub word_threshold: usize,
    /// Sentences whose tokens exceed this many characters are flagged
    /// (0 = disabled).
    pub char_threshold: usize,
    /// Proximity-check every word, not just uncommon ones.
    pub track_all_words: bool,
    /// Use the extended common-word list (wins over `track_all_words`).
    pub extended_common_words: bool,
    /// Compute the three readability indices (requires syllable counting).
    pub readability_indices: bool,
    /// Compute descriptive statistics.
    pub statistics: bool,
    /// Non-whitespace delimiters, applied in order after whitespace.
    pub delimiters: Vec<String>,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            proximity_window: 0,
            word_threshold: 0,
            char_threshold: 0,
            track_all_words: false,
            extended_common_words: false,
            readability_indices: false,
            statistics: true,
            delimiters: resources::NWS_DELIMITERS.iter().map(|d| d.to_string()).collect(),
        }
    }
}

impl AnalysisConfig {
    /// Validate the configuration.
    pub fn validate(&self) -> AnalysisResult<()> {
        for d in &self.delimiters {
            if d.is_empty() {
                return Err(AnalysisError::InvalidConfiguration(
                    "delimiters must be non-empty strings".to_string(),
                ));
            }
        }
        Ok(())
    }

    /// Delimiters as borrowed slices for the tokenizer.
    pub fn delimiter_refs(&self) -> Vec<&str> {
        self.delimiters.iter().map(String::as_str).collect()
    }
}

/// Default config file names to search for.
pub const DEFAULT_CONFIG_NAMES: &[&str] = &["prosecheck.yaml", ".prosecheck.yaml"];

/// Top-level YAML configuration file.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Token-distance window for repeated-word flags (0 = disabled).
    #[serde(default)]
    pub proximity_window: Option<usize>,
    /// Word-count threshold per sentence (0 = disabled).
    #[serde(default)]
    pub word_threshold: Option<usize>,
    /// Character-count threshold per sentence (0 = disabled).
    #[serde(default)]
    pub char_threshold: Option<usize>,
    #[serde(default)]
    pub track_all_words: Option<bool>,
    #[serde(default)]
    pub extended_common_words: Option<bool>,
    #[serde(default)]
    pub readability_indices: Option<bool>,
    #[serde(default)]
    pub statistics: Option<bool>,
    /// Non-whitespace delimiters (defaults to "--", "-", and the em dash).
    #[serde(default)]
    pub delimiters: Option<Vec<String>>,
    /// File extensions scanned in directory mode.
    #[serde(default)]
    pub extensions: Vec<String>,
    /// Glob patterns for paths to exclude in directory mode.
    #[serde(default)]
    pub excluded_paths: Vec<String>,
    /// Optional syllable dictionary file layered over the built-in one.
    #[serde(default)]
    pub syllable_dict: Option<String>,
    /// Fail the run when the flag total exceeds this budget.
    #[serde(default)]
    pub max_flags: Option<usize>,
}

impl Config {
    /// Parse a configuration from a YAML file.
    pub fn parse_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: Config = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// File extensions scanned in directory mode (defaults to txt/md/text).
    pub fn scan_extensions(&self) -> Vec<String> {
        if self.extensions.is_empty() {
            vec!["txt".to_string(), "md".to_string(), "text".to_string()]
        } else {
            self.extensions.clone()
        }
    }

    /// Check if a path is excluded by the configured glob patterns.
    pub fn is_path_excluded(&self, path: &Path) -> bool {
        if self.excluded_paths.is_empty() {
            return false;
        }

        let path_str = path.to_string_lossy();

        for pattern in &self.excluded_paths {
            if let Ok(glob) = globset::Glob::new(pattern) {
                let matcher = glob.compile_matcher();
                if matcher.is_match(&*path_str) {
                    return true;
                }
            }
        }
        false
    }

    /// Build the analysis options, starting from defaults.
    pub fn to_analysis_config(&self) -> AnalysisConfig {
        let defaults = AnalysisConfig::default();
        AnalysisConfig {
            proximity_window: self.proximity_window.unwrap_or(defaults.proximity_window),
            word_threshold: self.word_threshold.unwrap_or(defaults.word_threshold),
            char_threshold: self.char_threshold.unwrap_or(defaults.char_threshold),
            track_all_words: self.track_all_words.unwrap_or(defaults.track_all_words),
            extended_common_words: self
                .extended_common_words
                .unwrap_or(defaults.extended_common_words),
            readability_indices: self
                .readability_indices
                .unwrap_or(defaults.readability_indices),
            statistics: self.statistics.unwrap_or(defaults.statistics),
            delimiters: self.delimiters.clone().unwrap_or(defaults.delimiters),
        }
    }
}

/// Validate a configuration file for correctness.
pub fn validate(config: &Config) -> anyhow::Result<()> {
    for pattern in &config.excluded_paths {
        globset::Glob::new(pattern)
            .map_err(|e| anyhow::anyhow!("invalid excluded_paths pattern {:?}: {}", pattern, e))?;
    }

    if let Some(delims) = &config.delimiters {
        if delims.iter().any(|d| d.is_empty()) {
            anyhow::bail!("delimiters must be non-empty strings");
        }
    }

    Ok(())
}
