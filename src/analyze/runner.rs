//! Analysis runner that orchestrates the flag scan and statistics.

use std::collections::HashMap;
use std::sync::Arc;

use crate::config::AnalysisConfig;
use crate::error::AnalysisResult;

use super::frequency::compute_stats;
use super::readability::compute_indices;
use super::sentences::scan_flags;
use super::syllables::SyllableCounter;
use super::types::AnalysisReport;
use super::wordlist::CommonWordSet;

/// Executes a full analysis over one text at a time.
///
/// A runner owns the common-word list and the syllable cache for its
/// runs. The cache is dropped at the start of every run, so a runner can
/// be reused across texts without entries accumulating. Runners are
/// independent; for parallel work, give each text its own.
pub struct Runner {
    config: AnalysisConfig,
    common: CommonWordSet,
    syllables: SyllableCounter,
}

impl Runner {
    /// Create a runner, validating the configuration.
    pub fn new(config: AnalysisConfig) -> AnalysisResult<Self> {
        config.validate()?;
        let common = CommonWordSet::for_config(&config);
        Ok(Self {
            config,
            common,
            syllables: SyllableCounter::new(),
        })
    }

    /// Layer a user syllable dictionary over the built-in one.
    pub fn with_syllable_dict(mut self, dict: Arc<HashMap<String, usize>>) -> Self {
        self.syllables = SyllableCounter::with_dict(dict);
        self
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Run the flag scan and, when enabled, statistics and readability
    /// indices over the text.
    pub fn run(&mut self, text: &str) -> AnalysisResult<AnalysisReport> {
        self.syllables.clear_cache();

        let flags = scan_flags(text, &self.config, &self.common);

        let mut stats = None;
        let mut readability = None;
        if self.config.statistics || self.config.readability_indices {
            let counter = if self.config.readability_indices {
                Some(&mut self.syllables)
            } else {
                None
            };
            let computed = compute_stats(text, &self.config, counter)?;
            if self.config.readability_indices {
                readability = Some(compute_indices(&computed)?);
            }
            if self.config.statistics {
                stats = Some(computed);
            }
        }

        Ok(AnalysisReport {
            flags,
            stats,
            readability,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyze::types::FlagKind;
    use crate::error::AnalysisError;

    #[test]
    fn test_run_collects_flags_and_stats() {
        let config = AnalysisConfig {
            proximity_window: 4,
            word_threshold: 5,
            ..AnalysisConfig::default()
        };
        let mut runner = Runner::new(config).unwrap();
        let report = runner
            .run("The marble hall held marble stairs and more.")
            .unwrap();

        assert_eq!(report.flag_count(), 2);
        assert_eq!(report.flags[0].kind(), FlagKind::Proximity);
        assert_eq!(report.flags[1].kind(), FlagKind::WordThreshold);

        let stats = report.stats.unwrap();
        assert_eq!(stats.word_count, 8);
        assert_eq!(stats.sentence_count, 1);
        assert!(report.readability.is_none());
    }

    #[test]
    fn test_statistics_can_be_disabled() {
        let config = AnalysisConfig {
            statistics: false,
            ..AnalysisConfig::default()
        };
        let mut runner = Runner::new(config).unwrap();
        let report = runner.run("Some words here.").unwrap();
        assert!(report.stats.is_none());
        assert!(report.flags.is_empty());

        // With everything off, empty input is not an error.
        assert!(runner.run("").unwrap().flags.is_empty());
    }

    #[test]
    fn test_indices_without_statistics() {
        let config = AnalysisConfig {
            statistics: false,
            readability_indices: true,
            ..AnalysisConfig::default()
        };
        let mut runner = Runner::new(config).unwrap();
        let report = runner.run("Plain words make plain sentences. Short ones.").unwrap();
        assert!(report.stats.is_none());
        let readability = report.readability.unwrap();
        assert!(readability.flesch_reading_ease.is_finite());
    }

    #[test]
    fn test_empty_input_with_statistics_errors() {
        let mut runner = Runner::new(AnalysisConfig::default()).unwrap();
        assert_eq!(runner.run("").unwrap_err(), AnalysisError::EmptyInput);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = AnalysisConfig {
            delimiters: vec![String::new()],
            ..AnalysisConfig::default()
        };
        assert!(matches!(
            Runner::new(config),
            Err(AnalysisError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_runner_reuse_is_stable() {
        let config = AnalysisConfig {
            readability_indices: true,
            ..AnalysisConfig::default()
        };
        let mut runner = Runner::new(config).unwrap();
        let first = runner.run("The hound bayed. The moon rose.").unwrap();
        let second = runner.run("The hound bayed. The moon rose.").unwrap();
        assert_eq!(
            first.stats.as_ref().unwrap().syllable_count,
            second.stats.as_ref().unwrap().syllable_count
        );
    }
}
