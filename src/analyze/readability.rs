//! Readability index calculation.
//!
//! Three classic indices computed from accumulated statistics. Gunning-Fog
//! and Coleman-Liau approximate a school grade level (higher = harder);
//! Flesch Reading Ease runs the other way (higher = easier). Degenerate
//! inputs surface as typed errors instead of NaN.

use serde::Serialize;

use crate::error::{AnalysisError, AnalysisResult};

use super::frequency::TextStats;

/// The three indices plus a descriptive band for the ease score.
#[derive(Debug, Clone, Serialize)]
pub struct ReadabilityReport {
    pub gunning_fog: f64,
    pub coleman_liau: f64,
    pub flesch_reading_ease: f64,
    pub ease_band: &'static str,
}

/// Compute all three indices.
///
/// Requires at least one sentence and syllable-extended statistics;
/// anything less is a zero denominator somewhere below.
pub fn compute_indices(stats: &TextStats) -> AnalysisResult<ReadabilityReport> {
    if stats.sentence_count == 0 {
        return Err(AnalysisError::DivisionByZero {
            metric: "average sentence length",
        });
    }
    let flesch = flesch_reading_ease(stats)?;
    Ok(ReadabilityReport {
        gunning_fog: gunning_fog(stats)?,
        coleman_liau: coleman_liau(stats)?,
        flesch_reading_ease: flesch,
        ease_band: ease_band(flesch),
    })
}

/// Gunning-Fog grade level:
/// `0.4 * (avg_sentence_length + fraction_of_syllables_beyond_easy_words)`.
///
/// The fraction subtracts the word counts at exactly one and two
/// syllables from the total syllable count, mirroring the classic
/// formulation this tool inherited.
pub fn gunning_fog(stats: &TextStats) -> AnalysisResult<f64> {
    let total = stats.syllable_count.unwrap_or(0);
    if total == 0 {
        return Err(AnalysisError::DivisionByZero {
            metric: "syllable count",
        });
    }
    let easy = stats
        .syllable_distribution
        .as_ref()
        .map(|dist| dist.get(&1).copied().unwrap_or(0) + dist.get(&2).copied().unwrap_or(0))
        .unwrap_or(0);
    let percentage = (total - easy) as f64 / total as f64;
    Ok(0.4 * (stats.average_sentence_length + percentage))
}

/// Coleman-Liau grade level:
/// `5.88 * avg_word_length - 29.6 * (sentences / words) - 15.8`.
pub fn coleman_liau(stats: &TextStats) -> AnalysisResult<f64> {
    if stats.word_count == 0 {
        return Err(AnalysisError::DivisionByZero {
            metric: "word count",
        });
    }
    Ok(5.88 * stats.average_word_length
        - 29.6 * (stats.sentence_count as f64 / stats.word_count as f64)
        - 15.8)
}

/// Flesch Reading Ease:
/// `206.835 - 1.015 * avg_sentence_length - 84.6 * (syllables / words)`.
pub fn flesch_reading_ease(stats: &TextStats) -> AnalysisResult<f64> {
    if stats.word_count == 0 {
        return Err(AnalysisError::DivisionByZero {
            metric: "word count",
        });
    }
    let syllables = stats.syllable_count.unwrap_or(0);
    if syllables == 0 {
        return Err(AnalysisError::DivisionByZero {
            metric: "syllable count",
        });
    }
    Ok(206.835
        - 1.015 * stats.average_sentence_length
        - 84.6 * (syllables as f64 / stats.word_count as f64))
}

/// Descriptive band for a Flesch Reading Ease score.
pub fn ease_band(score: f64) -> &'static str {
    match score {
        s if s >= 90.0 => "very easy",
        s if s >= 80.0 => "easy",
        s if s >= 70.0 => "fairly easy",
        s if s >= 60.0 => "plain english",
        s if s >= 50.0 => "fairly difficult",
        s if s >= 30.0 => "difficult",
        _ => "very confusing",
    }
}
