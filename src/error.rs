//! Error types for the analysis core.
//!
//! The analyzer performs no I/O, so every failure is either a data-shape
//! issue (empty input) or a configuration issue. Degenerate arithmetic is
//! surfaced as a typed error instead of letting NaN propagate through the
//! readability formulas.

use thiserror::Error;

/// Errors produced by the analysis core.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AnalysisError {
    /// A configuration value the analyzer cannot work with.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Statistics were requested for text containing no words.
    #[error("input text contains no words")]
    EmptyInput,

    /// A readability formula hit a zero denominator.
    #[error("cannot compute {metric}: division by zero")]
    DivisionByZero { metric: &'static str },
}

/// Result alias used throughout the analysis core.
pub type AnalysisResult<T> = Result<T, AnalysisError>;
