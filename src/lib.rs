//! Prosecheck - prose quality gate.
//!
//! Prosecheck flags things known to make prose harder to read: sentences
//! with too many words, sentences with too many characters, and uncommon
//! words repeated in close proximity. It also reports descriptive
//! statistics (word, sentence, and syllable counts, lexical density) and
//! three standard readability indices.
//!
//! # Architecture
//!
//! The analysis core is pure and does no I/O:
//!
//! - `analyze`: tokenization, frequency accumulation, sentence scanning,
//!   syllable counting, and readability indices
//! - `resources`: fixed word lists, punctuation sets, and the built-in
//!   syllable dictionary
//! - `config`: the YAML config layer and the explicit analysis options
//! - `report`: output formatting (pretty, JSON)
//! - `cli`: file collection and command handling
//!
//! Analysis is single-threaded per text; the CLI fans out over files
//! with one independent [`Runner`] each.

pub mod analyze;
pub mod cli;
pub mod config;
pub mod error;
pub mod report;
pub mod resources;

pub use analyze::{
    AnalysisReport, CommonWordSet, Flag, FlagKind, ReadabilityReport, Runner, SyllableCounter,
    TextStats,
};
pub use config::{AnalysisConfig, Config};
pub use error::{AnalysisError, AnalysisResult};
