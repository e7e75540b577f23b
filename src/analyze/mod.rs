//! Analysis core: tokenization, statistics, and flag detection.

mod frequency;
mod readability;
mod runner;
mod sentences;
mod syllables;
mod tokenizer;
mod types;
mod wordlist;

pub use frequency::{compute_stats, FrequencyTable, TextStats, WordCount};
pub use readability::{
    coleman_liau, compute_indices, ease_band, flesch_reading_ease, gunning_fog,
    ReadabilityReport,
};
pub use runner::Runner;
pub use sentences::{ends_sentence, scan_flags};
pub use syllables::{estimate_syllables, SyllableCounter};
pub use tokenizer::{normalize, tokenize, Token};
pub use types::{AnalysisReport, Flag, FlagKind};
pub use wordlist::CommonWordSet;
