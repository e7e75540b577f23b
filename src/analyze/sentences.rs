//! Sentence boundary scanning and flag detection.
//!
//! One pass over the token stream drives both checks: a sliding
//! proximity window over normalized tokens, and per-sentence thresholds
//! evaluated when a terminator token closes a sentence. Sentences
//! accumulate across line breaks; trailing unterminated text is never
//! flushed as a final sentence, so it is exempt from threshold checks.

use std::collections::VecDeque;

use crate::config::AnalysisConfig;
use crate::resources;

use super::tokenizer::{normalize, tokenize};
use super::types::Flag;
use super::wordlist::CommonWordSet;

/// Whether a token closes a sentence: it contains a terminator character
/// and does not contain any abbreviation exception.
pub fn ends_sentence(token: &str) -> bool {
    token.contains(resources::TERMINATORS)
        && !resources::NON_TERMINATORS.iter().any(|abbr| token.contains(abbr))
}

/// Scan the text and collect all flags, sorted by kind tag then line.
pub fn scan_flags(text: &str, config: &AnalysisConfig, common: &CommonWordSet) -> Vec<Flag> {
    let delimiters = config.delimiter_refs();
    let proximity = config.proximity_window;

    let mut flags = Vec::new();
    // Raw window holds one more entry than the normalized window so the
    // reported phrase includes the offending token itself.
    let mut raw_window: VecDeque<&str> = VecDeque::new();
    let mut simple_window: VecDeque<String> = VecDeque::new();
    let mut sentence: Vec<&str> = Vec::new();

    for token in tokenize(text, &delimiters) {
        let simple = normalize(token.text);

        if proximity > 0 {
            raw_window.push_back(token.text);
            if raw_window.len() > proximity + 1 {
                raw_window.pop_front();
            }
            if !common.contains(&simple) && simple_window.contains(&simple) {
                flags.push(Flag::Proximity {
                    line: token.line,
                    word: simple.clone(),
                    window: join_window(&raw_window),
                });
            }
            simple_window.push_back(simple);
            if simple_window.len() > proximity {
                simple_window.pop_front();
            }
        }

        sentence.push(token.text);

        if ends_sentence(token.text) {
            if config.word_threshold > 0 && sentence.len() >= config.word_threshold {
                flags.push(Flag::WordThreshold {
                    line: token.line,
                    words: sentence.len(),
                    sentence: sentence.join(" "),
                });
            }
            if config.char_threshold > 0 {
                let chars: usize = sentence.iter().map(|t| t.chars().count()).sum();
                if chars > config.char_threshold {
                    flags.push(Flag::CharThreshold {
                        line: token.line,
                        chars,
                        sentence: sentence.join(" "),
                    });
                }
            }
            sentence.clear();
        }
    }

    flags.sort();
    flags
}

fn join_window(window: &VecDeque<&str>) -> String {
    window.iter().copied().collect::<Vec<_>>().join(" ")
}
