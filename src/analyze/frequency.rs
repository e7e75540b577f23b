//! Word frequency accumulation and descriptive statistics.
//!
//! Inflected forms fold into a previously seen shorter form through
//! simple suffix stripping. The fold only ever runs longer-into-shorter:
//! a form that arrives before its stem stays a separate entry, so the
//! table is order-dependent by construction.

use serde::Serialize;
use std::collections::{BTreeMap, HashMap};

use crate::config::AnalysisConfig;
use crate::error::{AnalysisError, AnalysisResult};

use super::sentences::ends_sentence;
use super::syllables::SyllableCounter;
use super::tokenizer::{normalize, tokenize};

/// Entries reported in the ranked word list.
const TOP_WORDS: usize = 20;

/// Suffixes folded when the two-character-shorter form is already known.
/// Tried in order after the single-character fold fails.
const TWO_CHAR_SUFFIXES: &[&str] = &["ed", "es", "'s", "\u{2019}s"];

/// Frequency table keyed by normalized stem.
#[derive(Debug, Clone, Default)]
pub struct FrequencyTable {
    counts: HashMap<String, usize>,
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one occurrence of a normalized token, folding known
    /// suffixes into an existing shorter entry when possible.
    pub fn record(&mut self, word: &str) {
        if let Some(count) = self.counts.get_mut(word) {
            *count += 1;
            return;
        }
        if let Some(stem) = self.fold_target(word) {
            *self.counts.get_mut(&stem).expect("stem key present") += 1;
            return;
        }
        self.counts.insert(word.to_string(), 1);
    }

    /// The existing entry a new form collapses into, if any.
    ///
    /// Checked before insertion only, so an earlier-seen longer form is
    /// never rewritten to its stem.
    fn fold_target(&self, word: &str) -> Option<String> {
        if word.ends_with(['s', 'd']) {
            let shorter = &word[..word.len() - 1];
            if self.counts.contains_key(shorter) {
                return Some(shorter.to_string());
            }
            for suffix in TWO_CHAR_SUFFIXES {
                if let Some(stem) = word.strip_suffix(suffix) {
                    if self.counts.contains_key(stem) {
                        return Some(stem.to_string());
                    }
                }
            }
        } else if let Some(stem) = word.strip_suffix("ing") {
            if self.counts.contains_key(stem) {
                return Some(stem.to_string());
            }
        }
        None
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn get(&self, word: &str) -> usize {
        self.counts.get(word).copied().unwrap_or(0)
    }

    /// The `n` most frequent entries: count descending, ties broken by
    /// ascending stem.
    pub fn top(&self, n: usize) -> Vec<WordCount> {
        let mut entries: Vec<WordCount> = self
            .counts
            .iter()
            .map(|(word, &count)| WordCount {
                word: word.clone(),
                count,
            })
            .collect();
        entries.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.word.cmp(&b.word)));
        entries.truncate(n);
        entries
    }
}

/// One ranked entry of the frequency table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordCount {
    pub word: String,
    pub count: usize,
}

/// Descriptive statistics for one text.
#[derive(Debug, Clone, Serialize)]
pub struct TextStats {
    pub word_count: usize,
    pub character_count: usize,
    pub letter_count: usize,
    pub average_word_length: f64,
    pub sentence_count: usize,
    /// Words per sentence; 0.0 when the text has no sentences.
    pub average_sentence_length: f64,
    pub unique_words: usize,
    pub top_words: Vec<WordCount>,
    pub lexical_density: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub syllable_count: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub syllable_distribution: Option<BTreeMap<usize, usize>>,
}

/// Accumulate the frequency table and derived statistics in one pass.
///
/// Sentence boundaries are re-derived here, independent of the flag
/// scan, using the same boundary rule. Syllables are only counted when a
/// counter is supplied; empty normalized tokens contribute nothing to
/// the distribution.
pub fn compute_stats(
    text: &str,
    config: &AnalysisConfig,
    mut syllables: Option<&mut SyllableCounter>,
) -> AnalysisResult<TextStats> {
    let delimiters = config.delimiter_refs();

    let mut table = FrequencyTable::new();
    let mut word_count = 0;
    let mut raw_length_sum = 0;
    let mut letter_count = 0;
    let mut sentence_count = 0;
    let mut sentence_word_sum = 0;
    let mut current_sentence_words = 0;
    let mut syllable_count = 0;
    let mut distribution: BTreeMap<usize, usize> = BTreeMap::new();

    for token in tokenize(text, &delimiters) {
        word_count += 1;
        raw_length_sum += token.text.chars().count();

        current_sentence_words += 1;
        if ends_sentence(token.text) {
            sentence_count += 1;
            sentence_word_sum += current_sentence_words;
            current_sentence_words = 0;
        }

        let simple = normalize(token.text);
        letter_count += simple.chars().count();
        if let Some(counter) = syllables.as_deref_mut() {
            if !simple.is_empty() {
                let n = counter.count(&simple);
                syllable_count += n;
                *distribution.entry(n).or_insert(0) += 1;
            }
        }
        table.record(&simple);
    }

    if word_count == 0 {
        return Err(AnalysisError::EmptyInput);
    }

    let unique_words = table.len();
    let average_sentence_length = if sentence_count > 0 {
        sentence_word_sum as f64 / sentence_count as f64
    } else {
        0.0
    };

    Ok(TextStats {
        word_count,
        character_count: text.chars().count(),
        letter_count,
        average_word_length: raw_length_sum as f64 / word_count as f64,
        sentence_count,
        average_sentence_length,
        unique_words,
        top_words: table.top(TOP_WORDS),
        lexical_density: 100.0 * unique_words as f64 / word_count as f64,
        syllable_count: syllables.is_some().then_some(syllable_count),
        syllable_distribution: syllables.is_some().then_some(distribution),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats(text: &str) -> TextStats {
        compute_stats(text, &AnalysisConfig::default(), None).unwrap()
    }

    #[test]
    fn test_stem_collapsing_folds_into_first_seen_stem() {
        let s = stats("jump jumped jumping");
        assert_eq!(s.unique_words, 1);
        assert_eq!(s.top_words[0], WordCount { word: "jump".to_string(), count: 3 });
    }

    #[test]
    fn test_stem_collapsing_is_order_dependent() {
        // "jumped" arrives first, so it cannot fold backwards; only
        // "jumping" finds the later "jump"... which never comes first
        // here, leaving two entries.
        let s = stats("jumped jump jumping");
        assert_eq!(s.unique_words, 2);
        let top = s.top_words;
        assert!(top.contains(&WordCount { word: "jump".to_string(), count: 2 }));
        assert!(top.contains(&WordCount { word: "jumped".to_string(), count: 1 }));
    }

    #[test]
    fn test_single_char_suffixes() {
        let s = stats("cat cats");
        assert_eq!(s.unique_words, 1);
        let s = stats("wave waved");
        assert_eq!(s.unique_words, 1);
        // "said" strips to neither "sai" nor a known two-char form.
        let s = stats("sad said");
        assert_eq!(s.unique_words, 2);
    }

    #[test]
    fn test_two_char_suffixes() {
        let s = stats("box boxes");
        assert_eq!(s.unique_words, 1);
        // "walke" is not a key, so the fold falls through to "ed".
        let s = stats("walk walked");
        assert_eq!(s.unique_words, 1);
        let s = stats("marble marble's");
        assert_eq!(s.unique_words, 1);
        let s = stats("marble marble\u{2019}s");
        assert_eq!(s.unique_words, 1);
    }

    #[test]
    fn test_ing_suffix_without_stem_stays_separate() {
        let s = stats("running runner");
        assert_eq!(s.unique_words, 2);
    }

    #[test]
    fn test_counts_and_lengths() {
        let s = stats("The cat, the \u{201C}cat\u{201D} again.");
        // Tokens: The / cat, / the / "cat" / again.
        assert_eq!(s.word_count, 5);
        assert_eq!(s.character_count, 25);
        // Normalized lengths: the(3) cat(3) the(3) cat(3) again(5).
        assert_eq!(s.letter_count, 17);
        // Raw lengths: 3 + 4 + 3 + 5 + 6 = 21.
        assert!((s.average_word_length - 21.0 / 5.0).abs() < 1e-9);
        assert_eq!(s.unique_words, 3);
        assert!((s.lexical_density - 60.0).abs() < 1e-9);
    }

    #[test]
    fn test_sentence_statistics() {
        let s = stats("One two three. Four five? Six seven eight nine!");
        assert_eq!(s.sentence_count, 3);
        assert!((s.average_sentence_length - 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_zero_sentences() {
        let s = stats("no terminators anywhere here");
        assert_eq!(s.sentence_count, 0);
        assert_eq!(s.average_sentence_length, 0.0);
    }

    #[test]
    fn test_empty_input_is_an_error() {
        let result = compute_stats("", &AnalysisConfig::default(), None);
        assert_eq!(result.unwrap_err(), AnalysisError::EmptyInput);
        let result = compute_stats("   \n\t ", &AnalysisConfig::default(), None);
        assert_eq!(result.unwrap_err(), AnalysisError::EmptyInput);
    }

    #[test]
    fn test_top_words_tie_break_alphabetical() {
        let table = {
            let mut t = FrequencyTable::new();
            for w in ["zebra", "zebra", "apple", "apple", "mango"] {
                t.record(w);
            }
            t
        };
        let top = table.top(3);
        assert_eq!(top[0].word, "apple");
        assert_eq!(top[1].word, "zebra");
        assert_eq!(top[2].word, "mango");
    }

    #[test]
    fn test_top_truncates_to_twenty() {
        let text = (b'a'..=b'z')
            .map(|c| String::from_utf8(vec![c; 3]).unwrap())
            .collect::<Vec<_>>()
            .join(" ");
        let s = stats(&text);
        assert_eq!(s.unique_words, 26);
        assert_eq!(s.top_words.len(), 20);
    }

    #[test]
    fn test_syllables_accumulated_on_request() {
        let mut counter = SyllableCounter::new();
        let s = compute_stats(
            "wholly wholly dog.",
            &AnalysisConfig::default(),
            Some(&mut counter),
        )
        .unwrap();
        // wholly estimates 2; dog estimates 1.
        assert_eq!(s.syllable_count, Some(5));
        let dist = s.syllable_distribution.unwrap();
        assert_eq!(dist.get(&2), Some(&2));
        assert_eq!(dist.get(&1), Some(&1));

        let plain = stats("wholly wholly dog.");
        assert!(plain.syllable_count.is_none());
        assert!(plain.syllable_distribution.is_none());
    }
}
