//! Syllable counting: dictionary lookup with a heuristic fallback.
//!
//! Counts are memoized per counter. The cache is keyed by the exact
//! input string and grows for the lifetime of a run, so callers clear it
//! between independent runs rather than letting it accumulate.

use std::collections::HashMap;
use std::sync::Arc;

use crate::resources;

/// Counts syllables for lowercase words.
///
/// Lookup order: the user-supplied dictionary, the built-in dictionary,
/// then [`estimate_syllables`]. A dictionary miss is not an error.
#[derive(Debug, Clone, Default)]
pub struct SyllableCounter {
    dict: Arc<HashMap<String, usize>>,
    cache: HashMap<String, usize>,
}

impl SyllableCounter {
    /// A counter backed by the built-in dictionary only.
    pub fn new() -> Self {
        Self::default()
    }

    /// A counter with a user dictionary layered over the built-in one.
    pub fn with_dict(dict: Arc<HashMap<String, usize>>) -> Self {
        Self {
            dict,
            cache: HashMap::new(),
        }
    }

    /// Syllable count for `word`. Expects lowercase input; dictionary
    /// keys are case-sensitive. The empty string counts zero.
    pub fn count(&mut self, word: &str) -> usize {
        if let Some(&n) = self.cache.get(word) {
            return n;
        }
        let n = self
            .dict
            .get(word)
            .copied()
            .or_else(|| resources::SYLLABLE_LOOKUP.get(word).copied())
            .unwrap_or_else(|| estimate_syllables(word));
        self.cache.insert(word.to_string(), n);
        n
    }

    /// Drop all memoized entries.
    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }

    /// Number of memoized entries.
    pub fn cache_len(&self) -> usize {
        self.cache.len()
    }
}

/// Estimate the syllable count of a word from its vowel structure.
///
/// Deliberately crude: the vowel-run tracking flag resets inside a run,
/// so a run of k consecutive vowels contributes ceil(k/2), and a trailing
/// `e` always decrements (it cannot tell "apple" from "tree"). Words
/// shorter than three characters count one syllable; the empty string
/// counts zero.
pub fn estimate_syllables(word: &str) -> usize {
    if word.is_empty() {
        return 0;
    }
    if word.chars().count() < 3 {
        return 1;
    }

    let mut count = 0;
    let mut last_was_vowel = false;
    for c in word.chars() {
        if is_vowel(c) {
            if last_was_vowel {
                last_was_vowel = false;
            } else {
                count += 1;
                last_was_vowel = true;
            }
        } else {
            last_was_vowel = false;
        }
    }

    if word.ends_with(['e', 'E']) {
        count -= 1;
    }

    count.max(1)
}

fn is_vowel(c: char) -> bool {
    matches!(
        c,
        'a' | 'e' | 'i' | 'o' | 'u' | 'y' | 'A' | 'E' | 'I' | 'O' | 'U' | 'Y'
    )
}
