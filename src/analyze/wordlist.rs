//! Common-word lookup backing the proximity check.

use std::cmp::Ordering;

use crate::config::AnalysisConfig;
use crate::resources;

/// A sorted, read-only word list with case-insensitive binary search.
///
/// Loaded once per analysis run. The search is iterative and
/// index-bounded; no slices are copied.
#[derive(Debug, Clone)]
pub struct CommonWordSet {
    words: &'static [&'static str],
}

impl CommonWordSet {
    /// Select the list for a run: extended wins over track-all, which
    /// reduces the list to the empty-token singleton.
    pub fn for_config(config: &AnalysisConfig) -> Self {
        Self {
            words: resources::common_words(config.track_all_words, config.extended_common_words),
        }
    }

    /// Build from an explicit sorted list.
    pub fn from_words(words: &'static [&'static str]) -> Self {
        Self { words }
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Case-insensitive membership test.
    pub fn contains(&self, word: &str) -> bool {
        self.search(word).is_some()
    }

    /// Binary search for `word`, ignoring case. Returns the index if found.
    pub fn search(&self, word: &str) -> Option<usize> {
        let mut lo = 0;
        let mut hi = self.words.len();
        while lo < hi {
            let mid = lo + (hi - lo) / 2;
            match cmp_ignore_case(self.words[mid], word) {
                Ordering::Less => lo = mid + 1,
                Ordering::Greater => hi = mid,
                Ordering::Equal => return Some(mid),
            }
        }
        None
    }
}

fn cmp_ignore_case(a: &str, b: &str) -> Ordering {
    a.chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase))
}
