//! Whitespace-and-delimiter tokenization with source line tracking.
//!
//! Splitting is purely lexical: whitespace first, then each configured
//! literal delimiter in order. Delimiters are substrings, not patterns.

use crate::resources;

/// A contiguous run of non-delimiter characters and its 1-indexed line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub line: usize,
    pub text: &'a str,
}

/// Split text into a lazy sequence of tokens.
///
/// Lines are numbered from 1. Within a line, pieces are split on
/// whitespace and then re-split on each delimiter in order; the delimiter
/// text is discarded and empty pieces are dropped. The function is pure,
/// so re-invoking it on the same text yields an identical sequence.
pub fn tokenize<'a>(
    text: &'a str,
    delimiters: &'a [&'a str],
) -> impl Iterator<Item = Token<'a>> + 'a {
    text.lines().enumerate().flat_map(move |(idx, line)| {
        let line_no = idx + 1;
        line.split_whitespace()
            .flat_map(move |piece| split_on_delimiters(piece, delimiters))
            .map(move |text| Token { line: line_no, text })
    })
}

fn split_on_delimiters<'a>(piece: &'a str, delimiters: &[&str]) -> Vec<&'a str> {
    match delimiters.split_first() {
        None => {
            if piece.is_empty() {
                Vec::new()
            } else {
                vec![piece]
            }
        }
        Some((delim, rest)) => piece
            .split(*delim)
            .flat_map(|part| split_on_delimiters(part, rest))
            .collect(),
    }
}

/// Normalize a token for frequency and proximity comparisons: strip the
/// punctuation set from both ends, then lowercase. Display always uses
/// the original token text.
pub fn normalize(token: &str) -> String {
    token
        .trim_matches(|c: char| resources::PUNCTUATION.contains(&c))
        .to_lowercase()
}
