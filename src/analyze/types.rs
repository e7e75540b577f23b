//! Core types for analysis results.

use serde::Serialize;
use std::cmp::Ordering;

use super::frequency::TextStats;
use super::readability::ReadabilityReport;

/// The kind of a flag, ordered by its fixed numeric tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FlagKind {
    Proximity,
    CharThreshold,
    WordThreshold,
}

impl FlagKind {
    /// Fixed numeric tag used for ordering flags across kinds.
    pub fn tag(&self) -> u8 {
        match self {
            FlagKind::Proximity => 10,
            FlagKind::CharThreshold => 20,
            FlagKind::WordThreshold => 30,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FlagKind::Proximity => "proximity",
            FlagKind::CharThreshold => "char_threshold",
            FlagKind::WordThreshold => "word_threshold",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "proximity" => Some(FlagKind::Proximity),
            "char_threshold" => Some(FlagKind::CharThreshold),
            "word_threshold" => Some(FlagKind::WordThreshold),
            _ => None,
        }
    }
}

impl std::fmt::Display for FlagKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single detected problem. Flags are observations and are never
/// mutated after creation; evidence fields carry original token text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Flag {
    /// An uncommon word recurred within the proximity window.
    Proximity {
        line: usize,
        word: String,
        window: String,
    },
    /// A sentence exceeded the character budget.
    CharThreshold {
        line: usize,
        chars: usize,
        sentence: String,
    },
    /// A sentence reached the word budget.
    WordThreshold {
        line: usize,
        words: usize,
        sentence: String,
    },
}

impl Flag {
    pub fn kind(&self) -> FlagKind {
        match self {
            Flag::Proximity { .. } => FlagKind::Proximity,
            Flag::CharThreshold { .. } => FlagKind::CharThreshold,
            Flag::WordThreshold { .. } => FlagKind::WordThreshold,
        }
    }

    pub fn line(&self) -> usize {
        match self {
            Flag::Proximity { line, .. }
            | Flag::CharThreshold { line, .. }
            | Flag::WordThreshold { line, .. } => *line,
        }
    }
}

impl Ord for Flag {
    /// Kind tag first, then line, then the remaining fields in order.
    fn cmp(&self, other: &Self) -> Ordering {
        self.kind()
            .tag()
            .cmp(&other.kind().tag())
            .then_with(|| self.line().cmp(&other.line()))
            .then_with(|| match (self, other) {
                (
                    Flag::Proximity { word, window, .. },
                    Flag::Proximity {
                        word: ow,
                        window: owin,
                        ..
                    },
                ) => word.cmp(ow).then_with(|| window.cmp(owin)),
                (
                    Flag::CharThreshold { chars, sentence, .. },
                    Flag::CharThreshold {
                        chars: oc,
                        sentence: os,
                        ..
                    },
                ) => chars.cmp(oc).then_with(|| sentence.cmp(os)),
                (
                    Flag::WordThreshold { words, sentence, .. },
                    Flag::WordThreshold {
                        words: ow,
                        sentence: os,
                        ..
                    },
                ) => words.cmp(ow).then_with(|| sentence.cmp(os)),
                _ => Ordering::Equal,
            })
    }
}

impl PartialOrd for Flag {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Results of analyzing one text.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub flags: Vec<Flag>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stats: Option<TextStats>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub readability: Option<ReadabilityReport>,
}

impl AnalysisReport {
    pub fn flag_count(&self) -> usize {
        self.flags.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_tags_ordered() {
        assert!(FlagKind::Proximity.tag() < FlagKind::CharThreshold.tag());
        assert!(FlagKind::CharThreshold.tag() < FlagKind::WordThreshold.tag());
    }

    #[test]
    fn test_kind_round_trip() {
        for kind in [
            FlagKind::Proximity,
            FlagKind::CharThreshold,
            FlagKind::WordThreshold,
        ] {
            assert_eq!(FlagKind::parse(kind.as_str()), Some(kind));
        }
        assert_eq!(FlagKind::parse("unknown"), None);
    }

    #[test]
    fn test_flag_sort_order() {
        let mut flags = vec![
            Flag::WordThreshold {
                line: 1,
                words: 20,
                sentence: "w".to_string(),
            },
            Flag::CharThreshold {
                line: 9,
                chars: 120,
                sentence: "c".to_string(),
            },
            Flag::Proximity {
                line: 4,
                word: "echo".to_string(),
                window: "echo echo".to_string(),
            },
            Flag::Proximity {
                line: 2,
                word: "again".to_string(),
                window: "again again".to_string(),
            },
        ];
        flags.sort();
        let kinds: Vec<u8> = flags.iter().map(|f| f.kind().tag()).collect();
        assert_eq!(kinds, vec![10, 10, 20, 30]);
        assert_eq!(flags[0].line(), 2);
        assert_eq!(flags[1].line(), 4);
    }

    #[test]
    fn test_flag_json_shape() {
        let flag = Flag::Proximity {
            line: 3,
            word: "marble".to_string(),
            window: "the marble in marble halls".to_string(),
        };
        let json = serde_json::to_value(&flag).unwrap();
        assert_eq!(json["kind"], "proximity");
        assert_eq!(json["line"], 3);
        assert_eq!(json["word"], "marble");
    }
}
