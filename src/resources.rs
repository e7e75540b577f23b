//! Fixed resource tables for prose analysis.
//!
//! Word lists, punctuation sets, and the built-in syllable dictionary.
//! The common-word lists are the classic Dolch-style high-frequency words;
//! the syllable dictionary follows the tradition of the Moby Hyphenation
//! List, seeded with words the fallback estimator gets wrong.

use lazy_static::lazy_static;

/// Characters that terminate a sentence when present in a token.
pub const TERMINATORS: &[char] = &['.', '?', '!'];

/// Tokens containing these abbreviations never terminate a sentence.
pub const NON_TERMINATORS: &[&str] = &["Dr.", "Ms.", "Mrs.", "Mr.", "Mme.", "Jr.", "Sr.", "St."];

/// Characters stripped from token boundaries during normalization.
/// ASCII punctuation plus the curly quote and dash forms common in
/// published prose.
pub const PUNCTUATION: &[char] = &[
    '!', '"', '#', '$', '%', '&', '\'', '(', ')', '*', '+', ',', '-', '.', '/', ':',
    ';', '<', '=', '>', '?', '@', '[', '\\', ']', '^', '_', '`', '{', '|', '}', '~',
    '\u{2019}', '\u{201C}', '\u{201D}', '\u{2014}',
];

/// Non-whitespace delimiters, split in order after the whitespace split.
/// "--" must precede "-" so a double hyphen yields two tokens, not three.
pub const NWS_DELIMITERS: &[&str] = &["--", "-", "\u{2014}"];

/// High-frequency English words exempt from proximity checking.
///
/// Sorted for binary search. The leading empty string exempts tokens that
/// normalize to nothing (punctuation-only tokens) from proximity flags.
pub static COMMON_WORDS: &[&str] = &[
    "",
    "a", "about", "all", "an", "and", "are", "as", "at", "be", "been", "but",
    "by", "call", "can", "come", "could", "day", "did", "do", "down", "each",
    "find", "first", "for", "from", "go", "had", "has", "have", "he", "her", "him",
    "his", "hot", "how", "i", "if", "in", "is", "it", "know", "like", "long",
    "look", "make", "many", "may", "more", "most", "my", "no", "now", "number",
    "of", "on", "one", "or", "other", "out", "over", "people", "said", "see",
    "she", "side", "so", "some", "sound", "than", "that", "the", "their", "them",
    "then", "there", "these", "they", "thing", "this", "time", "to", "two", "up",
    "use", "was", "water", "way", "we", "were", "what", "when", "which", "who",
    "will", "with", "word", "would", "write", "you", "your",
];

/// Extension of [`COMMON_WORDS`] for stricter proximity filtering.
pub static COMMON_WORDS_EXTENSION: &[&str] = &[
    "able", "above", "act", "add", "afraid", "after", "again", "against", "age",
    "ago", "agree", "air", "allow", "also", "always", "am", "among", "anger",
    "animal", "answer", "any", "appear", "apple", "area", "arm", "arrange",
    "arrive", "art", "ask", "atom", "baby", "back", "bad", "ball", "band", "bank",
    "bar", "base", "basic", "bat", "bear", "beat", "beauty", "bed", "before",
    "began", "begin", "behind", "believe", "bell", "best", "better", "between",
    "big", "bird", "bit", "black", "block", "blood", "blow", "blue", "board",
    "boat", "body", "bone", "book", "born", "both", "bottom", "bought", "box",
    "boy", "branch", "bread", "break", "bright", "bring", "broad", "broke",
    "brother", "brought", "brown", "build", "burn", "busy", "buy", "came", "camp",
    "capital", "captain", "car", "card", "care", "carry", "case", "cat", "catch",
    "caught", "cause", "cell", "cent", "center", "century", "certain", "chair",
    "chance", "change", "character", "charge", "chart", "check", "chick", "chief",
    "child", "children", "choose", "chord", "circle", "city", "claim", "class",
    "clean", "clear", "climb", "clock", "close", "clothe", "cloud", "coast",
    "coat", "cold", "collect", "colony", "color", "column", "common", "company",
    "compare", "complete", "condition", "connect", "consider", "consonant",
    "contain", "continent", "continue", "control", "cook", "cool", "copy", "corn",
    "corner", "correct", "cost", "cotton", "count", "country", "course", "cover",
    "cow", "crease", "create", "crop", "cross", "crowd", "cry", "current", "cut",
    "dad", "dance", "danger", "dark", "dead", "deal", "dear", "death", "decide",
    "decimal", "deep", "degree", "depend", "describe", "desert", "design",
    "determine", "develop", "dictionary", "die", "differ", "difficult", "direct",
    "discuss", "distant", "divide", "division", "doctor", "does", "dog", "dollar",
    "don't", "done", "door", "double", "draw", "dream", "dress", "drink", "drive",
    "drop", "dry", "duck", "during", "ear", "early", "earth", "ease", "east",
    "eat", "edge", "effect", "egg", "eight", "either", "electric", "element",
    "else", "end", "enemy", "energy", "engine", "enough", "enter", "equal",
    "equate", "especially", "even", "evening", "event", "ever", "every", "exact",
    "example", "except", "excite", "exercise", "expect", "experience",
    "experiment", "eye", "face", "fact", "fair", "fall", "family", "famous", "far",
    "farm", "fast", "fat", "father", "favor", "fear", "feed", "feel", "feet",
    "fell", "felt", "few", "field", "fig", "fight", "figure", "fill", "final",
    "fine", "finger", "finish", "fire", "fish", "fit", "five", "flat", "floor",
    "flow", "flower", "fly", "follow", "food", "foot", "force", "forest", "form",
    "forward", "found", "four", "fraction", "free", "fresh", "friend", "front",
    "fruit", "full", "fun", "game", "garden", "gas", "gather", "gave", "general",
    "gentle", "get", "girl", "give", "glad", "glass", "gold", "gone", "good",
    "got", "govern", "grand", "grass", "gray", "great", "green", "grew", "ground",
    "group", "grow", "guess", "guide", "gun", "hair", "half", "hand", "happen",
    "happy", "hard", "hat", "head", "hear", "heard", "heart", "heat", "heavy",
    "held", "help", "here", "high", "hill", "history", "hit", "hold", "hole",
    "home", "hope", "horse", "hour", "house", "huge", "human", "hundred", "hunt",
    "hurry", "ice", "idea", "imagine", "inch", "include", "indicate", "industry",
    "insect", "instant", "instrument", "interest", "invent", "iron", "island",
    "job", "join", "joy", "jump", "just", "keep", "kept", "key", "kill", "kind",
    "king", "knew", "lady", "lake", "land", "language", "large", "last", "late",
    "laugh", "law", "lay", "lead", "learn", "least", "leave", "led", "left", "leg",
    "length", "less", "let", "letter", "level", "lie", "life", "lift", "light",
    "line", "liquid", "list", "listen", "little", "live", "locate", "log", "lone",
    "lost", "lot", "loud", "love", "low", "machine", "made", "magnet", "main",
    "major", "man", "map", "mark", "market", "mass", "master", "match", "material",
    "matter", "me", "mean", "meant", "measure", "meat", "meet", "melody", "men",
    "metal", "method", "middle", "might", "mile", "milk", "million", "mind",
    "mine", "minute", "miss", "mix", "modern", "molecule", "moment", "money",
    "month", "moon", "morning", "mother", "motion", "mount", "mountain", "mouth",
    "move", "much", "multiply", "music", "must", "name", "nation", "natural",
    "nature", "near", "necessary", "neck", "need", "neighbor", "never", "new",
    "next", "night", "nine", "noise", "noon", "nor", "north", "nose", "note",
    "nothing", "notice", "noun", "numeral", "object", "observe", "occur", "ocean",
    "off", "offer", "office", "often", "oh", "oil", "old", "once", "only", "open",
    "operate", "opposite", "order", "organ", "original", "our", "own", "oxygen",
    "page", "paint", "pair", "paper", "paragraph", "parent", "part", "particular",
    "party", "pass", "past", "path", "pattern", "pay", "perhaps", "period",
    "person", "phrase", "pick", "picture", "piece", "pitch", "place", "plain",
    "plan", "plane", "planet", "plant", "play", "please", "plural", "poem",
    "point", "poor", "populate", "port", "pose", "position", "possible", "post",
    "pound", "power", "practice", "prepare", "present", "press", "pretty", "print",
    "probable", "problem", "process", "produce", "product", "proper", "property",
    "protect", "prove", "provide", "pull", "push", "put", "quart", "question",
    "quick", "quiet", "quite", "quotient", "race", "radio", "rail", "rain",
    "raise", "ran", "range", "rather", "reach", "read", "ready", "real", "reason",
    "receive", "record", "red", "region", "remember", "repeat", "reply",
    "represent", "require", "rest", "result", "rich", "ride", "right", "ring",
    "rise", "river", "road", "rock", "roll", "room", "root", "rope", "rose",
    "round", "row", "rub", "rule", "run", "safe", "sail", "salt", "same", "sand",
    "sat", "save", "saw", "say", "scale", "school", "science", "score", "sea",
    "search", "season", "seat", "second", "section", "seed", "seem", "segment",
    "select", "self", "sell", "send", "sense", "sent", "sentence", "separate",
    "serve", "set", "settle", "seven", "several", "shall", "shape", "share",
    "sharp", "sheet", "shell", "shine", "ship", "shoe", "shop", "shore", "short",
    "should", "shoulder", "shout", "show", "sight", "sign", "silent", "silver",
    "similar", "simple", "since", "sing", "single", "sister", "sit", "six", "size",
    "skill", "skin", "sky", "slave", "sleep", "slip", "slow", "small", "smell",
    "smile", "snow", "soft", "soil", "soldier", "solution", "solve", "son", "song",
    "soon", "south", "space", "speak", "special", "speech", "speed", "spell",
    "spend", "spoke", "spot", "spread", "spring", "square", "stand", "star",
    "start", "state", "station", "stay", "stead", "steam", "steel", "step",
    "stick", "still", "stone", "stood", "stop", "store", "story", "straight",
    "strange", "stream", "street", "stretch", "string", "strong", "student",
    "study", "subject", "substance", "subtract", "success", "such", "sudden",
    "suffix", "sugar", "suggest", "suit", "summer", "sun", "supply", "support",
    "sure", "surface", "surprise", "swim", "syllable", "symbol", "system", "table",
    "tail", "take", "talk", "tall", "teach", "team", "teeth", "tell",
    "temperature", "ten", "term", "test", "thank", "thick", "thin", "think",
    "third", "those", "though", "thought", "thousand", "three", "through", "throw",
    "thus", "tie", "tiny", "tire", "together", "told", "tone", "too", "took",
    "tool", "top", "total", "touch", "toward", "town", "track", "trade", "train",
    "travel", "tree", "triangle", "trip", "trouble", "truck", "true", "try",
    "tube", "turn", "twenty", "type", "under", "unit", "until", "us", "usual",
    "valley", "value", "vary", "verb", "very", "view", "village", "visit", "voice",
    "vowel", "wait", "walk", "wall", "want", "war", "warm", "wash", "watch",
    "wave", "wear", "weather", "week", "weight", "well", "went", "west", "wheel",
    "where", "whether", "while", "white", "whole", "whose", "why", "wide", "wife",
    "wild", "win", "wind", "window", "wing", "winter", "wire", "wish", "woman",
    "women", "won't", "wonder", "wood", "work", "world", "written", "wrong",
    "wrote", "yard", "year", "yellow", "yes", "yet", "young",
];

lazy_static! {
    /// Short and extended lists merged and re-sorted for binary search.
    static ref COMMON_WORDS_EXTENDED: Vec<&'static str> = {
        let mut words: Vec<&'static str> =
            COMMON_WORDS.iter().chain(COMMON_WORDS_EXTENSION).copied().collect();
        words.sort_unstable();
        words
    };
}

/// The singleton list used when every word should be proximity-checked.
/// Keeping the empty entry still exempts punctuation-only tokens.
static TRACK_ALL: &[&str] = &[""];

/// Select the common-word list for a run.
///
/// `extended` wins over `track_all`, matching the CLI flag precedence.
pub fn common_words(track_all: bool, extended: bool) -> &'static [&'static str] {
    if extended {
        &COMMON_WORDS_EXTENDED
    } else if track_all {
        TRACK_ALL
    } else {
        COMMON_WORDS
    }
}

/// Built-in syllable dictionary: word (or phrase) to syllable count.
///
/// Lookup keys are lowercase and case-sensitive. Entries favor common
/// words and words the vowel-run estimator is known to miscount.
pub static SYLLABLE_LOOKUP: phf::Map<&'static str, usize> = phf::phf_map! {
    "a" => 1,
    "aa" => 2,
    "a cappella" => 4,
    "able" => 2,
    "about" => 2,
    "actually" => 4,
    "against" => 2,
    "already" => 3,
    "always" => 2,
    "animal" => 3,
    "another" => 3,
    "answer" => 2,
    "apple" => 2,
    "area" => 3,
    "available" => 4,
    "beautiful" => 3,
    "because" => 2,
    "been" => 1,
    "before" => 2,
    "being" => 2,
    "between" => 2,
    "business" => 3,
    "camera" => 3,
    "chocolate" => 3,
    "circle" => 2,
    "communication" => 5,
    "community" => 4,
    "company" => 3,
    "continue" => 3,
    "couple" => 2,
    "create" => 2,
    "diamond" => 3,
    "diet" => 2,
    "differ" => 2,
    "different" => 3,
    "difficult" => 3,
    "doing" => 2,
    "double" => 2,
    "during" => 2,
    "early" => 2,
    "education" => 4,
    "especially" => 4,
    "evening" => 2,
    "every" => 2,
    "everyone" => 3,
    "everything" => 3,
    "example" => 3,
    "experience" => 4,
    "family" => 3,
    "fire" => 1,
    "future" => 2,
    "general" => 3,
    "giant" => 2,
    "going" => 2,
    "handle" => 2,
    "hour" => 1,
    "however" => 3,
    "idea" => 3,
    "imagine" => 3,
    "immediately" => 5,
    "important" => 3,
    "individual" => 5,
    "information" => 4,
    "interest" => 3,
    "international" => 5,
    "into" => 2,
    "island" => 2,
    "language" => 2,
    "library" => 3,
    "lion" => 2,
    "little" => 2,
    "many" => 2,
    "maybe" => 2,
    "measure" => 2,
    "middle" => 2,
    "minute" => 2,
    "molecule" => 3,
    "moment" => 2,
    "mountain" => 2,
    "natural" => 3,
    "nature" => 2,
    "necessary" => 4,
    "never" => 2,
    "ocean" => 2,
    "often" => 2,
    "only" => 2,
    "opportunity" => 5,
    "orange" => 2,
    "organization" => 5,
    "other" => 2,
    "over" => 2,
    "paper" => 2,
    "particular" => 4,
    "patient" => 2,
    "people" => 2,
    "picture" => 2,
    "poem" => 2,
    "poet" => 2,
    "police" => 2,
    "possible" => 3,
    "probably" => 3,
    "problem" => 2,
    "quiet" => 2,
    "radio" => 3,
    "real" => 2,
    "really" => 3,
    "reality" => 4,
    "remember" => 3,
    "responsibility" => 6,
    "science" => 2,
    "second" => 2,
    "seeing" => 2,
    "separate" => 3,
    "several" => 3,
    "simple" => 2,
    "society" => 4,
    "something" => 2,
    "sudden" => 2,
    "syllable" => 3,
    "system" => 2,
    "table" => 2,
    "technology" => 4,
    "temperature" => 4,
    "together" => 3,
    "toward" => 2,
    "trouble" => 2,
    "under" => 2,
    "unfortunately" => 5,
    "usual" => 3,
    "very" => 2,
    "video" => 3,
    "violet" => 3,
    "water" => 2,
    "whiteness" => 2,
    "woman" => 2,
    "women" => 2,
    "wonder" => 2,
    "yesterday" => 3,
    "zyrian" => 3,
};

#[cfg(test)]
mod tests {
    use super::*;

    fn is_sorted(words: &[&str]) -> bool {
        words.windows(2).all(|w| w[0] < w[1])
    }

    #[test]
    fn test_word_lists_sorted_and_deduped() {
        assert!(is_sorted(COMMON_WORDS));
        assert!(is_sorted(COMMON_WORDS_EXTENSION));
        assert!(is_sorted(&common_words(false, true)[..]));
    }

    #[test]
    fn test_common_words_selection() {
        assert_eq!(common_words(true, false), &[""][..]);
        assert_eq!(common_words(false, false).len(), COMMON_WORDS.len());
        // Extended wins over track_all.
        let extended = common_words(true, true);
        assert!(extended.len() > COMMON_WORDS.len());
        assert!(extended.binary_search(&"apple").is_ok());
    }

    #[test]
    fn test_syllable_lookup_entries() {
        assert_eq!(SYLLABLE_LOOKUP.get("aa"), Some(&2));
        assert_eq!(SYLLABLE_LOOKUP.get("a cappella"), Some(&4));
        assert_eq!(SYLLABLE_LOOKUP.get("zyrian"), Some(&3));
        // Keys are lowercase only.
        assert_eq!(SYLLABLE_LOOKUP.get("Ahab"), None);
    }

    #[test]
    fn test_non_terminators_contain_terminator() {
        // Every abbreviation carries a '.' so the contains-check in the
        // sentence scanner is what keeps it from ending a sentence.
        for abbr in NON_TERMINATORS {
            assert!(abbr.contains('.'));
        }
    }
}
