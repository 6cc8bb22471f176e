/// Matched as substrings of lowercase word tokens.
const EMOTION_TERMS: &[&str] = &[
    "feel",
    "emotion",
    "deep",
    "beautiful",
    "vibe",
    "quiet",
    "different",
    "like",
    "love",
    "enjoy",
    "music",
    "sound",
    "hear",
    "listen",
];

/// Matched as substrings of lowercase word tokens.
const TOPIC_TERMS: &[&str] = &[
    "music",
    "sound",
    "tune",
    "guitar",
    "violin",
    "instrument",
    "hear",
    "listen",
    "song",
];

/// Matched as whole tokens only.
const PERSONAL_PRONOUNS: &[&str] = &["i", "me", "my", "mine", "we", "our"];

pub fn emotion_terms() -> &'static [&'static str] {
    EMOTION_TERMS
}

pub fn topic_terms() -> &'static [&'static str] {
    TOPIC_TERMS
}

pub fn personal_pronouns() -> &'static [&'static str] {
    PERSONAL_PRONOUNS
}

pub fn contains_any(word: &str, terms: &[&str]) -> bool {
    terms.iter().any(|term| word.contains(term))
}

pub fn equals_any(word: &str, terms: &[&str]) -> bool {
    terms.iter().any(|term| word == *term)
}
