use crate::model::features::{FeatureVector, ratio};
use crate::model::lexicon::{
    contains_any, emotion_terms, equals_any, personal_pronouns, topic_terms,
};
use crate::model::thresholds::COMPLEX_SENTENCE_MIN_WORDS;

pub fn extract_features(text: &str) -> FeatureVector {
    let text = text.to_lowercase();
    let words = text.split_whitespace().collect::<Vec<_>>();
    let sentences = split_sentences(&text);

    let word_count = words.len();
    let sentence_count = sentences.len();

    let complex_sentences = sentences
        .iter()
        .filter(|s| s.split_whitespace().count() > COMPLEX_SENTENCE_MIN_WORDS)
        .count();

    let mut emotional = 0usize;
    let mut personal = 0usize;
    let mut topical = 0usize;
    for word in &words {
        if contains_any(word, emotion_terms()) {
            emotional += 1;
        }
        if equals_any(word, personal_pronouns()) {
            personal += 1;
        }
        if contains_any(word, topic_terms()) {
            topical += 1;
        }
    }

    FeatureVector {
        word_count,
        sentence_count,
        avg_sentence_length: ratio(word_count, sentence_count),
        sentence_variety: ratio(complex_sentences, sentence_count),
        emotional_density: ratio(emotional, word_count),
        personal_connection: ratio(personal, word_count),
        topic_focus: ratio(topical, word_count),
    }
}

/// Splits on runs of `.`, `!` and `?`; fragments that are empty after
/// trimming are dropped.
pub fn split_sentences(text: &str) -> Vec<&str> {
    text.split(['.', '!', '?'])
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage1_features.rs"]
mod tests;
