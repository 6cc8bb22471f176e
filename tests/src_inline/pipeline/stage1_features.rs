use super::*;

#[test]
fn test_empty_text_yields_zero_vector() {
    assert_eq!(extract_features(""), FeatureVector::default());
    assert_eq!(extract_features("   \n\t"), FeatureVector::default());
}

#[test]
fn test_sentence_splitting() {
    let f = extract_features("Hi there. How are you? Great!");
    assert_eq!(f.sentence_count, 3);
    assert_eq!(f.word_count, 6);
    assert_eq!(f.avg_sentence_length, 2.0);
}

#[test]
fn test_consecutive_terminators_split_once() {
    assert_eq!(
        split_sentences("wait...what?!  really"),
        vec!["wait", "what", "really"]
    );
    let f = extract_features("Wait...what?!  Really");
    assert_eq!(f.word_count, 2);
    assert_eq!(f.sentence_count, 3);
    assert_eq!(f.avg_sentence_length, 2.0 / 3.0);
}

#[test]
fn test_punctuation_only_has_words_but_no_sentences() {
    let f = extract_features("...");
    assert_eq!(f.word_count, 1);
    assert_eq!(f.sentence_count, 0);
    assert_eq!(f.avg_sentence_length, 0.0);
    assert_eq!(f.sentence_variety, 0.0);
}

#[test]
fn test_sentence_variety_counts_more_than_eight_words() {
    let f = extract_features("one two three four five six seven eight nine. short one.");
    assert_eq!(f.sentence_count, 2);
    assert_eq!(f.sentence_variety, 0.5);

    let eight = extract_features("one two three four five six seven eight.");
    assert_eq!(eight.sentence_variety, 0.0);
}

#[test]
fn test_substring_and_exact_lexicon_matching() {
    let f = extract_features("Mine is musical and beloved mining");
    assert_eq!(f.word_count, 6);
    // "musical" contains "music"; "beloved" contains "love".
    assert_eq!(f.emotional_density, 2.0 / 6.0);
    assert_eq!(f.topic_focus, 1.0 / 6.0);
    // "mine" counts, "mining" does not.
    assert_eq!(f.personal_connection, 1.0 / 6.0);
}

#[test]
fn test_beloved_is_not_a_topic_word() {
    let f = extract_features("beloved");
    assert_eq!(f.emotional_density, 1.0);
    assert_eq!(f.topic_focus, 0.0);
}

#[test]
fn test_unrelated_word_matches_nothing() {
    let f = extract_features("belt");
    assert_eq!(f.emotional_density, 0.0);
    assert_eq!(f.topic_focus, 0.0);
    assert_eq!(f.personal_connection, 0.0);
}

#[test]
fn test_tokens_keep_attached_punctuation() {
    let f = extract_features("I feel like we hear a different sound! Our song, my tune... mine.");
    assert_eq!(f.word_count, 13);
    assert_eq!(f.sentence_count, 3);
    // "mine." is not an exact pronoun match; substring terms still hit.
    assert_eq!(f.personal_connection, 4.0 / 13.0);
    assert_eq!(f.topic_focus, 4.0 / 13.0);
    assert_eq!(f.emotional_density, 5.0 / 13.0);
}

#[test]
fn test_text_is_lowercased() {
    let f = extract_features("MUSIC is my LIFE");
    assert_eq!(f.topic_focus, 0.25);
    assert_eq!(f.emotional_density, 0.25);
    assert_eq!(f.personal_connection, 0.25);
}

#[test]
fn test_ratios_stay_within_unit_interval() {
    let samples = [
        "",
        "I I I my me",
        "Music music music. Listen!",
        "a b c d e f g h i j k l m n o p. q.",
    ];
    for text in samples {
        let f = extract_features(text);
        for v in [
            f.sentence_variety,
            f.emotional_density,
            f.personal_connection,
            f.topic_focus,
        ] {
            assert!((0.0..=1.0).contains(&v), "{text:?}: {v}");
        }
    }
}
