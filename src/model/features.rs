use serde::Serialize;

/// Numeric signals derived once per evaluation. Ratios are 0 when their
/// denominator is 0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct FeatureVector {
    pub word_count: usize,
    pub sentence_count: usize,
    pub avg_sentence_length: f64,
    pub sentence_variety: f64,
    pub emotional_density: f64,
    pub personal_connection: f64,
    pub topic_focus: f64,
}

pub fn ratio(count: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        count as f64 / total as f64
    }
}
