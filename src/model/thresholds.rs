/// Upper cap applied to every sub-score and to each weighted criterion score.
pub const SCORE_CAP: f64 = 5.0;

/// Scale applied to ratio features before capping.
pub const DENSITY_MULTIPLIER: f64 = 15.0;

/// Words per point of the effort detail sub-score.
pub const WORD_COUNT_DIVISOR: f64 = 15.0;

pub const IDEAL_SENTENCE_LENGTH: f64 = 12.0;

/// A sentence counts as complex when its word count is strictly greater.
pub const COMPLEX_SENTENCE_MIN_WORDS: usize = 8;

pub const PASS_THRESHOLD: f64 = 15.0;

/// Six criteria, each capped at `SCORE_CAP`.
pub const MAX_TOTAL: f64 = 30.0;

/// Round to one decimal, ties to even on the exact binary value.
///
/// Goes through decimal formatting so that e.g. 0.15 (stored just below
/// the midpoint) rounds down instead of being pushed up by `x * 10.0`.
pub fn round1(x: f64) -> f64 {
    format!("{x:.1}").parse().unwrap_or(x)
}

pub fn cap(x: f64) -> f64 {
    x.min(SCORE_CAP)
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/thresholds.rs"]
mod tests;
