use crate::error::EvalError;
use crate::model::criteria::{Criterion, CriterionDef, find_criterion};
use crate::model::features::FeatureVector;
use crate::model::thresholds::{
    DENSITY_MULTIPLIER, IDEAL_SENTENCE_LENGTH, SCORE_CAP, WORD_COUNT_DIVISOR, cap, round1,
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CriterionScore {
    pub criterion: Criterion,
    pub score: f64,
    pub feedback: &'static str,
}

pub fn score_criterion(
    table: &[CriterionDef],
    criterion: Criterion,
    features: &FeatureVector,
) -> Result<CriterionScore, EvalError> {
    let def = find_criterion(table, criterion)?;
    let [a, b] = sub_scores(criterion, features);
    let [wa, wb] = def.indicators;
    let base = cap(a) * wa.weight + cap(b) * wb.weight;
    let score = round1(base * def.weight).min(SCORE_CAP);
    Ok(CriterionScore {
        criterion,
        score,
        feedback: def.feedback,
    })
}

pub fn score_named(
    table: &[CriterionDef],
    name: &str,
    features: &FeatureVector,
) -> Result<CriterionScore, EvalError> {
    let criterion = name.parse::<Criterion>()?;
    score_criterion(table, criterion, features)
}

/// Uncapped sub-scores A and B. The sentence-length term is not floored
/// and goes negative once the average drifts more than 12 words from ideal.
pub fn sub_scores(criterion: Criterion, f: &FeatureVector) -> [f64; 2] {
    match criterion {
        Criterion::Relevance => [
            f.topic_focus * DENSITY_MULTIPLIER,
            f.personal_connection * DENSITY_MULTIPLIER,
        ],
        Criterion::Originality => [
            f.personal_connection * DENSITY_MULTIPLIER,
            f.emotional_density * DENSITY_MULTIPLIER,
        ],
        Criterion::Effort => [
            f.word_count as f64 / WORD_COUNT_DIVISOR,
            f.emotional_density * DENSITY_MULTIPLIER,
        ],
        Criterion::Clarity | Criterion::GrammarQuality => [
            sentence_length_score(f.avg_sentence_length),
            f.sentence_variety * DENSITY_MULTIPLIER,
        ],
        Criterion::Consistency => [
            f.topic_focus * DENSITY_MULTIPLIER,
            f.emotional_density * DENSITY_MULTIPLIER,
        ],
    }
}

fn sentence_length_score(avg_sentence_length: f64) -> f64 {
    (1.0 - (avg_sentence_length - IDEAL_SENTENCE_LENGTH).abs() / IDEAL_SENTENCE_LENGTH) * SCORE_CAP
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage2_scores.rs"]
mod tests;
