use std::collections::BTreeMap;

use crate::error::EvalError;
use crate::model::criteria::{Criterion, CriterionDef, builtin_criteria};
use crate::model::features::FeatureVector;
use crate::model::result::{EvaluationResult, Verdict};
use crate::model::thresholds::{PASS_THRESHOLD, round1};
use crate::pipeline::stage1_features::extract_features;
use crate::pipeline::stage2_scores::score_criterion;

/// Stateless scorer over a fixed criterion table. Safe to share across
/// threads; each call allocates its own working state.
#[derive(Debug, Clone, Copy)]
pub struct Evaluator {
    criteria: &'static [CriterionDef],
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::new()
    }
}

impl Evaluator {
    pub fn new() -> Self {
        Self {
            criteria: builtin_criteria(),
        }
    }

    #[cfg(test)]
    pub(crate) fn with_criteria(criteria: &'static [CriterionDef]) -> Self {
        Self { criteria }
    }

    pub fn evaluate(&self, text: &str) -> Result<EvaluationResult, EvalError> {
        self.evaluate_with_features(text).map(|(result, _)| result)
    }

    /// Same as `evaluate`, also handing back the feature vector the scores
    /// were computed from.
    pub fn evaluate_with_features(
        &self,
        text: &str,
    ) -> Result<(EvaluationResult, FeatureVector), EvalError> {
        let features = extract_features(text);
        tracing::debug!(?features, "extracted features");
        let result = self.score_all(&features).map_err(|e| match e {
            EvalError::EvaluationFailed(_) => e,
            other => EvalError::EvaluationFailed(other.to_string()),
        })?;
        Ok((result, features))
    }

    fn score_all(&self, features: &FeatureVector) -> Result<EvaluationResult, EvalError> {
        let mut scores = BTreeMap::new();
        let mut feedback = BTreeMap::new();
        let mut total = 0.0f64;

        for criterion in Criterion::ALL {
            let scored = score_criterion(self.criteria, criterion, features)?;
            if !scored.score.is_finite() {
                return Err(EvalError::EvaluationFailed(format!(
                    "non-finite score for {criterion}"
                )));
            }
            tracing::debug!(criterion = criterion.as_str(), score = scored.score, "scored");
            total += scored.score;
            scores.insert(criterion, scored.score);
            feedback.insert(criterion, scored.feedback);
        }

        let total_score = round1(total);
        let verdict = if total_score >= PASS_THRESHOLD {
            Verdict::Pass
        } else {
            Verdict::Fail
        };

        Ok(EvaluationResult {
            scores,
            feedback,
            total_score,
            verdict,
        })
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage3_evaluate.rs"]
mod tests;
