use crate::error::EvalError;
use crate::model::features::FeatureVector;
use crate::model::result::EvaluationResult;

pub fn render_result_json(result: &EvaluationResult) -> Result<String, EvalError> {
    let mut out = serde_json::to_string_pretty(result)?;
    out.push('\n');
    Ok(out)
}

pub fn render_features_json(features: &FeatureVector) -> Result<String, EvalError> {
    let mut out = serde_json::to_string_pretty(features)?;
    out.push('\n');
    Ok(out)
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/json.rs"]
mod tests;
