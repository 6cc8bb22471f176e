use std::fs;
use std::path::Path;

use crate::error::EvalError;
use crate::model::features::FeatureVector;
use crate::model::result::EvaluationResult;

pub mod json;
pub mod text;

pub const RULE: &str = "--------------------------------------------------";

pub fn format_score(v: f64) -> String {
    format!("{:.1}", v)
}

/// Writes `evaluation.json`, `features.json` and `report.txt` into `out_dir`.
pub fn write_reports(
    result: &EvaluationResult,
    features: &FeatureVector,
    out_dir: &Path,
) -> Result<(), EvalError> {
    fs::create_dir_all(out_dir)?;

    let evaluation_path = out_dir.join("evaluation.json");
    fs::write(&evaluation_path, json::render_result_json(result)?)?;

    let features_path = out_dir.join("features.json");
    fs::write(&features_path, json::render_features_json(features)?)?;

    let report_path = out_dir.join("report.txt");
    fs::write(&report_path, text::render_report_text(result))?;

    tracing::info!(dir = %out_dir.display(), "reports written");
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/mod.rs"]
mod tests;
