use crate::model::result::EvaluationResult;
use crate::model::thresholds::{MAX_TOTAL, SCORE_CAP};
use crate::report::{RULE, format_score};

pub fn render_report_text(result: &EvaluationResult) -> String {
    let mut out = String::new();

    out.push_str("\nEvaluating content...\n\n");

    out.push_str("Scores:\n");
    out.push_str(RULE);
    out.push('\n');
    for (criterion, score) in &result.scores {
        out.push_str(&format!(
            "{}: {}/{}\n",
            criterion.title(),
            format_score(*score),
            SCORE_CAP
        ));
    }

    out.push_str("\nFeedback:\n");
    out.push_str(RULE);
    out.push('\n');
    for (criterion, feedback) in &result.feedback {
        out.push_str(&format!("{}: {}\n", criterion.title(), feedback));
    }

    out.push_str("\nSummary:\n");
    out.push_str(RULE);
    out.push('\n');
    out.push_str(&format!(
        "Total Score: {}/{}\n",
        format_score(result.total_score),
        MAX_TOTAL
    ));
    out.push_str(&format!("Verdict: {}\n", result.verdict));

    out
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/text.rs"]
mod tests;
