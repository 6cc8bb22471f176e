use super::*;
use crate::pipeline::stage3_evaluate::Evaluator;

#[test]
fn test_report_layout() {
    let result = Evaluator::new()
        .evaluate("I love music. My guitar sounds beautiful when I listen to it in the quiet evening.")
        .unwrap();
    let report = render_report_text(&result);
    let expected = "\nEvaluating content...\n\n\
Scores:\n\
--------------------------------------------------\n\
Relevance: 3.2/5\n\
Originality: 4.7/5\n\
Effort: 2.7/5\n\
Clarity: 4.3/5\n\
Consistency: 3.9/5\n\
Grammar Quality: 3.0/5\n\
\n\
Feedback:\n\
--------------------------------------------------\n\
Relevance: The content effectively connects personal experiences with the topic.\n\
Originality: The content presents a unique personal perspective with creative expression.\n\
Effort: The content demonstrates thoughtful detail and emotional depth.\n\
Clarity: The writing flows naturally with good sentence structure.\n\
Consistency: The content maintains a consistent theme and emotional tone.\n\
Grammar Quality: The writing style is natural and engaging.\n\
\n\
Summary:\n\
--------------------------------------------------\n\
Total Score: 21.8/30\n\
Verdict: PASS\n";
    assert_eq!(report, expected);
}

#[test]
fn test_report_prints_negative_scores() {
    let mut text = vec!["word"; 200].join(" ");
    text.push_str(". Yes. No. Ok.");
    let result = Evaluator::new().evaluate(&text).unwrap();
    let report = render_report_text(&result);
    assert!(report.contains("Clarity: -2.2/5\n"));
    assert!(report.contains("Total Score: -2.1/30\n"));
    assert!(report.contains("Verdict: FAIL\n"));
}
