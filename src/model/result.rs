use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

use crate::model::criteria::Criterion;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Verdict {
    Pass,
    Fail,
}

impl Verdict {
    pub fn as_str(self) -> &'static str {
        match self {
            Verdict::Pass => "PASS",
            Verdict::Fail => "FAIL",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Maps are keyed by `Criterion`, so iteration and serialization follow
/// the criterion declaration order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EvaluationResult {
    pub scores: BTreeMap<Criterion, f64>,
    pub feedback: BTreeMap<Criterion, &'static str>,
    pub total_score: f64,
    pub verdict: Verdict,
}
