pub mod error;
pub mod logging;
pub mod model;
pub mod pipeline;
pub mod report;

pub use error::EvalError;
pub use model::criteria::Criterion;
pub use model::features::FeatureVector;
pub use model::result::{EvaluationResult, Verdict};
pub use pipeline::stage3_evaluate::Evaluator;

/// Scores `text` with the built-in criterion table.
pub fn evaluate(text: &str) -> Result<EvaluationResult, EvalError> {
    Evaluator::new().evaluate(text)
}
