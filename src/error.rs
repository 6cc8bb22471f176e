use thiserror::Error;

#[derive(Debug, Error)]
pub enum EvalError {
    #[error("undefined criterion: {0}")]
    UndefinedCriterion(String),
    #[error("Error evaluating content: {0}")]
    EvaluationFailed(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
