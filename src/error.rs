use thiserror::Error;

pub type Result<T> = std::result::Result<T, RankError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum RankError {
    #[error("invalid graph: {0}")]
    InvalidGraph(String),

    #[error("unknown node: {0}")]
    UnknownNode(String),

    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("no convergence after {iterations} iterations, max delta={max_delta}")]
    Convergence { iterations: usize, max_delta: f64 },
}
