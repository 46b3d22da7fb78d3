use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// The link structure breaks a graph invariant.
    #[error("invalid graph: {0}")]
    InvalidGraph(String),

    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("page {0} is not in the graph")]
    UnknownPage(String),

    /// The iteration ceiling was hit before every per-page delta fell under
    /// the threshold.
    #[error("no convergence after {iterations} iterations (max delta {max_delta})")]
    NonConvergence { iterations: usize, max_delta: f64 },
}

pub type Result<T> = std::result::Result<T, Error>;
