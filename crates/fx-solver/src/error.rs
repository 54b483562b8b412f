//! Error types for solve operations.

use fx_graph::GraphError;
use thiserror::Error;

/// Errors that can occur while computing a maximum flow.
#[derive(Error, Debug)]
pub enum SolveError {
    #[error("graph error: {0}")]
    Graph(#[from] GraphError),
}

pub type SolveResult<T> = Result<T, SolveError>;
