//! Error types for driver operations.

use fx_graph::GraphError;
use fx_solver::SolveError;
use thiserror::Error;

use crate::driver::DriverState;

/// Errors surfaced by the augmentation driver.
///
/// `InvalidState` marks a call made out of sequence — a caller bug, never
/// retried internally.
#[derive(Error, Debug)]
pub enum DriverError {
    #[error("invalid driver state: {op} requires {expected}, driver is {actual:?}")]
    InvalidState {
        op: &'static str,
        expected: &'static str,
        actual: DriverState,
    },

    #[error("graph error: {0}")]
    Graph(#[from] GraphError),

    #[error("solve error: {0}")]
    Solve(#[from] SolveError),
}

pub type DriverResult<T> = Result<T, DriverError>;
