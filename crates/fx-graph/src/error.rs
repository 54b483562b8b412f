//! Graph-specific error types.

use fx_core::{FxError, NodeId};
use thiserror::Error;

/// Network construction and mutation errors.
///
/// The first four variants are caller-input errors surfaced synchronously
/// at the call that caused them. `InvariantViolation` is a defensive check
/// that should be unreachable when callers respect the contracts; it is
/// fatal, not transient.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// A node with this identifier already exists.
    #[error("duplicate node {name:?}")]
    DuplicateNode { name: String },

    /// An edge endpoint refers to a node that doesn't exist.
    #[error("unknown node {node}")]
    UnknownNode { node: NodeId },

    /// An edge from a node to itself was requested.
    #[error("self-loop on node {node} rejected")]
    SelfLoop { node: NodeId },

    /// Edge capacity below zero.
    #[error("negative capacity {capacity}")]
    NegativeCapacity { capacity: i64 },

    /// A structural invariant was about to be broken (e.g. pushing more
    /// than residual capacity).
    #[error("invariant violated: {what}")]
    InvariantViolation { what: String },
}

impl From<GraphError> for FxError {
    fn from(e: GraphError) -> Self {
        match e {
            GraphError::DuplicateNode { .. } => FxError::InvalidArg {
                what: "duplicate node",
            },
            GraphError::UnknownNode { .. } => FxError::InvalidArg {
                what: "unknown node",
            },
            GraphError::SelfLoop { .. } => FxError::InvalidArg { what: "self-loop" },
            GraphError::NegativeCapacity { .. } => FxError::InvalidArg {
                what: "negative capacity",
            },
            GraphError::InvariantViolation { .. } => FxError::Invariant {
                what: "flow invariant",
            },
        }
    }
}
