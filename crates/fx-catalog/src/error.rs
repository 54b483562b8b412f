//! Catalog error types.

use fx_graph::GraphError;
use thiserror::Error;

/// Errors while parsing or building a network definition.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// The definition names a source or sink that isn't among its nodes.
    #[error("network {network:?}: {role} node {name:?} is not defined")]
    UnknownEndpoint {
        network: String,
        role: &'static str,
        name: String,
    },

    /// An edge references a node name that isn't among the defined nodes.
    #[error("network {network:?}: edge endpoint {name:?} is not defined")]
    UnknownEdgeEndpoint { network: String, name: String },

    #[error("graph error: {0}")]
    Graph(#[from] GraphError),

    #[error("malformed network definition: {0}")]
    Json(#[from] serde_json::Error),
}
