//! fx-graph: flow-network model layer for fluxnet.
//!
//! Provides:
//! - Core network data structures (Node, Edge, FlowGraph)
//! - Paired forward/reverse arcs with residual-capacity bookkeeping
//! - The single flow mutator (`push_flow`) guarding the network invariants
//! - A polled event log consumed by presentation layers
//!
//! # Example
//!
//! ```
//! use fx_graph::FlowGraph;
//!
//! let mut graph = FlowGraph::new();
//! let s = graph.add_node("s").unwrap();
//! let t = graph.add_node("t").unwrap();
//! let e = graph.add_edge(s, t, 10).unwrap();
//!
//! assert_eq!(graph.residual(e), Some(10));
//! graph.push_flow(e, 4).unwrap();
//! assert_eq!(graph.residual(e), Some(6));
//! ```

pub mod error;
pub mod events;
pub mod graph;

// Re-exports for ergonomics
pub use error::GraphError;
pub use events::NetworkEvent;
pub use graph::{Edge, FlowGraph, Node};
