//! In-process notifications for presentation layers.
//!
//! The core has no file or network I/O; it records what happened in an
//! ordered log on the graph (polled state). A UI, animation loop, or test
//! drains the log with [`FlowGraph::take_events`](crate::FlowGraph::take_events)
//! whenever it likes.

use fx_core::{EdgeId, NodeId};

/// One observable step of network construction or flow computation.
///
/// Events appear in the log in exactly the order the corresponding
/// mutations happened, so two identical runs produce identical logs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NetworkEvent {
    /// A node was added to the network.
    NodeAdded { node: NodeId },

    /// A forward edge was added. The auto-created zero-capacity companion
    /// arc is residual bookkeeping and gets no event of its own.
    EdgeAdded {
        edge: EdgeId,
        from: NodeId,
        to: NodeId,
        capacity: i64,
    },

    /// The search found an augmenting path (source to sink, in order).
    PathFound { edges: Vec<EdgeId> },

    /// Flow was pushed across one edge; carries the edge's new state.
    FlowPushed {
        edge: EdgeId,
        new_flow: i64,
        new_residual: i64,
    },

    /// No augmenting path remains; `total` is the accumulated flow.
    NoAugmentingPath { total: i64 },

    /// The driver reached its terminal state with the given total.
    Completed { total: i64 },
}
