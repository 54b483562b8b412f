//! Batch Edmonds-Karp: drain a network to its maximum flow.

use fx_core::NodeId;
use fx_graph::{FlowGraph, GraphError, NetworkEvent};
use tracing::debug;

use crate::error::SolveResult;
use crate::path::find_augmenting_path;

/// Compute the maximum flow from `source` to `sink`, mutating the graph.
///
/// Repeatedly finds a shortest augmenting path, pushes its bottleneck
/// (the minimum residual capacity along the path) across every edge in
/// path order, and accumulates the bottleneck into the returned total.
/// Stops when no augmenting path remains.
///
/// Termination: every augmentation adds a positive integer to a total
/// bounded by the capacity leaving the source, and shortest-path
/// selection bounds the augmentation count polynomially (Edmonds-Karp).
///
/// Emits `PathFound` for each path, `FlowPushed` per edge (from
/// `push_flow`), and a terminal `NoAugmentingPath` with the total.
pub fn compute_max_flow(
    graph: &mut FlowGraph,
    source: NodeId,
    sink: NodeId,
) -> SolveResult<i64> {
    for id in [source, sink] {
        if graph.node(id).is_none() {
            return Err(GraphError::UnknownNode { node: id }.into());
        }
    }

    let mut total = 0_i64;
    while let Some(path) = find_augmenting_path(graph, source, sink) {
        let mut bottleneck = i64::MAX;
        for &eid in &path {
            if let Some(residual) = graph.residual(eid) {
                bottleneck = bottleneck.min(residual);
            }
        }
        debug!(edges = path.len(), bottleneck, "augmenting path found");

        graph.emit(NetworkEvent::PathFound {
            edges: path.clone(),
        });
        for &eid in &path {
            graph.push_flow(eid, bottleneck)?;
        }
        total += bottleneck;
    }

    debug!(total, "no augmenting path remains");
    graph.emit(NetworkEvent::NoAugmentingPath { total });
    Ok(total)
}
