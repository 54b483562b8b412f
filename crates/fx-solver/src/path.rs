//! Breadth-first search for a shortest augmenting path.

use std::collections::VecDeque;

use fx_core::{EdgeId, NodeId};
use fx_graph::FlowGraph;

/// Find a shortest augmenting path from `source` to `sink`, or `None` if
/// the sink is unreachable in the residual graph.
///
/// Traverses only arcs with positive residual capacity. Each node is
/// enqueued at most once (first discovery wins), so the returned path has
/// the fewest edges among all residual paths. Among arcs that could first
/// reach an undiscovered node, the one earlier in `edges_from` iteration
/// order wins, making the result fully deterministic for a fixed graph
/// and edge-insertion history.
///
/// Does not mutate the graph. Runs in O(nodes + edges).
pub fn find_augmenting_path(
    graph: &FlowGraph,
    source: NodeId,
    sink: NodeId,
) -> Option<Vec<EdgeId>> {
    let n = graph.nodes().len();
    if source.index() as usize >= n || sink.index() as usize >= n || source == sink {
        return None;
    }

    // Parent edge of each discovered node, for path reconstruction.
    let mut parent: Vec<Option<EdgeId>> = vec![None; n];
    let mut visited = vec![false; n];
    let mut queue = VecDeque::new();

    visited[source.index() as usize] = true;
    queue.push_back(source);

    while let Some(node) = queue.pop_front() {
        if node == sink {
            break;
        }
        for &eid in graph.edges_from(node) {
            let Some(edge) = graph.edge(eid) else { continue };
            let to = edge.to.index() as usize;
            if edge.residual() > 0 && !visited[to] {
                visited[to] = true;
                parent[to] = Some(eid);
                queue.push_back(edge.to);
            }
        }
    }

    parent[sink.index() as usize]?;

    // Walk parents back from the sink, then flip into source-first order.
    let mut path = Vec::new();
    let mut current = sink;
    while current != source {
        let eid = parent[current.index() as usize]?;
        path.push(eid);
        current = graph.edge(eid)?.from;
    }
    path.reverse();
    Some(path)
}
