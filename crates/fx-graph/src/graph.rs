//! Core network data structures.

use std::collections::HashMap;

use fx_core::{EdgeId, NodeId};
use tracing::trace;

use crate::error::GraphError;
use crate::events::NetworkEvent;

/// A node in the flow network.
///
/// Nodes are minimal: an ID and a caller-chosen name. Presentation
/// metadata (canvas coordinates and the like) lives with the caller,
/// keyed by the same name; the core never reads it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub id: NodeId,
    pub name: String,
}

/// A directed edge with integer capacity and current flow.
///
/// Every edge is paired with a companion arc in the opposite direction
/// so flow can be undone by later augmentations. The pair maintains the
/// zero-sum invariant `flow(e) + flow(companion(e)) == 0`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge {
    pub id: EdgeId,
    pub from: NodeId,
    pub to: NodeId,
    pub capacity: i64,
    pub flow: i64,
    pub(crate) companion: Option<EdgeId>,
}

impl Edge {
    /// Capacity remaining for further flow: `capacity - flow`.
    ///
    /// Never negative while the edge is at rest (outside a `push_flow`
    /// call).
    pub fn residual(&self) -> i64 {
        self.capacity - self.flow
    }

    /// The paired reverse arc, if one has been recorded.
    ///
    /// Edges created through [`FlowGraph::add_edge`] always have one;
    /// `None` only occurs for an edge whose pairing is still pending lazy
    /// resolution inside `push_flow`.
    pub fn companion(&self) -> Option<EdgeId> {
        self.companion
    }
}

/// The flow network: insertion-ordered nodes and edges, per-node
/// out-adjacency, and the event log.
///
/// The graph exclusively owns its nodes and edges. Search and driver
/// layers borrow it; nothing is ever removed during a run — a fresh
/// network starts a fresh graph.
///
/// Edge insertion order is observable: it defines the tie-break order of
/// the augmenting-path search, which makes every computation on a fixed
/// construction history fully deterministic.
#[derive(Debug, Clone, Default)]
pub struct FlowGraph {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
    /// Name -> id index; also enforces name uniqueness.
    by_name: HashMap<String, NodeId>,
    /// Out-edges per node, in global insertion order. Kept incrementally
    /// so `edges_from` is O(out-degree) rather than a scan of all edges.
    out_edges: Vec<Vec<EdgeId>>,
    events: Vec<NetworkEvent>,
}

impl FlowGraph {
    /// Create an empty network.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node and return its ID.
    ///
    /// Fails with [`GraphError::DuplicateNode`] if the name is taken.
    pub fn add_node(&mut self, name: impl Into<String>) -> Result<NodeId, GraphError> {
        let name = name.into();
        if self.by_name.contains_key(&name) {
            return Err(GraphError::DuplicateNode { name });
        }
        let id = NodeId::from_index(self.nodes.len() as u32);
        self.by_name.insert(name.clone(), id);
        self.nodes.push(Node { id, name });
        self.out_edges.push(Vec::new());
        self.events.push(NetworkEvent::NodeAdded { node: id });
        Ok(id)
    }

    /// Add a forward edge `(from, to, capacity)` with flow 0.
    ///
    /// Also appends a zero-capacity companion arc `(to, from)` and pairs
    /// the two bidirectionally. Each call creates its own pair: an
    /// opposite-direction edge added earlier by the caller is left alone,
    /// and the two pairs coexist as independent parallel arcs.
    ///
    /// Returns the forward edge's ID.
    pub fn add_edge(
        &mut self,
        from: NodeId,
        to: NodeId,
        capacity: i64,
    ) -> Result<EdgeId, GraphError> {
        self.check_node(from)?;
        self.check_node(to)?;
        if from == to {
            return Err(GraphError::SelfLoop { node: from });
        }
        if capacity < 0 {
            return Err(GraphError::NegativeCapacity { capacity });
        }

        let forward = self.alloc_edge(from, to, capacity);
        let reverse = self.alloc_edge(to, from, 0);
        self.edges[forward.index() as usize].companion = Some(reverse);
        self.edges[reverse.index() as usize].companion = Some(forward);

        self.events.push(NetworkEvent::EdgeAdded {
            edge: forward,
            from,
            to,
            capacity,
        });
        Ok(forward)
    }

    /// Find the first edge in insertion order from `from` to `to`.
    ///
    /// The per-node adjacency list preserves global insertion order among
    /// a node's out-edges, so scanning it gives the same answer as
    /// scanning the full edge sequence.
    pub fn find_edge(&self, from: NodeId, to: NodeId) -> Option<EdgeId> {
        let list = self.out_edges.get(from.index() as usize)?;
        list.iter()
            .copied()
            .find(|&e| self.edges[e.index() as usize].to == to)
    }

    /// Edges leaving `node`, in insertion order. Empty for an unknown node.
    pub fn edges_from(&self, node: NodeId) -> &[EdgeId] {
        self.out_edges
            .get(node.index() as usize)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Residual capacity of an edge, or `None` for an unknown ID.
    pub fn residual(&self, edge: EdgeId) -> Option<i64> {
        self.edge(edge).map(Edge::residual)
    }

    /// Push `amount` units of flow across `edge`.
    ///
    /// This is the only mutator of flow values. It requires
    /// `0 < amount <= residual(edge)` and applies both sides of the
    /// zero-sum invariant within the one call: the edge's flow goes up by
    /// `amount` and its companion's flow goes down by `amount`. If the
    /// edge has no recorded companion, one is located via [`find_edge`]
    /// or created with capacity 0 and paired, then updated.
    ///
    /// A violated precondition is a broken caller contract and fails with
    /// [`GraphError::InvariantViolation`].
    ///
    /// [`find_edge`]: FlowGraph::find_edge
    pub fn push_flow(&mut self, edge: EdgeId, amount: i64) -> Result<(), GraphError> {
        let (from, to, residual) = match self.edge(edge) {
            Some(e) => (e.from, e.to, e.residual()),
            None => {
                return Err(GraphError::InvariantViolation {
                    what: format!("push_flow on unknown edge {edge}"),
                });
            }
        };
        if amount <= 0 || amount > residual {
            return Err(GraphError::InvariantViolation {
                what: format!(
                    "push of {amount} outside (0, {residual}] on edge {from}->{to}"
                ),
            });
        }

        // Resolve the companion before touching flows so no observer can
        // see one side updated without the other.
        let companion = self.resolve_companion(edge, to, from);

        let e = &mut self.edges[edge.index() as usize];
        e.flow += amount;
        let (new_flow, new_residual) = (e.flow, e.capacity - e.flow);
        self.edges[companion.index() as usize].flow -= amount;

        trace!(%edge, amount, new_flow, new_residual, "pushed flow");
        self.events.push(NetworkEvent::FlowPushed {
            edge,
            new_flow,
            new_residual,
        });
        Ok(())
    }

    /// Total capacity leaving `node` over forward arcs.
    ///
    /// An upper bound on achievable flow out of `node`, and therefore on
    /// the number of augmentations any solve starting there can perform
    /// (integer capacities, each augmentation pushes at least one unit).
    pub fn total_capacity_from(&self, node: NodeId) -> i64 {
        self.edges_from(node)
            .iter()
            .map(|&e| self.edges[e.index() as usize].capacity)
            .sum()
    }

    /// Get a node by ID.
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.index() as usize)
    }

    /// Get an edge by ID.
    pub fn edge(&self, id: EdgeId) -> Option<&Edge> {
        self.edges.get(id.index() as usize)
    }

    /// Resolve a node name to its ID.
    pub fn node_by_name(&self, name: &str) -> Option<NodeId> {
        self.by_name.get(name).copied()
    }

    /// All nodes, in insertion order.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// All edges (forward and companion arcs), in insertion order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Drain the event log, oldest first.
    pub fn take_events(&mut self) -> Vec<NetworkEvent> {
        std::mem::take(&mut self.events)
    }

    /// Append an event to the log. Used by the search and driver layers,
    /// which borrow the graph and share its single ordered stream.
    pub fn emit(&mut self, event: NetworkEvent) {
        self.events.push(event);
    }

    fn check_node(&self, id: NodeId) -> Result<(), GraphError> {
        if (id.index() as usize) < self.nodes.len() {
            Ok(())
        } else {
            Err(GraphError::UnknownNode { node: id })
        }
    }

    /// Append an edge without pairing or events. Endpoints must exist.
    fn alloc_edge(&mut self, from: NodeId, to: NodeId, capacity: i64) -> EdgeId {
        let id = EdgeId::from_index(self.edges.len() as u32);
        self.edges.push(Edge {
            id,
            from,
            to,
            capacity,
            flow: 0,
            companion: None,
        });
        self.out_edges[from.index() as usize].push(id);
        id
    }

    /// Companion of `edge`, locating or lazily creating one if none is
    /// recorded. The lazy path covers arcs pushed backwards that were
    /// never explicitly paired; `find_edge` picks the earliest candidate
    /// in insertion order.
    fn resolve_companion(&mut self, edge: EdgeId, to: NodeId, from: NodeId) -> EdgeId {
        if let Some(c) = self.edges[edge.index() as usize].companion {
            return c;
        }
        let companion = match self.find_edge(to, from) {
            Some(c) => c,
            None => self.alloc_edge(to, from, 0),
        };
        self.edges[edge.index() as usize].companion = Some(companion);
        if self.edges[companion.index() as usize].companion.is_none() {
            self.edges[companion.index() as usize].companion = Some(edge);
        }
        companion
    }
}
