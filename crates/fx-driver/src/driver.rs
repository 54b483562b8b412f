//! The cooperative flow-augmentation state machine.

use fx_core::{EdgeId, NodeId};
use fx_graph::{FlowGraph, GraphError, NetworkEvent};
use fx_solver::find_augmenting_path;
use tracing::debug;

use crate::error::{DriverError, DriverResult};

/// Observable driver states.
///
/// `PathPending` is the transient discovery state between finishing one
/// path and committing to the next; `start` and `advance` resolve it
/// before returning, so callers only ever see it from inside the driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriverState {
    /// No computation in progress.
    Idle,
    /// A path discovery is due.
    PathPending,
    /// A captured path is being applied edge by edge.
    Augmenting,
    /// No augmenting path remains; the total is final.
    Completed,
}

/// How much flow one traversal of a path pushes across each of its edges.
///
/// Whatever the policy, the amount actually pushed is clamped to the
/// path's bottleneck at capture time, and is the same for every edge of
/// the traversal (anything else would break conservation mid-path).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StepSize {
    /// The whole bottleneck in one traversal (batch behavior).
    #[default]
    Bottleneck,
    /// One unit per traversal: the path is re-discovered and re-walked
    /// until saturated. This is the granularity the animation uses.
    Unit,
    /// A fixed amount per traversal, clamped to `1..=bottleneck`.
    Fixed(i64),
}

/// Cooperative single-step driver over a borrowed [`FlowGraph`].
///
/// `Idle -> PathPending -> Augmenting -> ... -> PathPending -> ... ->
/// Completed`; [`cancel`](FlowDriver::cancel) returns to `Idle` from any
/// state. Flow already pushed stays in the graph — only the driver's own
/// bookkeeping is discarded.
///
/// The running total persists across `start` calls so a cancelled
/// computation can resume against the partially-augmented graph. A wholly
/// new problem takes a fresh driver.
#[derive(Debug)]
pub struct FlowDriver<'g> {
    graph: &'g mut FlowGraph,
    state: DriverState,
    step: StepSize,
    endpoints: Option<(NodeId, NodeId)>,
    path: Vec<EdgeId>,
    cursor: usize,
    /// Amount each edge of the current traversal receives.
    increment: i64,
    total: i64,
}

impl<'g> FlowDriver<'g> {
    /// Create an idle driver with the default (bottleneck) step size.
    pub fn new(graph: &'g mut FlowGraph) -> Self {
        Self::with_step(graph, StepSize::default())
    }

    /// Create an idle driver with an explicit step size.
    pub fn with_step(graph: &'g mut FlowGraph, step: StepSize) -> Self {
        Self {
            graph,
            state: DriverState::Idle,
            step,
            endpoints: None,
            path: Vec::new(),
            cursor: 0,
            increment: 0,
            total: 0,
        }
    }

    /// Current state.
    pub fn state(&self) -> DriverState {
        self.state
    }

    /// Flow accumulated by completed traversals so far.
    pub fn total_flow(&self) -> i64 {
        self.total
    }

    /// Read access to the borrowed graph.
    pub fn graph(&self) -> &FlowGraph {
        self.graph
    }

    /// Drain the graph's event log (construction, paths, pushes,
    /// completion) accumulated since the last drain.
    pub fn take_events(&mut self) -> Vec<NetworkEvent> {
        self.graph.take_events()
    }

    /// Begin (or resume) computing flow from `source` to `sink`.
    ///
    /// Valid from `Idle` or `Completed`. Runs a path discovery: if the
    /// sink is unreachable the driver emits `NoAugmentingPath` and
    /// `Completed` and finishes immediately; otherwise it captures the
    /// path, emits `PathFound`, and is ready for [`advance`].
    ///
    /// [`advance`]: FlowDriver::advance
    pub fn start(&mut self, source: NodeId, sink: NodeId) -> DriverResult<DriverState> {
        match self.state {
            DriverState::Idle | DriverState::Completed => {}
            actual => {
                return Err(DriverError::InvalidState {
                    op: "start",
                    expected: "Idle or Completed",
                    actual,
                });
            }
        }
        for id in [source, sink] {
            if self.graph.node(id).is_none() {
                return Err(GraphError::UnknownNode { node: id }.into());
            }
        }
        self.endpoints = Some((source, sink));
        self.state = DriverState::PathPending;
        self.discover();
        Ok(self.state)
    }

    /// Push one increment of flow across the edge at the cursor.
    ///
    /// Valid only while `Augmenting`. Emits `FlowPushed` for the touched
    /// edge. When the push completes the current path, the traversal's
    /// increment is added to the running total and discovery re-runs as
    /// in `start`, so the returned state is `Augmenting` (a next path or
    /// the same one, not yet saturated) or `Completed`.
    pub fn advance(&mut self) -> DriverResult<DriverState> {
        if self.state != DriverState::Augmenting {
            return Err(DriverError::InvalidState {
                op: "advance",
                expected: "Augmenting",
                actual: self.state,
            });
        }
        let edge = self.path[self.cursor];
        self.graph.push_flow(edge, self.increment)?;
        self.cursor += 1;

        if self.cursor == self.path.len() {
            self.total += self.increment;
            self.state = DriverState::PathPending;
            self.discover();
        }
        Ok(self.state)
    }

    /// Discard the in-progress path and return to `Idle`.
    ///
    /// Flow pushed by prior `advance` calls stays in the graph — it was a
    /// legitimate mutation; only the driver's progress bookkeeping goes.
    /// Synchronous and immediate: there is never anything in flight to
    /// wait for.
    pub fn cancel(&mut self) {
        self.path.clear();
        self.cursor = 0;
        self.increment = 0;
        self.endpoints = None;
        self.state = DriverState::Idle;
    }

    /// Advance until `Completed` and return the accumulated total.
    ///
    /// Equivalent to the batch solver: same final total, same per-edge
    /// flows, for any step size.
    pub fn run_to_completion(&mut self) -> DriverResult<i64> {
        while self.state == DriverState::Augmenting {
            self.advance()?;
        }
        Ok(self.total)
    }

    /// Resolve `PathPending`: capture the next augmenting path or finish.
    fn discover(&mut self) {
        debug_assert_eq!(self.state, DriverState::PathPending);
        let Some((source, sink)) = self.endpoints else {
            self.state = DriverState::Idle;
            return;
        };

        match find_augmenting_path(self.graph, source, sink) {
            Some(path) => {
                let mut bottleneck = i64::MAX;
                for &eid in &path {
                    if let Some(residual) = self.graph.residual(eid) {
                        bottleneck = bottleneck.min(residual);
                    }
                }
                self.increment = match self.step {
                    StepSize::Bottleneck => bottleneck,
                    StepSize::Unit => 1,
                    StepSize::Fixed(amount) => amount.clamp(1, bottleneck),
                };
                debug!(
                    edges = path.len(),
                    bottleneck,
                    increment = self.increment,
                    "captured augmenting path"
                );
                self.graph.emit(NetworkEvent::PathFound {
                    edges: path.clone(),
                });
                self.path = path;
                self.cursor = 0;
                self.state = DriverState::Augmenting;
            }
            None => {
                debug!(total = self.total, "no augmenting path remains");
                self.graph
                    .emit(NetworkEvent::NoAugmentingPath { total: self.total });
                self.graph.emit(NetworkEvent::Completed { total: self.total });
                self.path.clear();
                self.cursor = 0;
                self.state = DriverState::Completed;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn single_edge() -> (FlowGraph, NodeId, NodeId) {
        let mut g = FlowGraph::new();
        let s = g.add_node("s").unwrap();
        let t = g.add_node("t").unwrap();
        g.add_edge(s, t, 3).unwrap();
        (g, s, t)
    }

    #[test]
    fn advance_before_start_is_invalid() {
        let (mut g, _, _) = single_edge();
        let mut driver = FlowDriver::new(&mut g);
        assert!(matches!(
            driver.advance(),
            Err(DriverError::InvalidState { op: "advance", .. })
        ));
    }

    #[test]
    fn start_twice_is_invalid_while_augmenting() {
        let (mut g, s, t) = single_edge();
        let mut driver = FlowDriver::new(&mut g);
        assert_eq!(driver.start(s, t).unwrap(), DriverState::Augmenting);
        assert!(matches!(
            driver.start(s, t),
            Err(DriverError::InvalidState { op: "start", .. })
        ));
    }

    #[test]
    fn single_edge_network_completes_in_one_advance() {
        let (mut g, s, t) = single_edge();
        let mut driver = FlowDriver::new(&mut g);
        driver.start(s, t).unwrap();
        assert_eq!(driver.advance().unwrap(), DriverState::Completed);
        assert_eq!(driver.total_flow(), 3);
    }

    #[test]
    fn unit_step_retraverses_until_saturated() {
        let (mut g, s, t) = single_edge();
        let mut driver = FlowDriver::with_step(&mut g, StepSize::Unit);
        driver.start(s, t).unwrap();

        // Capacity 3, one edge, one unit per traversal: three advances.
        assert_eq!(driver.advance().unwrap(), DriverState::Augmenting);
        assert_eq!(driver.advance().unwrap(), DriverState::Augmenting);
        assert_eq!(driver.advance().unwrap(), DriverState::Completed);
        assert_eq!(driver.total_flow(), 3);
    }

    #[test]
    fn disconnected_start_completes_immediately() {
        let mut g = FlowGraph::new();
        let s = g.add_node("s").unwrap();
        let t = g.add_node("t").unwrap();
        let mut driver = FlowDriver::new(&mut g);

        assert_eq!(driver.start(s, t).unwrap(), DriverState::Completed);
        assert_eq!(driver.total_flow(), 0);

        let events = driver.take_events();
        assert!(
            events.contains(&NetworkEvent::NoAugmentingPath { total: 0 }),
            "missing terminal signal in {events:?}"
        );
    }

    #[test]
    fn start_rejects_unknown_endpoints() {
        let (mut g, s, _) = single_edge();
        let mut driver = FlowDriver::new(&mut g);
        let bogus = NodeId::from_index(50);
        assert!(matches!(
            driver.start(s, bogus),
            Err(DriverError::Graph(GraphError::UnknownNode { .. }))
        ));
        assert_eq!(driver.state(), DriverState::Idle);
    }

    #[test]
    fn cancel_returns_to_idle_and_keeps_pushed_flow() {
        let mut g = FlowGraph::new();
        let s = g.add_node("s").unwrap();
        let a = g.add_node("a").unwrap();
        let t = g.add_node("t").unwrap();
        let sa = g.add_edge(s, a, 2).unwrap();
        g.add_edge(a, t, 2).unwrap();

        let mut driver = FlowDriver::new(&mut g);
        driver.start(s, t).unwrap();
        driver.advance().unwrap(); // pushed s->a only
        driver.cancel();
        assert_eq!(driver.state(), DriverState::Idle);

        // The half-applied traversal contributed nothing to the total,
        // but the push itself stays.
        assert_eq!(driver.total_flow(), 0);
        assert_eq!(driver.graph().edge(sa).unwrap().flow, 2);
    }
}
