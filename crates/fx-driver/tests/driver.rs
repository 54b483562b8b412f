//! Integration tests for fx-driver: equivalence with the batch solver,
//! cancellation, and determinism.

use fx_core::NodeId;
use fx_driver::{DriverState, FlowDriver, StepSize};
use fx_graph::{FlowGraph, NetworkEvent};
use fx_solver::compute_max_flow;

/// s->A(10), s->B(5), A->C(5), A->B(15), B->D(10), C->t(10), D->t(10).
fn layered_network() -> (FlowGraph, NodeId, NodeId) {
    let mut g = FlowGraph::new();
    let s = g.add_node("s").unwrap();
    let a = g.add_node("A").unwrap();
    let b = g.add_node("B").unwrap();
    let c = g.add_node("C").unwrap();
    let d = g.add_node("D").unwrap();
    let t = g.add_node("t").unwrap();
    g.add_edge(s, a, 10).unwrap();
    g.add_edge(s, b, 5).unwrap();
    g.add_edge(a, c, 5).unwrap();
    g.add_edge(a, b, 15).unwrap();
    g.add_edge(b, d, 10).unwrap();
    g.add_edge(c, t, 10).unwrap();
    g.add_edge(d, t, 10).unwrap();
    (g, s, t)
}

fn final_flows(g: &FlowGraph) -> Vec<i64> {
    g.edges().iter().map(|e| e.flow).collect()
}

#[test]
fn driver_matches_batch_solver() {
    let (mut batch, s, t) = layered_network();
    let batch_total = compute_max_flow(&mut batch, s, t).unwrap();

    let (mut stepped, s2, t2) = layered_network();
    let mut driver = FlowDriver::new(&mut stepped);
    driver.start(s2, t2).unwrap();
    let driven_total = driver.run_to_completion().unwrap();

    assert_eq!(driven_total, batch_total);
    assert_eq!(driven_total, 15);
    assert_eq!(final_flows(&stepped), final_flows(&batch));
}

#[test]
fn unit_steps_reach_the_same_answer() {
    let (mut batch, s, t) = layered_network();
    compute_max_flow(&mut batch, s, t).unwrap();

    let (mut stepped, s2, t2) = layered_network();
    let mut driver = FlowDriver::with_step(&mut stepped, StepSize::Unit);
    driver.start(s2, t2).unwrap();
    assert_eq!(driver.run_to_completion().unwrap(), 15);

    assert_eq!(final_flows(&stepped), final_flows(&batch));
}

#[test]
fn fixed_step_is_clamped_and_converges() {
    let (mut g, s, t) = layered_network();
    let mut driver = FlowDriver::with_step(&mut g, StepSize::Fixed(4));
    driver.start(s, t).unwrap();
    assert_eq!(driver.run_to_completion().unwrap(), 15);
}

#[test]
fn identical_runs_touch_identical_edges() {
    let run = || {
        let (mut g, s, t) = layered_network();
        let mut driver = FlowDriver::new(&mut g);
        driver.start(s, t).unwrap();
        driver.run_to_completion().unwrap();
        driver.take_events()
    };
    assert_eq!(run(), run());
}

#[test]
fn cancel_at_a_path_boundary_then_resume() {
    let (mut g, s, t) = layered_network();
    let mut driver = FlowDriver::new(&mut g);
    driver.start(s, t).unwrap();

    // Advance until the first traversal banks into the total, leaving the
    // driver at the start of a freshly captured second path.
    while driver.total_flow() == 0 {
        driver.advance().unwrap();
    }
    let banked = driver.total_flow();
    assert!(banked > 0);

    driver.cancel();
    assert_eq!(driver.state(), DriverState::Idle);

    // Resuming works against the partially-augmented residual graph and
    // does not re-push what was already applied.
    driver.start(s, t).unwrap();
    let total = driver.run_to_completion().unwrap();
    assert_eq!(total, 15);

    for e in driver.graph().edges() {
        assert!(e.residual() >= 0);
        let companion = driver.graph().edge(e.companion().unwrap()).unwrap();
        assert_eq!(e.flow + companion.flow, 0);
    }
}

#[test]
fn event_stream_shape() {
    let (mut g, s, t) = layered_network();
    let mut driver = FlowDriver::new(&mut g);
    driver.take_events(); // drop construction events
    driver.start(s, t).unwrap();
    driver.run_to_completion().unwrap();

    let events = driver.take_events();
    assert!(matches!(events.first(), Some(NetworkEvent::PathFound { .. })));
    let n = events.len();
    assert!(matches!(
        events[n - 2],
        NetworkEvent::NoAugmentingPath { total: 15 }
    ));
    assert!(matches!(events[n - 1], NetworkEvent::Completed { total: 15 }));

    // Every path is followed by exactly one FlowPushed per edge.
    let mut expected_pushes = 0;
    let mut pushes = 0;
    for event in &events {
        match event {
            NetworkEvent::PathFound { edges } => expected_pushes += edges.len(),
            NetworkEvent::FlowPushed { .. } => pushes += 1,
            _ => {}
        }
    }
    assert_eq!(pushes, expected_pushes);
}
