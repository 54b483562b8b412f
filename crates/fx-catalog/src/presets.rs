//! Built-in example topologies.
//!
//! Three classroom networks of increasing size, source `s` to sink `t`,
//! with canvas coordinates for callers that render them.

use crate::schema::{EdgeDef, NetworkDef, NodeDef};

fn edge(from: &str, to: &str, capacity: i64) -> EdgeDef {
    EdgeDef {
        from: from.into(),
        to: to.into(),
        capacity,
    }
}

/// Six nodes, two layers; maximum flow 15.
fn diamond() -> NetworkDef {
    NetworkDef {
        name: "diamond".into(),
        nodes: vec![
            NodeDef::at("s", 50.0, 200.0),
            NodeDef::at("t", 500.0, 200.0),
            NodeDef::at("A", 200.0, 100.0),
            NodeDef::at("B", 200.0, 300.0),
            NodeDef::at("C", 350.0, 100.0),
            NodeDef::at("D", 350.0, 300.0),
        ],
        edges: vec![
            edge("s", "A", 10),
            edge("s", "B", 5),
            edge("A", "C", 5),
            edge("A", "B", 15),
            edge("B", "D", 10),
            edge("C", "t", 10),
            edge("D", "t", 10),
        ],
        source: "s".into(),
        sink: "t".into(),
    }
}

/// Seven nodes with a tight sink-side cut; maximum flow 11.
fn classic_cut() -> NetworkDef {
    NetworkDef {
        name: "classic-cut".into(),
        nodes: vec![
            NodeDef::at("s", 50.0, 200.0),
            NodeDef::at("t", 500.0, 200.0),
            NodeDef::at("A", 150.0, 100.0),
            NodeDef::at("B", 150.0, 300.0),
            NodeDef::at("C", 300.0, 200.0),
            NodeDef::at("D", 450.0, 100.0),
            NodeDef::at("E", 450.0, 300.0),
        ],
        edges: vec![
            edge("s", "A", 16),
            edge("s", "B", 13),
            edge("A", "C", 12),
            edge("B", "C", 4),
            edge("B", "E", 14),
            edge("C", "D", 20),
            edge("D", "t", 7),
            edge("E", "t", 4),
        ],
        source: "s".into(),
        sink: "t".into(),
    }
}

/// Ten nodes, two bottleneck funnels; maximum flow 20.
fn double_diamond() -> NetworkDef {
    NetworkDef {
        name: "double-diamond".into(),
        nodes: vec![
            NodeDef::at("s", 50.0, 200.0),
            NodeDef::at("t", 600.0, 200.0),
            NodeDef::at("A", 150.0, 100.0),
            NodeDef::at("B", 150.0, 300.0),
            NodeDef::at("C", 250.0, 200.0),
            NodeDef::at("D", 350.0, 100.0),
            NodeDef::at("E", 350.0, 300.0),
            NodeDef::at("F", 450.0, 200.0),
            NodeDef::at("G", 550.0, 100.0),
            NodeDef::at("H", 550.0, 300.0),
        ],
        edges: vec![
            edge("s", "A", 10),
            edge("s", "B", 15),
            edge("A", "C", 20),
            edge("B", "C", 10),
            edge("C", "D", 15),
            edge("C", "E", 5),
            edge("D", "F", 25),
            edge("E", "F", 15),
            edge("F", "G", 20),
            edge("F", "H", 10),
            edge("G", "t", 15),
            edge("H", "t", 25),
        ],
        source: "s".into(),
        sink: "t".into(),
    }
}

/// All built-in example networks, smallest first.
pub fn presets() -> Vec<NetworkDef> {
    vec![diamond(), classic_cut(), double_diamond()]
}

/// Look up a preset by name.
pub fn preset(name: &str) -> Option<NetworkDef> {
    presets().into_iter().find(|p| p.name == name)
}
