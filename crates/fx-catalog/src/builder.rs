//! Build a [`FlowGraph`] from a network definition.

use std::collections::HashMap;

use fx_core::NodeId;
use fx_graph::FlowGraph;

use crate::error::CatalogError;
use crate::schema::NetworkDef;

/// A graph built from a definition, with its endpoints resolved.
#[derive(Debug)]
pub struct BuiltNetwork {
    pub graph: FlowGraph,
    pub source: NodeId,
    pub sink: NodeId,
}

/// Apply a definition's construction calls in order and resolve the
/// source and sink names.
///
/// Nodes and edges are added in definition order, so the built graph's
/// search tie-breaks (and therefore its event stream) follow the file.
pub fn build(def: &NetworkDef) -> Result<BuiltNetwork, CatalogError> {
    let mut graph = FlowGraph::new();
    let mut ids: HashMap<&str, NodeId> = HashMap::new();

    for node in &def.nodes {
        let id = graph.add_node(node.id.clone())?;
        ids.insert(node.id.as_str(), id);
    }
    for edge in &def.edges {
        let from = *ids.get(edge.from.as_str()).ok_or_else(|| {
            CatalogError::UnknownEdgeEndpoint {
                network: def.name.clone(),
                name: edge.from.clone(),
            }
        })?;
        let to = *ids.get(edge.to.as_str()).ok_or_else(|| {
            CatalogError::UnknownEdgeEndpoint {
                network: def.name.clone(),
                name: edge.to.clone(),
            }
        })?;
        graph.add_edge(from, to, edge.capacity)?;
    }

    let endpoint = |role: &'static str, name: &str| -> Result<NodeId, CatalogError> {
        ids.get(name)
            .copied()
            .ok_or_else(|| CatalogError::UnknownEndpoint {
                network: def.name.clone(),
                role,
                name: name.to_string(),
            })
    };
    let source = endpoint("source", &def.source)?;
    let sink = endpoint("sink", &def.sink)?;

    Ok(BuiltNetwork {
        graph,
        source,
        sink,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{EdgeDef, NodeDef};

    fn tiny_def() -> NetworkDef {
        NetworkDef {
            name: "tiny".into(),
            nodes: vec![NodeDef::bare("s"), NodeDef::bare("t")],
            edges: vec![EdgeDef {
                from: "s".into(),
                to: "t".into(),
                capacity: 9,
            }],
            source: "s".into(),
            sink: "t".into(),
        }
    }

    #[test]
    fn builds_in_definition_order() {
        let built = build(&tiny_def()).unwrap();
        assert_eq!(built.graph.nodes().len(), 2);
        assert_eq!(built.graph.edges().len(), 2); // forward + companion
        assert_eq!(built.graph.node(built.source).unwrap().name, "s");
        assert_eq!(built.graph.node(built.sink).unwrap().name, "t");
    }

    #[test]
    fn unknown_edge_endpoint_is_reported() {
        let mut def = tiny_def();
        def.edges[0].to = "missing".into();
        assert!(matches!(
            build(&def),
            Err(CatalogError::UnknownEdgeEndpoint { .. })
        ));
    }

    #[test]
    fn unknown_sink_is_reported() {
        let mut def = tiny_def();
        def.sink = "nowhere".into();
        assert!(matches!(
            build(&def),
            Err(CatalogError::UnknownEndpoint { role: "sink", .. })
        ));
    }

    #[test]
    fn duplicate_node_surfaces_graph_error() {
        let mut def = tiny_def();
        def.nodes.push(NodeDef::bare("s"));
        assert!(matches!(build(&def), Err(CatalogError::Graph(_))));
    }
}
