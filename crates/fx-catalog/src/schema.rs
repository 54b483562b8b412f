//! Network definition schema.

use serde::{Deserialize, Serialize};

/// A complete network definition: construction input plus endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NetworkDef {
    pub name: String,
    #[serde(default)]
    pub nodes: Vec<NodeDef>,
    #[serde(default)]
    pub edges: Vec<EdgeDef>,
    pub source: String,
    pub sink: String,
}

/// A node identifier plus optional presentation coordinates.
///
/// `x`/`y` are opaque to the engine; they exist so a rendering caller can
/// round-trip its layout through the same file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NodeDef {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
}

/// A `(from, to, capacity)` triple.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EdgeDef {
    pub from: String,
    pub to: String,
    pub capacity: i64,
}

impl NetworkDef {
    /// Parse a definition from JSON.
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Render the definition as pretty-printed JSON.
    pub fn to_json_string(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

impl NodeDef {
    /// A node with no layout metadata.
    pub fn bare(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            x: None,
            y: None,
        }
    }

    /// A node with canvas coordinates.
    pub fn at(id: impl Into<String>, x: f64, y: f64) -> Self {
        Self {
            id: id.into(),
            x: Some(x),
            y: Some(y),
        }
    }
}
