//! fx-catalog: network definitions and preset topologies.
//!
//! A [`NetworkDef`] is plain construction input — node identifiers,
//! `(from, to, capacity)` triples, and the source/sink names — consumed
//! read-only through the graph's construction calls. Definitions travel
//! as JSON for external loaders; the built [`fx_graph::FlowGraph`] itself
//! is never serialized.
//!
//! Node definitions may carry optional canvas coordinates. They are
//! caller-side presentation metadata, passed through opaquely; nothing in
//! the engine reads them.

pub mod builder;
pub mod error;
pub mod presets;
pub mod schema;

pub use builder::{BuiltNetwork, build};
pub use error::CatalogError;
pub use presets::{preset, presets};
pub use schema::{EdgeDef, NetworkDef, NodeDef};
