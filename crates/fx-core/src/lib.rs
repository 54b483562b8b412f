//! fx-core: stable foundation for fluxnet.
//!
//! Contains:
//! - ids (stable compact IDs for graph objects)
//! - error (shared error types)

pub mod error;
pub mod ids;

// Re-exports: nice ergonomics for downstream crates
pub use error::{FxError, FxResult};
pub use ids::*;
