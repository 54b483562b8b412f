//! Augmenting-path search for fluxnet networks.
//!
//! This crate provides the stateless search half of the engine: a
//! breadth-first shortest augmenting path over a network's residual arcs,
//! and a batch Edmonds-Karp driver that drains the network to its maximum
//! flow in one call. The stepwise, cancellable counterpart lives in
//! `fx-driver` and is built on the same search.

pub mod error;
pub mod maxflow;
pub mod path;

pub use error::{SolveError, SolveResult};
pub use maxflow::compute_max_flow;
pub use path::find_augmenting_path;
