//! fx-driver: stepwise flow augmentation for fluxnet.
//!
//! A single-threaded cooperative state machine that decouples "compute one
//! augmenting path" from "apply it edge by edge". Each [`FlowDriver::advance`]
//! call pushes flow across exactly one edge and returns, so the caller's own
//! scheduling loop (an animation tick, a timer, or a tight loop for batch
//! use) decides when the next step happens. There are no internal threads,
//! locks, or blocking waits; cancellation is synchronous.

pub mod driver;
pub mod error;

pub use driver::{DriverState, FlowDriver, StepSize};
pub use error::{DriverError, DriverResult};
