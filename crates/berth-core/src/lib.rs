//! Berth Core
//!
//! Shared foundations for the Berth docking engine: geometry primitives,
//! math re-exports, fast hash collections, logging and profiling setup.

pub mod alloc;
pub mod config;
pub mod geometry;
pub mod logging;
pub mod math;
pub mod profiling;
