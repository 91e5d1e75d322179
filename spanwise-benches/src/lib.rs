//! Benchmark support crate for spanwise.
//!
//! Provides seeded graph instances and parameter types used by the Criterion
//! benchmark that compares the six spanning tree strategies.

pub mod error;
pub mod params;
pub mod source;
