//! Benchmark support crate for arbor.
//!
//! Generates seeded synthetic graphs and carries the parameter types used by
//! the Criterion benchmarks for spanning-tree construction and repair.

pub mod error;
pub mod graphs;
pub mod params;
