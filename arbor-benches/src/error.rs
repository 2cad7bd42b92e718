//! Benchmark setup error type.
//!
//! Lets setup functions propagate failures with `?` instead of panicking
//! halfway through a Criterion group.

use arbor_core::{GraphError, RepairError};

/// Errors that may occur during benchmark setup.
#[derive(Debug, thiserror::Error)]
pub enum BenchSetupError {
    /// The synthetic graph configuration was rejected.
    #[error("synthetic graph generation failed: {0}")]
    Graph(#[from] GraphError),
    /// Building the repairer or removing the edge failed.
    #[error("tree repair failed: {0}")]
    Repair(#[from] RepairError),
    /// The generated graph had no spanning tree.
    #[error("synthetic graph with {vertex_count} vertices is disconnected")]
    Disconnected {
        /// Vertex count of the offending graph.
        vertex_count: usize,
    },
    /// The spanning tree had no edge to remove.
    #[error("spanning tree has no edges")]
    EmptyTree,
}
