//! Benchmark parameter types.

use std::fmt;

/// Parameters for a spanning-tree or repair benchmark run.
#[derive(Clone, Debug)]
pub struct GraphBenchParams {
    /// Number of vertices in the graph.
    pub vertex_count: usize,
    /// Extra random edges added per vertex on top of the spanning path.
    pub density: usize,
}

impl fmt::Display for GraphBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={},d={}", self.vertex_count, self.density)
    }
}
