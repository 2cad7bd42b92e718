//! Fixture types for spanning-tree property tests.

use crate::{Graph, Weight};

/// How edge weights are drawn for a generated graph.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum WeightDistribution {
    /// Every edge gets a distinct weight, so the minimum tree is unique.
    Unique,
    /// Weights come from a pool of one to three values, forcing tie-breaks.
    ManyIdentical,
    /// A random spanning path plus a few extra edges.
    Sparse,
    /// Nearly complete graph.
    Dense,
    /// Two or three islands with no edges between them.
    Disconnected,
}

/// A generated graph together with the inputs that produced it.
#[derive(Clone, Debug)]
pub(crate) struct GraphFixture {
    /// Number of vertices.
    pub vertex_count: usize,
    /// Edge triples in insertion order.
    pub triples: Vec<(usize, usize, Weight)>,
    /// Weight distribution used during generation.
    pub distribution: WeightDistribution,
}

impl GraphFixture {
    /// Builds the fixture graph; generators only emit valid triples.
    pub(crate) fn graph(&self) -> Graph {
        match Graph::from_edges(self.vertex_count, self.triples.iter().copied()) {
            Ok(graph) => graph,
            Err(err) => panic!("generated fixture must be a valid graph: {err} ({self:?})"),
        }
    }
}
