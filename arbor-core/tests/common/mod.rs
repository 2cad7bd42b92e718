use arbor_core::{Graph, Weight};

/// Four vertices, five edges; the minimum spanning tree weighs 7.
pub const REFERENCE_EDGES: [(usize, usize, Weight); 5] =
    [(0, 1, 1), (0, 2, 3), (1, 2, 2), (1, 3, 4), (2, 3, 5)];

#[must_use]
pub fn graph(vertex_count: usize, triples: &[(usize, usize, Weight)]) -> Graph {
    match Graph::from_edges(vertex_count, triples.iter().copied()) {
        Ok(graph) => graph,
        Err(err) => panic!("fixture graph must be valid: {err}"),
    }
}

#[must_use]
pub fn reference_graph() -> Graph {
    graph(4, &REFERENCE_EDGES)
}
