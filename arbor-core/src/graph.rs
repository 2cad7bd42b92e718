//! Immutable weighted undirected graphs.
//!
//! A [`Graph`] is assembled once through [`GraphBuilder`] and never changes
//! afterwards. It keeps the edge list in insertion order, which is the
//! tie-break order used by both spanning-tree construction and repair, plus a
//! per-vertex adjacency view where every incident edge is oriented away from
//! its vertex.

use std::collections::HashSet;

use crate::{
    edge::{Edge, EdgeKey, MAX_WEIGHT, MIN_WEIGHT, Weight},
    error::GraphError,
};

/// Largest vertex count a [`Graph`] accepts.
pub const MAX_VERTICES: usize = (1 << 31) - 1;

/// Configures and constructs [`Graph`] instances.
///
/// # Examples
/// ```
/// use arbor_core::GraphBuilder;
///
/// let graph = GraphBuilder::new(3)
///     .add_edge(0, 1, 10)?
///     .add_edge(1, 2, 20)?
///     .build()?;
/// assert_eq!(graph.edge_count(), 2);
/// # Ok::<(), arbor_core::GraphError>(())
/// ```
#[derive(Debug, Clone)]
pub struct GraphBuilder {
    vertex_count: usize,
    edges: Vec<Edge>,
    seen: HashSet<EdgeKey>,
}

impl GraphBuilder {
    /// Starts a graph over the vertices `0..vertex_count`.
    #[must_use]
    pub fn new(vertex_count: usize) -> Self {
        Self {
            vertex_count,
            edges: Vec::new(),
            seen: HashSet::new(),
        }
    }

    /// Appends the edge `source -- target` with `weight`.
    ///
    /// # Errors
    /// Returns [`GraphError::VertexOutOfRange`] when an endpoint is outside
    /// `[0, vertex_count)`, [`GraphError::SelfLoop`] when both endpoints are
    /// equal, [`GraphError::WeightOutOfRange`] when `weight` lies outside
    /// [`MIN_WEIGHT`]..=[`MAX_WEIGHT`], and [`GraphError::DuplicateEdge`] when
    /// the pair is already joined, whatever the weight.
    pub fn add_edge(
        mut self,
        source: usize,
        target: usize,
        weight: Weight,
    ) -> Result<Self, GraphError> {
        self.push_edge(source, target, weight)?;
        Ok(self)
    }

    /// Appends every `(source, target, weight)` triple in order.
    ///
    /// # Errors
    /// Returns the first error [`Self::add_edge`] would report.
    pub fn extend_edges<I>(mut self, triples: I) -> Result<Self, GraphError>
    where
        I: IntoIterator<Item = (usize, usize, Weight)>,
    {
        for (source, target, weight) in triples {
            self.push_edge(source, target, weight)?;
        }
        Ok(self)
    }

    /// Finalises the graph.
    ///
    /// # Errors
    /// Returns [`GraphError::EmptyGraph`] when the builder was created with
    /// zero vertices, [`GraphError::TooManyVertices`] above [`MAX_VERTICES`],
    /// and [`GraphError::AdjacencyAllocation`] when the adjacency lists cannot
    /// be allocated.
    pub fn build(self) -> Result<Graph, GraphError> {
        let vertex_count = self.vertex_count;
        if vertex_count == 0 {
            return Err(GraphError::EmptyGraph);
        }
        if vertex_count > MAX_VERTICES {
            return Err(GraphError::TooManyVertices {
                vertex_count,
                limit: MAX_VERTICES,
            });
        }

        let mut adjacency = Vec::new();
        adjacency
            .try_reserve_exact(vertex_count)
            .map_err(|_| GraphError::AdjacencyAllocation { vertex_count })?;
        adjacency.resize_with(vertex_count, Vec::new);
        Ok(Graph::assemble(adjacency, self.edges))
    }

    fn push_edge(&mut self, source: usize, target: usize, weight: Weight) -> Result<(), GraphError> {
        for vertex in [source, target] {
            if vertex >= self.vertex_count {
                return Err(GraphError::VertexOutOfRange {
                    vertex,
                    vertex_count: self.vertex_count,
                });
            }
        }

        let key = EdgeKey::new(source, target);
        if key.is_loop() {
            return Err(GraphError::SelfLoop { vertex: source });
        }
        if !(MIN_WEIGHT..=MAX_WEIGHT).contains(&weight) {
            return Err(GraphError::WeightOutOfRange {
                left: source,
                right: target,
                weight,
                min: MIN_WEIGHT,
                max: MAX_WEIGHT,
            });
        }
        if !self.seen.insert(key) {
            return Err(GraphError::DuplicateEdge {
                left: key.low(),
                right: key.high(),
            });
        }

        self.edges.push(Edge::new(source, target, weight));
        Ok(())
    }
}

/// A weighted undirected graph with a fixed vertex range `0..vertex_count`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Graph {
    vertex_count: usize,
    edges: Vec<Edge>,
    adjacency: Vec<Vec<Edge>>,
}

impl Graph {
    /// Indexes already validated edges into `adjacency`, which holds one
    /// empty list per vertex.
    fn assemble(mut adjacency: Vec<Vec<Edge>>, edges: Vec<Edge>) -> Self {
        let vertex_count = adjacency.len();
        for edge in &edges {
            adjacency[edge.source()].push(*edge);
            adjacency[edge.target()].push(Edge::new(edge.target(), edge.source(), edge.weight()));
        }
        Self {
            vertex_count,
            edges,
            adjacency,
        }
    }

    /// Builds a graph from `(source, target, weight)` triples.
    ///
    /// # Errors
    /// Returns any error reported by [`GraphBuilder::add_edge`] or
    /// [`GraphBuilder::build`].
    ///
    /// # Examples
    /// ```
    /// use arbor_core::{Graph, GraphError};
    ///
    /// let graph = Graph::from_edges(2, [(0, 1, 5)])?;
    /// assert_eq!(graph.vertex_count(), 2);
    ///
    /// let error = Graph::from_edges(2, [(0, 2, 5)]).unwrap_err();
    /// assert_eq!(error, GraphError::VertexOutOfRange { vertex: 2, vertex_count: 2 });
    /// # Ok::<(), GraphError>(())
    /// ```
    pub fn from_edges<I>(vertex_count: usize, triples: I) -> Result<Self, GraphError>
    where
        I: IntoIterator<Item = (usize, usize, Weight)>,
    {
        GraphBuilder::new(vertex_count).extend_edges(triples)?.build()
    }

    /// Returns the six-vertex demonstration graph used by the `demo` command.
    #[must_use]
    pub fn sample() -> Self {
        const SAMPLE_EDGES: [(usize, usize, Weight); 9] = [
            (0, 1, 4),
            (0, 2, 3),
            (1, 2, 1),
            (1, 3, 2),
            (2, 3, 4),
            (2, 4, 5),
            (3, 4, 1),
            (3, 5, 6),
            (4, 5, 2),
        ];
        // In range, loop-free and without duplicates.
        Self::assemble(vec![Vec::new(); 6], SAMPLE_EDGES.into_iter().map(Edge::from).collect())
    }

    /// Returns the number of vertices.
    #[must_use]
    #[rustfmt::skip]
    pub fn vertex_count(&self) -> usize { self.vertex_count }

    /// Returns the number of edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns the edges in insertion order.
    #[must_use]
    #[rustfmt::skip]
    pub fn edges(&self) -> &[Edge] { &self.edges }

    /// Returns `true` when the graph holds exactly this edge (same endpoints in
    /// either order and same weight).
    #[must_use]
    pub fn contains_edge(&self, edge: &Edge) -> bool {
        self.adjacency
            .get(edge.source())
            .is_some_and(|incident| incident.iter().any(|candidate| candidate == edge))
    }

    /// Returns a snapshot of the edges incident to `vertex`, each oriented with
    /// `vertex` as its source.
    ///
    /// # Errors
    /// Returns [`GraphError::VertexOutOfRange`] when `vertex` is outside the
    /// graph.
    ///
    /// # Examples
    /// ```
    /// use arbor_core::Graph;
    ///
    /// let graph = Graph::from_edges(3, [(0, 1, 10), (1, 2, 20)])?;
    /// let incident = graph.adjacent_edges(1)?;
    /// assert_eq!(incident.len(), 2);
    /// assert!(incident.iter().all(|edge| edge.source() == 1));
    /// # Ok::<(), arbor_core::GraphError>(())
    /// ```
    pub fn adjacent_edges(&self, vertex: usize) -> Result<Vec<Edge>, GraphError> {
        self.adjacency
            .get(vertex)
            .cloned()
            .ok_or(GraphError::VertexOutOfRange {
                vertex,
                vertex_count: self.vertex_count,
            })
    }
}
