//! Minimum spanning tree construction (Kruskal's algorithm).
//!
//! Edges are stably sorted by weight, so equal-weight edges keep the graph's
//! insertion order; that order is the only tie-break. The scan over the sorted
//! edges is sequential because the order of unions decides which of several
//! equal-weight edges enters the tree. Only the sort may run in parallel, and
//! only through Rayon's stable sort.

use tracing::{Span, debug, field, info, instrument};

use crate::{
    edge::{Edge, Weight, total_weight},
    graph::Graph,
    union_find::DisjointSet,
};

/// Selects how [`SpanningTreeBuilder`] sorts the edge list.
///
/// `Parallel` uses Rayon's stable parallel sort when the `parallel` feature is
/// enabled and falls back to the sequential stable sort otherwise, so the
/// resulting tree is identical either way.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortStrategy {
    /// Sort on the calling thread.
    #[default]
    Sequential,
    /// Sort with Rayon when available.
    Parallel,
}

impl SortStrategy {
    /// Returns the strategy that will actually run in this build.
    #[must_use]
    pub const fn effective(self) -> Self {
        match self {
            Self::Parallel if cfg!(feature = "parallel") => Self::Parallel,
            _ => Self::Sequential,
        }
    }

    /// Returns a stable label for logs.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sequential => "sequential",
            Self::Parallel => "parallel",
        }
    }
}

/// Configures and runs Kruskal's algorithm.
///
/// # Examples
/// ```
/// use arbor_core::{Graph, SortStrategy, SpanningTreeBuilder};
///
/// let graph = Graph::from_edges(3, [(0, 1, 1), (1, 2, 2), (0, 2, 3)])?;
/// let tree = SpanningTreeBuilder::new()
///     .with_sort_strategy(SortStrategy::Parallel)
///     .build(&graph);
/// assert!(tree.is_valid());
/// assert_eq!(tree.total_weight(), 3);
/// # Ok::<(), arbor_core::GraphError>(())
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct SpanningTreeBuilder {
    sort_strategy: SortStrategy,
}

impl SpanningTreeBuilder {
    /// Creates a builder with sequential sorting.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the sort strategy.
    #[must_use]
    pub const fn with_sort_strategy(mut self, sort_strategy: SortStrategy) -> Self {
        self.sort_strategy = sort_strategy;
        self
    }

    /// Returns the configured sort strategy.
    #[must_use]
    #[rustfmt::skip]
    pub const fn sort_strategy(&self) -> SortStrategy { self.sort_strategy }

    /// Builds a minimum spanning tree of `graph`, or a minimum spanning forest
    /// when the graph is disconnected.
    #[instrument(
        name = "mst.build",
        skip(self, graph),
        fields(
            vertex_count = graph.vertex_count(),
            edge_count = graph.edge_count(),
            strategy = field::Empty,
            accepted = field::Empty,
        ),
    )]
    pub fn build(&self, graph: &Graph) -> SpanningTree {
        let strategy = self.sort_strategy.effective();
        let span = Span::current();
        span.record("strategy", strategy.as_str());

        let sorted = sort_by_weight(graph.edges(), strategy);
        let vertex_count = graph.vertex_count();
        let target = vertex_count.saturating_sub(1);
        let mut components = DisjointSet::new(vertex_count);
        let mut accepted = Vec::with_capacity(target.min(graph.edge_count()));

        for edge in sorted {
            if accepted.len() >= target {
                break;
            }
            // Graph construction guarantees in-range endpoints.
            if components.merge(edge.source(), edge.target()) {
                debug!(edge = %edge, "accepted tree edge");
                accepted.push(edge);
            }
        }

        let tree = SpanningTree::new(vertex_count, accepted);
        span.record("accepted", tree.len());
        info!(
            total_weight = tree.total_weight(),
            valid = tree.is_valid(),
            "spanning tree built"
        );
        tree
    }
}

fn sort_by_weight(edges: &[Edge], strategy: SortStrategy) -> Vec<Edge> {
    let mut sorted = edges.to_vec();
    match strategy {
        #[cfg(feature = "parallel")]
        SortStrategy::Parallel => {
            use rayon::slice::ParallelSliceMut;
            sorted.par_sort_by(Edge::weight_cmp);
        }
        _ => sorted.sort_by(Edge::weight_cmp),
    }
    sorted
}

/// Builds a minimum spanning tree of `graph` with the default configuration.
///
/// # Examples
/// ```
/// use arbor_core::{Edge, Graph, build_mst};
///
/// let graph = Graph::from_edges(4, [(0, 1, 1), (0, 2, 3), (1, 2, 2), (1, 3, 4), (2, 3, 5)])?;
/// let tree = build_mst(&graph);
/// assert_eq!(tree.edges(), &[Edge::new(0, 1, 1), Edge::new(1, 2, 2), Edge::new(1, 3, 4)]);
/// assert_eq!(tree.total_weight(), 7);
/// # Ok::<(), arbor_core::GraphError>(())
/// ```
#[must_use]
pub fn build_mst(graph: &Graph) -> SpanningTree {
    SpanningTreeBuilder::new().build(graph)
}

/// The edges selected by Kruskal's algorithm, in acceptance order.
///
/// The tree is valid when it spans every vertex, i.e. holds
/// `vertex_count - 1` edges. Fewer edges mean the graph was disconnected and
/// the result is a spanning forest.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SpanningTree {
    vertex_count: usize,
    edges: Vec<Edge>,
    total_weight: Weight,
}

impl SpanningTree {
    fn new(vertex_count: usize, edges: Vec<Edge>) -> Self {
        let total_weight = total_weight(&edges);
        Self {
            vertex_count,
            edges,
            total_weight,
        }
    }

    /// Returns the tree edges in acceptance order.
    #[must_use]
    #[rustfmt::skip]
    pub fn edges(&self) -> &[Edge] { &self.edges }

    /// Consumes the tree, returning its edges.
    #[must_use]
    pub fn into_edges(self) -> Vec<Edge> {
        self.edges
    }

    /// Returns the number of tree edges.
    #[must_use]
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Returns `true` when no edge was accepted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Returns the sum of the accepted edge weights.
    #[must_use]
    #[rustfmt::skip]
    pub fn total_weight(&self) -> Weight { self.total_weight }

    /// Returns the number of vertices the tree was built over.
    #[must_use]
    #[rustfmt::skip]
    pub fn vertex_count(&self) -> usize { self.vertex_count }

    /// Returns `true` when the tree spans every vertex.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.edges.len() == self.vertex_count.saturating_sub(1)
    }

    /// Returns the edge at position `len / 2`, the default removal target of
    /// the demo and report commands.
    #[must_use]
    pub fn middle_edge(&self) -> Option<Edge> {
        self.edges.get(self.edges.len() / 2).copied()
    }
}

#[cfg(test)]
pub(crate) mod property;
