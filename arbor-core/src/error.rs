//! Error types for the arbor core library.
//!
//! Each public error enum carries a stable machine-readable code so callers
//! can log or branch on failures without matching display strings.

use std::fmt;

use thiserror::Error;

use crate::Weight;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            #[must_use]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// An error produced while building a [`crate::Graph`].
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum GraphError {
    /// The graph was declared with zero vertices.
    #[error("a graph must have at least one vertex")]
    EmptyGraph,
    /// A vertex id fell outside `[0, vertex_count)`.
    #[error("vertex {vertex} is out of range for a graph with {vertex_count} vertices")]
    VertexOutOfRange {
        /// The offending vertex id.
        vertex: usize,
        /// Number of vertices in the graph.
        vertex_count: usize,
    },
    /// An edge joined a vertex to itself.
    #[error("self-loop on vertex {vertex} is not supported")]
    SelfLoop {
        /// The vertex at both ends of the rejected edge.
        vertex: usize,
    },
    /// A second edge joined an already connected vertex pair.
    #[error("vertices {left} and {right} are already joined by an edge")]
    DuplicateEdge {
        /// Smaller endpoint of the pair.
        left: usize,
        /// Larger endpoint of the pair.
        right: usize,
    },
    /// An edge weight fell outside [`crate::MIN_WEIGHT`]..=[`crate::MAX_WEIGHT`].
    #[error("weight {weight} of edge {left}-{right} is outside {min}..={max}")]
    WeightOutOfRange {
        /// First endpoint of the rejected edge.
        left: usize,
        /// Second endpoint of the rejected edge.
        right: usize,
        /// The offending weight.
        weight: Weight,
        /// Smallest accepted weight.
        min: Weight,
        /// Largest accepted weight.
        max: Weight,
    },
    /// The vertex count exceeded [`crate::MAX_VERTICES`].
    #[error("{vertex_count} vertices exceeds the limit of {limit}")]
    TooManyVertices {
        /// Requested number of vertices.
        vertex_count: usize,
        /// Largest accepted vertex count.
        limit: usize,
    },
    /// Memory for the adjacency lists could not be reserved.
    #[error("failed to allocate adjacency for {vertex_count} vertices")]
    AdjacencyAllocation {
        /// Requested number of vertices.
        vertex_count: usize,
    },
}

define_error_codes! {
    /// Stable codes describing [`GraphError`] variants.
    enum GraphErrorCode for GraphError {
        /// The graph was declared with zero vertices.
        EmptyGraph => EmptyGraph => "GRAPH_EMPTY",
        /// A vertex id fell outside the graph.
        VertexOutOfRange => VertexOutOfRange { .. } => "GRAPH_VERTEX_OUT_OF_RANGE",
        /// An edge joined a vertex to itself.
        SelfLoop => SelfLoop { .. } => "GRAPH_SELF_LOOP",
        /// A vertex pair was joined twice.
        DuplicateEdge => DuplicateEdge { .. } => "GRAPH_DUPLICATE_EDGE",
        /// An edge weight was outside the accepted range.
        WeightOutOfRange => WeightOutOfRange { .. } => "GRAPH_WEIGHT_OUT_OF_RANGE",
        /// The vertex count was above the supported limit.
        TooManyVertices => TooManyVertices { .. } => "GRAPH_TOO_MANY_VERTICES",
        /// Adjacency storage could not be allocated.
        AdjacencyAllocation => AdjacencyAllocation { .. } => "GRAPH_ALLOCATION_FAILED",
    }
}

/// An error produced by [`crate::DisjointSet`] queries.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
pub enum DisjointSetError {
    /// The element id was outside the set's universe.
    #[error("element {element} is out of range for a disjoint set of {len} elements")]
    OutOfRange {
        /// The offending element id.
        element: usize,
        /// Number of elements tracked by the set.
        len: usize,
    },
}

define_error_codes! {
    /// Stable codes describing [`DisjointSetError`] variants.
    enum DisjointSetErrorCode for DisjointSetError {
        /// The element id was outside the set's universe.
        OutOfRange => OutOfRange { .. } => "DISJOINT_SET_OUT_OF_RANGE",
    }
}

/// An error produced while partitioning an edge subset into components.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
pub enum ComponentError {
    /// An edge referenced a vertex outside `[0, vertex_count)`.
    #[error("edge references vertex {vertex}, but vertex_count is {vertex_count}")]
    VertexOutOfRange {
        /// The offending vertex id.
        vertex: usize,
        /// Number of vertices being partitioned.
        vertex_count: usize,
    },
    /// The vertex count exceeded [`crate::MAX_VERTICES`].
    #[error("{vertex_count} vertices exceeds the limit of {limit}")]
    TooManyVertices {
        /// Requested number of vertices.
        vertex_count: usize,
        /// Largest accepted vertex count.
        limit: usize,
    },
}

define_error_codes! {
    /// Stable codes describing [`ComponentError`] variants.
    enum ComponentErrorCode for ComponentError {
        /// An edge referenced a vertex outside the partitioned range.
        VertexOutOfRange => VertexOutOfRange { .. } => "COMPONENTS_VERTEX_OUT_OF_RANGE",
        /// The vertex count was above the supported limit.
        TooManyVertices => TooManyVertices { .. } => "COMPONENTS_TOO_MANY_VERTICES",
    }
}

/// An error produced while repairing a spanning tree.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum RepairError {
    /// The edge requested for removal is not part of the current tree.
    #[error("edge {left}-{right} (weight {weight}) is not present in the current tree")]
    EdgeNotInTree {
        /// First endpoint as supplied by the caller.
        left: usize,
        /// Second endpoint as supplied by the caller.
        right: usize,
        /// Weight as supplied by the caller.
        weight: Weight,
    },
    /// The starting tree did not hold exactly `vertex_count - 1` edges.
    #[error("a spanning tree over {vertex_count} vertices needs {expected} edges, got {actual}")]
    TreeSizeMismatch {
        /// Number of vertices in the graph.
        vertex_count: usize,
        /// Required edge count.
        expected: usize,
        /// Supplied edge count.
        actual: usize,
    },
    /// A starting tree edge does not exist in the graph.
    #[error("tree edge {left}-{right} (weight {weight}) does not belong to the graph")]
    EdgeNotInGraph {
        /// First endpoint of the foreign edge.
        left: usize,
        /// Second endpoint of the foreign edge.
        right: usize,
        /// Weight of the foreign edge.
        weight: Weight,
    },
    /// The starting tree edges did not connect every vertex.
    #[error("tree edges leave {components} components instead of one")]
    TreeNotSpanning {
        /// Number of components the supplied edges form.
        components: usize,
    },
}

define_error_codes! {
    /// Stable codes describing [`RepairError`] variants.
    enum RepairErrorCode for RepairError {
        /// The edge requested for removal is not part of the current tree.
        EdgeNotInTree => EdgeNotInTree { .. } => "REPAIR_EDGE_NOT_IN_TREE",
        /// The starting tree had the wrong number of edges.
        TreeSizeMismatch => TreeSizeMismatch { .. } => "REPAIR_TREE_SIZE_MISMATCH",
        /// A starting tree edge does not exist in the graph.
        EdgeNotInGraph => EdgeNotInGraph { .. } => "REPAIR_EDGE_NOT_IN_GRAPH",
        /// The starting tree edges did not connect every vertex.
        TreeNotSpanning => TreeNotSpanning { .. } => "REPAIR_TREE_NOT_SPANNING",
    }
}

impl RepairError {
    /// Returns `true` when the error rejects the starting tree rather than a
    /// removal request.
    #[must_use]
    pub const fn is_invalid_tree(&self) -> bool {
        matches!(
            self,
            Self::TreeSizeMismatch { .. } | Self::EdgeNotInGraph { .. } | Self::TreeNotSpanning { .. }
        )
    }
}
