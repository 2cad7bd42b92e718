//! Arbor core library.
//!
//! Builds minimum spanning trees with Kruskal's algorithm and repairs them
//! after a single edge removal by swapping in the cheapest edge that
//! reconnects the two halves.
//!
//! ```
//! use arbor_core::{Edge, Graph, build_mst, remove_and_replace};
//!
//! let graph = Graph::from_edges(4, [(0, 1, 1), (0, 2, 3), (1, 2, 2), (1, 3, 4), (2, 3, 5)])?;
//! let tree = build_mst(&graph);
//! assert_eq!(tree.total_weight(), 7);
//!
//! let report = remove_and_replace(&graph, tree.edges(), &Edge::new(1, 2, 2))?;
//! assert_eq!(report.replacement, Some(Edge::new(0, 2, 3)));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

mod components;
mod edge;
mod error;
mod graph;
mod mst;
mod repair;
#[cfg(test)]
mod test_utils;
mod union_find;

pub use crate::{
    components::{ComponentSet, find_components, is_connected},
    edge::{Edge, EdgeKey, MAX_WEIGHT, MIN_WEIGHT, Weight, total_weight},
    error::{
        ComponentError, ComponentErrorCode, DisjointSetError, DisjointSetErrorCode, GraphError,
        GraphErrorCode, RepairError, RepairErrorCode,
    },
    graph::{Graph, GraphBuilder, MAX_VERTICES},
    mst::{SortStrategy, SpanningTree, SpanningTreeBuilder, build_mst},
    repair::{RepairOutcome, RepairReport, ReplacementStatus, TreeRepairer, remove_and_replace},
    union_find::DisjointSet,
};
