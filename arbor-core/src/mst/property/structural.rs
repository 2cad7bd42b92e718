//! Structural invariants of a built spanning tree or forest.
//!
//! Every accepted edge must come from the graph, the accepted set must be
//! acyclic, and the edge count must equal `V - C` for `C` components. The
//! tree is valid exactly when the graph is connected.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::{Edge, build_mst, find_components, total_weight};

use super::oracle::find_root;
use super::types::GraphFixture;

/// Runs every structural check against the tree built from `fixture`.
pub(super) fn run_structural_invariants_property(fixture: &GraphFixture) -> TestCaseResult {
    let graph = fixture.graph();
    let tree = build_mst(&graph);

    for edge in tree.edges() {
        if !graph.contains_edge(edge) {
            return Err(TestCaseError::fail(format!("tree edge {edge} is not in the graph")));
        }
    }
    validate_acyclicity(graph.vertex_count(), tree.edges())?;

    let components = find_components(graph.vertex_count(), graph.edges())
        .map_err(|err| TestCaseError::fail(format!("component search failed: {err}")))?;
    let expected_len = graph.vertex_count() - components.len();
    if tree.len() != expected_len {
        return Err(TestCaseError::fail(format!(
            "tree holds {} edges, expected {expected_len} for {} components",
            tree.len(),
            components.len(),
        )));
    }
    if tree.is_valid() != components.is_connected() {
        return Err(TestCaseError::fail(format!(
            "validity {} does not match connectivity {}",
            tree.is_valid(),
            components.is_connected(),
        )));
    }
    if tree.total_weight() != total_weight(tree.edges()) {
        return Err(TestCaseError::fail("cached total weight drifted from edge sum"));
    }
    Ok(())
}

fn validate_acyclicity(vertex_count: usize, edges: &[Edge]) -> TestCaseResult {
    let mut parent: Vec<usize> = (0..vertex_count).collect();
    for (index, edge) in edges.iter().enumerate() {
        let left = find_root(&mut parent, edge.source());
        let right = find_root(&mut parent, edge.target());
        if left == right {
            return Err(TestCaseError::fail(format!(
                "edge {index} ({edge}) closes a cycle"
            )));
        }
        parent[right] = left;
    }
    Ok(())
}
