//! Oracle and strategy equivalence.
//!
//! The tree Kruskal builds must weigh exactly as much as the lightest tree the
//! brute-force oracle finds, and every sort strategy must pick the very same
//! edges in the same order.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::{SortStrategy, SpanningTreeBuilder, build_mst};

use super::oracle::brute_force_mst_weight;
use super::types::GraphFixture;

/// Checks Kruskal's total weight against the brute-force minimum.
pub(super) fn run_oracle_equivalence_property(fixture: &GraphFixture) -> TestCaseResult {
    let graph = fixture.graph();
    let tree = build_mst(&graph);
    let oracle = brute_force_mst_weight(graph.vertex_count(), graph.edges());

    match oracle {
        Some(expected) if tree.is_valid() && tree.total_weight() == expected => Ok(()),
        None if !tree.is_valid() => Ok(()),
        _ => Err(TestCaseError::fail(format!(
            "kruskal weight {} (valid={}) disagrees with oracle {oracle:?} \
             (distribution={:?}, vertices={}, edges={})",
            tree.total_weight(),
            tree.is_valid(),
            fixture.distribution,
            fixture.vertex_count,
            fixture.triples.len(),
        ))),
    }
}

/// Checks that sequential and parallel sorting select identical trees.
pub(super) fn run_strategy_equivalence_property(fixture: &GraphFixture) -> TestCaseResult {
    let graph = fixture.graph();
    let sequential = SpanningTreeBuilder::new()
        .with_sort_strategy(SortStrategy::Sequential)
        .build(&graph);

    for run in 0..4 {
        let parallel = SpanningTreeBuilder::new()
            .with_sort_strategy(SortStrategy::Parallel)
            .build(&graph);
        if parallel != sequential {
            return Err(TestCaseError::fail(format!(
                "run {run}: parallel tree {:?} differs from sequential tree {:?} \
                 (distribution={:?})",
                parallel.edges(),
                sequential.edges(),
                fixture.distribution,
            )));
        }
    }
    Ok(())
}
