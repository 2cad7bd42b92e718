//! Property tests tying repair to a from-scratch rebuild.
//!
//! Swapping a removed tree edge for the cheapest other crossing edge must give
//! a minimum spanning tree of the graph without that edge. The brute-force
//! oracle from the spanning-tree suite provides the reference weight.

use proptest::prelude::*;
use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::mst::property::oracle::brute_force_mst_weight;
use crate::mst::property::strategies::graph_fixture_strategy;
use crate::mst::property::types::GraphFixture;
use crate::test_utils::suite_proptest_config;
use crate::{Edge, build_mst};

use super::{ReplacementStatus, TreeRepairer};

fn run_repair_matches_rebuild(fixture: &GraphFixture, pick: usize) -> TestCaseResult {
    let graph = fixture.graph();
    let tree = build_mst(&graph);
    if !tree.is_valid() || tree.is_empty() {
        return Ok(());
    }

    let removed = tree.edges()[pick % tree.len()];
    let mut repairer = TreeRepairer::new(&graph, tree.into_edges())
        .map_err(|err| TestCaseError::fail(format!("kruskal tree rejected: {err}")))?;
    let outcome = repairer
        .remove_and_replace(&removed)
        .map_err(|err| TestCaseError::fail(format!("removal failed: {err}")))?;

    let remaining: Vec<Edge> = graph
        .edges()
        .iter()
        .copied()
        .filter(|edge| edge.key() != removed.key())
        .collect();
    let oracle = brute_force_mst_weight(graph.vertex_count(), &remaining);

    prop_assert_eq!(outcome.components().len(), 2);
    prop_assert_ne!(outcome.replacement(), Some(removed));
    match (outcome.status(), oracle) {
        (ReplacementStatus::Replaced, Some(expected)) => {
            prop_assert_eq!(repairer.total_weight(), expected, "fixture {:?}", fixture);
            prop_assert_eq!(repairer.edges().len(), graph.vertex_count() - 1);
            prop_assert!(repairer.components().is_connected());
        }
        (ReplacementStatus::Disconnected, None) => {
            prop_assert_eq!(repairer.edges().len(), graph.vertex_count() - 2);
        }
        (status, oracle) => {
            return Err(TestCaseError::fail(format!(
                "status {status:?} disagrees with rebuild {oracle:?} for {fixture:?}"
            )));
        }
    }
    Ok(())
}

proptest! {
    #![proptest_config(suite_proptest_config(256))]

    #[test]
    fn repair_matches_rebuild_without_removed_edge(
        fixture in graph_fixture_strategy(),
        pick in any::<usize>(),
    ) {
        run_repair_matches_rebuild(&fixture, pick)?;
    }
}
