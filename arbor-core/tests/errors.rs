use arbor_core::{
    ComponentError, ComponentErrorCode, DisjointSet, DisjointSetError, DisjointSetErrorCode, Edge,
    Graph, GraphError, GraphErrorCode, RepairError, RepairErrorCode, Weight, find_components,
};
use rstest::rstest;

#[rstest]
#[case(Graph::from_edges(0, Vec::<(usize, usize, Weight)>::new()), GraphErrorCode::EmptyGraph)]
#[case(Graph::from_edges(2, [(0, 2, 1)]), GraphErrorCode::VertexOutOfRange)]
#[case(Graph::from_edges(2, [(1, 1, 1)]), GraphErrorCode::SelfLoop)]
#[case(Graph::from_edges(2, [(0, 1, 1), (1, 0, 1)]), GraphErrorCode::DuplicateEdge)]
#[case(Graph::from_edges(2, [(0, 1, Weight::MAX)]), GraphErrorCode::WeightOutOfRange)]
#[case(Graph::from_edges(usize::MAX, [(0, 1, 1)]), GraphErrorCode::TooManyVertices)]
fn graph_construction_reports_codes(
    #[case] result: Result<Graph, GraphError>,
    #[case] expected: GraphErrorCode,
) {
    let err = result.expect_err("construction must fail");
    assert_eq!(err.code(), expected);
}

#[test]
fn disjoint_set_reports_out_of_range() {
    let mut set = DisjointSet::new(2);
    let err = set.union(0, 2).expect_err("2 is out of range");
    assert_eq!(err, DisjointSetError::OutOfRange { element: 2, len: 2 });
    assert_eq!(err.code(), DisjointSetErrorCode::OutOfRange);
    assert_eq!(set.component_count(), 2);
}

#[test]
fn component_search_reports_out_of_range() {
    let err = find_components(2, &[Edge::new(0, 5, 1)]).expect_err("5 is out of range");
    assert_eq!(err.code(), ComponentErrorCode::VertexOutOfRange);
    assert!(matches!(err, ComponentError::VertexOutOfRange { vertex: 5, .. }));

    let err = find_components(usize::MAX, &[]).expect_err("count is above the limit");
    assert_eq!(err.code().as_str(), "COMPONENTS_TOO_MANY_VERTICES");
}

#[rstest]
#[case(RepairError::EdgeNotInTree { left: 0, right: 1, weight: 1 }, RepairErrorCode::EdgeNotInTree)]
#[case(
    RepairError::TreeSizeMismatch { vertex_count: 3, expected: 2, actual: 1 },
    RepairErrorCode::TreeSizeMismatch,
)]
#[case(RepairError::EdgeNotInGraph { left: 0, right: 1, weight: 9 }, RepairErrorCode::EdgeNotInGraph)]
#[case(RepairError::TreeNotSpanning { components: 2 }, RepairErrorCode::TreeNotSpanning)]
fn repair_errors_report_codes(#[case] error: RepairError, #[case] expected: RepairErrorCode) {
    assert_eq!(error.code(), expected);
    assert_eq!(error.code().to_string(), expected.as_str());
}
