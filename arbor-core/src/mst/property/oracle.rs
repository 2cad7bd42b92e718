//! Brute-force spanning-tree oracle.
//!
//! Enumerates every `(vertex_count - 1)`-edge subset of a small edge list and
//! keeps the lightest one that is acyclic. Exponential, so callers keep graphs
//! within the bounds set by the fixture strategies.

use crate::{Edge, Weight};

/// Returns the minimum total weight over all spanning trees of the graph
/// formed by `edges`, or `None` when the edges cannot span every vertex.
pub(crate) fn brute_force_mst_weight(vertex_count: usize, edges: &[Edge]) -> Option<Weight> {
    let tree_size = vertex_count.saturating_sub(1);
    if tree_size == 0 {
        return Some(0);
    }
    if edges.len() < tree_size {
        return None;
    }

    let mut best: Option<Weight> = None;
    let mut chosen: Vec<usize> = (0..tree_size).collect();
    loop {
        if let Some(weight) = spanning_weight(vertex_count, edges, &chosen) {
            best = Some(best.map_or(weight, |current| current.min(weight)));
        }
        if !next_combination(&mut chosen, edges.len()) {
            return best;
        }
    }
}

/// Returns the subset's weight when it forms a tree over every vertex.
fn spanning_weight(vertex_count: usize, edges: &[Edge], chosen: &[usize]) -> Option<Weight> {
    let mut parent: Vec<usize> = (0..vertex_count).collect();
    let mut weight = 0;
    for &index in chosen {
        let edge = edges[index];
        let left = find_root(&mut parent, edge.source());
        let right = find_root(&mut parent, edge.target());
        if left == right {
            return None;
        }
        parent[right] = left;
        weight += edge.weight();
    }
    // n - 1 acyclic edges over n vertices always span.
    Some(weight)
}

/// Advances `chosen` to the next lexicographic k-combination of `0..n`.
fn next_combination(chosen: &mut [usize], n: usize) -> bool {
    let k = chosen.len();
    let mut position = k;
    while position > 0 {
        position -= 1;
        if chosen[position] < n - k + position {
            chosen[position] += 1;
            for follower in position + 1..k {
                chosen[follower] = chosen[follower - 1] + 1;
            }
            return true;
        }
    }
    false
}

/// Path-halving find for the oracle's private union-find.
pub(crate) fn find_root(parent: &mut [usize], mut node: usize) -> usize {
    while parent[node] != node {
        parent[node] = parent[parent[node]];
        node = parent[node];
    }
    node
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    fn edges(triples: &[(usize, usize, Weight)]) -> Vec<Edge> {
        triples.iter().copied().map(Edge::from).collect()
    }

    #[rstest]
    #[case::triangle(3, edges(&[(0, 1, 1), (1, 2, 2), (0, 2, 3)]), Some(3))]
    #[case::square(4, edges(&[(0, 1, 1), (1, 2, 2), (2, 3, 3), (3, 0, 4)]), Some(6))]
    #[case::reference(4, edges(&[(0, 1, 1), (0, 2, 3), (1, 2, 2), (1, 3, 4), (2, 3, 5)]), Some(7))]
    #[case::disconnected(4, edges(&[(0, 1, 1), (2, 3, 2)]), None)]
    #[case::too_few_edges(3, edges(&[(0, 1, 1)]), None)]
    #[case::single_vertex(1, vec![], Some(0))]
    #[case::negative(3, edges(&[(0, 1, -5), (1, 2, 2), (0, 2, -1)]), Some(-6))]
    fn oracle_finds_minimum(
        #[case] vertex_count: usize,
        #[case] edges: Vec<Edge>,
        #[case] expected: Option<Weight>,
    ) {
        assert_eq!(brute_force_mst_weight(vertex_count, &edges), expected);
    }

    #[test]
    fn combinations_enumerate_every_subset_once() {
        let mut chosen = vec![0, 1];
        let mut count = 1;
        while next_combination(&mut chosen, 5) {
            count += 1;
        }
        assert_eq!(count, 10);
    }
}
