//! Spanning-tree repair after a single edge removal.
//!
//! Removing an edge from a spanning tree splits it in two. [`TreeRepairer`]
//! recomputes the partition of the remaining edges, then scans the graph's
//! edges in insertion order for the lightest edge joining two different
//! pieces. The first occurrence wins on equal weights. The edge being replaced
//! is never its own replacement, even when it is the only crossing edge.

use std::collections::HashSet;

use tracing::{Span, debug, field, info, instrument, warn};

use crate::{
    components::{ComponentSet, partition},
    edge::{Edge, EdgeKey, Weight, total_weight},
    error::RepairError,
    graph::Graph,
};

/// What happened to the tree after a removal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReplacementStatus {
    /// A crossing edge was found and appended to the tree.
    Replaced,
    /// The remaining edges still formed a single component.
    NotNeeded,
    /// No other edge crosses the split, so the tree stays disconnected.
    Disconnected,
}

impl ReplacementStatus {
    /// Returns a stable label for logs and reports.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Replaced => "replaced",
            Self::NotNeeded => "not_needed",
            Self::Disconnected => "disconnected",
        }
    }
}

/// The result of one [`TreeRepairer::remove_and_replace`] call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RepairOutcome {
    removed: Edge,
    replacement: Option<Edge>,
    components: ComponentSet,
    status: ReplacementStatus,
}

impl RepairOutcome {
    /// Returns the tree edge that was removed, with its stored orientation and
    /// weight.
    #[must_use]
    #[rustfmt::skip]
    pub fn removed(&self) -> Edge { self.removed }

    /// Returns the edge appended to the tree, if any.
    #[must_use]
    #[rustfmt::skip]
    pub fn replacement(&self) -> Option<Edge> { self.replacement }

    /// Returns the partition of the tree observed right after removal.
    #[must_use]
    #[rustfmt::skip]
    pub fn components(&self) -> &ComponentSet { &self.components }

    /// Returns how the removal was resolved.
    #[must_use]
    #[rustfmt::skip]
    pub fn status(&self) -> ReplacementStatus { self.status }

    /// Returns the change in total weight caused by the swap.
    ///
    /// Without a replacement the tree simply lost the removed edge's weight.
    #[must_use]
    pub fn weight_delta(&self) -> Weight {
        self.replacement
            .map_or(0, |edge| edge.weight())
            .saturating_sub(self.removed.weight())
    }
}

/// Owns a spanning tree of a borrowed graph and repairs it edge by edge.
///
/// # Examples
/// ```
/// use arbor_core::{Edge, Graph, ReplacementStatus, TreeRepairer, build_mst};
///
/// let graph = Graph::from_edges(4, [(0, 1, 1), (0, 2, 3), (1, 2, 2), (1, 3, 4), (2, 3, 5)])?;
/// let tree = build_mst(&graph);
/// let mut repairer = TreeRepairer::new(&graph, tree.into_edges())?;
///
/// let outcome = repairer.remove_and_replace(&Edge::new(2, 1, 2))?;
/// assert_eq!(outcome.status(), ReplacementStatus::Replaced);
/// assert_eq!(outcome.replacement(), Some(Edge::new(0, 2, 3)));
/// assert_eq!(repairer.total_weight(), 8);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Debug)]
pub struct TreeRepairer<'g> {
    graph: &'g Graph,
    tree: Vec<Edge>,
    last_removed: Option<Edge>,
}

impl<'g> TreeRepairer<'g> {
    /// Takes ownership of `tree_edges` as the current spanning tree of
    /// `graph`.
    ///
    /// # Errors
    /// - [`RepairError::TreeSizeMismatch`] unless there are exactly
    ///   `vertex_count - 1` edges.
    /// - [`RepairError::EdgeNotInGraph`] when an edge, weight included, is not
    ///   one of the graph's edges.
    /// - [`RepairError::TreeNotSpanning`] when the edges leave more than one
    ///   component.
    pub fn new(graph: &'g Graph, tree_edges: Vec<Edge>) -> Result<Self, RepairError> {
        let vertex_count = graph.vertex_count();
        let expected = vertex_count - 1;
        if tree_edges.len() != expected {
            return Err(RepairError::TreeSizeMismatch {
                vertex_count,
                expected,
                actual: tree_edges.len(),
            });
        }
        if let Some(foreign) = tree_edges.iter().find(|edge| !graph.contains_edge(edge)) {
            return Err(RepairError::EdgeNotInGraph {
                left: foreign.source(),
                right: foreign.target(),
                weight: foreign.weight(),
            });
        }
        let components = partition(vertex_count, &tree_edges);
        if !components.is_connected() {
            return Err(RepairError::TreeNotSpanning {
                components: components.len(),
            });
        }
        Ok(Self {
            graph,
            tree: tree_edges,
            last_removed: None,
        })
    }

    /// Returns the graph the tree spans.
    #[must_use]
    #[rustfmt::skip]
    pub fn graph(&self) -> &'g Graph { self.graph }

    /// Returns the current tree edges.
    #[must_use]
    #[rustfmt::skip]
    pub fn edges(&self) -> &[Edge] { &self.tree }

    /// Returns an owned copy of the current tree edges.
    #[must_use]
    pub fn snapshot(&self) -> Vec<Edge> {
        self.tree.clone()
    }

    /// Consumes the repairer, returning the current tree edges.
    #[must_use]
    pub fn into_edges(self) -> Vec<Edge> {
        self.tree
    }

    /// Returns the total weight of the current tree edges.
    #[must_use]
    pub fn total_weight(&self) -> Weight {
        total_weight(&self.tree)
    }

    /// Returns the most recently removed edge.
    #[must_use]
    #[rustfmt::skip]
    pub fn last_removed(&self) -> Option<Edge> { self.last_removed }

    /// Returns the partition formed by the current tree edges.
    #[must_use]
    pub fn components(&self) -> ComponentSet {
        partition(self.graph.vertex_count(), &self.tree)
    }

    /// Removes the tree edge with the same endpoints as `edge`, in either
    /// orientation, and reconnects the tree with the lightest other edge
    /// crossing the resulting split.
    ///
    /// # Errors
    /// Returns [`RepairError::EdgeNotInTree`] when no tree edge has those
    /// endpoints. The tree is left untouched in that case.
    #[instrument(
        name = "repair.remove_and_replace",
        skip(self, edge),
        fields(
            edge = %edge,
            tree_edges = self.tree.len(),
            components = field::Empty,
            status = field::Empty,
        ),
        err,
    )]
    pub fn remove_and_replace(&mut self, edge: &Edge) -> Result<RepairOutcome, RepairError> {
        let key = edge.key();
        let position = self
            .tree
            .iter()
            .position(|candidate| candidate.key() == key)
            .ok_or(RepairError::EdgeNotInTree {
                left: edge.source(),
                right: edge.target(),
                weight: edge.weight(),
            })?;
        let removed = self.tree.remove(position);
        self.last_removed = Some(removed);

        let components = partition(self.graph.vertex_count(), &self.tree);
        let span = Span::current();
        span.record("components", components.len());

        let (replacement, status) = if components.is_connected() {
            (None, ReplacementStatus::NotNeeded)
        } else {
            match self.cheapest_crossing_edge(&components, removed.key()) {
                Some(replacement) => {
                    self.tree.push(replacement);
                    (Some(replacement), ReplacementStatus::Replaced)
                }
                None => (None, ReplacementStatus::Disconnected),
            }
        };
        span.record("status", status.as_str());

        match replacement {
            Some(replacement) => info!(
                removed = %removed,
                replacement = %replacement,
                total_weight = self.total_weight(),
                "tree repaired"
            ),
            None if status == ReplacementStatus::Disconnected => warn!(
                removed = %removed,
                components = components.len(),
                "no replacement edge crosses the split"
            ),
            None => info!(removed = %removed, "removal left the tree connected"),
        }

        Ok(RepairOutcome {
            removed,
            replacement,
            components,
            status,
        })
    }

    /// Scans the graph in insertion order for the lightest edge joining two
    /// components that is neither in the tree nor the removed edge.
    fn cheapest_crossing_edge(&self, components: &ComponentSet, removed: EdgeKey) -> Option<Edge> {
        let in_tree: HashSet<EdgeKey> = self.tree.iter().map(Edge::key).collect();
        let mut best: Option<Edge> = None;
        for candidate in self.graph.edges() {
            let key = candidate.key();
            if key == removed || in_tree.contains(&key) || !components.crosses(candidate) {
                continue;
            }
            if best.is_none_or(|current| candidate.weight() < current.weight()) {
                debug!(candidate = %candidate, "new cheapest crossing edge");
                best = Some(*candidate);
            }
        }
        best
    }
}

/// Outcome of the one-shot [`remove_and_replace`] helper.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RepairReport {
    /// Tree edges after the removal and any replacement.
    pub updated_edges: Vec<Edge>,
    /// The replacement edge, if one was found.
    pub replacement: Option<Edge>,
    /// The partition observed right after removal.
    pub components: ComponentSet,
}

/// Repairs a copy of `tree_edges` after removing `edge`.
///
/// The caller's slice is not modified.
///
/// # Errors
/// Returns the errors of [`TreeRepairer::new`] and
/// [`TreeRepairer::remove_and_replace`].
///
/// # Examples
/// ```
/// use arbor_core::{Edge, Graph, remove_and_replace};
///
/// let graph = Graph::from_edges(3, [(0, 1, 1), (1, 2, 2)])?;
/// let tree = [Edge::new(0, 1, 1), Edge::new(1, 2, 2)];
/// let report = remove_and_replace(&graph, &tree, &Edge::new(0, 1, 1))?;
/// assert_eq!(report.replacement, None);
/// assert_eq!(report.updated_edges, vec![Edge::new(1, 2, 2)]);
/// assert_eq!(report.components.len(), 2);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn remove_and_replace(
    graph: &Graph,
    tree_edges: &[Edge],
    edge: &Edge,
) -> Result<RepairReport, RepairError> {
    let mut repairer = TreeRepairer::new(graph, tree_edges.to_vec())?;
    let outcome = repairer.remove_and_replace(edge)?;
    Ok(RepairReport {
        updated_edges: repairer.into_edges(),
        replacement: outcome.replacement,
        components: outcome.components,
    })
}

#[cfg(test)]
mod property;
