//! Connected-component discovery over an edge subset.
//!
//! The walk is an iterative depth-first search with an explicit stack so that
//! long paths cannot exhaust the call stack. Vertices are used as start points
//! in ascending order, so components come out ordered by their smallest
//! member.

use tracing::instrument;

use crate::{edge::Edge, error::ComponentError, graph::MAX_VERTICES};

/// A partition of `0..vertex_count` into connected components.
///
/// Every vertex appears in exactly one component. Components are ordered by
/// their smallest vertex, and each component lists its vertices in ascending
/// order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ComponentSet {
    components: Vec<Vec<usize>>,
    labels: Vec<usize>,
}

impl ComponentSet {
    /// Returns the number of components.
    #[must_use]
    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// Returns `true` when the partition covers no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Returns `true` when exactly one component exists.
    #[must_use]
    pub fn is_connected(&self) -> bool {
        self.components.len() == 1
    }

    /// Returns the number of partitioned vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.labels.len()
    }

    /// Returns the vertices of component `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&[usize]> {
        self.components.get(index).map(Vec::as_slice)
    }

    /// Iterates over the components in order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &[usize]> {
        self.components.iter().map(Vec::as_slice)
    }

    /// Returns the index of the component holding `vertex`.
    #[must_use]
    pub fn component_of(&self, vertex: usize) -> Option<usize> {
        self.labels.get(vertex).copied()
    }

    /// Returns `true` when `edge` joins two different components.
    ///
    /// Edges touching vertices outside the partition never cross.
    #[must_use]
    pub fn crosses(&self, edge: &Edge) -> bool {
        match (
            self.component_of(edge.source()),
            self.component_of(edge.target()),
        ) {
            (Some(left), Some(right)) => left != right,
            _ => false,
        }
    }

    /// Returns the size of every component, in component order.
    #[must_use]
    pub fn sizes(&self) -> Vec<usize> {
        self.components.iter().map(Vec::len).collect()
    }

    /// Consumes the set, returning the component vertex lists.
    #[must_use]
    pub fn into_components(self) -> Vec<Vec<usize>> {
        self.components
    }
}

/// Partitions `0..vertex_count` into the components formed by `edges`.
///
/// # Errors
/// Returns [`ComponentError::VertexOutOfRange`] when an edge references a
/// vertex outside `[0, vertex_count)`, and
/// [`ComponentError::TooManyVertices`] above [`crate::MAX_VERTICES`].
///
/// # Examples
/// ```
/// use arbor_core::{Edge, find_components};
///
/// let edges = [Edge::new(0, 1, 1), Edge::new(1, 2, 1), Edge::new(3, 4, 1)];
/// let components = find_components(5, &edges)?;
/// assert_eq!(components.len(), 2);
/// assert_eq!(components.get(0), Some(&[0, 1, 2][..]));
/// assert_eq!(components.get(1), Some(&[3, 4][..]));
/// # Ok::<(), arbor_core::ComponentError>(())
/// ```
#[instrument(
    name = "components.find",
    level = "debug",
    skip(edges),
    fields(edge_count = edges.len()),
    err,
)]
pub fn find_components(vertex_count: usize, edges: &[Edge]) -> Result<ComponentSet, ComponentError> {
    if vertex_count > MAX_VERTICES {
        return Err(ComponentError::TooManyVertices {
            vertex_count,
            limit: MAX_VERTICES,
        });
    }
    for edge in edges {
        for vertex in [edge.source(), edge.target()] {
            if vertex >= vertex_count {
                return Err(ComponentError::VertexOutOfRange {
                    vertex,
                    vertex_count,
                });
            }
        }
    }
    Ok(partition(vertex_count, edges))
}

/// Returns `true` when `edges` join all of `0..vertex_count` into a single
/// component.
///
/// # Errors
/// Returns the errors of [`find_components`].
pub fn is_connected(vertex_count: usize, edges: &[Edge]) -> Result<bool, ComponentError> {
    Ok(find_components(vertex_count, edges)?.is_connected())
}

/// Partitions vertices assuming every edge endpoint is below `vertex_count`.
pub(crate) fn partition(vertex_count: usize, edges: &[Edge]) -> ComponentSet {
    let mut neighbours = vec![Vec::new(); vertex_count];
    for edge in edges {
        neighbours[edge.source()].push(edge.target());
        neighbours[edge.target()].push(edge.source());
    }

    let mut labels = vec![usize::MAX; vertex_count];
    let mut components = Vec::new();
    let mut stack = Vec::new();

    for start in 0..vertex_count {
        if labels[start] != usize::MAX {
            continue;
        }

        let label = components.len();
        let mut members = Vec::new();
        labels[start] = label;
        stack.push(start);

        while let Some(vertex) = stack.pop() {
            members.push(vertex);
            for &next in &neighbours[vertex] {
                if labels[next] == usize::MAX {
                    labels[next] = label;
                    stack.push(next);
                }
            }
        }

        members.sort_unstable();
        components.push(members);
    }

    ComponentSet { components, labels }
}
