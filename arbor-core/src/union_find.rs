//! Union-find (disjoint set union) used by spanning-tree construction.
//!
//! Kruskal's algorithm scans edges in weight order and keeps an edge only when
//! its endpoints are still in different components. [`DisjointSet`] tracks that
//! membership with path compression and union by rank, and keeps a running
//! component count so callers can tell when a build has spanned every vertex.

use crate::error::DisjointSetError;

/// Disjoint-set forest over the elements `0..len`.
///
/// # Examples
/// ```
/// use arbor_core::DisjointSet;
///
/// let mut set = DisjointSet::new(4);
/// assert!(set.union(0, 1)?);
/// assert!(!set.union(1, 0)?);
/// assert!(set.connected(0, 1)?);
/// assert_eq!(set.component_count(), 3);
/// # Ok::<(), arbor_core::DisjointSetError>(())
/// ```
#[derive(Clone, Debug)]
pub struct DisjointSet {
    parent: Vec<usize>,
    rank: Vec<u8>,
    components: usize,
}

impl DisjointSet {
    /// Creates `len` singleton components.
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self {
            parent: (0..len).collect(),
            rank: vec![0; len],
            components: len,
        }
    }

    /// Returns the number of elements tracked.
    #[must_use]
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// Returns `true` when the set tracks no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Returns the current number of disjoint components.
    #[must_use]
    #[rustfmt::skip]
    pub fn component_count(&self) -> usize { self.components }

    /// Returns the representative of `element`'s component.
    ///
    /// # Errors
    /// Returns [`DisjointSetError::OutOfRange`] when `element >= len`.
    pub fn find(&mut self, element: usize) -> Result<usize, DisjointSetError> {
        self.check(element)?;
        Ok(self.find_root(element))
    }

    /// Merges the components holding `left` and `right`.
    ///
    /// Returns `true` and decrements the component count when they were
    /// separate; returns `false` and leaves the set untouched otherwise.
    ///
    /// # Errors
    /// Returns [`DisjointSetError::OutOfRange`] when either element is outside
    /// the set.
    pub fn union(&mut self, left: usize, right: usize) -> Result<bool, DisjointSetError> {
        self.check(left)?;
        self.check(right)?;
        Ok(self.merge(left, right))
    }

    /// Unchecked [`Self::union`] for callers that already hold in-range
    /// elements.
    pub(crate) fn merge(&mut self, left: usize, right: usize) -> bool {
        let mut left = self.find_root(left);
        let mut right = self.find_root(right);
        if left == right {
            return false;
        }

        let left_rank = self.rank[left];
        let right_rank = self.rank[right];
        if left_rank < right_rank {
            std::mem::swap(&mut left, &mut right);
        }
        self.parent[right] = left;
        if left_rank == right_rank {
            self.rank[left] = left_rank.saturating_add(1);
        }
        self.components -= 1;
        true
    }

    /// Returns `true` when `left` and `right` share a component.
    ///
    /// # Errors
    /// Returns [`DisjointSetError::OutOfRange`] when either element is outside
    /// the set.
    pub fn connected(&mut self, left: usize, right: usize) -> Result<bool, DisjointSetError> {
        Ok(self.find(left)? == self.find(right)?)
    }

    fn check(&self, element: usize) -> Result<(), DisjointSetError> {
        if element < self.parent.len() {
            Ok(())
        } else {
            Err(DisjointSetError::OutOfRange {
                element,
                len: self.parent.len(),
            })
        }
    }

    fn find_root(&mut self, mut node: usize) -> usize {
        let mut root = node;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        while self.parent[node] != root {
            let next = self.parent[node];
            self.parent[node] = root;
            node = next;
        }

        root
    }
}
