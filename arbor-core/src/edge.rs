//! Weighted undirected edges.
//!
//! An [`Edge`] remembers the orientation it was created with, but equality and
//! hashing ignore that orientation: `(a, b, w)` equals `(b, a, w)`. Both are
//! derived from the canonical [`EdgeKey`], so every symmetric comparison in the
//! crate goes through one place.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Scalar edge weight.
pub type Weight = i64;

/// Largest weight a [`crate::Graph`] accepts.
///
/// Graph weights are limited to the 32-bit range so that tree totals over at
/// most [`crate::MAX_VERTICES`] edges, and differences between two totals,
/// always fit in [`Weight`].
pub const MAX_WEIGHT: Weight = (1 << 31) - 1;

/// Smallest weight a [`crate::Graph`] accepts.
pub const MIN_WEIGHT: Weight = -(1 << 31);

/// Canonical unordered vertex pair, stored as `(min, max)`.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct EdgeKey {
    low: usize,
    high: usize,
}

impl EdgeKey {
    /// Builds the key for the pair `{a, b}` in either order.
    ///
    /// # Examples
    /// ```
    /// use arbor_core::EdgeKey;
    ///
    /// assert_eq!(EdgeKey::new(3, 1), EdgeKey::new(1, 3));
    /// assert_eq!(EdgeKey::new(3, 1).low(), 1);
    /// ```
    #[must_use]
    pub const fn new(a: usize, b: usize) -> Self {
        if a <= b {
            Self { low: a, high: b }
        } else {
            Self { low: b, high: a }
        }
    }

    /// Returns the smaller endpoint.
    #[must_use]
    #[rustfmt::skip]
    pub const fn low(&self) -> usize { self.low }

    /// Returns the larger endpoint.
    #[must_use]
    #[rustfmt::skip]
    pub const fn high(&self) -> usize { self.high }

    /// Returns `true` when both endpoints are the same vertex.
    #[must_use]
    pub const fn is_loop(&self) -> bool {
        self.low == self.high
    }
}

/// A weighted undirected edge.
///
/// # Examples
/// ```
/// use arbor_core::Edge;
///
/// let forward = Edge::new(0, 2, 5);
/// assert_eq!(forward, Edge::new(2, 0, 5));
/// assert_ne!(forward, Edge::new(0, 2, 6));
/// assert_eq!(forward.to_string(), "0-[5]-2");
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Edge {
    source: usize,
    target: usize,
    weight: Weight,
}

impl Edge {
    /// Creates an edge from `source` to `target` with `weight`.
    #[must_use]
    pub const fn new(source: usize, target: usize, weight: Weight) -> Self {
        Self {
            source,
            target,
            weight,
        }
    }

    /// Returns the endpoint the edge was created from.
    #[must_use]
    #[rustfmt::skip]
    pub const fn source(&self) -> usize { self.source }

    /// Returns the endpoint the edge was created towards.
    #[must_use]
    #[rustfmt::skip]
    pub const fn target(&self) -> usize { self.target }

    /// Returns the edge weight.
    #[must_use]
    #[rustfmt::skip]
    pub const fn weight(&self) -> Weight { self.weight }

    /// Returns the canonical endpoint key, ignoring orientation and weight.
    #[must_use]
    pub const fn key(&self) -> EdgeKey {
        EdgeKey::new(self.source, self.target)
    }

    /// Returns `true` when `self` and `other` join the same vertex pair,
    /// regardless of weight.
    #[must_use]
    pub fn same_endpoints(&self, other: &Self) -> bool {
        self.key() == other.key()
    }

    /// Returns the same edge viewed from `from`, or `None` when `from` is not
    /// an endpoint.
    #[must_use]
    pub const fn oriented_from(&self, from: usize) -> Option<Self> {
        if self.source == from {
            Some(*self)
        } else if self.target == from {
            Some(Self::new(self.target, self.source, self.weight))
        } else {
            None
        }
    }

    /// Compares two edges by weight alone.
    ///
    /// This is the ordering Kruskal sorts by; a stable sort over it keeps
    /// equal-weight edges in insertion order.
    #[must_use]
    pub fn weight_cmp(&self, other: &Self) -> Ordering {
        self.weight.cmp(&other.weight)
    }
}

impl PartialEq for Edge {
    fn eq(&self, other: &Self) -> bool {
        self.weight == other.weight && self.key() == other.key()
    }
}

impl Eq for Edge {}

impl Hash for Edge {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
        self.weight.hash(state);
    }
}

// Weight first; the key only separates distinct equal-weight edges so that
// `Ord` agrees with `Eq`.
impl Ord for Edge {
    fn cmp(&self, other: &Self) -> Ordering {
        self.weight_cmp(other)
            .then_with(|| self.key().cmp(&other.key()))
    }
}

impl PartialOrd for Edge {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-[{}]-{}", self.source, self.weight, self.target)
    }
}

impl From<(usize, usize, Weight)> for Edge {
    fn from((source, target, weight): (usize, usize, Weight)) -> Self {
        Self::new(source, target, weight)
    }
}

/// Sums the weights of `edges`.
///
/// The sum saturates at the bounds of [`Weight`]. The edges of any spanning
/// tree or forest of a [`crate::Graph`] stay well inside them.
///
/// # Examples
/// ```
/// use arbor_core::{Edge, total_weight};
///
/// let edges = [Edge::new(0, 1, 4), Edge::new(1, 2, 3)];
/// assert_eq!(total_weight(&edges), 7);
/// assert_eq!(total_weight(&[]), 0);
/// ```
#[must_use]
pub fn total_weight<'a>(edges: impl IntoIterator<Item = &'a Edge>) -> Weight {
    edges
        .into_iter()
        .fold(0, |total: Weight, edge| total.saturating_add(edge.weight()))
}
