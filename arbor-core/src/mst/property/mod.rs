//! Property-based tests for spanning-tree construction.
//!
//! Compares Kruskal against a brute-force enumeration of every spanning tree
//! on small graphs, checks structural invariants of the produced tree, and
//! confirms that sorting strategies and repeated runs agree exactly. The
//! fixtures and the oracle are shared with the repair property suite.

mod equivalence;
pub(crate) mod oracle;
pub(crate) mod strategies;
mod structural;
pub(crate) mod types;
