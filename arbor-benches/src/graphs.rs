//! Seeded synthetic graphs for benchmarking.
//!
//! Every generated graph is connected: vertices are first chained along a
//! shuffled path, then each vertex gets a few extra edges to random partners.
//! Duplicate pairs and self-loops are skipped rather than retried, so the
//! final edge count may fall slightly below the requested density.

use std::collections::HashSet;

use arbor_core::{EdgeKey, Graph, GraphBuilder, Weight};
use rand::{Rng, SeedableRng, rngs::SmallRng, seq::SliceRandom};

/// Configuration for synthetic graph generation.
#[derive(Clone, Debug)]
pub struct SyntheticGraphConfig {
    /// Number of vertices.
    pub vertex_count: usize,
    /// Extra edges attempted per vertex beyond the spanning path.
    pub density: usize,
    /// Largest edge weight; weights are drawn from `1..=max_weight`.
    pub max_weight: Weight,
    /// RNG seed for reproducibility.
    pub seed: u64,
}

impl SyntheticGraphConfig {
    /// Returns a configuration with weights up to 1000.
    #[must_use]
    pub const fn new(vertex_count: usize, density: usize, seed: u64) -> Self {
        Self {
            vertex_count,
            density,
            max_weight: 1_000,
            seed,
        }
    }
}

/// Generates a connected graph from `config`.
///
/// # Errors
/// Returns [`arbor_core::GraphError::EmptyGraph`] when `vertex_count` is
/// zero.
///
/// # Examples
/// ```
/// use arbor_benches::graphs::{SyntheticGraphConfig, generate_graph};
///
/// let graph = generate_graph(&SyntheticGraphConfig::new(50, 3, 42))?;
/// assert_eq!(graph.vertex_count(), 50);
/// assert!(graph.edge_count() >= 49);
/// # Ok::<(), arbor_core::GraphError>(())
/// ```
pub fn generate_graph(config: &SyntheticGraphConfig) -> Result<Graph, arbor_core::GraphError> {
    let mut rng = SmallRng::seed_from_u64(config.seed);
    let max_weight = config.max_weight.max(1);
    let mut order: Vec<usize> = (0..config.vertex_count).collect();
    order.shuffle(&mut rng);

    let mut seen = HashSet::new();
    let mut builder = GraphBuilder::new(config.vertex_count);
    for step in order.windows(2) {
        if let [source, target] = *step {
            seen.insert(EdgeKey::new(source, target));
            builder = builder.add_edge(source, target, rng.gen_range(1..=max_weight))?;
        }
    }

    if config.vertex_count > 1 {
        for source in 0..config.vertex_count {
            for _ in 0..config.density {
                let target = rng.gen_range(0..config.vertex_count);
                let key = EdgeKey::new(source, target);
                if key.is_loop() || !seen.insert(key) {
                    continue;
                }
                builder = builder.add_edge(source, target, rng.gen_range(1..=max_weight))?;
            }
        }
    }

    builder.build()
}
