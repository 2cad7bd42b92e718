//! Graph generators for spanning-tree property tests.
//!
//! Graphs stay small (at most [`MAX_VERTICES`] vertices and
//! [`MAX_EDGES`] edges) so the brute-force oracle can enumerate every
//! candidate tree. Each generator emits triples in a shuffled insertion order,
//! which is what the tie-break depends on.

use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::Weight;

use super::types::{GraphFixture, WeightDistribution};

/// Smallest generated vertex count.
const MIN_VERTICES: usize = 2;
/// Largest generated vertex count.
pub(crate) const MAX_VERTICES: usize = 8;
/// Upper bound on generated edges, keeping `C(edges, vertices - 1)` small.
pub(crate) const MAX_EDGES: usize = 12;

/// Generates fixtures across every weight distribution.
pub(crate) fn graph_fixture_strategy() -> impl Strategy<Value = GraphFixture> {
    (any::<WeightDistribution>(), any::<u64>()).prop_map(|(distribution, seed)| {
        let mut rng = SmallRng::seed_from_u64(seed);
        generate_fixture(distribution, &mut rng)
    })
}

/// Generates a fixture for an explicitly chosen distribution.
pub(crate) fn generate_fixture(distribution: WeightDistribution, rng: &mut SmallRng) -> GraphFixture {
    match distribution {
        WeightDistribution::Unique => generate_unique(rng),
        WeightDistribution::ManyIdentical => generate_identical(rng),
        WeightDistribution::Sparse => generate_sparse(rng),
        WeightDistribution::Dense => generate_dense(rng),
        WeightDistribution::Disconnected => generate_disconnected(rng),
    }
}

fn generate_unique(rng: &mut SmallRng) -> GraphFixture {
    let vertex_count = rng.gen_range(MIN_VERTICES..=MAX_VERTICES);
    let mut pairs = sampled_pairs(0, vertex_count, 0.5, rng);
    let mut weights: Vec<Weight> = (1..=Weight::try_from(pairs.len()).unwrap_or(0)).collect();
    shuffle(&mut weights, rng);
    shuffle(&mut pairs, rng);
    let triples = pairs
        .into_iter()
        .zip(weights)
        .map(|((source, target), weight)| (source, target, weight))
        .collect();
    GraphFixture {
        vertex_count,
        triples,
        distribution: WeightDistribution::Unique,
    }
}

fn generate_identical(rng: &mut SmallRng) -> GraphFixture {
    let vertex_count = rng.gen_range(MIN_VERTICES..=MAX_VERTICES);
    let pool_size = rng.gen_range(1..=3);
    let pool: Vec<Weight> = (0..pool_size).map(|_| rng.gen_range(1..=10)).collect();
    let mut pairs = sampled_pairs(0, vertex_count, 0.6, rng);
    shuffle(&mut pairs, rng);
    let triples = pairs
        .into_iter()
        .map(|(source, target)| (source, target, pool[rng.gen_range(0..pool.len())]))
        .collect();
    GraphFixture {
        vertex_count,
        triples,
        distribution: WeightDistribution::ManyIdentical,
    }
}

fn generate_sparse(rng: &mut SmallRng) -> GraphFixture {
    let vertex_count = rng.gen_range(MIN_VERTICES..=MAX_VERTICES);
    let mut order: Vec<usize> = (0..vertex_count).collect();
    shuffle(&mut order, rng);

    let mut pairs: Vec<(usize, usize)> = order.windows(2).map(|step| (step[0], step[1])).collect();
    let extra = rng.gen_range(0..=vertex_count / 2);
    for _ in 0..extra {
        let source = rng.gen_range(0..vertex_count);
        let target = rng.gen_range(0..vertex_count);
        if source != target && !pairs.iter().any(|&pair| same_pair(pair, (source, target))) {
            pairs.push((source, target));
        }
    }
    pairs.truncate(MAX_EDGES);
    shuffle(&mut pairs, rng);

    let triples = pairs
        .into_iter()
        .map(|(source, target)| (source, target, rng.gen_range(-20..=50)))
        .collect();
    GraphFixture {
        vertex_count,
        triples,
        distribution: WeightDistribution::Sparse,
    }
}

fn generate_dense(rng: &mut SmallRng) -> GraphFixture {
    // Complete graphs above five vertices exceed the edge budget.
    let vertex_count = rng.gen_range(3..=5);
    let mut pairs = sampled_pairs(0, vertex_count, 0.9, rng);
    shuffle(&mut pairs, rng);
    let triples = pairs
        .into_iter()
        .map(|(source, target)| (source, target, rng.gen_range(1..=100)))
        .collect();
    GraphFixture {
        vertex_count,
        triples,
        distribution: WeightDistribution::Dense,
    }
}

fn generate_disconnected(rng: &mut SmallRng) -> GraphFixture {
    let island_count = rng.gen_range(2..=3);
    let mut vertex_count = 0;
    let mut pairs = Vec::new();
    let max_island = MAX_VERTICES / island_count;
    for _ in 0..island_count {
        let size = rng.gen_range(1..=max_island);
        pairs.extend(sampled_pairs(vertex_count, size, 0.7, rng));
        vertex_count += size;
    }
    shuffle(&mut pairs, rng);
    let triples = pairs
        .into_iter()
        .map(|(source, target)| (source, target, rng.gen_range(1..=9)))
        .collect();
    GraphFixture {
        vertex_count,
        triples,
        distribution: WeightDistribution::Disconnected,
    }
}

/// Samples pairs among `offset..offset + size`, randomly oriented, capped at
/// [`MAX_EDGES`].
fn sampled_pairs(
    offset: usize,
    size: usize,
    probability: f64,
    rng: &mut SmallRng,
) -> Vec<(usize, usize)> {
    let mut pairs = Vec::new();
    for low in offset..offset + size {
        for high in (low + 1)..offset + size {
            if rng.gen_bool(probability) {
                let pair = if rng.gen_bool(0.5) { (low, high) } else { (high, low) };
                pairs.push(pair);
            }
        }
    }
    shuffle(&mut pairs, rng);
    pairs.truncate(MAX_EDGES);
    pairs
}

fn same_pair(left: (usize, usize), right: (usize, usize)) -> bool {
    left == right || left == (right.1, right.0)
}

/// Fisher-Yates shuffle using the provided RNG.
fn shuffle<T>(slice: &mut [T], rng: &mut SmallRng) {
    for i in (1..slice.len()).rev() {
        let j = rng.gen_range(0..=i);
        slice.swap(i, j);
    }
}

impl proptest::arbitrary::Arbitrary for WeightDistribution {
    type Parameters = ();
    type Strategy = proptest::strategy::BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        prop_oneof![
            2 => Just(Self::Unique),
            3 => Just(Self::ManyIdentical),
            2 => Just(Self::Sparse),
            2 => Just(Self::Dense),
            1 => Just(Self::Disconnected),
        ]
        .boxed()
    }
}
