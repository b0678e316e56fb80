//! Shared test utilities for `corrclust-core`.

use corrclust_test_support::property_profile::ProptestRunProfile;
use proptest::prelude::*;
use proptest::test_runner::Config as ProptestConfig;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Vertex count used when no override is configured. Kept small because the
/// vertex-pair search rescans every edge for every candidate merge.
const DEFAULT_MAX_VERTICES: usize = 7;

/// Builds a proptest configuration from the shared run profile.
#[must_use]
pub(crate) fn suite_proptest_config(default_cases: u32) -> ProptestConfig {
    let profile = ProptestRunProfile::load(default_cases, DEFAULT_MAX_VERTICES);
    ProptestConfig {
        cases: profile.cases(),
        fork: profile.fork(),
        ..ProptestConfig::default()
    }
}

/// Randomly generated signed graph over vertices `0..n`.
#[derive(Clone, Debug)]
pub(crate) struct GraphFixture {
    pub(crate) vertices: Vec<u32>,
    pub(crate) positive: Vec<(u32, u32)>,
    pub(crate) negative: Vec<(u32, u32)>,
}

impl GraphFixture {
    /// Generates a graph where each unordered pair is positive, negative or
    /// absent with probabilities drawn from `rng`. No pair carries both signs.
    pub(crate) fn generate(rng: &mut SmallRng, max_vertices: usize) -> Self {
        let count = rng.gen_range(1..=max_vertices.max(1));
        let density: f64 = rng.gen_range(0.2..=0.9);
        let positive_share: f64 = rng.gen_range(0.1..=0.9);
        let vertices: Vec<u32> = (0..count)
            .map(|index| u32::try_from(index).unwrap_or(u32::MAX))
            .collect();
        let mut positive = Vec::new();
        let mut negative = Vec::new();
        for (offset, &u) in vertices.iter().enumerate() {
            for &v in vertices.iter().skip(offset + 1) {
                if !rng.gen_bool(density) {
                    continue;
                }
                // Randomise orientation so canonical keys get exercised.
                let pair = if rng.gen_bool(0.5) { (u, v) } else { (v, u) };
                if rng.gen_bool(positive_share) {
                    positive.push(pair);
                } else {
                    negative.push(pair);
                }
            }
        }
        Self {
            vertices,
            positive,
            negative,
        }
    }
}

/// Strategy producing [`GraphFixture`]s sized by the run profile.
pub(crate) fn graph_fixture_strategy() -> impl Strategy<Value = GraphFixture> {
    let max_vertices = ProptestRunProfile::load(1, DEFAULT_MAX_VERTICES).max_vertices();
    any::<u64>().prop_map(move |seed| {
        let mut rng = SmallRng::seed_from_u64(seed);
        GraphFixture::generate(&mut rng, max_vertices)
    })
}
