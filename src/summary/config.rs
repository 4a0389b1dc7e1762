//! Summary configuration

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

/// Summary configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SummaryConfig {
    /// Compute the sampled average distance
    pub estimate_distance: bool,
    /// Number of BFS seeds drawn from the largest component
    pub distance_sample_size: usize,
    /// RNG seed for seed sampling; `None` draws from OS entropy on every call
    pub seed: Option<u64>,
    /// Run one graph's analyzers on the global rayon pool; `false` pins them to one thread
    pub parallel: bool,
    /// Fill the max-degree node fields
    pub include_degree_extremes: bool,
}

impl Default for SummaryConfig {
    fn default() -> Self {
        Self {
            estimate_distance: true,
            distance_sample_size: 100,
            seed: None,
            parallel: true,
            include_degree_extremes: true,
        }
    }
}

impl SummaryConfig {
    /// Config with a fixed seed, for reproducible distance estimates
    pub fn seeded(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Self::default()
        }
    }

    /// Fresh RNG for one distance estimation
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}
