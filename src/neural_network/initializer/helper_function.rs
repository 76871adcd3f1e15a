use rand::distr::Distribution;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Resolves the seed for one initialize call.
///
/// A fixed seed gives the same sequence on every call; without one a fresh seed is drawn
/// from the thread-local generator.
pub(super) fn resolve_seed(seed: Option<u64>) -> u64 {
    seed.unwrap_or_else(|| rand::rng().random())
}

/// Draws `count` values from `distribution`, in index order.
///
/// All values are drawn before any parameter is written, so the caller can assign them
/// by element index.
pub(super) fn sample_values<D: Distribution<f64>>(
    distribution: &D,
    count: usize,
    seed: Option<u64>,
) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(resolve_seed(seed));
    (0..count).map(|_| distribution.sample(&mut rng)).collect()
}
