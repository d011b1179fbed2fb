//! Result Sampling Seam
//!
//! Recommendation results are trimmed by uniform random sampling as a
//! deliberate variety mechanism. The source of randomness is injectable so
//! tests can run deterministically.

use rand::seq::index::sample;

/// Pick `amount` distinct row indices out of `population`
pub trait Sampler: Send + Sync {
    /// Returns up to `amount` distinct indices in `0..population`.
    /// Implementations clamp `amount` to `population`.
    fn pick(&self, population: usize, amount: usize) -> Vec<usize>;
}

/// Production sampler backed by the thread-local RNG
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomSampler;

impl Sampler for RandomSampler {
    fn pick(&self, population: usize, amount: usize) -> Vec<usize> {
        let amount = amount.min(population);
        sample(&mut rand::thread_rng(), population, amount).into_vec()
    }
}

/// Deterministic sampler for tests: always the first `amount` indices
#[derive(Debug, Default, Clone, Copy)]
pub struct TakeFirstSampler;

impl Sampler for TakeFirstSampler {
    fn pick(&self, population: usize, amount: usize) -> Vec<usize> {
        (0..amount.min(population)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_sampler_bounds() {
        let sampler = RandomSampler;
        let picked = sampler.pick(10, 4);
        assert_eq!(picked.len(), 4);
        assert!(picked.iter().all(|&i| i < 10));

        let mut sorted = picked.clone();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(sorted.len(), 4, "indices must be distinct");
    }

    #[test]
    fn test_amount_clamped_to_population() {
        assert_eq!(RandomSampler.pick(2, 5).len(), 2);
        assert_eq!(TakeFirstSampler.pick(0, 3), Vec::<usize>::new());
    }

    #[test]
    fn test_take_first_is_deterministic() {
        assert_eq!(TakeFirstSampler.pick(10, 3), vec![0, 1, 2]);
    }
}
