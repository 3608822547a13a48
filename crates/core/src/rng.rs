//! Draw helpers over the per-run `ChaCha8Rng` stream.

use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::Rng;

/// Uniform integer in `low..=high`.
pub(crate) fn range_inclusive(rng: &mut ChaCha8Rng, low: u64, high: u64) -> u64 {
    debug_assert!(low <= high);
    let span = high - low;
    if span == u64::MAX {
        return rng.next_u64();
    }
    low + rng.next_u64() % (span + 1)
}

/// Uniform float in `[0, 1)` built from the top 53 bits of one draw.
pub(crate) fn unit(rng: &mut ChaCha8Rng) -> f64 {
    (rng.next_u64() >> 11) as f64 * (1.0 / (1_u64 << 53) as f64)
}

pub(crate) fn chance(rng: &mut ChaCha8Rng, probability: f64) -> bool {
    unit(rng) < probability
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand_chacha::rand_core::SeedableRng;

    #[test]
    fn range_inclusive_stays_inside_bounds_and_hits_both_ends() {
        let mut rng = ChaCha8Rng::seed_from_u64(12_345);
        let mut seen_low = false;
        let mut seen_high = false;
        for _ in 0..2000 {
            let value = range_inclusive(&mut rng, 20, 30);
            assert!((20..=30).contains(&value));
            seen_low |= value == 20;
            seen_high |= value == 30;
        }
        assert!(seen_low && seen_high);
    }

    #[test]
    fn unit_is_half_open() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..1000 {
            let value = unit(&mut rng);
            assert!((0.0..1.0).contains(&value));
        }
    }

    #[test]
    fn chance_extremes_are_exact() {
        let mut rng = ChaCha8Rng::seed_from_u64(99);
        for _ in 0..100 {
            assert!(!chance(&mut rng, 0.0));
            assert!(chance(&mut rng, 1.0));
        }
    }
}
