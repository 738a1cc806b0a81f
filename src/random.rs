//! Helpers around the run's random stream.

use rand::Rng;

/// Fresh entropy-derived seed, for runs where replicability is not needed.
pub fn random_seed() -> u64 {
    rand::rng().random()
}

/// Uniform draws with replacement from `pool`, one RNG draw per yielded
/// item, in draw order. `pool` must be non-empty whenever `count > 0`.
pub fn sample_with_replacement<'a, T, R: Rng>(
    pool: &'a [T],
    count: usize,
    rng: &'a mut R,
) -> impl Iterator<Item = &'a T> + 'a {
    (0..count).map(move |_| &pool[rng.random_range(0..pool.len())])
}

#[cfg(test)]
mod test {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn test_sample_is_deterministic_per_seed() {
        let pool: Vec<usize> = (0..10).collect();
        let draw = |seed| {
            let mut rng = StdRng::seed_from_u64(seed);
            sample_with_replacement(&pool, 50, &mut rng)
                .copied()
                .collect::<Vec<_>>()
        };
        assert_eq!(draw(99), draw(99));
        assert_ne!(draw(99), draw(100));
    }

    #[test]
    fn test_sample_zero_count_is_empty() {
        let pool = [1, 2, 3];
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(
            0,
            sample_with_replacement(&pool, 0, &mut rng).count()
        );
    }

    #[test]
    fn test_sample_covers_pool_uniformly() {
        let pool: Vec<usize> = (0..10).collect();
        let mut rng = StdRng::seed_from_u64(7);
        let samples = 10_000;
        let mut incidence = [0usize; 10];
        for &picked in sample_with_replacement(&pool, samples, &mut rng) {
            incidence[picked] += 1;
        }

        let expected = samples as f64 / pool.len() as f64;
        let max_deviation = expected * 0.33;
        for (value, count) in incidence.iter().enumerate() {
            assert!(
                (expected - *count as f64).abs() < max_deviation,
                "{value}: {count} != {expected} ± {max_deviation}"
            );
        }
    }

    #[test]
    fn test_random_seed_varies() {
        // entropy source, so equal consecutive draws are effectively impossible
        assert_ne!(random_seed(), random_seed());
    }
}
