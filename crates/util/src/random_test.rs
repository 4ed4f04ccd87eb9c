use rand::SeedableRng;
use rand::rngs::StdRng;

/// Runs `test` a fixed number of times, each with its own deterministically
/// seeded random number generator, and panics on the first failure.
///
/// Seeding every iteration from its index (rather than sharing one `Rng`
/// across iterations, or reseeding from entropy) makes a failing iteration
/// reproducible by rerunning with the printed seed alone.
pub fn random_test<F>(iterations: u64, mut test: F)
where
    F: FnMut(&mut StdRng),
{
    for seed in 0..iterations {
        let mut rng = StdRng::seed_from_u64(seed);

        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| test(&mut rng)));
        if let Err(payload) = result {
            eprintln!("random_test failed at seed {seed}");
            std::panic::resume_unwind(payload);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn runs_the_requested_number_of_iterations() {
        let mut count = 0;
        random_test(50, |_rng| count += 1);
        assert_eq!(count, 50);
    }

    #[test]
    fn same_seed_yields_the_same_draw() {
        let mut first = Vec::new();
        random_test(5, |rng| first.push(rand::Rng::random_range(rng, 0..1000)));

        let mut second = Vec::new();
        random_test(5, |rng| second.push(rand::Rng::random_range(rng, 0..1000)));

        assert_eq!(first, second);
    }
}
