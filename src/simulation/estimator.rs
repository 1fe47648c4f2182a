use crate::Payout;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use rayon::iter::IntoParallelIterator;
use rayon::iter::ParallelIterator;

/// a monte carlo accumulator for one side bet.
///
/// the parallel runner clones nothing and locks nothing. each rayon
/// task folds samples into its own private estimator, and the
/// per-task results are merged pairwise through absorb at the end.
pub trait Estimator: Default + Send {
    /// draw one deal from the rng and record its outcome
    fn sample<R: Rng>(&mut self, rng: &mut R);
    /// fold a peer task's counts into this one
    fn absorb(&mut self, other: Self);
    /// estimated payout per unit wagered
    fn expectation(&self) -> Payout;
}

/// sample the given number of deals across the rayon thread pool.
/// each task owns an os-seeded rng, so results vary run to run.
pub fn run<E: Estimator>(trials: usize) -> E {
    let clock = std::time::Instant::now();
    let estimate = (0..trials)
        .into_par_iter()
        .fold(
            || (E::default(), SmallRng::from_os_rng()),
            |(mut estimator, mut rng), _| {
                estimator.sample(&mut rng);
                (estimator, rng)
            },
        )
        .map(|(estimator, _)| estimator)
        .reduce(E::default, |mut estimator, peer| {
            estimator.absorb(peer);
            estimator
        });
    log::info!(
        "{:<32}{:<16}{:<16?}",
        "sampled deals",
        trials,
        clock.elapsed()
    );
    estimate
}

/// sample sequentially from a fixed seed. reproducible, single
/// threaded, meant for regression runs and tests.
pub fn seeded<E: Estimator>(trials: usize, seed: u64) -> E {
    let ref mut rng = SmallRng::seed_from_u64(seed);
    let mut estimator = E::default();
    for _ in 0..trials {
        estimator.sample(rng);
    }
    estimator
}
