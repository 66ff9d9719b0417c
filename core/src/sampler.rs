use log::trace;
use rand::{seq::SliceRandom, Rng};

use crate::{
    error::{Result, SimulationError},
    structs::{Sample, Universe},
};

/// Host-supplied randomness.
pub trait EntropySource {
    /// Uniform integer in `low..=high`. Callers guarantee `low <= high`.
    fn next_random_int(&mut self, low: usize, high: usize) -> usize;

    fn shuffle<T>(&mut self, items: &mut [T]);
}

impl<R: Rng> EntropySource for R {
    fn next_random_int(&mut self, low: usize, high: usize) -> usize {
        self.gen_range(low..=high)
    }

    fn shuffle<T>(&mut self, items: &mut [T]) {
        items.shuffle(self)
    }
}

pub trait Sampler {
    /// `k` distinct items, every k-subset equally likely.
    fn draw<T: Clone>(&mut self, universe: &Universe<T>, k: usize) -> Result<Sample<T>>;

    /// `n` independent picks, with replacement.
    fn draw_independent<T: Clone>(&mut self, universe: &Universe<T>, n: usize)
        -> Result<Sample<T>>;
}

impl<S: Sampler + ?Sized> Sampler for &mut S {
    fn draw<T: Clone>(&mut self, universe: &Universe<T>, k: usize) -> Result<Sample<T>> {
        (**self).draw(universe, k)
    }

    fn draw_independent<T: Clone>(
        &mut self,
        universe: &Universe<T>,
        n: usize,
    ) -> Result<Sample<T>> {
        (**self).draw_independent(universe, n)
    }
}

/// Sampler backed by an entropy source, drawing with a partial Fisher-Yates
/// shuffle over a reusable index buffer.
#[derive(Debug, Clone)]
pub struct UniformSampler<E> {
    source: E,
    scratch: Vec<usize>,
}

impl<E: EntropySource> UniformSampler<E> {
    pub fn new(source: E) -> Self {
        Self {
            source,
            scratch: Vec::new(),
        }
    }

    pub fn source_mut(&mut self) -> &mut E {
        &mut self.source
    }

    pub fn into_inner(self) -> E {
        self.source
    }
}

impl<E: EntropySource> Sampler for UniformSampler<E> {
    fn draw<T: Clone>(&mut self, universe: &Universe<T>, k: usize) -> Result<Sample<T>> {
        let n = universe.len();
        if k > n {
            return Err(SimulationError::InvalidSampleSize {
                requested: k,
                available: n,
            });
        }

        // The buffer is left permuted between draws. Each step still picks
        // uniformly among the remaining indices, so the order it starts in
        // does not matter.
        if self.scratch.len() != n {
            trace!("resizing sampler scratch buffer to {n}");
            self.scratch = (0..n).collect();
        }

        for i in 0..k {
            let j = self.source.next_random_int(i, n - 1);
            self.scratch.swap(i, j);
        }

        Ok(Sample(
            self.scratch[..k]
                .iter()
                .map(|&i| universe[i].clone())
                .collect(),
        ))
    }

    fn draw_independent<T: Clone>(
        &mut self,
        universe: &Universe<T>,
        n: usize,
    ) -> Result<Sample<T>> {
        if universe.is_empty() && n > 0 {
            return Err(SimulationError::InvalidSampleSize {
                requested: n,
                available: 0,
            });
        }

        let last = universe.len().saturating_sub(1);
        Ok(Sample(
            (0..n)
                .map(|_| universe[self.source.next_random_int(0, last)].clone())
                .collect(),
        ))
    }
}

/// Deterministic sampler that hands out the universe in order, wrapping around.
#[cfg(test)]
pub(crate) mod mock {
    use super::*;

    #[derive(Debug, Default)]
    pub struct CyclingSampler {
        next: usize,
    }

    impl CyclingSampler {
        fn take<T: Clone>(&mut self, universe: &Universe<T>, k: usize) -> Sample<T> {
            let n = universe.len();
            if n == 0 {
                return Sample(vec![]);
            }
            let items = (0..k).map(|i| universe[(self.next + i) % n].clone()).collect();
            self.next = (self.next + k) % n;
            Sample(items)
        }
    }

    impl Sampler for CyclingSampler {
        fn draw<T: Clone>(&mut self, universe: &Universe<T>, k: usize) -> Result<Sample<T>> {
            if k > universe.len() {
                return Err(SimulationError::InvalidSampleSize {
                    requested: k,
                    available: universe.len(),
                });
            }
            Ok(self.take(universe, k))
        }

        fn draw_independent<T: Clone>(
            &mut self,
            universe: &Universe<T>,
            n: usize,
        ) -> Result<Sample<T>> {
            if universe.is_empty() {
                return Ok(Sample(vec![]));
            }
            Ok(self.take(universe, n))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fxhash::FxHashSet;
    use rand::{rngs::StdRng, SeedableRng};
    use rstest::rstest;

    fn sampler(seed: u64) -> UniformSampler<StdRng> {
        UniformSampler::new(StdRng::seed_from_u64(seed))
    }

    fn numbers(n: usize) -> Universe<usize> {
        (0..n).collect()
    }

    #[rstest]
    #[case(10, 0)]
    #[case(10, 1)]
    #[case(10, 6)]
    #[case(10, 10)]
    #[case(728, 6)]
    fn draws_distinct_members(#[case] size: usize, #[case] k: usize) {
        let universe = numbers(size);
        let mut sampler = sampler(7);

        for _ in 0..200 {
            let sample = sampler.draw(&universe, k).unwrap();
            assert_eq!(sample.len(), k);
            assert!(!sample.has_duplicates());
            assert!(sample.iter().all(|&i| i < size));
        }
    }

    #[rstest]
    #[case(0, 1)]
    #[case(5, 6)]
    #[case(365, 1000)]
    fn rejects_oversized_draws(#[case] size: usize, #[case] k: usize) {
        let result = sampler(1).draw(&numbers(size), k);
        assert_eq!(
            result,
            Err(SimulationError::InvalidSampleSize {
                requested: k,
                available: size
            })
        );
    }

    #[test]
    fn single_draws_are_uniform() {
        let size = 10;
        let draws = 100_000;
        let universe = numbers(size);
        let mut sampler = sampler(42);
        let mut counts = vec![0usize; size];

        for _ in 0..draws {
            let sample = sampler.draw(&universe, 1).unwrap();
            counts[sample.0[0]] += 1;
        }

        let expected = 1. / size as f64;
        for count in counts {
            let frequency = count as f64 / draws as f64;
            assert!(
                (frequency - expected).abs() < 0.01,
                "frequency {frequency} too far from {expected}"
            );
        }
    }

    #[test]
    fn full_draw_is_a_permutation() {
        let universe = numbers(50);
        let sample = sampler(3).draw(&universe, 50).unwrap();
        let seen = sample.iter().copied().collect::<FxHashSet<_>>();
        assert_eq!(seen.len(), 50);
    }

    #[test]
    fn scratch_buffer_follows_universe_size() {
        let mut sampler = sampler(9);
        sampler.draw(&numbers(100), 10).unwrap();
        let sample = sampler.draw(&numbers(3), 3).unwrap();
        assert!(sample.iter().all(|&i| i < 3));
    }

    #[test]
    fn independent_draws_may_repeat() {
        let universe = numbers(2);
        let sample = sampler(5).draw_independent(&universe, 30).unwrap();
        assert_eq!(sample.len(), 30);
        assert!(sample.has_duplicates());
    }

    #[test]
    fn independent_draw_from_empty_universe_fails() {
        let universe = numbers(0);
        let mut sampler = sampler(5);
        assert!(sampler.draw_independent(&universe, 1).is_err());
        assert_eq!(sampler.draw_independent(&universe, 0).unwrap().len(), 0);
    }

    #[test]
    fn seeded_samplers_repeat_themselves() {
        let universe = numbers(728);
        let a = sampler(11).draw(&universe, 6).unwrap();
        let b = sampler(11).draw(&universe, 6).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn entropy_source_shuffle_keeps_items() {
        let mut rng = StdRng::seed_from_u64(2);
        let mut digits = (0..10).collect::<Vec<_>>();
        EntropySource::shuffle(&mut rng, &mut digits);
        digits.sort();
        assert_eq!(digits, (0..10).collect::<Vec<_>>());
    }
}
