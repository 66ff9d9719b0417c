use log::{debug, info};
use ndarray::Array1;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::{
    error::{Result, SimulationError},
    sampler::Sampler,
    trials::{AlbumOutcome, Trial},
};

/// Reduction of a full list of trial outcomes into summary statistics.
pub trait Aggregate: Sized {
    type Statistics;

    /// Fails with `InvalidIterationCount` on an empty list.
    fn aggregate(outcomes: &[Self]) -> Result<Self::Statistics>;
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct HitStatistics {
    pub iterations: usize,
    pub hits: usize,
    /// Percentage of iterations that were hits.
    pub hit_rate: f64,
}

impl HitStatistics {
    pub fn new(iterations: usize, hits: usize) -> Result<Self> {
        if iterations == 0 {
            return Err(SimulationError::InvalidIterationCount);
        }
        Ok(Self {
            iterations,
            hits,
            hit_rate: hits as f64 / iterations as f64 * 100.,
        })
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct CountStatistics {
    pub samples: usize,
    pub mean: f64,
    pub min: usize,
    pub max: usize,
}

impl CountStatistics {
    pub fn from_counts(counts: &[usize]) -> Option<Self> {
        let min = *counts.iter().min()?;
        let max = *counts.iter().max()?;
        let mean = Array1::from_iter(counts.iter().map(|&c| c as f64)).mean()?;

        Some(Self {
            samples: counts.len(),
            mean,
            min,
            max,
        })
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct AlbumStatistics {
    pub iterations: usize,
    pub completion: CountStatistics,
    /// Only over the trials that saw a duplicate; `None` if none did.
    pub first_duplicate: Option<CountStatistics>,
}

impl Aggregate for bool {
    type Statistics = HitStatistics;

    fn aggregate(outcomes: &[bool]) -> Result<HitStatistics> {
        HitStatistics::new(outcomes.len(), outcomes.iter().filter(|&&hit| hit).count())
    }
}

impl Aggregate for usize {
    type Statistics = CountStatistics;

    fn aggregate(outcomes: &[usize]) -> Result<CountStatistics> {
        CountStatistics::from_counts(outcomes).ok_or(SimulationError::InvalidIterationCount)
    }
}

impl Aggregate for AlbumOutcome {
    type Statistics = AlbumStatistics;

    fn aggregate(outcomes: &[AlbumOutcome]) -> Result<AlbumStatistics> {
        let completion = outcomes
            .iter()
            .map(|o| o.packs_to_complete)
            .collect::<Vec<_>>();
        let first_duplicate = outcomes
            .iter()
            .filter_map(|o| o.packs_to_first_duplicate)
            .collect::<Vec<_>>();

        Ok(AlbumStatistics {
            iterations: outcomes.len(),
            completion: usize::aggregate(&completion)?,
            first_duplicate: CountStatistics::from_counts(&first_duplicate),
        })
    }
}

/// Repeats a trial a fixed number of times and summarizes the outcomes.
pub struct MonteCarlo<'p> {
    iterations: usize,
    progress_every: usize,
    progress: Option<Box<dyn FnMut(usize) + 'p>>,
}

impl<'p> MonteCarlo<'p> {
    pub fn new(iterations: usize) -> Result<Self> {
        if iterations == 0 {
            return Err(SimulationError::InvalidIterationCount);
        }
        Ok(Self {
            iterations,
            progress_every: 0,
            progress: None,
        })
    }

    pub fn iterations(&self) -> usize {
        self.iterations
    }

    /// Calls `callback` with the iteration index before every `every`-th
    /// trial, starting with index 0. `every == 0` turns the hook off.
    pub fn with_progress<F: FnMut(usize) + 'p>(mut self, every: usize, callback: F) -> Self {
        self.progress_every = every;
        self.progress = Some(Box::new(callback));
        self
    }

    /// Runs `trial_fn` once per iteration and keeps every outcome.
    pub fn collect<O, F>(&mut self, mut trial_fn: F) -> Result<Vec<O>>
    where
        F: FnMut(usize) -> Result<O>,
    {
        info!("running {} simulations", self.iterations);
        let start = Instant::now();
        let mut outcomes = Vec::with_capacity(self.iterations);

        for i in 0..self.iterations {
            if self.progress_every > 0 && i % self.progress_every == 0 {
                if let Some(progress) = self.progress.as_mut() {
                    progress(i);
                }
            }
            outcomes.push(trial_fn(i)?);
        }

        info!(
            "{} simulations took {}ms",
            self.iterations,
            start.elapsed().as_millis()
        );
        Ok(outcomes)
    }

    pub fn run_with<O, F>(&mut self, trial_fn: F) -> Result<O::Statistics>
    where
        O: Aggregate,
        F: FnMut(usize) -> Result<O>,
    {
        let outcomes = self.collect(trial_fn)?;
        debug!("aggregating {} outcomes", outcomes.len());
        O::aggregate(&outcomes)
    }

    pub fn run<T, S>(
        &mut self,
        trial: &T,
        sampler: &mut S,
    ) -> Result<<T::Outcome as Aggregate>::Statistics>
    where
        T: Trial,
        T::Outcome: Aggregate,
        S: Sampler,
    {
        self.run_with(|_| trial.run(&mut *sampler))
    }
}
