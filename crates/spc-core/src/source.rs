//! Sample sources feeding the SPC pipeline
//!
//! The engine never generates data itself. Callers hand it a [`SampleSource`]
//! and it pulls one batch per analysis request. Tests use [`FixedSource`] with
//! literal data; demos can use the seeded simulated sources.

use crate::error::Result;
use std::collections::VecDeque;

/// Supplier of observation batches
pub trait SampleSource {
    type Sample;

    /// Produce the next batch. An empty batch means the source is exhausted.
    fn next_batch(&mut self) -> Result<Vec<Self::Sample>>;
}

/// Replays pre-recorded batches in order
#[derive(Debug, Clone)]
pub struct FixedSource<S> {
    batches: VecDeque<Vec<S>>,
}

impl<S> FixedSource<S> {
    pub fn new(batches: Vec<Vec<S>>) -> Self {
        Self {
            batches: batches.into(),
        }
    }

    /// A source that yields exactly one batch
    pub fn single(batch: Vec<S>) -> Self {
        Self::new(vec![batch])
    }

    pub fn remaining(&self) -> usize {
        self.batches.len()
    }
}

impl<S> SampleSource for FixedSource<S> {
    type Sample = S;

    fn next_batch(&mut self) -> Result<Vec<S>> {
        Ok(self.batches.pop_front().unwrap_or_default())
    }
}

#[cfg(feature = "simulation")]
pub use simulated::{SimulatedIndividualSource, SimulatedSubgroupSource};

#[cfg(feature = "simulation")]
mod simulated {
    use super::SampleSource;
    use crate::error::{Error, Result};
    use crate::sample::{IndividualSample, SubgroupSample};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use rand_distr::{Distribution, Normal};

    fn normal(mean: f64, std_dev: f64) -> Result<Normal<f64>> {
        Normal::new(mean, std_dev)
            .map_err(|e| Error::InvalidParameter(format!("normal({mean}, {std_dev}): {e}")))
    }

    /// Seeded normal process producing fixed-size subgroups
    pub struct SimulatedSubgroupSource {
        rng: ChaCha8Rng,
        dist: Normal<f64>,
        subgroup_size: usize,
        subgroups_per_batch: usize,
        next_index: usize,
    }

    impl SimulatedSubgroupSource {
        pub fn new(
            mean: f64,
            std_dev: f64,
            subgroup_size: usize,
            subgroups_per_batch: usize,
            seed: u64,
        ) -> Result<Self> {
            if subgroup_size == 0 || subgroups_per_batch == 0 {
                return Err(Error::InvalidParameter(
                    "subgroup_size and subgroups_per_batch must be positive".to_string(),
                ));
            }
            Ok(Self {
                rng: ChaCha8Rng::seed_from_u64(seed),
                dist: normal(mean, std_dev)?,
                subgroup_size,
                subgroups_per_batch,
                next_index: 1,
            })
        }
    }

    impl SampleSource for SimulatedSubgroupSource {
        type Sample = SubgroupSample;

        fn next_batch(&mut self) -> Result<Vec<SubgroupSample>> {
            let mut batch = Vec::with_capacity(self.subgroups_per_batch);
            for _ in 0..self.subgroups_per_batch {
                let values = (0..self.subgroup_size)
                    .map(|_| self.dist.sample(&mut self.rng))
                    .collect();
                batch.push(SubgroupSample::new(self.next_index, values));
                self.next_index += 1;
            }
            Ok(batch)
        }
    }

    /// Seeded normal process producing individual readings
    pub struct SimulatedIndividualSource {
        rng: ChaCha8Rng,
        dist: Normal<f64>,
        batch_len: usize,
        next_index: usize,
    }

    impl SimulatedIndividualSource {
        pub fn new(mean: f64, std_dev: f64, batch_len: usize, seed: u64) -> Result<Self> {
            if batch_len == 0 {
                return Err(Error::InvalidParameter(
                    "batch_len must be positive".to_string(),
                ));
            }
            Ok(Self {
                rng: ChaCha8Rng::seed_from_u64(seed),
                dist: normal(mean, std_dev)?,
                batch_len,
                next_index: 1,
            })
        }
    }

    impl SampleSource for SimulatedIndividualSource {
        type Sample = IndividualSample;

        fn next_batch(&mut self) -> Result<Vec<IndividualSample>> {
            let batch = (0..self.batch_len)
                .map(|i| IndividualSample::new(self.next_index + i, self.dist.sample(&mut self.rng)))
                .collect();
            self.next_index += self.batch_len;
            Ok(batch)
        }
    }
}
