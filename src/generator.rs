//! Synthetic, block-encoded datasets.
//!
//! The feature space of a generated dataset is split into one contiguous block per group. A
//! sample of group `g` is zero everywhere except inside block `g`, whose first entry (the
//! signature feature) is always `1.0` and whose remaining entries are coin flips.

use log::debug;
use rand::{seq::SliceRandom, Rng};
use rand_distr::Distribution;

use crate::{
    dataset::{Dataset, Sample},
    error::{Error, Result},
    random::ZeroOne,
};

/// Builds datasets whose labels are recoverable from the block layout of their samples.
#[derive(Debug, Clone, Copy)]
pub struct DatasetGenerator {
    group_count: usize,
}

impl DatasetGenerator {
    /// Create a generator producing samples for `group_count` groups.
    pub fn new(group_count: usize) -> Self {
        Self { group_count }
    }

    /// Return the number of groups of the generated datasets.
    pub fn group_count(&self) -> usize {
        self.group_count
    }

    /// Generate `sample_count` samples of length `property_count`, distributed round-robin over
    /// the groups and then shuffled together with their labels.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ShapeRelation`] if `property_count` is not a multiple of the group count,
    /// or if it leaves no room for a block per group.
    pub fn generate_dataset<R>(
        &self,
        property_count: usize,
        sample_count: usize,
        rng: &mut R,
    ) -> Result<Dataset>
    where
        R: Rng,
    {
        let block_size = self.block_size(property_count)?;
        let mut classified: Vec<(Sample, usize)> = (0..sample_count)
            .map(|i| {
                let group = i % self.group_count;
                (self.classified_sample(property_count, block_size, group, rng), group)
            })
            .collect();
        // Samples and labels move as one unit.
        classified.shuffle(rng);

        debug!(
            "generated {} samples of {} properties over {} groups",
            sample_count, property_count, self.group_count
        );
        let (samples, groups) = classified.into_iter().unzip();
        Ok(Dataset::new(
            property_count,
            self.group_count,
            samples,
            groups,
        ))
    }

    fn block_size(&self, property_count: usize) -> Result<usize> {
        if self.group_count == 0
            || property_count < self.group_count
            || property_count % self.group_count != 0
        {
            return Err(Error::ShapeRelation {
                property_count,
                group_count: self.group_count,
            });
        }
        Ok(property_count / self.group_count)
    }

    fn classified_sample<R>(
        &self,
        property_count: usize,
        block_size: usize,
        group: usize,
        rng: &mut R,
    ) -> Sample
    where
        R: Rng,
    {
        let mut sample = vec![0.0; property_count];
        let start = group * block_size;
        let block = &mut sample[start..start + block_size];
        block[0] = 1.0;
        for x in &mut block[1..] {
            *x = ZeroOne.sample(rng);
        }
        sample
    }
}
