//! Data structures and methods for dealing with datasets.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A single feature vector. Every sample of a dataset holds exactly `property_count` entries.
pub type Sample = Vec<f64>;

/// The dimensions that must agree before two datasets can be compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Shape {
    /// The length of every sample.
    pub property_count: usize,
    /// The number of distinct group labels.
    pub group_count: usize,
    /// The number of samples.
    pub sample_count: usize,
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "(property count = {}, group count = {}, sample count = {})",
            self.property_count, self.group_count, self.sample_count
        )
    }
}

/// A sample whose label differs between two compared datasets.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComparisonUnit<'a> {
    /// The sample, borrowed from the receiving dataset.
    pub sample: &'a [f64],
    /// The label held by the dataset passed as the comparison argument.
    pub expected_group: usize,
    /// The label held by the receiving dataset.
    pub actual_group: usize,
}

impl fmt::Display for ComparisonUnit<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "sample ")?;
        write_sample(f, self.sample)?;
        write!(
            f,
            " | expected group = {}, actual group = {}",
            self.expected_group, self.actual_group
        )
    }
}

/// A labelled collection of samples.
///
/// `samples[i]` is labelled by `groups[i]`. A dataset is never changed once built; operations
/// that relabel samples return a new dataset instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    property_count: usize,
    group_count: usize,
    samples: Vec<Sample>,
    groups: Vec<usize>,
}

impl Dataset {
    /// Create a dataset pairing each sample with the group at the same position.
    ///
    /// # Panics
    ///
    /// Panics if `samples` and `groups` have different lengths.
    pub fn new(
        property_count: usize,
        group_count: usize,
        samples: Vec<Sample>,
        groups: Vec<usize>,
    ) -> Self {
        assert_eq!(
            samples.len(),
            groups.len(),
            "every sample must be paired with a group"
        );
        Self {
            property_count,
            group_count,
            samples,
            groups,
        }
    }

    /// Return the length of every sample.
    pub fn property_count(&self) -> usize {
        self.property_count
    }

    /// Return the number of groups a label can take.
    pub fn group_count(&self) -> usize {
        self.group_count
    }

    /// Return the number of samples.
    pub fn sample_count(&self) -> usize {
        self.samples.len()
    }

    /// Check if the dataset holds no sample.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Return the shape of the dataset.
    pub fn shape(&self) -> Shape {
        Shape {
            property_count: self.property_count,
            group_count: self.group_count,
            sample_count: self.sample_count(),
        }
    }

    /// Return all samples, in order.
    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    /// Return all group labels, in order.
    pub fn groups(&self) -> &[usize] {
        &self.groups
    }

    /// Return the `i`-th sample together with its group.
    pub fn get(&self, i: usize) -> Option<(&[f64], usize)> {
        Some((self.samples.get(i)?.as_slice(), *self.groups.get(i)?))
    }

    /// Iterate over `(sample, group)` pairs in order.
    pub fn iter(&self) -> impl Iterator<Item = (&[f64], usize)> + '_ {
        self.samples
            .iter()
            .map(Vec::as_slice)
            .zip(self.groups.iter().copied())
    }

    /// Return every sample whose label in `self` differs from its label in `other`, in order.
    ///
    /// The samples themselves are not compared, only the labels at each position.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ShapeMismatch`] when the datasets disagree on the property count, the
    /// group count or the sample count. No label is inspected in that case.
    pub fn compare_datasets<'a>(&'a self, other: &Dataset) -> Result<Vec<ComparisonUnit<'a>>> {
        let (left, right) = (self.shape(), other.shape());
        if left != right {
            return Err(Error::ShapeMismatch { left, right });
        }
        Ok(self
            .iter()
            .zip(other.groups.iter().copied())
            .filter(|((_, actual), expected)| actual != expected)
            .map(|((sample, actual_group), expected_group)| ComparisonUnit {
                sample,
                expected_group,
                actual_group,
            })
            .collect())
    }
}

impl fmt::Display for Dataset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Sample count = {}", self.sample_count())?;
        for (sample, group) in self.iter() {
            write!(f, "\nsample ")?;
            write_sample(f, sample)?;
            write!(f, " | group = {}", group)?;
        }
        Ok(())
    }
}

/// Write the entries of a sample separated by spaces.
pub(crate) fn write_sample(f: &mut fmt::Formatter<'_>, sample: &[f64]) -> fmt::Result {
    for (i, x) in sample.iter().enumerate() {
        if i > 0 {
            write!(f, " ")?;
        }
        write!(f, "{}", x)?;
    }
    Ok(())
}
