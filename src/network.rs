//! A single-layer, winner-take-all competitive network.
//!
//! Every neuron owns a prototype vector with one weight per property. An input is assigned to the
//! neuron whose prototype has the largest dot product with it, and training pulls only that
//! winning prototype towards the input. Because training never looks at labels, the network
//! afterwards guesses which group each neuron stands for by finding the block of its prototype
//! that carries the most weight, which is the same block layout used by
//! [`DatasetGenerator`](crate::DatasetGenerator).

use std::fmt;

use log::{debug, info, warn};
use rand::{seq::SliceRandom, Rng};
use rand_distr::Distribution;

use crate::{dataset::Dataset, random::ZeroOne};

/// A neuron holding a prototype vector.
#[derive(Debug, Clone, PartialEq)]
pub struct Neuron {
    weights: Vec<f64>,
}

impl Neuron {
    /// Create a neuron with weights drawn from the given distribution.
    pub fn new<R, D>(input_size: usize, rng: &mut R, distribution: D) -> Self
    where
        R: Rng,
        D: Distribution<f64> + Copy,
    {
        Self {
            weights: (0..input_size).map(|_| rng.sample(distribution)).collect(),
        }
    }

    /// Create a neuron with the given prototype.
    pub fn with_weights(weights: Vec<f64>) -> Self {
        Self { weights }
    }

    /// Return the prototype vector.
    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    /// Compute the similarity score of the neuron to the given input.
    pub fn call(&self, input: &[f64]) -> f64 {
        self.weights.iter().zip(input).map(|(w, x)| w * x).sum()
    }

    /// Move the prototype a `learning_rate` fraction of the way towards `input`.
    pub fn learn(&mut self, input: &[f64], learning_rate: f64) {
        for (w, x) in self.weights.iter_mut().zip(input) {
            *w += learning_rate * (x - *w);
        }
    }

    /// Return the index of the `block_count` contiguous blocks of size `block_size` whose weights
    /// sum up the highest. Ties go to the lowest index.
    fn heaviest_block(&self, block_count: usize, block_size: usize) -> usize {
        let sums = (0..block_count).map(|b| {
            self.weights[b * block_size..(b + 1) * block_size]
                .iter()
                .sum::<f64>()
        });
        first_max(sums).unwrap_or(0)
    }
}

/// The lifecycle of the group order of a [`Network`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NetworkState {
    /// The network was never trained and labels every input with group 0.
    Untrained,
    /// The group order was resolved by at least one call to [`Network::train`].
    Trained,
}

/// A competitive network with one neuron per group.
#[derive(Debug, Clone, PartialEq)]
pub struct Network {
    property_count: usize,
    neurons: Vec<Neuron>,
    group_order: Vec<usize>,
    state: NetworkState,
}

impl Network {
    /// Create a network whose weights are independent coin flips between `0.0` and `1.0`.
    ///
    /// # Panics
    ///
    /// Panics if `group_count` is zero.
    pub fn new<R>(property_count: usize, group_count: usize, rng: &mut R) -> Self
    where
        R: Rng,
    {
        Self::from_distribution(property_count, group_count, rng, ZeroOne)
    }

    /// Create a network whose weights are drawn from `distribution`, one neuron after another.
    ///
    /// # Panics
    ///
    /// Panics if `group_count` is zero.
    pub fn from_distribution<R, D>(
        property_count: usize,
        group_count: usize,
        rng: &mut R,
        distribution: D,
    ) -> Self
    where
        R: Rng,
        D: Distribution<f64> + Copy,
    {
        let neurons = (0..group_count)
            .map(|_| Neuron::new(property_count, rng, distribution))
            .collect();
        Self::from_neurons(property_count, neurons)
    }

    /// Create a network from explicit prototypes, one per group.
    ///
    /// # Panics
    ///
    /// Panics if no prototype is given or if the prototypes differ in length.
    pub fn from_prototypes(prototypes: Vec<Vec<f64>>) -> Self {
        let property_count = prototypes.first().map_or(0, Vec::len);
        let neurons = prototypes.into_iter().map(Neuron::with_weights).collect();
        Self::from_neurons(property_count, neurons)
    }

    fn from_neurons(property_count: usize, neurons: Vec<Neuron>) -> Self {
        assert!(!neurons.is_empty(), "a network needs at least one group");
        assert!(
            neurons.iter().all(|n| n.weights.len() == property_count),
            "every prototype must have {} properties",
            property_count
        );
        let group_order = vec![0; neurons.len()];
        Self {
            property_count,
            neurons,
            group_order,
            state: NetworkState::Untrained,
        }
    }

    /// Return the length of the inputs accepted by the network.
    pub fn property_count(&self) -> usize {
        self.property_count
    }

    /// Return the number of neurons, which is also the number of groups.
    pub fn group_count(&self) -> usize {
        self.neurons.len()
    }

    /// Return the current state of the group order.
    pub fn state(&self) -> NetworkState {
        self.state
    }

    /// Return the group label assigned to each neuron.
    ///
    /// The order is not guaranteed to be a permutation: two neurons may resolve to the same
    /// group, leaving another group unreachable.
    pub fn group_order(&self) -> &[usize] {
        &self.group_order
    }

    /// Return the prototype of neuron `j`, i.e. column `j` of the weight matrix.
    pub fn prototype(&self, j: usize) -> Option<&[f64]> {
        self.neurons.get(j).map(Neuron::weights)
    }

    /// Return the weight connecting property `row` to neuron `col`.
    pub fn weight(&self, row: usize, col: usize) -> Option<f64> {
        self.neurons.get(col)?.weights.get(row).copied()
    }

    /// Return the group label of the neuron winning `sample`.
    ///
    /// # Panics
    ///
    /// Panics if the sample length differs from the property count or if an entry is not finite.
    pub fn predict(&self, sample: &[f64]) -> usize {
        self.group_order[self.winner(sample)]
    }

    /// Label every sample of `dataset` with its predicted group.
    ///
    /// # Panics
    ///
    /// Panics if the dataset samples do not have the network's property count.
    pub fn predict_on_dataset(&self, dataset: &Dataset) -> Dataset {
        let predictions = dataset.samples().iter().map(|s| self.predict(s)).collect();
        Dataset::new(
            self.property_count,
            self.group_count(),
            dataset.samples().to_vec(),
            predictions,
        )
    }

    /// Train the network on the samples of `dataset` for `epoch_count` epochs, then resolve the
    /// group order from the trained prototypes.
    ///
    /// Every epoch visits all samples in a new random order and updates only the winning neuron
    /// after each sample. Labels of the dataset are never consulted.
    ///
    /// # Panics
    ///
    /// Panics if the dataset does not have the network's property count.
    pub fn train<R>(
        &mut self,
        dataset: &Dataset,
        epoch_count: usize,
        learning_rate: f64,
        rng: &mut R,
    ) where
        R: Rng,
    {
        assert_eq!(
            dataset.property_count(),
            self.property_count,
            "dataset and network property counts differ"
        );
        let mut samples: Vec<&[f64]> = dataset.samples().iter().map(Vec::as_slice).collect();
        for epoch in 0..epoch_count {
            samples.shuffle(rng);
            for sample in &samples {
                let winner = self.winner(sample);
                self.neurons[winner].learn(sample, learning_rate);
            }
            debug!("epoch {} of {} done", epoch + 1, epoch_count);
        }
        self.update_group_order();
        info!(
            "trained for {} epochs at rate {}, group order = {:?}",
            epoch_count, learning_rate, self.group_order
        );
    }

    /// Return the index of the neuron scoring highest on `sample`. Ties go to the lowest index.
    fn winner(&self, sample: &[f64]) -> usize {
        assert_eq!(
            sample.len(),
            self.property_count,
            "sample length differs from the property count"
        );
        assert!(
            sample.iter().all(|x| x.is_finite()),
            "sample entries must be finite"
        );
        first_max(self.neurons.iter().map(|n| n.call(sample))).unwrap_or(0)
    }

    fn update_group_order(&mut self) {
        let group_count = self.group_count();
        let block_size = self.property_count / group_count;
        self.group_order = self
            .neurons
            .iter()
            .map(|n| n.heaviest_block(group_count, block_size))
            .collect();
        self.state = NetworkState::Trained;

        let mut seen = vec![false; group_count];
        for &g in &self.group_order {
            if std::mem::replace(&mut seen[g], true) {
                warn!(
                    "neurons share group {}, group order {:?} is not a permutation",
                    g, self.group_order
                );
                break;
            }
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Property count = {}, Group count = {}",
            self.property_count,
            self.group_count()
        )?;
        for row in 0..self.property_count {
            for (col, neuron) in self.neurons.iter().enumerate() {
                if col > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{:.3}", neuron.weights[row])?;
            }
            writeln!(f)?;
        }
        write!(f, "Group order = ")?;
        for (i, g) in self.group_order.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", g)?;
        }
        Ok(())
    }
}

/// Return the index of the first maximum, scanning in increasing order.
fn first_max<I>(scores: I) -> Option<usize>
where
    I: IntoIterator<Item = f64>,
{
    let mut best: Option<(usize, f64)> = None;
    for (i, score) in scores.into_iter().enumerate() {
        match best {
            Some((_, b)) if score <= b => {}
            _ => best = Some((i, score)),
        }
    }
    best.map(|(i, _)| i)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_max_keeps_the_lowest_index() {
        assert_eq!(first_max([1.0, 3.0, 3.0, 2.0]), Some(1));
        assert_eq!(first_max([0.0, 0.0]), Some(0));
        assert_eq!(first_max(std::iter::empty::<f64>()), None);
    }

    #[test]
    fn learn_moves_towards_the_input() {
        let mut neuron = Neuron::with_weights(vec![0.0, 1.0]);
        neuron.learn(&[1.0, 0.0], 0.25);
        assert_eq!(neuron.weights(), &[0.25, 0.75]);
    }

    #[test]
    fn heaviest_block_ignores_trailing_weights() {
        let neuron = Neuron::with_weights(vec![0.0, 1.0, 1.0, 0.5, 5.0]);
        assert_eq!(neuron.heaviest_block(2, 2), 1);
    }
}
