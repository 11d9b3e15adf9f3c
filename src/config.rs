//! Configuration of training experiments.

use serde::{Deserialize, Serialize};

/// A single training call on a network.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExperimentConfig {
    /// Number of passes over the dataset.
    pub epoch_count: usize,
    /// Fraction of the distance to the input covered by each update of a winning neuron.
    pub learning_rate: f64,
}

impl ExperimentConfig {
    /// Create an experiment training for `epoch_count` epochs at `learning_rate`.
    pub fn new(epoch_count: usize, learning_rate: f64) -> Self {
        Self {
            epoch_count,
            learning_rate,
        }
    }
}

/// A dataset shape together with the experiments run, in order, on a single network.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResearchConfig {
    /// Name shown in reports.
    pub name: String,
    /// Length of every sample. Must be a multiple of `group_count`.
    pub property_count: usize,
    /// Number of groups, which is also the number of neurons.
    pub group_count: usize,
    /// Number of generated samples.
    pub sample_count: usize,
    /// Experiments applied cumulatively to the same network.
    pub experiments: Vec<ExperimentConfig>,
}

impl ResearchConfig {
    /// 32 properties over 8 groups.
    pub fn eight_groups() -> Self {
        Self {
            name: "Research 8 groups".to_string(),
            property_count: 32,
            group_count: 8,
            sample_count: 25,
            experiments: vec![
                ExperimentConfig::new(1, 0.0),
                ExperimentConfig::new(10, 0.05),
                ExperimentConfig::new(20, 0.01),
            ],
        }
    }

    /// 32 properties over 16 groups.
    pub fn sixteen_groups() -> Self {
        Self {
            name: "Research 16 groups".to_string(),
            property_count: 32,
            group_count: 16,
            sample_count: 25,
            experiments: vec![
                ExperimentConfig::new(1, 0.0),
                ExperimentConfig::new(10, 0.05),
                ExperimentConfig::new(20, 0.01),
                ExperimentConfig::new(20, 0.01),
            ],
        }
    }
}

/// Top-level configuration of the playground.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaygroundConfig {
    /// Seed of the single random generator shared by every component.
    pub seed: u64,
    /// Researches to run, in order.
    pub researches: Vec<ResearchConfig>,
}

impl Default for PlaygroundConfig {
    fn default() -> Self {
        Self {
            seed: 1450,
            researches: vec![
                ResearchConfig::eight_groups(),
                ResearchConfig::sixteen_groups(),
            ],
        }
    }
}
