//! A competitive-learning classifier that discovers group prototypes from block-encoded data.

#![deny(unsafe_code, rust_2018_idioms, rust_2021_compatibility)]
#![warn(missing_docs)]

pub mod config;
pub mod dataset;
pub mod error;
pub mod generator;
pub mod network;
pub mod random;

pub use dataset::{ComparisonUnit, Dataset, Sample, Shape};
pub use error::{Error, Result};
pub use generator::DatasetGenerator;
pub use network::{Network, NetworkState, Neuron};
pub use random::ZeroOne;
