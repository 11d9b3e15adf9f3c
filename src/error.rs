//! Defines dataset and network errors.

use thiserror::Error;

use crate::dataset::Shape;

/// A convenient alias for results returned by this crate.
pub type Result<T> = std::result::Result<T, Error>;

/// An error type for all fallible operations on datasets.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Error {
    /// The property count can not be split into one equally sized, non-empty block per group.
    #[error(
        "Property count / group count violation: property count = {property_count}, group count = {group_count}."
    )]
    ShapeRelation {
        /// The requested number of properties per sample.
        property_count: usize,
        /// The number of groups the generator was configured with.
        group_count: usize,
    },
    /// An operation was performed on 2 datasets with incompatible shapes.
    #[error("Incompatible dataset shapes {left} and {right}.")]
    ShapeMismatch {
        /// The shape of the receiving dataset.
        left: Shape,
        /// The shape of the other dataset.
        right: Shape,
    },
}
