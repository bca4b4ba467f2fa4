//! Construction-time errors for experiment data containers.

use thiserror::Error;

/// Shape violations detected while building a data container.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DesignError {
    /// The container would hold no data at all.
    #[error("empty {0}: at least one row is required")]
    Empty(&'static str),

    /// A row does not match the width established by the first row.
    #[error("ragged rows: row {row} has {actual} values, expected {expected}")]
    RaggedRows {
        /// Zero-based index of the offending row.
        row: usize,
        /// Number of values found in that row.
        actual: usize,
        /// Width of the first row.
        expected: usize,
    },

    /// A response row carries fewer replicates than sample variance needs.
    #[error("too few replicates: got {actual}, at least {required} required")]
    TooFewReplicates {
        /// Minimum replicate count.
        required: usize,
        /// Replicate count found.
        actual: usize,
    },
}

/// Result type for container construction.
pub type Result<T> = std::result::Result<T, DesignError>;
