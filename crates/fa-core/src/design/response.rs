//! Replicated response measurements.

use ndarray::Axis;
use serde::{Deserialize, Serialize};

use super::{Matrix, Vector};
use crate::error::{DesignError, Result};

/// Matrix of response measurements, one row per run, one column per
/// replicate.
///
/// Every run carries the same replicate count (the analysis assumes
/// balanced replication; unequal counts are rejected here rather than
/// deep inside a computation) and at least two replicates, so a sample
/// variance exists for every row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseMatrix {
    data: Matrix,
}

impl ResponseMatrix {
    /// Wrap an existing matrix, rejecting empty shapes and single
    /// replicates.
    pub fn new(data: Matrix) -> Result<Self> {
        if data.nrows() == 0 {
            return Err(DesignError::Empty("response matrix"));
        }
        if data.ncols() < 2 {
            return Err(DesignError::TooFewReplicates {
                required: 2,
                actual: data.ncols(),
            });
        }
        Ok(Self { data })
    }

    /// Build from nested rows, rejecting empty, ragged, and
    /// under-replicated input.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self> {
        let expected = match rows.first() {
            Some(first) => first.len(),
            None => return Err(DesignError::Empty("response matrix")),
        };
        if expected < 2 {
            return Err(DesignError::TooFewReplicates {
                required: 2,
                actual: expected,
            });
        }

        for (row, values) in rows.iter().enumerate() {
            if values.len() != expected {
                return Err(DesignError::RaggedRows {
                    row,
                    actual: values.len(),
                    expected,
                });
            }
        }

        let mut data = Matrix::zeros((rows.len(), expected));
        for (i, values) in rows.iter().enumerate() {
            for (j, &value) in values.iter().enumerate() {
                data[[i, j]] = value;
            }
        }
        Ok(Self { data })
    }

    /// Number of experimental runs (rows).
    pub fn n_runs(&self) -> usize {
        self.data.nrows()
    }

    /// Replicates per run (columns).
    pub fn n_replicates(&self) -> usize {
        self.data.ncols()
    }

    /// The underlying measurement matrix.
    pub fn data(&self) -> &Matrix {
        &self.data
    }

    /// Row-wise mean response, length `n_runs`.
    pub fn row_means(&self) -> Vector {
        self.data.sum_axis(Axis(1)) / self.n_replicates() as f64
    }
}
