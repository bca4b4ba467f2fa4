//! Design matrix of coded factor levels.

use ndarray::s;
use serde::{Deserialize, Serialize};

use super::Matrix;
use crate::error::{DesignError, Result};

/// Matrix of factor levels, one row per experimental run.
///
/// The first column is conventionally the constant intercept term (all
/// ones); the remaining columns are the coded factor levels. The matrix
/// is rectangular and non-empty by construction. Linear independence of
/// the columns is not checked here; a rank-deficient design surfaces when
/// coefficients are estimated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignMatrix {
    data: Matrix,
}

impl DesignMatrix {
    /// Wrap an existing matrix, rejecting empty shapes.
    pub fn new(data: Matrix) -> Result<Self> {
        if data.nrows() == 0 || data.ncols() == 0 {
            return Err(DesignError::Empty("design matrix"));
        }
        Ok(Self { data })
    }

    /// Build from nested rows, rejecting empty and ragged input.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self> {
        let expected = match rows.first() {
            Some(first) if !first.is_empty() => first.len(),
            _ => return Err(DesignError::Empty("design matrix")),
        };

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

    /// Number of model terms (columns, intercept included).
    pub fn n_terms(&self) -> usize {
        self.data.ncols()
    }

    /// Number of factor columns (everything after the intercept).
    pub fn n_factors(&self) -> usize {
        self.data.ncols() - 1
    }

    /// The underlying level matrix.
    pub fn data(&self) -> &Matrix {
        &self.data
    }

    /// Augment with every interaction column: the element-wise product of
    /// each subset of two or more factor columns, ordered by subset size
    /// and then by column index (x1x2, x1x3, x2x3, x1x2x3 for three
    /// factors).
    pub fn with_interactions(&self) -> Self {
        self.with_interactions_up_to(self.n_factors())
    }

    /// Augment with interaction columns up to the given order.
    ///
    /// `max_order` is the largest number of factors multiplied into a
    /// single column; values below 2 leave the design unchanged, values
    /// above the factor count are clamped.
    pub fn with_interactions_up_to(&self, max_order: usize) -> Self {
        let terms = interaction_terms(self.n_factors(), max_order);
        if terms.is_empty() {
            return self.clone();
        }

        let n = self.n_runs();
        let k = self.n_terms();
        let mut data = Matrix::zeros((n, k + terms.len()));
        data.slice_mut(s![.., ..k]).assign(&self.data);

        for (offset, term) in terms.iter().enumerate() {
            for i in 0..n {
                let mut product = 1.0;
                for &factor in term {
                    // factor j lives in column j + 1, after the intercept
                    product *= self.data[[i, factor + 1]];
                }
                data[[i, k + offset]] = product;
            }
        }

        Self { data }
    }
}

/// Interaction term index sets for `n_factors` factors, sizes
/// `2..=max_order`, ordered by size and then lexicographically.
///
/// Factor indices are zero-based and exclude the intercept column. The
/// same ordering names interaction columns in presentation code, so it
/// must stay stable.
pub fn interaction_terms(n_factors: usize, max_order: usize) -> Vec<Vec<usize>> {
    let max_order = max_order.min(n_factors);
    let mut terms = Vec::new();
    for size in 2..=max_order {
        combinations(n_factors, size, &mut terms);
    }
    terms
}

/// Append all `size`-element combinations of `0..pool` in lexicographic
/// order.
fn combinations(pool: usize, size: usize, out: &mut Vec<Vec<usize>>) {
    let mut current = Vec::with_capacity(size);
    fn recurse(pool: usize, size: usize, start: usize, current: &mut Vec<usize>, out: &mut Vec<Vec<usize>>) {
        if current.len() == size {
            out.push(current.clone());
            return;
        }
        for i in start..pool {
            current.push(i);
            recurse(pool, size, i + 1, current, out);
            current.pop();
        }
    }
    recurse(pool, size, 0, &mut current, out);
}
