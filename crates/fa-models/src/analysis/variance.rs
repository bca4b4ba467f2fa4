//! Replicate variance estimation.

use ndarray::Axis;

use fa_core::design::{ResponseMatrix, Vector};

use crate::base::Result;
use crate::error::ModelError;

/// Per-run sample variances together with their pooled mean.
#[derive(Debug, Clone, PartialEq)]
pub struct VarianceEstimate {
    /// Unbiased sample variance of each run, length `n_runs`.
    pub per_run: Vector,
    /// Unweighted mean of the per-run variances.
    pub pooled: f64,
}

/// Estimate per-run and pooled variance from replicated measurements.
///
/// Each row variance is Bessel-corrected (divisor m − 1). The pooled
/// value is the plain arithmetic mean of the row variances, which is only
/// valid because the replicate count is constant across rows; the pooled
/// estimate itself is only meaningful once Cochran's test has accepted
/// homogeneity.
pub fn replicate_variances(response: &ResponseMatrix) -> Result<VarianceEstimate> {
    let n = response.n_runs();
    let m = response.n_replicates();
    if n == 0 {
        return Err(ModelError::invalid_input("response matrix has no runs"));
    }
    if m < 2 {
        return Err(ModelError::invalid_input(format!(
            "sample variance requires at least 2 replicates per run, got {m}"
        )));
    }

    let mut per_run = Vector::zeros(n);
    for (i, row) in response.data().axis_iter(Axis(0)).enumerate() {
        let mean = row.sum() / m as f64;
        let ss: f64 = row.iter().map(|y| (y - mean).powi(2)).sum();
        per_run[i] = ss / (m - 1) as f64;
    }
    let pooled = per_run.sum() / n as f64;

    Ok(VarianceEstimate { per_run, pooled })
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use fa_core::ResponseMatrix;

    use super::*;

    #[test]
    fn constant_rows_have_zero_variance() {
        let response = ResponseMatrix::from_rows(vec![
            vec![5.0, 5.0, 5.0],
            vec![-3.0, -3.0, -3.0],
        ])
        .unwrap();

        let estimate = replicate_variances(&response).unwrap();
        assert_abs_diff_eq!(estimate.per_run[0], 0.0);
        assert_abs_diff_eq!(estimate.per_run[1], 0.0);
        assert_abs_diff_eq!(estimate.pooled, 0.0);
    }

    #[test]
    fn bessel_corrected_row_variances() {
        let response = ResponseMatrix::from_rows(vec![
            vec![10.0, 12.0],
            vec![14.0, 16.0],
            vec![8.0, 10.0],
            vec![20.0, 18.0],
        ])
        .unwrap();

        let estimate = replicate_variances(&response).unwrap();
        for variance in estimate.per_run.iter() {
            assert_abs_diff_eq!(*variance, 2.0);
        }
        assert_abs_diff_eq!(estimate.pooled, 2.0);
    }

    #[test]
    fn pooled_is_mean_of_unequal_row_variances() {
        let response = ResponseMatrix::from_rows(vec![
            vec![0.0, 2.0],  // variance 2
            vec![0.0, 4.0],  // variance 8
        ])
        .unwrap();

        let estimate = replicate_variances(&response).unwrap();
        assert_abs_diff_eq!(estimate.per_run[0], 2.0);
        assert_abs_diff_eq!(estimate.per_run[1], 8.0);
        assert_abs_diff_eq!(estimate.pooled, 5.0);
    }
}
