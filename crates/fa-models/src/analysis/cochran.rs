//! Cochran's test for homogeneity of variances.

use serde::{Deserialize, Serialize};

use fa_core::design::Vector;

use crate::base::quantile::fisher_quantile;
use crate::base::Result;
use crate::error::ModelError;

/// Outcome of Cochran's homogeneity test.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CochranTest {
    /// Observed statistic Gp = max(s²) / Σ s².
    pub g_observed: f64,
    /// Critical value Gt at the chosen significance level.
    pub g_critical: f64,
    /// True iff Gp < Gt.
    pub homogeneous: bool,
}

/// Test whether the per-run variances are statistically comparable.
///
/// The critical value is derived from the Fisher–Snedecor quantile with
/// f1 = m − 1 and f2 = f1·N degrees of freedom:
/// Gt = F⁻¹(1−α; f1, f1·N) / (F⁻¹(1−α; f1, f1·N) + N − 1).
///
/// Homogeneity is the precondition for pooling the variances; the caller
/// decides what to do with a failed verdict, this function only reports
/// it.
pub fn cochran_test(variances: &Vector, replicates: usize, alpha: f64) -> Result<CochranTest> {
    let n = variances.len();
    if n < 2 {
        return Err(ModelError::invalid_input(
            "Cochran's test is degenerate for fewer than 2 experiments",
        ));
    }
    if replicates < 2 {
        return Err(ModelError::invalid_input(format!(
            "Cochran's test requires at least 2 replicates per run, got {replicates}"
        )));
    }

    let sum: f64 = variances.sum();
    if sum <= 0.0 {
        return Err(ModelError::invalid_input(
            "Cochran's statistic is undefined for a zero variance sum",
        ));
    }

    let max = variances.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    let g_observed = max / sum;

    let f1 = replicates - 1;
    let f = fisher_quantile(1.0 - alpha, f1, f1 * n)?;
    let g_critical = f / (f + n as f64 - 1.0);

    Ok(CochranTest {
        g_observed,
        g_critical,
        homogeneous: g_observed < g_critical,
    })
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use ndarray::array;

    use super::*;

    #[test]
    fn equal_variances_give_one_over_n() {
        let variances = array![2.0, 2.0, 2.0, 2.0];
        let test = cochran_test(&variances, 2, 0.05).unwrap();

        assert_abs_diff_eq!(test.g_observed, 0.25);
        // F⁻¹(0.95; 1, 4) = 7.7086 → Gt = 7.7086 / (7.7086 + 3)
        assert_abs_diff_eq!(test.g_critical, 0.7199, epsilon = 1e-3);
        assert!(test.homogeneous);
    }

    #[test]
    fn dominant_variance_fails_homogeneity() {
        let variances = array![0.1, 0.1, 0.1, 40.0];
        let test = cochran_test(&variances, 2, 0.05).unwrap();

        assert!(test.g_observed > 0.99);
        assert!(!test.homogeneous);
    }

    #[test]
    fn statistic_stays_in_unit_interval() {
        let variances = array![1.0, 3.0, 0.5, 2.5, 1.5];
        let test = cochran_test(&variances, 3, 0.05).unwrap();
        assert!(test.g_observed > 0.0 && test.g_observed <= 1.0);
    }

    #[test]
    fn single_experiment_is_degenerate() {
        let variances = array![2.0];
        assert!(matches!(
            cochran_test(&variances, 2, 0.05),
            Err(ModelError::InvalidInput { .. })
        ));
    }

    #[test]
    fn zero_variance_sum_is_rejected() {
        let variances = array![0.0, 0.0, 0.0];
        assert!(matches!(
            cochran_test(&variances, 2, 0.05),
            Err(ModelError::InvalidInput { .. })
        ));
    }
}
