//! Student significance statistics for fitted coefficients.

use fa_core::design::Vector;

use crate::base::quantile::student_quantile;
use crate::base::Result;
use crate::error::ModelError;

/// Raw t statistics tᵢ = |bᵢ| / S_b with the shared standard error
/// S_b = S_bi / √(N·m), where S_bi is the square root of the pooled
/// variance.
///
/// The shared S_b assumes an orthogonal balanced design in which every
/// coefficient has the same standard error. For an interaction-augmented
/// design with non-orthogonal columns that assumption does not hold; the
/// statistics are still computed with the shared error, and interpreting
/// them carries that caveat. A zero S_bi yields infinite t values.
///
/// Classification against a critical value is left to the caller (see
/// [`student_critical`]), so the raw statistics can be checked
/// independently of the significance level.
pub fn t_statistics(
    coefficients: &Vector,
    pooled_std_dev: f64,
    runs: usize,
    replicates: usize,
) -> Result<Vector> {
    if runs == 0 || replicates == 0 {
        return Err(ModelError::invalid_input(
            "t statistics require at least one run and one replicate",
        ));
    }
    if !pooled_std_dev.is_finite() || pooled_std_dev < 0.0 {
        return Err(ModelError::invalid_input(format!(
            "pooled standard deviation must be finite and non-negative, got {pooled_std_dev}"
        )));
    }

    let s_b = pooled_std_dev / ((runs * replicates) as f64).sqrt();
    Ok(coefficients.mapv(|b| b.abs() / s_b))
}

/// Critical value from Student's distribution at cumulative probability
/// (1 − α/2) with k − 1 degrees of freedom, k being the coefficient
/// count.
pub fn student_critical(alpha: f64, coefficient_count: usize) -> Result<f64> {
    if coefficient_count < 2 {
        return Err(ModelError::invalid_input(
            "significance testing requires at least 2 coefficients",
        ));
    }
    student_quantile(1.0 - alpha / 2.0, coefficient_count - 1)
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use ndarray::array;

    use super::*;

    #[test]
    fn statistics_are_absolute_values_over_shared_error() {
        let coefficients = array![13.5, -3.5, 0.5];
        // pooled variance 2 over N·m = 8 → S_b = √2 / √8 = 0.5
        let t = t_statistics(&coefficients, 2.0_f64.sqrt(), 4, 2).unwrap();

        assert_abs_diff_eq!(t[0], 27.0, epsilon = 1e-10);
        assert_abs_diff_eq!(t[1], 7.0, epsilon = 1e-10);
        assert_abs_diff_eq!(t[2], 1.0, epsilon = 1e-10);
    }

    #[test]
    fn statistics_are_non_negative() {
        let coefficients = array![-10.0, 0.0, 1e-3, -1e9];
        let t = t_statistics(&coefficients, 1.5, 8, 3).unwrap();
        assert!(t.iter().all(|v| *v >= 0.0));
    }

    #[test]
    fn critical_value_uses_two_tailed_quantile() {
        // k = 3 coefficients → 2 degrees of freedom
        let critical = student_critical(0.05, 3).unwrap();
        assert_abs_diff_eq!(critical, 4.3027, epsilon = 1e-3);
    }

    #[test]
    fn single_coefficient_has_no_degrees_of_freedom() {
        assert!(matches!(
            student_critical(0.05, 1),
            Err(ModelError::InvalidInput { .. })
        ));
    }

    #[test]
    fn negative_pooled_std_dev_is_rejected() {
        let coefficients = array![1.0];
        assert!(matches!(
            t_statistics(&coefficients, -1.0, 4, 2),
            Err(ModelError::InvalidInput { .. })
        ));
    }
}
