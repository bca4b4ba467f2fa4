//! Fisher test for model adequacy.

use serde::{Deserialize, Serialize};

use fa_core::design::Vector;

use crate::base::quantile::fisher_quantile;
use crate::base::Result;
use crate::error::ModelError;

/// Outcome of the Fisher adequacy check.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AdequacyTest {
    /// Adequacy variance S_ad = (m / (N − k)) · Σ(yᵢ − ŷᵢ)².
    pub adequacy_variance: f64,
    /// Observed statistic Fp = S_ad / s₀².
    pub f_observed: f64,
    /// Critical value Ft at the chosen significance level.
    pub f_critical: f64,
    /// True iff Fp < Ft.
    pub adequate: bool,
}

/// Check whether the fitted model's residual variance is consistent with
/// pure measurement noise.
///
/// The critical value comes from the Fisher–Snedecor quantile at (1 − α)
/// with f1 = N − k and f2 = N·(m − 1) degrees of freedom. A saturated
/// model (N = k) leaves no residual degrees of freedom and is rejected;
/// adequacy cannot be assessed for it.
pub fn adequacy_test(
    means: &Vector,
    predicted: &Vector,
    pooled_variance: f64,
    replicates: usize,
    coefficient_count: usize,
    alpha: f64,
) -> Result<AdequacyTest> {
    let n = means.len();
    if predicted.len() != n {
        return Err(ModelError::invalid_input(format!(
            "predicted length {} does not match {} mean responses",
            predicted.len(),
            n
        )));
    }
    if n <= coefficient_count {
        return Err(ModelError::invalid_input(format!(
            "adequacy is undefined for a saturated model ({n} runs, {coefficient_count} coefficients)"
        )));
    }
    if replicates < 2 {
        return Err(ModelError::invalid_input(
            "adequacy requires at least 2 replicates per run",
        ));
    }
    if pooled_variance <= 0.0 {
        return Err(ModelError::invalid_input(format!(
            "adequacy requires a positive pooled variance, got {pooled_variance}"
        )));
    }

    let df_residual = n - coefficient_count;
    let ss: f64 = means
        .iter()
        .zip(predicted.iter())
        .map(|(y, y_hat)| (y - y_hat).powi(2))
        .sum();
    let adequacy_variance = replicates as f64 / df_residual as f64 * ss;
    let f_observed = adequacy_variance / pooled_variance;
    let f_critical = fisher_quantile(1.0 - alpha, df_residual, n * (replicates - 1))?;

    Ok(AdequacyTest {
        adequacy_variance,
        f_observed,
        f_critical,
        adequate: f_observed < f_critical,
    })
}
