//! Inverse-CDF lookups for the reference distributions.
//!
//! The analysis components never name the distribution library; they call
//! these two pure functions. That keeps the statistical core decoupled
//! from the backing implementation and lets the lookups be checked
//! against tabulated values in isolation.

use statrs::distribution::{ContinuousCDF, FisherSnedecor, StudentsT};

use crate::base::Result;
use crate::error::ModelError;

/// Fisher–Snedecor quantile F⁻¹(p; d1, d2).
pub fn fisher_quantile(p: f64, d1: usize, d2: usize) -> Result<f64> {
    check_probability(p)?;
    if d1 == 0 || d2 == 0 {
        return Err(ModelError::invalid_input(format!(
            "Fisher quantile requires positive degrees of freedom, got ({d1}, {d2})"
        )));
    }

    let dist =
        FisherSnedecor::new(d1 as f64, d2 as f64).map_err(|e| ModelError::Distribution {
            message: e.to_string(),
            distribution: "Fisher-Snedecor",
        })?;
    Ok(dist.inverse_cdf(p))
}

/// Student quantile t⁻¹(p; df).
pub fn student_quantile(p: f64, df: usize) -> Result<f64> {
    check_probability(p)?;
    if df == 0 {
        return Err(ModelError::invalid_input(
            "Student quantile requires positive degrees of freedom",
        ));
    }

    let dist = StudentsT::new(0.0, 1.0, df as f64).map_err(|e| ModelError::Distribution {
        message: e.to_string(),
        distribution: "Student",
    })?;
    Ok(dist.inverse_cdf(p))
}

fn check_probability(p: f64) -> Result<()> {
    if p > 0.0 && p < 1.0 {
        Ok(())
    } else {
        Err(ModelError::invalid_input(format!(
            "cumulative probability must lie in (0, 1), got {p}"
        )))
    }
}
