//! Least-squares coefficient estimation.

use ndarray_linalg::Inverse;

use fa_core::design::{DesignMatrix, Vector};

use crate::base::Result;
use crate::error::ModelError;

/// Fit regression coefficients b = (XᵗX)⁻¹ Xᵗ y by ordinary least
/// squares against the mean responses.
///
/// Exact-inverse semantics: a design with linearly dependent columns
/// fails with [`ModelError::SingularDesign`]. There is no least-norm or
/// pseudo-inverse fallback.
pub fn fit_coefficients(design: &DesignMatrix, means: &Vector) -> Result<Vector> {
    let n = design.n_runs();
    let k = design.n_terms();
    if means.len() != n {
        return Err(ModelError::invalid_input(format!(
            "mean response length {} does not match {} design rows",
            means.len(),
            n
        )));
    }
    if n < k {
        return Err(ModelError::invalid_input(format!(
            "{n} runs cannot determine {k} coefficients"
        )));
    }

    let x = design.data();
    let xtx = x.t().dot(x);
    let xtx_inv = xtx.inv().map_err(|_| ModelError::SingularDesign)?;
    Ok(xtx_inv.dot(&x.t().dot(means)))
}

/// Predicted mean responses ŷ = X·b.
pub fn predict(design: &DesignMatrix, coefficients: &Vector) -> Result<Vector> {
    if coefficients.len() != design.n_terms() {
        return Err(ModelError::invalid_input(format!(
            "{} coefficients do not match {} design columns",
            coefficients.len(),
            design.n_terms()
        )));
    }
    Ok(design.data().dot(coefficients))
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use ndarray::array;

    use super::*;

    #[test]
    fn recovers_generating_coefficients_exactly() {
        // y = 13.5 + 3.5·x1 + 0.5·x2, no noise
        let design = DesignMatrix::from_rows(vec![
            vec![1.0, -1.0, -1.0],
            vec![1.0, 1.0, -1.0],
            vec![1.0, -1.0, 1.0],
            vec![1.0, 1.0, 1.0],
        ])
        .unwrap();
        let means = array![9.5, 16.5, 10.5, 17.5];

        let b = fit_coefficients(&design, &means).unwrap();
        assert_eq!(b.len(), 3);
        assert_abs_diff_eq!(b[0], 13.5, epsilon = 1e-10);
        assert_abs_diff_eq!(b[1], 3.5, epsilon = 1e-10);
        assert_abs_diff_eq!(b[2], 0.5, epsilon = 1e-10);

        let predicted = predict(&design, &b).unwrap();
        for (p, y) in predicted.iter().zip(means.iter()) {
            assert_abs_diff_eq!(*p, *y, epsilon = 1e-10);
        }
    }

    #[test]
    fn duplicated_column_is_singular() {
        let design = DesignMatrix::from_rows(vec![
            vec![1.0, -1.0, -1.0],
            vec![1.0, 1.0, 1.0],
            vec![1.0, -1.0, -1.0],
            vec![1.0, 1.0, 1.0],
        ])
        .unwrap();
        let means = array![1.0, 2.0, 3.0, 4.0];

        assert!(matches!(
            fit_coefficients(&design, &means),
            Err(ModelError::SingularDesign)
        ));
    }

    #[test]
    fn underdetermined_system_is_rejected() {
        let design = DesignMatrix::from_rows(vec![
            vec![1.0, -1.0, -1.0],
            vec![1.0, 1.0, -1.0],
        ])
        .unwrap();
        let means = array![1.0, 2.0];

        assert!(matches!(
            fit_coefficients(&design, &means),
            Err(ModelError::InvalidInput { .. })
        ));
    }

    #[test]
    fn mismatched_mean_length_is_rejected() {
        let design = DesignMatrix::from_rows(vec![
            vec![1.0, -1.0],
            vec![1.0, 1.0],
        ])
        .unwrap();
        let means = array![1.0, 2.0, 3.0];

        assert!(matches!(
            fit_coefficients(&design, &means),
            Err(ModelError::InvalidInput { .. })
        ));
    }
}
