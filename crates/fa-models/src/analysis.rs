//! Full-factorial analysis pipeline.
//!
//! Five components form a linear pipeline over a design matrix `X` and a
//! replicated response matrix `Y`:
//!
//! 1. [`replicate_variances`] — per-run and pooled sample variance
//! 2. [`cochran_test`] — homogeneity of the per-run variances
//! 3. [`fit_coefficients`] — least-squares regression against row means
//! 4. [`t_statistics`] — Student significance statistics
//! 5. [`adequacy_test`] — Fisher check of residual vs. noise variance
//!
//! Each component is a pure function of its inputs and can be called in
//! isolation; [`analyze`] wires them together and runs the regression
//! half of the pipeline twice, once per design variant (with and without
//! interaction columns). Variance estimation and Cochran's test depend
//! only on the responses and run once.

mod cochran;
mod fisher;
mod regression;
mod student;
mod variance;


pub use cochran::{cochran_test, CochranTest};
pub use fisher::{adequacy_test, AdequacyTest};
pub use regression::{fit_coefficients, predict};
pub use student::{student_critical, t_statistics};
pub use variance::{replicate_variances, VarianceEstimate};

use serde::{Deserialize, Serialize};

use fa_core::design::{DesignMatrix, ResponseMatrix, Vector};

use crate::base::summary::ExperimentSummary;
use crate::base::Result;
use crate::error::ModelError;

/// Analysis configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Significance level shared by the Cochran, Student, and Fisher
    /// tests.
    pub alpha: f64,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self { alpha: 0.05 }
    }
}

/// Fitted regression model for one design-matrix variant.
#[derive(Debug, Clone)]
pub struct ModelFit {
    /// The design this model was fitted against.
    pub design: DesignMatrix,
    /// Estimated regression coefficients, length `k`.
    pub coefficients: Vector,
    /// Predicted mean responses ŷ = X·b, length `N`.
    pub predicted: Vector,
    /// Student t statistic per coefficient.
    pub t_values: Vector,
    /// Two-tailed Student critical value for k − 1 degrees of freedom.
    pub t_critical: f64,
    /// Fisher adequacy verdict.
    pub adequacy: AdequacyTest,
}

impl ModelFit {
    /// Per-coefficient significance flags: tᵢ > t_critical.
    pub fn significance(&self) -> Vec<bool> {
        self.t_values.iter().map(|t| *t > self.t_critical).collect()
    }
}

/// Fit one model variant against precomputed variance results.
///
/// Runs steps 3–5 of the pipeline: coefficients, Student statistics,
/// predictions, and the Fisher adequacy check. Fails fast on the first
/// step that cannot be computed.
pub fn fit_model(
    design: &DesignMatrix,
    means: &Vector,
    variance: &VarianceEstimate,
    replicates: usize,
    config: &AnalysisConfig,
) -> Result<ModelFit> {
    let coefficients = fit_coefficients(design, means)?;
    let t_values = t_statistics(
        &coefficients,
        variance.pooled.sqrt(),
        design.n_runs(),
        replicates,
    )?;
    let t_critical = student_critical(config.alpha, coefficients.len())?;
    let predicted = predict(design, &coefficients)?;
    let adequacy = adequacy_test(
        means,
        &predicted,
        variance.pooled,
        replicates,
        coefficients.len(),
        config.alpha,
    )?;

    Ok(ModelFit {
        design: design.clone(),
        coefficients,
        predicted,
        t_values,
        t_critical,
        adequacy,
    })
}

/// Complete analysis of a replicated factorial experiment.
#[derive(Debug, Clone)]
pub struct ExperimentAnalysis {
    /// The replicated measurements the analysis ran on.
    pub response: ResponseMatrix,
    /// Row-wise mean responses.
    pub means: Vector,
    /// Per-run and pooled variance.
    pub variance: VarianceEstimate,
    /// Homogeneity verdict for the per-run variances.
    pub cochran: CochranTest,
    /// Model fitted on the plain design.
    pub linear: ModelFit,
    /// Model fitted on the interaction-augmented design.
    pub interaction: ModelFit,
    /// Configuration the analysis ran with.
    pub config: AnalysisConfig,
}

impl ExperimentAnalysis {
    /// Build the presentable summary tables for this analysis.
    pub fn summary(&self) -> ExperimentSummary {
        ExperimentSummary::from_analysis(self)
    }
}

/// Run the full pipeline on a plain and an interaction-augmented design.
///
/// Both designs must cover the same runs as the response matrix; the
/// augmented design is supplied by the caller (see
/// [`DesignMatrix::with_interactions`]) so the degree of augmentation
/// stays an experiment-design decision. The two variants go through the
/// same code path with different inputs.
///
/// A failed homogeneity verdict does not abort the run — it is surfaced
/// in [`ExperimentAnalysis::cochran`] and in the summary. Only malformed
/// inputs and singular designs halt the analysis, with the failing step
/// named in the error.
pub fn analyze(
    design: &DesignMatrix,
    interaction_design: &DesignMatrix,
    response: &ResponseMatrix,
    config: &AnalysisConfig,
) -> Result<ExperimentAnalysis> {
    for (name, d) in [("design", design), ("interaction design", interaction_design)] {
        if d.n_runs() != response.n_runs() {
            return Err(ModelError::invalid_input(format!(
                "{name} has {} runs but the response matrix has {}",
                d.n_runs(),
                response.n_runs()
            )));
        }
    }

    let means = response.row_means();
    let variance = replicate_variances(response)?;
    let cochran = cochran_test(&variance.per_run, response.n_replicates(), config.alpha)?;

    let replicates = response.n_replicates();
    let linear = fit_model(design, &means, &variance, replicates, config)?;
    let interaction = fit_model(interaction_design, &means, &variance, replicates, config)?;

    Ok(ExperimentAnalysis {
        response: response.clone(),
        means,
        variance,
        cochran,
        linear,
        interaction,
        config: *config,
    })
}
