//! Presentable summaries of an experiment analysis.
//!
//! Thin formatting over the analysis results: the experiment table with
//! factor signs, replicates, means, and variances; the extended design
//! matrix with interaction sign columns; and per-model coefficient and
//! adequacy tables. No I/O happens here — everything renders through
//! `Display`.

use std::fmt;

use fa_core::design::interaction_terms;

use crate::analysis::{AdequacyTest, CochranTest, ExperimentAnalysis};

/// Sign character for a coded factor level.
pub fn sign(x: f64) -> char {
    if x > 0.0 {
        '+'
    } else if x < 0.0 {
        '-'
    } else {
        '0'
    }
}

/// Column names for a design of `n_factors` factors widened to
/// `n_terms` columns: `x0`, `x1`, …, then `x1x2`, `x1x3`, … in the
/// interaction-column order.
pub fn term_names(n_factors: usize, n_terms: usize) -> Vec<String> {
    let mut names: Vec<String> = (0..=n_factors).map(|i| format!("x{i}")).collect();
    for term in interaction_terms(n_factors, n_factors) {
        let label: String = term.iter().map(|f| format!("x{}", f + 1)).collect();
        names.push(label);
    }
    names.truncate(n_terms);
    names
}

/// One row of the experiment table.
#[derive(Debug, Clone)]
pub struct RunSummary {
    /// One-based run number.
    pub index: usize,
    /// Signs of the factor levels (intercept excluded).
    pub factor_signs: Vec<char>,
    /// Replicate measurements for this run.
    pub replicates: Vec<f64>,
    /// Mean response.
    pub mean: f64,
    /// Sample variance of the replicates.
    pub variance: f64,
}

/// One row of a model's coefficient table.
#[derive(Debug, Clone)]
pub struct CoefficientSummary {
    /// Coefficient name (`b0`, `b1`, …).
    pub name: String,
    /// Estimated value.
    pub estimate: f64,
    /// Student t statistic.
    pub t_value: f64,
    /// Whether the t statistic exceeds the critical value.
    pub significant: bool,
}

/// Coefficient and adequacy tables for one model variant.
#[derive(Debug, Clone)]
pub struct ModelSummary {
    /// Variant name shown in the table header.
    pub name: String,
    /// Coefficient rows.
    pub coefficients: Vec<CoefficientSummary>,
    /// Student critical value the rows were classified against.
    pub t_critical: f64,
    /// Fisher adequacy verdict.
    pub adequacy: AdequacyTest,
}

/// All tables for one analysis run.
#[derive(Debug, Clone)]
pub struct ExperimentSummary {
    /// Experiment table rows.
    pub runs: Vec<RunSummary>,
    /// Column names of the extended (interaction-augmented) design.
    pub extended_names: Vec<String>,
    /// Sign rows of the extended design.
    pub extended_signs: Vec<Vec<char>>,
    /// Pooled variance s₀².
    pub pooled_variance: f64,
    /// Homogeneity verdict.
    pub cochran: CochranTest,
    /// Per-variant model tables.
    pub models: Vec<ModelSummary>,
}

impl ExperimentSummary {
    /// Assemble the tables from an analysis result.
    pub fn from_analysis(analysis: &ExperimentAnalysis) -> Self {
        let design = &analysis.linear.design;
        let extended = &analysis.interaction.design;
        let response = analysis.response.data();

        let runs = (0..design.n_runs())
            .map(|i| RunSummary {
                index: i + 1,
                factor_signs: (1..design.n_terms())
                    .map(|j| sign(design.data()[[i, j]]))
                    .collect(),
                replicates: response.row(i).to_vec(),
                mean: analysis.means[i],
                variance: analysis.variance.per_run[i],
            })
            .collect();

        let extended_signs = (0..extended.n_runs())
            .map(|i| {
                (0..extended.n_terms())
                    .map(|j| sign(extended.data()[[i, j]]))
                    .collect()
            })
            .collect();

        let models = [
            ("Linear model", &analysis.linear),
            ("Interaction model", &analysis.interaction),
        ]
        .into_iter()
        .map(|(name, fit)| {
            let flags = fit.significance();
            ModelSummary {
                name: name.to_string(),
                coefficients: fit
                    .coefficients
                    .iter()
                    .zip(fit.t_values.iter())
                    .zip(flags)
                    .enumerate()
                    .map(|(i, ((&estimate, &t_value), significant))| CoefficientSummary {
                        name: format!("b{i}"),
                        estimate,
                        t_value,
                        significant,
                    })
                    .collect(),
                t_critical: fit.t_critical,
                adequacy: fit.adequacy,
            }
        })
        .collect();

        Self {
            runs,
            extended_names: term_names(design.n_factors(), extended.n_terms()),
            extended_signs,
            pooled_variance: analysis.variance.pooled,
            cochran: analysis.cochran,
            models,
        }
    }
}

impl fmt::Display for ExperimentSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Experiment")?;
        writeln!(f, "==========")?;

        let n_factors = self.runs.first().map_or(0, |r| r.factor_signs.len());
        let n_replicates = self.runs.first().map_or(0, |r| r.replicates.len());

        write!(f, "{:>4}", "Run")?;
        for j in 1..=n_factors {
            write!(f, " {:>4}", format!("x{j}"))?;
        }
        for r in 1..=n_replicates {
            write!(f, " {:>10}", format!("y({r})"))?;
        }
        writeln!(f, " {:>10} {:>10}", "mean", "s^2")?;

        for run in &self.runs {
            write!(f, "{:>4}", run.index)?;
            for s in &run.factor_signs {
                write!(f, " {s:>4}")?;
            }
            for y in &run.replicates {
                write!(f, " {y:>10.4}")?;
            }
            writeln!(f, " {:>10.4} {:>10.4}", run.mean, run.variance)?;
        }
        writeln!(f)?;

        writeln!(f, "Pooled variance s0^2: {:.4}", self.pooled_variance)?;
        writeln!(
            f,
            "Cochran: Gp = {:.4}, Gt = {:.4} — variances {}",
            self.cochran.g_observed,
            self.cochran.g_critical,
            if self.cochran.homogeneous {
                "homogeneous"
            } else {
                "not homogeneous"
            }
        )?;
        writeln!(f)?;

        writeln!(f, "Extended design")?;
        write!(f, "{:>4}", "Run")?;
        for name in &self.extended_names {
            write!(f, " {name:>6}")?;
        }
        writeln!(f, " {:>10}", "mean")?;
        for (signs, run) in self.extended_signs.iter().zip(&self.runs) {
            write!(f, "{:>4}", run.index)?;
            for s in signs {
                write!(f, " {s:>6}")?;
            }
            writeln!(f, " {:>10.4}", run.mean)?;
        }

        for model in &self.models {
            writeln!(f)?;
            write!(f, "{model}")?;
        }

        Ok(())
    }
}

impl fmt::Display for ModelSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.name)?;
        writeln!(f, "{:-<width$}", "", width = self.name.len())?;

        writeln!(
            f,
            "{:<6} {:>12} {:>12}  {}",
            "Term", "Estimate", "t-value", "Verdict"
        )?;
        for c in &self.coefficients {
            writeln!(
                f,
                "{:<6} {:>12.4} {:>12.4}  {}",
                c.name,
                c.estimate,
                c.t_value,
                if c.significant {
                    "significant"
                } else {
                    "not significant"
                }
            )?;
        }
        writeln!(f, "t critical: {:.4}", self.t_critical)?;
        writeln!(
            f,
            "Adequacy: S_ad = {:.4}, Fp = {:.4}, Ft = {:.4} — model {}",
            self.adequacy.adequacy_variance,
            self.adequacy.f_observed,
            self.adequacy.f_critical,
            if self.adequacy.adequate {
                "adequate"
            } else {
                "not adequate"
            }
        )?;

        Ok(())
    }
}
