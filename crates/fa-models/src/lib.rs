//! Statistical analysis of replicated full-factorial experiments.
//!
//! Given a design matrix of coded factor levels and a matrix of
//! replicated measurements, this crate fits a linear regression model and
//! backs it with the three classical checks: Cochran's test for variance
//! homogeneity, Student's test for coefficient significance, and
//! Fisher's test for model adequacy. The same pipeline runs twice — once
//! on the plain design and once on an interaction-augmented variant —
//! and every intermediate value is surfaced for presentation.
//!
//! ```rust
//! use fa_core::{DesignMatrix, ResponseMatrix};
//! use fa_models::analysis::{analyze, AnalysisConfig};
//!
//! // 2³ full factorial, ±1 coded, intercept first.
//! let design = DesignMatrix::from_rows(vec![
//!     vec![1.0, -1.0, -1.0, -1.0],
//!     vec![1.0, 1.0, -1.0, -1.0],
//!     vec![1.0, -1.0, 1.0, -1.0],
//!     vec![1.0, 1.0, 1.0, -1.0],
//!     vec![1.0, -1.0, -1.0, 1.0],
//!     vec![1.0, 1.0, -1.0, 1.0],
//!     vec![1.0, -1.0, 1.0, 1.0],
//!     vec![1.0, 1.0, 1.0, 1.0],
//! ])
//! .unwrap();
//!
//! // Pairwise interactions keep a residual degree of freedom.
//! let augmented = design.with_interactions_up_to(2);
//!
//! // Two replicates per run, generated by y = 10 + 2x1 + 3x2 - x3 ± 0.5.
//! let response = ResponseMatrix::from_rows(vec![
//!     vec![5.5, 6.5],
//!     vec![9.5, 10.5],
//!     vec![11.5, 12.5],
//!     vec![15.5, 16.5],
//!     vec![3.5, 4.5],
//!     vec![7.5, 8.5],
//!     vec![9.5, 10.5],
//!     vec![13.5, 14.5],
//! ])
//! .unwrap();
//!
//! let analysis = analyze(&design, &augmented, &response, &AnalysisConfig::default()).unwrap();
//!
//! assert!(analysis.cochran.homogeneous);
//! assert!(analysis.linear.adequacy.adequate);
//! assert_eq!(analysis.linear.coefficients.len(), 4);
//! assert_eq!(analysis.interaction.coefficients.len(), 7);
//!
//! println!("{}", analysis.summary());
//! ```

pub mod analysis;
pub mod base;
pub mod error;

pub use analysis::{analyze, fit_model, AnalysisConfig, ExperimentAnalysis, ModelFit};
pub use base::Result;
pub use error::ModelError;
