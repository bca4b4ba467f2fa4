//! Core data structures for factorial-analysis
//!
//! This crate provides the shape-checked containers a factorial experiment
//! is described with: the design matrix of coded factor levels and the
//! matrix of replicated response measurements. All dimension invariants
//! are enforced at construction, so the analysis layer can assume
//! well-formed inputs.
//!
//! ```rust
//! use fa_core::DesignMatrix;
//!
//! // 2² full factorial, ±1 coded, intercept column first.
//! let design = DesignMatrix::from_rows(vec![
//!     vec![1.0, -1.0, -1.0],
//!     vec![1.0, 1.0, -1.0],
//!     vec![1.0, -1.0, 1.0],
//!     vec![1.0, 1.0, 1.0],
//! ])
//! .unwrap();
//!
//! assert_eq!(design.n_runs(), 4);
//! assert_eq!(design.n_terms(), 3);
//!
//! // Append the x1·x2 product column.
//! let augmented = design.with_interactions();
//! assert_eq!(augmented.n_terms(), 4);
//! ```

pub mod design;
pub mod error;

pub use design::{DesignMatrix, Matrix, ResponseMatrix, Vector};
pub use error::{DesignError, Result};
