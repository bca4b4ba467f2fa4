//! Experiment data containers.
//!
//! A factorial experiment is described by two matrices: the
//! [`DesignMatrix`] of coded factor levels (one row per experimental run,
//! first column conventionally the constant intercept term) and the
//! [`ResponseMatrix`] of replicated measurements (one row per run, equal
//! replicate counts). Both are immutable once built.

mod matrix;
mod response;


pub use matrix::{interaction_terms, DesignMatrix};
pub use response::ResponseMatrix;

/// 1-D float array used throughout the workspace.
pub type Vector = ndarray::Array1<f64>;

/// 2-D float array used throughout the workspace.
pub type Matrix = ndarray::Array2<f64>;
