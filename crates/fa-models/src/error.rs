//! Analysis-level error types.

use thiserror::Error;

use fa_core::DesignError;

/// Errors raised by the analysis pipeline.
///
/// Every component fails fast: the first malformed input or degenerate
/// computation surfaces here and aborts the run. There are no fallback
/// values and no partial results.
#[derive(Debug, Error)]
pub enum ModelError {
    /// Malformed input shape or degenerate degrees of freedom.
    #[error("invalid input: {message}")]
    InvalidInput {
        /// What was malformed.
        message: String,
    },

    /// XᵗX is rank-deficient; coefficients cannot be estimated.
    #[error("singular design: X'X is not invertible")]
    SingularDesign,

    /// A reference distribution could not be constructed.
    #[error("distribution error: {message} ({distribution})")]
    Distribution {
        /// Error reported by the distribution library.
        message: String,
        /// Which distribution failed.
        distribution: &'static str,
    },
}

impl ModelError {
    /// Create a new `InvalidInput` error.
    #[must_use]
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }
}

impl From<DesignError> for ModelError {
    fn from(err: DesignError) -> Self {
        Self::InvalidInput {
            message: err.to_string(),
        }
    }
}
