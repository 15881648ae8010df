//! Error and warning types for the analysis pipeline.

use thiserror::Error;

/// Fatal analysis errors. No partial result accompanies these.
#[derive(Debug, Error)]
pub enum Error {
    /// A caller-supplied parameter fails validation.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// The reduced mass matrix is not positive definite, so the
    /// eigenproblem has no solution. Raised explicitly instead of letting
    /// NaN/Inf propagate through the solve.
    #[error("singular system: {0}")]
    SingularSystem(String),
}

/// Convenience result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Non-fatal solver diagnostics, returned alongside the computed modes.
///
/// A warning here points at an assembly or reduction defect upstream; the
/// affected eigenvalue is clamped in the reported mode, but callers should
/// not trust the result without investigating.
#[derive(Debug, Clone, PartialEq)]
pub enum ComputationWarning {
    /// An eigenvalue was negative beyond numerical tolerance. K and M are
    /// symmetric positive (semi)definite by construction, so this should
    /// never occur for a well-assembled system.
    NegativeEigenvalue {
        /// Index of the eigenvalue in the ascending-sorted spectrum.
        index: usize,
        /// The offending raw eigenvalue (rad²/s²).
        value: f64,
    },
}

impl std::fmt::Display for ComputationWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ComputationWarning::NegativeEigenvalue { index, value } => write!(
                f,
                "eigenvalue {} is negative beyond tolerance ({:.3e} rad²/s²)",
                index, value
            ),
        }
    }
}
