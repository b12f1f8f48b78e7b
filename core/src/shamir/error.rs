use lagrange_math::MathError;
use thiserror::Error;

use crate::error::InterpolationError;

/// Result type specialized for Shamir operations.
pub type ShamirResult<T> = Result<T, ShamirError>;

/// Errors originating from the secret sharing module.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShamirError {
    #[error("invalid threshold configuration: threshold {0}, participants {1}")]
    InvalidThreshold(usize, usize),
    #[error("insufficient shares: need {0}, got {1}")]
    InsufficientShares(usize, usize),
    #[error("invalid participant ID: {0}")]
    InvalidParticipantId(u64),
    #[error(transparent)]
    Interpolation(#[from] InterpolationError),
    #[error(transparent)]
    Math(#[from] MathError),
}

impl From<lagrange_math::ModulusError> for ShamirError {
    fn from(value: lagrange_math::ModulusError) -> Self {
        ShamirError::Math(value.into())
    }
}
