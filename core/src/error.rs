use lagrange_math::MathError;
use thiserror::Error;

/// Result type specialized for interpolation.
pub type InterpolationResult<T> = std::result::Result<T, InterpolationError>;

/// Errors raised while building or evaluating a Lagrange interpolant.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InterpolationError {
    #[error("the number of x- and y-coordinates must be equal: {xs} != {ys}")]
    DimensionMismatch { xs: usize, ys: usize },
    #[error("x-coordinates must be unique: indices {first} and {second} coincide")]
    DuplicateCoordinate { first: usize, second: usize },
    #[error("x-coordinate at index {0} is not a finite value of the domain")]
    NonFiniteCoordinate(usize),
    #[error("y-value at index {0} is not a finite value of the domain")]
    NonFiniteValue(usize),
    #[error("evaluation point is not a finite value of the domain")]
    NonFiniteInput,
    #[error("interpolated value is not a finite value of the domain")]
    NonFiniteResult,
    #[error("basis index {index} out of range for {len} basis functions")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("range step must be non-zero")]
    InvalidStep,
    #[error("basis function {index} has an undefined quotient")]
    DegenerateBasis { index: usize },
    #[error(transparent)]
    Math(#[from] MathError),
}

impl From<lagrange_math::ModulusError> for InterpolationError {
    fn from(value: lagrange_math::ModulusError) -> Self {
        InterpolationError::Math(value.into())
    }
}
