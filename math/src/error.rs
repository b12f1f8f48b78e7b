use thiserror::Error;

pub mod modulus {
    use thiserror::Error;

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
    #[non_exhaustive]
    pub enum Error {
        #[error("modulus must be at least 2, got {0}")]
        TooSmall(u64),
        #[error("modulus {0} is not prime")]
        NotPrime(u64),
    }
}

pub use modulus::Error as ModulusError;

/// Common result type used across this crate.
pub type Result<T, E = MathError> = core::result::Result<T, E>;

/// Top-level error type to keep error management simple for users.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Error)]
#[non_exhaustive]
pub enum MathError {
    #[error(transparent)]
    Modulus(#[from] ModulusError),
}

pub type Error = MathError;
