//! Threshold secret sharing over a prime field.
//!
//! A dealer hides a secret in the constant term of a random polynomial of
//! degree `threshold - 1` and hands participant `i` its value at `i`. Any
//! `threshold` shares pin the polynomial down, so reconstruction is a
//! Lagrange interpolation evaluated at zero.

pub mod error;

mod scheme;
mod share;

pub use error::{ShamirError, ShamirResult};
pub use scheme::SecretSharing;
pub use share::Share;
