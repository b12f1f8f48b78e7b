//! Numeric domains for Lagrange interpolation.
//!
//! A [`Domain`](traits::Domain) supplies the handful of operations the
//! Lagrange formula needs. Two are provided: [`Real`](real::Real) for
//! floating-point evaluation and [`PrimeField`](prime_field::PrimeField)
//! for exact arithmetic modulo a validated prime.

pub mod error;
pub mod macros;
pub mod modulus;
pub mod params;
pub mod prelude;
pub mod prime_field;
pub mod real;
pub mod residue;
pub mod traits;

pub use error::{MathError, ModulusError, Result};
