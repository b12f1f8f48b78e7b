pub mod basis;
pub mod coordinates;
pub mod error;
pub mod interpolant;
pub mod shamir;
pub mod traits;

pub use basis::{BasisFunction, LagrangeBasis};
pub use coordinates::CoordinateSet;
pub use error::{InterpolationError, InterpolationResult};
pub use interpolant::{
    FieldLagrangePolynomial, LagrangePolynomial, RealLagrangePolynomial,
};
pub use traits::PointSource;
