use std::fmt::Debug;

use num_traits::Float;

/// A numeric domain in which interpolation arithmetic is carried out.
///
/// The domain is a small `Copy` context value (a unit type for floats, the
/// modulus for prime fields) so that scalars never have to carry it around
/// themselves. Every operation is total except division, which reports an
/// undefined quotient as `None` instead of producing an infinity or a
/// wrapped value.
pub trait Domain: Copy + Debug + Send + Sync + 'static {
    type Scalar: Copy + Debug + PartialEq + Send + Sync + 'static;

    fn zero(&self) -> Self::Scalar;

    fn one(&self) -> Self::Scalar;

    fn add(&self, lhs: Self::Scalar, rhs: Self::Scalar) -> Self::Scalar;

    fn sub(&self, lhs: Self::Scalar, rhs: Self::Scalar) -> Self::Scalar;

    fn mul(&self, lhs: Self::Scalar, rhs: Self::Scalar) -> Self::Scalar;

    /// `num / den`, or `None` when the quotient is undefined in this domain.
    fn checked_div(
        &self,
        num: Self::Scalar,
        den: Self::Scalar,
    ) -> Option<Self::Scalar>;

    /// Lift an integer into the domain.
    fn from_i64(&self, value: i64) -> Self::Scalar;

    /// Whether `value` is a legal operand for this domain.
    fn is_admissible(&self, value: &Self::Scalar) -> bool {
        let _ = value;
        true
    }

    /// Sum an iterator of scalars, reducing after every term.
    fn sum<I>(&self, values: I) -> Self::Scalar
    where
        I: IntoIterator<Item = Self::Scalar>,
    {
        values
            .into_iter()
            .fold(self.zero(), |acc, value| self.add(acc, value))
    }

    /// Multiply an iterator of scalars, reducing after every factor.
    fn product<I>(&self, values: I) -> Self::Scalar
    where
        I: IntoIterator<Item = Self::Scalar>,
    {
        values
            .into_iter()
            .fold(self.one(), |acc, value| self.mul(acc, value))
    }
}

/// Floating-point scalars usable by [`Real`](crate::real::Real).
pub trait FloatScalar: Float + Debug + Send + Sync + 'static {}

impl<T> FloatScalar for T where T: Float + Debug + Send + Sync + 'static {}
