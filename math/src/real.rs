use std::fmt;
use std::marker::PhantomData;

use num_traits::NumCast;

use crate::traits::{Domain, FloatScalar};

/// Ordinary floating-point arithmetic.
///
/// Generic over the float type; `Real` on its own means `f64`.
pub struct Real<F = f64>(PhantomData<F>);

impl<F: FloatScalar> Real<F> {
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}

impl<F> Clone for Real<F> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<F> Copy for Real<F> {}

impl<F: FloatScalar> Default for Real<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F> PartialEq for Real<F> {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl<F> Eq for Real<F> {}

impl<F> fmt::Debug for Real<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Real<{}>", std::any::type_name::<F>())
    }
}

impl<F: FloatScalar> Domain for Real<F> {
    type Scalar = F;

    #[inline]
    fn zero(&self) -> F {
        F::zero()
    }

    #[inline]
    fn one(&self) -> F {
        F::one()
    }

    #[inline]
    fn add(&self, lhs: F, rhs: F) -> F {
        lhs + rhs
    }

    #[inline]
    fn sub(&self, lhs: F, rhs: F) -> F {
        lhs - rhs
    }

    #[inline]
    fn mul(&self, lhs: F, rhs: F) -> F {
        lhs * rhs
    }

    #[inline]
    fn checked_div(&self, num: F, den: F) -> Option<F> {
        if den.is_zero() {
            return None;
        }
        let quotient = num / den;
        quotient.is_finite().then_some(quotient)
    }

    fn from_i64(&self, value: i64) -> F {
        <F as NumCast>::from(value).unwrap_or_else(F::nan)
    }

    #[inline]
    fn is_admissible(&self, value: &F) -> bool {
        value.is_finite()
    }
}
