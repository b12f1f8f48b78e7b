use std::fmt;

use rand::Rng;

use crate::error::ModulusError;
use crate::modulus::Modulus;
use crate::residue::Residue;
use crate::traits::Domain;

/// Arithmetic in `ℤ/pℤ` for a runtime prime `p`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct PrimeField {
    modulus: Modulus,
}

impl PrimeField {
    pub fn new(prime: u64) -> Result<Self, ModulusError> {
        Modulus::new(prime).map(Self::with_modulus)
    }

    pub const fn with_modulus(modulus: Modulus) -> Self {
        Self { modulus }
    }

    #[inline]
    pub const fn modulus(&self) -> Modulus {
        self.modulus
    }

    #[inline]
    pub const fn prime(&self) -> u64 {
        self.modulus.value()
    }

    /// Map a signed integer to its residue; negatives wrap around.
    #[inline]
    pub fn element(&self, value: i64) -> Residue {
        Residue::new_unchecked(self.modulus.reduce_i64(value))
    }

    #[inline]
    pub fn element_u64(&self, value: u64) -> Residue {
        Residue::new_unchecked(self.modulus.reduce_u64(value))
    }

    pub fn elements(&self, values: &[i64]) -> Vec<Residue> {
        values.iter().map(|&value| self.element(value)).collect()
    }

    #[inline]
    pub fn neg(&self, value: Residue) -> Residue {
        Residue::new_unchecked(self.modulus.neg(value.value()))
    }

    #[must_use]
    pub fn pow(&self, base: Residue, exp: u64) -> Residue {
        Residue::new_unchecked(self.modulus.pow(base.value(), exp))
    }

    /// Multiplicative inverse, `None` for zero.
    pub fn inverse(&self, value: Residue) -> Option<Residue> {
        self.modulus.inverse(value.value()).map(Residue::new_unchecked)
    }

    /// Sample a uniformly random residue.
    pub fn random<R: Rng + ?Sized>(&self, rng: &mut R) -> Residue {
        Residue::new_unchecked(rng.random_range(0..self.prime()))
    }
}

impl fmt::Display for PrimeField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GF({})", self.modulus)
    }
}

impl Domain for PrimeField {
    type Scalar = Residue;

    #[inline]
    fn zero(&self) -> Residue {
        Residue::new_unchecked(0)
    }

    #[inline]
    fn one(&self) -> Residue {
        self.element_u64(1)
    }

    #[inline]
    fn add(&self, lhs: Residue, rhs: Residue) -> Residue {
        Residue::new_unchecked(self.modulus.add(lhs.value(), rhs.value()))
    }

    #[inline]
    fn sub(&self, lhs: Residue, rhs: Residue) -> Residue {
        Residue::new_unchecked(self.modulus.sub(lhs.value(), rhs.value()))
    }

    #[inline]
    fn mul(&self, lhs: Residue, rhs: Residue) -> Residue {
        Residue::new_unchecked(self.modulus.mul(lhs.value(), rhs.value()))
    }

    fn checked_div(&self, num: Residue, den: Residue) -> Option<Residue> {
        self.inverse(den).map(|inverse| self.mul(num, inverse))
    }

    #[inline]
    fn from_i64(&self, value: i64) -> Residue {
        self.element(value)
    }

    #[inline]
    fn is_admissible(&self, value: &Residue) -> bool {
        value.value() < self.prime()
    }
}
