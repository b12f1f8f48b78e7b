use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ModulusError;

/// Witnesses for a deterministic Miller-Rabin test over every `u64`.
const MILLER_RABIN_BASES: [u64; 12] =
    [2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37];

/// A validated prime modulus `p`.
///
/// Arithmetic helpers work on canonical values in `[0, p)` and go through
/// `u128` so that any 64-bit prime is supported.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u64", into = "u64")]
pub struct Modulus(u64);

impl Modulus {
    /// Validate `value` as a prime modulus.
    pub fn new(value: u64) -> Result<Self, ModulusError> {
        if value < 2 {
            return Err(ModulusError::TooSmall(value));
        }
        if !is_prime(value) {
            return Err(ModulusError::NotPrime(value));
        }
        Ok(Self(value))
    }

    #[inline]
    pub const fn value(&self) -> u64 {
        self.0
    }

    /// Euclidean reduction, so negative inputs land in `[0, p)`.
    #[inline]
    pub fn reduce_i64(&self, value: i64) -> u64 {
        (value as i128).rem_euclid(self.0 as i128) as u64
    }

    #[inline]
    pub fn reduce_u64(&self, value: u64) -> u64 {
        value % self.0
    }

    #[inline]
    pub fn add(&self, lhs: u64, rhs: u64) -> u64 {
        ((lhs as u128 + rhs as u128) % self.0 as u128) as u64
    }

    #[inline]
    pub fn sub(&self, lhs: u64, rhs: u64) -> u64 {
        let p = self.0 as u128;
        ((lhs as u128 % p + p - rhs as u128 % p) % p) as u64
    }

    #[inline]
    pub fn mul(&self, lhs: u64, rhs: u64) -> u64 {
        mul_mod(lhs, rhs, self.0)
    }

    #[inline]
    pub fn neg(&self, value: u64) -> u64 {
        self.sub(0, value)
    }

    #[must_use]
    pub fn pow(&self, base: u64, exp: u64) -> u64 {
        pow_mod(base, exp, self.0)
    }

    /// Multiplicative inverse by Fermat's little theorem, `a^(p-2)`.
    ///
    /// Returns `None` for values congruent to zero.
    pub fn inverse(&self, value: u64) -> Option<u64> {
        let value = self.reduce_u64(value);
        if value == 0 {
            return None;
        }
        Some(self.pow(value, self.0 - 2))
    }
}

impl TryFrom<u64> for Modulus {
    type Error = ModulusError;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Modulus> for u64 {
    fn from(modulus: Modulus) -> Self {
        modulus.0
    }
}

impl fmt::Display for Modulus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[inline]
fn mul_mod(lhs: u64, rhs: u64, modulus: u64) -> u64 {
    ((lhs as u128 * rhs as u128) % modulus as u128) as u64
}

fn pow_mod(base: u64, mut exp: u64, modulus: u64) -> u64 {
    let mut acc = 1 % modulus;
    let mut base = base % modulus;
    while exp > 0 {
        if exp & 1 == 1 {
            acc = mul_mod(acc, base, modulus);
        }
        base = mul_mod(base, base, modulus);
        exp >>= 1;
    }
    acc
}

/// Deterministic primality test, exact for every `u64`.
pub fn is_prime(n: u64) -> bool {
    if n < 2 {
        return false;
    }
    for p in MILLER_RABIN_BASES {
        if n % p == 0 {
            return n == p;
        }
    }

    let mut d = n - 1;
    let mut s = 0u32;
    while d % 2 == 0 {
        d /= 2;
        s += 1;
    }

    'witness: for a in MILLER_RABIN_BASES {
        let mut x = pow_mod(a, d, n);
        if x == 1 || x == n - 1 {
            continue;
        }
        for _ in 1..s {
            x = mul_mod(x, x, n);
            if x == n - 1 {
                continue 'witness;
            }
        }
        return false;
    }
    true
}
