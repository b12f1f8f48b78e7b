use std::fmt;

/// Canonical element of a prime field, a value in `[0, p)`.
///
/// Residues do not carry their modulus; they are created and combined by a
/// [`PrimeField`](crate::prime_field::PrimeField).
#[derive(Debug, Copy, Clone, Default, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Residue(u64);

impl Residue {
    #[inline]
    pub(crate) const fn new_unchecked(value: u64) -> Self {
        Self(value)
    }

    #[inline]
    pub const fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for Residue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Residue> for u64 {
    fn from(residue: Residue) -> Self {
        residue.0
    }
}

impl From<&Residue> for u64 {
    fn from(residue: &Residue) -> Self {
        residue.0
    }
}

impl PartialEq<u64> for Residue {
    fn eq(&self, other: &u64) -> bool {
        self.0 == *other
    }
}
