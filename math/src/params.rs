//! Well-known primes for the field domain.

/// `2^31 - 1`.
pub const MERSENNE_31: u64 = (1 << 31) - 1;

/// `2^61 - 1`.
pub const MERSENNE_61: u64 = (1 << 61) - 1;

/// `2^64 - 2^32 + 1`.
pub const GOLDILOCKS: u64 = 0xffff_ffff_0000_0001;
