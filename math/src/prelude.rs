pub use crate::{residue, residue_vec};
pub use crate::{
    modulus::Modulus,
    params::{GOLDILOCKS, MERSENNE_31, MERSENNE_61},
    prime_field::PrimeField,
    real::Real,
    residue::Residue,
    traits::{Domain, FloatScalar},
};
