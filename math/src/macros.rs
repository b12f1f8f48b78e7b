//! Shared macros for constructing field residues.
//!
//! Residues only exist relative to a field, so every macro takes the
//! [`PrimeField`](crate::prime_field::PrimeField) as its first argument.

/// Lift an integer into a field.
///
/// ```
/// use lagrange_math::prelude::*;
///
/// let field = PrimeField::new(17).unwrap();
/// assert_eq!(residue!(field, -3), field.element(14));
/// ```
#[macro_export]
macro_rules! residue {
    ($field:expr, $value:expr) => {
        $crate::prime_field::PrimeField::element(&$field, ($value) as i64)
    };
}

/// Create a [`Vec`] of residues in a field.
///
/// ```
/// use lagrange_math::prelude::*;
///
/// let field = PrimeField::new(17).unwrap();
/// assert_eq!(residue_vec![field; 1, -1, 18], vec![1u64, 16, 1]);
/// assert_eq!(residue_vec![field; 5; 2], vec![5u64, 5]);
/// ```
#[macro_export]
macro_rules! residue_vec {
    ($field:expr; $value:expr; $n:expr) => {
        vec![$crate::residue!($field, $value); $n]
    };
    ($field:expr; $($value:expr),* $(,)?) => {
        vec![$($crate::residue!($field, $value)),*]
    };
}
