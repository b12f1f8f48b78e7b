use std::sync::Arc;

use lagrange_math::traits::Domain;

use crate::error::{InterpolationError, InterpolationResult};

/// Sample points `(xs[i], ys[i])` with shared, immutable storage.
///
/// Cloning is cheap: both buffers are reference counted and never mutated
/// after construction.
#[derive(Debug, Clone, PartialEq)]
pub struct CoordinateSet<S> {
    xs: Arc<[S]>,
    ys: Arc<[S]>,
}

impl<S: Copy + PartialEq> CoordinateSet<S> {
    /// Validate and take ownership of the sample points.
    ///
    /// Checks, in order: equal lengths, admissible values in `domain`, and
    /// pairwise distinct x-coordinates.
    pub fn new<D>(
        domain: &D,
        xs: Vec<S>,
        ys: Vec<S>,
    ) -> InterpolationResult<Self>
    where
        D: Domain<Scalar = S>,
    {
        if xs.len() != ys.len() {
            return Err(InterpolationError::DimensionMismatch {
                xs: xs.len(),
                ys: ys.len(),
            });
        }
        check_admissible(
            domain,
            &xs,
            InterpolationError::NonFiniteCoordinate,
        )?;
        check_admissible(domain, &ys, InterpolationError::NonFiniteValue)?;
        check_distinct(&xs)?;

        Ok(Self {
            xs: xs.into(),
            ys: ys.into(),
        })
    }

    pub fn len(&self) -> usize {
        self.xs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }

    pub fn xs(&self) -> &[S] {
        &self.xs
    }

    pub fn ys(&self) -> &[S] {
        &self.ys
    }

    /// Iterate over `(x, y)` pairs in order.
    pub fn points(&self) -> impl Iterator<Item = (S, S)> + '_ {
        self.xs.iter().copied().zip(self.ys.iter().copied())
    }

    pub(crate) fn shared_xs(&self) -> Arc<[S]> {
        Arc::clone(&self.xs)
    }
}

fn check_admissible<D: Domain>(
    domain: &D,
    values: &[D::Scalar],
    error: fn(usize) -> InterpolationError,
) -> InterpolationResult<()> {
    match values.iter().position(|value| !domain.is_admissible(value)) {
        Some(index) => Err(error(index)),
        None => Ok(()),
    }
}

/// Reject non-admissible or repeated x-coordinates.
pub(crate) fn validate_nodes<D: Domain>(
    domain: &D,
    xs: &[D::Scalar],
) -> InterpolationResult<()> {
    check_admissible(domain, xs, InterpolationError::NonFiniteCoordinate)?;
    check_distinct(xs)
}

fn check_distinct<S: PartialEq>(xs: &[S]) -> InterpolationResult<()> {
    for (second, x) in xs.iter().enumerate() {
        if let Some(first) = xs[..second].iter().position(|other| other == x) {
            tracing::debug!(first, second, "rejecting repeated x-coordinate");
            return Err(InterpolationError::DuplicateCoordinate {
                first,
                second,
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use lagrange_math::prelude::*;

    #[test]
    fn mismatched_lengths_are_rejected_first() {
        let err = CoordinateSet::new(
            &Real::<f64>::new(),
            vec![0.0, 1.0, 1.0],
            vec![0.0; 4],
        )
        .unwrap_err();
        assert_eq!(err, InterpolationError::DimensionMismatch { xs: 3, ys: 4 });
    }

    #[test]
    fn duplicates_report_both_indices() {
        let err = CoordinateSet::new(
            &Real::<f64>::new(),
            vec![1.0, 2.0, 3.0, 2.0],
            vec![0.0; 4],
        )
        .unwrap_err();
        assert_eq!(
            err,
            InterpolationError::DuplicateCoordinate {
                first: 1,
                second: 3
            }
        );
    }

    #[test]
    fn values_congruent_mod_p_are_duplicates() {
        let field = PrimeField::new(17).unwrap();
        let err = CoordinateSet::new(
            &field,
            residue_vec![field; 1, 18],
            residue_vec![field; 0, 0],
        )
        .unwrap_err();
        assert_eq!(
            err,
            InterpolationError::DuplicateCoordinate {
                first: 0,
                second: 1
            }
        );
    }

    #[test]
    fn non_finite_values_are_rejected() {
        let real = Real::<f64>::new();
        assert_eq!(
            CoordinateSet::new(&real, vec![0.0, f64::NAN], vec![0.0, 0.0]),
            Err(InterpolationError::NonFiniteCoordinate(1))
        );
        assert_eq!(
            CoordinateSet::new(&real, vec![0.0, 1.0], vec![f64::INFINITY, 0.0]),
            Err(InterpolationError::NonFiniteValue(0))
        );
    }

    #[test]
    fn non_finite_values_are_reported_before_duplicates() {
        assert_eq!(
            CoordinateSet::new(
                &Real::<f64>::new(),
                vec![1.0, 1.0],
                vec![0.0, f64::NAN]
            ),
            Err(InterpolationError::NonFiniteValue(1))
        );
    }

    #[test]
    fn points_pair_positionally() {
        let set = CoordinateSet::new(
            &Real::<f64>::new(),
            vec![1.0, 2.0],
            vec![10.0, 20.0],
        )
        .unwrap();
        assert_eq!(set.len(), 2);
        assert!(!set.is_empty());
        assert_eq!(
            set.points().collect::<Vec<_>>(),
            vec![(1.0, 10.0), (2.0, 20.0)]
        );
    }

    #[test]
    fn clones_share_storage() {
        let set =
            CoordinateSet::new(&Real::<f64>::new(), vec![1.0], vec![2.0])
                .unwrap();
        let copy = set.clone();
        assert!(Arc::ptr_eq(&set.shared_xs(), &copy.shared_xs()));
    }
}
