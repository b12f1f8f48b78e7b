//! The interpolating polynomial `P(x) = Σ y_j · ℓ_j(x)`.

use lagrange_math::prelude::*;

use crate::basis::LagrangeBasis;
use crate::coordinates::CoordinateSet;
use crate::error::{InterpolationError, InterpolationResult};
use crate::traits::PointSource;

/// Polynomial through a fixed set of sample points, evaluated in `D`.
///
/// Built once from validated points and immutable afterwards; evaluation is
/// a pure function of the points and the query.
#[derive(Debug, Clone)]
pub struct LagrangePolynomial<D: Domain> {
    coordinates: CoordinateSet<D::Scalar>,
    basis: LagrangeBasis<D>,
}

/// Floating-point interpolant.
pub type RealLagrangePolynomial = LagrangePolynomial<Real>;

/// Interpolant over a prime field.
pub type FieldLagrangePolynomial = LagrangePolynomial<PrimeField>;

impl<D: Domain> LagrangePolynomial<D> {
    pub fn new(
        domain: D,
        xs: Vec<D::Scalar>,
        ys: Vec<D::Scalar>,
    ) -> InterpolationResult<Self> {
        let coordinates = CoordinateSet::new(&domain, xs, ys)?;
        let basis = LagrangeBasis::from_shared(domain, coordinates.shared_xs());
        tracing::debug!(
            points = coordinates.len(),
            ?domain,
            "constructed Lagrange interpolant"
        );
        Ok(Self { coordinates, basis })
    }

    /// Lift integer samples into `domain`.
    pub fn from_integers(
        domain: D,
        xs: &[i64],
        ys: &[i64],
    ) -> InterpolationResult<Self> {
        let lift = |values: &[i64]| {
            values.iter().map(|&v| domain.from_i64(v)).collect::<Vec<_>>()
        };
        Self::new(domain, lift(xs), lift(ys))
    }

    /// Collect one point from each source.
    pub fn from_points<P>(domain: D, points: &[P]) -> InterpolationResult<Self>
    where
        P: PointSource<D>,
    {
        let (xs, ys) = points
            .iter()
            .map(|point| (point.x(&domain), point.y(&domain)))
            .unzip();
        Self::new(domain, xs, ys)
    }

    pub fn domain(&self) -> &D {
        self.basis.domain()
    }

    pub fn basis(&self) -> &LagrangeBasis<D> {
        &self.basis
    }

    pub fn coordinates(&self) -> &CoordinateSet<D::Scalar> {
        &self.coordinates
    }

    /// Number of sample points.
    pub fn len(&self) -> usize {
        self.coordinates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coordinates.is_empty()
    }

    /// `P(x)`, accumulated term by term in the domain.
    #[tracing::instrument(level = "trace", skip_all, fields(points = self.len()))]
    pub fn evaluate(&self, x: D::Scalar) -> InterpolationResult<D::Scalar> {
        let domain = self.domain();
        if !domain.is_admissible(&x) {
            return Err(InterpolationError::NonFiniteInput);
        }
        let ys = self.coordinates.ys();
        let total = ys.iter().zip(self.basis.iter()).try_fold(
            domain.zero(),
            |acc, (&y, basis)| -> InterpolationResult<D::Scalar> {
                let term = domain.mul(y, basis.evaluate(x)?);
                Ok(domain.add(acc, term))
            },
        )?;

        if !domain.is_admissible(&total) {
            return Err(InterpolationError::NonFiniteResult);
        }
        Ok(total)
    }

    /// `P` at every query point, in order.
    pub fn evaluate_many(
        &self,
        xs: &[D::Scalar],
    ) -> InterpolationResult<Vec<D::Scalar>> {
        xs.iter().map(|&x| self.evaluate(x)).collect()
    }

    /// `P(0)`, the shared secret when the points are threshold shares.
    pub fn constant_term(&self) -> InterpolationResult<D::Scalar> {
        self.evaluate(self.domain().zero())
    }

    /// Closure view, for call sites that want a plain function.
    pub fn as_fn(
        &self,
    ) -> impl Fn(D::Scalar) -> InterpolationResult<D::Scalar> + '_ {
        move |x| self.evaluate(x)
    }
}

impl<F: FloatScalar> LagrangePolynomial<Real<F>> {
    pub fn real(xs: Vec<F>, ys: Vec<F>) -> InterpolationResult<Self> {
        Self::new(Real::new(), xs, ys)
    }
}

impl LagrangePolynomial<PrimeField> {
    /// Interpolate integer samples modulo `prime`.
    pub fn prime_field(
        xs: &[i64],
        ys: &[i64],
        prime: u64,
    ) -> InterpolationResult<Self> {
        let field = PrimeField::new(prime)?;
        Self::from_integers(field, xs, ys)
    }

    pub fn prime(&self) -> u64 {
        self.domain().prime()
    }

    /// `P(x)` for an integer query, reduced into the field first.
    pub fn evaluate_integer(&self, x: i64) -> InterpolationResult<Residue> {
        self.evaluate(self.domain().element(x))
    }
}
