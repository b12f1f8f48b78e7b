use lagrange_math::prelude::*;

/// Anything that can supply one interpolation point in a given domain.
pub trait PointSource<D: Domain> {
    /// The x-coordinate of this point.
    fn x(&self, domain: &D) -> D::Scalar;

    /// The sampled value at [`x`](Self::x).
    fn y(&self, domain: &D) -> D::Scalar;
}

impl<D: Domain> PointSource<D> for (i64, i64) {
    fn x(&self, domain: &D) -> D::Scalar {
        domain.from_i64(self.0)
    }

    fn y(&self, domain: &D) -> D::Scalar {
        domain.from_i64(self.1)
    }
}

macro_rules! impl_point_source_for_float_pair {
    ($($t:ident),+ $(,)?) => {$(
        impl PointSource<Real<$t>> for ($t, $t) {
            fn x(&self, _domain: &Real<$t>) -> $t {
                self.0
            }

            fn y(&self, _domain: &Real<$t>) -> $t {
                self.1
            }
        }
    )+};
}

impl_point_source_for_float_pair!(f32, f64);

impl PointSource<PrimeField> for (Residue, Residue) {
    fn x(&self, _domain: &PrimeField) -> Residue {
        self.0
    }

    fn y(&self, _domain: &PrimeField) -> Residue {
        self.1
    }
}

impl<D: Domain, P: PointSource<D>> PointSource<D> for &P {
    fn x(&self, domain: &D) -> D::Scalar {
        (**self).x(domain)
    }

    fn y(&self, domain: &D) -> D::Scalar {
        (**self).y(domain)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integer_pairs_lift_into_any_domain() {
        let field = PrimeField::new(17).unwrap();
        let point = (-1i64, 20i64);
        assert_eq!(point.x(&field), 16);
        assert_eq!(point.y(&field), 3);
        assert_eq!(point.x(&Real::<f64>::new()), -1.0);
    }

    #[test]
    fn references_forward_to_the_point() {
        let point = (0.5f32, 2.0f32);
        let real = Real::<f32>::new();
        assert_eq!((&point).x(&real), 0.5);
        assert_eq!((&point).y(&real), 2.0);
    }
}
