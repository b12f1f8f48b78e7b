use lagrange::{
    FieldLagrangePolynomial, InterpolationError, LagrangeBasis,
    LagrangePolynomial, RealLagrangePolynomial,
};
use lagrange_math::prelude::*;
use tracing_test::traced_test;

fn nodes() -> Vec<i64> {
    (0..100).collect()
}

fn fifth_powers(xs: &[i64]) -> Vec<i64> {
    xs.iter().map(|x| x.pow(5)).collect()
}

#[test]
fn real_x_to_the_fifth_is_exact_at_every_node() {
    let xs: Vec<f64> = nodes().into_iter().map(|x| x as f64).collect();
    let ys: Vec<f64> = xs.iter().map(|x| x.powi(5)).collect();
    let lp = RealLagrangePolynomial::real(xs.clone(), ys.clone()).unwrap();

    assert_eq!(lp.len(), 100);
    assert_eq!(lp.evaluate_many(&xs), Ok(ys));
}

#[test]
fn real_x_squared_is_exact_at_every_node() {
    let xs: Vec<f64> = nodes().into_iter().map(|x| x as f64).collect();
    let ys: Vec<f64> = xs.iter().map(|x| x * x).collect();
    let lp = LagrangePolynomial::real(xs.clone(), ys.clone()).unwrap();

    for (x, y) in xs.into_iter().zip(ys) {
        assert_eq!(lp.evaluate(x), Ok(y), "P({x})");
    }
}

#[test]
fn field_x_to_the_fifth_is_exact_everywhere() {
    let xs = nodes();
    let lp =
        FieldLagrangePolynomial::prime_field(&xs, &fifth_powers(&xs), MERSENNE_61)
            .unwrap();
    let field = *lp.domain();

    for x in -50i64..150 {
        let expected = field.pow(field.element(x), 5);
        assert_eq!(lp.evaluate_integer(x), Ok(expected), "P({x})");
    }
}

#[test]
fn field_and_real_agree_on_small_integer_data() {
    let xs = [-2i64, 0, 1, 3];
    let ys = [-9i64, 1, 3, 31];
    let real =
        LagrangePolynomial::from_integers(Real::<f64>::new(), &xs, &ys).unwrap();
    let field = FieldLagrangePolynomial::prime_field(&xs, &ys, MERSENNE_31).unwrap();

    for x in -5i64..5 {
        let approx = real.evaluate(x as f64).unwrap().round() as i64;
        assert_eq!(field.evaluate_integer(x), Ok(field.domain().element(approx)));
    }
}

#[test]
fn basis_is_shared_between_factory_and_interpolant() {
    let field = PrimeField::new(GOLDILOCKS).unwrap();
    let xs = field.elements(&[3, 5, 8, 13]);
    let standalone = LagrangeBasis::new(field, xs.clone()).unwrap();
    let lp = LagrangePolynomial::new(field, xs, residue_vec![field; 1, 1, 1, 1])
        .unwrap();

    let query = field.element(21);
    assert_eq!(
        standalone.evaluate_all(query),
        lp.basis().evaluate_all(query)
    );
    assert_eq!(lp.evaluate(query), Ok(field.one()));
}

#[test]
fn duplicate_nodes_after_reduction_are_rejected() {
    let err =
        FieldLagrangePolynomial::prime_field(&[1, 2, 20], &[0, 0, 0], 19)
            .unwrap_err();
    assert_eq!(
        err,
        InterpolationError::DuplicateCoordinate {
            first: 0,
            second: 2
        }
    );
}

#[test]
#[traced_test]
fn construction_and_rejection_are_logged() {
    let _ = FieldLagrangePolynomial::prime_field(&[1, 2, 3], &[1, 4, 9], 17)
        .unwrap();
    assert!(logs_contain("constructed Lagrange interpolant"));

    let _ = FieldLagrangePolynomial::prime_field(&[4, 4], &[0, 0], 17)
        .unwrap_err();
    assert!(logs_contain("rejecting repeated x-coordinate"));
}
