use lagrange::shamir::SecretSharing;
use lagrange::RealLagrangePolynomial;
use lagrange_math::prelude::*;
use tracing_subscriber::EnvFilter;

const SECRET: u64 = 20_240_101;

/// Interpolate `x^5` through the integers `0..100` and check that every node
/// is reproduced exactly, then run a 3-of-5 sharing round trip.
///
/// Set `RUST_LOG=debug` to see construction and dealing events.
fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let xs: Vec<f64> = (0..100).map(f64::from).collect();
    let ys: Vec<f64> = xs.iter().map(|x| x.powi(5)).collect();
    let lp = RealLagrangePolynomial::real(xs.clone(), ys.clone())
        .expect("nodes are distinct and finite");

    for (&x, &y) in xs.iter().zip(&ys) {
        let value = lp.evaluate(x).expect("evaluation at a node succeeds");
        assert_eq!(value, y, "P({x}) must reproduce the sample");
    }
    println!("Reconstructed x^5 exactly at all {} nodes.", lp.len());

    let scheme = SecretSharing::new(3, 5, MERSENNE_61)
        .expect("valid threshold configuration");
    let shares = scheme.split(SECRET);
    let recovered = scheme
        .reconstruct(&shares[2..])
        .expect("three shares are enough");

    assert_eq!(recovered, SECRET);
    println!(
        "Recovered secret {} from shares {:?} in {}.",
        recovered,
        shares[2..]
            .iter()
            .map(|share| share.participant_id)
            .collect::<Vec<_>>(),
        scheme.field()
    );
}
