use criterion::{black_box, criterion_group, criterion_main, Criterion};
use lagrange::shamir::SecretSharing;
use lagrange::{FieldLagrangePolynomial, RealLagrangePolynomial};
use lagrange_math::prelude::*;

const SIZES: &[usize] = &[8, 32, 128];
const CONFIGURATIONS: &[(usize, usize)] = &[(2, 3), (3, 5), (8, 16)];

fn bench_real_evaluate(c: &mut Criterion) {
    let mut group = c.benchmark_group("real_evaluate");

    for &n in SIZES {
        let xs: Vec<f64> = (0..n).map(|i| i as f64).collect();
        let ys: Vec<f64> = xs.iter().map(|x| x.sin()).collect();
        let lp = RealLagrangePolynomial::real(xs, ys)
            .expect("distinct nodes");
        group.bench_function(format!("n={n}"), |b| {
            b.iter(|| lp.evaluate(black_box(0.5)))
        });
    }

    group.finish();
}

fn bench_field_evaluate(c: &mut Criterion) {
    let mut group = c.benchmark_group("field_evaluate");

    for &n in SIZES {
        let xs: Vec<i64> = (1..=n as i64).collect();
        let ys: Vec<i64> = xs.iter().map(|x| x * x * x).collect();
        let lp = FieldLagrangePolynomial::prime_field(&xs, &ys, MERSENNE_61)
            .expect("distinct nodes");
        group.bench_function(format!("n={n}"), |b| {
            b.iter(|| lp.constant_term())
        });
    }

    group.finish();
}

fn bench_secret_sharing(c: &mut Criterion) {
    let mut group = c.benchmark_group("secret_sharing");

    for &(threshold, participants) in CONFIGURATIONS {
        let scheme = SecretSharing::new(threshold, participants, MERSENNE_61)
            .expect("valid threshold configuration");
        group.bench_function(format!("{threshold}-of-{participants}"), |b| {
            b.iter(|| {
                let shares = scheme.split(black_box(1234));
                scheme
                    .reconstruct(&shares)
                    .expect("reconstruction succeeds")
            })
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_real_evaluate,
    bench_field_evaluate,
    bench_secret_sharing
);
criterion_main!(benches);
