use bls12_381::{ff::Field, group::Group, G1Projective, Scalar};
use criterion::{criterion_group, criterion_main, Criterion};
use polynomial::{domain::Domain, poly_coeff::vanishing_poly, PolyCoeff};

pub fn bench_fft(c: &mut Criterion) {
    const NUM_ELEMENTS: usize = 8192;
    let polynomial = random_polynomial(NUM_ELEMENTS);
    let domain = Domain::new(NUM_ELEMENTS);

    c.bench_function(&format!("fft_scalars of size {NUM_ELEMENTS}"), |b| {
        b.iter(|| domain.fft_scalars(polynomial.clone()));
    });

    let points = random_g1_points(NUM_ELEMENTS);
    c.bench_function(&format!("fft_g1 of size {NUM_ELEMENTS}"), |b| {
        b.iter(|| domain.fft_g1(points.clone()));
    });
}

pub fn bench_poly_eval(c: &mut Criterion) {
    const NUM_ELEMENTS: usize = 8192;
    let polynomial = random_polynomial(NUM_ELEMENTS);
    let value = Scalar::random(&mut rand::thread_rng());

    c.bench_function("poly_eval", |b| {
        b.iter(|| polynomial.eval(&value));
    });
}

pub fn bench_vanishing_poly(c: &mut Criterion) {
    const NUM_ROOTS: usize = 512;
    let roots: Vec<Scalar> = (0..NUM_ROOTS).map(|i| Scalar::from(i as u64 + 1)).collect();

    c.bench_function(&format!("vanishing_poly of {NUM_ROOTS} roots"), |b| {
        b.iter(|| vanishing_poly(&roots));
    });
}

fn random_polynomial(size: usize) -> PolyCoeff {
    PolyCoeff((0..size).map(|_| Scalar::random(&mut rand::thread_rng())).collect())
}

fn random_g1_points(size: usize) -> Vec<G1Projective> {
    (0..size).map(|_| G1Projective::random(&mut rand::thread_rng())).collect()
}

criterion_group!(benches, bench_fft, bench_poly_eval, bench_vanishing_poly);
criterion_main!(benches);
