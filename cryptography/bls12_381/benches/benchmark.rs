use bls12_381::{
    ff::Field,
    group::Group,
    lincomb::g1_lincomb,
    G1Projective, Scalar,
};
use criterion::{criterion_group, criterion_main, Criterion};

pub fn bench_g1_lincomb(c: &mut Criterion) {
    const NUM_ELEMENTS: usize = 4096;
    let points = random_g1_points(NUM_ELEMENTS);
    let scalars = random_scalars(NUM_ELEMENTS);

    c.bench_function(&format!("g1_lincomb of size {NUM_ELEMENTS}"), |b| {
        b.iter(|| g1_lincomb(&points, &scalars));
    });
}

pub fn bench_batch_inversion(c: &mut Criterion) {
    const NUM_ELEMENTS: usize = 4096;
    let scalars = random_scalars(NUM_ELEMENTS);

    c.bench_function(&format!("batch_inverse of size {NUM_ELEMENTS}"), |b| {
        b.iter(|| {
            let mut scalars = scalars.clone();
            bls12_381::batch_inversion::batch_inverse(&mut scalars);
        });
    });
}

fn random_scalars(size: usize) -> Vec<Scalar> {
    (0..size).map(|_| Scalar::random(&mut rand::thread_rng())).collect()
}

fn random_g1_points(size: usize) -> Vec<bls12_381::G1Point> {
    (0..size)
        .map(|_| G1Projective::random(&mut rand::thread_rng()).into())
        .collect()
}

criterion_group!(benches, bench_g1_lincomb, bench_batch_inversion);
criterion_main!(benches);
