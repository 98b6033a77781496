use bls12_381::{ff::Field, group::Group, G1Projective, Scalar};
use criterion::{criterion_group, criterion_main, Criterion};
use fk20::{Fk20MultiSettings, Fk20SingleSettings};
use polynomial::PolyCoeff;

fn insecure_secret_g1(n: usize) -> Vec<bls12_381::G1Point> {
    let tau = Scalar::from(999_999_937u64);
    let g1 = G1Projective::generator();
    let mut power = Scalar::ONE;
    let mut points = Vec::with_capacity(n);
    for _ in 0..n {
        points.push((g1 * power).into());
        power *= tau;
    }
    points
}

pub fn bench_fk20_single_all_proofs(c: &mut Criterion) {
    const N: usize = 4096;
    let secret_g1 = insecure_secret_g1(N);
    let settings = Fk20SingleSettings::new(N, &secret_g1);
    let polynomial = PolyCoeff((0..N).map(|i| Scalar::from(i as u64 + 1)).collect());

    c.bench_function(&format!("fk20 single all-proofs, n = {N}"), |b| {
        b.iter(|| settings.compute_all_proofs(&polynomial));
    });
}

pub fn bench_fk20_multi_all_proofs(c: &mut Criterion) {
    const N: usize = 4096;
    const CHUNK_LEN: usize = 64;
    let secret_g1 = insecure_secret_g1(N);
    let settings = Fk20MultiSettings::new(N, CHUNK_LEN, &secret_g1);
    let polynomial = PolyCoeff((0..N).map(|i| Scalar::from(i as u64 + 1)).collect());

    c.bench_function(
        &format!("fk20 multi all-proofs, n = {N}, chunk_len = {CHUNK_LEN}"),
        |b| {
            b.iter(|| settings.compute_all_proofs(&polynomial));
        },
    );
}

criterion_group!(benches, bench_fk20_single_all_proofs, bench_fk20_multi_all_proofs);
criterion_main!(benches);
