use bls12_381::{group::Group, G1Projective, G2Projective, Scalar};
use criterion::{criterion_group, criterion_main, Criterion};
use kzg::{commit_key::CommitKey, opening_key::OpeningKey, single};
use polynomial::PolyCoeff;

fn insecure_setup(max_degree: usize) -> (CommitKey, OpeningKey) {
    let tau = Scalar::from(1234_5678u64);
    let g1 = G1Projective::generator();
    let g2 = G2Projective::generator();

    let mut power = bls12_381::ff::Field::ONE;
    let mut g1s = Vec::with_capacity(max_degree + 1);
    let mut g2s = Vec::with_capacity(max_degree + 1);
    for _ in 0..=max_degree {
        g1s.push((g1 * power).into());
        g2s.push((g2 * power).into());
        power *= tau;
    }

    (CommitKey::new(g1s.clone()), OpeningKey::new(g1s, g2s))
}

pub fn bench_commit(c: &mut Criterion) {
    const NUM_COEFFICIENTS: usize = 4096;
    let (ck, _) = insecure_setup(NUM_COEFFICIENTS);
    let polynomial = PolyCoeff(
        (0..NUM_COEFFICIENTS)
            .map(|i| Scalar::from(i as u64 + 1))
            .collect(),
    );

    c.bench_function(&format!("commit to {NUM_COEFFICIENTS} coefficients"), |b| {
        b.iter(|| ck.commit_g1(&polynomial));
    });
}

pub fn bench_open_and_verify(c: &mut Criterion) {
    const NUM_COEFFICIENTS: usize = 4096;
    let (ck, ok) = insecure_setup(NUM_COEFFICIENTS);
    let polynomial = PolyCoeff(
        (0..NUM_COEFFICIENTS)
            .map(|i| Scalar::from(i as u64 + 1))
            .collect(),
    );
    let commitment = ck.commit_g1(&polynomial).unwrap().into();
    let input_point = Scalar::from(7u64);

    c.bench_function("single::open", |b| {
        b.iter(|| single::open(&ck, &polynomial, input_point));
    });

    let proof = single::open(&ck, &polynomial, input_point).unwrap();
    c.bench_function("single::verify", |b| {
        b.iter(|| single::verify(&ok, commitment, input_point, &proof));
    });
}

criterion_group!(benches, bench_commit, bench_open_and_verify);
criterion_main!(benches);
