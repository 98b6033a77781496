use std::ops::Range;

use bls12_381::Scalar;
use criterion::{criterion_group, criterion_main, Criterion};
use erasure_codes::{recover_polynomial_from_samples, Sample};
use polynomial::domain::Domain;

pub fn bench_recovery_half_missing(c: &mut Criterion) {
    const NUM_SAMPLES: usize = 4096;

    let domain = Domain::new(NUM_SAMPLES);
    let codeword: Vec<Scalar> = (0..NUM_SAMPLES).map(|i| Scalar::from(i as u64 + 1)).collect();
    let missing = generate_unique_random_numbers(0..NUM_SAMPLES, NUM_SAMPLES / 2);
    let samples: Vec<Sample> = codeword
        .iter()
        .enumerate()
        .map(|(i, v)| {
            if missing.contains(&i) {
                Sample::Missing
            } else {
                Sample::Known(*v)
            }
        })
        .collect();

    c.bench_function(
        &format!("recovery: {NUM_SAMPLES} samples, {} missing", missing.len()),
        |b| {
            b.iter(|| recover_polynomial_from_samples(&samples, &domain));
        },
    );
}

fn generate_unique_random_numbers(range: Range<usize>, n: usize) -> Vec<usize> {
    use rand::prelude::SliceRandom;
    let mut numbers: Vec<_> = range.collect();
    numbers.shuffle(&mut rand::thread_rng());
    numbers.into_iter().take(n).collect()
}

criterion_group!(benches, bench_recovery_half_missing);
criterion_main!(benches);
