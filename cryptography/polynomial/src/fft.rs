use std::{
    iter::successors,
    ops::{Add, Mul, Neg, Sub},
};

use bls12_381::{ff::Field, group::Group, G1Projective, Scalar};
use maybe_rayon::prelude::*;

use crate::bit_utils::{log2_pow2, reverse_bit_order};

/// Either a scalar or a group element: the element type an FFT can be run over.
pub(crate) trait FFTElement:
    Sized
    + Send
    + Copy
    + PartialEq
    + Eq
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Scalar, Output = Self>
    + Neg<Output = Self>
{
    fn zero() -> Self;
}

impl FFTElement for Scalar {
    fn zero() -> Self {
        Self::ZERO
    }
}

impl FFTElement for G1Projective {
    fn zero() -> Self {
        Self::identity()
    }
}

/// Cooley-Tukey decimation-in-time FFT, run iteratively over bit-reversal-permuted
/// input so that both the "first half" (element-parallel) and "second half"
/// (block-parallel) layers can be chunked for optional multithreading.
///
/// Adapted from the two-pass radix-2 DIT layout described in
/// <https://github.com/Plonky3/Plonky3/blob/a374139/dft/src/radix_2_dit_parallel.rs>.
pub(crate) fn fft_inplace<T: FFTElement>(
    omegas: &[Scalar],
    twiddle_factors_bo: &[Scalar],
    values: &mut [T],
) {
    let log_n = log2_pow2(values.len()) as usize;
    let mid = log_n.div_ceil(2);

    reverse_bit_order(values);
    first_half(values, mid, omegas);

    reverse_bit_order(values);
    second_half(values, mid, twiddle_factors_bo);

    reverse_bit_order(values);
}

#[allow(clippy::needless_range_loop)]
fn first_half<T: FFTElement>(values: &mut [T], mid: usize, omegas: &[Scalar]) {
    values.maybe_par_chunks_mut(1 << mid).for_each(|chunk| {
        let mut backwards = false;
        for layer in 0..mid {
            let half_block_size = 1 << layer;
            let omega = omegas[layer];
            dit_layer(chunk, half_block_size, omega, backwards);
            backwards = !backwards;
        }
    });
}

#[inline]
fn dit_layer<T: FFTElement>(
    blocks: &mut [T],
    half_block_size: usize,
    omega: Scalar,
    backwards: bool,
) {
    let process_block = |block: &mut [T]| {
        let (a, b) = block.split_at_mut(half_block_size);
        let mut twiddle = Scalar::ONE;
        a.iter_mut().zip(b).for_each(|(a, b)| {
            dit(a, b, twiddle);
            twiddle *= omega;
        });
    };

    let blocks = blocks.chunks_mut(2 * half_block_size);
    if backwards {
        blocks.rev().for_each(process_block);
    } else {
        blocks.for_each(process_block);
    }
}

fn second_half<T: FFTElement>(values: &mut [T], mid: usize, twiddles_bo: &[Scalar]) {
    let log_n = log2_pow2(values.len()) as usize;
    values
        .maybe_par_chunks_mut(1 << (log_n - mid))
        .enumerate()
        .for_each(|(chunk_idx, chunk)| {
            let mut backwards = false;
            for layer in mid..log_n {
                let half_block_size = 1 << (log_n - 1 - layer);
                let twiddles_bo = &twiddles_bo[chunk_idx << (layer - mid)..];
                dit_layer_bo(chunk, half_block_size, twiddles_bo, backwards);
                backwards = !backwards;
            }
        });
}

#[inline]
fn dit_layer_bo<T: FFTElement>(
    blocks: &mut [T],
    half_block_size: usize,
    twiddles_bo: &[Scalar],
    backwards: bool,
) {
    let process_block = |block: &mut [T], twiddle| {
        let (a, b) = block.split_at_mut(half_block_size);
        a.iter_mut().zip(b).for_each(|(a, b)| dit(a, b, twiddle));
    };

    let blocks_and_twiddles = blocks.chunks_mut(2 * half_block_size).zip(twiddles_bo);
    if backwards {
        blocks_and_twiddles
            .rev()
            .for_each(|(block, twiddle)| process_block(block, *twiddle));
    } else {
        blocks_and_twiddles.for_each(|(block, twiddle)| process_block(block, *twiddle));
    }
}

#[inline]
fn dit<T: FFTElement>(a: &mut T, b: &mut T, twiddle: Scalar) {
    let t = if twiddle == Scalar::ONE {
        *b
    } else if twiddle == -Scalar::ONE {
        -*b
    } else if *b == FFTElement::zero() {
        FFTElement::zero()
    } else {
        *b * twiddle
    };
    *b = *a;
    *a = *a + t;
    *b = *b - t;
}

/// Returns `[ω_{2}, ω_{4}, ..., ω_{n}]` given input `omega` = `ω_{n}`.
pub(crate) fn precompute_omegas<F: Field>(omega: &F, n: usize) -> Vec<F> {
    let log_n = log2_pow2(n);
    (0..log_n)
        .map(|s| omega.pow([(n / (1 << (s + 1))) as u64]))
        .collect()
}

/// Returns `[ω^0, ω^1, ..., ω^{n/2-1}]` in bit-reversed order.
pub(crate) fn precompute_twiddle_factors_bo<F: Field>(omega: &F, n: usize) -> Vec<F> {
    let mut twiddle_factors = successors(Some(F::ONE), |twiddle| Some(*twiddle * omega))
        .take(n / 2)
        .collect::<Vec<_>>();
    reverse_bit_order(&mut twiddle_factors);
    twiddle_factors
}

/// Naive O(n^2) DFT, kept only as a correctness oracle for tests.
#[cfg(test)]
pub(crate) fn slow_fft_scalars(values: &[Scalar], generator: &Scalar) -> Vec<Scalar> {
    let n = values.len();
    (0..n)
        .map(|i| {
            let root = generator.pow([i as u64]);
            let mut power = Scalar::ONE;
            let mut acc = Scalar::ZERO;
            for value in values {
                acc += *value * power;
                power *= root;
            }
            acc
        })
        .collect()
}
