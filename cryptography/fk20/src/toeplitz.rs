//! Toeplitz-coefficient construction for FK20.
//!
//! Grounded directly on `toeplitz_coeffs_step`/`toeplitz_coeffs_stride` from
//! the original C `fk20_proofs.c`: given the polynomial coefficients `p` of
//! length `n`, builds the length-`2n` vector `t` such that embedding the
//! Toeplitz matrix built from `p` into a circulant matrix and FFT-ing `t`
//! gives the coefficients to pointwise-multiply against the precomputed SRS
//! FFT (see [`crate::single`]/[`crate::multi`]).

use bls12_381::{traits::Field, Scalar};

/// Builds the length-`2n` Toeplitz coefficient vector for coset `offset` of
/// `stride` (the number of cosets chunked openings are split across).
///
/// `in_` has length `n = stride * k` for some `k`; `out` has length `2k`.
/// This is `toeplitz_coeffs_stride` in the original C source.
pub(crate) fn toeplitz_coeffs_stride(in_: &[Scalar], offset: usize, stride: usize) -> Vec<Scalar> {
    let n = in_.len();
    assert!(n % stride == 0, "stride must divide the input length");
    let k = n / stride;
    let k2 = k * 2;

    let mut out = vec![Scalar::ZERO; k2];
    out[0] = in_[n - 1 - offset];
    // out[1..=k+1] stays zero: the zero-padding that separates the
    // Toeplitz-to-circulant embedding's two halves.

    let mut j = 2 * stride - offset - 1;
    for i in (k + 2)..k2 {
        out[i] = in_[j];
        j += stride;
    }

    out
}

/// `toeplitz_coeffs_stride` specialized to `offset = 0, stride = 1`: the
/// single-opening-settings case (`toeplitz_coeffs_step` in the original C
/// source).
pub(crate) fn toeplitz_coeffs_step(in_: &[Scalar]) -> Vec<Scalar> {
    toeplitz_coeffs_stride(in_, 0, 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_matches_stride_with_unit_stride() {
        let p: Vec<Scalar> = (0..8).map(|i| Scalar::from(i as u64 + 1)).collect();
        assert_eq!(toeplitz_coeffs_step(&p), toeplitz_coeffs_stride(&p, 0, 1));
    }

    #[test]
    fn step_has_expected_shape() {
        let p: Vec<Scalar> = (0..4).map(|i| Scalar::from(i as u64 + 1)).collect();
        let out = toeplitz_coeffs_step(&p);
        // out = [p[n-1], 0, 0, p[n-2]] for n=4 with k=4... actually k=n here since stride=1.
        assert_eq!(out.len(), 8);
        assert_eq!(out[0], p[3]);
        assert_eq!(out[1], Scalar::ZERO);
    }
}
