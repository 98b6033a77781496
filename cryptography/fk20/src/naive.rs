//! Naive (non-Toeplitz) FK20 multi-proof reference, used only in tests to
//! cross-check [`crate::multi::Fk20MultiSettings::compute_all_proofs`].
//!
//! Grounded on `kzg_multi_open/src/fk20/naive.rs`'s `compute_h_poly`/
//! `open_multi_point`: shift the polynomial by each multiple of `coset_size`,
//! commit each shifted polynomial, then FFT the commitments over the proof
//! domain to recover every coset's proof in one pass.

use bls12_381::{g1_batch_normalize, G1Point, G1Projective, Scalar};
use kzg::commit_key::CommitKey;
use polynomial::{domain::Domain, reverse_bit_order, PolyCoeff};

fn shift_polynomial(poly: &PolyCoeff, degree: usize) -> &[Scalar] {
    let n = poly.len();
    if degree >= n {
        &[]
    } else {
        &poly[degree..]
    }
}

fn compute_h_polys(polynomial: &PolyCoeff, coset_size: usize) -> Vec<&[Scalar]> {
    assert!(coset_size.is_power_of_two());
    let num_coefficients = polynomial.len();
    assert!(num_coefficients.is_power_of_two());
    let num_proofs = num_coefficients / coset_size;
    assert!(num_proofs.is_power_of_two());

    (1..=num_proofs)
        .map(|index| shift_polynomial(polynomial, index * coset_size))
        .collect()
}

/// Computes every coset proof for `polynomial`, opening `coset_size` points
/// per proof over a domain of `number_of_points_to_open` points, without any
/// Toeplitz-matrix machinery.
pub(crate) fn open_multi_point(
    commit_key: &CommitKey,
    polynomial: &PolyCoeff,
    coset_size: usize,
    number_of_points_to_open: usize,
) -> Vec<G1Point> {
    assert!(coset_size.is_power_of_two());
    assert!(number_of_points_to_open.is_power_of_two());
    assert!(number_of_points_to_open > coset_size);
    assert!(commit_key.g1s.len() >= polynomial.len());

    let h_polys = compute_h_polys(polynomial, coset_size);
    let commitment_h_polys: Vec<G1Projective> = h_polys
        .iter()
        .map(|h_poly| commit_key.commit_g1(h_poly).unwrap().into())
        .collect();

    let proof_domain = Domain::new(number_of_points_to_open / coset_size);
    let proofs = proof_domain.fft_g1(commitment_h_polys);
    let mut proofs_affine = g1_batch_normalize(&proofs);
    reverse_bit_order(&mut proofs_affine);
    proofs_affine
}
