//! FK20 amortised proof generation for all `2n` points of a degree-`<n`
//! polynomial in one pass, instead of `n` independent single-point openings.
//!
//! Grounded directly on `new_fk20_single_settings`/`fk20_single_da_opt`/
//! `da_using_fk20_single` in the original C `fk20_proofs.c`.

use bls12_381::{g1_batch_normalize, traits::Group, G1Point, G1Projective};
use polynomial::{domain::Domain, log2_pow2, reverse_bit_order, reverse_bits, PolyCoeff};

use crate::toeplitz::toeplitz_coeffs_step;

/// Precomputed settings for generating all `2n` FK20 single-point opening
/// proofs for a degree-`<n` polynomial committed under `secret_g1`.
#[derive(Debug, Clone)]
pub struct Fk20SingleSettings {
    /// Number of coefficients the settings were built for.
    n: usize,
    /// Domain of size `2n`, used for every FFT in [`Self::compute_all_proofs`].
    domain: Domain,
    /// Forward FFT of the reversed SRS prefix, zero-padded to length `2n`.
    x_ext_fft: Vec<G1Projective>,
}

impl Fk20SingleSettings {
    /// Builds settings for proving all `2n` evaluations of a degree-`<n`
    /// polynomial, from the first `n - 1` non-constant powers-of-tau G1
    /// elements of a KZG commit key.
    ///
    /// # Panics
    /// Panics unless `n` is a power of two, `n >= 1`, and `secret_g1` has at
    /// least `n - 1` elements.
    pub fn new(n: usize, secret_g1: &[G1Point]) -> Self {
        assert!(n.is_power_of_two() && n >= 1, "n must be a power of two");
        assert!(
            secret_g1.len() >= n.saturating_sub(1),
            "not enough SRS elements for the requested polynomial length"
        );

        let mut x = vec![G1Projective::identity(); n];
        for i in 0..n.saturating_sub(1) {
            x[i] = secret_g1[n - 2 - i].into();
        }

        let domain = Domain::new(2 * n);
        let mut x_ext = vec![G1Projective::identity(); 2 * n];
        x_ext[0..n].copy_from_slice(&x);
        let x_ext_fft = domain.fft_g1(x_ext);

        Self {
            n,
            domain,
            x_ext_fft,
        }
    }

    /// Computes all `2n` proofs, in natural (non-bit-reversed) FFT output
    /// order. Proof `i` attests to the evaluation at the `i`-th element of
    /// the size-`2n` domain, before bit-reversal.
    fn compute_all_proofs_unordered(&self, polynomial: &PolyCoeff) -> Vec<G1Projective> {
        assert_eq!(
            polynomial.len(),
            self.n,
            "polynomial must have exactly the number of coefficients the settings were built for"
        );

        let toeplitz_coeffs = toeplitz_coeffs_step(polynomial);
        assert_eq!(
            toeplitz_coeffs.len(),
            self.x_ext_fft.len(),
            "toeplitz coefficient length must match the precomputed SRS FFT length"
        );

        let toeplitz_coeffs_fft = self.domain.fft_scalars(toeplitz_coeffs.into());

        let h_ext_fft: Vec<G1Projective> = self
            .x_ext_fft
            .iter()
            .zip(&toeplitz_coeffs_fft)
            .map(|(x, t)| x * t)
            .collect();

        let n2 = 2 * self.n;
        let mut h = self.domain.ifft_g1(h_ext_fft);
        for element in &mut h[self.n..n2] {
            *element = G1Projective::identity();
        }

        self.domain.fft_g1(h)
    }

    /// Computes all `2n` proofs, bit-reversed so that `proofs[i]` attests to
    /// the evaluation of `polynomial` at `domain.roots[bit_reverse(i)]`, which
    /// is the order the reference design's data-availability callers expect.
    pub fn compute_all_proofs(&self, polynomial: &PolyCoeff) -> Vec<G1Point> {
        let proofs = self.compute_all_proofs_unordered(polynomial);
        let mut affine = g1_batch_normalize(&proofs);
        reverse_bit_order(&mut affine);
        affine
    }

    pub fn domain(&self) -> &Domain {
        &self.domain
    }
}

#[cfg(test)]
mod tests {
    use bls12_381::{
        group::{prime::PrimeCurveAffine, Group},
        traits::Field,
        G1Projective, Scalar,
    };
    use kzg::{commit_key::CommitKey, single};

    use super::*;

    fn insecure_srs(n: usize) -> (Vec<G1Point>, Scalar) {
        let tau = Scalar::from(424_242u64);
        let g1 = G1Projective::generator();
        let mut power = Scalar::ONE;
        let mut srs = Vec::with_capacity(n);
        for _ in 0..n {
            srs.push((g1 * power).into());
            power *= tau;
        }
        (srs, tau)
    }

    #[test]
    fn fk20_single_matches_individual_openings() {
        // Exercises the "FK20 all-proofs equivalence" property across several
        // domain sizes. `compute_all_proofs` bit-reverses its output, so
        // `proofs[i]` attests to `domain.roots[reverse_bits(i, log2(2n))]`,
        // not `domain.roots[i]`.
        for log_n in 1..=5 {
            let n = 1usize << log_n;
            let (srs, _) = insecure_srs(n);
            let ck = CommitKey::new(srs.clone());
            let fk20 = Fk20SingleSettings::new(n, &srs);

            let polynomial = PolyCoeff((0..n).map(|i| Scalar::from(i as u64 * 7 + 1)).collect());
            let proofs = fk20.compute_all_proofs(&polynomial);

            let domain = Domain::new(2 * n);
            let log_2n = log2_pow2(2 * n);
            for i in 0..2 * n {
                let root = domain.roots[reverse_bits(i, log_2n)];
                let expected = single::open(&ck, &polynomial, root).unwrap();
                assert_eq!(
                    G1Projective::from(proofs[i]),
                    G1Projective::from(expected.quotient_commitment),
                    "n = {n}, point index {i}"
                );
            }
        }
    }

    #[test]
    #[should_panic]
    fn rejects_wrong_length_polynomial() {
        let n = 8;
        let (srs, _) = insecure_srs(n);
        let fk20 = Fk20SingleSettings::new(n, &srs);
        let wrong_len_poly = PolyCoeff(vec![Scalar::ONE; n + 1]);
        fk20.compute_all_proofs(&wrong_len_poly);
    }
}
