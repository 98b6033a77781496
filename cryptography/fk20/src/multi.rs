//! FK20 amortised proof generation for chunked multi-point openings: instead
//! of one proof per evaluation point, the domain is split into `chunk_len`
//! interleaved cosets and one proof is produced per coset.
//!
//! Grounded directly on `new_fk20_multi_settings`/`fk20_multi_da_opt`/
//! `da_using_fk20_multi` in the original C `fk20_proofs.c`, the *correct*
//! variant, which strides the Toeplitz coefficients by coset offset
//! (`toeplitz_coeffs_stride`). The original source also contains a sibling
//! routine, `fk20_compute_proof_multi`, which reuses `toeplitz_coeffs_step`
//! (no stride) for every coset and is consequently unsound; it has no
//! counterpart here; see `DESIGN.md`.

use bls12_381::{g1_batch_normalize, traits::Group, G1Point, G1Projective};
use polynomial::{domain::Domain, reverse_bit_order, PolyCoeff};

use crate::{errors::Fk20Error, toeplitz::toeplitz_coeffs_stride};

/// Precomputed settings for generating FK20 multi-point opening proofs, one
/// per coset of size `chunk_len`, for a degree-`<n` polynomial.
#[derive(Debug, Clone)]
pub struct Fk20MultiSettings {
    /// Number of coefficients the settings were built for.
    n: usize,
    /// Number of points grouped into each opened coset.
    chunk_len: usize,
    /// Domain of size `2k` (`k = n / chunk_len`), used for every FFT in
    /// [`Self::compute_all_proofs`].
    domain: Domain,
    /// Forward FFT of the reversed, strided SRS prefix for each of the
    /// `chunk_len` coset offsets, zero-padded to length `2k`.
    x_ext_fft_files: Vec<Vec<G1Projective>>,
}

impl Fk20MultiSettings {
    /// Builds settings for proving `n / chunk_len` coset openings (each
    /// covering `chunk_len` points) of a degree-`<n` polynomial, from the
    /// first `n - 1` non-constant powers-of-tau G1 elements of a KZG commit
    /// key.
    ///
    /// # Panics
    /// Panics unless `n` and `chunk_len` are powers of two, `chunk_len <= n`,
    /// and `secret_g1` has at least `n - 1` elements.
    pub fn new(n: usize, chunk_len: usize, secret_g1: &[G1Point]) -> Self {
        assert!(n.is_power_of_two() && n >= 1, "n must be a power of two");
        assert!(
            chunk_len.is_power_of_two() && chunk_len > 0 && chunk_len <= n,
            "chunk_len must be a power of two in (0, n]"
        );
        assert!(
            secret_g1.len() >= n.saturating_sub(1),
            "not enough SRS elements for the requested polynomial length"
        );

        let k = n / chunk_len;
        let domain = Domain::new(2 * k);

        let x_ext_fft_files = (0..chunk_len)
            .map(|offset| {
                let mut x = vec![G1Projective::identity(); k];
                let start = n as isize - chunk_len as isize - 1 - offset as isize;
                let mut j = start;
                for slot in x.iter_mut().take(k.saturating_sub(1)) {
                    *slot = secret_g1[j as usize].into();
                    j -= chunk_len as isize;
                }

                let mut x_ext = vec![G1Projective::identity(); 2 * k];
                x_ext[0..k].copy_from_slice(&x);
                domain.fft_g1(x_ext)
            })
            .collect();

        Self {
            n,
            chunk_len,
            domain,
            x_ext_fft_files,
        }
    }

    /// Computes all `n / chunk_len` coset proofs, in natural (non-bit-reversed)
    /// FFT output order.
    fn compute_all_proofs_unordered(&self, polynomial: &PolyCoeff) -> Result<Vec<G1Projective>, Fk20Error> {
        if polynomial.len() != self.n {
            return Err(Fk20Error::WrongPolynomialLength {
                got: polynomial.len(),
                expected: self.n,
            });
        }

        let k = self.n / self.chunk_len;
        let k2 = 2 * k;
        let mut h_ext_fft = vec![G1Projective::identity(); k2];

        for (offset, x_ext_fft_file) in self.x_ext_fft_files.iter().enumerate() {
            let toeplitz_coeffs = toeplitz_coeffs_stride(polynomial, offset, self.chunk_len);
            if toeplitz_coeffs.len() != x_ext_fft_file.len() {
                return Err(Fk20Error::ToeplitzLengthMismatch {
                    toeplitz_len: toeplitz_coeffs.len(),
                    srs_fft_len: x_ext_fft_file.len(),
                });
            }

            let toeplitz_coeffs_fft = self.domain.fft_scalars(toeplitz_coeffs.into());
            for ((acc, x), t) in h_ext_fft
                .iter_mut()
                .zip(x_ext_fft_file)
                .zip(&toeplitz_coeffs_fft)
            {
                *acc += x * t;
            }
        }

        let mut h = self.domain.ifft_g1(h_ext_fft);
        for element in &mut h[k..k2] {
            *element = G1Projective::identity();
        }

        Ok(self.domain.fft_g1(h))
    }

    /// Computes all `n / chunk_len` coset proofs, bit-reversed so that
    /// `proofs[i]` attests to the coset starting at `domain.roots[bit_reverse(i)]`.
    ///
    /// # Errors
    /// Returns [`Fk20Error::WrongPolynomialLength`] if `polynomial` does not
    /// have exactly `n` coefficients, or [`Fk20Error::ToeplitzLengthMismatch`]
    /// if an internal Toeplitz coefficient vector's length does not match the
    /// precomputed SRS FFT length it is paired against (the invariant the
    /// original C source left as an unchecked, commented-out assertion).
    pub fn compute_all_proofs(&self, polynomial: &PolyCoeff) -> Result<Vec<G1Point>, Fk20Error> {
        let proofs = self.compute_all_proofs_unordered(polynomial)?;
        let mut affine = g1_batch_normalize(&proofs);
        reverse_bit_order(&mut affine);
        Ok(affine)
    }

    pub fn chunk_len(&self) -> usize {
        self.chunk_len
    }

    pub fn domain(&self) -> &Domain {
        &self.domain
    }
}
