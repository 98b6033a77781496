//! Reed-Solomon erasure recovery via the domain-shift trick.
//!
//! Grounded directly on `recover_poly_from_samples` in the original C
//! `recover.c`: https://ethresear.ch/t/reed-solomon-erasure-code-recovery-in-n-log-2-n-time-with-ffts/3039
//!
//! Given up to half of a degree-`<n/2` polynomial's `n` evaluations over a
//! roots-of-unity domain, the rest are recovered in `O(n log^2 n)` by
//! dividing out a vanishing polynomial on the missing set in the Fourier
//! domain, after shifting by a scale factor to dodge a division-by-zero at
//! the origin.

use bls12_381::{traits::Field, Scalar};
use polynomial::{domain::Domain, zero_polynomial_via_multiplication};

use crate::errors::RSError;

/// One evaluation of a polynomial at a domain point: either known, or erased
/// and to be recovered.
///
/// Replaces the reference design's sentinel `fr_null` value with a proper
/// sum type, since the scalar field has no reserved "not a value" element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sample {
    Known(Scalar),
    Missing,
}

impl Sample {
    fn is_missing(self) -> bool {
        matches!(self, Self::Missing)
    }
}

/// Not zero and not a low-degree root of unity: any such element works.
const SCALE_FACTOR: u64 = 5;

/// Multiplies `p[i]` by `scale_factor^(-i)` in place: the coefficient-space
/// effect of evaluating at `scale_factor * x` instead of `x`.
fn scale_poly(p: &mut [Scalar]) {
    let inv_factor = Scalar::from(SCALE_FACTOR)
        .invert()
        .expect("scale factor is nonzero");
    let mut factor_power = Scalar::ONE;
    for coeff in p.iter_mut().skip(1) {
        factor_power *= inv_factor;
        *coeff *= factor_power;
    }
}

/// Inverse of [`scale_poly`].
fn unscale_poly(p: &mut [Scalar]) {
    let scale_factor = Scalar::from(SCALE_FACTOR);
    let mut factor_power = Scalar::ONE;
    for coeff in p.iter_mut().skip(1) {
        factor_power *= scale_factor;
        *coeff *= factor_power;
    }
}

/// Recovers every evaluation in `samples`, given that fewer than half are
/// missing and the true polynomial's coefficients in the upper half of the
/// domain (above index `samples.len() / 2`) are all zero.
///
/// `domain` must have size `samples.len()`.
///
/// # Errors
/// Returns [`RSError::SampleCountNotPowerOfTwo`] if `samples.len()` is not a
/// power of two, [`RSError::ZeroPoly`] if building the vanishing polynomial
/// over the missing set fails, or one of the internal-invariant variants if
/// recovery produces a result inconsistent with the input (which signals
/// more than half the domain is missing, since recovery is only guaranteed
/// to succeed below that threshold).
pub fn recover_polynomial_from_samples(
    samples: &[Sample],
    domain: &Domain,
) -> Result<Vec<Scalar>, RSError> {
    let len_samples = samples.len();
    if !len_samples.is_power_of_two() {
        return Err(RSError::SampleCountNotPowerOfTwo { len: len_samples });
    }
    assert_eq!(
        domain.size(),
        len_samples,
        "domain size must match the sample count"
    );

    let missing: Vec<usize> = samples
        .iter()
        .enumerate()
        .filter_map(|(i, s)| s.is_missing().then_some(i))
        .collect();

    let (zero_poly, zero_eval) = zero_polynomial_via_multiplication(domain, &missing)?;

    for (i, (sample, z)) in samples.iter().zip(&zero_eval).enumerate() {
        let z_is_zero: bool = z.is_zero().into();
        if sample.is_missing() != z_is_zero {
            return Err(RSError::InconsistentZeroPolynomial { index: i });
        }
    }

    let poly_evaluations_with_zero: Vec<Scalar> = samples
        .iter()
        .zip(&zero_eval)
        .map(|(sample, z)| match sample {
            Sample::Missing => Scalar::ZERO,
            Sample::Known(value) => value * z,
        })
        .collect();

    let mut poly_with_zero = domain.ifft_scalars(poly_evaluations_with_zero).0;
    scale_poly(&mut poly_with_zero);

    let mut scaled_zero_poly = zero_poly.0;
    scaled_zero_poly.resize(len_samples, Scalar::ZERO);
    scale_poly(&mut scaled_zero_poly);

    let eval_scaled_poly_with_zero = domain.fft_scalars(poly_with_zero.into());
    let eval_scaled_zero_poly = domain.fft_scalars(scaled_zero_poly.into());

    let mut eval_scaled_reconstructed_poly = Vec::with_capacity(len_samples);
    for (i, (numerator, denominator)) in eval_scaled_poly_with_zero
        .iter()
        .zip(&eval_scaled_zero_poly)
        .enumerate()
    {
        let denominator_is_zero: bool = denominator.is_zero().into();
        if denominator_is_zero {
            return Err(RSError::DivisionByZero { index: i });
        }
        let inv_denominator = denominator.invert().expect("checked non-zero above");
        eval_scaled_reconstructed_poly.push(numerator * inv_denominator);
    }

    let mut scaled_reconstructed_poly = domain.ifft_scalars(eval_scaled_reconstructed_poly).0;
    unscale_poly(&mut scaled_reconstructed_poly);

    let reconstructed_data = domain.fft_scalars(scaled_reconstructed_poly.into());

    for (i, sample) in samples.iter().enumerate() {
        if let Sample::Known(value) = sample {
            if reconstructed_data[i] != *value {
                return Err(RSError::ReconstructionMismatch { index: i });
            }
        }
    }

    Ok(reconstructed_data)
}
