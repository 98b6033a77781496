//! General multi-point KZG opening and verification.
//!
//! Unlike [`crate::single`], the points opened at need not have any special
//! structure (they are not required to be roots of unity or a coset of them).
//! Grounded on `kzg_multi_open::naive`, which exists specifically to
//! cross-check the structured FK20 scheme against a slow, general
//! implementation of the same BDFG21-style equation.

use bls12_381::{multi_pairings, traits::*, G1Point, G1Projective, G2Point, G2Prepared, Scalar};
use polynomial::poly_coeff::{lagrange_interpolate, vanishing_poly, PolyCoeff};

use crate::{commit_key::CommitKey, errors::KzgError, opening_key::OpeningKey};

/// A multi-point opening proof: a commitment to the quotient polynomial
/// `Q(x) = (f(x) - I(x)) / Z(x)`, where `I` interpolates the claimed
/// evaluations and `Z` vanishes on the input points.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Proof {
    pub quotient_commitment: G1Point,
}

/// Divides `poly` by the linear factor `(x - z)` using Ruffini's rule,
/// discarding the (assumed-zero) remainder term.
fn divide_by_linear(poly: &[Scalar], z: Scalar) -> Vec<Scalar> {
    let mut quotient = Vec::with_capacity(poly.len());
    let mut k = Scalar::ZERO;

    for coeff in poly.iter().rev() {
        let t = *coeff + k;
        quotient.push(t);
        k = z * t;
    }

    quotient.pop();
    quotient.reverse();
    quotient
}

/// Opens `polynomial` at every point in `input_points`, returning the proof
/// together with the claimed evaluation at each point.
///
/// # Errors
/// Returns [`KzgError::NoPointsToOpen`] if `input_points` is empty, or
/// [`KzgError::PolynomialTooLarge`] if the polynomial exceeds the commit key.
pub fn open(
    commit_key: &CommitKey,
    polynomial: &PolyCoeff,
    input_points: &[Scalar],
) -> Result<(Proof, Vec<Scalar>), KzgError> {
    if input_points.is_empty() {
        return Err(KzgError::NoPointsToOpen);
    }

    let evaluations: Vec<Scalar> = input_points.iter().map(|p| polynomial.eval(p)).collect();

    let coordinates: Vec<(Scalar, Scalar)> = input_points
        .iter()
        .zip(&evaluations)
        .map(|(p, e)| (*p, *e))
        .collect();
    let interpolation = lagrange_interpolate(&coordinates);

    let shifted = polynomial.sub(&interpolation);

    let mut quotient = shifted.0;
    for point in input_points {
        quotient = divide_by_linear(&quotient, *point);
    }

    let quotient_commitment = commit_key.commit_g1(&quotient)?.into();

    Ok((Proof { quotient_commitment }, evaluations))
}

/// Verifies a multi-point opening proof via the pairing equation
/// `e([Q]_1, [Z]_2) == e([f]_1 - [I]_1, [1]_2)`.
///
/// # Errors
/// Returns [`KzgError::MismatchedPointLengths`] if `input_points` and
/// `output_points` differ in length, or [`KzgError::NoPointsToOpen`] if both
/// are empty.
pub fn verify(
    opening_key: &OpeningKey,
    commitment: G1Point,
    proof: &Proof,
    input_points: &[Scalar],
    output_points: &[Scalar],
) -> Result<bool, KzgError> {
    if input_points.len() != output_points.len() {
        return Err(KzgError::MismatchedPointLengths {
            input_points_len: input_points.len(),
            output_points_len: output_points.len(),
        });
    }
    if input_points.is_empty() {
        return Err(KzgError::NoPointsToOpen);
    }

    let coordinates: Vec<(Scalar, Scalar)> = input_points
        .iter()
        .zip(output_points)
        .map(|(p, e)| (*p, *e))
        .collect();
    let interpolation = lagrange_interpolate(&coordinates);
    let vanishing = vanishing_poly(input_points);

    let comm_vanishing: G2Point = opening_key.commit_g2(&vanishing)?.into();
    let comm_interpolation = opening_key.commit_g1(&interpolation)?;
    let comm_minus_interpolation: G1Point =
        (G1Projective::from(commitment) - comm_interpolation).into();

    Ok(multi_pairings(&[
        (
            &proof.quotient_commitment,
            &G2Prepared::from(comm_vanishing),
        ),
        (
            &comm_minus_interpolation,
            &G2Prepared::from(-opening_key.g2_gen),
        ),
    ]))
}
