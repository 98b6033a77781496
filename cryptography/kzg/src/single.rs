//! Single-point KZG opening and verification.
//!
//! Grounded on the older `kzg_single_open` snapshot's `compute_proof`/`verify`
//! pair: quotient division by Ruffini's rule, proof as a commitment to the
//! quotient, verification as a two-pairing check.

use bls12_381::{multi_pairings, traits::*, G1Point, G2Point, G2Prepared, Scalar};
use polynomial::PolyCoeff;

use crate::{commit_key::CommitKey, errors::KzgError, opening_key::OpeningKey};

/// A single-point KZG opening proof: a commitment to the quotient polynomial
/// `q(x) = (p(x) - y0) / (x - x0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Proof {
    pub quotient_commitment: G1Point,
    pub claimed_value: Scalar,
}

/// Divides `poly` by the linear factor `(x - z)` using Ruffini's rule.
///
/// Callers are responsible for ensuring `poly(z)` has already been subtracted
/// out so that the division is exact; the remainder term is simply discarded,
/// matching the reference design's quotient-polynomial construction.
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

/// Computes a proof that `polynomial(input_point) == y` for some `y`, which
/// the proof also reports.
///
/// # Errors
/// Returns [`KzgError::PolynomialTooLarge`] if the polynomial has more
/// coefficients than the commit key supports.
pub fn open(
    commit_key: &CommitKey,
    polynomial: &PolyCoeff,
    input_point: Scalar,
) -> Result<Proof, KzgError> {
    let claimed_value = polynomial.eval(&input_point);

    let mut shifted = polynomial.clone();
    if shifted.is_empty() {
        shifted.0.push(Scalar::ZERO);
    }
    shifted[0] -= claimed_value;

    let quotient = divide_by_linear(&shifted, input_point);
    let quotient_commitment = commit_key.commit_g1(&quotient)?.into();

    Ok(Proof {
        quotient_commitment,
        claimed_value,
    })
}

/// Verifies that `commitment` opens to `proof.claimed_value` at `input_point`.
///
/// Checks the pairing equation
/// `e(C - [y]_1, [1]_2) == e(π, [τ]_2 - [z]_2)`.
pub fn verify(
    opening_key: &OpeningKey,
    commitment: G1Point,
    input_point: Scalar,
    proof: &Proof,
) -> bool {
    let inner_a: G1Point =
        (commitment - (opening_key.g1s[0] * proof.claimed_value)).into();
    let inner_b: G2Point =
        (opening_key.g2s[1] - (opening_key.g2s[0] * input_point)).into();
    let prepared_inner_b = G2Prepared::from(-inner_b);

    let prepared_g2_gen = G2Prepared::from(opening_key.g2_gen);

    multi_pairings(&[
        (&inner_a, &prepared_g2_gen),
        (&proof.quotient_commitment, &prepared_inner_b),
    ])
}

#[cfg(test)]
mod tests {
    use bls12_381::group::Group;
    use bls12_381::{G1Projective, G2Projective};

    use super::*;

    fn insecure_setup(max_degree: usize) -> (CommitKey, OpeningKey) {
        let tau = Scalar::from(1234_5678u64);
        let g1 = G1Projective::generator();
        let g2 = G2Projective::generator();

        let mut power = Scalar::ONE;
        let mut g1s = Vec::with_capacity(max_degree + 1);
        let mut g2s = Vec::with_capacity(max_degree + 1);
        for _ in 0..=max_degree {
            g1s.push((g1 * power).into());
            g2s.push((g2 * power).into());
            power *= tau;
        }

        (CommitKey::new(g1s.clone()), OpeningKey::new(g1s, g2s))
    }

    #[test]
    fn open_and_verify_roundtrip() {
        let (ck, ok) = insecure_setup(16);
        let polynomial = PolyCoeff((0..10).map(|i| Scalar::from(i as u64 + 1)).collect());
        let commitment = ck.commit_g1(&polynomial).unwrap().into();

        let input_point = Scalar::from(7u64);
        let proof = open(&ck, &polynomial, input_point).unwrap();

        assert_eq!(proof.claimed_value, polynomial.eval(&input_point));
        assert!(verify(&ok, commitment, input_point, &proof));
    }

    #[test]
    fn verify_rejects_falsified_evaluation() {
        let (ck, ok) = insecure_setup(16);
        let polynomial = PolyCoeff((0..10).map(|i| Scalar::from(i as u64 + 1)).collect());
        let commitment = ck.commit_g1(&polynomial).unwrap().into();

        let input_point = Scalar::from(7u64);
        let mut proof = open(&ck, &polynomial, input_point).unwrap();
        proof.claimed_value += Scalar::ONE;

        assert!(!verify(&ok, commitment, input_point, &proof));
    }

    #[test]
    fn open_rejects_oversized_polynomial() {
        let (ck, _) = insecure_setup(4);
        let polynomial = PolyCoeff((0..10).map(|i| Scalar::from(i as u64)).collect());
        assert!(open(&ck, &polynomial, Scalar::from(1u64)).is_err());
    }
}
