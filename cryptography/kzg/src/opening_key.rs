use bls12_381::{
    lincomb::{g1_lincomb, g2_lincomb},
    G1Point, G1Projective, G2Point, G2Projective, Scalar,
};

use crate::errors::KzgError;

/// The powers-of-tau G1 and G2 elements used to verify opening proofs made
/// about a committed polynomial.
#[derive(Clone, Debug)]
pub struct OpeningKey {
    pub g1s: Vec<G1Point>,
    pub g2s: Vec<G2Point>,
    /// The degree-0 term among the G2 powers of tau, i.e. `[1]_2`.
    pub g2_gen: G2Point,
}

impl OpeningKey {
    pub fn new(g1s: Vec<G1Point>, g2s: Vec<G2Point>) -> Self {
        assert!(!g2s.is_empty(), "opening key must have at least one G2 point");
        let g2_gen = g2s[0];
        Self { g1s, g2s, g2_gen }
    }

    /// Commits to a polynomial in monomial form using the G2 powers of tau.
    ///
    /// Used to commit to the vanishing polynomial in multi-point
    /// verification, whose degree is small (the number of points opened at).
    pub fn commit_g2(&self, polynomial: &[Scalar]) -> Result<G2Projective, KzgError> {
        if polynomial.len() > self.g2s.len() {
            return Err(KzgError::PolynomialTooLarge {
                num_coefficients: polynomial.len(),
                max_num_coefficients: self.g2s.len(),
            });
        }
        Ok(g2_lincomb(&self.g2s[0..polynomial.len()], polynomial)
            .expect("points and scalars have equal length by construction"))
    }

    /// Commits to a polynomial in monomial form using the G1 powers of tau.
    ///
    /// Used to commit to the interpolation polynomial in multi-point
    /// verification.
    pub fn commit_g1(&self, polynomial: &[Scalar]) -> Result<G1Projective, KzgError> {
        if polynomial.len() > self.g1s.len() {
            return Err(KzgError::PolynomialTooLarge {
                num_coefficients: polynomial.len(),
                max_num_coefficients: self.g1s.len(),
            });
        }
        Ok(g1_lincomb(&self.g1s[0..polynomial.len()], polynomial)
            .expect("points and scalars have equal length by construction"))
    }
}
