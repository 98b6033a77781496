use bls12_381::{lincomb::g1_lincomb, G1Point, G1Projective, Scalar};

use crate::errors::KzgError;

/// The powers-of-tau G1 elements used to commit to a polynomial in monomial
/// form, and to compute opening proofs (which are themselves commitments to a
/// quotient polynomial).
#[derive(Clone, Debug)]
pub struct CommitKey {
    pub g1s: Vec<G1Point>,
}

impl CommitKey {
    pub fn new(g1s: Vec<G1Point>) -> Self {
        assert!(!g1s.is_empty(), "commit key must have at least one point");
        Self { g1s }
    }

    /// Commits to a polynomial given in monomial form.
    ///
    /// # Errors
    /// Returns [`KzgError::PolynomialTooLarge`] if the polynomial has more
    /// coefficients than this key has powers of tau for.
    pub fn commit_g1(&self, poly_coeff: &[Scalar]) -> Result<G1Projective, KzgError> {
        if poly_coeff.len() > self.g1s.len() {
            return Err(KzgError::PolynomialTooLarge {
                num_coefficients: poly_coeff.len(),
                max_num_coefficients: self.g1s.len(),
            });
        }

        Ok(g1_lincomb(&self.g1s[0..poly_coeff.len()], poly_coeff)
            .expect("points and scalars have equal length by construction"))
    }
}
