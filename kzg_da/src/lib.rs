pub mod errors;
pub mod trusted_setup;

pub use bls12_381::{G1Point, Scalar};
pub use erasure_codes::Sample;
pub use errors::Error;
pub use kzg::{multi, single};
pub use polynomial::{domain::Domain, PolyCoeff};
pub use trusted_setup::TrustedSetup;

use fk20::{Fk20MultiSettings, Fk20SingleSettings};
use kzg::{commit_key::CommitKey, opening_key::OpeningKey};

/// Assembles the structured reference string and every derived settings
/// object (FFT domains, FK20 Toeplitz precomputation) needed to commit,
/// open, verify, amortise, and recover polynomials of degree `< n` evaluated
/// on a size-`2n` domain.
///
/// Grounded on `eip7594::DASContext`: where that context splits a prover and
/// verifier context (so that prover-only precomputation memory isn't paid by
/// verifier-only callers), this crate has no such asymmetry once the
/// windowed-MSM precomputation path is dropped (see `DESIGN.md`), so a single
/// settings object serves both roles.
#[derive(Debug)]
pub struct KzgSettings {
    n: usize,
    commit_key: CommitKey,
    opening_key: OpeningKey,
    fk20_single: Fk20SingleSettings,
    fk20_multi: Fk20MultiSettings,
}

impl KzgSettings {
    /// Builds settings for polynomials of degree `< n`, with FK20 multi-proof
    /// cosets of size `chunk_len`.
    ///
    /// # Errors
    /// Returns [`Error::Serialization`] if the trusted setup's points fail to
    /// deserialize, or [`Error::Kzg`]-equivalent panics (via the underlying
    /// assertions) if `trusted_setup` does not have at least `n` G1 points or
    /// 2 G2 points.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all))]
    pub fn new(
        trusted_setup: &TrustedSetup,
        n: usize,
        chunk_len: usize,
    ) -> Result<Self, Error> {
        let g1_points = trusted_setup.g1_monomial_points()?;
        let g2_points = trusted_setup.g2_monomial_points()?;

        let commit_key = CommitKey::new(g1_points[0..n].to_vec());
        // The opening key's G1 powers back `multi::verify`'s commitment to the
        // interpolation polynomial (degree < number of points opened at), so
        // they must cover the same range as the commit key, not just the G2
        // count (which only bounds the vanishing-polynomial degree).
        let opening_key = OpeningKey::new(g1_points[0..n].to_vec(), g2_points);

        let fk20_single = Fk20SingleSettings::new(n, &commit_key.g1s);
        let fk20_multi = Fk20MultiSettings::new(n, chunk_len, &commit_key.g1s);

        Ok(Self {
            n,
            commit_key,
            opening_key,
            fk20_single,
            fk20_multi,
        })
    }

    /// The maximum polynomial degree (exclusive) these settings support.
    pub fn n(&self) -> usize {
        self.n
    }

    /// The size-`2n` domain over which codewords (full evaluation sets used
    /// by FK20 and recovery) live.
    pub fn codeword_domain(&self) -> &Domain {
        self.fk20_single.domain()
    }

    /// Commits to a polynomial of degree `< n`.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all))]
    pub fn commit(&self, polynomial: &PolyCoeff) -> Result<G1Point, Error> {
        Ok(self.commit_key.commit_g1(polynomial)?.into())
    }

    /// Computes a single-point opening proof.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all))]
    pub fn open(
        &self,
        polynomial: &PolyCoeff,
        input_point: Scalar,
    ) -> Result<single::Proof, Error> {
        Ok(single::open(&self.commit_key, polynomial, input_point)?)
    }

    /// Verifies a single-point opening proof.
    pub fn verify(&self, commitment: G1Point, input_point: Scalar, proof: &single::Proof) -> bool {
        single::verify(&self.opening_key, commitment, input_point, proof)
    }

    /// Computes a multi-point opening proof over an arbitrary point set.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all))]
    pub fn open_multi(
        &self,
        polynomial: &PolyCoeff,
        input_points: &[Scalar],
    ) -> Result<(multi::Proof, Vec<Scalar>), Error> {
        Ok(multi::open(&self.commit_key, polynomial, input_points)?)
    }

    /// Verifies a multi-point opening proof.
    pub fn verify_multi(
        &self,
        commitment: G1Point,
        proof: &multi::Proof,
        input_points: &[Scalar],
        output_points: &[Scalar],
    ) -> Result<bool, Error> {
        Ok(multi::verify(
            &self.opening_key,
            commitment,
            proof,
            input_points,
            output_points,
        )?)
    }

    /// Computes all `2n` single-point opening proofs in one amortised pass.
    ///
    /// `proofs[i]` attests to the evaluation of `polynomial` at
    /// `self.codeword_domain().roots[i]`.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all))]
    pub fn compute_all_proofs_single(&self, polynomial: &PolyCoeff) -> Vec<G1Point> {
        self.fk20_single.compute_all_proofs(polynomial)
    }

    /// Computes all `n / chunk_len` coset opening proofs in one amortised pass.
    ///
    /// `proofs[i]` attests to the coset starting at
    /// `self.codeword_domain().roots[i * chunk_len]`.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all))]
    pub fn compute_all_proofs_multi(&self, polynomial: &PolyCoeff) -> Result<Vec<G1Point>, Error> {
        Ok(self.fk20_multi.compute_all_proofs(polynomial)?)
    }

    /// Reconstructs a full `2n`-element codeword from partial samples, up to
    /// `n` of which may be missing.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all))]
    pub fn recover(&self, samples: &[Sample]) -> Result<Vec<Scalar>, Error> {
        Ok(erasure_codes::recover_polynomial_from_samples(
            samples,
            self.codeword_domain(),
        )?)
    }
}
