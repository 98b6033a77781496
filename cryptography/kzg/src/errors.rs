/// Errors returned by the KZG commit/open/verify operations.
///
/// Corresponds to the `BadArgs` status from the reference design: every
/// variant here is a caller-visible precondition violation, not an internal
/// invariant failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KzgError {
    /// The polynomial has more coefficients than the commitment key has
    /// powers of tau for.
    PolynomialTooLarge {
        num_coefficients: usize,
        max_num_coefficients: usize,
    },
    /// A multi-point opening was attempted with no points to open at.
    NoPointsToOpen,
    /// A multi-point opening/verification had mismatched input lengths.
    MismatchedPointLengths {
        input_points_len: usize,
        output_points_len: usize,
    },
}

/// Errors returned by KZG proof verification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerifierError {
    /// The pairing check failed: the proof does not attest to the claimed
    /// evaluation(s).
    InvalidProof,
    /// See [`KzgError`].
    Kzg(KzgError),
}

impl From<KzgError> for VerifierError {
    fn from(value: KzgError) -> Self {
        Self::Kzg(value)
    }
}
