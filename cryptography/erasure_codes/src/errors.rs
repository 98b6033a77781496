use polynomial::ZeroPolyError;

/// Errors that can occur while recovering a polynomial's evaluations from a
/// partially-erased sample set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RSError {
    /// `samples.len()` was not a power of two.
    SampleCountNotPowerOfTwo { len: usize },
    /// Propagated from building the vanishing polynomial over the missing set.
    ZeroPoly(ZeroPolyError),
    /// The vanishing polynomial did not vanish exactly on the missing indices
    /// and nowhere else: internal invariant failure, not a caller error.
    InconsistentZeroPolynomial { index: usize },
    /// The scaled vanishing polynomial evaluated to zero at a domain point
    /// during the polynomial-division step, which would make recovery
    /// divide by zero. Indicates more than half the domain is missing, or an
    /// otherwise unrecoverable erasure pattern.
    DivisionByZero { index: usize },
    /// The reconstructed value at a known sample disagreed with the sample
    /// itself: internal invariant failure, not a caller error.
    ReconstructionMismatch { index: usize },
}

impl From<ZeroPolyError> for RSError {
    fn from(value: ZeroPolyError) -> Self {
        Self::ZeroPoly(value)
    }
}
