/// Errors returned by the FK20 multi-point proof machinery.
///
/// [`crate::single::Fk20SingleSettings`] only panics on misuse (its caller is
/// always an internal fixed-size settings object); [`crate::multi`] additionally
/// enforces the Toeplitz-coefficient-length invariant the original C source
/// left as a commented-out, unenforced `CHECK`, so its errors are recoverable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fk20Error {
    /// `compute_all_proofs` was called with a polynomial whose length does
    /// not match the one the settings were built for.
    WrongPolynomialLength { got: usize, expected: usize },
    /// A Toeplitz coefficient vector's length did not match the precomputed
    /// SRS FFT length it was about to be pointwise-multiplied against.
    ToeplitzLengthMismatch {
        toeplitz_len: usize,
        srs_fft_len: usize,
    },
}
