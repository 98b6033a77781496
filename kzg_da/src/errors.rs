use erasure_codes::RSError;
use fk20::Fk20Error;
use kzg::{KzgError, VerifierError};

/// Errors that can occur while parsing a trusted setup from its JSON
/// representation or decoding the hex-encoded points within it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SerializationError {
    /// The top-level JSON document did not match the expected trusted-setup
    /// shape (`g1_monomial`/`g1_lagrange`/`g2_monomial`).
    MalformedTrustedSetupJson,
    /// A hex string did not decode to a valid, correctly-sized curve point.
    CouldNotDeserializePoint { hex: String },
}

/// The unified error type for `kzg_da`'s public API, composing every member
/// crate's error the way `eip7594::errors::Error` composes
/// `SerializationError`/`VerifierError`/`ProverError`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    Serialization(SerializationError),
    Kzg(KzgError),
    Verifier(VerifierError),
    Fk20(Fk20Error),
    Recovery(RSError),
}

impl From<SerializationError> for Error {
    fn from(value: SerializationError) -> Self {
        Self::Serialization(value)
    }
}

impl From<KzgError> for Error {
    fn from(value: KzgError) -> Self {
        Self::Kzg(value)
    }
}

impl From<VerifierError> for Error {
    fn from(value: VerifierError) -> Self {
        Self::Verifier(value)
    }
}

impl From<Fk20Error> for Error {
    fn from(value: Fk20Error) -> Self {
        Self::Fk20(value)
    }
}

impl From<RSError> for Error {
    fn from(value: RSError) -> Self {
        Self::Recovery(value)
    }
}
