//! Parsing of the Ethereum mainnet KZG ceremony JSON format.
//!
//! Grounded on `eip7594::trusted_setup::TrustedSetup`: the same three hex-string
//! fields (`g1_monomial`, `g1_lagrange`, `g2_monomial`), the same `SubgroupCheck`
//! distinction between `from_json` (checked) and `from_json_unchecked` (fast
//! path for setups already known to be valid).
//!
//! No setup file is embedded here: the real Ethereum ceremony output is not
//! vendored into this crate (see `DESIGN.md`), so there is no
//! `TrustedSetup::default()`/`from_embed`; callers always supply JSON.

use bls12_381::{G1Point, G2Point};
use serde::Deserialize;

use crate::errors::SerializationError;

/// The Ethereum mainnet KZG ceremony trusted setup, in its canonical JSON shape.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct TrustedSetup {
    /// Hex-encoded, uncompressed powers-of-tau G1 elements in monomial basis.
    pub g1_monomial: Vec<String>,
    /// The same G1 elements, in Lagrange basis (the inverse FFT of `g1_monomial`).
    /// Not currently consumed by this crate's monomial-basis commit/open/verify
    /// path; carried for format fidelity with the reference ceremony file.
    pub g1_lagrange: Vec<String>,
    /// Hex-encoded G2 elements: `[1]_2, [s]_2`, and beyond.
    pub g2_monomial: Vec<String>,
}

#[derive(Debug, Copy, Clone)]
enum SubgroupCheck {
    Check,
    NoCheck,
}

impl TrustedSetup {
    /// Parses the ceremony JSON format, checking that every point lies in the
    /// correct subgroup.
    ///
    /// # Errors
    /// Returns [`SerializationError`] if the JSON is malformed or any point
    /// fails to deserialize or fails the subgroup check.
    pub fn from_json(json: &str) -> Result<Self, SerializationError> {
        let setup = Self::parse(json)?;
        setup.g1_points(SubgroupCheck::Check)?;
        setup.g2_points(SubgroupCheck::Check)?;
        Ok(setup)
    }

    /// Parses the ceremony JSON format without checking subgroup membership.
    ///
    /// Use only for setups already known to be valid (e.g. re-parsing a setup
    /// this process itself produced).
    ///
    /// # Errors
    /// Returns [`SerializationError`] if the JSON is malformed or any point
    /// fails to deserialize.
    pub fn from_json_unchecked(json: &str) -> Result<Self, SerializationError> {
        let setup = Self::parse(json)?;
        setup.g1_points(SubgroupCheck::NoCheck)?;
        setup.g2_points(SubgroupCheck::NoCheck)?;
        Ok(setup)
    }

    fn parse(json: &str) -> Result<Self, SerializationError> {
        serde_json::from_str(json).map_err(|_| SerializationError::MalformedTrustedSetupJson)
    }

    pub(crate) fn g1_monomial_points(&self) -> Result<Vec<G1Point>, SerializationError> {
        self.g1_points(SubgroupCheck::NoCheck)
    }

    pub(crate) fn g2_monomial_points(&self) -> Result<Vec<G2Point>, SerializationError> {
        self.g2_points(SubgroupCheck::NoCheck)
    }

    fn g1_points(&self, check: SubgroupCheck) -> Result<Vec<G1Point>, SerializationError> {
        deserialize_g1_points(&self.g1_monomial, check)
    }

    fn g2_points(&self, check: SubgroupCheck) -> Result<Vec<G2Point>, SerializationError> {
        deserialize_g2_points(&self.g2_monomial, check)
    }
}

fn decode_hex_point<const N: usize>(hex_str: &str) -> Result<[u8; N], SerializationError> {
    let without_prefix =
        hex_str
            .strip_prefix("0x")
            .ok_or_else(|| SerializationError::CouldNotDeserializePoint {
                hex: hex_str.to_string(),
            })?;
    let bytes = hex::decode(without_prefix).map_err(|_| {
        SerializationError::CouldNotDeserializePoint {
            hex: hex_str.to_string(),
        }
    })?;
    bytes
        .try_into()
        .map_err(|_| SerializationError::CouldNotDeserializePoint {
            hex: hex_str.to_string(),
        })
}

fn deserialize_g1_points(
    hex_strs: &[String],
    check: SubgroupCheck,
) -> Result<Vec<G1Point>, SerializationError> {
    hex_strs
        .iter()
        .map(|s| {
            let bytes: [u8; 48] = decode_hex_point(s)?;
            let opt = match check {
                SubgroupCheck::Check => G1Point::from_compressed(&bytes),
                SubgroupCheck::NoCheck => G1Point::from_compressed_unchecked(&bytes),
            };
            Option::from(opt).ok_or(SerializationError::CouldNotDeserializePoint {
                hex: s.to_string(),
            })
        })
        .collect()
}

fn deserialize_g2_points(
    hex_strs: &[String],
    check: SubgroupCheck,
) -> Result<Vec<G2Point>, SerializationError> {
    hex_strs
        .iter()
        .map(|s| {
            let bytes: [u8; 96] = decode_hex_point(s)?;
            let opt = match check {
                SubgroupCheck::Check => G2Point::from_compressed(&bytes),
                SubgroupCheck::NoCheck => G2Point::from_compressed_unchecked(&bytes),
            };
            Option::from(opt).ok_or(SerializationError::CouldNotDeserializePoint {
                hex: s.to_string(),
            })
        })
        .collect()
}
